use anyhow::{Context, Result};
use serde::Serialize;

/// One catalogue row, with the spreadsheet's own headers.
#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "Nome do item")]
    name: String,
    #[serde(rename = "Família Olfativa")]
    family: Option<&'a str>,
    #[serde(rename = "Tipo")]
    kind: &'a str,
    #[serde(rename = "Preço Unitário")]
    price: f64,
    #[serde(rename = "Estoque")]
    stock: i64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `0..n`.
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let families = ["Floral", "Amadeirado", "Cítrico", "Oriental", "Gourmand"];
    let kinds = [("Perfume", 120.0), ("Body splash", 45.0), ("Creme", 35.0)];
    let notes = [
        "Aurora", "Brisa", "Cedro", "Dália", "Essência", "Flor de Sal", "Jasmim",
        "Lua", "Madeira Nobre", "Noite", "Orvalho", "Pitanga",
    ];

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_inventory.csv".to_string());
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut rows = 0usize;
    for (i, note) in notes.iter().enumerate() {
        for &(kind, base_price) in &kinds {
            // Roughly one product in twelve has no family recorded.
            let family = match rng.below(12) {
                0 => None,
                _ => Some(families[i % families.len()]),
            };
            // Prices move in R$ 5 steps so several products share a price.
            let price = base_price + 5.0 * rng.below(6) as f64;
            // About a third of the catalogue is out of stock.
            let stock = match rng.below(3) {
                0 => 0,
                _ => 1 + rng.below(9) as i64,
            };

            writer.serialize(Row {
                name: format!("{note} {kind}"),
                family,
                kind,
                price,
                stock,
            })?;
            rows += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} products to {output_path}");
    Ok(())
}
