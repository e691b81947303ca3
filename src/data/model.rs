use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Column headers of the catalogue spreadsheet
// ---------------------------------------------------------------------------

pub const COL_NAME: &str = "Nome do item";
pub const COL_CATEGORY: &str = "Família Olfativa";
pub const COL_KIND: &str = "Tipo";
pub const COL_PRICE: &str = "Preço Unitário";
pub const COL_STOCK: &str = "Estoque";

/// Every header a catalogue file must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [COL_NAME, COL_CATEGORY, COL_KIND, COL_PRICE, COL_STOCK];

// ---------------------------------------------------------------------------
// Price – a totally ordered unit price
// ---------------------------------------------------------------------------

/// Unit price usable as a set / map key.
///
/// Ordering follows [`f64::total_cmp`], so sorting a price domain is numeric.
#[derive(Debug, Clone, Copy)]
pub struct Price(pub f64);

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Price {}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {:.2}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Availability – derived from the stock column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    /// Strictly positive stock means the product ships right away.
    pub fn from_stock(stock: i64) -> Self {
        if stock > 0 {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Unavailable => "unavailable",
        }
    }

    /// Answer shown in the "Disponível" column and on the donut.
    pub fn caption(self) -> &'static str {
        match self {
            Availability::Available => "Sim",
            Availability::Unavailable => "Não",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Product – one row of the spreadsheet
// ---------------------------------------------------------------------------

/// A single catalogue entry. The typed fields drive filtering and
/// aggregation; `cells` keeps the whole source row for display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[serde(rename = "Nome do item")]
    pub name: String,
    /// Olfactory family; blank cells load as `None`.
    #[serde(rename = "Família Olfativa")]
    pub category: Option<String>,
    #[serde(rename = "Tipo")]
    pub kind: String,
    #[serde(rename = "Preço Unitário")]
    pub unit_price: f64,
    #[serde(rename = "Estoque")]
    pub stock: i64,
    /// Every field of the source row, aligned with [`InventoryTable::columns`].
    #[serde(skip)]
    pub cells: Vec<String>,
}

impl Product {
    pub fn price(&self) -> Price {
        Price(self.unit_price)
    }

    pub fn availability(&self) -> Availability {
        Availability::from_stock(self.stock)
    }
}

// ---------------------------------------------------------------------------
// Domains – sorted distinct values of each filterable column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Domains {
    pub categories: BTreeSet<String>,
    pub kinds: BTreeSet<String>,
    pub prices: BTreeSet<Price>,
    pub names: BTreeSet<String>,
}

impl Domains {
    /// Collect the distinct values of every filterable column. Missing
    /// categories are left out of the category domain.
    pub fn from_products(products: &[Product]) -> Self {
        let mut domains = Domains::default();
        for p in products {
            if let Some(cat) = &p.category {
                domains.categories.insert(cat.clone());
            }
            domains.kinds.insert(p.kind.clone());
            domains.prices.insert(p.price());
            domains.names.insert(p.name.clone());
        }
        domains
    }
}

// ---------------------------------------------------------------------------
// InventoryTable – the complete loaded catalogue
// ---------------------------------------------------------------------------

/// The parsed catalogue with its pre-computed filter domains.
#[derive(Debug, Clone, Default)]
pub struct InventoryTable {
    /// Source header row, in file order, including columns the schema does
    /// not use.
    pub columns: Vec<String>,
    /// All products, in file order.
    pub products: Vec<Product>,
    pub domains: Domains,
}

impl InventoryTable {
    /// Table whose columns are exactly [`REQUIRED_COLUMNS`].
    pub fn from_products(products: Vec<Product>) -> Self {
        let columns = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        Self::with_columns(columns, products)
    }

    pub fn with_columns(columns: Vec<String>, products: Vec<Product>) -> Self {
        let domains = Domains::from_products(&products);
        InventoryTable {
            columns,
            products,
            domains,
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn product(name: &str, category: Option<&str>, kind: &str, price: f64, stock: i64) -> Product {
        Product {
            name: name.to_string(),
            category: category.map(str::to_string),
            kind: kind.to_string(),
            unit_price: price,
            stock,
            cells: vec![
                name.to_string(),
                category.unwrap_or_default().to_string(),
                kind.to_string(),
                price.to_string(),
                stock.to_string(),
            ],
        }
    }

    /// The two-row catalogue used across the pipeline tests.
    pub(crate) fn floral_and_woody() -> InventoryTable {
        InventoryTable::from_products(vec![
            product("A", Some("Floral"), "Perfume", 100.0, 2),
            product("B", Some("Woody"), "Perfume", 50.0, 0),
        ])
    }

    #[test]
    fn availability_is_strictly_positive_stock() {
        assert_eq!(Availability::from_stock(1), Availability::Available);
        assert_eq!(Availability::from_stock(0), Availability::Unavailable);
        assert_eq!(Availability::from_stock(-3), Availability::Unavailable);
    }

    #[test]
    fn availability_captions_answer_yes_or_no() {
        assert_eq!(Availability::Available.caption(), "Sim");
        assert_eq!(Availability::Unavailable.caption(), "Não");
    }

    #[test]
    fn price_domain_sorts_numerically() {
        let table = InventoryTable::from_products(vec![
            product("x", None, "Perfume", 120.0, 1),
            product("y", None, "Perfume", 9.5, 1),
            product("z", None, "Perfume", 45.0, 1),
        ]);
        let prices: Vec<f64> = table.domains.prices.iter().map(|p| p.0).collect();
        assert_eq!(prices, vec![9.5, 45.0, 120.0]);
    }

    #[test]
    fn domains_skip_missing_categories() {
        let table = InventoryTable::from_products(vec![
            product("a", Some("Citrus"), "Body splash", 30.0, 1),
            product("b", None, "Perfume", 80.0, 0),
        ]);
        assert_eq!(
            table.domains.categories.iter().collect::<Vec<_>>(),
            vec!["Citrus"]
        );
        assert_eq!(table.domains.kinds.len(), 2);
        assert_eq!(table.domains.names.len(), 2);
    }

    #[test]
    fn from_products_uses_the_schema_columns() {
        let table = floral_and_woody();
        assert_eq!(table.columns, REQUIRED_COLUMNS.to_vec());
        assert_eq!(table.products[0].cells.len(), table.columns.len());
    }

    #[test]
    fn empty_table_has_empty_domains() {
        let table = InventoryTable::from_products(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.domains, Domains::default());
    }

    #[test]
    fn price_display_uses_reais() {
        assert_eq!(Price(89.9).to_string(), "R$ 89.90");
    }
}
