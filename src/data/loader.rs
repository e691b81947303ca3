use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::{CATALOG_URL, FETCH_TIMEOUT};

use super::error::{LoadError, LoadResult};
use super::model::{InventoryTable, Product, REQUIRED_COLUMNS};

// ---------------------------------------------------------------------------
// Source – where a catalogue comes from
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    /// CSV served over HTTP(S).
    Remote(String),
    /// CSV on the local filesystem.
    Local(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Source::Remote(CATALOG_URL.to_string())
    }
}

impl Source {
    /// Cache key: the URL or the path as text.
    pub fn key(&self) -> String {
        match self {
            Source::Remote(url) => url.clone(),
            Source::Local(path) => path.display().to_string(),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote(url) => write!(f, "{url}"),
            Source::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a catalogue. Any failure aborts the load; nothing is retried and no
/// partial table is returned.
pub fn load(source: &Source) -> LoadResult<InventoryTable> {
    match source {
        Source::Remote(url) => fetch(url),
        Source::Local(path) => load_file(path),
    }
}

fn fetch(url: &str) -> LoadResult<InventoryTable> {
    log::info!("Fetching catalogue from {url}");
    let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();
    let response = agent.get(url).call().map_err(|e| LoadError::Fetch {
        url: url.to_string(),
        source: Box::new(e),
    })?;
    parse_csv(response.into_reader())
}

fn load_file(path: &Path) -> LoadResult<InventoryTable> {
    log::info!("Reading catalogue from {}", path.display());
    let file = std::fs::File::open(path)?;
    parse_csv(file)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse catalogue CSV. The header row is checked against
/// [`REQUIRED_COLUMNS`] before any row is decoded. Every source column,
/// including ones the schema does not use, is kept on the table.
pub fn parse_csv<R: Read>(input: R) -> LoadResult<InventoryTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::SchemaMismatch { missing });
    }

    let mut products = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        // Header is line 1.
        let fallback_line = row_no as u64 + 2;
        let row_error = |source: csv::Error| LoadError::Row {
            line: source.position().map_or(fallback_line, |p| p.line()),
            source,
        };

        let record = result.map_err(row_error)?;
        let mut product: Product = record.deserialize(Some(&headers)).map_err(row_error)?;
        product.cells = record.iter().map(str::to_string).collect();
        products.push(product);
    }

    let columns = headers.iter().map(str::to_string).collect();
    Ok(InventoryTable::with_columns(columns, products))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Nome do item,Família Olfativa,Tipo,Preço Unitário,Estoque";

    fn csv_of(rows: &[&str]) -> String {
        let mut text = HEADER.to_string();
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn parses_typed_rows_in_file_order() {
        let text = csv_of(&["A,Floral,Perfume,100,2", "B,Woody,Perfume,50.5,0"]);
        let table = parse_csv(text.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.products[0].name, "A");
        assert_eq!(table.products[0].category.as_deref(), Some("Floral"));
        assert_eq!(table.products[1].unit_price, 50.5);
        assert_eq!(table.products[1].stock, 0);
    }

    #[test]
    fn blank_category_loads_as_none() {
        let text = csv_of(&["C,,Body splash,30,4"]);
        let table = parse_csv(text.as_bytes()).unwrap();

        assert_eq!(table.products[0].category, None);
        assert!(table.domains.categories.is_empty());
    }

    #[test]
    fn extra_columns_are_kept() {
        let text = "Código,Nome do item,Família Olfativa,Tipo,Preço Unitário,Estoque,Obs\n\
                    7,A,Floral,Perfume,100,2,limited";
        let table = parse_csv(text.as_bytes()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.products[0].kind, "Perfume");
        assert_eq!(
            table.columns,
            vec!["Código", "Nome do item", "Família Olfativa", "Tipo", "Preço Unitário", "Estoque", "Obs"]
        );
        assert_eq!(
            table.products[0].cells,
            vec!["7", "A", "Floral", "Perfume", "100", "2", "limited"]
        );
    }

    #[test]
    fn quoted_fields_and_padding() {
        let text = csv_of(&[r#""Eau, nuit", Oriental , Perfume , 210.0 , 3"#]);
        let table = parse_csv(text.as_bytes()).unwrap();

        assert_eq!(table.products[0].name, "Eau, nuit");
        assert_eq!(table.products[0].category.as_deref(), Some("Oriental"));
        assert_eq!(table.products[0].stock, 3);
    }

    #[test]
    fn missing_columns_fail_fast() {
        let text = "Nome do item,Tipo,Estoque\nA,Perfume,2";
        match parse_csv(text.as_bytes()) {
            Err(LoadError::SchemaMismatch { missing }) => {
                assert_eq!(missing, vec!["Família Olfativa", "Preço Unitário"]);
            }
            other => panic!("expected schema mismatch, got {other:?}"),
        }
    }

    #[test]
    fn mistyped_cell_reports_its_line() {
        let text = csv_of(&["A,Floral,Perfume,100,2", "B,Woody,Perfume,cheap,1"]);
        match parse_csv(text.as_bytes()) {
            Err(LoadError::Row { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected row error, got {other:?}"),
        }
    }

    #[test]
    fn header_only_yields_empty_table() {
        let table = parse_csv(HEADER.as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn missing_local_file_is_io_error() {
        let source = Source::Local(PathBuf::from("/definitely/not/here.csv"));
        assert!(matches!(load(&source), Err(LoadError::Io(_))));
    }

    #[test]
    fn fetch_failure_is_reported() {
        // Nothing listens on port 1, so the connection is refused.
        let source = Source::Remote("http://127.0.0.1:1/catalogue.csv".to_string());
        match load(&source) {
            Err(LoadError::Fetch { url, .. }) => assert_eq!(url, "http://127.0.0.1:1/catalogue.csv"),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[test]
    fn default_source_is_the_published_catalogue() {
        assert_eq!(Source::default().key(), CATALOG_URL);
    }
}
