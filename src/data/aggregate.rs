//! Aggregate views over the full catalogue.
//!
//! Everything here reads the whole table, never the filtered subset, and is
//! recomputed on every render pass.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use crate::config::PAYMENT_METHOD;

use super::model::{Availability, InventoryTable};

// ---------------------------------------------------------------------------
// Value counts
// ---------------------------------------------------------------------------

/// Count occurrences, most frequent first; ties keep first-seen order.
fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut order: Vec<K> = Vec::new();
    let mut counts: HashMap<K, usize> = HashMap::new();
    for v in values {
        let n = counts.entry(v.clone()).or_insert(0);
        if *n == 0 {
            order.push(v);
        }
        *n += 1;
    }
    let mut out: Vec<(K, usize)> = order
        .into_iter()
        .map(|k| {
            let n = counts[&k];
            (k, n)
        })
        .collect();
    // Stable sort keeps first-seen order among equal counts.
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Products per category. Rows without a category are not counted.
pub fn category_counts(table: &InventoryTable) -> Vec<(String, usize)> {
    value_counts(table.products.iter().filter_map(|p| p.category.clone()))
}

/// Products per availability label, only for labels that occur.
pub fn availability_counts(table: &InventoryTable) -> Vec<(Availability, usize)> {
    value_counts(table.products.iter().map(|p| p.availability()))
}

// ---------------------------------------------------------------------------
// Price histogram
// ---------------------------------------------------------------------------

/// Equal-width bins from the lowest to the highest price.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Left edge of the first bin.
    pub start: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// `[left, right)` edges of bin `i`.
    pub fn bin_range(&self, i: usize) -> (f64, f64) {
        let left = self.start + self.bin_width * i as f64;
        (left, left + self.bin_width)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bucket the unit prices into `bins` equal-width bins.
///
/// The last bin is closed on the right so the maximum price is counted.
/// Returns `None` for an empty table or when `bins` is zero.
pub fn price_histogram(table: &InventoryTable, bins: usize) -> Option<Histogram> {
    if bins == 0 {
        return None;
    }
    let prices: Vec<f64> = table
        .products
        .iter()
        .map(|p| p.unit_price)
        .filter(|v| v.is_finite())
        .collect();
    let min = prices.iter().copied().reduce(f64::min)?;
    let max = prices.iter().copied().reduce(f64::max)?;

    let (start, end) = if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    };
    let bin_width = (end - start) / bins as f64;

    let mut counts = vec![0usize; bins];
    for price in prices {
        let idx = (((price - start) / bin_width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Some(Histogram {
        start,
        bin_width,
        counts,
    })
}

// ---------------------------------------------------------------------------
// Summary metrics
// ---------------------------------------------------------------------------

/// Where the headline figures come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricsPolicy {
    /// Derived from the loaded table.
    #[default]
    Computed,
    /// The figures printed on the shop's catalogue page.
    Published,
}

impl MetricsPolicy {
    pub const PUBLISHED_TOTAL: usize = 32;
    pub const PUBLISHED_AVAILABLE: usize = 23;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryMetrics {
    pub total_products: usize,
    pub available_products: usize,
    pub payment_method: String,
}

impl SummaryMetrics {
    fn zero() -> Self {
        SummaryMetrics {
            total_products: 0,
            available_products: 0,
            payment_method: String::new(),
        }
    }
}

pub fn summary_metrics(table: &InventoryTable, policy: MetricsPolicy) -> SummaryMetrics {
    if table.is_empty() {
        return SummaryMetrics::zero();
    }
    let (total_products, available_products) = match policy {
        MetricsPolicy::Published => (
            MetricsPolicy::PUBLISHED_TOTAL,
            MetricsPolicy::PUBLISHED_AVAILABLE,
        ),
        MetricsPolicy::Computed => {
            let in_stock: BTreeSet<&str> = table
                .products
                .iter()
                .filter(|p| p.availability() == Availability::Available)
                .map(|p| p.name.as_str())
                .collect();
            (table.domains.names.len(), in_stock.len())
        }
    };
    SummaryMetrics {
        total_products,
        available_products,
        payment_method: PAYMENT_METHOD.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PRICE_BINS;
    use crate::data::model::tests::{floral_and_woody, product};

    #[test]
    fn category_counts_for_two_families() {
        let counts = category_counts(&floral_and_woody());
        assert_eq!(
            counts,
            vec![("Floral".to_string(), 1), ("Woody".to_string(), 1)]
        );
    }

    #[test]
    fn category_counts_most_frequent_first() {
        let table = InventoryTable::from_products(vec![
            product("a", Some("Citrus"), "Perfume", 10.0, 1),
            product("b", Some("Woody"), "Perfume", 10.0, 1),
            product("c", Some("Woody"), "Perfume", 10.0, 1),
            product("d", None, "Perfume", 10.0, 1),
        ]);
        assert_eq!(
            category_counts(&table),
            vec![("Woody".to_string(), 2), ("Citrus".to_string(), 1)]
        );
    }

    #[test]
    fn availability_counts_split_on_stock() {
        let counts = availability_counts(&floral_and_woody());
        assert_eq!(
            counts,
            vec![(Availability::Available, 1), (Availability::Unavailable, 1)]
        );
    }

    #[test]
    fn availability_counts_only_present_labels() {
        let table = InventoryTable::from_products(vec![
            product("a", Some("Citrus"), "Perfume", 10.0, 3),
            product("b", Some("Woody"), "Perfume", 12.0, 1),
        ]);
        assert_eq!(
            availability_counts(&table),
            vec![(Availability::Available, 2)]
        );
    }

    #[test]
    fn counts_sum_to_row_count() {
        let table = InventoryTable::from_products(vec![
            product("a", Some("Citrus"), "Perfume", 10.0, 3),
            product("b", Some("Woody"), "Perfume", 12.0, 0),
            product("c", Some("Woody"), "Body splash", 18.0, -1),
            product("d", Some("Floral"), "Perfume", 95.0, 8),
        ]);
        let by_category: usize = category_counts(&table).iter().map(|(_, n)| n).sum();
        let by_availability: usize = availability_counts(&table).iter().map(|(_, n)| n).sum();
        assert_eq!(by_category, table.len());
        assert_eq!(by_availability, table.len());
    }

    #[test]
    fn histogram_spans_min_to_max() {
        let prices = [10.0, 20.0, 30.0, 55.0, 110.0];
        let table = InventoryTable::from_products(
            prices
                .iter()
                .enumerate()
                .map(|(i, &p)| product(&format!("p{i}"), Some("Floral"), "Perfume", p, 1))
                .collect(),
        );
        let hist = price_histogram(&table, PRICE_BINS).unwrap();

        assert_eq!(hist.counts.len(), PRICE_BINS);
        assert_eq!(hist.start, 10.0);
        assert_eq!(hist.bin_width, 10.0);
        assert_eq!(hist.total(), prices.len());
        assert_eq!(hist.counts[0], 1);
        assert_eq!(hist.counts[1], 1);
        assert_eq!(hist.counts[2], 1);
        assert_eq!(hist.counts[4], 1);
        // The maximum lands in the last, right-closed bin.
        assert_eq!(hist.counts[9], 1);
        assert_eq!(hist.bin_range(9), (100.0, 110.0));
    }

    #[test]
    fn histogram_with_a_single_price() {
        let table = InventoryTable::from_products(vec![
            product("a", Some("Floral"), "Perfume", 42.0, 1),
            product("b", Some("Floral"), "Perfume", 42.0, 0),
        ]);
        let hist = price_histogram(&table, PRICE_BINS).unwrap();

        assert_eq!(hist.total(), 2);
        assert!(hist.bin_width > 0.0);
        assert_eq!(hist.counts.iter().filter(|&&n| n > 0).count(), 1);
        let (_, end) = hist.bin_range(PRICE_BINS - 1);
        assert!(hist.start < 42.0 && 42.0 < end);
    }

    #[test]
    fn histogram_of_empty_table_is_none() {
        assert_eq!(price_histogram(&InventoryTable::default(), PRICE_BINS), None);
    }

    #[test]
    fn computed_metrics_count_distinct_names() {
        let table = InventoryTable::from_products(vec![
            product("A", Some("Floral"), "Perfume", 100.0, 2),
            product("A", Some("Floral"), "Body splash", 40.0, 0),
            product("B", Some("Woody"), "Perfume", 50.0, 0),
        ]);
        let metrics = summary_metrics(&table, MetricsPolicy::Computed);

        assert_eq!(metrics.total_products, 2);
        assert_eq!(metrics.available_products, 1);
        assert_eq!(metrics.payment_method, "Pix");
    }

    #[test]
    fn published_metrics_are_fixed() {
        let metrics = summary_metrics(&floral_and_woody(), MetricsPolicy::Published);
        assert_eq!(metrics.total_products, 32);
        assert_eq!(metrics.available_products, 23);
        assert_eq!(metrics.payment_method, "Pix");
    }

    #[test]
    fn metrics_degrade_to_zero_on_empty_table() {
        for policy in [MetricsPolicy::Computed, MetricsPolicy::Published] {
            let metrics = summary_metrics(&InventoryTable::default(), policy);
            assert_eq!(metrics, SummaryMetrics::zero());
        }
    }

    #[test]
    fn aggregates_of_empty_table_are_empty() {
        let table = InventoryTable::default();
        assert!(category_counts(&table).is_empty());
        assert!(availability_counts(&table).is_empty());
    }
}
