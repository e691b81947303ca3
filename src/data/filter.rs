use std::borrow::Borrow;
use std::collections::BTreeSet;

use super::model::{Domains, InventoryTable, Price, Product};

// ---------------------------------------------------------------------------
// Filter selection: which values are allowed per filterable column
// ---------------------------------------------------------------------------

/// Allowed values for each filterable column.
///
/// A row passes when its value is in every set. An empty set therefore
/// hides everything, and a row with no category never passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub categories: BTreeSet<String>,
    pub kinds: BTreeSet<String>,
    pub prices: BTreeSet<Price>,
    pub names: BTreeSet<String>,
}

impl FilterSelection {
    /// Every observed value selected, i.e. no filtering.
    pub fn all(domains: &Domains) -> Self {
        FilterSelection {
            categories: domains.categories.clone(),
            kinds: domains.kinds.clone(),
            prices: domains.prices.clone(),
            names: domains.names.clone(),
        }
    }

    /// Whether `product` satisfies all four membership tests.
    pub fn matches(&self, product: &Product) -> bool {
        product
            .category
            .as_ref()
            .is_some_and(|c| self.categories.contains(c))
            && self.kinds.contains(&product.kind)
            && self.prices.contains(&product.price())
            && self.names.contains(&product.name)
    }
}

/// Return indices of products that pass the selection, in table order.
pub fn filtered_indices(table: &InventoryTable, selection: &FilterSelection) -> Vec<usize> {
    table
        .products
        .iter()
        .enumerate()
        .filter(|(_, p)| selection.matches(p))
        .map(|(i, _)| i)
        .collect()
}

/// Flip a single value in or out of a selection set.
pub fn toggle<T, Q>(selected: &mut BTreeSet<T>, value: &Q)
where
    T: Ord + Borrow<Q>,
    Q: Ord + ToOwned<Owned = T> + ?Sized,
{
    if !selected.remove(value) {
        selected.insert(value.to_owned());
    }
}
