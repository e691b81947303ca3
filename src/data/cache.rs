use std::collections::HashMap;
use std::sync::Arc;

use super::error::LoadResult;
use super::loader::Source;
use super::model::InventoryTable;

// ---------------------------------------------------------------------------
// TableCache – one loaded table per source
// ---------------------------------------------------------------------------

/// Keeps every successfully loaded table, keyed by [`Source::key`], so that
/// re-rendering never hits the network again.
#[derive(Debug, Default)]
pub struct TableCache {
    entries: HashMap<String, Arc<InventoryTable>>,
}

impl TableCache {
    /// Return the cached table for `source`, or run `load` and remember the
    /// result. Failed loads are not cached.
    pub fn get_or_load<F>(&mut self, source: &Source, load: F) -> LoadResult<Arc<InventoryTable>>
    where
        F: FnOnce(&Source) -> LoadResult<InventoryTable>,
    {
        let key = source.key();
        if let Some(table) = self.entries.get(&key) {
            log::debug!("Catalogue cache hit for {key}");
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(load(source)?);
        self.entries.insert(key, Arc::clone(&table));
        Ok(table)
    }

    /// Forget the table for `source` so the next lookup loads it again.
    pub fn invalidate(&mut self, source: &Source) -> bool {
        self.entries.remove(&source.key()).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
