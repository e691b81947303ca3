use std::collections::BTreeSet;
use std::sync::Arc;

use crate::dashboard::{render, Dashboard};
use crate::data::aggregate::MetricsPolicy;
use crate::data::cache::TableCache;
use crate::data::error::LoadResult;
use crate::data::filter::{toggle, FilterSelection};
use crate::data::loader::{self, Source};
use crate::data::model::{InventoryTable, Price};

// ---------------------------------------------------------------------------
// Filterable columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    Category,
    Kind,
    Price,
    Name,
}

impl FilterColumn {
    pub fn title(self) -> &'static str {
        match self {
            FilterColumn::Category => "Família Olfativa",
            FilterColumn::Kind => "Tipo",
            FilterColumn::Price => "Valor",
            FilterColumn::Name => "Produto",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Where the current table came from.
    pub source: Source,

    /// Loaded tables, keyed by source.
    pub cache: TableCache,

    /// Table on screen.
    pub table: Arc<InventoryTable>,

    /// Per-column filter selections.
    pub selection: FilterSelection,

    pub metrics_policy: MetricsPolicy,

    /// Result of the last render pass (cached until something changes).
    pub dashboard: Dashboard,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load `source` and build the initial state. A failure here ends the
    /// session before any window opens.
    pub fn open(source: Source) -> LoadResult<Self> {
        let mut cache = TableCache::default();
        let table = cache.get_or_load(&source, loader::load)?;
        log::info!("Loaded {} products from {source}", table.len());
        Ok(Self::with_table(source, cache, table))
    }

    fn with_table(source: Source, cache: TableCache, table: Arc<InventoryTable>) -> Self {
        let selection = FilterSelection::all(&table.domains);
        let metrics_policy = MetricsPolicy::default();
        let dashboard = render(&table, &selection, metrics_policy);
        Self {
            source,
            cache,
            table,
            selection,
            metrics_policy,
            dashboard,
            status_message: None,
        }
    }

    /// Swap in a newly loaded table and reset every filter to "all".
    pub fn set_table(&mut self, source: Source, table: Arc<InventoryTable>) {
        self.selection = FilterSelection::all(&table.domains);
        self.source = source;
        self.table = table;
        self.status_message = None;
        self.refresh();
    }

    /// Switch to another source, using the cache when possible. On failure
    /// the current table stays on screen and the error is shown.
    pub fn switch_source(&mut self, source: Source) {
        match self.cache.get_or_load(&source, loader::load) {
            Ok(table) => {
                log::info!(
                    "Loaded {} products from {source} ({} source(s) cached)",
                    table.len(),
                    self.cache.len()
                );
                self.set_table(source, table);
            }
            Err(e) => {
                log::error!("Failed to load {source}: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Drop the cached copy of the current source and fetch it again.
    pub fn reload(&mut self) {
        self.cache.invalidate(&self.source);
        self.switch_source(self.source.clone());
    }

    /// Recompute the dashboard after a filter or policy change.
    pub fn refresh(&mut self) {
        self.dashboard = render(&self.table, &self.selection, self.metrics_policy);
    }

    pub fn set_metrics_policy(&mut self, policy: MetricsPolicy) {
        if self.metrics_policy != policy {
            self.metrics_policy = policy;
            self.refresh();
        }
    }

    pub fn toggle_category(&mut self, value: &str) {
        toggle(&mut self.selection.categories, value);
        self.refresh();
    }

    pub fn toggle_kind(&mut self, value: &str) {
        toggle(&mut self.selection.kinds, value);
        self.refresh();
    }

    pub fn toggle_price(&mut self, value: &Price) {
        toggle(&mut self.selection.prices, value);
        self.refresh();
    }

    pub fn toggle_name(&mut self, value: &str) {
        toggle(&mut self.selection.names, value);
        self.refresh();
    }

    /// Select all values in a column.
    pub fn select_all(&mut self, column: FilterColumn) {
        let domains = &self.table.domains;
        match column {
            FilterColumn::Category => self.selection.categories = domains.categories.clone(),
            FilterColumn::Kind => self.selection.kinds = domains.kinds.clone(),
            FilterColumn::Price => self.selection.prices = domains.prices.clone(),
            FilterColumn::Name => self.selection.names = domains.names.clone(),
        }
        self.refresh();
    }

    /// Deselect all values in a column.
    pub fn select_none(&mut self, column: FilterColumn) {
        match column {
            FilterColumn::Category => self.selection.categories = BTreeSet::new(),
            FilterColumn::Kind => self.selection.kinds = BTreeSet::new(),
            FilterColumn::Price => self.selection.prices = BTreeSet::new(),
            FilterColumn::Name => self.selection.names = BTreeSet::new(),
        }
        self.refresh();
    }
}
