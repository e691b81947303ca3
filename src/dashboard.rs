use crate::config::PRICE_BINS;
use crate::data::aggregate::{
    availability_counts, category_counts, price_histogram, summary_metrics, Histogram,
    MetricsPolicy, SummaryMetrics,
};
use crate::data::filter::{filtered_indices, FilterSelection};
use crate::data::model::{Availability, InventoryTable, Product};

// ---------------------------------------------------------------------------
// Dashboard – everything one render pass needs
// ---------------------------------------------------------------------------

/// Output of one pass of the pipeline. Holds row indices, not rows, so it
/// must be presented against the table it was rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Indices of rows passing the filters, in table order.
    pub visible: Vec<usize>,
    pub metrics: SummaryMetrics,
    pub categories: Vec<(String, usize)>,
    pub availability: Vec<(Availability, usize)>,
    pub prices: Option<Histogram>,
}

/// Run filtering and aggregation. Aggregates always see the full table.
pub fn render(table: &InventoryTable, selection: &FilterSelection, policy: MetricsPolicy) -> Dashboard {
    Dashboard {
        visible: filtered_indices(table, selection),
        metrics: summary_metrics(table, policy),
        categories: category_counts(table),
        availability: availability_counts(table),
        prices: price_histogram(table, PRICE_BINS),
    }
}

// ---------------------------------------------------------------------------
// Sink – the rendering capability
// ---------------------------------------------------------------------------

pub const METRIC_TOTAL: &str = "Total de produtos cadastrados";
pub const METRIC_AVAILABLE: &str = "Produtos disponíveis em estoque";
pub const METRIC_PAYMENT: &str = "Forma de Pagamento";

pub const NO_CATEGORY_DATA: &str = "Nenhum dado para exibir no gráfico de categorias.";
pub const NO_AVAILABILITY_DATA: &str = "Nenhum dado para exibir no gráfico de disponibilidade.";
pub const NO_PRICE_DATA: &str = "Nenhum dado para exibir no histograma de preços.";

/// A chart ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartView<'a> {
    /// Bar per category, height = product count.
    CategoryBar(&'a [(String, usize)]),
    /// Donut of in-stock vs out-of-stock products.
    AvailabilityDonut(&'a [(Availability, usize)]),
    PriceHistogram(&'a Histogram),
}

impl ChartView<'_> {
    pub fn title(&self) -> &'static str {
        match self {
            ChartView::CategoryBar(_) => "Quantidade de produtos por categoria",
            ChartView::AvailabilityDonut(_) => "Distribuição de disponibilidade de estoque",
            ChartView::PriceHistogram(_) => "Distribuição de preços dos produtos",
        }
    }
}

/// Where the presenter sends its output. The egui frontend draws; tests record.
pub trait DashboardSink {
    fn metric(&mut self, label: &str, value: &str);
    fn chart(&mut self, chart: ChartView<'_>);
    fn warning(&mut self, message: &str);
    /// `columns` are the source headers; each row's `cells` follow them.
    fn table(&mut self, columns: &[String], rows: &[&Product]);
}

// ---------------------------------------------------------------------------
// Presenters
// ---------------------------------------------------------------------------

pub fn present_metrics(dashboard: &Dashboard, sink: &mut dyn DashboardSink) {
    let m = &dashboard.metrics;
    sink.metric(METRIC_TOTAL, &m.total_products.to_string());
    sink.metric(METRIC_AVAILABLE, &m.available_products.to_string());
    sink.metric(METRIC_PAYMENT, &m.payment_method);
}

pub fn present_category_chart(dashboard: &Dashboard, sink: &mut dyn DashboardSink) {
    if dashboard.categories.is_empty() {
        sink.warning(NO_CATEGORY_DATA);
    } else {
        sink.chart(ChartView::CategoryBar(&dashboard.categories));
    }
}

pub fn present_availability_chart(dashboard: &Dashboard, sink: &mut dyn DashboardSink) {
    if dashboard.availability.is_empty() {
        sink.warning(NO_AVAILABILITY_DATA);
    } else {
        sink.chart(ChartView::AvailabilityDonut(&dashboard.availability));
    }
}

pub fn present_price_histogram(dashboard: &Dashboard, sink: &mut dyn DashboardSink) {
    match &dashboard.prices {
        Some(hist) => sink.chart(ChartView::PriceHistogram(hist)),
        None => sink.warning(NO_PRICE_DATA),
    }
}

/// The detail table is always emitted, even with zero rows.
pub fn present_table(dashboard: &Dashboard, table: &InventoryTable, sink: &mut dyn DashboardSink) {
    let rows: Vec<&Product> = dashboard
        .visible
        .iter()
        .filter_map(|&i| table.products.get(i))
        .collect();
    sink.table(&table.columns, &rows);
}
