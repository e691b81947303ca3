use eframe::egui::{Color32, RichText, Ui};

use crate::dashboard::{ChartView, DashboardSink};
use crate::data::model::Product;
use crate::ui::{charts, table};

// ---------------------------------------------------------------------------
// egui implementation of the dashboard sink
// ---------------------------------------------------------------------------

/// Draws whatever the presenters emit into one `Ui` region.
pub struct EguiSink<'a> {
    ui: &'a mut Ui,
}

impl<'a> EguiSink<'a> {
    pub fn new(ui: &'a mut Ui) -> Self {
        Self { ui }
    }
}

impl DashboardSink for EguiSink<'_> {
    fn metric(&mut self, label: &str, value: &str) {
        self.ui.group(|ui: &mut Ui| {
            ui.set_min_width(180.0);
            ui.vertical(|ui: &mut Ui| {
                ui.label(RichText::new(label).weak());
                ui.label(RichText::new(value).size(28.0).strong());
            });
        });
    }

    fn chart(&mut self, chart: ChartView<'_>) {
        self.ui.strong(chart.title());
        match chart {
            ChartView::CategoryBar(counts) => charts::category_bar(self.ui, counts),
            ChartView::AvailabilityDonut(counts) => charts::availability_donut(self.ui, counts),
            ChartView::PriceHistogram(hist) => charts::price_histogram(self.ui, hist),
        }
    }

    fn warning(&mut self, message: &str) {
        self.ui
            .label(RichText::new(format!("⚠ {message}")).color(Color32::from_rgb(230, 160, 40)));
    }

    fn table(&mut self, columns: &[String], rows: &[&Product]) {
        table::detail_table(self.ui, columns, rows);
    }
}
