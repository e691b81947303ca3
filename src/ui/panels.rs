use std::collections::BTreeSet;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::dashboard::{
    present_availability_chart, present_category_chart, present_metrics,
    present_price_histogram, present_table,
};
use crate::data::aggregate::MetricsPolicy;
use crate::data::loader::Source;
use crate::state::{AppState, FilterColumn};
use crate::ui::sink::EguiSink;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

enum FilterAction<T> {
    All,
    None,
    Toggle(T),
}

/// One collapsible multi-select. Returns the user's action, if any, so the
/// caller can apply it to the state after the widget has released its borrow.
fn filter_section<T: Ord + Clone + Display>(
    ui: &mut Ui,
    column: FilterColumn,
    all_values: &BTreeSet<T>,
    selected: &BTreeSet<T>,
) -> Option<FilterAction<T>> {
    let header_text = format!("{}  ({}/{})", column.title(), selected.len(), all_values.len());
    let mut action = None;

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(column.title())
        .default_open(column == FilterColumn::Category)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("Todos").clicked() {
                    action = Some(FilterAction::All);
                }
                if ui.small_button("Nenhum").clicked() {
                    action = Some(FilterAction::None);
                }
            });

            for val in all_values {
                let mut checked = selected.contains(val);
                if ui.checkbox(&mut checked, val.to_string()).changed() {
                    action = Some(FilterAction::Toggle(val.clone()));
                }
            }
        });

    action
}

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🔍 Filtros");
    ui.separator();

    // Keep the table alive independently of `state` so it can be mutated.
    let table = Arc::clone(&state.table);
    let domains = &table.domains;

    if table.is_empty() {
        ui.label("Nenhum produto carregado.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let col = FilterColumn::Category;
            match filter_section(ui, col, &domains.categories, &state.selection.categories) {
                Some(FilterAction::Toggle(v)) => state.toggle_category(&v),
                Some(FilterAction::All) => state.select_all(col),
                Some(FilterAction::None) => state.select_none(col),
                None => {}
            }

            let col = FilterColumn::Kind;
            match filter_section(ui, col, &domains.kinds, &state.selection.kinds) {
                Some(FilterAction::Toggle(v)) => state.toggle_kind(&v),
                Some(FilterAction::All) => state.select_all(col),
                Some(FilterAction::None) => state.select_none(col),
                None => {}
            }

            let col = FilterColumn::Price;
            match filter_section(ui, col, &domains.prices, &state.selection.prices) {
                Some(FilterAction::Toggle(v)) => state.toggle_price(&v),
                Some(FilterAction::All) => state.select_all(col),
                Some(FilterAction::None) => state.select_none(col),
                None => {}
            }

            let col = FilterColumn::Name;
            match filter_section(ui, col, &domains.names, &state.selection.names) {
                Some(FilterAction::Toggle(v)) => state.toggle_name(&v),
                Some(FilterAction::All) => state.select_all(col),
                Some(FilterAction::None) => state.select_none(col),
                None => {}
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Arquivo", |ui: &mut Ui| {
            if ui.button("Recarregar catálogo").clicked() {
                state.reload();
                ui.close_menu();
            }
            if ui.button("Abrir catálogo publicado").clicked() {
                state.switch_source(Source::default());
                ui.close_menu();
            }
            if ui.button("Abrir CSV local…").clicked() {
                if let Some(path) = open_file_dialog() {
                    state.switch_source(Source::Local(path));
                }
                ui.close_menu();
            }
        });

        ui.menu_button("Exibir", |ui: &mut Ui| {
            let mut policy = state.metrics_policy;
            ui.radio_value(&mut policy, MetricsPolicy::Computed, "Métricas calculadas dos dados");
            ui.radio_value(&mut policy, MetricsPolicy::Published, "Números publicados");
            state.set_metrics_policy(policy);
        });

        ui.separator();

        ui.label(format!(
            "{} de {} produtos exibidos",
            state.dashboard.visible.len(),
            state.table.len()
        ));

        ui.separator();
        ui.label(RichText::new(state.source.to_string()).weak().small());

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – metrics, charts, detail table
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let dashboard = &state.dashboard;

    ui.heading("Catálogo online Aidan");
    ui.label(
        "Explore os produtos e consulte a disponibilidade para pronta entrega. \
         Utilize os filtros à esquerda.",
    );
    ui.add_space(8.0);

    ui.horizontal(|ui: &mut Ui| {
        present_metrics(dashboard, &mut EguiSink::new(ui));
    });

    ui.separator();
    ui.heading("Gráficos");

    ui.columns(2, |cols: &mut [Ui]| {
        present_category_chart(dashboard, &mut EguiSink::new(&mut cols[0]));
        present_availability_chart(dashboard, &mut EguiSink::new(&mut cols[1]));
    });
    ui.add_space(8.0);
    present_price_histogram(dashboard, &mut EguiSink::new(ui));

    ui.separator();
    ui.heading("Dados Detalhados");
    present_table(dashboard, &state.table, &mut EguiSink::new(ui));
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Abrir planilha de estoque")
        .add_filter("CSV", &["csv"])
        .pick_file()
}
