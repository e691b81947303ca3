use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::availability_color;
use crate::data::model::Product;

const ROW_HEIGHT: f32 = 20.0;
const AVAILABILITY_HEADER: &str = "Disponível";

// ---------------------------------------------------------------------------
// Detail table (filtered rows)
// ---------------------------------------------------------------------------

/// Every source column in file order, then the derived availability.
pub fn detail_table(ui: &mut Ui, columns: &[String], rows: &[&Product]) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .columns(Column::auto().at_least(80.0), columns.len())
        .column(Column::remainder())
        .header(ROW_HEIGHT + 4.0, |mut header| {
            for title in columns {
                header.col(|ui| {
                    ui.strong(title.as_str());
                });
            }
            header.col(|ui| {
                ui.strong(AVAILABILITY_HEADER);
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let p = rows[row.index()];
                for i in 0..columns.len() {
                    row.col(|ui| {
                        ui.label(p.cells.get(i).map_or("", String::as_str));
                    });
                }
                row.col(|ui| {
                    let availability = p.availability();
                    ui.label(RichText::new(availability.caption()).color(availability_color(availability)));
                });
            });
        });
}
