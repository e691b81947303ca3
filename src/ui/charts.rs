use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::{availability_color, count_color};
use crate::data::aggregate::Histogram;
use crate::data::model::Availability;

pub const CHART_HEIGHT: f32 = 300.0;

/// Inner radius as a fraction of the outer one.
const DONUT_HOLE: f32 = 0.5;

// ---------------------------------------------------------------------------
// Bar chart: products per category
// ---------------------------------------------------------------------------

/// One bar per category, coloured by its count.
pub fn category_bar(ui: &mut Ui, counts: &[(String, usize)]) {
    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);

    Plot::new("category_chart")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Categoria")
        .y_axis_label("Quantidade de produtos")
        .show_x(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for (i, (category, n)) in counts.iter().enumerate() {
                let color = count_color(*n, max);
                let bar = Bar::new(i as f64, *n as f64)
                    .width(0.8)
                    .fill(color)
                    .name(category);
                plot_ui.bar_chart(BarChart::new(vec![bar]).name(category).color(color));
            }
        });
}

// ---------------------------------------------------------------------------
// Donut: stock availability
// ---------------------------------------------------------------------------

/// Angular extent of one donut slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: Availability,
    /// Screen-space radians; `-π/2` points at 12 o'clock.
    pub start: f32,
    pub sweep: f32,
    pub percent: f32,
}

/// Lay the counts out around the circle, starting at the top.
pub fn donut_slices(counts: &[(Availability, usize)]) -> Vec<Slice> {
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = -FRAC_PI_2;
    counts
        .iter()
        .map(|&(label, n)| {
            let fraction = n as f32 / total as f32;
            let slice = Slice {
                label,
                start,
                sweep: fraction * TAU,
                percent: fraction * 100.0,
            };
            start += slice.sweep;
            slice
        })
        .collect()
}

fn polar(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + radius * Vec2::angled(angle)
}

/// Donut with a `label / percent` annotation on every slice.
pub fn availability_donut(ui: &mut Ui, counts: &[(Availability, usize)]) {
    let size = egui::vec2(ui.available_width(), CHART_HEIGHT);
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);

    let center = rect.center();
    let outer = 0.45 * rect.width().min(rect.height());
    let inner = outer * DONUT_HOLE;

    for slice in donut_slices(counts) {
        let color = availability_color(slice.label);
        // Ring segments must stay convex, so draw the arc in small steps.
        let steps = ((slice.sweep / TAU) * 96.0).ceil().max(1.0) as usize;
        for k in 0..steps {
            let a0 = slice.start + slice.sweep * k as f32 / steps as f32;
            let a1 = slice.start + slice.sweep * (k + 1) as f32 / steps as f32;
            painter.add(Shape::convex_polygon(
                vec![
                    polar(center, outer, a0),
                    polar(center, outer, a1),
                    polar(center, inner, a1),
                    polar(center, inner, a0),
                ],
                color,
                Stroke::NONE,
            ));
        }

        let anchor = polar(center, (outer + inner) / 2.0, slice.start + slice.sweep / 2.0);
        painter.text(
            anchor,
            Align2::CENTER_CENTER,
            format!("{}\n{:.1}%", slice.label.caption(), slice.percent),
            FontId::proportional(13.0),
            Color32::WHITE,
        );
    }
}

// ---------------------------------------------------------------------------
// Histogram: unit prices
// ---------------------------------------------------------------------------

pub fn price_histogram(ui: &mut Ui, hist: &Histogram) {
    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &n)| {
            let (left, right) = hist.bin_range(i);
            Bar::new((left + right) / 2.0, n as f64)
                .width(hist.bin_width)
                .name(format!("R$ {left:.2} – {right:.2}"))
        })
        .collect();

    Plot::new("price_histogram")
        .height(CHART_HEIGHT)
        .x_axis_label("Preço (R$)")
        .y_axis_label("Quantidade")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name(format!("{} products", hist.total()))
                    .color(Color32::from_rgb(99, 110, 250)),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_cover_the_circle() {
        let slices = donut_slices(&[(Availability::Available, 3), (Availability::Unavailable, 1)]);

        assert_eq!(slices.len(), 2);
        assert!((slices[0].percent - 75.0).abs() < 1e-4);
        assert!((slices[1].percent - 25.0).abs() < 1e-4);
        assert!((slices[0].start + FRAC_PI_2).abs() < 1e-6);
        assert!((slices[1].start - (slices[0].start + slices[0].sweep)).abs() < 1e-6);
        let swept: f32 = slices.iter().map(|s| s.sweep).sum();
        assert!((swept - TAU).abs() < 1e-4);
    }

    #[test]
    fn single_label_is_a_full_ring() {
        let slices = donut_slices(&[(Availability::Available, 7)]);
        assert_eq!(slices.len(), 1);
        assert!((slices[0].percent - 100.0).abs() < 1e-4);
    }

    #[test]
    fn no_counts_no_slices() {
        assert!(donut_slices(&[]).is_empty());
    }
}
