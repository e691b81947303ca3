use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Availability;

// ---------------------------------------------------------------------------
// HSL helpers
// ---------------------------------------------------------------------------

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Continuous scale: count → Color32
// ---------------------------------------------------------------------------

/// Hue sweep from deep violet (low counts) to warm yellow (the maximum).
pub fn count_color(value: usize, max: usize) -> Color32 {
    let t = if max == 0 {
        0.0
    } else {
        (value as f32 / max as f32).clamp(0.0, 1.0)
    };
    let hue = 260.0 + t * 150.0;
    hsl_to_color32(hue % 360.0, 0.8, 0.35 + 0.25 * t)
}

pub fn availability_color(availability: Availability) -> Color32 {
    match availability {
        Availability::Available => hsl_to_color32(145.0, 0.6, 0.45),
        Availability::Unavailable => hsl_to_color32(5.0, 0.7, 0.55),
    }
}
