use eframe::egui::Color32;
use palette::{Darken, Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

use crate::data::model::Model;

// ---------------------------------------------------------------------------
// Fixed figure colours
// ---------------------------------------------------------------------------

pub const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);
pub const ORANGE: Srgb<u8> = Srgb::new(255, 165, 0);
pub const RED: Srgb<u8> = Srgb::new(255, 0, 0);

/// Opacity of the scatter markers.
pub const MARKER_ALPHA: f32 = 0.7;

/// Series colour of a model: SVM blue, baseline orange.
pub fn model_color(model: Model) -> Srgb<u8> {
    match model {
        Model::Svm => BLUE,
        Model::NaiveBayes => ORANGE,
    }
}

/// Colour of the p-value bars.
pub fn bar_color() -> Srgb<u8> {
    ORANGE
}

/// Colour of the significance threshold line.
pub fn threshold_color() -> Srgb<u8> {
    RED
}

/// Darker variant of `color` for outlines, `amount` in `0.0..=1.0`.
pub fn outline(color: Srgb<u8>, amount: f32) -> Srgb<u8> {
    let hsl: Hsl = color.into_format::<f32>().into_color();
    let rgb: Srgb = hsl.darken(amount).into_color();
    rgb.into_format()
}

// ---------------------------------------------------------------------------
// Backend conversions
// ---------------------------------------------------------------------------

pub fn to_plotters(color: Srgb<u8>) -> RGBColor {
    RGBColor(color.red, color.green, color.blue)
}

pub fn to_egui(color: Srgb<u8>) -> Color32 {
    Color32::from_rgb(color.red, color.green, color.blue)
}

pub fn to_egui_alpha(color: Srgb<u8>, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.red, color.green, color.blue, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn models_have_distinct_colours() {
        assert_ne!(model_color(Model::Svm), model_color(Model::NaiveBayes));
    }

    #[test]
    fn outline_is_darker() {
        let dark = outline(ORANGE, 0.3);
        let sum = |c: Srgb<u8>| c.red as u32 + c.green as u32 + c.blue as u32;
        assert!(sum(dark) < sum(ORANGE));
    }

    #[test]
    fn conversions_keep_channels() {
        assert_eq!(to_plotters(ORANGE), RGBColor(255, 165, 0));
        assert_eq!(to_egui(BLUE), Color32::from_rgb(0, 0, 255));
        assert_eq!(to_egui_alpha(RED, 1.0), Color32::from_rgb(255, 0, 0));
    }
}
