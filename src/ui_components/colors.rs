//! Palette shared across screens. Gradient tokens carried by track and
//! genre records resolve to concrete color pairs here.

use crate::constants::DOMINANT_COLOR_RGB;
use egui::Color32;

pub const BG_MAIN: Color32 = Color32::from_rgb(16, 18, 27);
pub const BG_CARD: Color32 = Color32::from_rgb(26, 29, 41);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 236, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(140, 145, 160);
pub const ACCENT: Color32 = Color32::from_rgb(
    DOMINANT_COLOR_RGB.0,
    DOMINANT_COLOR_RGB.1,
    DOMINANT_COLOR_RGB.2,
);
pub const DANGER: Color32 = Color32::from_rgb(255, 107, 107);

/// Resolve a gradient token to its (start, end) colors. Unknown tokens fall
/// back to the brand gradient.
pub fn gradient(token: &str) -> (Color32, Color32) {
    match token {
        "blue-violet" => (Color32::from_rgb(95, 133, 219), Color32::from_rgb(123, 104, 238)),
        "teal-green" => (Color32::from_rgb(78, 205, 196), Color32::from_rgb(68, 160, 141)),
        "coral-orange" => (Color32::from_rgb(255, 107, 107), Color32::from_rgb(255, 142, 83)),
        "gold-red" => (Color32::from_rgb(255, 217, 61), Color32::from_rgb(255, 107, 107)),
        _ => (Color32::from_rgb(95, 133, 219), Color32::from_rgb(123, 104, 238)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_palette_token_resolves() {
        let mut seen = std::collections::HashSet::new();
        for token in crate::constants::GRADIENT_PALETTE {
            let pair = gradient(token);
            assert!(seen.insert(pair), "token {} duplicates another", token);
        }
    }

    #[test]
    fn unknown_token_falls_back_to_brand_gradient() {
        assert_eq!(gradient("does-not-exist"), gradient("blue-violet"));
    }
}
