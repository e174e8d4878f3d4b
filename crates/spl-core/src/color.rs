// ABOUTME: Color representation and pastel color generation.
// ABOUTME: Pastels are picked in OKLab at fixed lightness and chroma.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Neutral gray used for dividers when the caller doesn't pick one.
    pub const SEPARATOR: Self = Self::rgb(0.33, 0.33, 0.35);

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub fn as_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// A pastel at the given hue angle (degrees), fixed lightness 0.84 and
    /// chroma 0.07 in OKLab.
    pub fn pastel(hue_degrees: f32) -> Self {
        const LIGHTNESS: f32 = 0.84;
        const CHROMA: f32 = 0.07;
        let hue = hue_degrees.to_radians();
        oklab_to_color(LIGHTNESS, CHROMA * hue.cos(), CHROMA * hue.sin())
    }

    /// A pastel at a random hue.
    pub fn random_pastel() -> Self {
        Self::pastel(fastrand::f32() * 360.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::SEPARATOR
    }
}

/// OKLab -> linear sRGB.
fn oklab_to_color(l: f32, a: f32, b: f32) -> Color {
    let l_ = l + 0.396_337_78 * a + 0.215_803_76 * b;
    let m_ = l - 0.105_561_346 * a - 0.063_854_17 * b;
    let s_ = l - 0.089_484_18 * a - 1.291_485_5 * b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 4.076_741_7 * l - 3.307_711_6 * m + 0.230_969_94 * s;
    let g = -1.268_438 * l + 2.609_757_4 * m - 0.341_319_38 * s;
    let b = -0.004_196_086_3 * l - 0.703_418_6 * m + 1.707_614_7 * s;

    Color::rgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pastel_components_in_range() {
        for hue in [0.0, 60.0, 120.0, 180.0, 240.0, 300.0, 359.9] {
            let c = Color::pastel(hue);
            for v in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&v), "hue {hue}: {v}");
            }
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn pastel_is_light() {
        // Fixed OKLab lightness should keep every hue well above mid-gray.
        for hue in (0..360).step_by(30) {
            let c = Color::pastel(hue as f32);
            assert!(c.r + c.g + c.b > 1.2, "hue {hue} too dark");
        }
    }
}
