//! Colors with an alpha component.

use ratatui::style::Color;

/// An RGB color carrying an alpha value.
///
/// Terminals do not blend, so alpha is applied at render time by scaling
/// the channels toward the black background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity in [0, 1].
    pub a: f32,
}

impl Rgba {
    /// Create a color, clamping alpha into [0, 1].
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Resolve to a terminal color against the black background.
    pub fn to_color(self) -> Color {
        fade(self.r, self.g, self.b, self.a)
    }
}

/// Scale an opaque base color by `alpha` toward the black background.
pub fn fade(r: u8, g: u8, b: u8, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    Color::Rgb(
        (r as f32 * alpha) as u8,
        (g as f32 * alpha) as u8,
        (b as f32 * alpha) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(174, 194, 224, 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(fade(174, 194, 224, 1.0), Color::Rgb(174, 194, 224));
    }

    #[test]
    fn test_alpha_is_clamped() {
        let color = Rgba::new(255, 255, 255, 1.7);
        assert_eq!(color.a, 1.0);
        assert_eq!(color.to_color(), Color::Rgb(255, 255, 255));
    }
}
