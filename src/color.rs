// Simple color struct, 8-bit RGB channels plus a float alpha, formatted as
// a CSS rgba() string for the canvas

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Color {
    pub const PURPLE: Color = Color::rgba(168, 85, 247, 0.9);
    pub const GOLD: Color = Color::rgba(251, 191, 36, 0.9);
    pub const TEAL: Color = Color::rgba(20, 184, 166, 0.9);

    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Color {
        Color { r, g, b, alpha }
    }

    pub fn with_alpha(self, alpha: f64) -> Color {
        Color { alpha, ..self }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}
