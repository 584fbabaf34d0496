//! Tuning constants for the particle field.
//!
//! There is no runtime configuration source; `Settings::default()` is the
//! only set of values the page ever uses. Tests build variants with struct
//! update syntax.

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Number of particles seeded on creation and on every reseed.
    pub particle_count: usize,
    /// Pairs closer than this are joined by a line.
    pub connection_distance: f64,
    /// Alpha of a connection between two coincident particles.
    pub connection_opacity: f64,
    pub connection_color: Color,
    pub line_width: f64,
    /// Distance within which the pointer pushes particles away.
    pub interaction_radius: f64,
    pub repulsion_strength: f64,
    /// Upper bound on particle speed, in units per frame.
    pub max_speed: f64,
    /// Seeded velocity components fall in `[-initial_speed, initial_speed]`.
    pub initial_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub glow_blur: f64,
    pub palette: [Color; 3],
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            particle_count: 50,
            connection_distance: 150.0,
            connection_opacity: 0.4,
            connection_color: Color::rgba(168, 85, 247, 1.0),
            line_width: 1.0,
            interaction_radius: 100.0,
            repulsion_strength: 0.1,
            max_speed: 2.0,
            initial_speed: 0.25,
            min_radius: 1.0,
            max_radius: 3.0,
            glow_blur: 10.0,
            palette: [Color::PURPLE, Color::GOLD, Color::TEAL],
        }
    }
}
