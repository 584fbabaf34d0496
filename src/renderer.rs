// Renderer struct that owns the drawing surface and knows how to paint the
// particle network: connection lines first, then glowing dots on top.

use crate::particle::Particle;
use crate::settings::Settings;
use crate::surface::Surface;
use std::f64::consts::PI;

/// A line between two particles close enough to be joined.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub opacity: f64,
}

/// Alpha for a connection of length `distance`, or `None` when the pair is
/// too far apart to be joined.
pub fn connection_opacity(distance: f64, settings: &Settings) -> Option<f64> {
    if distance < settings.connection_distance {
        Some((1.0 - distance / settings.connection_distance) * settings.connection_opacity)
    } else {
        None
    }
}

// Every unordered pair is checked, so this is quadratic in the particle count
pub fn connections(particles: &[Particle], settings: &Settings) -> Vec<Connection> {
    let mut lines = Vec::new();
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let distance = vecmath::vec2_len(vecmath::vec2_sub(a.pos, b.pos));
            if let Some(opacity) = connection_opacity(distance, settings) {
                lines.push(Connection {
                    from: a.pos,
                    to: b.pos,
                    opacity,
                });
            }
        }
    }
    lines
}

pub struct Renderer<S> {
    pub surface: S,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Renderer { surface }
    }

    pub fn clear_screen(&mut self, width: f64, height: f64) {
        self.surface.clear_rect(0.0, 0.0, width, height);
    }

    pub fn render_connections(&mut self, particles: &[Particle], settings: &Settings) {
        for line in connections(particles, settings) {
            let color = settings.connection_color.with_alpha(line.opacity);
            self.surface.begin_path();
            self.surface.set_stroke_color(&color.to_css());
            self.surface.set_line_width(settings.line_width);
            self.surface.move_to(line.from[0], line.from[1]);
            self.surface.line_to(line.to[0], line.to[1]);
            self.surface.stroke();
        }
    }

    // Fill once plain, then once more with the shadow on to get the glow
    pub fn render_particle(&mut self, particle: &Particle, settings: &Settings) {
        let color = particle.color.to_css();
        self.surface.begin_path();
        self.surface
            .arc(particle.pos[0], particle.pos[1], particle.radius, 0.0, PI * 2.0);
        self.surface.set_fill_color(&color);
        self.surface.fill();

        self.surface.set_shadow(settings.glow_blur, &color);
        self.surface.fill();
        self.surface.set_shadow(0.0, &color);
    }
}
