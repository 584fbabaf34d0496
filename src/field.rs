//! The particle field: a fixed-size set of particles on a surface of known
//! size, plus the pointer that pushes them around.

use crate::events::FieldEvent;
use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::surface::Surface;
use rand::Rng;
use tracing::{debug, info};
use vecmath::Vector2;

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Pointer,
    settings: Settings,
}

impl ParticleField {
    pub fn new<R: Rng>(width: f64, height: f64, settings: Settings, rng: &mut R) -> ParticleField {
        let mut field = ParticleField {
            width,
            height,
            particles: Vec::new(),
            pointer: Pointer::new(settings.interaction_radius),
            settings,
        };
        field.initialize_particles(rng);
        info!(
            width,
            height,
            particles = field.particles.len(),
            "particle field created"
        );
        field
    }

    /// Replaces the whole particle set with freshly seeded particles.
    pub fn initialize_particles<R: Rng>(&mut self, rng: &mut R) {
        let count = self.settings.particle_count;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::random(rng, self.width, self.height, &self.settings);
            self.particles.push(p);
        }
    }

    // Particles are left where they are, the next bounce brings them back
    pub fn resize(&mut self, width: f64, height: f64) {
        debug!(width, height, "particle field resized");
        self.width = width;
        self.height = height;
    }

    pub fn handle_event<R: Rng>(&mut self, event: FieldEvent, rng: &mut R) {
        match event {
            FieldEvent::PointerMoved { x, y } => self.pointer.move_to(x, y),
            FieldEvent::PointerLeft => self.pointer.clear(),
            FieldEvent::Resized { width, height } => self.resize(width, height),
            FieldEvent::Reseed => {
                debug!("reseeding particles");
                self.initialize_particles(rng);
            }
        }
    }

    /// Draws one frame and advances the simulation.
    ///
    /// Connections are drawn from the positions at the start of the frame.
    /// Each particle is then updated and drawn in turn, so dots always land
    /// on top of the lines.
    pub fn frame<S: Surface>(&mut self, renderer: &mut Renderer<S>) {
        let bounds = self.bounds();
        renderer.clear_screen(self.width, self.height);
        renderer.render_connections(&self.particles, &self.settings);
        for particle in &mut self.particles {
            particle.update(bounds, &self.pointer, &self.settings);
            renderer.render_particle(particle, &self.settings);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn bounds(&self) -> Vector2<f64> {
        [self.width, self.height]
    }
}
