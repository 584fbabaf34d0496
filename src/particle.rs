// Simple particle struct to keep track of individual position, velocity,
// render radius, and color

use crate::color::Color;
use crate::pointer::Pointer;
use crate::settings::Settings;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(
        pos_x: f64,
        pos_y: f64,
        vel_x: f64,
        vel_y: f64,
        radius: f64,
        color: Color,
    ) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    /// Uniformly placed particle on a `width` x `height` surface.
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, settings: &Settings) -> Particle {
        let spread = settings.initial_speed * 2.0;
        let color = settings.palette[rng.gen_range(0, settings.palette.len())];
        Particle::new(
            rng.gen::<f64>() * width,
            rng.gen::<f64>() * height,
            (rng.gen::<f64>() - 0.5) * spread,
            (rng.gen::<f64>() - 0.5) * spread,
            settings.min_radius + rng.gen::<f64>() * (settings.max_radius - settings.min_radius),
            color,
        )
    }

    pub fn speed(&self) -> f64 {
        vecmath::vec2_len(self.vel)
    }

    /// Advance one frame.
    ///
    /// Moves by the current velocity, then reverses the velocity component of
    /// any axis whose new position lies outside `[0, bounds]`. The position
    /// itself is left where it landed. Pointer repulsion and the speed clamp
    /// are applied after the bounce.
    pub fn update(&mut self, bounds: Vector2<f64>, pointer: &Pointer, settings: &Settings) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);

        for axis in 0..2 {
            if self.pos[axis] < 0.0 || self.pos[axis] > bounds[axis] {
                self.vel[axis] *= -1.0;
            }
        }

        if let Some(delta) = pointer.repulsion(self.pos, settings.repulsion_strength) {
            self.vel = vecmath::vec2_add(self.vel, delta);
        }

        let speed = self.speed();
        if speed > settings.max_speed {
            self.vel = vecmath::vec2_scale(self.vel, settings.max_speed / speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BOUNDS: Vector2<f64> = [800.0, 600.0];

    fn particle(pos: Vector2<f64>, vel: Vector2<f64>) -> Particle {
        Particle::new(pos[0], pos[1], vel[0], vel[1], 2.0, Color::PURPLE)
    }

    #[test]
    fn random_particles_respect_seeding_ranges() {
        let settings = Settings::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 800.0, 600.0, &settings);
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 600.0);
            assert!(p.vel[0].abs() <= 0.25 && p.vel[1].abs() <= 0.25);
            assert!(p.radius >= 1.0 && p.radius < 3.0);
            assert!(settings.palette.contains(&p.color));
        }
    }

    #[test]
    fn seeding_draws_every_palette_color() {
        let settings = Settings::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let p = Particle::random(&mut rng, 10.0, 10.0, &settings);
            let index = settings.palette.iter().position(|c| *c == p.color).unwrap();
            seen[index] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn moves_by_velocity_without_pointer() {
        let settings = Settings::default();
        let mut p = particle([100.0, 200.0], [0.2, -0.1]);
        p.update(BOUNDS, &Pointer::new(100.0), &settings);
        assert_eq!(p.pos, [100.0 + 0.2, 200.0 - 0.1]);
        assert_eq!(p.vel, [0.2, -0.1]);
    }

    #[test]
    fn bounces_off_each_edge_without_clipping() {
        let settings = Settings::default();
        let pointer = Pointer::new(100.0);

        let mut left = particle([0.1, 300.0], [-0.25, 0.0]);
        left.update(BOUNDS, &pointer, &settings);
        assert!(left.pos[0] < 0.0);
        assert!(left.vel[0] > 0.0);

        let mut right = particle([799.9, 300.0], [0.25, 0.1]);
        right.update(BOUNDS, &pointer, &settings);
        assert!(right.pos[0] > 800.0);
        assert!(right.vel[0] < 0.0);
        assert!(right.vel[1] > 0.0);

        let mut top = particle([400.0, 0.05], [0.0, -0.2]);
        top.update(BOUNDS, &pointer, &settings);
        assert!(top.vel[1] > 0.0);

        let mut bottom = particle([400.0, 599.95], [0.0, 0.2]);
        bottom.update(BOUNDS, &pointer, &settings);
        assert!(bottom.vel[1] < 0.0);
    }

    #[test]
    fn outside_particle_moving_outward_flips_back() {
        let settings = Settings::default();
        let mut p = particle([-5.0, 700.0], [-1.0, 1.5]);
        p.update(BOUNDS, &Pointer::new(100.0), &settings);
        assert_eq!(p.vel, [1.0, -1.5]);
    }

    #[test]
    fn speed_is_clamped_preserving_direction() {
        let settings = Settings::default();
        let mut p = particle([400.0, 300.0], [3.0, 4.0]);
        p.update(BOUNDS, &Pointer::new(100.0), &settings);
        assert!((p.speed() - 2.0).abs() < 1e-9);
        assert!((p.vel[0] - 1.2).abs() < 1e-9);
        assert!((p.vel[1] - 1.6).abs() < 1e-9);
    }

    #[test]
    fn pointer_repels_nearby_particle() {
        let settings = Settings::default();
        let mut pointer = Pointer::new(100.0);
        pointer.move_to(400.0, 300.0);

        let mut near = particle([350.0, 300.0], [0.0, 0.0]);
        near.update(BOUNDS, &pointer, &settings);
        assert!(near.vel[0] < 0.0);
        assert!(near.vel[1].abs() < 1e-12);

        let mut far = particle([250.0, 300.0], [0.1, 0.1]);
        far.update(BOUNDS, &pointer, &settings);
        assert_eq!(far.vel, [0.1, 0.1]);
    }

    #[test]
    fn speed_never_exceeds_max_under_pointer_pressure() {
        let settings = Settings::default();
        let mut pointer = Pointer::new(100.0);
        pointer.move_to(400.0, 300.0);
        let mut p = particle([401.0, 300.5], [1.9, 0.5]);
        for _ in 0..200 {
            p.update(BOUNDS, &pointer, &settings);
            assert!(p.speed() <= settings.max_speed + 1e-9);
        }
    }
}
