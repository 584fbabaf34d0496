// Last known cursor position plus the radius inside which it pushes
// particles away. Written from pointer events, read by the update step.

use vecmath::Vector2;

#[derive(Clone, Debug, PartialEq)]
pub struct Pointer {
    pub pos: Option<Vector2<f64>>,
    pub radius: f64,
}

impl Pointer {
    pub fn new(radius: f64) -> Self {
        Pointer { pos: None, radius }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pos = Some([x, y]);
    }

    pub fn clear(&mut self) {
        self.pos = None;
    }

    /// Velocity change for a particle at `point`, pointing away from the
    /// pointer with magnitude `strength * (radius - d) / radius`.
    ///
    /// `None` when the pointer is unknown or at least `radius` away. A
    /// particle sitting exactly on the pointer is pushed along -x.
    pub fn repulsion(&self, point: Vector2<f64>, strength: f64) -> Option<Vector2<f64>> {
        let pos = self.pos?;
        let to_pointer = vecmath::vec2_sub(pos, point);
        let distance = vecmath::vec2_len(to_pointer);
        if distance >= self.radius {
            return None;
        }

        let force = (self.radius - distance) / self.radius;
        let dir = if distance > 0.0 {
            vecmath::vec2_scale(to_pointer, 1.0 / distance)
        } else {
            [1.0, 0.0]
        };
        Some(vecmath::vec2_scale(dir, -force * strength))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_pointer_has_no_effect() {
        let pointer = Pointer::new(100.0);
        assert_eq!(pointer.repulsion([10.0, 10.0], 0.1), None);
    }

    #[test]
    fn pushes_away_from_pointer() {
        let mut pointer = Pointer::new(100.0);
        pointer.move_to(100.0, 100.0);

        // Particle to the left of the pointer gets pushed further left
        let delta = pointer.repulsion([50.0, 100.0], 0.1).unwrap();
        assert!((delta[0] + 0.05).abs() < 1e-12);
        assert!(delta[1].abs() < 1e-12);

        // Below and right gets pushed down and right
        let delta = pointer.repulsion([130.0, 140.0], 0.1).unwrap();
        assert!(delta[0] > 0.0 && delta[1] > 0.0);
    }

    #[test]
    fn boundary_of_radius_is_outside() {
        let mut pointer = Pointer::new(100.0);
        pointer.move_to(0.0, 0.0);
        assert_eq!(pointer.repulsion([100.0, 0.0], 0.1), None);
        assert_eq!(pointer.repulsion([60.0, 80.0], 0.1), None);
        assert!(pointer.repulsion([99.9, 0.0], 0.1).is_some());
    }

    #[test]
    fn coincident_particle_is_pushed_along_negative_x() {
        let mut pointer = Pointer::new(100.0);
        pointer.move_to(5.0, 5.0);
        let delta = pointer.repulsion([5.0, 5.0], 0.1).unwrap();
        assert!((delta[0] + 0.1).abs() < 1e-12);
        assert_eq!(delta[1], 0.0);
    }

    #[test]
    fn clear_forgets_position() {
        let mut pointer = Pointer::new(100.0);
        pointer.move_to(1.0, 2.0);
        assert_eq!(pointer.pos, Some([1.0, 2.0]));
        assert!(pointer.repulsion([4.0, 6.0], 0.1).is_some());
        pointer.clear();
        assert_eq!(pointer.pos, None);
        assert_eq!(pointer.repulsion([4.0, 6.0], 0.1), None);
    }
}
