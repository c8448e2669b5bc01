/// Accumulated rotation state for the animated cube.
///
/// Plain Euler integration of the per-frame elapsed time. The angle is never
/// wrapped or clamped; rotation constructors are periodic so an unbounded
/// angle renders correctly for any realistic run length.
#[derive(Debug, Default, Copy, Clone)]
pub struct Spin {
    angle: f32,
}

impl Spin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the rotation by an elapsed-time delta in seconds.
    pub fn advance(&mut self, dt: f32) {
        self.angle += dt;
    }

    /// Current accumulated angle in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_is_the_exact_running_sum_of_deltas() {
        let deltas = [0.25, 0.5, 0.125, 1.0, 0.0625];
        let mut spin = Spin::new();
        let mut sum = 0.0f32;
        for dt in deltas {
            spin.advance(dt);
            sum += dt;
            assert_eq!(spin.angle(), sum);
        }
    }

    #[test]
    fn angle_is_never_wrapped() {
        let mut spin = Spin::new();
        for _ in 0..1000 {
            spin.advance(1.0);
        }
        assert_eq!(spin.angle(), 1000.0);
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(Spin::new().angle(), 0.0);
    }
}
