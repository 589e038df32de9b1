//! Continuous rotation with discrete quarter-turn events.

use std::f64::consts::FRAC_PI_2;

/// Integrates a rotation angle each frame and reports every quarter-turn
/// boundary crossed since the previous tick.
///
/// The comparison is against the last *crossed* boundary rather than a
/// frame count, so the emitted index advances exactly once per quarter
/// turn regardless of frame-rate variance. The angle itself is never
/// reset; only `step mod N` is observable.
#[derive(Clone, Debug)]
pub struct RotationCycler {
    angle: f64,
    last_step: u64,
    rate: f64,
    len: usize,
}

impl RotationCycler {
    /// `rate` is in radians per second, `len` the number of cyclable items.
    pub fn new(rate: f64, len: usize) -> Self {
        assert!(len > 0, "RotationCycler needs at least one item");
        Self {
            angle: 0.0,
            last_step: 0,
            rate,
            len,
        }
    }

    /// Advances the rotation by `dt` seconds.
    ///
    /// Returns the new item index for every boundary crossed, in order.
    /// A single large `dt` spanning several boundaries yields one entry
    /// per boundary, none skipped.
    pub fn tick(&mut self, dt: f64) -> Vec<usize> {
        self.angle += self.rate * dt;
        let step = (self.angle / FRAC_PI_2).floor() as u64;

        let mut crossed = Vec::new();
        while self.last_step < step {
            self.last_step += 1;
            crossed.push((self.last_step as usize) % self.len);
        }
        crossed
    }

    /// Current continuous angle in radians, for the model transform.
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_no_event_before_first_boundary() {
        let mut cycler = RotationCycler::new(0.5, 4);
        // 0.5 rad/s for 3s = 1.5 rad < pi/2
        assert!(cycler.tick(3.0).is_empty());
    }

    #[test]
    fn test_one_event_per_quarter_turn() {
        let mut cycler = RotationCycler::new(0.5, 4);
        // pi/2 rad takes pi seconds at 0.5 rad/s
        assert_eq!(cycler.tick(PI + 0.01), vec![1]);
        // No re-trigger on the same boundary.
        assert!(cycler.tick(0.01).is_empty());
        assert_eq!(cycler.tick(PI), vec![2]);
    }

    #[test]
    fn test_large_dt_emits_every_boundary() {
        let mut cycler = RotationCycler::new(0.5, 4);
        // Three quarter turns in one tick: all three must be reported.
        assert_eq!(cycler.tick(3.0 * PI + 0.01), vec![1, 2, 3]);
    }

    #[test]
    fn test_index_wraps_modulo_len() {
        let mut cycler = RotationCycler::new(0.5, 3);
        assert_eq!(cycler.tick(4.0 * PI + 0.01), vec![1, 2, 0, 1]);
    }

    #[test]
    fn test_angle_grows_unbounded() {
        let mut cycler = RotationCycler::new(0.5, 4);
        cycler.tick(10.0 * PI);
        assert!(cycler.angle() > 4.0 * PI);
    }

    #[test]
    fn test_small_ticks_accumulate() {
        let mut cycler = RotationCycler::new(0.5, 4);
        let mut events = Vec::new();
        // 60 fps for ~pi+epsilon seconds worth of frames.
        for _ in 0..200 {
            events.extend(cycler.tick(PI / 190.0));
        }
        assert_eq!(events, vec![1]);
    }
}
