//! Wheel/touch gesture accumulation.
//!
//! Raw input deltas are noisy and arrive at wildly different magnitudes
//! (trackpad vs. mouse wheel vs. touch drag). The accumulator sums them
//! and emits a single discrete [`Direction`] once the running sum crosses
//! a threshold, then locks so one physical flick cannot trigger twice.
//! The cooldown timer that releases the lock is owned by the caller.

/// Direction of a threshold-crossing gesture.
///
/// `Forward` corresponds to scrolling down (positive wheel delta),
/// `Back` to scrolling up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

impl Direction {
    /// Direction from the sign of an accumulated delta.
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Forward
        } else {
            Self::Back
        }
    }

    /// Signed unit value, used for slide offsets in CSS.
    pub fn signum(self) -> i32 {
        match self {
            Self::Back => -1,
            Self::Forward => 1,
        }
    }
}

/// Accumulates raw input deltas and emits a discrete advance event once
/// the threshold is crossed.
///
/// While locked, every delta is dropped entirely (not queued) - a rapid
/// flick arriving during the lock window is lost on purpose.
#[derive(Clone, Debug)]
pub struct GestureAccumulator {
    sum: f64,
    locked: bool,
    threshold: f64,
}

impl GestureAccumulator {
    pub fn new(threshold: f64) -> Self {
        Self {
            sum: 0.0,
            locked: false,
            threshold,
        }
    }

    /// Feeds a raw delta into the accumulator.
    ///
    /// Returns `Some(direction)` exactly when the unlocked running sum
    /// crosses the threshold; the sum is reset and the lock engaged at
    /// that point. Returns `None` otherwise (including while locked).
    pub fn accumulate(&mut self, delta: f64) -> Option<Direction> {
        if self.locked {
            return None;
        }
        self.sum += delta;
        if self.sum.abs() > self.threshold {
            let direction = Direction::from_delta(self.sum);
            self.sum = 0.0;
            self.locked = true;
            Some(direction)
        } else {
            None
        }
    }

    /// Releases the lock after the cooldown window has elapsed.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_advance_below_threshold() {
        let mut acc = GestureAccumulator::new(80.0);
        assert_eq!(acc.accumulate(30.0), None);
        assert_eq!(acc.accumulate(30.0), None);
        assert_eq!(acc.accumulate(20.0), None); // sum == 80, not strictly above
        assert!(!acc.is_locked());
    }

    #[test]
    fn test_advance_fires_on_crossing() {
        let mut acc = GestureAccumulator::new(80.0);
        assert_eq!(acc.accumulate(50.0), None);
        assert_eq!(acc.accumulate(50.0), Some(Direction::Forward));
        assert!(acc.is_locked());
    }

    #[test]
    fn test_negative_sum_emits_back() {
        let mut acc = GestureAccumulator::new(80.0);
        assert_eq!(acc.accumulate(-90.0), Some(Direction::Back));
    }

    #[test]
    fn test_sum_resets_after_advance() {
        let mut acc = GestureAccumulator::new(80.0);
        acc.accumulate(100.0);
        acc.unlock();
        // A fresh small delta must not re-trigger off stale accumulation.
        assert_eq!(acc.accumulate(10.0), None);
    }

    #[test]
    fn test_locked_drops_all_input() {
        let mut acc = GestureAccumulator::new(80.0);
        assert_eq!(acc.accumulate(100.0), Some(Direction::Forward));
        // Dropped, not queued: even a huge delta does nothing while locked.
        assert_eq!(acc.accumulate(10_000.0), None);
        acc.unlock();
        // And it left no residue behind.
        assert_eq!(acc.accumulate(10.0), None);
    }

    #[test]
    fn test_opposite_deltas_cancel() {
        let mut acc = GestureAccumulator::new(80.0);
        assert_eq!(acc.accumulate(70.0), None);
        assert_eq!(acc.accumulate(-70.0), None);
        assert_eq!(acc.accumulate(-90.0), Some(Direction::Back));
    }

    #[test]
    fn test_unlock_allows_next_gesture() {
        let mut acc = GestureAccumulator::new(80.0);
        acc.accumulate(100.0);
        acc.unlock();
        assert_eq!(acc.accumulate(100.0), Some(Direction::Forward));
    }
}
