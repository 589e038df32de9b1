//! Glyph-reveal ("scramble") frame generation.
//!
//! A scramble frame always has the same character count as the target
//! text: the first `reveal` characters are locked to their final value,
//! the rest are drawn from [`GLYPHS`] anew on every frame. Two pacing
//! models exist and look visibly different:
//!
//! - [`TimedReveal`] maps elapsed time to the reveal count (used by the
//!   hero caption, frame-rate-capped by its component).
//! - [`SteppedReveal`] advances a fixed character count per animation
//!   callback after a delay (used by the about page lead paragraph).
//!
//! The glyph picker is injected so frames are deterministic under test;
//! components supply `js_sys::Math::random`.

/// Alphabet the unrevealed tail is drawn from.
pub const GLYPHS: &[char] = &[
    '█', '▓', '▒', '░', '#', '@', '$', '%', '&', '*', '+', '=', '-', '_', '/', '\\', '|', '<', '>',
    '~', '^', '?',
];

/// Builds one frame: the revealed prefix of `target` followed by random
/// glyphs. `pick(n)` must return a value in `[0, n)`.
pub fn frame(target: &[char], reveal: usize, pick: &mut impl FnMut(usize) -> usize) -> String {
    target
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if i < reveal {
                c
            } else {
                GLYPHS[pick(GLYPHS.len()) % GLYPHS.len()]
            }
        })
        .collect()
}

// ============================================================================
// Timed pacing
// ============================================================================

/// Time-driven reveal: `reveal(t) = floor(clamp(t/duration, 0, 1) * len)`.
#[derive(Clone, Debug)]
pub struct TimedReveal {
    target: Vec<char>,
    duration_ms: f64,
}

impl TimedReveal {
    pub fn new(text: &str, duration_ms: f64) -> Self {
        Self {
            target: text.chars().collect(),
            duration_ms,
        }
    }

    /// Reveal count at `elapsed_ms` since the animation started.
    pub fn reveal_at(&self, elapsed_ms: f64) -> usize {
        let t = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        (t * self.target.len() as f64).floor() as usize
    }

    /// Frame at `elapsed_ms`. Once the duration has elapsed the frame is
    /// the target text verbatim and `done` is true; the caller stops the
    /// sequence there (replay requires a new instance).
    pub fn frame_at(
        &self,
        elapsed_ms: f64,
        pick: &mut impl FnMut(usize) -> usize,
    ) -> (String, bool) {
        if elapsed_ms >= self.duration_ms {
            (self.target.iter().collect(), true)
        } else {
            (frame(&self.target, self.reveal_at(elapsed_ms), pick), false)
        }
    }
}

// ============================================================================
// Stepped pacing
// ============================================================================

/// Callback-driven reveal: advances by a fixed character count per call,
/// independent of elapsed time.
#[derive(Clone, Debug)]
pub struct SteppedReveal {
    target: Vec<char>,
    revealed: usize,
    chars_per_frame: usize,
}

impl SteppedReveal {
    pub fn new(text: &str, chars_per_frame: usize) -> Self {
        Self {
            target: text.chars().collect(),
            revealed: 0,
            chars_per_frame,
        }
    }

    /// Advances one step and returns the frame. `done` is true on the
    /// step that reaches the full text; that frame is the target verbatim.
    pub fn advance(&mut self, pick: &mut impl FnMut(usize) -> usize) -> (String, bool) {
        self.revealed = (self.revealed + self.chars_per_frame).min(self.target.len());
        if self.revealed == self.target.len() {
            (self.target.iter().collect(), true)
        } else {
            (frame(&self.target, self.revealed, pick), false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick_zero(_: usize) -> usize {
        0
    }

    #[test]
    fn test_frame_length_matches_text() {
        let target: Vec<char> = "menu".chars().collect();
        for reveal in 0..=4 {
            let out = frame(&target, reveal, &mut pick_zero);
            assert_eq!(out.chars().count(), 4);
        }
    }

    #[test]
    fn test_revealed_prefix_is_verbatim() {
        let target: Vec<char> = "menu".chars().collect();
        let out = frame(&target, 2, &mut pick_zero);
        let chars: Vec<char> = out.chars().collect();
        assert_eq!(&chars[..2], &['m', 'e']);
        assert_eq!(chars[2], GLYPHS[0]);
        assert_eq!(chars[3], GLYPHS[0]);
    }

    #[test]
    fn test_timed_reveal_at_zero_is_zero() {
        let reveal = TimedReveal::new("menu", 700.0);
        assert_eq!(reveal.reveal_at(0.0), 0);
    }

    #[test]
    fn test_timed_reveal_monotone_and_clamped() {
        let reveal = TimedReveal::new("menu", 700.0);
        let mut last = 0;
        for t in [0.0, 175.0, 350.0, 525.0, 700.0, 5_000.0] {
            let r = reveal.reveal_at(t);
            assert!(r >= last);
            assert!(r <= 4);
            last = r;
        }
        assert_eq!(reveal.reveal_at(10_000.0), 4);
    }

    #[test]
    fn test_timed_final_frame_is_exact_text() {
        let reveal = TimedReveal::new("menu", 700.0);
        let (out, done) = reveal.frame_at(700.0, &mut pick_zero);
        assert_eq!(out, "menu");
        assert!(done);
    }

    #[test]
    fn test_timed_mid_frame_not_done() {
        let reveal = TimedReveal::new("menu", 700.0);
        let (out, done) = reveal.frame_at(350.0, &mut pick_zero);
        assert!(!done);
        assert_eq!(out.chars().count(), 4);
    }

    #[test]
    fn test_timed_multibyte_text() {
        let reveal = TimedReveal::new("résumé", 100.0);
        let (out, done) = reveal.frame_at(100.0, &mut pick_zero);
        assert_eq!(out, "résumé");
        assert!(done);
        let (mid, _) = reveal.frame_at(50.0, &mut pick_zero);
        assert_eq!(mid.chars().count(), 6);
    }

    #[test]
    fn test_stepped_reaches_text_and_stops() {
        let mut reveal = SteppedReveal::new("portfolio", 4);
        let (f1, d1) = reveal.advance(&mut pick_zero);
        assert!(!d1);
        assert_eq!(f1.chars().count(), 9);
        assert!(f1.starts_with("port"));
        let (_, d2) = reveal.advance(&mut pick_zero);
        assert!(!d2);
        let (f3, d3) = reveal.advance(&mut pick_zero);
        assert!(d3);
        assert_eq!(f3, "portfolio");
    }

    #[test]
    fn test_stepped_step_larger_than_text() {
        let mut reveal = SteppedReveal::new("hi", 4);
        let (out, done) = reveal.advance(&mut pick_zero);
        assert_eq!(out, "hi");
        assert!(done);
    }
}
