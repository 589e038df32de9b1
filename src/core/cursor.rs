//! Bounded cursor over an ordered list of slides.

use super::Direction;

/// Result of asking the cursor to advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorStep {
    /// Cursor moved to this index.
    Moved(usize),
    /// Cursor was already at the edge; further movement in that
    /// direction is a section exit, and the cursor did not move.
    Boundary(Direction),
}

/// Linear cursor over a fixed list of entries.
///
/// Never wraps: advancing past either end reports a [`CursorStep::Boundary`]
/// so the owner can reinterpret the gesture as a section change.
#[derive(Clone, Copy, Debug)]
pub struct SlideCursor {
    index: usize,
    len: usize,
}

impl SlideCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self, direction: Direction) -> CursorStep {
        match direction {
            Direction::Back => {
                if self.index == 0 {
                    CursorStep::Boundary(Direction::Back)
                } else {
                    self.index -= 1;
                    CursorStep::Moved(self.index)
                }
            }
            Direction::Forward => {
                if self.index + 1 >= self.len {
                    CursorStep::Boundary(Direction::Forward)
                } else {
                    self.index += 1;
                    CursorStep::Moved(self.index)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_and_back() {
        let mut cursor = SlideCursor::new(3);
        assert_eq!(cursor.advance(Direction::Forward), CursorStep::Moved(1));
        assert_eq!(cursor.advance(Direction::Forward), CursorStep::Moved(2));
        assert_eq!(cursor.advance(Direction::Back), CursorStep::Moved(1));
    }

    #[test]
    fn test_back_at_first_is_boundary() {
        let mut cursor = SlideCursor::new(3);
        assert_eq!(
            cursor.advance(Direction::Back),
            CursorStep::Boundary(Direction::Back)
        );
        // Cursor did not move.
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_forward_at_last_is_boundary() {
        let mut cursor = SlideCursor::new(2);
        cursor.advance(Direction::Forward);
        assert_eq!(
            cursor.advance(Direction::Forward),
            CursorStep::Boundary(Direction::Forward)
        );
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_single_entry_list() {
        let mut cursor = SlideCursor::new(1);
        assert_eq!(
            cursor.advance(Direction::Forward),
            CursorStep::Boundary(Direction::Forward)
        );
        assert_eq!(
            cursor.advance(Direction::Back),
            CursorStep::Boundary(Direction::Back)
        );
    }
}
