//! Top-level sections and the gesture-exit table.

use crate::core::Direction;

/// The four mutually exclusive top-level views.
///
/// Exactly one is active at any time; there is no history stack -
/// switching sections is direct. Transitions are triggered either by an
/// explicit navigation command (always legal) or by a boundary gesture
/// resolved through [`Section::gesture_exit`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    Menu,
    Portfolio,
    About,
}

impl Section {
    /// Where a boundary gesture in `direction` leads from this section,
    /// if anywhere.
    ///
    /// For `Menu` this applies only once its slide cursor reports a
    /// boundary; `Portfolio` and `About` treat any motion as an exit.
    pub fn gesture_exit(self, direction: Direction) -> Option<Section> {
        match (self, direction) {
            (Self::Home, Direction::Forward) => Some(Self::Menu),
            (Self::Menu, Direction::Back) => Some(Self::Home),
            (Self::Menu, Direction::Forward) => Some(Self::Portfolio),
            (Self::Portfolio, Direction::Back) => Some(Self::Menu),
            (Self::Portfolio, Direction::Forward) => Some(Self::About),
            (Self::About, Direction::Back) => Some(Self::Portfolio),
            _ => None,
        }
    }

    /// Sections rendered on a dark ground; drives nav chrome colors.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Menu | Self::Portfolio)
    }

    /// Lowercase label for the nav dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Menu => "menu",
            Self::Portfolio => "portfolio",
            Self::About => "about",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GestureAccumulator;

    #[test]
    fn test_initial_section_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_dead_end_emission_must_not_strand_the_section() {
        // An upward flick on home emits Back, which exits nowhere. The
        // owner releases the lock on such emissions; a later downward
        // gesture still has to reach the menu.
        let mut acc = GestureAccumulator::new(80.0);
        let direction = acc.accumulate(-90.0).expect("threshold crossed");
        assert_eq!(Section::Home.gesture_exit(direction), None);
        acc.unlock();

        let direction = acc.accumulate(100.0).expect("lock released");
        assert_eq!(Section::Home.gesture_exit(direction), Some(Section::Menu));
    }

    #[test]
    fn test_home_exits_forward_only() {
        assert_eq!(
            Section::Home.gesture_exit(Direction::Forward),
            Some(Section::Menu)
        );
        assert_eq!(Section::Home.gesture_exit(Direction::Back), None);
    }

    #[test]
    fn test_menu_boundaries() {
        assert_eq!(
            Section::Menu.gesture_exit(Direction::Back),
            Some(Section::Home)
        );
        assert_eq!(
            Section::Menu.gesture_exit(Direction::Forward),
            Some(Section::Portfolio)
        );
    }

    #[test]
    fn test_portfolio_exits_both_ways() {
        assert_eq!(
            Section::Portfolio.gesture_exit(Direction::Back),
            Some(Section::Menu)
        );
        assert_eq!(
            Section::Portfolio.gesture_exit(Direction::Forward),
            Some(Section::About)
        );
    }

    #[test]
    fn test_about_exits_upward_only() {
        assert_eq!(
            Section::About.gesture_exit(Direction::Back),
            Some(Section::Portfolio)
        );
        assert_eq!(Section::About.gesture_exit(Direction::Forward), None);
    }

    #[test]
    fn test_dark_sections() {
        assert!(Section::Menu.is_dark());
        assert!(Section::Portfolio.is_dark());
        assert!(!Section::Home.is_dark());
        assert!(!Section::About.is_dark());
    }
}
