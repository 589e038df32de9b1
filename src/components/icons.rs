//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ScrollHint, LuMenu as Menu, LuVolume2 as AudioOn, LuVolumeX as AudioOff,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronDown as ScrollHint, BsList as Menu, BsVolumeMute as AudioOff,
        BsVolumeUp as AudioOn, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(AUDIO_ON, AudioOn);
themed_icon!(AUDIO_OFF, AudioOff);
themed_icon!(SCROLL_HINT, ScrollHint);
