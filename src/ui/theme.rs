use crossterm::style::Color;

use crate::domain::value_objects::CheckState;

/// Design tokens for the Canopy terminal UI.
///
/// Design constraints:
/// - Only the semantic colors in `colors::*`
/// - All icons and connector lines must be sourced from this module
pub mod colors {
    use super::Color;

    /// #06B6D4
    pub const CURSOR: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    // Check states.
    pub const CHECKED: &str = "●";
    pub const UNCHECKED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const SELECTED: &str = "★";
    pub const DISABLED: &str = "⊘";
    pub const SEARCH: &str = "🔍";
}

pub mod icons_ascii {
    pub const CHECKED: &str = "[x]";
    pub const UNCHECKED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    pub const EXPAND: &str = "v";
    pub const COLLAPSE: &str = ">";

    pub const SELECTED: &str = "*";
    pub const DISABLED: &str = "#";
    pub const SEARCH: &str = "/";
}

/// Connector lines between a node and its ancestors
pub mod lines {
    pub const BRANCH: &str = "├─ ";
    pub const LAST: &str = "└─ ";
    pub const VERTICAL: &str = "│  ";
    pub const BLANK: &str = "   ";
}

pub mod lines_ascii {
    pub const BRANCH: &str = "|- ";
    pub const LAST: &str = "`- ";
    pub const VERTICAL: &str = "|  ";
    pub const BLANK: &str = "   ";
}

/// Glyph set resolved once for a terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    unicode: bool,
}

impl Glyphs {
    /// `unicode = false` selects the ASCII fallback
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }

    pub fn check(&self, state: CheckState) -> &'static str {
        match (state, self.unicode) {
            (CheckState::Checked, true) => icons::CHECKED,
            (CheckState::Checked, false) => icons_ascii::CHECKED,
            (CheckState::Indeterminate, true) => icons::PARTIAL,
            (CheckState::Indeterminate, false) => icons_ascii::PARTIAL,
            (CheckState::Unchecked, true) => icons::UNCHECKED,
            (CheckState::Unchecked, false) => icons_ascii::UNCHECKED,
        }
    }

    pub fn expander(&self, expanded: bool) -> &'static str {
        match (expanded, self.unicode) {
            (true, true) => icons::EXPAND,
            (true, false) => icons_ascii::EXPAND,
            (false, true) => icons::COLLAPSE,
            (false, false) => icons_ascii::COLLAPSE,
        }
    }

    pub fn selected(&self) -> &'static str {
        if self.unicode {
            icons::SELECTED
        } else {
            icons_ascii::SELECTED
        }
    }

    pub fn disabled(&self) -> &'static str {
        if self.unicode {
            icons::DISABLED
        } else {
            icons_ascii::DISABLED
        }
    }

    pub fn search(&self) -> &'static str {
        if self.unicode {
            icons::SEARCH
        } else {
            icons_ascii::SEARCH
        }
    }

    /// Connector for the node itself
    pub fn branch(&self, is_last: bool) -> &'static str {
        match (is_last, self.unicode) {
            (true, true) => lines::LAST,
            (true, false) => lines_ascii::LAST,
            (false, true) => lines::BRANCH,
            (false, false) => lines_ascii::BRANCH,
        }
    }

    /// Filler below an ancestor; blank once that ancestor was the last child
    pub fn guide(&self, ancestor_is_last: bool) -> &'static str {
        match (ancestor_is_last, self.unicode) {
            (true, true) => lines::BLANK,
            (true, false) => lines_ascii::BLANK,
            (false, true) => lines::VERTICAL,
            (false, false) => lines_ascii::VERTICAL,
        }
    }
}
