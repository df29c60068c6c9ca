//! Color helpers for cell rendering.
//!
//! Colors stay CSS strings end to end, since Canvas 2D consumes them
//! directly. This module only supplies the default palette and a light
//! sanity check for configured values.

/// Check that a configured color is plausibly a CSS color.
///
/// Hex colors must have 3, 4, 6 or 8 hex digits. Anything else must be a
/// non-empty keyword or functional notation such as `rgb(...)`.
pub fn is_css_color(s: &str) -> bool {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '(' | ')' | ',' | '.' | ' ' | '%' | '-'))
}

/// Default cell palette
pub mod palette {
    pub const WHITE: &str = "#FFFFFF";
    pub const BLACK: &str = "#000000";

    /// Cell border color (light gray)
    pub const CELL_BORDER: &str = "#CCCCCC";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert!(is_css_color("#FFF"));
        assert!(is_css_color("#ccccccff"));
        assert!(!is_css_color("#GGGGGG"));
        assert!(!is_css_color("#12345"));
    }

    #[test]
    fn test_named_and_functional_colors() {
        assert!(is_css_color("white"));
        assert!(is_css_color("rgba(255, 0, 0, 0.5)"));
        assert!(!is_css_color(""));
        assert!(!is_css_color("red; background: url(x)"));
    }
}
