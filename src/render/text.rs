//! Ellipsis truncation shared by every surface.

use std::borrow::Cow;

/// Unicode ellipsis appended to truncated labels
pub const ELLIPSIS: &str = "\u{2026}";

/// Truncate text with an ellipsis if it exceeds `max_width`.
///
/// `measure` returns the rendered width of a string in the label's font.
pub fn truncate_text<'a, F>(text: &'a str, max_width: f64, mut measure: F) -> Cow<'a, str>
where
    F: FnMut(&str) -> f64,
{
    if measure(text) <= max_width {
        return Cow::Borrowed(text);
    }

    let ellipsis_width = measure(ELLIPSIS);
    let available = max_width - ellipsis_width;

    if available <= 0.0 {
        return Cow::Borrowed(ELLIPSIS);
    }

    // Binary search for the longest prefix that fits
    let chars: Vec<char> = text.chars().collect();
    let mut low = 0;
    let mut high = chars.len();

    while low < high {
        let mid = (low + high).div_ceil(2);
        let truncated: String = chars.iter().take(mid).collect();
        if measure(&truncated) <= available {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut truncated: String = chars.iter().take(low).collect();
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}

/// Width estimate for surfaces without font metrics: a fixed advance of
/// `0.6 * font_size` per character.
pub fn estimate_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * 0.6
}
