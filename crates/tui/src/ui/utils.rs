//! Small layout helpers shared across the UI.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `text` so its display width fits in `width` cells, appending an
/// ellipsis when something was cut.
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_passes_through() {
        assert_eq!(fit_to_width("Students", 12), "Students");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(fit_to_width("Attendance overview", 10), "Attendanc…");
    }

    #[test]
    fn zero_width_yields_empty() {
        assert_eq!(fit_to_width("abc", 0), "");
    }
}
