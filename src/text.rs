//! Text display width utilities for proper Unicode handling
//!
//! All padding primitives measure in terminal columns, so a CJK glyph
//! occupies two of the requested `width`. The result is always exactly
//! `width` columns wide.

use unicode_width::UnicodeWidthStr;

/// Return the display width of a string, accounting for CJK double-width characters.
///
/// Control characters count as one column each, so plain ASCII text is as
/// wide as it is long.
pub fn display_width(s: &str) -> usize {
    let controls = s.chars().filter(|c| c.is_control()).count();
    let printable: usize = s.split(char::is_control).map(UnicodeWidthStr::width).sum();
    printable + controls
}

/// Cut `text` to at most `width` columns, returning the prefix and its width.
///
/// Measures each candidate prefix as a whole so glyph sequences such as a
/// variation selector are counted the same way `display_width` counts them.
fn truncate(text: &str, width: usize) -> (&str, usize) {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let next = idx + ch.len_utf8();
        let w = display_width(&text[..next]);
        if w > width {
            return (&text[..idx], used);
        }
        used = w;
    }
    (text, used)
}

/// Prefix of `text` exactly `width` columns wide, filled on the right if a
/// wide glyph had to be dropped at the boundary.
fn clip(text: &str, width: usize, fill: char) -> String {
    let (head, used) = truncate(text, width);
    let mut out = String::with_capacity(head.len() + width - used);
    out.push_str(head);
    out.extend(std::iter::repeat_n(fill, width - used));
    out
}

fn pad(text: &str, left: usize, right: usize, fill: char) -> String {
    let mut out = String::with_capacity(text.len() + left + right);
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(fill, right));
    out
}

/// Right-justify `text` by prepending `fill`.
pub fn left_pad(text: &str, width: usize, fill: char) -> String {
    let len = display_width(text);
    if len >= width {
        return clip(text, width, fill);
    }
    pad(text, width - len, 0, fill)
}

/// Left-justify `text` by appending `fill`.
pub fn right_pad(text: &str, width: usize, fill: char) -> String {
    let len = display_width(text);
    if len >= width {
        return clip(text, width, fill);
    }
    pad(text, 0, width - len, fill)
}

/// Center `text`; an odd leftover column goes to the right.
pub fn center_pad(text: &str, width: usize, fill: char) -> String {
    let len = display_width(text);
    if len >= width {
        return clip(text, width, fill);
    }
    let total = width - len;
    let left = total / 2;
    pad(text, left, total - left, fill)
}
