use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Fit `s` into `max_width` columns, ending with an ellipsis when cut.
///
/// Returns the input unchanged (borrowed) when it already fits.
///
/// ```
/// use helpdesk::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Reports", 10), "Reports");
/// assert_eq!(truncate_to_width("Reports and Analytics", 8), "Reports…");
/// assert_eq!(truncate_to_width("Reports", 0), "");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::with_capacity(s.len().min(max_width * 4));
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    Cow::Owned(out)
}

/// Remove terminal control characters and ANSI escape sequences.
///
/// Sheet cells are user-edited, so anything drawn to the terminal goes
/// through here first. Tab and newline are kept.
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    let dirty = |c: char| c == '\x1b' || c == '\x7f' || (c.is_ascii_control() && c != '\t' && c != '\n');
    if !s.chars().any(dirty) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            match chars.peek() {
                // CSI: parameters until a final byte in @..~
                Some('[') => {
                    chars.next();
                    for n in chars.by_ref() {
                        if ('@'..='~').contains(&n) {
                            break;
                        }
                    }
                }
                // OSC: until BEL or ESC \
                Some(']') => {
                    chars.next();
                    while let Some(n) = chars.next() {
                        if n == '\x07' {
                            break;
                        }
                        if n == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }
        if !dirty(c) {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
