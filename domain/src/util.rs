//! Text helpers shared by logging and error reporting.

use std::borrow::Cow;

/// Longest prefix of `s` that fits in `max_bytes` and ends on a char boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let end = (0..=max_bytes)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    &s[..end]
}

/// Short single-line rendering of model text for log fields.
///
/// Newlines are flattened and clipped text is marked with the original length.
pub fn preview(s: &str, max_bytes: usize) -> Cow<'_, str> {
    let clipped = truncate_str(s, max_bytes);
    if clipped.len() == s.len() && !s.contains('\n') {
        return Cow::Borrowed(s);
    }
    let flat = clipped.replace('\n', " ");
    if clipped.len() == s.len() {
        Cow::Owned(flat)
    } else {
        Cow::Owned(format!("{flat}... ({} bytes)", s.len()))
    }
}
