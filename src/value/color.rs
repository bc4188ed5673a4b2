//! Hex color validation used by the color picker edit model.

/// True for `#rgb` and `#rrggbb` with hex digits only.
///
/// Equivalent to the pattern `^#([0-9A-Fa-f]{3}){1,2}$`.
pub fn is_valid_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Expand `#rgb` shorthand to `#rrggbb`; full-length values pass through.
///
/// Returns `None` when the input is not a valid hex color.
pub fn expand_hex_color(s: &str) -> Option<String> {
    if !is_valid_hex_color(s) {
        return None;
    }
    let digits = &s[1..];
    if digits.len() == 6 {
        return Some(s.to_string());
    }
    let mut out = String::with_capacity(7);
    out.push('#');
    for c in digits.chars() {
        out.push(c);
        out.push(c);
    }
    Some(out)
}
