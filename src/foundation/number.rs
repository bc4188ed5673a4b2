//! Display and entry policy for numeric fields.
//!
//! The four functions here must agree with each other: a value whose
//! magnitude sits strictly between 0 and 1 always gets both the fine entry
//! step and decimal display, everything else gets integer display and a
//! whole-number step.

/// True when `v` sits in the sub-unity band `(-1, 1)` excluding zero.
fn is_sub_unity(v: f64) -> bool {
    v != 0.0 && v.abs() < 1.0
}

/// Format a committed value for display in a text field.
///
/// Sub-unity magnitudes keep three decimal places, everything else is
/// rounded to an integer string. Zero displays as `"0"`.
pub fn format_for_display(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.abs() < 1.0 {
        format!("{v:.3}")
    } else {
        format!("{}", v.round() as i64)
    }
}

/// Parse free-text numeric entry; anything unparseable maps to `0.0`.
pub fn parse_from_string(s: &str) -> f64 {
    parse_leading_float(s.trim()).unwrap_or(0.0)
}

/// Entry step for a value: `0.001` in the sub-unity band, else `1`.
pub fn step_for_value(v: f64) -> f64 {
    if is_sub_unity(v) { 0.001 } else { 1.0 }
}

/// Whether display should carry decimal places for this value.
///
/// Same predicate as [`step_for_value`].
pub fn should_use_decimal_formatting(v: f64) -> bool {
    is_sub_unity(v)
}

// parseFloat semantics: consume the longest leading prefix that reads as a
// float, ignore the rest. `f64::from_str` alone rejects "1.5abc".
fn parse_leading_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;

    while end < bytes.len() {
        let b = bytes[end];
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'+' | b'-' => {
                let prev = if end == 0 { None } else { Some(bytes[end - 1]) };
                let at_start = end == 0;
                let after_exp = matches!(prev, Some(b'e') | Some(b'E'));
                if !(at_start || after_exp) {
                    break;
                }
            }
            b'.' => {
                if seen_dot || seen_exp {
                    break;
                }
                seen_dot = true;
            }
            b'e' | b'E' => {
                if seen_exp || !seen_digit {
                    break;
                }
                seen_exp = true;
            }
            _ => break,
        }
        end += 1;
    }

    // Trim a dangling exponent marker ("1e", "1e-") back to the mantissa.
    while end > 0 && s[..end].parse::<f64>().is_err() {
        end -= 1;
    }

    if end == 0 || !seen_digit {
        return None;
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/number.rs"]
mod tests;
