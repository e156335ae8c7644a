use serde_json::{Number, Value};

/// Collapses a whole-valued float into a JSON integer.
///
/// Point values arrive as either integers or floats depending on how the
/// caller entered them; storing `15` and `15.0` interchangeably would make
/// stored documents drift between saves and equality checks inconsistent.
///
/// # Arguments
/// - `value` - The numeric value to normalize
///
/// # Returns
/// - `Number` - An integer number when `value` is whole and within i64
///   range, otherwise the float unchanged
pub fn tidy_number(value: f64) -> Number {
    // The upper bound is exclusive: i64::MAX itself is not exactly
    // representable as f64, so 2^63 must stay a float.
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        return Number::from(value as i64);
    }

    // Non-finite values have no JSON representation and collapse to 0.
    Number::from_f64(value).unwrap_or_else(|| Number::from(0))
}

/// Applies `tidy_number` to every number in a document tree.
///
/// Run on every load and save so documents on disk never carry a spurious
/// trailing `.0` and repeated load/save cycles are byte-stable.
///
/// # Arguments
/// - `value` - The document (or subtree) to normalize in place
pub fn tidy_document(value: &mut Value) {
    match value {
        Value::Number(number) => {
            if number.is_f64() {
                if let Some(float) = number.as_f64() {
                    *number = tidy_number(float);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                tidy_document(item);
            }
        }
        Value::Object(map) => {
            for item in map.values_mut() {
                tidy_document(item);
            }
        }
        _ => {}
    }
}

/// Renders a point total without a trailing fractional zero.
///
/// # Arguments
/// - `value` - The point total to render
///
/// # Returns
/// - `String` - `"15"` for `15.0`, `"15.5"` for `15.5`
pub fn fmt_points(value: f64) -> String {
    tidy_number(value).to_string()
}
