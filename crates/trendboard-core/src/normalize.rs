use trendboard_parser::RawValue;

/// The sentinel the source export writes for a missing measurement.
const MISSING_SENTINEL: &str = "NA";

/// Coerces a raw cell value into a numeric quantity. Numbers pass through
/// unchanged; empty text, the `NA` sentinel, nulls, and text that does not
/// parse as a number all degrade to `None`. Never fails.
pub fn normalize(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(number) => Some(*number),
        RawValue::Null => None,
        RawValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed == MISSING_SENTINEL {
                return None;
            }
            match trimmed.parse::<f64>() {
                Ok(parsed) if !parsed.is_nan() => Some(parsed),
                _ => None,
            }
        }
    }
}
