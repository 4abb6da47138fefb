/// Absolute-difference comparison used for every target check.
#[inline]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// True when `value` is too close to zero to divide by.
#[inline]
pub fn is_negligible(value: f64, tolerance: f64) -> bool {
    value.abs() < tolerance
}

/// Canonical decimal rendering of a card value.
///
/// Integral values are written without a decimal point (`5`, not `5.0`);
/// anything else uses the shortest representation that parses back to the
/// same `f64` (`2.5`, `0.3333333333333333`).
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", value)
}
