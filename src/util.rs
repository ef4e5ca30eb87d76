/// Numeric conversion helpers.
///
/// Conversions between the two runtime representations, `i64` and `f64`.
/// Widening follows the usual `as` semantics; narrowing truncates toward zero
/// and reports an overflow instead of saturating when the value has no integer
/// counterpart.
pub mod num;
