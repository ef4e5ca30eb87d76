use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Smallest `f64` that is no longer representable as an `i64` (`2^63`).
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Widens an integer to a double.
///
/// Integers beyond `2^53` in magnitude are rounded to the nearest double, as
/// any mixed int/double arithmetic does.
///
/// ## Example
/// ```
/// use mao::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Narrows a double to an integer, truncating toward zero.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value is NaN, infinite, or outside
/// the range of `i64` after truncation.
///
/// ## Parameters
/// - `value`: The double to convert.
/// - `line`: Source code line number for error reporting.
///
/// ## Example
/// ```
/// use mao::{error::RuntimeError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(7.9, 1).unwrap(), 7);
/// assert_eq!(f64_to_i64_truncated(-2.5, 1).unwrap(), -2);
///
/// let err = f64_to_i64_truncated(f64::NAN, 3).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { line: 3 }));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated(value: f64, line: usize) -> EvalResult<i64> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < -I64_UPPER_BOUND || truncated >= I64_UPPER_BOUND {
        return Err(RuntimeError::Overflow { line });
    }
    Ok(truncated as i64)
}
