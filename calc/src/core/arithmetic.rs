//! Binary arithmetic on `f64` operands.
//!
//! Everything except [`divide`] is total and follows IEEE-754: NaN and
//! infinities pass straight through.

use thiserror::Error;

/// Failure kinds produced by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// Divisor was exactly zero (`0.0` or `-0.0`).
    #[error("division by zero")]
    DivisionByZero,
    /// Operation tag not recognized.
    #[error("invalid operation")]
    InvalidOperation,
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`, rejecting a zero divisor.
///
/// A NaN divisor is not zero and yields NaN.
pub fn divide(a: f64, b: f64) -> Result<f64, CalculationError> {
    if b == 0.0 {
        return Err(CalculationError::DivisionByZero);
    }
    Ok(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_operations() {
        assert_eq!(add(15.5, 4.2), 15.5 + 4.2);
        assert_eq!(subtract(15.5, 4.2), 15.5 - 4.2);
        assert_eq!(multiply(15.5, 4.2), 15.5 * 4.2);
        assert_eq!(divide(9.0, 3.0), Ok(3.0));
    }

    #[test]
    fn divide_rejects_both_signed_zeros() {
        assert_eq!(divide(1.0, 0.0), Err(CalculationError::DivisionByZero));
        assert_eq!(divide(1.0, -0.0), Err(CalculationError::DivisionByZero));
    }

    /// Non-finite inputs follow IEEE semantics instead of erroring.
    #[test]
    fn non_finite_inputs_pass_through() {
        assert!(add(f64::NAN, 1.0).is_nan());
        assert_eq!(multiply(f64::INFINITY, 2.0), f64::INFINITY);
        assert!(divide(1.0, f64::NAN).expect("nan is not zero").is_nan());
        assert_eq!(divide(1.0, f64::INFINITY), Ok(0.0));
        assert!(subtract(f64::INFINITY, f64::INFINITY).is_nan());
    }

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(CalculationError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            CalculationError::InvalidOperation.to_string(),
            "invalid operation"
        );
    }
}
