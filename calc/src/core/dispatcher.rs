//! Operation dispatch: by tag, or through a caller-supplied strategy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::arithmetic::{CalculationError, add, divide, multiply, subtract};

/// Arithmetic operation selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
        }
    }

    /// Apply this operation to `a` and `b`.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalculationError> {
        calculate(a, b, self)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
        };
        f.write_str(name)
    }
}

/// Accepts symbols (`+ - * x /`), short names (`add`) and long names (`addition`).
impl FromStr for Operation {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" | "addition" => Ok(Operation::Addition),
            "-" | "sub" | "subtract" | "subtraction" => Ok(Operation::Subtraction),
            "*" | "x" | "mul" | "multiply" | "multiplication" => Ok(Operation::Multiplication),
            "/" | "div" | "divide" | "division" => Ok(Operation::Division),
            _ => Err(CalculationError::InvalidOperation),
        }
    }
}

/// Dispatch `operation` on `a` and `b`.
///
/// Only [`Operation::Division`] can fail, with [`CalculationError::DivisionByZero`].
pub fn calculate(a: f64, b: f64, operation: Operation) -> Result<f64, CalculationError> {
    match operation {
        Operation::Addition => Ok(add(a, b)),
        Operation::Subtraction => Ok(subtract(a, b)),
        Operation::Multiplication => Ok(multiply(a, b)),
        Operation::Division => divide(a, b),
    }
}

/// Apply a caller-supplied strategy to `a` and `b`.
///
/// The strategy's return value is handed back untouched, so a strategy that
/// returns `Result` keeps its own error type.
pub fn calculate_with_strategy<R, F>(a: f64, b: f64, strategy: F) -> R
where
    F: FnOnce(f64, f64) -> R,
{
    strategy(a, b)
}

/// Left fold seeded with the first element.
///
/// Returns `None` for an empty slice. A single element is returned as-is.
pub fn fold_with_strategy<F>(numbers: &[f64], mut strategy: F) -> Option<f64>
where
    F: FnMut(f64, f64) -> f64,
{
    let (first, rest) = numbers.split_first()?;
    Some(rest.iter().fold(*first, |acc, &x| strategy(acc, x)))
}

/// [`fold_with_strategy`] for strategies that can fail; stops at the first error.
pub fn try_fold_with_strategy<E, F>(numbers: &[f64], mut strategy: F) -> Result<Option<f64>, E>
where
    F: FnMut(f64, f64) -> Result<f64, E>,
{
    let Some((first, rest)) = numbers.split_first() else {
        return Ok(None);
    };
    rest.iter()
        .try_fold(*first, |acc, &x| strategy(acc, x))
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_dispatches_each_operation() {
        assert_eq!(calculate(6.0, 3.0, Operation::Addition), Ok(9.0));
        assert_eq!(calculate(6.0, 3.0, Operation::Subtraction), Ok(3.0));
        assert_eq!(calculate(6.0, 3.0, Operation::Multiplication), Ok(18.0));
        assert_eq!(calculate(6.0, 3.0, Operation::Division), Ok(2.0));
    }

    #[test]
    fn calculate_propagates_division_by_zero() {
        assert_eq!(
            calculate(6.0, 0.0, Operation::Division),
            Err(CalculationError::DivisionByZero)
        );
        // Other operations accept a zero operand.
        assert_eq!(calculate(6.0, 0.0, Operation::Multiplication), Ok(0.0));
    }

    #[test]
    fn strategy_result_is_returned_unchanged() {
        assert_eq!(calculate_with_strategy(15.5, 4.2, |x, y| x + y), 15.5 + 4.2);
        assert_eq!(calculate_with_strategy(2.0, 10.0, f64::powf), 1024.0);

        let failed: Result<f64, CalculationError> = calculate_with_strategy(1.0, 0.0, divide);
        assert_eq!(failed, Err(CalculationError::DivisionByZero));

        let other: Result<f64, String> =
            calculate_with_strategy(1.0, 2.0, |_, _| Err("custom".to_string()));
        assert_eq!(other, Err("custom".to_string()));
    }

    #[test]
    fn fold_empty_is_none() {
        assert_eq!(fold_with_strategy(&[], |a, b| a + b), None);
        assert_eq!(fold_with_strategy(&[], |_, _| 42.0), None);
    }

    #[test]
    fn fold_single_element_returns_it() {
        assert_eq!(fold_with_strategy(&[7.0], |_, _| 0.0), Some(7.0));
    }

    /// Subtraction is not commutative, so the result pins application order.
    #[test]
    fn fold_applies_left_to_right() {
        assert_eq!(fold_with_strategy(&[10.0, 1.0, 2.0, 3.0], |a, b| a - b), Some(4.0));
        assert_eq!(fold_with_strategy(&[100.0, 2.0, 5.0], |a, b| a / b), Some(10.0));
    }

    #[test]
    fn try_fold_stops_at_first_error() {
        let mut calls = 0;
        let result = try_fold_with_strategy(&[8.0, 2.0, 0.0, 4.0], |a, b| {
            calls += 1;
            divide(a, b)
        });
        assert_eq!(result, Err(CalculationError::DivisionByZero));
        assert_eq!(calls, 2);

        let ok = try_fold_with_strategy(&[8.0, 2.0, 2.0], divide);
        assert_eq!(ok, Ok(Some(2.0)));

        let empty = try_fold_with_strategy(&[], divide);
        assert_eq!(empty, Ok(None));
    }

    #[test]
    fn parses_symbols_and_names() {
        assert_eq!("+".parse::<Operation>(), Ok(Operation::Addition));
        assert_eq!("sub".parse::<Operation>(), Ok(Operation::Subtraction));
        assert_eq!("X".parse::<Operation>(), Ok(Operation::Multiplication));
        assert_eq!(" division ".parse::<Operation>(), Ok(Operation::Division));
        assert_eq!(
            "%".parse::<Operation>(),
            Err(CalculationError::InvalidOperation)
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }
}
