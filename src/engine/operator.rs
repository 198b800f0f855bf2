//! Binary operator parsing and arithmetic.

use crate::engine::error::CalcError;

/// One of the four binary arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperatorKind {
    /// Parse a button label into an operator.
    ///
    /// Multiplication accepts `x`, `X`, and `*`.
    pub fn from_label(label: &str) -> Result<Self, CalcError> {
        match label.trim() {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "x" | "X" | "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            _ => Err(CalcError::UnknownOperator),
        }
    }

    /// Apply the operator to a pair of operands.
    ///
    /// Division checks the divisor up front so the result is always finite.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Subtract => Ok(left - right),
            Self::Multiply => Ok(left * right),
            Self::Divide => {
                if right == 0.0 {
                    Err(CalcError::DivideByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }

}
