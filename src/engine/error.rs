//! Error conditions the engine recovers from.

use thiserror::Error;

/// An invalid condition encountered while handling a button press.
///
/// These never escape the engine as a fault: each one is converted into a
/// user notification and a full state reset, so the next keystroke starts
/// from a known-good baseline. The `Display` text of each variant is the
/// exact message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The display text does not read back as a finite number.
    #[error("Invalid number on display. Calculator has been cleared.")]
    InvalidDisplay,

    /// An operator label outside `+`, `-`, `x`/`X`/`*`, `/`.
    #[error("Unknown operator. Calculator has been cleared.")]
    UnknownOperator,

    /// A division was attempted with a zero divisor.
    #[error("Cannot divide by zero.")]
    DivideByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            CalcError::InvalidDisplay.to_string(),
            "Invalid number on display. Calculator has been cleared."
        );
        assert_eq!(CalcError::DivideByZero.to_string(), "Cannot divide by zero.");
        assert_eq!(
            CalcError::UnknownOperator.to_string(),
            "Unknown operator. Calculator has been cleared."
        );
    }
}
