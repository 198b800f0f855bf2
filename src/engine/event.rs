//! Button-press events.

use crate::engine::error::CalcError;
use crate::engine::operator::OperatorKind;

/// A single button press, carrying only its semantic payload.
///
/// This enum abstracts over the buttons a calculator frontend exposes, so the
/// engine never inspects widgets or raw label text outside [`Event::from_label`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A digit key, 0 through 9.
    Digit(u8),
    /// The decimal point key.
    DecimalPoint,
    /// Remove the last typed character.
    Backspace,
    /// Discard the current entry, keep the pending operation.
    ClearEntry,
    /// Full reset.
    ClearAll,
    /// Negate the displayed value.
    ToggleSign,
    /// A binary operator key.
    Operator(OperatorKind),
    /// Evaluate the pending (or last completed) operation.
    Equals,
}

impl Event {
    /// Decode a button label into an event.
    ///
    /// Recognizes the digit keys, `.`, `=`, backspace (`back`, `bs`, `⌫`),
    /// clear-entry (`ce`), clear-all (`c`, `ca`), sign toggle (`neg`, `+/-`,
    /// `±`) and the four operator labels. Anything else is treated as an
    /// unrecognized operator.
    pub fn from_label(label: &str) -> Result<Self, CalcError> {
        let label = label.trim();

        if let Some(digit) = parse_digit(label) {
            return Ok(Self::Digit(digit));
        }

        match label {
            "." => return Ok(Self::DecimalPoint),
            "=" => return Ok(Self::Equals),
            "⌫" => return Ok(Self::Backspace),
            "+/-" | "±" => return Ok(Self::ToggleSign),
            _ => {}
        }

        if label.eq_ignore_ascii_case("back") || label.eq_ignore_ascii_case("bs") {
            return Ok(Self::Backspace);
        }
        if label.eq_ignore_ascii_case("ce") {
            return Ok(Self::ClearEntry);
        }
        if label.eq_ignore_ascii_case("c") || label.eq_ignore_ascii_case("ca") {
            return Ok(Self::ClearAll);
        }
        if label.eq_ignore_ascii_case("neg") {
            return Ok(Self::ToggleSign);
        }

        OperatorKind::from_label(label).map(Self::Operator)
    }
}

fn parse_digit(label: &str) -> Option<u8> {
    let mut chars = label.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    ch.to_digit(10).map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_labels() {
        assert_eq!(Event::from_label("0"), Ok(Event::Digit(0)));
        assert_eq!(Event::from_label("7"), Ok(Event::Digit(7)));
        assert_eq!(Event::from_label("9"), Ok(Event::Digit(9)));
    }

    #[test]
    fn test_operator_labels() {
        assert_eq!(Event::from_label("+"), Ok(Event::Operator(OperatorKind::Add)));
        assert_eq!(Event::from_label("X"), Ok(Event::Operator(OperatorKind::Multiply)));
        assert_eq!(Event::from_label("/"), Ok(Event::Operator(OperatorKind::Divide)));
    }

    #[test]
    fn test_named_buttons_case_insensitive() {
        assert_eq!(Event::from_label("CE"), Ok(Event::ClearEntry));
        assert_eq!(Event::from_label("ce"), Ok(Event::ClearEntry));
        assert_eq!(Event::from_label("C"), Ok(Event::ClearAll));
        assert_eq!(Event::from_label("ca"), Ok(Event::ClearAll));
        assert_eq!(Event::from_label("Back"), Ok(Event::Backspace));
        assert_eq!(Event::from_label("neg"), Ok(Event::ToggleSign));
    }

    #[test]
    fn test_symbol_buttons() {
        assert_eq!(Event::from_label("."), Ok(Event::DecimalPoint));
        assert_eq!(Event::from_label("="), Ok(Event::Equals));
        assert_eq!(Event::from_label("+/-"), Ok(Event::ToggleSign));
        assert_eq!(Event::from_label("⌫"), Ok(Event::Backspace));
    }

    #[test]
    fn test_unknown_labels_are_operator_errors() {
        assert_eq!(Event::from_label("%"), Err(CalcError::UnknownOperator));
        assert_eq!(Event::from_label("12"), Err(CalcError::UnknownOperator));
        assert_eq!(Event::from_label("sqrt"), Err(CalcError::UnknownOperator));
    }

    #[test]
    fn test_labels_are_trimmed() {
        assert_eq!(Event::from_label(" 5 "), Ok(Event::Digit(5)));
        assert_eq!(Event::from_label(" x "), Ok(Event::Operator(OperatorKind::Multiply)));
    }
}
