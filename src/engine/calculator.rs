//! The calculator state machine.

use crate::engine::error::CalcError;
use crate::engine::event::Event;
use crate::engine::operator::OperatorKind;

/// A user-facing warning produced when the engine recovers from an error.
///
/// By the time a notification is returned the engine has already reset
/// itself; presenting the message is the frontend's job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// One-line human-readable message.
    pub message: String,
}

/// The calculator engine: a display buffer plus operator/operand state.
///
/// Consumes discrete button-press [`Event`]s and rewrites the display after
/// each one. Invalid conditions (unparseable display text, unknown operator
/// label, division by zero) never surface as errors to the caller: the engine
/// emits a [`Notification`] and performs a full reset instead, so the next
/// keystroke starts from the initial state.
#[derive(Clone, Debug)]
pub struct Calculator {
    /// The number being typed or the last computed result. Never empty.
    display: String,
    /// Left-hand operand of the pending operation; running result after `=`.
    left_operand: f64,
    /// Operator awaiting its right-hand operand.
    operator: Option<OperatorKind>,
    /// Set when an operator was just pressed, so the next digit or decimal
    /// point starts a fresh number instead of extending the display.
    awaiting_right_operand: bool,
    /// Operator of the most recently completed operation, kept so a bare `=`
    /// can repeat it.
    last_operator: Option<OperatorKind>,
    /// Right-hand operand of the most recently completed operation.
    last_operand: Option<f64>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// A calculator in its initial state: display `"0"`, nothing pending.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            left_operand: 0.0,
            operator: None,
            awaiting_right_operand: false,
            last_operator: None,
            last_operand: None,
        }
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Overwrite the display text.
    ///
    /// The display doubles as a text field the hosting UI owns, so arbitrary
    /// text can land here. Every operation that reads the display re-parses
    /// it and recovers if it no longer holds a number.
    pub fn overwrite_display(&mut self, text: impl Into<String>) {
        self.display = text.into();
    }

    /// Decode a button label and handle the resulting event.
    ///
    /// A label that decodes to no known button follows the same recovery path
    /// as any other engine error: notification plus full reset.
    pub fn press(&mut self, label: &str) -> Option<Notification> {
        match Event::from_label(label) {
            Ok(event) => self.handle(event),
            Err(err) => Some(self.notify_and_reset(err)),
        }
    }

    /// Handle one button press.
    ///
    /// Returns a notification when the engine had to recover from an invalid
    /// condition; the state has already been fully reset in that case.
    pub fn handle(&mut self, event: Event) -> Option<Notification> {
        let result = match event {
            Event::Digit(digit) => {
                self.press_digit(digit);
                Ok(())
            }
            Event::DecimalPoint => {
                self.press_decimal_point();
                Ok(())
            }
            Event::Backspace => {
                self.press_backspace();
                Ok(())
            }
            Event::ClearEntry => {
                self.clear_entry();
                Ok(())
            }
            Event::ClearAll => {
                self.clear_all();
                Ok(())
            }
            Event::ToggleSign => self.toggle_sign(),
            Event::Operator(op) => self.apply_operator(op),
            Event::Equals => self.press_equals(),
        };

        match result {
            Ok(()) => None,
            Err(err) => Some(self.notify_and_reset(err)),
        }
    }

    fn press_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9);
        let digit = char::from(b'0' + digit);

        // An operator was just pressed: start the right-hand number fresh,
        // discarding whatever the display still shows.
        if self.awaiting_right_operand {
            self.display.clear();
            self.display.push(digit);
            self.awaiting_right_operand = false;
            return;
        }

        // No leading zeros: "0" then "7" becomes "7", not "07".
        if self.display == "0" {
            self.display.clear();
        }
        self.display.push(digit);
    }

    fn press_decimal_point(&mut self) {
        if self.awaiting_right_operand {
            self.display = "0.".to_string();
            self.awaiting_right_operand = false;
            return;
        }

        // At most one decimal point per number, enforced here only.
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn press_backspace(&mut self) {
        if self.display.chars().count() > 1 {
            self.display.pop();
        } else {
            self.display = "0".to_string();
        }
    }

    fn clear_entry(&mut self) {
        self.display = "0".to_string();
        self.awaiting_right_operand = false;
    }

    fn clear_all(&mut self) {
        self.display = "0".to_string();
        self.left_operand = 0.0;
        self.operator = None;
        self.awaiting_right_operand = false;
        self.last_operator = None;
        self.last_operand = None;
    }

    fn toggle_sign(&mut self) -> Result<(), CalcError> {
        let value = self.display_value()?;
        self.display = render(-value);
        Ok(())
    }

    fn apply_operator(&mut self, op: OperatorKind) -> Result<(), CalcError> {
        // Another operator before any digit of the right operand: the user is
        // correcting the operator. Keep the left operand as-is.
        if self.operator.is_some() && self.awaiting_right_operand {
            self.operator = Some(op);
            return Ok(());
        }

        self.left_operand = self.display_value()?;
        self.operator = Some(op);
        self.display = "0".to_string();
        self.awaiting_right_operand = true;
        Ok(())
    }

    fn press_equals(&mut self) -> Result<(), CalcError> {
        let value = self.display_value()?;

        let Some(op) = self.operator else {
            return self.repeat_equals(value);
        };

        let right = value;
        // Remember the completed operation so a bare `=` can repeat it.
        self.last_operator = Some(op);
        self.last_operand = Some(right);

        let result = op.apply(self.left_operand, right)?;
        self.display = render(result);
        self.left_operand = result;
        self.operator = None;
        self.awaiting_right_operand = false;
        Ok(())
    }

    /// `=` with no pending operator reapplies the last completed operation to
    /// the current display value: `5 + 2 =` shows 7, then `=` again shows 9,
    /// 11, and so on. The cache is left untouched so the repetition chains.
    fn repeat_equals(&mut self, value: f64) -> Result<(), CalcError> {
        let (Some(op), Some(operand)) = (self.last_operator, self.last_operand) else {
            return Ok(()); // nothing to repeat
        };

        let result = op.apply(value, operand)?;
        self.display = render(result);
        self.left_operand = result;
        self.awaiting_right_operand = false;
        Ok(())
    }

    /// Parse the display as a finite number.
    fn display_value(&self) -> Result<f64, CalcError> {
        self.display
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or(CalcError::InvalidDisplay)
    }

    fn notify_and_reset(&mut self, err: CalcError) -> Notification {
        self.clear_all();
        Notification {
            message: err.to_string(),
        }
    }
}

/// Render a computed value back into display text.
///
/// Uses the default `f64` formatting with no rounding; a zero result
/// (including the negative zero produced by sign-toggling `"0"`) renders as
/// `"0"` so it matches the initial display text.
fn render(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
