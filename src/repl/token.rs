//! Input token interpretation.
//!
//! Classifies whitespace-separated tokens from the prompt before anything
//! reaches the engine. Number-shaped tokens expand into the individual
//! button presses that would have produced them.

/// Frontend-level interpretation of one input token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Button labels to forward to the engine, in order.
    Presses(Vec<String>),
    /// Copy the current display to the clipboard.
    Copy,
    /// Leave the program.
    Quit,
    /// Neither a button nor a frontend command.
    Unknown,
}

impl Token {
    /// Interpret a raw token.
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim();

        if token.eq_ignore_ascii_case("quit")
            || token.eq_ignore_ascii_case("exit")
            || token.eq_ignore_ascii_case("q")
        {
            return Self::Quit;
        }
        if token.eq_ignore_ascii_case("copy") {
            return Self::Copy;
        }

        // "12.5" is typing shorthand: press 1, 2, ., 5.
        if token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Self::Presses(token.chars().map(String::from).collect());
        }

        if is_button_label(token) {
            return Self::Presses(vec![token.to_string()]);
        }

        // Single-character punctuation passes through as an operator label so
        // the engine owns the unknown-operator policy.
        let mut chars = token.chars();
        if let (Some(ch), None) = (chars.next(), chars.next())
            && !ch.is_alphanumeric()
        {
            return Self::Presses(vec![token.to_string()]);
        }

        Self::Unknown
    }
}

fn is_button_label(token: &str) -> bool {
    const NAMED: &[&str] = &["ce", "c", "ca", "back", "bs", "neg"];
    if NAMED.iter().any(|name| token.eq_ignore_ascii_case(name)) {
        return true;
    }
    matches!(token, "x" | "X" | "+/-" | "±" | "⌫")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presses(labels: &[&str]) -> Token {
        Token::Presses(labels.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_number_tokens_expand_to_presses() {
        assert_eq!(Token::parse("5"), presses(&["5"]));
        assert_eq!(Token::parse("12.5"), presses(&["1", "2", ".", "5"]));
        assert_eq!(Token::parse("."), presses(&["."]));
    }

    #[test]
    fn test_operators_pass_through() {
        assert_eq!(Token::parse("+"), presses(&["+"]));
        assert_eq!(Token::parse("x"), presses(&["x"]));
        assert_eq!(Token::parse("*"), presses(&["*"]));
        assert_eq!(Token::parse("="), presses(&["="]));
    }

    #[test]
    fn test_unrecognized_operators_still_reach_the_engine() {
        assert_eq!(Token::parse("%"), presses(&["%"]));
        assert_eq!(Token::parse("^"), presses(&["^"]));
    }

    #[test]
    fn test_named_buttons() {
        assert_eq!(Token::parse("ce"), presses(&["ce"]));
        assert_eq!(Token::parse("C"), presses(&["C"]));
        assert_eq!(Token::parse("back"), presses(&["back"]));
        assert_eq!(Token::parse("neg"), presses(&["neg"]));
        assert_eq!(Token::parse("+/-"), presses(&["+/-"]));
    }

    #[test]
    fn test_frontend_commands() {
        assert_eq!(Token::parse("quit"), Token::Quit);
        assert_eq!(Token::parse("Q"), Token::Quit);
        assert_eq!(Token::parse("copy"), Token::Copy);
    }

    #[test]
    fn test_word_tokens_are_unknown() {
        assert_eq!(Token::parse("hello"), Token::Unknown);
        assert_eq!(Token::parse("12a"), Token::Unknown);
        assert_eq!(Token::parse("sqrt"), Token::Unknown);
    }
}
