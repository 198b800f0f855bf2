//! Line-oriented terminal frontend.
//!
//! Reads whitespace-separated button tokens from stdin and forwards them to
//! the engine as button presses, echoing the display after each token. The
//! frontend owns presentation only; every semantic decision (digit handling,
//! operator state, error recovery) lives in [`crate::engine`].

mod clipboard;
mod token;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use crate::engine::Calculator;
use token::Token;

/// Run the interactive prompt until EOF or `quit`.
pub fn run_interactive(calc: &mut Calculator, quiet: bool) -> Result<()> {
    if !quiet {
        println!("lcalc buttons: 0-9 . + - x / = ce c back neg, commands: copy quit");
        println!("{}", calc.display());
    }

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        if !quiet {
            print!("> ");
            io::stdout().flush()?;
        }

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        if !feed_line(calc, &line, quiet)? {
            break;
        }
    }

    Ok(())
}

/// Run a button sequence non-interactively and print the final display.
pub fn run_keys(calc: &mut Calculator, keys: &str) -> Result<()> {
    feed_line(calc, keys, true)?;
    println!("{}", calc.display());
    Ok(())
}

/// Feed one line of input to the engine, token by token.
///
/// Returns `false` when the user asked to quit.
fn feed_line(calc: &mut Calculator, line: &str, quiet: bool) -> Result<bool> {
    for raw in line.split_whitespace() {
        match Token::parse(raw) {
            Token::Presses(labels) => {
                for label in &labels {
                    debug!(%label, "button press");
                    if let Some(note) = calc.press(label) {
                        warn!(message = %note.message, "calculator reset");
                        println!("{}", note.message);
                    }
                }
                if !quiet {
                    println!("{}", calc.display());
                }
            }
            Token::Copy => {
                if let Err(err) = clipboard::copy_to_clipboard(calc.display()) {
                    warn!(error = %err, "clipboard copy failed");
                    println!("copy failed: {err}");
                } else if !quiet {
                    println!("copied {}", calc.display());
                }
            }
            Token::Quit => return Ok(false),
            Token::Unknown => {
                debug!(token = %raw, "unknown input token");
                println!("unknown button: {raw}");
            }
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_line_drives_the_engine() {
        let mut calc = Calculator::new();
        assert!(feed_line(&mut calc, "5 + 2 =", true).unwrap());
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_number_shorthand_types_each_button() {
        let mut calc = Calculator::new();
        feed_line(&mut calc, "12.5 x 2 =", true).unwrap();
        assert_eq!(calc.display(), "25");
    }

    #[test]
    fn test_quit_stops_the_line() {
        let mut calc = Calculator::new();
        assert!(!feed_line(&mut calc, "5 quit 6", true).unwrap());
        // The trailing token is never fed.
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_unknown_tokens_do_not_touch_the_engine() {
        let mut calc = Calculator::new();
        feed_line(&mut calc, "5 sqrt", true).unwrap();
        assert_eq!(calc.display(), "5");
    }
}
