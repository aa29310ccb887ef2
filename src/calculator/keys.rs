//! Key bindings for the calculator.
//!
//! Maps typed characters, button labels and named keys to [`Action`]s.
//! Key sequences mix plain characters with bracketed key names, for example
//! `12+(3)<bs>4<enter>`.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::token::{Action, Token};

lazy_static! {
    /// Matches either a bracketed key name or a single non-space character.
    static ref KEY_PATTERN: Regex = Regex::new(r"<([A-Za-z]+)>|\S").unwrap();
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

/// Action for a single typed character or button label.
pub fn action_for_char(c: char) -> Option<Action> {
    match c {
        '=' => Some(Action::Equals),
        'C' | 'c' => Some(Action::Clear),
        '\u{232b}' => Some(Action::Backspace),
        _ => Token::from_char(c).map(Action::Input),
    }
}

/// Action for a named key such as `Backspace` or `Enter`.
pub fn action_for_key(name: &str) -> Option<Action> {
    match name.to_ascii_lowercase().as_str() {
        "bs" | "backspace" => Some(Action::Backspace),
        "esc" | "escape" | "clear" => Some(Action::Clear),
        "enter" | "return" => Some(Action::Equals),
        _ => None,
    }
}

/// Split a key sequence into actions. Whitespace between keys is ignored.
pub fn parse_keys(sequence: &str) -> Result<Vec<Action>, KeyError> {
    KEY_PATTERN
        .captures_iter(sequence)
        .map(|caps| {
            if let Some(name) = caps.get(1) {
                return action_for_key(name.as_str())
                    .ok_or_else(|| KeyError::UnknownKey(name.as_str().to_string()));
            }

            let matched = &caps[0];
            matched
                .chars()
                .next()
                .and_then(action_for_char)
                .ok_or_else(|| KeyError::UnknownKey(matched.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;

    #[test]
    fn test_expression_chars() {
        assert_eq!(action_for_char('7'), Some(Action::Input(Token::Digit(7))));
        assert_eq!(
            action_for_char('/'),
            Some(Action::Input(Token::Operator(Operator::Div)))
        );
        assert_eq!(action_for_char('('), Some(Action::Input(Token::OpenParen)));
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(action_for_char('='), Some(Action::Equals));
        assert_eq!(action_for_char('C'), Some(Action::Clear));
        assert_eq!(action_for_char('\u{232b}'), Some(Action::Backspace));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(action_for_key("Backspace"), Some(Action::Backspace));
        assert_eq!(action_for_key("Return"), Some(Action::Equals));
        assert_eq!(action_for_key("ENTER"), Some(Action::Equals));
        assert_eq!(action_for_key("Escape"), Some(Action::Clear));
        assert_eq!(action_for_key("tab"), None);
    }

    #[test]
    fn test_parse_sequence() {
        let actions = parse_keys("1 + 2<bs>3<enter>").unwrap();
        assert_eq!(
            actions,
            vec![
                Action::Input(Token::Digit(1)),
                Action::Input(Token::Operator(Operator::Add)),
                Action::Input(Token::Digit(2)),
                Action::Backspace,
                Action::Input(Token::Digit(3)),
                Action::Equals,
            ]
        );
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert_eq!(
            parse_keys("1<tab>"),
            Err(KeyError::UnknownKey("tab".to_string()))
        );
        assert_eq!(parse_keys("2^3"), Err(KeyError::UnknownKey("^".to_string())));
        assert_eq!(parse_keys("<"), Err(KeyError::UnknownKey("<".to_string())));
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(parse_keys("   "), Ok(Vec::new()));
    }
}
