//! Property-based tests for the expression buffer.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::calculator::{Action, EvalError, ExpressionBuffer, Operator, Token, calculate};

    // Edits drawn from the whole keypad, backspace included.
    fn edit() -> impl Strategy<Value = Action> {
        let keys: Vec<Action> = "0123456789.+-*/()"
            .chars()
            .filter_map(Token::from_char)
            .map(Action::Input)
            .chain([Action::Backspace])
            .collect();
        proptest::sample::select(keys)
    }

    fn apply(buffer: &mut ExpressionBuffer, action: Action) {
        match action {
            Action::Input(token) => {
                buffer.accept(token);
            }
            Action::Backspace => buffer.backspace(),
            Action::Clear => buffer.clear(),
            Action::Equals => unreachable!("not generated"),
        }
    }

    fn is_op_or_dot(c: char) -> bool {
        Operator::is_operator_char(c) || c == '.'
    }

    proptest! {
        #[test]
        fn parens_never_close_more_than_open(edits in prop::collection::vec(edit(), 0..40)) {
            let mut buffer = ExpressionBuffer::new();
            for action in edits {
                apply(&mut buffer, action);
                let text = buffer.text();
                let opens = text.matches('(').count();
                let closes = text.matches(')').count();
                prop_assert!(closes <= opens, "unbalanced text {:?}", text);
            }
        }

        #[test]
        fn no_adjacent_operators(edits in prop::collection::vec(edit(), 0..40)) {
            let mut buffer = ExpressionBuffer::new();
            for action in edits {
                apply(&mut buffer, action);
            }
            let chars: Vec<char> = buffer.text().chars().collect();
            for pair in chars.windows(2) {
                // `2.(` legitimately becomes `2.*(`, so only a dot may precede
                // an operator.
                prop_assert!(
                    !(Operator::is_operator_char(pair[0]) && is_op_or_dot(pair[1])),
                    "adjacent operators in {:?}",
                    buffer.text()
                );
                prop_assert!(
                    !(pair[0] == '.' && pair[1] == '.'),
                    "double dot in {:?}",
                    buffer.text()
                );
                prop_assert!(
                    !(pair[0] == '(' && pair[1] == '.'),
                    "dot after open paren in {:?}",
                    buffer.text()
                );
            }
        }

        #[test]
        fn integer_literals_have_no_leading_zero(edits in prop::collection::vec(edit(), 0..40)) {
            let mut buffer = ExpressionBuffer::new();
            for action in edits {
                apply(&mut buffer, action);
            }
            for literal in buffer
                .text()
                .split(|c: char| !(c.is_ascii_digit() || c == '.'))
                .filter(|literal| !literal.contains('.'))
            {
                prop_assert!(
                    literal.len() <= 1 || !literal.starts_with('0'),
                    "leading zero in {:?}",
                    buffer.text()
                );
            }
        }

        #[test]
        fn closed_text_always_parses(edits in prop::collection::vec(edit(), 1..40)) {
            let mut buffer = ExpressionBuffer::new();
            for action in edits {
                apply(&mut buffer, action);
            }
            let text = buffer.text();
            let ends_open = text
                .chars()
                .last()
                .is_none_or(|c| Operator::is_operator_char(c) || c == '(');
            if ends_open {
                return Ok(());
            }

            // `(+` and `(2)3` can be typed but are not in the grammar.
            let chars: Vec<char> = text.chars().collect();
            let outside_grammar = chars.windows(2).any(|pair| {
                (pair[0] == '(' && Operator::is_operator_char(pair[1]))
                    || (pair[0] == ')' && pair[1].is_ascii_digit())
            });
            if outside_grammar {
                return Ok(());
            }

            let depth = text.matches('(').count() - text.matches(')').count();
            let closed = format!("{}{}", text, ")".repeat(depth));
            prop_assert_ne!(calculate(&closed), Err(EvalError::Syntax), "{:?}", closed);
        }
    }
}
