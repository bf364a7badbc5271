use crate::interpreter::token::Token;
use log::trace;

/// Splits the given text into numbers and symbols, in the order they appear.
///
/// A number is the longest run of digits and decimal points that starts with a digit,
/// so `1.2.3` is kept as a single (invalid) literal. Characters that are neither part
/// of a number nor one of `( ) + - * / ^` are skipped.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, in source order.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::lexer::tokenize;
/// use postfix_calculator::interpreter::token::Token;
///
/// let tokens = tokenize("3 + 4.5");
/// assert_eq!(
///     tokens,
///     vec![Token::new_literal("3"), Token::Plus, Token::new_literal("4.5")]
/// );
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut characters = expression.char_indices().peekable();

    while let Some((start, character)) = characters.next() {
        if character.is_ascii_digit() {
            let mut end = start + character.len_utf8();
            while let Some(&(index, next)) = characters.peek() {
                if !is_literal_character(next) {
                    break;
                }
                end = index + next.len_utf8();
                characters.next();
            }
            tokens.push(Token::new_literal(&expression[start..end]));
        } else if let Some(token) = Token::from_symbol(character) {
            tokens.push(token);
        } else {
            trace!("skipping {:?} at offset {}", character, start);
        }
    }

    tokens
}

fn is_literal_character(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    fn literal(text: &str) -> Token {
        Token::new_literal(text)
    }

    #[test]
    fn expression_is_split_into_numbers_and_symbols() {
        let expected = vec![
            literal("3"),
            Token::Plus,
            literal("4"),
            Token::Asterisk,
            literal("2"),
        ];

        assert_eq!(tokenize("3+4*2"), expected);
    }

    #[test]
    fn every_symbol_is_recognized() {
        let expected = vec![
            Token::OpenParenthesis,
            Token::CloseParenthesis,
            Token::Plus,
            Token::Dash,
            Token::Asterisk,
            Token::ForwardSlash,
            Token::Caret,
        ];

        assert_eq!(tokenize("()+-*/^"), expected);
    }

    #[parameterized(
    expression = { "3 + 4", "3+4", " 3\t+ 4 ", "3 apples + 4 pears", "3,+;4" }
    )]
    fn whitespace_and_unknown_characters_are_ignored(expression: &str) {
        let expected = vec![literal("3"), Token::Plus, literal("4")];
        self::assert_eq!(tokenize(expression), expected);
    }

    #[test]
    fn multi_digit_decimal_is_one_literal() {
        assert_eq!(tokenize("123.456"), vec![literal("123.456")]);
    }

    #[test]
    fn multiple_decimal_points_stay_in_one_literal() {
        assert_eq!(tokenize("1.2.3+1"), vec![literal("1.2.3"), Token::Plus, literal("1")]);
    }

    #[test]
    fn trailing_decimal_point_is_consumed() {
        assert_eq!(tokenize("5.*2"), vec![literal("5."), Token::Asterisk, literal("2")]);
    }

    #[test]
    fn leading_decimal_point_is_skipped() {
        assert_eq!(tokenize(".5"), vec![literal("5")]);
    }

    #[test]
    fn minus_is_never_part_of_a_literal() {
        assert_eq!(tokenize("-3"), vec![Token::Dash, literal("3")]);
    }

    #[test]
    fn whitespace_separates_literals() {
        assert_eq!(tokenize("1 2"), vec![literal("1"), literal("2")]);
    }

    #[test]
    fn non_ascii_characters_are_skipped() {
        assert_eq!(tokenize("2×3÷4"), vec![literal("2"), literal("3"), literal("4")]);
    }

    #[test]
    fn empty_expression_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
