use crate::lexer::{Token, TokenKind};

/// Rewrites every symbol token that spells a literal into its typed form.
pub fn classify_literals(tokens: &mut [Token]) {
    for token in tokens.iter_mut() {
        if let TokenKind::Symbol(text) = &token.kind {
            if let Some(kind) = classify(text) {
                token.kind = kind;
            }
        }
    }
}

/// Returns the literal kind spelled by `text`, or `None` if it stays a symbol.
/// Integers are tried before floats.
pub fn classify(text: &str) -> Option<TokenKind> {
    if is_int(text) {
        return Some(TokenKind::Integer(parse_int(text)));
    }
    if is_float(text) {
        return text.parse::<f32>().ok().map(TokenKind::Float);
    }
    match text {
        "nil" => Some(TokenKind::Nil),
        "T" => Some(TokenKind::True),
        _ => None,
    }
}

fn unsigned_part(text: &str) -> &str {
    text.strip_prefix('-').unwrap_or(text)
}

/// `-?[0-9]+`
pub fn is_int(text: &str) -> bool {
    let digits = unsigned_part(text);
    !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit())
}

/// `-?[0-9]*\.[0-9]*` with at least one digit and at most one dot.
pub fn is_float(text: &str) -> bool {
    let body = unsigned_part(text);
    let mut dots = 0;
    let mut digits = 0;
    for ch in body.chars() {
        match ch {
            '.' => dots += 1,
            '0'..='9' => digits += 1,
            _ => return false,
        }
    }
    dots <= 1 && digits > 0
}

// Wraps on overflow like two's-complement host arithmetic.
fn parse_int(text: &str) -> i32 {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text),
    };
    let magnitude = digits.bytes().fold(0i32, |acc, digit| {
        acc.wrapping_mul(10).wrapping_add(i32::from(digit - b'0'))
    });
    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_classify() {
        let tests = vec![
            ("0", Some(TokenKind::Integer(0))),
            ("42", Some(TokenKind::Integer(42))),
            ("-17", Some(TokenKind::Integer(-17))),
            ("007", Some(TokenKind::Integer(7))),
            ("1.5", Some(TokenKind::Float(1.5))),
            ("-0.25", Some(TokenKind::Float(-0.25))),
            (".5", Some(TokenKind::Float(0.5))),
            ("3.", Some(TokenKind::Float(3.0))),
            ("nil", Some(TokenKind::Nil)),
            ("T", Some(TokenKind::True)),
            ("t", None),
            ("NIL", None),
            ("-", None),
            (".", None),
            ("-.", None),
            ("1.2.3", None),
            ("1-2", None),
            ("--1", None),
            ("x1", None),
            ("write-line", None),
        ];

        for (input, expected) in tests {
            assert_eq!(classify(input), expected, "classifying {input:?}");
        }
    }

    #[test]
    fn test_integer_overflow_wraps() {
        assert_eq!(classify("2147483648"), Some(TokenKind::Integer(i32::MIN)));
        assert_eq!(classify("-2147483648"), Some(TokenKind::Integer(i32::MIN)));
    }

    #[test]
    fn test_classify_literals_in_place() {
        let mut tokens = vec![
            Token {
                kind: TokenKind::LeftBrace,
                start: 0,
            },
            Token {
                kind: TokenKind::Symbol("setq".into()),
                start: 1,
            },
            Token {
                kind: TokenKind::Symbol("12".into()),
                start: 6,
            },
            Token {
                kind: TokenKind::String("12".to_owned()),
                start: 9,
            },
            Token {
                kind: TokenKind::Symbol("T".into()),
                start: 14,
            },
        ];
        classify_literals(&mut tokens);

        let kinds: Vec<_> = tokens.into_iter().map(|token| token.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LeftBrace,
                TokenKind::Symbol("setq".into()),
                TokenKind::Integer(12),
                TokenKind::String("12".to_owned()),
                TokenKind::True,
            ]
        );
    }

    proptest! {
        #[test]
        fn integers_classify_as_their_decimal_value(value in any::<i32>()) {
            prop_assert_eq!(classify(&value.to_string()), Some(TokenKind::Integer(value)));
        }

        #[test]
        fn dotted_numbers_classify_as_floats(text in "-?[0-9]{0,6}\\.[0-9]{1,6}|-?[0-9]{1,6}\\.[0-9]{0,6}") {
            let expected = text.parse::<f32>().unwrap();
            prop_assert_eq!(classify(&text), Some(TokenKind::Float(expected)));
        }

        #[test]
        fn words_with_letters_stay_symbols(text in "[a-z][a-z0-9-]{0,8}") {
            prop_assume!(text != "nil");
            prop_assert_eq!(classify(&text), None);
        }
    }
}
