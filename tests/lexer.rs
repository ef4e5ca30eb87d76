use mao::{
    error::LexError,
    interpreter::lexer::{Token, tokenize},
};
use pretty_assertions::assert_eq;

fn tokens(source: &str) -> Vec<Token> {
    tokenize(source).tokens
                    .iter()
                    .map(|(token, _)| token.clone())
                    .collect()
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(tokens("int double print integer _x9"),
               vec![Token::IntType,
                    Token::DoubleType,
                    Token::Print,
                    Token::Identifier("integer".to_string()),
                    Token::Identifier("_x9".to_string()),
                    Token::End]);
}

#[test]
fn number_literals() {
    assert_eq!(tokens("42 3.25 1. .5 1e3 2.5E-1"),
               vec![Token::Integer(42),
                    Token::Float(3.25),
                    Token::Float(1.0),
                    Token::Float(0.5),
                    Token::Float(1000.0),
                    Token::Float(0.25),
                    Token::End]);
}

#[test]
fn operators_and_punctuation() {
    assert_eq!(tokens("+= -= *= /= == = + - * / ( ) , ;"),
               vec![Token::PlusAssign,
                    Token::MinusAssign,
                    Token::MulAssign,
                    Token::DivAssign,
                    Token::EqualEqual,
                    Token::Equals,
                    Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::LParen,
                    Token::RParen,
                    Token::Comma,
                    Token::Semicolon,
                    Token::End]);
}

#[test]
fn string_escapes() {
    assert_eq!(tokens(r#""a\tb\n\"q\" \\ \/""#),
               vec![Token::Str("a\tb\n\"q\" \\ /".to_string()), Token::End]);
    assert_eq!(tokens(r#""\q""#), vec![Token::Str("\\".to_string()), Token::End]);
}

#[test]
fn comments_are_skipped_and_lines_counted() {
    let tokenized = tokenize("a // note\n/* one\ntwo */ b\nc");
    let lines: Vec<(Token, usize)> = tokenized.tokens.iter().cloned().collect();

    assert!(tokenized.errors.is_empty());
    assert_eq!(lines,
               vec![(Token::Identifier("a".to_string()), 1),
                    (Token::Identifier("b".to_string()), 3),
                    (Token::Identifier("c".to_string()), 4),
                    (Token::End, 4)]);
}

#[test]
fn malformed_input_is_reported_and_skipped() {
    let tokenized = tokenize("a $ b\n\"open\nc 99999999999999999999 /* never");

    assert_eq!(tokenized.errors,
               vec![LexError::UnknownCharacter { character: '$',
                                                 line:      1, },
                    LexError::UnterminatedString { line: 2 },
                    LexError::NumberOutOfRange { literal: "99999999999999999999".to_string(),
                                                 line:    3, },
                    LexError::UnterminatedComment { line: 3 }]);
    assert_eq!(tokenized.tokens.iter().map(|(t, _)| t.clone()).collect::<Vec<_>>(),
               vec![Token::Identifier("a".to_string()),
                    Token::Identifier("b".to_string()),
                    Token::Str("open".to_string()),
                    Token::Identifier("c".to_string()),
                    Token::End]);
}
