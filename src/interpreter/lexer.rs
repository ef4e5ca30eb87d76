use logos::{Lexer, Logos, Skip};

use crate::{error::LexError, memory::arena::Arena};

/// A token paired with the source line it starts on.
pub type Spanned = (Token, usize);

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Floating point literal tokens, such as `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `int`
    #[token("int")]
    IntType,
    /// `double`
    #[token("double")]
    DoubleType,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// String literal tokens with their escapes resolved.
    #[token("\"", lex_string)]
    Str(String),
    /// `// Comments.`
    #[token("//", skip_line_comment)]
    Comment,
    /// `/* Multi line comments. */`
    #[token("/*", skip_block_comment)]
    MultiLineComment,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Skip
    })]
    NewLine,
    /// Marks the end of the token stream. Never produced from source text.
    End,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and collects the diagnostics raised by
/// callbacks that recover from malformed input.
#[derive(Debug, Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:   usize,
    /// Diagnostics collected so far.
    pub errors: Vec<LexError>,
}

/// The result of tokenizing a source text.
#[derive(Debug)]
pub struct Tokenized {
    /// Tokens in source order, always terminated by [`Token::End`].
    pub tokens: Arena<Spanned>,
    /// Lexical diagnostics in source order.
    pub errors: Vec<LexError>,
}

/// Splits `source` into tokens.
///
/// Tokenization never fails: unknown characters, unterminated comments or
/// strings and out-of-range integers are reported in [`Tokenized::errors`] and
/// skipped. Lines are counted from 1.
///
/// # Example
/// ```
/// use mao::interpreter::lexer::{Token, tokenize};
///
/// let tokenized = tokenize("int a;\na = 2;");
/// let tokens: Vec<_> = tokenized.tokens.iter().cloned().collect();
///
/// assert!(tokenized.errors.is_empty());
/// assert_eq!(tokens[0], (Token::IntType, 1));
/// assert_eq!(tokens[3], (Token::Identifier("a".to_string()), 2));
/// assert_eq!(tokens.last(), Some(&(Token::End, 2)));
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Tokenized {
    let mut lexer = Token::lexer_with_extras(source,
                                             LexerExtras { line:   1,
                                                           errors: Vec::new(), });
    let mut tokens = Arena::new();

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(token) => {
                tokens.push((token, line));
            },
            Err(()) => {
                let slice = lexer.slice();
                let error = if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                    LexError::NumberOutOfRange { literal: slice.to_string(),
                                                 line }
                } else {
                    LexError::UnknownCharacter { character: slice.chars().next().unwrap_or('?'),
                                                 line }
                };
                lexer.extras.errors.push(error);
            },
        }
    }

    let line = lexer.extras.line;
    tokens.push((Token::End, line));

    Tokenized { tokens,
                errors: std::mem::take(&mut lexer.extras.errors) }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit into an `i64`.
fn parse_integer(lex: &Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

fn skip_line_comment(lex: &mut Lexer<Token>) -> Skip {
    let rest = lex.remainder();
    lex.bump(rest.find('\n').unwrap_or(rest.len()));
    Skip
}

/// Skips a `/* ... */` comment, counting the line breaks it spans.
///
/// An unterminated comment swallows the rest of the input and is reported on
/// the line it started.
fn skip_block_comment(lex: &mut Lexer<Token>) -> Skip {
    let rest = lex.remainder();
    let (length, terminated) = rest.find("*/")
                                   .map_or((rest.len(), false), |end| (end + 2, true));

    let start_line = lex.extras.line;
    lex.extras.line += rest[..length].matches('\n').count();
    lex.bump(length);

    if !terminated {
        lex.extras
           .errors
           .push(LexError::UnterminatedComment { line: start_line });
    }
    Skip
}

/// Reads the body of a string literal after its opening quote.
///
/// The literal ends at the closing quote. Reaching a line break or the end of
/// input first reports an unterminated string; the line break itself is left
/// for the newline token. Unknown escapes produce a lone backslash.
fn lex_string(lex: &mut Lexer<Token>) -> String {
    let mut text = String::new();
    let mut consumed = 0;
    let mut terminated = false;
    let mut chars = lex.remainder().char_indices();

    while let Some((index, ch)) = chars.next() {
        match ch {
            '"' => {
                consumed = index + 1;
                terminated = true;
                break;
            },
            '\n' => {
                consumed = index;
                break;
            },
            '\\' => match chars.next() {
                Some((escape_index, '\n')) => {
                    text.push('\\');
                    consumed = escape_index;
                    break;
                },
                Some((escape_index, escape)) => {
                    text.push(unescape(escape));
                    consumed = escape_index + escape.len_utf8();
                },
                None => {
                    text.push('\\');
                    consumed = index + 1;
                },
            },
            other => {
                text.push(other);
                consumed = index + other.len_utf8();
            },
        }
    }

    lex.bump(consumed);
    if !terminated {
        let line = lex.extras.line;
        lex.extras.errors.push(LexError::UnterminatedString { line });
    }
    text
}

const fn unescape(escape: char) -> char {
    match escape {
        '"' => '"',
        '\'' => '\'',
        '\\' => '\\',
        '/' => '/',
        'n' => '\n',
        'b' => '\u{8}',
        't' => '\t',
        'r' => '\r',
        'f' => '\u{c}',
        _ => '\\',
    }
}
