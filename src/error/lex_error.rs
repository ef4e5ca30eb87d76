#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the diagnostics produced while tokenizing source text.
pub enum LexError {
    /// A character that starts no token.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A `/*` comment was still open at the end of the input.
    UnterminatedComment {
        /// The line the comment started on.
        line: usize,
    },
    /// A string literal reached a newline or the end of the input before its
    /// closing quote.
    UnterminatedString {
        /// The line the string started on.
        line: usize,
    },
    /// An integer literal does not fit into a 64-bit signed integer.
    NumberOutOfRange {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl LexError {
    /// Source line of the diagnostic.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownCharacter { line, .. }
            | Self::UnterminatedComment { line }
            | Self::UnterminatedString { line }
            | Self::NumberOutOfRange { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, line } => {
                write!(f, "line {line}: Unknown character '{character}'.")
            },
            Self::UnterminatedComment { line } => {
                write!(f, "line {line}: Unterminated comment.")
            },
            Self::UnterminatedString { line } => write!(f, "line {line}: Unterminated string."),
            Self::NumberOutOfRange { literal, line } => write!(f,
                                                               "line {line}: Number '{literal}' is too large."),
        }
    }
}

impl std::error::Error for LexError {}
