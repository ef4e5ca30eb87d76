/// Lexical diagnostics.
///
/// Errors reported while splitting source text into tokens. They never stop
/// tokenization: the offending input is skipped, the diagnostic is recorded and
/// lexing continues with the next character.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning token ranges into
/// statements and expression trees. Parse errors include syntax mistakes,
/// unbalanced parentheses, misplaced operators and references to undeclared
/// variables.
pub mod parse_error;
/// Declaration errors.
///
/// Raised when a declaration statement tries to register a variable name that
/// is already registered.
pub mod declaration_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating expression
/// trees, such as division by zero, integer overflow or the use of an object
/// from a pool that has already been released.
pub mod runtime_error;

pub use declaration_error::DeclarationError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any error that stops the execution of a script.
pub enum Error {
    /// The script is malformed.
    Parse(ParseError),
    /// A variable was declared twice.
    Declaration(DeclarationError),
    /// Evaluating an expression failed.
    Runtime(RuntimeError),
    /// Writing program output failed.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Declaration(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
            Self::Io(error) => write!(f, "Error while writing output: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Declaration(error) => Some(error),
            Self::Runtime(error) => Some(error),
            Self::Io(error) => Some(error),
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<DeclarationError> for Error {
    fn from(error: DeclarationError) -> Self {
        Self::Declaration(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}
