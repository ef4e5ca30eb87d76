#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the errors raised by declaration statements.
pub enum DeclarationError {
    /// The variable name is already registered.
    Redefinition {
        /// The name of the variable.
        name: String,
        /// The source line of the second declaration.
        line: usize,
    },
}

impl std::fmt::Display for DeclarationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Redefinition { name, line } => {
                write!(f, "Error on line {line}: Redefinition of variable '{name}'.")
            },
        }
    }
}

impl std::error::Error for DeclarationError {}
