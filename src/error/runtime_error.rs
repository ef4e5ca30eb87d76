#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A variable referenced by an expression tree is no longer registered.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of an assignment is not a variable.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression tree references a node that does not exist.
    UnknownExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A transient object was used after its pool was released.
    ReleasedObject {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed, or a double could not be narrowed to an
    /// integer.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::InvalidAssignmentTarget { line } => write!(f,
                                                             "Error on line {line}: Left side of an assignment must be a variable."),
            Self::UnknownExpression { line } => {
                write!(f, "Error on line {line}: Expression is unknown.")
            },
            Self::ReleasedObject { line } => write!(f,
                                                    "Error on line {line}: Temporary value was used after it was released."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
        }
    }
}

impl std::error::Error for RuntimeError {}
