#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing statements and
/// expressions.
pub enum ParseError {
    /// Found a token that cannot appear at this position.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Parentheses do not pair up inside an expression.
    UnmatchedParentheses {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A multiplicative operator starts a sub-expression.
    OperatorAtStart {
        /// The operator encountered.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator has nothing to apply to on one of its sides.
    MissingOperand {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression consists of operators only.
    TooManyOperators {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Two operands follow each other without an operator in between.
    MissingOperator {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The expression names a variable that was never declared.
    UndefinedVariable {
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
    /// A type keyword is not followed by a variable name.
    ExpectedIdentifier {
        /// The keyword that started the declaration.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A declared name is followed by something other than `,` or `;`.
    ExpectedSeparator {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression statement is not terminated by `;`.
    MissingSemicolon {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression nests more sub-expressions than the parser allows.
    NestingTooDeep {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token '{token}'.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')'."),
            Self::UnmatchedParentheses { line } => {
                write!(f, "Error on line {line}: Unmatching parentheses.")
            },
            Self::OperatorAtStart { operator, line } => write!(f,
                                                               "Error on line {line}: Operator '{operator}' cannot start an expression."),
            Self::MissingOperand { line } => write!(f,
                                                    "Error on line {line}: Expected operand next to operator."),
            Self::TooManyOperators { line } => {
                write!(f, "Error on line {line}: Too many operators.")
            },
            Self::MissingOperator { line } => write!(f,
                                                     "Error on line {line}: Expected operator after identifier or number."),
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is undefined.")
            },
            Self::InvalidAssignmentTarget { line } => write!(f,
                                                             "Error on line {line}: Left side of an assignment must be a variable."),
            Self::ExpectedIdentifier { keyword, line } => write!(f,
                                                                 "Error on line {line}: Expected identifier after typeword '{keyword}'."),
            Self::ExpectedSeparator { line } => write!(f,
                                                       "Error on line {line}: Expected ',' or ';' after identifier."),
            Self::MissingSemicolon { line } => write!(f,
                                                      "Error on line {line}: Expected ';' at end of a statement."),
            Self::NestingTooDeep { line } => {
                write!(f, "Error on line {line}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
