use crate::{
    interpreter::value::{core::TypeTag, pool::TransientHandle},
    memory::arena::Arena,
};

/// Index of a node inside an [`ExprTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// The object a leaf of an expression tree stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectRef {
    /// A registered variable, looked up by name when evaluated. Assignments
    /// through this reference are visible to every later read.
    Variable(String),
    /// A literal or intermediate result held in the transient pool.
    Transient(TransientHandle),
}

/// A node of an expression tree.
///
/// Children are referenced by [`NodeId`] and always live in the same tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode {
    /// A variable or a literal.
    Leaf {
        /// The referenced object.
        object: ObjectRef,
        /// Line number in the source code.
        line:   usize,
    },
    /// Arithmetic on two operands.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  NodeId,
        /// Right operand.
        right: NodeId,
        /// Line number in the source code.
        line:  usize,
    },
    /// Plain or compound assignment. The target is always a variable leaf.
    Assign {
        /// The assignment operator.
        op:     AssignOperator,
        /// Variable being assigned to.
        target: NodeId,
        /// Assigned expression.
        value:  NodeId,
        /// Line number in the source code.
        line:   usize,
    },
    /// A sign applied to a single operand, such as `-x` or `+3`.
    Sign {
        /// The sign.
        op:      SignOperator,
        /// The operand.
        operand: NodeId,
        /// Line number in the source code.
        line:    usize,
    },
}

impl ExprNode {
    /// Returns the source line of the node.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Leaf { line, .. }
            | Self::Binary { line, .. }
            | Self::Assign { line, .. }
            | Self::Sign { line, .. } => *line,
        }
    }

    /// Returns the variable name if the node is a variable leaf.
    #[must_use]
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Leaf { object: ObjectRef::Variable(name),
                         .. } => Some(name.as_str()),
            _ => None,
        }
    }
}

/// A parsed expression: an arena of nodes and the index of its root.
///
/// Leaves holding literals point into the transient pool of the context that
/// parsed the expression, so a tree must be evaluated before that pool is
/// released.
#[derive(Debug, Clone)]
pub struct ExprTree {
    nodes: Arena<ExprNode>,
    root:  NodeId,
}

impl ExprTree {
    pub(crate) const fn new(nodes: Arena<ExprNode>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&ExprNode> {
        self.nodes.get(id.0)
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Source line of the root node.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.node(self.root).map_or(0, ExprNode::line_number)
    }
}

/// A top-level statement.
#[derive(Debug, Clone)]
pub enum Statement {
    /// `int a, b;` or `double x;`
    Declaration {
        /// Declared type.
        tag:   TypeTag,
        /// Declared names with the line each appears on.
        names: Vec<(String, usize)>,
    },
    /// An expression evaluated for its side effects, terminated by `;`.
    Expression {
        /// The parsed expression.
        tree: ExprTree,
    },
    /// `print(...)`
    Print {
        /// What to print.
        argument: PrintArgument,
        /// Line number in the source code.
        line:     usize,
    },
}

/// The argument of a `print` statement.
#[derive(Debug, Clone)]
pub enum PrintArgument {
    /// A string literal, printed as is.
    Text(String),
    /// An expression, printed as its value followed by a line break.
    Expr(ExprTree),
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Binding strength: additive operators bind looser than multiplicative
    /// ones.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

/// Represents an assignment operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssignOperator {
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
}

impl AssignOperator {
    /// The arithmetic a compound assignment performs before storing.
    #[must_use]
    pub const fn arithmetic(self) -> Option<BinaryOperator> {
        match self {
            Self::Assign => None,
            Self::AddAssign => Some(BinaryOperator::Add),
            Self::SubAssign => Some(BinaryOperator::Sub),
            Self::MulAssign => Some(BinaryOperator::Mul),
            Self::DivAssign => Some(BinaryOperator::Div),
        }
    }
}

/// Represents a sign prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SignOperator {
    /// `+x`
    Plus,
    /// `-x`
    Minus,
}

impl SignOperator {
    /// The operator applied to an implicit `0` on the left.
    #[must_use]
    pub const fn arithmetic(self) -> BinaryOperator {
        match self {
            Self::Plus => BinaryOperator::Add,
            Self::Minus => BinaryOperator::Sub,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for AssignOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for SignOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}
