use crate::{
    ast::{ExprNode, ExprTree, NodeId, ObjectRef},
    error::{DeclarationError, RuntimeError},
    interpreter::value::{
        core::{RuntimeObject, TypeTag, VariableRecord},
        pool::TransientPool,
    },
    memory::symbol_table::SymbolTable,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the table of declared variables
/// and the pool of intermediate results of the statement being executed.
///
/// ## Usage
///
/// `Context` is created once per script. Declarations register variables
/// through [`Context::register_variable`], expressions are parsed with
/// [`Context::parse_expr`] and evaluated with [`Context::evaluate`], and the
/// transient pool is released after every statement.
#[derive(Debug, Clone)]
pub struct Context {
    /// Declared variables keyed by name. Single global scope.
    pub(crate) symbols: SymbolTable<VariableRecord>,
    /// Literals and intermediate results of the current statement.
    pub(crate) pool:    TransientPool,
    next_variable_id:   usize,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a new evaluation context with no declared variables.
    #[must_use]
    pub fn new() -> Self {
        Self { symbols:          SymbolTable::new(),
               pool:             TransientPool::new(),
               next_variable_id: 1, }
    }

    /// Declares a variable of type `tag`, initialised to zero.
    ///
    /// Identifiers are numbered in registration order starting at 1.
    ///
    /// # Errors
    /// Returns `DeclarationError::Redefinition` if the name is already
    /// declared; the existing variable is left untouched.
    ///
    /// # Example
    /// ```
    /// use mao::interpreter::{evaluator::core::Context, value::core::TypeTag};
    ///
    /// let mut context = Context::new();
    /// assert_eq!(context.register_variable(TypeTag::INT, "a", 1).unwrap().id, 1);
    /// assert_eq!(context.register_variable(TypeTag::DOUBLE, "b", 1).unwrap().id, 2);
    /// assert!(context.register_variable(TypeTag::INT, "a", 2).is_err());
    /// ```
    pub fn register_variable(&mut self,
                             tag: TypeTag,
                             name: &str,
                             line: usize)
                             -> Result<&VariableRecord, DeclarationError> {
        if self.symbols.exists(name) {
            return Err(DeclarationError::Redefinition { name: name.to_string(),
                                                        line });
        }

        let id = self.next_variable_id;
        self.next_variable_id += 1;
        self.symbols.insert(name,
                            VariableRecord { id,
                                             object: RuntimeObject::zeroed(tag) });
        tracing::debug!(name, id, %tag, line, "variable registered");

        self.symbols
            .lookup(name)
            .ok_or_else(|| DeclarationError::Redefinition { name: name.to_string(),
                                                            line })
    }

    /// Looks up a declared variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&VariableRecord> {
        self.symbols.lookup(name)
    }

    /// Number of declared variables.
    #[must_use]
    pub const fn variable_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of objects currently held by the transient pool.
    #[must_use]
    pub fn transient_count(&self) -> usize {
        self.pool.len()
    }

    /// Drops every transient object. Expression trees parsed before the call
    /// can no longer be evaluated.
    pub fn release_transient_pool(&mut self) {
        let released = self.pool.release();
        if released > 0 {
            tracing::trace!(released, "transient pool released");
        }
    }

    /// Evaluates an expression tree and returns the value of its root.
    ///
    /// The returned object is a copy, valid after the pool is released.
    ///
    /// # Errors
    /// - `DivisionByZero` if a division or `/=` has a zero divisor.
    /// - `Overflow` if integer arithmetic overflows or a double cannot be
    ///   stored into an integer variable.
    /// - `ReleasedObject` if the tree was parsed before the last release.
    pub fn evaluate(&mut self, tree: &ExprTree) -> EvalResult<RuntimeObject> {
        let line = tree.line_number();
        let result = self.eval_node(tree, tree.root())?;
        self.resolve(&result, line)
    }

    /// Evaluates one node and returns a reference to its result.
    ///
    /// Leaves evaluate to the object they stand for, assignments to their
    /// target variable, arithmetic and signs to a fresh transient object.
    pub(crate) fn eval_node(&mut self, tree: &ExprTree, id: NodeId) -> EvalResult<ObjectRef> {
        let Some(node) = tree.node(id) else {
            return Err(RuntimeError::UnknownExpression { line: tree.line_number() });
        };

        match node {
            ExprNode::Leaf { object, .. } => Ok(object.clone()),
            ExprNode::Binary { op,
                               left,
                               right,
                               line, } => self.eval_binary_node(tree, *op, *left, *right, *line),
            ExprNode::Assign { op,
                               target,
                               value,
                               line, } => self.eval_assignment(tree, *op, *target, *value, *line),
            ExprNode::Sign { op, operand, line } => self.eval_sign(tree, *op, *operand, *line),
        }
    }

    /// Reads the current value behind an object reference.
    pub(crate) fn resolve(&self, object: &ObjectRef, line: usize) -> EvalResult<RuntimeObject> {
        match object {
            ObjectRef::Variable(name) => {
                self.symbols
                    .lookup(name)
                    .map(|record| record.object)
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line })
            },
            ObjectRef::Transient(handle) => self.pool.get(*handle, line).copied(),
        }
    }
}
