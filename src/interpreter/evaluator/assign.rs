use crate::{
    ast::{AssignOperator, ExprTree, NodeId, ObjectRef},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates an assignment node.
    ///
    /// The right-hand side is evaluated first. A compound operator then
    /// combines the variable's current value with it using the same arithmetic
    /// as the binary operators, and the result is stored into the variable
    /// converted to its declared type. The variable itself is the value of the
    /// expression, which is what makes `a = b = 3` work.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` if the target node is not a variable leaf.
    /// - `DivisionByZero` for `/=` with a zero right-hand side.
    /// - `Overflow` if the arithmetic overflows or the result cannot be
    ///   narrowed to the variable's type.
    pub(crate) fn eval_assignment(&mut self,
                                  tree: &ExprTree,
                                  op: AssignOperator,
                                  target: NodeId,
                                  value: NodeId,
                                  line: usize)
                                  -> EvalResult<ObjectRef> {
        let Some(name) = tree.node(target).and_then(|node| node.as_variable()) else {
            return Err(RuntimeError::InvalidAssignmentTarget { line });
        };

        let value = self.eval_node(tree, value)?;
        let value = self.resolve(&value, line)?;

        let record = self.symbols
                         .lookup_mut(name)
                         .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                                        line })?;
        let stored = match op.arithmetic() {
            None => value,
            Some(arithmetic) => Self::eval_scalar_op(arithmetic, &record.object, &value, line)?,
        };
        record.object.store(stored.value(), line)?;

        Ok(ObjectRef::Variable(name.to_string()))
    }
}
