use crate::{
    ast::{BinaryOperator, ExprTree, NodeId, ObjectRef},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates an arithmetic node.
    ///
    /// The left operand is evaluated before the right one. Both are read only
    /// after both have been evaluated, so an assignment inside the right
    /// operand is visible through a variable on the left.
    ///
    /// # Parameters
    /// - `tree`: The tree holding the node.
    /// - `op`: The operator.
    /// - `left`: Left operand node.
    /// - `right`: Right operand node.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// A reference to the freshly allocated transient result.
    pub(crate) fn eval_binary_node(&mut self,
                                   tree: &ExprTree,
                                   op: BinaryOperator,
                                   left: NodeId,
                                   right: NodeId,
                                   line: usize)
                                   -> EvalResult<ObjectRef> {
        let left = self.eval_node(tree, left)?;
        let right = self.eval_node(tree, right)?;

        let left = self.resolve(&left, line)?;
        let right = self.resolve(&right, line)?;
        let result = Self::eval_scalar_op(op, &left, &right, line)?;

        Ok(ObjectRef::Transient(self.pool.alloc(result)))
    }
}
