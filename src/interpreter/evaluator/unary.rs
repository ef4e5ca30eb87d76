use crate::{
    ast::{ExprTree, NodeId, ObjectRef, SignOperator},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::RuntimeObject,
    },
};

impl Context {
    /// Evaluates a sign node as `0 + x` or `0 - x`.
    ///
    /// The integer zero goes through the same arithmetic as any binary
    /// operator, so the result type follows the lattice and `-d` agrees with
    /// `0 - d` for a zero double. The operand is never modified.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` when negating `i64::MIN`.
    pub(crate) fn eval_sign(&mut self,
                            tree: &ExprTree,
                            op: SignOperator,
                            operand: NodeId,
                            line: usize)
                            -> EvalResult<ObjectRef> {
        let operand = self.eval_node(tree, operand)?;
        let value = self.resolve(&operand, line)?;
        let result = Self::eval_scalar_op(op.arithmetic(), &RuntimeObject::int(0), &value, line)?;

        Ok(ObjectRef::Transient(self.pool.alloc(result)))
    }
}
