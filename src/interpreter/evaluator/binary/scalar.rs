use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Representation, RuntimeObject},
    },
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// The result type is the combination of both operand types. Integer
    /// results are computed with checked arithmetic and truncating division;
    /// as soon as one operand is a double, both are widened and the operation
    /// is carried out in floating point. Division by zero is checked before
    /// dividing, for both representations.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<RuntimeObject>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use mao::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::RuntimeObject},
    /// };
    ///
    /// let x = RuntimeObject::int(7);
    /// let y = RuntimeObject::int(2);
    /// let result = Context::eval_scalar_op(BinaryOperator::Div, &x, &y, 1).unwrap();
    /// assert_eq!(result, RuntimeObject::int(3));
    ///
    /// let y = RuntimeObject::double(2.0);
    /// let result = Context::eval_scalar_op(BinaryOperator::Div, &x, &y, 1).unwrap();
    /// assert_eq!(result, RuntimeObject::double(3.5));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &RuntimeObject,
                          right: &RuntimeObject,
                          line: usize)
                          -> EvalResult<RuntimeObject> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        if op == Div && right.is_zero() {
            return Err(RuntimeError::DivisionByZero { line });
        }

        let tag = left.tag().combine(right.tag());
        match tag.representation() {
            Representation::Double => {
                let left = left.value().as_f64();
                let right = right.value().as_f64();

                Ok(RuntimeObject::double(match op {
                                             Add => left + right,
                                             Sub => left - right,
                                             Mul => left * right,
                                             Div => left / right,
                                         }))
            },
            Representation::Int => {
                let left = left.value().as_i64(line)?;
                let right = right.value().as_i64(line)?;

                let result = match op {
                    Add => left.checked_add(right),
                    Sub => left.checked_sub(right),
                    Mul => left.checked_mul(right),
                    Div => left.checked_div(right),
                };
                result.map(RuntimeObject::int)
                      .ok_or(RuntimeError::Overflow { line })
            },
        }
    }
}
