/// Evaluation of arithmetic nodes.
///
/// Evaluates the operands of a binary node in order, resolves them and hands
/// them to the scalar arithmetic.
pub mod core;

/// Scalar arithmetic on runtime objects.
///
/// Implements `+`, `-`, `*` and `/` for every pair of numeric types, computing
/// in the representation selected by the combined type tag.
pub mod scalar;
