/// Binary operator evaluation logic.
///
/// Evaluates arithmetic nodes: both operands are evaluated, their type tags are
/// combined through the lattice and the result is allocated in the transient
/// pool.
pub mod binary;

/// Sign evaluation.
///
/// Implements `+x` and `-x` on a single operand.
pub mod unary;

/// Assignment evaluation.
///
/// Plain and compound assignment into variables, converting the stored value
/// to the variable's declared type.
pub mod assign;

/// Core evaluation logic and context management.
///
/// Contains the runtime context holding the symbol table and the transient
/// pool, variable registration and the recursive tree walk.
pub mod core;

/// Statement execution.
///
/// Runs declarations, expression statements and `print` statements, and drives
/// the parse-evaluate-release loop over a whole token stream.
pub mod statement;
