/// Expression parsing entry points.
///
/// Defines [`core::ParseResult`] and the recursive range parser that turns a
/// half-open range of tokens into an expression tree node. Handles stripping
/// of enclosing parentheses and dispatches to the sign, split and operand
/// rules.
pub mod core;

/// Leading sign handling.
///
/// A sub-expression starting with `+` or `-` is either a sign applied to a
/// single operand, or is parsed as if a literal `0` preceded it.
pub mod unary;

/// Split point selection.
///
/// Scans a token range at parenthesis depth zero for the operator that binds
/// loosest. Assignments split first and associate to the right; arithmetic
/// operators split at their last lowest-priority occurrence so that they
/// associate to the left.
pub mod binary;

/// Helpers shared by the parser rules.
///
/// Token classification and creation of leaf nodes for variables and literals.
pub mod utils;

/// Statement parsing.
///
/// Recognises declarations, expression statements and `print` statements at
/// the start of a token position and parses one of them.
pub mod statement;
