/// The evaluator module executes statements and expression trees.
///
/// The evaluator owns the interpreter state, registers declared variables,
/// walks expression trees, performs arithmetic across the numeric type lattice
/// and writes `print` output.
///
/// # Responsibilities
/// - Evaluates expression nodes: leaves, arithmetic, signs and assignments.
/// - Manages variables and the transient pool of intermediate results.
/// - Reports runtime errors such as division by zero or integer overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces an arena of tokens, each
/// paired with the line it appears on, terminated by an end marker. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles numeric and string literals, identifiers, keywords and comments.
/// - Collects non-fatal diagnostics for malformed input.
pub mod lexer;
/// The parser module builds statements and expression trees from tokens.
///
/// Expressions are parsed by repeatedly splitting a token range at its
/// loosest-binding operator rather than by recursive descent over a grammar.
///
/// # Responsibilities
/// - Converts token ranges into expression trees and statements.
/// - Validates syntax, reporting errors with line information.
/// - Resolves variable names against the symbol table while parsing.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the numeric type tags, the typed objects variables and
/// intermediate results are stored in, and the pool holding intermediate
/// results.
///
/// # Responsibilities
/// - Defines the `TypeTag` lattice and the `RuntimeObject` representation.
/// - Implements conversion between integer and double representations.
/// - Provides generation-checked storage for transient objects.
pub mod value;
