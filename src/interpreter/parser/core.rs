use crate::{
    ast::{ExprNode, ExprTree, NodeId},
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::Spanned,
        parser::{
            binary::{Scan, scan_range, token_to_binary_operator},
            unary::token_to_sign_operator,
        },
    },
    memory::arena::{Arena, Cursor},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest chain of nested sub-ranges a single expression may produce.
///
/// Every operator split, sign and parenthesis pair adds one level, so a chain
/// of `n` additions nests `n` deep. Evaluation recurses along the same path.
pub const MAX_NESTING_DEPTH: usize = 512;

impl Context {
    /// Parses the tokens in `[start, end)` into an expression tree.
    ///
    /// Variable leaves are checked against the symbol table and literal leaves
    /// are allocated in the transient pool, so the returned tree is only valid
    /// until the pool is next released.
    ///
    /// # Parameters
    /// - `tokens`: Token arena holding the range.
    /// - `start`: Cursor to the first token of the expression.
    /// - `end`: Cursor one past the last token of the expression.
    ///
    /// # Returns
    /// The parsed tree.
    ///
    /// # Errors
    /// - `UnmatchedParentheses` if parentheses do not pair up.
    /// - `OperatorAtStart` if `*` or `/` starts a sub-expression.
    /// - `MissingOperand` if an operator has nothing on one side.
    /// - `MissingOperator` if two operands are adjacent.
    /// - `TooManyOperators` if the expression holds no operand at all.
    /// - `UndefinedVariable` if a name was never declared.
    /// - `InvalidAssignmentTarget` if something other than a variable is
    ///   assigned to.
    /// - `NestingTooDeep` if the tree would be deeper than
    ///   [`MAX_NESTING_DEPTH`].
    ///
    /// # Example
    /// ```
    /// use mao::{
    ///     ast::ExprNode,
    ///     interpreter::{evaluator::core::Context, lexer::tokenize},
    /// };
    ///
    /// let mut context = Context::new();
    /// let tokens = tokenize("1 + 2 * 3").tokens;
    /// let end = tokens.cursor_at(tokens.len() - 1);
    ///
    /// let tree = context.parse_expr(&tokens, tokens.cursor(), end).unwrap();
    /// assert!(matches!(tree.node(tree.root()), Some(ExprNode::Binary { .. })));
    /// assert_eq!(context.evaluate(&tree).unwrap().to_string(), "7");
    /// ```
    pub fn parse_expr(&mut self,
                      tokens: &Arena<Spanned>,
                      start: Cursor,
                      end: Cursor)
                      -> ParseResult<ExprTree> {
        let line = tokens.at(start)
                         .or_else(|| tokens.at(end))
                         .map_or(0, |(_, line)| *line);
        let mut nodes = Arena::new();
        let root = self.parse_range(&mut nodes, tokens, start, end, line, 0)?;
        tracing::trace!(nodes = nodes.len(), line, "expression parsed");
        Ok(ExprTree::new(nodes, root))
    }

    /// Parses one sub-range and returns the id of its root node.
    ///
    /// `line` is reported when the range turns out to be empty. `depth` counts
    /// the sub-ranges enclosing this one.
    pub(in crate::interpreter::parser) fn parse_range(&mut self,
                                                      nodes: &mut Arena<ExprNode>,
                                                      tokens: &Arena<Spanned>,
                                                      start: Cursor,
                                                      end: Cursor,
                                                      line: usize,
                                                      depth: usize)
                                                      -> ParseResult<NodeId> {
        if depth > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { line });
        }
        if start == end {
            return Err(ParseError::MissingOperand { line });
        }
        let Some((first, first_line)) = tokens.at(start) else {
            return Err(ParseError::MissingOperand { line });
        };
        let first_line = *first_line;

        if let Some(sign) = token_to_sign_operator(first) {
            return self.parse_signed(nodes, tokens, start, end, sign, first_line, depth + 1);
        }
        if let Some(op) = token_to_binary_operator(first) {
            return Err(ParseError::OperatorAtStart { operator: op.to_string(),
                                                     line:     first_line, });
        }

        match scan_range(tokens, start, end)? {
            Scan::Wrapped => {
                let mut inner_start = start;
                tokens.advance(&mut inner_start);
                let mut inner_end = end;
                tokens.retreat(&mut inner_end);
                self.parse_range(nodes, tokens, inner_start, inner_end, first_line, depth + 1)
            },
            Scan::Split { at, operator, line } => {
                self.parse_split(nodes, tokens, start, end, at, operator, line, depth + 1)
            },
            Scan::Single => self.parse_operand(nodes, first, first_line),
        }
    }
}
