use crate::{
    ast::{AssignOperator, BinaryOperator, ExprNode, NodeId},
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{Spanned, Token},
        parser::{
            core::ParseResult,
            utils::{describe, is_operand, push_node},
        },
    },
    memory::arena::{Arena, Cursor},
};

/// The operator a range is split at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitOperator {
    Assign(AssignOperator),
    Binary(BinaryOperator),
}

/// Outcome of scanning a token range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// The range is a single operand token.
    Single,
    /// The whole range is enclosed in one pair of parentheses.
    Wrapped,
    /// The range splits at the operator under `at`.
    Split {
        /// Cursor to the operator token.
        at:       Cursor,
        /// The operator.
        operator: SplitOperator,
        /// Line of the operator.
        line:     usize,
    },
}

/// Converts a token to an arithmetic operator, if it is one.
///
/// # Example
/// ```
/// use mao::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Converts a token to an assignment operator, if it is one.
#[must_use]
pub const fn token_to_assign_operator(token: &Token) -> Option<AssignOperator> {
    match token {
        Token::Equals => Some(AssignOperator::Assign),
        Token::PlusAssign => Some(AssignOperator::AddAssign),
        Token::MinusAssign => Some(AssignOperator::SubAssign),
        Token::MulAssign => Some(AssignOperator::MulAssign),
        Token::DivAssign => Some(AssignOperator::DivAssign),
        _ => None,
    }
}

/// Scans `[start, end)` at parenthesis depth zero and decides how to parse it.
///
/// The first assignment operator at depth zero wins immediately, which makes
/// assignment right-associative. Otherwise the split point is the last
/// arithmetic operator of the lowest priority whose predecessor is not itself
/// an operator; operators directly after another operator are signs and
/// belong to the right-hand operand.
///
/// # Errors
/// - `MissingOperator` if two operand tokens are adjacent.
/// - `UnmatchedParentheses` if a `)` has no `(` or parentheses remain open.
/// - `TooManyOperators` if the range holds no operand.
/// - `UnexpectedToken` for tokens that cannot be part of an expression.
pub fn scan_range(tokens: &Arena<Spanned>, start: Cursor, end: Cursor) -> ParseResult<Scan> {
    let mut depth = 0usize;
    let mut previous: Option<&Token> = None;
    let mut split: Option<(Cursor, SplitOperator, usize)> = None;
    let mut lowest = u8::MAX;
    let mut operand_seen = false;
    let mut assignment = false;
    let mut wrapped = matches!(tokens.at(start), Some((Token::LParen, _)));
    let mut last_line = tokens.at(start).map_or(0, |(_, line)| *line);

    let mut cursor = start;
    while cursor != end
          && let Some((token, line)) = tokens.at(cursor)
    {
        let line = *line;
        last_line = line;

        if is_operand(token) {
            if previous.is_some_and(is_operand) {
                return Err(ParseError::MissingOperator { line });
            }
            operand_seen = true;
        } else if let Some(op) = token_to_assign_operator(token) {
            if depth == 0 {
                split = Some((cursor, SplitOperator::Assign(op), line));
                assignment = true;
                break;
            }
        } else if let Some(op) = token_to_binary_operator(token) {
            if depth == 0
               && op.priority() <= lowest
               && previous.is_some_and(|p| token_to_binary_operator(p).is_none())
            {
                lowest = op.priority();
                split = Some((cursor, SplitOperator::Binary(op), line));
            }
        } else {
            match token {
                Token::LParen => depth += 1,
                Token::RParen => {
                    depth = depth.checked_sub(1)
                                 .ok_or(ParseError::UnmatchedParentheses { line })?;
                },
                other => {
                    return Err(ParseError::UnexpectedToken { token: describe(other),
                                                             line });
                },
            }
        }

        let mut next = cursor;
        tokens.advance(&mut next);
        if depth == 0 && next != end {
            wrapped = false;
        }
        previous = Some(token);
        cursor = next;
    }

    if depth != 0 {
        return Err(ParseError::UnmatchedParentheses { line: last_line });
    }
    if wrapped {
        return Ok(Scan::Wrapped);
    }
    if !assignment && !operand_seen {
        return Err(ParseError::TooManyOperators { line: last_line });
    }

    match split {
        Some((at, operator, line)) => Ok(Scan::Split { at, operator, line }),
        None => {
            let mut second = start;
            tokens.advance(&mut second);
            if second == end {
                Ok(Scan::Single)
            } else {
                Err(ParseError::MissingOperator { line: last_line })
            }
        },
    }
}

impl Context {
    /// Parses both sides of a split point and joins them under one node.
    ///
    /// For assignments the left side must reduce to a single variable leaf.
    #[allow(clippy::too_many_arguments)]
    pub(in crate::interpreter::parser) fn parse_split(&mut self,
                                                      nodes: &mut Arena<ExprNode>,
                                                      tokens: &Arena<Spanned>,
                                                      start: Cursor,
                                                      end: Cursor,
                                                      at: Cursor,
                                                      operator: SplitOperator,
                                                      line: usize,
                                                      depth: usize)
                                                      -> ParseResult<NodeId> {
        let mut right_start = at;
        tokens.advance(&mut right_start);

        let node = match operator {
            SplitOperator::Assign(op) => {
                let target = self.parse_range(nodes, tokens, start, at, line, depth)?;
                if nodes.get(target.0).and_then(ExprNode::as_variable).is_none() {
                    return Err(ParseError::InvalidAssignmentTarget { line });
                }
                let value = self.parse_range(nodes, tokens, right_start, end, line, depth)?;
                ExprNode::Assign { op,
                                   target,
                                   value,
                                   line }
            },
            SplitOperator::Binary(op) => {
                let left = self.parse_range(nodes, tokens, start, at, line, depth)?;
                let right = self.parse_range(nodes, tokens, right_start, end, line, depth)?;
                ExprNode::Binary { op,
                                   left,
                                   right,
                                   line }
            },
        };

        Ok(push_node(nodes, node))
    }
}
