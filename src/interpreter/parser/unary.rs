use crate::{
    ast::{ExprNode, NodeId, SignOperator},
    interpreter::{
        evaluator::core::Context,
        lexer::{Spanned, Token},
        parser::{
            core::ParseResult,
            utils::{is_operand, push_node},
        },
    },
    memory::arena::{Arena, Cursor},
};

/// Converts a token to a sign operator, if it is one.
///
/// # Example
/// ```
/// use mao::{
///     ast::SignOperator,
///     interpreter::{lexer::Token, parser::unary::token_to_sign_operator},
/// };
///
/// assert_eq!(token_to_sign_operator(&Token::Minus), Some(SignOperator::Minus));
/// assert_eq!(token_to_sign_operator(&Token::Star), None);
/// ```
#[must_use]
pub const fn token_to_sign_operator(token: &Token) -> Option<SignOperator> {
    match token {
        Token::Plus => Some(SignOperator::Plus),
        Token::Minus => Some(SignOperator::Minus),
        _ => None,
    }
}

impl Context {
    /// Parses a range whose first token is `+` or `-`.
    ///
    /// A sign followed by exactly one operand becomes a [`ExprNode::Sign`]
    /// node. Anything else is reparsed from a scratch copy of the range with a
    /// literal `0` in front, so `-a * b` means `0 - a * b`.
    #[allow(clippy::too_many_arguments)]
    pub(in crate::interpreter::parser) fn parse_signed(&mut self,
                                                       nodes: &mut Arena<ExprNode>,
                                                       tokens: &Arena<Spanned>,
                                                       start: Cursor,
                                                       end: Cursor,
                                                       op: SignOperator,
                                                       line: usize,
                                                       depth: usize)
                                                       -> ParseResult<NodeId> {
        let mut operand = start;
        tokens.advance(&mut operand);
        let mut after = operand;
        tokens.advance(&mut after);

        if operand != end
           && after == end
           && let Some((token, operand_line)) = tokens.at(operand)
           && is_operand(token)
        {
            let operand = self.parse_operand(nodes, token, *operand_line)?;
            return Ok(push_node(nodes, ExprNode::Sign { op, operand, line }));
        }

        let mut scratch: Arena<Spanned> = Arena::new();
        scratch.push((Token::Integer(0), line));
        let mut cursor = start;
        while cursor != end
              && let Some(spanned) = tokens.at(cursor)
        {
            scratch.push(spanned.clone());
            tokens.advance(&mut cursor);
        }

        self.parse_range(nodes, &scratch, scratch.cursor(), scratch.end(), line, depth)
    }
}
