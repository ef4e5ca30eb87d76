use crate::{
    ast::{ExprNode, NodeId, ObjectRef},
    error::ParseError,
    interpreter::{
        evaluator::core::Context, lexer::Token, parser::core::ParseResult,
        value::core::RuntimeObject,
    },
    memory::arena::Arena,
};

/// Returns `true` for tokens that stand for a value on their own.
#[must_use]
pub const fn is_operand(token: &Token) -> bool {
    matches!(token, Token::Identifier(_) | Token::Integer(_) | Token::Float(_))
}

/// Appends a node to the tree under construction.
pub(in crate::interpreter::parser) fn push_node(nodes: &mut Arena<ExprNode>,
                                                node: ExprNode)
                                                -> NodeId {
    NodeId(nodes.push(node))
}

/// Formats a token for error messages.
pub(in crate::interpreter) fn describe(token: &Token) -> String {
    format!("{token:?}")
}

impl Context {
    /// Creates the leaf node for a single operand token.
    ///
    /// Identifiers must name a registered variable and are referenced, not
    /// copied. Numeric literals are allocated in the transient pool.
    pub(in crate::interpreter::parser) fn parse_operand(&mut self,
                                                        nodes: &mut Arena<ExprNode>,
                                                        token: &Token,
                                                        line: usize)
                                                        -> ParseResult<NodeId> {
        let object = match token {
            Token::Identifier(name) => {
                if !self.symbols.exists(name) {
                    return Err(ParseError::UndefinedVariable { name: name.clone(),
                                                               line });
                }
                ObjectRef::Variable(name.clone())
            },
            Token::Integer(value) => ObjectRef::Transient(self.pool.alloc(RuntimeObject::int(*value))),
            Token::Float(value) => {
                ObjectRef::Transient(self.pool.alloc(RuntimeObject::double(*value)))
            },
            other => {
                return Err(ParseError::UnexpectedToken { token: describe(other),
                                                         line });
            },
        };

        Ok(push_node(nodes, ExprNode::Leaf { object, line }))
    }
}
