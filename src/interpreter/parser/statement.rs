use crate::{
    ast::{PrintArgument, Statement},
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{Spanned, Token},
        parser::{core::ParseResult, utils::describe},
        value::core::TypeTag,
    },
    memory::arena::{Arena, Cursor},
};

impl Context {
    /// Parses the statement starting at `cursor` and moves the cursor past it.
    ///
    /// A statement is one of:
    /// - a declaration: `int a, b;` or `double x;`.
    /// - a print statement: `print("text");` or `print(expression);`.
    /// - an expression statement terminated by `;`.
    ///
    /// Stray `;` tokens between statements are skipped. Declarations are only
    /// parsed here; the names are registered when the statement is evaluated,
    /// so an expression can use a variable declared by any earlier statement.
    ///
    /// # Parameters
    /// - `tokens`: Token arena terminated by [`Token::End`].
    /// - `cursor`: Position to parse from, updated to the next statement.
    ///
    /// # Returns
    /// The parsed statement, or `None` once the end of input is reached.
    pub fn parse_statement(&mut self,
                           tokens: &Arena<Spanned>,
                           cursor: &mut Cursor)
                           -> ParseResult<Option<Statement>> {
        while let Some((Token::Semicolon, _)) = tokens.at(*cursor) {
            tokens.advance(cursor);
        }
        let Some((token, line)) = tokens.at(*cursor) else {
            return Ok(None);
        };
        let line = *line;

        match token {
            Token::End => Ok(None),
            Token::IntType => parse_declaration(tokens, cursor, TypeTag::INT, line).map(Some),
            Token::DoubleType => parse_declaration(tokens, cursor, TypeTag::DOUBLE, line).map(Some),
            Token::Print => self.parse_print(tokens, cursor, line).map(Some),
            Token::Identifier(_)
            | Token::Integer(_)
            | Token::Float(_)
            | Token::LParen
            | Token::Plus
            | Token::Minus
            | Token::Star
            | Token::Slash => self.parse_expression_statement(tokens, cursor, line).map(Some),
            other => Err(ParseError::UnexpectedToken { token: describe(other),
                                                       line }),
        }
    }

    /// Parses an expression up to the next `;`.
    fn parse_expression_statement(&mut self,
                                  tokens: &Arena<Spanned>,
                                  cursor: &mut Cursor,
                                  line: usize)
                                  -> ParseResult<Statement> {
        let start = *cursor;
        let mut terminator = start;
        let mut last_line = line;

        loop {
            match tokens.at(terminator) {
                Some((Token::Semicolon, _)) => break,
                Some((Token::End, _)) | None => {
                    return Err(ParseError::MissingSemicolon { line: last_line });
                },
                Some((_, line)) => {
                    last_line = *line;
                    tokens.advance(&mut terminator);
                },
            }
        }

        let tree = self.parse_expr(tokens, start, terminator)?;
        tokens.advance(&mut terminator);
        *cursor = terminator;

        Ok(Statement::Expression { tree })
    }

    /// Parses `print(...)` with an optional trailing `;`.
    ///
    /// An argument made of exactly one string literal is printed verbatim;
    /// anything else is parsed as an expression.
    fn parse_print(&mut self,
                   tokens: &Arena<Spanned>,
                   cursor: &mut Cursor,
                   line: usize)
                   -> ParseResult<Statement> {
        tokens.advance(cursor);
        match tokens.at(*cursor) {
            Some((Token::LParen, _)) => tokens.advance(cursor),
            Some((Token::End, end_line)) => {
                return Err(ParseError::UnexpectedEndOfInput { line: *end_line });
            },
            Some((token, token_line)) => {
                return Err(ParseError::UnexpectedToken { token: describe(token),
                                                         line:  *token_line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }

        let start = *cursor;
        let close = find_closing_paren(tokens, start, line)?;
        let mut after_text = start;
        tokens.advance(&mut after_text);

        let argument = match tokens.at(start) {
            Some((Token::Str(text), _)) if after_text == close => PrintArgument::Text(text.clone()),
            _ => PrintArgument::Expr(self.parse_expr(tokens, start, close)?),
        };

        *cursor = close;
        tokens.advance(cursor);
        if let Some((Token::Semicolon, _)) = tokens.at(*cursor) {
            tokens.advance(cursor);
        }

        Ok(Statement::Print { argument, line })
    }
}

/// Parses `int a, b, c;` after the type keyword has been recognised.
///
/// The list may end with `;` or at the end of input.
///
/// # Errors
/// - `ExpectedIdentifier` if a name is missing after the keyword or a comma.
/// - `ExpectedSeparator` if a name is followed by anything but `,` or `;`.
fn parse_declaration(tokens: &Arena<Spanned>,
                     cursor: &mut Cursor,
                     tag: TypeTag,
                     line: usize)
                     -> ParseResult<Statement> {
    tokens.advance(cursor);
    let mut names = Vec::new();

    loop {
        match tokens.at(*cursor) {
            Some((Token::Identifier(name), name_line)) => {
                names.push((name.clone(), *name_line));
                tokens.advance(cursor);
            },
            other => {
                return Err(ParseError::ExpectedIdentifier { keyword: tag.name().to_string(),
                                                            line:    other.map_or(line, |(_, l)| *l), });
            },
        }

        match tokens.at(*cursor) {
            Some((Token::Comma, _)) => tokens.advance(cursor),
            Some((Token::Semicolon, _)) => {
                tokens.advance(cursor);
                break;
            },
            Some((Token::End, _)) | None => break,
            Some((_, line)) => return Err(ParseError::ExpectedSeparator { line: *line }),
        }
    }

    Ok(Statement::Declaration { tag, names })
}

/// Finds the `)` closing the parenthesis opened just before `start`.
fn find_closing_paren(tokens: &Arena<Spanned>,
                      start: Cursor,
                      line: usize)
                      -> ParseResult<Cursor> {
    let mut depth = 0usize;
    let mut cursor = start;

    while let Some((token, _)) = tokens.at(cursor) {
        match token {
            Token::LParen => depth += 1,
            Token::RParen if depth == 0 => return Ok(cursor),
            Token::RParen => depth -= 1,
            Token::End => break,
            _ => {},
        }
        tokens.advance(&mut cursor);
    }

    Err(ParseError::ExpectedClosingParen { line })
}
