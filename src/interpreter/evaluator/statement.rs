use std::io::Write;

use crate::{
    ast::{PrintArgument, Statement},
    error::Error,
    interpreter::{evaluator::core::Context, lexer::Spanned},
    memory::arena::Arena,
};

impl Context {
    /// Executes a single statement.
    ///
    /// - Declarations register each name in order, stopping at the first
    ///   redefinition.
    /// - Expression statements are evaluated for their side effects.
    /// - `print` writes a string literal verbatim, or the value of an
    ///   expression followed by a line break.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    /// - `out`: Destination of `print` output.
    pub fn eval_statement<W: Write>(&mut self,
                                    statement: &Statement,
                                    out: &mut W)
                                    -> Result<(), Error> {
        match statement {
            Statement::Declaration { tag, names } => {
                for (name, line) in names {
                    self.register_variable(*tag, name, *line)?;
                }
            },
            Statement::Expression { tree } => {
                let value = self.evaluate(tree)?;
                tracing::trace!(line = tree.line_number(), %value, "expression evaluated");
            },
            Statement::Print { argument: PrintArgument::Text(text),
                               .. } => write!(out, "{text}")?,
            Statement::Print { argument: PrintArgument::Expr(tree),
                               .. } => {
                let value = self.evaluate(tree)?;
                writeln!(out, "{value}")?;
            },
        }
        Ok(())
    }

    /// Parses and executes every statement of a token stream in order.
    ///
    /// The transient pool is released after each statement, whether it
    /// succeeded or not. Execution stops at the first error; output written by
    /// earlier statements stays written.
    ///
    /// # Example
    /// ```
    /// use mao::interpreter::{evaluator::core::Context, lexer::tokenize};
    ///
    /// let tokens = tokenize("int a; a = 6 * 7; print(a);").tokens;
    /// let mut out = Vec::new();
    ///
    /// Context::new().execute(&tokens, &mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "42\n");
    /// ```
    pub fn execute<W: Write>(&mut self, tokens: &Arena<Spanned>, out: &mut W) -> Result<(), Error> {
        let mut cursor = tokens.cursor();

        loop {
            let outcome = match self.parse_statement(tokens, &mut cursor) {
                Ok(Some(statement)) => self.eval_statement(&statement, out).map(|()| true),
                Ok(None) => Ok(false),
                Err(error) => Err(error.into()),
            };
            self.release_transient_pool();

            if !outcome? {
                return Ok(());
            }
        }
    }
}
