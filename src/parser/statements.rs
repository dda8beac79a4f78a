use crate::lexer::{Token, TokenKind};
use crate::parser::ParserError;
use crate::parser::expressions::Recognizer;

impl Recognizer<'_> {
    /// program := statement* EOF
    #[tracing::instrument(skip_all)]
    pub fn parse_program(&self) -> Result<(), ParserError> {
        let mut at = 0;
        let mut count = 0usize;

        while !self.check(at, TokenKind::Eof) {
            at = self.parse_statement(at, 0)?;
            count += 1;
        }

        self.expect(at, TokenKind::Eof)?;
        tracing::debug!(statements = count, "program accepted");
        Ok(())
    }

    /// Parse a statement, dispatching on the current token alone
    pub(crate) fn parse_statement(&self, at: usize, depth: usize) -> Result<usize, ParserError> {
        let kind = self.kind(at);
        tracing::trace!(%kind, at, depth, "statement");

        match kind {
            kind if kind.is_type() => self.parse_declaration(at),
            TokenKind::Id => {
                let at = self.parse_assignment(at, depth)?;
                self.expect(at, TokenKind::Semicolon)
            }
            TokenKind::If => self.parse_if_statement(at, depth),
            TokenKind::While => self.parse_while_statement(at, depth),
            TokenKind::For => self.parse_for_statement(at, depth),
            TokenKind::Return => self.parse_return_statement(at, depth),
            TokenKind::LBrace => self.parse_block_statement(at, depth),
            _ => Err(self.unexpected(at)),
        }
    }

    /// block := '{' statement* '}'
    pub(crate) fn parse_block_statement(&self, at: usize, depth: usize) -> Result<usize, ParserError> {
        let inner = self.nested(at, depth)?;
        let mut at = self.expect(at, TokenKind::LBrace)?;

        while !self.check(at, TokenKind::RBrace) && !self.check(at, TokenKind::Eof) {
            at = self.parse_statement(at, inner)?;
        }

        self.expect(at, TokenKind::RBrace)
    }

    /// declaration := TYPE IDENT ';'
    fn parse_declaration(&self, at: usize) -> Result<usize, ParserError> {
        // type token already checked by the dispatcher
        let at = self.expect(at + 1, TokenKind::Id)?;
        self.expect(at, TokenKind::Semicolon)
    }

    /// assignment := IDENT '=' expression
    ///
    /// Leaves the terminator to the caller: a statement wants `;`, the
    /// step of a for-header wants `)`.
    fn parse_assignment(&self, at: usize, depth: usize) -> Result<usize, ParserError> {
        let at = self.expect(at, TokenKind::Id)?;
        let at = self.expect(at, TokenKind::Assign)?;
        self.parse_expression(at, depth)
    }

    /// ifStmt := 'agar' '(' expression ')' statement ('else' statement)?
    fn parse_if_statement(&self, at: usize, depth: usize) -> Result<usize, ParserError> {
        let inner = self.nested(at, depth)?;
        let at = self.parse_condition(at, TokenKind::If, depth)?;
        let at = self.parse_statement(at, inner)?;

        // Greedy: an `else` here belongs to the innermost open `agar`
        if self.check(at, TokenKind::Else) {
            self.parse_statement(at + 1, inner)
        } else {
            Ok(at)
        }
    }

    /// whileStmt := 'while' '(' expression ')' statement
    fn parse_while_statement(&self, at: usize, depth: usize) -> Result<usize, ParserError> {
        let inner = self.nested(at, depth)?;
        let at = self.parse_condition(at, TokenKind::While, depth)?;
        self.parse_statement(at, inner)
    }

    /// forStmt := 'for' '(' assignment ';' expression ';' assignment ')' statement
    fn parse_for_statement(&self, at: usize, depth: usize) -> Result<usize, ParserError> {
        let inner = self.nested(at, depth)?;
        let at = self.expect(at, TokenKind::For)?;
        let at = self.expect(at, TokenKind::LParen)?;

        let at = self.parse_assignment(at, depth)?;
        let at = self.expect(at, TokenKind::Semicolon)?;

        let at = self.parse_expression(at, depth)?;
        let at = self.expect(at, TokenKind::Semicolon)?;

        let at = self.parse_assignment(at, depth)?;
        let at = self.expect(at, TokenKind::RParen)?;

        self.parse_statement(at, inner)
    }

    /// returnStmt := 'return' expression ';'
    fn parse_return_statement(&self, at: usize, depth: usize) -> Result<usize, ParserError> {
        let at = self.expect(at, TokenKind::Return)?;
        let at = self.parse_expression(at, depth)?;
        self.expect(at, TokenKind::Semicolon)
    }

    /// keyword '(' expression ')'
    fn parse_condition(&self, at: usize, keyword: TokenKind, depth: usize) -> Result<usize, ParserError> {
        let at = self.expect(at, keyword)?;
        let at = self.expect(at, TokenKind::LParen)?;
        let at = self.parse_expression(at, depth)?;
        self.expect(at, TokenKind::RParen)
    }
}

/// Check a token sequence against the grammar
pub fn parse(tokens: &[Token]) -> Result<(), ParserError> {
    Recognizer::new(tokens).parse_program()
}
