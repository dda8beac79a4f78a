use crate::lexer::{Position, Token, TokenKind};
use crate::parser::ParserError;

/// Deepest nesting of statement bodies and parentheses the recognizer accepts
pub const MAX_NESTING_DEPTH: usize = 256;

/// Grammar recognizer over a finished token sequence.
///
/// Every `parse_*` method takes the cursor it starts at and returns the
/// cursor just past what it consumed. The recognizer itself never changes,
/// so a cursor can only move forward through the return values. The
/// `depth` argument counts open statement bodies and parentheses.
pub struct Recognizer<'a> {
    tokens: &'a [Token],
}

impl<'a> Recognizer<'a> {
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens }
    }

    /// Token under the cursor, if the cursor is still inside the sequence
    pub(crate) fn peek(&self, at: usize) -> Option<&'a Token> {
        self.tokens.get(at)
    }

    /// Kind under the cursor. Running off the end reads as EOF.
    pub(crate) fn kind(&self, at: usize) -> TokenKind {
        self.peek(at).map_or(TokenKind::Eof, |token| token.kind)
    }

    pub(crate) fn check(&self, at: usize, kind: TokenKind) -> bool {
        self.kind(at) == kind
    }

    /// Consume the current token if it has the expected kind
    pub(crate) fn expect(&self, at: usize, kind: TokenKind) -> Result<usize, ParserError> {
        if self.check(at, kind) {
            Ok(at + 1)
        } else {
            let (found, pos) = self.describe(at);
            Err(ParserError::ExpectedToken {
                expected: kind,
                found,
                pos,
            })
        }
    }

    pub(crate) fn unexpected(&self, at: usize) -> ParserError {
        let (found, pos) = self.describe(at);
        ParserError::UnexpectedToken { found, pos }
    }

    /// Step one nesting level deeper, or fail once the limit is reached
    pub(crate) fn nested(&self, at: usize, depth: usize) -> Result<usize, ParserError> {
        if depth >= MAX_NESTING_DEPTH {
            let (_, pos) = self.describe(at);
            return Err(ParserError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                pos,
            });
        }
        Ok(depth + 1)
    }

    fn describe(&self, at: usize) -> (String, Position) {
        match self.peek(at) {
            Some(token) => (token.to_string(), token.pos),
            None => {
                let pos = self.tokens.last().map_or(Position::new(1, 1), |token| token.pos);
                ("end of input".to_string(), pos)
            }
        }
    }

    /// expression := term (('+' | '-' | '>' | '<') term)*
    pub(crate) fn parse_expression(&self, at: usize, depth: usize) -> Result<usize, ParserError> {
        self.parse_binary_expr(
            at,
            depth,
            Self::parse_term,
            &[TokenKind::Plus, TokenKind::Minus, TokenKind::Gt, TokenKind::Lt],
        )
    }

    /// term := factor (('*' | '/') factor)*
    fn parse_term(&self, at: usize, depth: usize) -> Result<usize, ParserError> {
        self.parse_binary_expr(at, depth, Self::parse_factor, &[TokenKind::Mul, TokenKind::Div])
    }

    /// Generic left-associative binary level
    fn parse_binary_expr<F>(
        &self,
        at: usize,
        depth: usize,
        next_level: F,
        operators: &[TokenKind],
    ) -> Result<usize, ParserError>
    where
        F: Fn(&Self, usize, usize) -> Result<usize, ParserError>,
    {
        let mut at = next_level(self, at, depth)?;

        while operators.contains(&self.kind(at)) {
            at = next_level(self, at + 1, depth)?;
        }

        Ok(at)
    }

    fn parse_factor(&self, at: usize, depth: usize) -> Result<usize, ParserError> {
        match self.kind(at) {
            TokenKind::Num
            | TokenKind::Id
            | TokenKind::String
            | TokenKind::Char
            | TokenKind::True
            | TokenKind::False => Ok(at + 1),
            TokenKind::LParen => {
                let depth = self.nested(at, depth)?;
                let at = self.parse_expression(at + 1, depth)?;
                self.expect(at, TokenKind::RParen)
            }
            _ => {
                let (found, pos) = self.describe(at);
                Err(ParserError::UnexpectedTokenInExpression { found, pos })
            }
        }
    }
}
