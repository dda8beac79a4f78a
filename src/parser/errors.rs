use crate::lexer::{Position, TokenKind};
use thiserror::Error;

/// Parser error types. The recognizer stops at the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Expected {expected} but found {found} at {pos}")]
    ExpectedToken {
        expected: TokenKind,
        found: String,
        pos: Position,
    },

    #[error("Unexpected token {found} at {pos}")]
    UnexpectedToken { found: String, pos: Position },

    #[error("Unexpected token in expression: {found} at {pos}")]
    UnexpectedTokenInExpression { found: String, pos: Position },

    #[error("Nesting deeper than {limit} levels at {pos}")]
    NestingTooDeep { limit: usize, pos: Position },
}

impl ParserError {
    /// Position of the token the recognizer stopped on.
    pub fn pos(&self) -> Position {
        match self {
            ParserError::ExpectedToken { pos, .. }
            | ParserError::UnexpectedToken { pos, .. }
            | ParserError::UnexpectedTokenInExpression { pos, .. }
            | ParserError::NestingTooDeep { pos, .. } => *pos,
        }
    }
}
