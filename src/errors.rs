use crate::lexer::{LexerError, Position};
use crate::parser::ParserError;
use thiserror::Error;

/// Which stage rejected the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

/// First fatal problem found in a source file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("Lexical error: {0}")]
    Lexical(#[from] LexerError),

    #[error("Syntax error: {0}")]
    Syntax(#[from] ParserError),
}

impl CheckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::Lexical(_) => ErrorKind::Lexical,
            CheckError::Syntax(_) => ErrorKind::Syntax,
        }
    }

    pub fn pos(&self) -> Position {
        match self {
            CheckError::Lexical(err) => err.pos(),
            CheckError::Syntax(err) => err.pos(),
        }
    }

    pub fn line(&self) -> usize {
        self.pos().line
    }
}
