use thiserror::Error;

/// Position in source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Lexer error types. Every variant is fatal: scanning stops at the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Unexpected character '{0}' at {1}")]
    UnexpectedChar(char, Position),

    #[error("Unterminated string literal at {0}")]
    UnterminatedString(Position),

    #[error("Invalid character literal at {0}")]
    InvalidCharLiteral(Position),
}

impl LexerError {
    /// Where the offending lexeme started.
    pub fn pos(&self) -> Position {
        match self {
            LexerError::UnexpectedChar(_, pos)
            | LexerError::UnterminatedString(pos)
            | LexerError::InvalidCharLiteral(pos) => *pos,
        }
    }
}
