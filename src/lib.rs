//! Agar Language Syntax Checker
//!
//! Lexer and grammar recognizer for Agar, a small C-like toy language whose
//! conditional keyword is `agar`. Source text is tokenized in one pass, then
//! the tokens are checked against the grammar. The first problem found is
//! returned as a [`CheckError`]; nothing is built beyond the token list.

pub mod errors;
pub mod lexer;
pub mod parser;

pub use errors::{CheckError, ErrorKind};
pub use lexer::{tokenize, LexerError, Position, Token, TokenKind};
pub use parser::{parse, ParserError, Recognizer, MAX_NESTING_DEPTH};

/// Tokenize `source` and check it against the grammar.
///
/// On success the token sequence is handed back so callers can list it.
pub fn check_source(source: &str) -> Result<Vec<Token>, CheckError> {
    let tokens = tokenize(source)?;
    parse(&tokens)?;
    Ok(tokens)
}
