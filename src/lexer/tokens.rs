use crate::lexer::Position;
use std::fmt;

/// Token kinds
///
/// `String` and `Char` cover both the type keywords and the literals: the
/// language does not distinguish `string` from `"abc"` at the token level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Type keywords (and literals, see above)
    Int,
    Float,
    Double,
    String,
    Bool,
    Char,

    // Control and literal keywords
    If, // agar
    Else,
    Return,
    While,
    For,
    True,
    False,

    Id,
    Num,

    // Operators and punctuation
    Assign,    // =
    Plus,      // +
    Minus,     // -
    Mul,       // *
    Div,       // /
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;
    Gt,        // >
    Lt,        // <

    Eof,
}

impl TokenKind {
    /// Look up a word in the keyword table. Matching is case-sensitive.
    pub fn keyword(word: &str) -> Option<Self> {
        let kind = match word {
            "int" => TokenKind::Int,
            "float" => TokenKind::Float,
            "double" => TokenKind::Double,
            "string" => TokenKind::String,
            "bool" => TokenKind::Bool,
            "char" => TokenKind::Char,
            "agar" => TokenKind::If,
            "else" => TokenKind::Else,
            "return" => TokenKind::Return,
            "while" => TokenKind::While,
            "for" => TokenKind::For,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => return None,
        };
        Some(kind)
    }

    /// Single-character operators and punctuation.
    pub fn symbol(ch: char) -> Option<Self> {
        let kind = match ch {
            '=' => TokenKind::Assign,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Mul,
            '/' => TokenKind::Div,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ';' => TokenKind::Semicolon,
            '>' => TokenKind::Gt,
            '<' => TokenKind::Lt,
            _ => return None,
        };
        Some(kind)
    }

    /// Kinds that may open a declaration.
    pub fn is_type(self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Float
                | TokenKind::Double
                | TokenKind::String
                | TokenKind::Bool
                | TokenKind::Char
        )
    }

    /// Name used in diagnostics and the token listing.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Double => "DOUBLE",
            TokenKind::String => "STRING",
            TokenKind::Bool => "BOOL",
            TokenKind::Char => "CHAR",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Id => "ID",
            TokenKind::Num => "NUM",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Gt => "GT",
            TokenKind::Lt => "LT",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with position information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Position, lexeme: String) -> Self {
        Self { kind, pos, lexeme }
    }

    pub fn line(&self) -> usize {
        self.pos.line
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            kind => write!(f, "{} '{}'", kind, self.lexeme),
        }
    }
}
