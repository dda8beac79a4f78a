use crate::lexer::{LexerError, Position, Token, TokenKind};

pub struct Scanner<'a> {
    input: &'a str,
    current: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            current: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    pub fn scan_all(mut self) -> Result<Vec<Token>, LexerError> {
        loop {
            self.skip_whitespace();
            let Some(ch) = self.peek() else {
                break;
            };

            let token = self.scan_token(ch)?;
            tracing::trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.pos.line, "token");
            self.tokens.push(token);
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            self.current_position(),
            String::new(),
        ));

        Ok(self.tokens)
    }

    fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.current..].chars().next()
    }

    fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.input[self.current..].chars().nth(offset)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consume characters while `pred` holds and return the consumed slice.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let input = self.input;
        let start = self.current;
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
        &input[start..self.current]
    }

    /// Blanks, tabs, newlines, form feed and vertical tab.
    fn skip_whitespace(&mut self) {
        self.take_while(|ch| ch.is_ascii_whitespace() || ch == '\x0B');
    }

    fn scan_token(&mut self, ch: char) -> Result<Token, LexerError> {
        let start_pos = self.current_position();

        if ch.is_ascii_digit() {
            return Ok(self.scan_number(start_pos));
        }
        if ch.is_ascii_alphabetic() {
            return Ok(self.scan_word(start_pos));
        }

        match ch {
            '"' => self.scan_string_literal(start_pos),
            '\'' => self.scan_char_literal(start_pos),
            _ => {
                let kind = TokenKind::symbol(ch).ok_or(LexerError::UnexpectedChar(ch, start_pos))?;
                self.advance();
                Ok(Token::new(kind, start_pos, ch.to_string()))
            }
        }
    }

    /// Digits and dots, taken as-is: `1.2.3` is a single number token.
    fn scan_number(&mut self, start_pos: Position) -> Token {
        let lexeme = self.take_while(|ch| ch.is_ascii_digit() || ch == '.');
        Token::new(TokenKind::Num, start_pos, lexeme.to_string())
    }

    fn scan_word(&mut self, start_pos: Position) -> Token {
        let word = self.take_while(|ch| ch.is_ascii_alphanumeric());
        let kind = TokenKind::keyword(word).unwrap_or(TokenKind::Id);
        Token::new(kind, start_pos, word.to_string())
    }

    fn scan_string_literal(&mut self, start_pos: Position) -> Result<Token, LexerError> {
        self.advance(); // opening quote
        let value = self.take_while(|ch| ch != '"');

        if self.advance() != Some('"') {
            return Err(LexerError::UnterminatedString(start_pos));
        }

        Ok(Token::new(TokenKind::String, start_pos, value.to_string()))
    }

    fn scan_char_literal(&mut self, start_pos: Position) -> Result<Token, LexerError> {
        self.advance(); // opening quote

        match (self.peek(), self.peek_ahead(1)) {
            (Some(value), Some('\'')) => {
                self.advance();
                self.advance();
                Ok(Token::new(TokenKind::Char, start_pos, value.to_string()))
            }
            _ => Err(LexerError::InvalidCharLiteral(start_pos)),
        }
    }
}

/// Tokenize a whole source buffer. The result always ends with a single EOF token.
#[tracing::instrument(skip_all, fields(source_len = input.len()))]
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
    let tokens = Scanner::new(input).scan_all()?;
    tracing::debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn lexemes(src: &str) -> Vec<String> {
        tokenize(src).unwrap().into_iter().map(|t| t.lexeme).collect()
    }

    #[test]
    fn empty_and_blank_input_yield_only_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds(" \t\r\n\n  "), vec![TokenKind::Eof]);
        assert_eq!(kinds("\x0B\x0C \x0B"), vec![TokenKind::Eof]);
    }

    #[test]
    fn eof_carries_final_line() {
        let tokens = tokenize("int x;\n\n").unwrap();
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.line(), 3);
        assert!(eof.lexeme.is_empty());
    }

    #[test]
    fn vertical_tab_separates_tokens() {
        assert_eq!(
            kinds("int x;\x0Bx = 1;"),
            vec![
                TokenKind::Int,
                TokenKind::Id,
                TokenKind::Semicolon,
                TokenKind::Id,
                TokenKind::Assign,
                TokenKind::Num,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn declaration_tokens() {
        assert_eq!(
            kinds("int x;"),
            vec![TokenKind::Int, TokenKind::Id, TokenKind::Semicolon, TokenKind::Eof]
        );
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            kinds("agar else return while for true false AGAR If x1"),
            vec![
                TokenKind::If,
                TokenKind::Else,
                TokenKind::Return,
                TokenKind::While,
                TokenKind::For,
                TokenKind::True,
                TokenKind::False,
                TokenKind::Id,
                TokenKind::Id,
                TokenKind::Id,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn identifier_stops_at_non_alphanumeric() {
        assert_eq!(lexemes("abc9+d"), vec!["abc9", "+", "d", ""]);
    }

    #[test]
    fn underscore_is_not_part_of_identifiers() {
        let err = tokenize("my_var").unwrap_err();
        assert_eq!(err, LexerError::UnexpectedChar('_', Position::new(1, 3)));
    }

    #[test]
    fn numbers_take_every_digit_and_dot() {
        assert_eq!(lexemes("3.14 1.2.3 7."), vec!["3.14", "1.2.3", "7.", ""]);
        assert_eq!(kinds("1.2.3"), vec![TokenKind::Num, TokenKind::Eof]);
    }

    #[test]
    fn number_followed_by_letters_splits() {
        assert_eq!(kinds("12ab"), vec![TokenKind::Num, TokenKind::Id, TokenKind::Eof]);
    }

    #[test]
    fn string_literal_drops_quotes_and_keeps_backslashes() {
        let tokens = tokenize(r#"s = "a\nb";"#).unwrap();
        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[2].lexeme, r"a\nb");
    }

    #[test]
    fn empty_string_literal() {
        let tokens = tokenize("\"\"").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "");
    }

    #[test]
    fn unterminated_string_reports_opening_line() {
        let err = tokenize("int x;\nstring s = \"abc\n\n").unwrap_err();
        assert_eq!(err, LexerError::UnterminatedString(Position::new(2, 12)));
    }

    #[test]
    fn multiline_string_advances_line_counter() {
        let tokens = tokenize("\"a\nb\" x").unwrap();
        assert_eq!(tokens[0].line(), 1);
        assert_eq!(tokens[1].line(), 2);
    }

    #[test]
    fn char_literal() {
        let tokens = tokenize("c = 'z';").unwrap();
        assert_eq!(tokens[2].kind, TokenKind::Char);
        assert_eq!(tokens[2].lexeme, "z");
    }

    #[test]
    fn malformed_char_literals() {
        for src in ["'ab'", "'", "'a", r"'\n'"] {
            let err = tokenize(src).unwrap_err();
            assert_eq!(err, LexerError::InvalidCharLiteral(Position::new(1, 1)), "{src}");
        }
    }

    #[test]
    fn unexpected_character_is_line_stamped() {
        let err = tokenize("x = 1;\ny = 2 % 3;").unwrap_err();
        assert_eq!(err, LexerError::UnexpectedChar('%', Position::new(2, 7)));
        assert_eq!(err.pos().line, 2);
    }

    #[test]
    fn non_ascii_letters_are_rejected() {
        assert!(matches!(
            tokenize("é = 1;"),
            Err(LexerError::UnexpectedChar('é', _))
        ));
    }

    #[test]
    fn operators() {
        assert_eq!(
            kinds("=+-*/(){};><"),
            vec![
                TokenKind::Assign,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Semicolon,
                TokenKind::Gt,
                TokenKind::Lt,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn tokens_are_stamped_with_their_line() {
        let tokens = tokenize("agar (x)\n{\n  return 1;\n}").unwrap();
        let lines: Vec<_> = tokens.iter().map(Token::line).collect();
        assert_eq!(lines, vec![1, 1, 1, 1, 2, 3, 3, 3, 4, 4]);
    }
}
