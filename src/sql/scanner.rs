use thiserror::Error;

use super::{
    keywords,
    token::{Token, TokenCategory},
};

/// Fatal lexical failures. These abort the whole tokenize call; every other
/// input still yields a token, falling back to `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("unterminated string literal on line {0}")]
    UnterminatedString(usize),
    #[error("unterminated block comment on line {0}")]
    UnterminatedBlockComment(usize),
}

/// Tokenize a whole query in a single left-to-right pass.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ScanError> {
    Scanner::new(source).scan_tokens()
}

pub struct Scanner {
    chars: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Scanner {
            chars: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn scan_tokens(mut self) -> Result<Vec<Token>, ScanError> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<(), ScanError> {
        let c = self.advance();
        match c {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            c if c.is_whitespace() => self.column += 1,
            '-' if self.peek() == Some('-') => self.line_comment(),
            '/' if self.peek() == Some('*') => self.block_comment()?,
            '\'' | '"' => self.quoted(c)?,
            c if is_word_char(c) => self.word(),
            _ => self.symbol(c),
        }
        Ok(())
    }

    /// `--` through end of line or end of input, emitted as one token. The
    /// terminating newline is consumed along with the comment.
    fn line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
        let lexeme = self.lexeme();
        self.tokens
            .push(Token::new(lexeme, TokenCategory::Comment, self.line, self.column));
        if self.peek() == Some('\n') {
            self.advance();
        }
        self.line += 1;
        self.column = 1;
    }

    /// `/* ... */`, possibly spanning lines. The token records the start
    /// line; the line counter advances by the embedded newline count.
    fn block_comment(&mut self) -> Result<(), ScanError> {
        self.advance(); // the '*'
        let mut newlines = 0;
        loop {
            match self.peek() {
                None => return Err(ScanError::UnterminatedBlockComment(self.line)),
                Some('*') if self.peek_next() == Some('/') => {
                    self.advance();
                    self.advance();
                    break;
                }
                Some(c) => {
                    if c == '\n' {
                        newlines += 1;
                    }
                    self.advance();
                }
            }
        }
        let lexeme = self.lexeme();
        self.tokens
            .push(Token::new(lexeme, TokenCategory::Comment, self.line, self.column));
        self.line += newlines;
        self.column = 1;
        Ok(())
    }

    /// A `'` or `"` delimited literal, quotes kept in the lexeme. The inner
    /// content decides the literal subtype (date, number, or plain string).
    fn quoted(&mut self, quote: char) -> Result<(), ScanError> {
        loop {
            match self.peek() {
                None => return Err(ScanError::UnterminatedString(self.line)),
                Some(c) => {
                    self.advance();
                    if c == quote {
                        break;
                    }
                    if c == '\n' {
                        self.line += 1;
                    }
                }
            }
        }
        let content: String = self.chars[self.start + 1..self.current - 1].iter().collect();
        let kind = keywords::classify_quoted(&content);
        let lexeme = self.lexeme();
        self.tokens.push(Token::new(
            lexeme,
            TokenCategory::Literal(kind),
            self.line,
            self.column,
        ));
        self.column += self.current - self.start;
        Ok(())
    }

    /// Greedy run over letters, digits, `_`, `.`, and `-`.
    fn word(&mut self) {
        while self.peek().is_some_and(is_word_char) {
            self.advance();
        }
        let lexeme = self.lexeme();
        let category = keywords::classify(&lexeme);
        self.tokens
            .push(Token::new(lexeme, category, self.line, self.column));
        self.column += self.current - self.start;
    }

    /// One symbol character, or a two-character relational operator when the
    /// lookahead pair is recognized. Column advances by 1 either way.
    fn symbol(&mut self, c: char) {
        if matches!(c, '>' | '<' | '=' | '!') {
            if let Some(next) = self.peek() {
                let pair: String = [c, next].iter().collect();
                if keywords::is_relational(&pair) {
                    self.advance();
                }
            }
        }
        let lexeme = self.lexeme();
        let category = keywords::classify(&lexeme);
        self.tokens
            .push(Token::new(lexeme, category, self.line, self.column));
        self.column += 1;
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn advance(&mut self) -> char {
        self.current += 1;
        self.chars[self.current - 1]
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).copied()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}
