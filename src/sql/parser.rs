use serde::Serialize;
use thiserror::Error;

use super::token::{OperatorKind, Token, TokenCategory};

/// A parsed statement, fully resolved to owned strings. No token
/// back-references survive parsing; the caller owns the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Statement {
    Select {
        columns: Vec<String>,
        from: String,
        #[serde(rename = "where")]
        where_clause: Option<Condition>,
    },
    Insert {
        into: String,
        columns: Vec<String>,
        values: Vec<String>,
    },
    Update {
        table: String,
        assignments: Vec<Assignment>,
        #[serde(rename = "where")]
        where_clause: Option<Condition>,
    },
    Delete {
        from: String,
        #[serde(rename = "where")]
        where_clause: Option<Condition>,
    },
}

/// One `left op right` comparison. WHERE clauses hold exactly one of these;
/// AND/OR chains are not composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub left: String,
    pub operator: String,
    pub right: String,
}

/// One `column = value` pair in an UPDATE's SET list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub column: String,
    pub value: String,
}

/// A recoverable syntax error, collected rather than propagated. At end of
/// input the offending lexeme is the sentinel `"EOF"` with line and column
/// of -1. Display renders the convention downstream reporting relies on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error: {message} en \"{lexeme}\" (línea {line}, posición {column})")]
pub struct SyntaxError {
    pub message: String,
    pub lexeme: String,
    pub index: usize,
    pub line: i32,
    pub column: i32,
}

/// Everything one parse pass produced: the recognized statements and the
/// errors collected along the way, each in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseResult {
    pub statements: Vec<Statement>,
    pub errors: Vec<SyntaxError>,
}

/// Parse a token sequence. Total over any finite input: every loop
/// iteration either consumes a statement or invokes recovery, and both
/// strictly advance the cursor.
pub fn parse(tokens: Vec<Token>) -> ParseResult {
    Parser::new(tokens).parse()
}

/// What a grammar position expects: a concrete category, or a whole
/// category group.
#[derive(Debug, Clone, Copy)]
enum Expected {
    Category(TokenCategory),
    AnyLiteral,
    AnyOperator,
}

impl Expected {
    fn matches(self, category: TokenCategory) -> bool {
        match self {
            Expected::Category(expected) => expected == category,
            Expected::AnyLiteral => category.is_literal(),
            Expected::AnyOperator => category.is_operator(),
        }
    }
}

const KEYWORD: Expected = Expected::Category(TokenCategory::Keyword);
const IDENTIFIER: Expected = Expected::Category(TokenCategory::Identifier);
const DELIMITER: Expected = Expected::Category(TokenCategory::Delimiter);

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, current: 0 }
    }

    pub fn parse(mut self) -> ParseResult {
        let mut statements = Vec::new();
        let mut errors = Vec::new();
        while !self.is_at_end() {
            match self.statement() {
                Ok(statement) => {
                    self.match_token(DELIMITER, Some(";"));
                    statements.push(statement);
                }
                Err(error) => {
                    errors.push(error);
                    self.recover();
                }
            }
        }
        ParseResult { statements, errors }
    }

    /// Dispatch on the leading lexeme, case-insensitively.
    fn statement(&mut self) -> Result<Statement, SyntaxError> {
        let leading = self
            .peek()
            .map(|token| token.lexeme.to_uppercase())
            .unwrap_or_default();
        match leading.as_str() {
            "SELECT" => {
                self.advance();
                self.select_statement()
            }
            "INSERT" => {
                self.advance();
                self.insert_statement()
            }
            "UPDATE" => {
                self.advance();
                self.update_statement()
            }
            "DELETE" => {
                self.advance();
                self.delete_statement()
            }
            _ => Err(self.error_at_current("Expected a valid SQL statement")),
        }
    }

    fn select_statement(&mut self) -> Result<Statement, SyntaxError> {
        let mut columns = Vec::new();
        if self.match_token(Expected::AnyOperator, Some("*")) {
            columns.push("*".to_string());
        } else {
            loop {
                let column = self.consume(IDENTIFIER, None, "Expected a column name")?;
                columns.push(column.lexeme);
                if !self.match_token(DELIMITER, Some(",")) {
                    break;
                }
            }
        }
        self.consume(KEYWORD, Some("FROM"), "Expected 'FROM' after select columns")?;
        let from = self
            .consume(IDENTIFIER, None, "Expected a table name after 'FROM'")?
            .lexeme;
        let where_clause = self.where_clause()?;
        Ok(Statement::Select {
            columns,
            from,
            where_clause,
        })
    }

    fn insert_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.consume(KEYWORD, Some("INTO"), "Expected 'INTO' after INSERT")?;
        let into = self
            .consume(IDENTIFIER, None, "Expected a table name after 'INTO'")?
            .lexeme;

        let mut columns = Vec::new();
        if self.match_token(DELIMITER, Some("(")) {
            loop {
                let column = self.consume(IDENTIFIER, None, "Expected a column name")?;
                columns.push(column.lexeme);
                if !self.match_token(DELIMITER, Some(",")) {
                    break;
                }
            }
            self.consume(DELIMITER, Some(")"), "Expected ')' after the column list")?;
        }

        self.consume(KEYWORD, Some("VALUES"), "Expected 'VALUES'")?;
        self.consume(DELIMITER, Some("("), "Expected '(' after 'VALUES'")?;
        let mut values = Vec::new();
        loop {
            let value = self.consume(Expected::AnyLiteral, None, "Expected a literal value")?;
            values.push(value.lexeme);
            if !self.match_token(DELIMITER, Some(",")) {
                break;
            }
        }
        self.consume(DELIMITER, Some(")"), "Expected ')' after the value list")?;
        Ok(Statement::Insert {
            into,
            columns,
            values,
        })
    }

    fn update_statement(&mut self) -> Result<Statement, SyntaxError> {
        let table = self
            .consume(IDENTIFIER, None, "Expected a table name after UPDATE")?
            .lexeme;
        self.consume(KEYWORD, Some("SET"), "Expected 'SET' after the table name")?;

        let mut assignments = Vec::new();
        loop {
            let column = self.consume(IDENTIFIER, None, "Expected a column name in the assignment")?;
            self.consume(
                Expected::AnyOperator,
                Some("="),
                "Expected '=' in the assignment",
            )?;
            let value = self.consume(
                Expected::AnyLiteral,
                None,
                "Expected a literal value in the assignment",
            )?;
            assignments.push(Assignment {
                column: column.lexeme,
                value: value.lexeme,
            });
            if !self.match_token(DELIMITER, Some(",")) {
                break;
            }
        }
        let where_clause = self.where_clause()?;
        Ok(Statement::Update {
            table,
            assignments,
            where_clause,
        })
    }

    fn delete_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.consume(KEYWORD, Some("FROM"), "Expected 'FROM' after DELETE")?;
        let from = self
            .consume(IDENTIFIER, None, "Expected a table name after 'FROM'")?
            .lexeme;
        let where_clause = self.where_clause()?;
        Ok(Statement::Delete { from, where_clause })
    }

    fn where_clause(&mut self) -> Result<Option<Condition>, SyntaxError> {
        if self.match_token(KEYWORD, Some("WHERE")) {
            Ok(Some(self.condition()?))
        } else {
            Ok(None)
        }
    }

    /// Exactly one `ident op value` triple; AND/OR chains are not composed.
    fn condition(&mut self) -> Result<Condition, SyntaxError> {
        let left = self
            .consume(IDENTIFIER, None, "Expected an identifier in the condition")?
            .lexeme;

        let relational = Expected::Category(TokenCategory::Operator(OperatorKind::Relational));
        let logical = Expected::Category(TokenCategory::Operator(OperatorKind::Logical));
        if !self.check(relational, None) && !self.check(logical, None) {
            return Err(self.error_at_current("Expected a comparison operator"));
        }
        let operator = self.advance().lexeme.clone();

        if !self.check(Expected::AnyLiteral, None) && !self.check(IDENTIFIER, None) {
            return Err(self.error_at_current("Expected a literal or identifier after the operator"));
        }
        let right = self.advance().lexeme.clone();

        Ok(Condition {
            left,
            operator,
            right,
        })
    }

    // -- matching primitives -------------------------------------------------

    /// Non-consuming predicate. The lexeme comparison, when requested, is
    /// case-insensitive.
    fn check(&mut self, expected: Expected, lexeme: Option<&str>) -> bool {
        match self.peek() {
            None => false,
            Some(token) => {
                expected.matches(token.category)
                    && lexeme.map_or(true, |l| token.lexeme.eq_ignore_ascii_case(l))
            }
        }
    }

    /// Consume and report success iff `check` passes.
    fn match_token(&mut self, expected: Expected, lexeme: Option<&str>) -> bool {
        if self.check(expected, lexeme) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the expected token or produce a structured error carrying the
    /// offending token's position.
    fn consume(
        &mut self,
        expected: Expected,
        lexeme: Option<&str>,
        message: &str,
    ) -> Result<Token, SyntaxError> {
        if self.check(expected, lexeme) {
            Ok(self.advance().clone())
        } else {
            Err(self.error_at_current(message))
        }
    }

    fn error_at_current(&mut self, message: &str) -> SyntaxError {
        match self.peek() {
            Some(token) => {
                let lexeme = token.lexeme.clone();
                let line = token.line as i32;
                let column = token.column as i32;
                SyntaxError {
                    message: message.to_string(),
                    lexeme,
                    index: self.current,
                    line,
                    column,
                }
            }
            None => SyntaxError {
                message: message.to_string(),
                lexeme: "EOF".to_string(),
                index: self.current,
                line: -1,
                column: -1,
            },
        }
    }

    /// Comment tokens are transparent to the grammar; every inspection of
    /// the stream slides the cursor past them first.
    fn skip_comments(&mut self) {
        while self
            .tokens
            .get(self.current)
            .is_some_and(|token| token.category == TokenCategory::Comment)
        {
            self.current += 1;
        }
    }

    fn is_at_end(&mut self) -> bool {
        self.skip_comments();
        self.current >= self.tokens.len()
    }

    fn peek(&mut self) -> Option<&Token> {
        self.skip_comments();
        self.tokens.get(self.current)
    }

    fn advance(&mut self) -> &Token {
        self.skip_comments();
        self.current += 1;
        &self.tokens[self.current - 1]
    }

    /// Panic-mode recovery: discard tokens until a `;` is consumed or the
    /// stream ends. The terminator is the only synchronization point, so a
    /// malformed statement with no trailing `;` also swallows whatever
    /// follows it.
    fn recover(&mut self) {
        while self.current < self.tokens.len() {
            let token = &self.tokens[self.current];
            self.current += 1;
            if token.category == TokenCategory::Delimiter && token.lexeme == ";" {
                return;
            }
        }
    }
}
