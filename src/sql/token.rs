use std::fmt;

/// Operator sub-classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Relational,
    Logical,
    Arithmetic,
    Bitwise,
}

/// Literal sub-classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    String,
    Date,
    Boolean,
    Null,
}

/// The closed set of token classifications.
///
/// A token's category depends only on its own lexeme text and the quoting
/// context it was scanned in, never on neighboring tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Operator(OperatorKind),
    Delimiter,
    Literal(LiteralKind),
    Function,
    Special,
    Comment,
    Unknown,
}

impl TokenCategory {
    pub fn is_operator(self) -> bool {
        matches!(self, TokenCategory::Operator(_))
    }

    pub fn is_literal(self) -> bool {
        matches!(self, TokenCategory::Literal(_))
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TokenCategory::Keyword => "Palabra Reservada",
            TokenCategory::Identifier => "Identificador",
            TokenCategory::Operator(OperatorKind::Relational) => "Operador Relacional",
            TokenCategory::Operator(OperatorKind::Logical) => "Operador Lógico",
            TokenCategory::Operator(OperatorKind::Arithmetic) => "Operador Aritmético",
            TokenCategory::Operator(OperatorKind::Bitwise) => "Operador Bitwise",
            TokenCategory::Delimiter => "Delimitador",
            TokenCategory::Literal(LiteralKind::Number) => "Literal Numérico",
            TokenCategory::Literal(LiteralKind::String) => "Literal Cadena",
            TokenCategory::Literal(LiteralKind::Date) => "Literal Fecha",
            TokenCategory::Literal(LiteralKind::Boolean) => "Literal Booleano",
            TokenCategory::Literal(LiteralKind::Null) => "Literal Null",
            TokenCategory::Function => "Función SQL",
            TokenCategory::Special => "Carácter Especial",
            TokenCategory::Comment => "Comentario",
            TokenCategory::Unknown => "Desconocido",
        };
        f.pad(label)
    }
}

/// A single classified token annotated with its source position.
///
/// Quoted literals keep their surrounding quotes in the lexeme. Line and
/// column are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub category: TokenCategory,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(lexeme: String, category: TokenCategory, line: usize, column: usize) -> Self {
        Token {
            lexeme,
            category,
            line,
            column,
        }
    }
}
