use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use super::token::{LiteralKind, OperatorKind, TokenCategory};

static KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "SELECT", "FROM", "WHERE", "INSERT", "INTO", "UPDATE", "DELETE", "SET", "JOIN", "LEFT",
        "RIGHT", "INNER", "OUTER", "FULL", "CROSS", "ON", "AND", "OR", "NOT", "GROUP", "BY",
        "HAVING", "ORDER", "ASC", "DESC", "LIMIT", "OFFSET", "AS", "IN", "BETWEEN", "LIKE", "IS",
        "NULL", "CREATE", "TABLE", "VIEW", "INDEX", "DROP", "ALTER", "TRUNCATE", "WITH", "UNION",
        "INTERSECT", "EXCEPT", "ALL", "DISTINCT", "CASE", "WHEN", "THEN", "ELSE", "END", "EXISTS",
        "VALUES", "PRIMARY", "KEY", "FOREIGN", "REFERENCES", "CONSTRAINT", "UNIQUE", "CHECK",
        "DEFAULT",
    ])
});

static FUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "COUNT", "SUM", "AVG", "MAX", "MIN", "ROUND", "UPPER", "LOWER", "CONCAT", "SUBSTRING",
        "LENGTH", "TRIM", "LTRIM", "RTRIM", "DATE", "YEAR", "MONTH", "DAY", "HOUR", "MINUTE",
        "SECOND", "CURRENT_DATE", "CURRENT_TIMESTAMP", "CAST", "COALESCE", "NULLIF", "ABS",
        "CEIL", "FLOOR", "MOD", "POWER", "EXP", "LN", "LOG",
    ])
});

const RELATIONAL: &[&str] = &[
    "=", ">", "<", ">=", "<=", "!=", "<>", "!<", "!>", "LIKE", "IN", "IS",
];
const LOGICAL: &[&str] = &["AND", "OR", "NOT"];
const ARITHMETIC: &[&str] = &["+", "-", "*", "/", "%"];
const BITWISE: &[&str] = &["&", "|", "^", "~", "<<", ">>"];
const DELIMITERS: &[&str] = &["(", ")", ",", ";", ".", "[", "]"];
const SPECIAL: &[&str] = &["*", "@", "#"];

static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_]\w*$").unwrap());
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());

/// Whether `text` is one of the recognized relational operators, spelled
/// exactly. Used by the scanner for its two-character lookahead.
pub fn is_relational(text: &str) -> bool {
    RELATIONAL.contains(&text)
}

/// Classify an unquoted lexeme. First match wins; keywords shadow the
/// word-form operators (AND, OR, NOT, LIKE, IN, IS) and the arithmetic
/// table shadows `*` as a special character.
pub fn classify(text: &str) -> TokenCategory {
    let upper = text.to_uppercase();
    if upper == "TRUE" || upper == "FALSE" {
        return TokenCategory::Literal(LiteralKind::Boolean);
    }
    if upper == "NULL" {
        return TokenCategory::Literal(LiteralKind::Null);
    }
    if FUNCTIONS.contains(upper.as_str()) {
        return TokenCategory::Function;
    }
    if KEYWORDS.contains(upper.as_str()) {
        return TokenCategory::Keyword;
    }
    if RELATIONAL.contains(&text) {
        return TokenCategory::Operator(OperatorKind::Relational);
    }
    if LOGICAL.contains(&upper.as_str()) {
        return TokenCategory::Operator(OperatorKind::Logical);
    }
    if ARITHMETIC.contains(&text) {
        return TokenCategory::Operator(OperatorKind::Arithmetic);
    }
    if BITWISE.contains(&text) {
        return TokenCategory::Operator(OperatorKind::Bitwise);
    }
    if DELIMITERS.contains(&text) {
        return TokenCategory::Delimiter;
    }
    if SPECIAL.contains(&text) {
        return TokenCategory::Special;
    }
    if IDENTIFIER_RE.is_match(text) {
        return TokenCategory::Identifier;
    }
    if NUMBER_RE.is_match(text) {
        return TokenCategory::Literal(LiteralKind::Number);
    }
    TokenCategory::Unknown
}

/// Classify the content of a quoted literal, quotes already stripped.
pub fn classify_quoted(content: &str) -> LiteralKind {
    if DATE_RE.is_match(content) {
        LiteralKind::Date
    } else if NUMBER_RE.is_match(content) {
        LiteralKind::Number
    } else {
        LiteralKind::String
    }
}
