use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map.insert("func", TokenKind::Func);
        map
    };

    // One- and two-character spellings share the map; the scanner tries the
    // two-character lookahead first.
    pub static ref OPERATORS: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Minus);
        map.insert("*", TokenKind::Multiply);
        map.insert("/", TokenKind::Divide);
        map.insert("==", TokenKind::Equal);
        map.insert("!=", TokenKind::NotEqual);
        map.insert("<", TokenKind::LessThan);
        map.insert(">", TokenKind::GreaterThan);
        map.insert("<=", TokenKind::LessEqual);
        map.insert(">=", TokenKind::GreaterEqual);
        map
    };

    pub static ref DELIMITERS: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('(', TokenKind::LParen);
        map.insert(')', TokenKind::RParen);
        map.insert('{', TokenKind::LBrace);
        map.insert('}', TokenKind::RBrace);
        map.insert(';', TokenKind::Semicolon);
        map.insert(',', TokenKind::Comma);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Literals
    Identifier,
    Integer,
    Float,
    String,

    // Keywords (IBTAC has exactly five)
    If,
    Else,
    While,
    Return,
    Func,

    // Operators
    Plus,         // +
    Minus,        // -
    Multiply,     // *
    Divide,       // /
    Equal,        // ==
    NotEqual,     // !=
    LessThan,     // <
    GreaterThan,  // >
    LessEqual,    // <=
    GreaterEqual, // >=

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Comma,

    // Structural
    Comment,
    Whitespace,
    Newline,
    EndOfInput,

    // Error tokens
    GenericError,
    UnterminatedString,
    InvalidNumber,
    InvalidSymbol,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified unit of source text. `line` and `column` are 1-based and
/// point at the first character of the lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
    pub error_detail: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, line: usize, column: usize) -> Token {
        Token {
            kind,
            lexeme,
            line,
            column,
            error_detail: None,
        }
    }

    pub fn error(
        kind: TokenKind,
        lexeme: String,
        line: usize,
        column: usize,
        detail: String,
    ) -> Token {
        Token {
            kind,
            lexeme,
            line,
            column,
            error_detail: Some(detail),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::GenericError
                | TokenKind::UnterminatedString
                | TokenKind::InvalidNumber
                | TokenKind::InvalidSymbol
        )
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(detail) = &self.error_detail {
            write!(
                f,
                "ERROR({}): {} at line {}, col {}",
                self.kind, detail, self.line, self.column
            )
        } else {
            write!(
                f,
                "{}({}) at line {}, col {}",
                self.kind, self.lexeme, self.line, self.column
            )
        }
    }
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whitespace the scanner skips silently; newline is handled on its own.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

pub fn is_newline(c: char) -> bool {
    c == '\n'
}
