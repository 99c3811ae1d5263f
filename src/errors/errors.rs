use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::lexer::tokens::{Token, TokenKind};

lazy_static! {
    // Integers, floats (including leading-dot and trailing-dot forms) and an
    // optional signed exponent. Anchored: the whole lexeme must match.
    static ref NUMBER_FORMAT: Regex =
        Regex::new(r"^(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap();
}

/// The lexical failure taxonomy. These are never raised; the error handler
/// renders each one into an error token's diagnostic text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexicalErrorKind {
    #[error("Unterminated string literal: '{partial}'")]
    UnterminatedString { partial: String },
    #[error("Invalid number format: '{number}'")]
    InvalidNumber { number: String },
    #[error("Invalid symbol: '{symbol}'")]
    InvalidSymbol { symbol: String },
    #[error("Invalid identifier: '{identifier}' (must start with '071', '070', or '048')")]
    InvalidIdentifier { identifier: String },
    #[error("Invalid identifier: '{identifier}'")]
    LeadingUnderscore { identifier: String },
    #[error("Nested multi-line comments are not supported")]
    NestedComment,
    #[error("Unterminated multi-line comment")]
    UnterminatedComment,
}

impl LexicalErrorKind {
    pub fn token_kind(&self) -> TokenKind {
        match self {
            LexicalErrorKind::UnterminatedString { .. } => TokenKind::UnterminatedString,
            LexicalErrorKind::InvalidNumber { .. } => TokenKind::InvalidNumber,
            LexicalErrorKind::InvalidSymbol { .. } => TokenKind::InvalidSymbol,
            LexicalErrorKind::InvalidIdentifier { .. } => TokenKind::GenericError,
            LexicalErrorKind::LeadingUnderscore { .. } => TokenKind::GenericError,
            LexicalErrorKind::NestedComment => TokenKind::GenericError,
            LexicalErrorKind::UnterminatedComment => TokenKind::GenericError,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Ordered log of the error tokens produced during one scan session.
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler {
    errors: Vec<Token>,
    error_count: usize,
}

impl ErrorHandler {
    pub fn new() -> Self {
        ErrorHandler {
            errors: vec![],
            error_count: 0,
        }
    }

    /// Records a lexical failure and returns the error token the scanner
    /// yields in place of a well-formed one.
    pub fn report(
        &mut self,
        error: LexicalErrorKind,
        line: usize,
        column: usize,
        lexeme: String,
    ) -> Token {
        self.error_count += 1;
        let token = Token::error(error.token_kind(), lexeme, line, column, error.to_string());
        self.errors.push(token.clone());
        token
    }

    pub fn handle_unterminated_string(
        &mut self,
        line: usize,
        column: usize,
        partial: String,
    ) -> Token {
        self.report(
            LexicalErrorKind::UnterminatedString {
                partial: partial.clone(),
            },
            line,
            column,
            partial,
        )
    }

    pub fn handle_invalid_number(&mut self, line: usize, column: usize, number: String) -> Token {
        self.report(
            LexicalErrorKind::InvalidNumber {
                number: number.clone(),
            },
            line,
            column,
            number,
        )
    }

    pub fn handle_invalid_symbol(&mut self, line: usize, column: usize, symbol: char) -> Token {
        self.report(
            LexicalErrorKind::InvalidSymbol {
                symbol: symbol.to_string(),
            },
            line,
            column,
            symbol.to_string(),
        )
    }

    /// A bare word that is neither a keyword nor prefixed with 071/070/048.
    pub fn handle_invalid_identifier(
        &mut self,
        line: usize,
        column: usize,
        identifier: String,
    ) -> Token {
        self.report(
            LexicalErrorKind::InvalidIdentifier {
                identifier: identifier.clone(),
            },
            line,
            column,
            identifier,
        )
    }

    /// Identifiers may never begin with an underscore.
    pub fn handle_leading_underscore(
        &mut self,
        line: usize,
        column: usize,
        identifier: String,
    ) -> Token {
        self.report(
            LexicalErrorKind::LeadingUnderscore {
                identifier: identifier.clone(),
            },
            line,
            column,
            identifier,
        )
    }

    pub fn handle_nested_comment(&mut self, line: usize, column: usize) -> Token {
        self.report(
            LexicalErrorKind::NestedComment,
            line,
            column,
            String::from("/*"),
        )
    }

    pub fn handle_unterminated_comment(&mut self, line: usize, column: usize) -> Token {
        self.report(
            LexicalErrorKind::UnterminatedComment,
            line,
            column,
            String::from("/*"),
        )
    }

    pub fn get_error_summary(&self) -> String {
        if self.error_count == 0 {
            return String::from("No lexical errors found.");
        }

        let mut summary = format!("Found {} lexical error(s):\n", self.error_count);
        for (i, error) in self.errors.iter().enumerate() {
            summary.push_str(&format!("{}. {}\n", i + 1, error));
        }
        summary
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn errors(&self) -> &[Token] {
        &self.errors
    }

    pub fn clear(&mut self) {
        self.errors.clear();
        self.error_count = 0;
    }

    /// Authoritative numeral revalidation run after the number scan has
    /// assembled the full lexeme.
    pub fn validate_number_format(&self, number: &str) -> bool {
        NUMBER_FORMAT.is_match(number)
    }

    /// Identifiers must carry one of the three legal three-digit prefixes.
    pub fn validate_identifier_format(&self, identifier: &str) -> bool {
        identifier.starts_with("071")
            || identifier.starts_with("070")
            || identifier.starts_with("048")
    }

    pub fn suggest_correction(&self, error_token: &Token) -> ErrorTip {
        match error_token.kind {
            TokenKind::GenericError => {
                let is_prefix_error = error_token
                    .error_detail
                    .as_ref()
                    .is_some_and(|detail| detail.contains("must start with"));
                if is_prefix_error {
                    ErrorTip::Suggestion(String::from(
                        "Try starting the identifier with '071', '070', or '048'.",
                    ))
                } else {
                    ErrorTip::None
                }
            }
            TokenKind::UnterminatedString => ErrorTip::Suggestion(format!(
                "Add closing '$' to complete string: '{}$'",
                error_token.lexeme
            )),
            TokenKind::InvalidNumber => ErrorTip::Suggestion(String::from(
                "Check number format - use digits, decimal point, or exponential notation",
            )),
            _ => ErrorTip::None,
        }
    }
}
