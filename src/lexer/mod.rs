//! Lexical analysis module for the IBTAC language.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of classified tokens. It handles:
//!
//! - Character-by-character scanning with multi-character lookahead
//! - The 071/070/048 identifier prefix rule
//! - Keywords, numeric and string literals, operators, and delimiters
//! - Comments and whitespace handling
//! - Error recovery: malformed input becomes error tokens, never a panic
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
