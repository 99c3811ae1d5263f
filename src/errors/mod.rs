//! Error types and error handling for the lexer.
//!
//! This module defines how lexical failures are recorded and reported:
//!
//! - The taxonomy of lexical errors and their diagnostic messages
//! - The error handler that logs every failure as an error token
//! - Numbered error summaries for display
//! - Format validators for numerals and identifier prefixes
//! - Correction suggestions for common mistakes

pub mod errors;
