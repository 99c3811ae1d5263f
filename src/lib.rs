#![allow(clippy::module_inception)]

//! Lexical analyzer for the IBTAC teaching language.
//!
//! IBTAC source is scanned in a single pass into a sequence of classified
//! tokens. The scanner recovers from malformed input: every lexical error
//! becomes an error token carrying a diagnostic, and scanning continues
//! from the next character, so one pass surfaces every error in the input.
//!
//! The language's distinctive rule is that identifiers must begin with one
//! of three fixed numeral prefixes (`071`, `070`, or `048`); string
//! literals are delimited by `$` and may not span lines.

pub mod errors;
pub mod lexer;
