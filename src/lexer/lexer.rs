use crate::errors::errors::ErrorHandler;

use super::tokens::{
    is_digit, is_identifier_char, is_letter, is_newline, is_whitespace, Token, TokenKind,
    DELIMITERS, KEYWORDS, OPERATORS,
};

/// Sentinel returned by the cursor primitives past the end of input.
const EOF_CHAR: char = '\0';

/// Single-pass scanner over one source text. Each instance owns its cursor
/// and its error handler, so independent sources can be scanned in parallel
/// without any shared state.
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    error_handler: ErrorHandler,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            error_handler: ErrorHandler::new(),
            tokens: vec![],
        }
    }

    fn current_char(&self) -> char {
        self.source.get(self.pos).copied().unwrap_or(EOF_CHAR)
    }

    fn peek_char(&self, offset: usize) -> char {
        self.source
            .get(self.pos + offset)
            .copied()
            .unwrap_or(EOF_CHAR)
    }

    /// Consumes and returns the current character. Line and column afterwards
    /// describe where the next character will be read from.
    fn advance(&mut self) -> char {
        let c = match self.source.get(self.pos) {
            Some(c) => *c,
            None => return EOF_CHAR,
        };
        self.pos += 1;

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        c
    }

    /// Scans the whole source, recovering from malformed input, and returns
    /// the token sequence terminated by exactly one EndOfInput token.
    /// Cursor state, token buffer, and error log are reset at entry, so
    /// repeated calls re-scan from the start.
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.tokens.clear();
        self.error_handler.clear();
        self.pos = 0;
        self.line = 1;
        self.column = 1;

        while self.pos < self.source.len() {
            let start_line = self.line;
            let start_col = self.column;

            if let Some(mut token) = self.scan_token() {
                // Lookahead may already have moved the cursor past newlines;
                // pin the token to where its lexeme started.
                token.line = start_line;
                token.column = start_col;
                self.tokens.push(token);
            }
        }

        self.tokens.push(Token::new(
            TokenKind::EndOfInput,
            String::new(),
            self.line,
            self.column,
        ));
        self.tokens.clone()
    }

    /// First match wins; this order is the language's disambiguation policy.
    fn scan_token(&mut self) -> Option<Token> {
        // Checked against the position, not the sentinel: a literal NUL in
        // the source must fall through to the invalid-symbol rule.
        if self.pos >= self.source.len() {
            return None;
        }

        let c = self.current_char();

        if is_whitespace(c) {
            self.advance();
            return None;
        }

        if is_newline(c) {
            let line = self.line;
            let column = self.column;
            self.advance();
            return Some(Token::new(TokenKind::Newline, c.to_string(), line, column));
        }

        if c == '/' && self.peek_char(1) == '/' {
            return Some(self.scan_single_line_comment());
        }

        if c == '/' && self.peek_char(1) == '*' {
            return Some(self.scan_multi_line_comment());
        }

        if c == '$' {
            return Some(self.scan_string());
        }

        // Identifiers first: the two-character lookahead is what separates a
        // 071/070/048-led identifier from an ordinary number starting with 0.
        if c == '0'
            && ((self.peek_char(1) == '7' && matches!(self.peek_char(2), '0' | '1'))
                || (self.peek_char(1) == '4' && self.peek_char(2) == '8'))
        {
            return Some(self.scan_identifier());
        }

        if is_digit(c) || (c == '.' && is_digit(self.peek_char(1))) {
            return Some(self.scan_number());
        }

        if c == '_' {
            return Some(self.scan_underscore_word());
        }

        if is_letter(c) {
            return Some(self.scan_keyword());
        }

        if matches!(c, '+' | '-' | '*' | '/' | '=' | '!' | '<' | '>') {
            return Some(self.scan_operator());
        }

        if let Some(kind) = DELIMITERS.get(&c) {
            let line = self.line;
            let column = self.column;
            self.advance();
            return Some(Token::new(*kind, c.to_string(), line, column));
        }

        let line = self.line;
        let column = self.column;
        self.advance();
        Some(self.error_handler.handle_invalid_symbol(line, column, c))
    }

    fn scan_single_line_comment(&mut self) -> Token {
        let line = self.line;
        let column = self.column;
        let mut comment = String::new();
        comment.push(self.advance()); // first /
        comment.push(self.advance()); // second /

        // Runs to end of line; the newline itself is not consumed.
        while self.current_char() != '\n' && self.current_char() != EOF_CHAR {
            comment.push(self.advance());
        }

        Token::new(TokenKind::Comment, comment, line, column)
    }

    fn scan_multi_line_comment(&mut self) -> Token {
        let line = self.line;
        let column = self.column;
        let mut comment = String::new();
        comment.push(self.advance()); // /
        comment.push(self.advance()); // *

        while self.current_char() != EOF_CHAR {
            // Nesting is unsupported; report at the opening position.
            if self.current_char() == '/' && self.peek_char(1) == '*' {
                return self.error_handler.handle_nested_comment(line, column);
            }

            if self.current_char() == '*' && self.peek_char(1) == '/' {
                comment.push(self.advance());
                comment.push(self.advance());
                return Token::new(TokenKind::Comment, comment, line, column);
            }

            comment.push(self.advance());
        }

        self.error_handler.handle_unterminated_comment(line, column)
    }

    fn scan_string(&mut self) -> Token {
        let line = self.line;
        let column = self.column;
        let mut value = String::new();
        value.push(self.advance()); // opening $

        // Strings may never span multiple lines.
        while self.current_char() != EOF_CHAR && self.current_char() != '\n' {
            let c = self.advance();
            value.push(c);
            if c == '$' {
                return Token::new(TokenKind::String, value, line, column);
            }
        }

        self.error_handler
            .handle_unterminated_string(line, column, value)
    }

    fn scan_number(&mut self) -> Token {
        let line = self.line;
        let column = self.column;
        let mut number = String::new();
        let mut has_dot = false;

        // Leading-dot floats such as .5
        if self.current_char() == '.' {
            number.push(self.advance());
            has_dot = true;
        }

        while is_digit(self.current_char()) {
            number.push(self.advance());
        }

        if self.current_char() == '.' && !has_dot {
            number.push(self.advance());
            has_dot = true;
            while is_digit(self.current_char()) {
                number.push(self.advance());
            }
        }

        // Exponent: optional sign, then at least one digit required.
        if matches!(self.current_char(), 'e' | 'E') {
            number.push(self.advance());
            if matches!(self.current_char(), '+' | '-') {
                number.push(self.advance());
            }
            if !is_digit(self.current_char()) {
                return self.error_handler.handle_invalid_number(line, column, number);
            }
            while is_digit(self.current_char()) {
                number.push(self.advance());
            }
        }

        if !self.error_handler.validate_number_format(&number) {
            return self.error_handler.handle_invalid_number(line, column, number);
        }

        let kind = if has_dot || number.contains(['e', 'E']) {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        Token::new(kind, number, line, column)
    }

    fn scan_identifier(&mut self) -> Token {
        let line = self.line;
        let column = self.column;

        let mut identifier = String::new();
        identifier.push(self.advance()); // '0'
        identifier.push(self.advance()); // '7' or '4'
        identifier.push(self.advance()); // '1', '0', or '8'

        while is_identifier_char(self.current_char()) {
            identifier.push(self.advance());
        }

        // The dispatch lookahead already guaranteed a legal prefix, but the
        // validator stays the authoritative gate.
        if self.error_handler.validate_identifier_format(&identifier) {
            Token::new(TokenKind::Identifier, identifier, line, column)
        } else {
            self.error_handler
                .handle_invalid_identifier(line, column, identifier)
        }
    }

    /// An underscore can never open an identifier; the whole word is one
    /// error lexeme.
    fn scan_underscore_word(&mut self) -> Token {
        let line = self.line;
        let column = self.column;
        let mut word = String::new();
        word.push(self.advance());

        while is_identifier_char(self.current_char()) {
            word.push(self.advance());
        }

        self.error_handler
            .handle_leading_underscore(line, column, word)
    }

    fn scan_keyword(&mut self) -> Token {
        let line = self.line;
        let column = self.column;
        let mut word = String::new();

        while is_identifier_char(self.current_char()) {
            word.push(self.advance());
        }

        if let Some(kind) = KEYWORDS.get(word.to_lowercase().as_str()) {
            return Token::new(*kind, word, line, column);
        }

        // A bare word is never a valid identifier.
        self.error_handler
            .handle_invalid_identifier(line, column, word)
    }

    fn scan_operator(&mut self) -> Token {
        let line = self.line;
        let column = self.column;
        let c = self.current_char();

        // Greedy longest match: two-character spellings win over their
        // one-character prefixes.
        let two: String = [c, self.peek_char(1)].iter().collect();
        if let Some(kind) = OPERATORS.get(two.as_str()) {
            self.advance();
            self.advance();
            return Token::new(*kind, two, line, column);
        }

        if let Some(kind) = OPERATORS.get(c.to_string().as_str()) {
            self.advance();
            return Token::new(*kind, c.to_string(), line, column);
        }

        self.advance();
        self.error_handler.handle_invalid_symbol(line, column, c)
    }

    pub fn error_handler(&self) -> &ErrorHandler {
        &self.error_handler
    }

    pub fn get_error_summary(&self) -> String {
        self.error_handler.get_error_summary()
    }

    /// Prints every well-formed token, then the error summary if any
    /// failures were logged.
    pub fn print_tokens(&self) {
        println!("=== TOKENS ===");
        for token in &self.tokens {
            if !token.is_error() {
                println!("{}", token);
            }
        }

        if self.error_handler.has_errors() {
            println!("\n=== ERRORS ===");
            println!("{}", self.error_handler.get_error_summary());
        }
    }
}

/// Convenience entry point: scans `source` with a fresh lexer.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    lexer.tokenize()
}
