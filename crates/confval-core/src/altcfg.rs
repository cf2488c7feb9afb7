//! alt-config native tree and parser.
//!
//! alt-config is a brace-light format whose scalars carry no type: `7788`,
//! `true` and `0.0.0.0` are all just text until a consumer asks for a number
//! or a boolean. This module produces that untyped tree; the
//! [`AltBackend`](crate::AltBackend) decides what each scalar means.
//!
//! ```text
//! # comment
//! name: "Leon's Testserver"
//! host: 0.0.0.0
//! modules: [ 'js-module', other ]
//! js-module: {
//!   profiler: { port: 7799 }
//! }
//! ```
//!
//! - The document is an implicit dict of `key: value` entries.
//! - Entries and list items are separated by newlines and/or commas.
//! - Lists and dicts nest at most [`MAX_DEPTH`] levels.
//! - `#` comments run to end of line outside quotes.
//! - Keys are quoted or an unquoted run without whitespace or `: , [ ] { } # ' "`.
//! - Unquoted scalars run to end of line, `,`, `]`, `}` or `#`, and are trimmed.
//! - Quoted scalars use `'` or `"` and understand `\n \r \t \\ \' \"`.

use thiserror::Error;

use crate::coerce::parse_number_literal;

/// A node of the native alt-config tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Raw text, quoted or not.
    Scalar(String),
    List(Vec<Node>),
    /// Entries in source order. Duplicate keys are kept.
    Dict(Vec<(String, Node)>),
}

impl Node {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    pub fn is_dict(&self) -> bool {
        matches!(self, Node::Dict(_))
    }

    /// Read a scalar as a number. Fails for non-numeric text and for non-scalars.
    pub fn to_number(&self) -> Option<f64> {
        self.as_str().and_then(parse_number_literal)
    }

    /// Read a scalar as a boolean: exactly `true` or `false`.
    pub fn to_bool(&self) -> Option<bool> {
        match self.as_str()? {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Dict(entries) => Some(entries),
            _ => None,
        }
    }
}

/// A syntax error, with the 1-based line where it was detected.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("line {line}: {message}")]
pub struct AltConfigError {
    pub line: usize,
    pub message: String,
}

/// Deepest list/dict nesting accepted by [`parse`].
pub const MAX_DEPTH: usize = 128;

/// Parse an alt-config document. Empty input is an empty dict.
pub fn parse(text: &str) -> Result<Node, AltConfigError> {
    let mut parser = Parser::new(text);
    let entries = parser.parse_entries(None)?;
    Ok(Node::Dict(entries))
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        if self.peek() == Some(b'\n') {
            self.line += 1;
        }
        self.pos += 1;
    }

    fn error(&self, line: usize, message: impl Into<String>) -> AltConfigError {
        AltConfigError {
            line,
            message: message.into(),
        }
    }

    /// Skip blanks, newlines, commas and comments between items.
    fn skip_separators(&mut self) {
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' | b'\r' | b'\n' | b',' => self.bump(),
                b'#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    /// Skip blanks on the current line only.
    fn skip_blanks(&mut self) {
        while let Some(b' ' | b'\t' | b'\r') = self.peek() {
            self.bump();
        }
    }

    /// After a value: only blanks, then a separator, a comment, a closer or
    /// end of input may follow.
    fn expect_separator(&mut self) -> Result<(), AltConfigError> {
        self.skip_blanks();
        match self.peek() {
            None | Some(b'\n' | b',' | b'#' | b']' | b'}') => Ok(()),
            Some(b) => Err(self.error(
                self.line,
                format!("expected ',' or newline before '{}'", b as char),
            )),
        }
    }

    fn skip_comment(&mut self) {
        while let Some(b) = self.peek() {
            if b == b'\n' {
                break;
            }
            self.bump();
        }
    }

    /// Parse `key: value` entries until `close` (or end of input at the root).
    fn parse_entries(&mut self, close: Option<u8>) -> Result<Vec<(String, Node)>, AltConfigError> {
        let open_line = self.line;
        let mut entries = Vec::new();
        loop {
            self.skip_separators();
            match self.peek() {
                None if close.is_some() => {
                    return Err(self.error(open_line, "unterminated dict, expected '}'"));
                }
                None => return Ok(entries),
                Some(b) if Some(b) == close => {
                    self.bump();
                    return Ok(entries);
                }
                Some(b @ (b']' | b'}')) => {
                    return Err(self.error(self.line, format!("unexpected '{}'", b as char)));
                }
                Some(_) => {}
            }

            let key = self.parse_key()?;
            self.skip_blanks();
            if self.peek() != Some(b':') {
                return Err(self.error(self.line, format!("expected ':' after key '{key}'")));
            }
            self.bump();
            self.skip_blanks();
            let value = self.parse_value()?;
            entries.push((key, value));
            self.expect_separator()?;
        }
    }

    fn parse_items(&mut self) -> Result<Vec<Node>, AltConfigError> {
        let open_line = self.line;
        let mut items = Vec::new();
        loop {
            self.skip_separators();
            match self.peek() {
                None => return Err(self.error(open_line, "unterminated list, expected ']'")),
                Some(b']') => {
                    self.bump();
                    return Ok(items);
                }
                Some(b'}') => return Err(self.error(self.line, "unexpected '}'")),
                Some(_) => {
                    items.push(self.parse_value()?);
                    self.expect_separator()?;
                }
            }
        }
    }

    fn parse_key(&mut self) -> Result<String, AltConfigError> {
        if let Some(quote @ (b'\'' | b'"')) = self.peek() {
            return self.parse_quoted(quote);
        }
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() || b":,[]{}#'\"".contains(&b) {
                break;
            }
            self.bump();
        }
        if self.pos == start {
            return Err(self.error(self.line, "expected key"));
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn parse_value(&mut self) -> Result<Node, AltConfigError> {
        match self.peek() {
            None | Some(b'\n' | b',' | b']' | b'}' | b'#') => {
                Err(self.error(self.line, "expected value"))
            }
            Some(open @ (b'[' | b'{')) => {
                if self.depth == MAX_DEPTH {
                    return Err(self.error(self.line, "nesting too deep"));
                }
                self.bump();
                self.depth += 1;
                let node = if open == b'[' {
                    self.parse_items().map(Node::List)
                } else {
                    self.parse_entries(Some(b'}')).map(Node::Dict)
                };
                self.depth -= 1;
                node
            }
            Some(quote @ (b'\'' | b'"')) => Ok(Node::Scalar(self.parse_quoted(quote)?)),
            Some(_) => {
                let start = self.pos;
                while let Some(b) = self.peek() {
                    if b"\n,]}#".contains(&b) {
                        break;
                    }
                    self.bump();
                }
                Ok(Node::Scalar(self.src[start..self.pos].trim().to_string()))
            }
        }
    }

    /// Parse a quoted run starting at the opening `quote`. Newlines are allowed.
    fn parse_quoted(&mut self, quote: u8) -> Result<String, AltConfigError> {
        let open_line = self.line;
        self.bump();
        let start = self.pos;
        loop {
            match self.peek() {
                None => return Err(self.error(open_line, "unterminated quoted string")),
                Some(b'\\') => {
                    self.bump();
                    if self.peek().is_some() {
                        self.bump();
                    }
                }
                Some(b) if b == quote => break,
                Some(_) => self.bump(),
            }
        }
        let raw = &self.src[start..self.pos];
        self.bump();
        Ok(unescape_string(raw))
    }
}

/// Unescape a quoted run (handle \\, \', \", \n, \r, \t).
fn unescape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some('\\') => out.push('\\'),
                Some('\'') => out.push('\''),
                Some('"') => out.push('"'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
