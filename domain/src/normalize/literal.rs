//! Permissive literal parser for near-JSON model output.
//!
//! Accepts the literal syntax models tend to produce when they drift away
//! from strict JSON:
//!
//! - single- or double-quoted strings (with backslash escapes)
//! - `True` / `False` / `None` alongside `true` / `false` / `null`
//! - tuples `( ... )`, read as arrays
//! - trailing commas in objects, arrays and tuples
//! - integer and float literals with an optional sign
//!
//! Object keys may be strings or numbers; numbers are stringified.
//! Anything else, including trailing garbage after the value, is rejected.
//! Nesting is limited to [`MAX_DEPTH`] levels, the same limit `serde_json`
//! applies.

use serde_json::{Map, Number, Value};
use std::iter::Peekable;
use std::str::CharIndices;

/// Deepest container nesting accepted.
pub const MAX_DEPTH: usize = 128;

/// Parse near-JSON literal text into a JSON value.
pub fn parse_literal(text: &str) -> Result<Value, String> {
    let mut parser = LiteralParser {
        source: text,
        chars: text.char_indices().peekable(),
        depth: 0,
    };
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    match parser.chars.peek() {
        None => Ok(value),
        Some(&(pos, c)) => Err(format!("unexpected trailing character '{}' at {}", c, pos)),
    }
}

struct LiteralParser<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    depth: usize,
}

impl LiteralParser<'_> {
    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn parse_value(&mut self) -> Result<Value, String> {
        self.skip_whitespace();
        let &(pos, c) = self
            .chars
            .peek()
            .ok_or_else(|| "unexpected end of input".to_string())?;

        match c {
            '{' => self.nested(Self::parse_object),
            '[' => self.nested(|parser| parser.parse_sequence(']')),
            '(' => self.nested(|parser| parser.parse_sequence(')')),
            '"' | '\'' => self.parse_string().map(Value::String),
            '-' | '+' | '0'..='9' | '.' => self.parse_number(),
            c if c.is_alphabetic() => self.parse_keyword(),
            _ => Err(format!("unexpected character '{}' at {}", c, pos)),
        }
    }

    /// Run a container parser one level deeper.
    fn nested(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<Value, String>,
    ) -> Result<Value, String> {
        if self.depth >= MAX_DEPTH {
            return Err(format!("nesting too deep (max {MAX_DEPTH})"));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn parse_object(&mut self) -> Result<Value, String> {
        self.chars.next(); // '{'
        let mut map = Map::new();

        loop {
            self.skip_whitespace();
            if self.chars.next_if(|&(_, c)| c == '}').is_some() {
                return Ok(Value::Object(map));
            }

            let key = match self.parse_value()? {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                other => return Err(format!("unsupported object key: {}", other)),
            };

            self.skip_whitespace();
            if self.chars.next_if(|&(_, c)| c == ':').is_none() {
                return Err(format!("expected ':' after key '{}'", key));
            }

            let value = self.parse_value()?;
            map.insert(key, value);

            self.skip_whitespace();
            match self.chars.next() {
                Some((_, ',')) => continue,
                Some((_, '}')) => return Ok(Value::Object(map)),
                Some((pos, c)) => return Err(format!("expected ',' or '}}' at {}, found '{}'", pos, c)),
                None => return Err("unterminated object".to_string()),
            }
        }
    }

    fn parse_sequence(&mut self, close: char) -> Result<Value, String> {
        self.chars.next(); // '[' or '('
        let mut items = Vec::new();

        loop {
            self.skip_whitespace();
            if self.chars.next_if(|&(_, c)| c == close).is_some() {
                return Ok(Value::Array(items));
            }

            items.push(self.parse_value()?);

            self.skip_whitespace();
            match self.chars.next() {
                Some((_, ',')) => continue,
                Some((_, c)) if c == close => return Ok(Value::Array(items)),
                Some((pos, c)) => {
                    return Err(format!("expected ',' or '{}' at {}, found '{}'", close, pos, c));
                }
                None => return Err("unterminated sequence".to_string()),
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, String> {
        let (start, quote) = self
            .chars
            .next()
            .ok_or_else(|| "unexpected end of input".to_string())?;
        let mut out = String::new();

        while let Some((_, c)) = self.chars.next() {
            match c {
                c if c == quote => return Ok(out),
                '\\' => {
                    let (pos, escaped) = self
                        .chars
                        .next()
                        .ok_or_else(|| "unterminated escape sequence".to_string())?;
                    match escaped {
                        'n' => out.push('\n'),
                        't' => out.push('\t'),
                        'r' => out.push('\r'),
                        'b' => out.push('\u{0008}'),
                        'f' => out.push('\u{000C}'),
                        '0' => out.push('\0'),
                        'u' => out.push(self.parse_unicode_escape(pos)?),
                        // \\, \', \", \/ and unknown escapes keep the escaped character
                        other => out.push(other),
                    }
                }
                c => out.push(c),
            }
        }

        Err(format!("unterminated string starting at {}", start))
    }

    fn parse_unicode_escape(&mut self, pos: usize) -> Result<char, String> {
        let mut code = 0u32;
        for _ in 0..4 {
            let (_, c) = self
                .chars
                .next()
                .ok_or_else(|| format!("truncated unicode escape at {}", pos))?;
            let digit = c
                .to_digit(16)
                .ok_or_else(|| format!("invalid unicode escape at {}", pos))?;
            code = code * 16 + digit;
        }
        // Lone surrogates are replaced rather than rejected
        Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn parse_number(&mut self) -> Result<Value, String> {
        let start = self.chars.peek().map(|&(pos, _)| pos).unwrap_or(self.source.len());
        let mut end = start;
        while let Some((pos, c)) = self
            .chars
            .next_if(|&(_, c)| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E' | '_'))
        {
            end = pos + c.len_utf8();
        }

        let literal: String = self.source[start..end].chars().filter(|&c| c != '_').collect();
        let literal = literal.strip_prefix('+').unwrap_or(&literal);

        if let Ok(int) = literal.parse::<i64>() {
            return Ok(Value::Number(int.into()));
        }
        if let Ok(uint) = literal.parse::<u64>() {
            return Ok(Value::Number(uint.into()));
        }
        literal
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| format!("invalid number literal '{}'", literal))
    }

    fn parse_keyword(&mut self) -> Result<Value, String> {
        let start = self.chars.peek().map(|&(pos, _)| pos).unwrap_or(self.source.len());
        let mut end = start;
        while let Some((pos, c)) = self.chars.next_if(|&(_, c)| c.is_alphanumeric() || c == '_') {
            end = pos + c.len_utf8();
        }

        match &self.source[start..end] {
            "true" | "True" => Ok(Value::Bool(true)),
            "false" | "False" => Ok(Value::Bool(false)),
            "null" | "None" => Ok(Value::Null),
            word => Err(format!("unknown literal '{}' at {}", word, start)),
        }
    }
}
