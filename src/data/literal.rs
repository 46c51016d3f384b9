//! Decoder for the literal-syntax float sequences stored in the `CV_list(...)`
//! columns, e.g. `"[0.8, 0.82, 0.79]"`.
//!
//! Accepted forms: a bracketed list or a parenthesised tuple of numbers,
//! separated by commas, with an optional trailing comma and arbitrary
//! whitespace. Numbers may carry a sign and an exponent. Empty sequences are
//! valid.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LiteralError {
    #[error("empty input")]
    Empty,

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unexpected '{found}' at offset {offset}, expected {expected}")]
    Unexpected {
        found: char,
        offset: usize,
        expected: &'static str,
    },

    #[error("invalid number '{token}' at offset {offset}")]
    InvalidNumber { token: String, offset: usize },

    #[error("a parenthesised single value is not a sequence (offset {offset})")]
    NotASequence { offset: usize },

    #[error("trailing input at offset {offset}")]
    TrailingInput { offset: usize },
}

/// Decode a literal list of floats.
pub fn parse_float_list(input: &str) -> Result<Vec<f64>, LiteralError> {
    let mut cursor = Cursor::new(input);
    cursor.skip_ws();

    let open_offset = cursor.pos;
    let close = match cursor.bump() {
        Some('[') => ']',
        Some('(') => ')',
        Some(c) => {
            return Err(LiteralError::Unexpected {
                found: c,
                offset: open_offset,
                expected: "'[' or '('",
            })
        }
        None if input.trim().is_empty() => return Err(LiteralError::Empty),
        None => return Err(LiteralError::UnexpectedEnd { expected: "'['" }),
    };

    let mut values = Vec::new();
    let mut trailing_comma = false;

    loop {
        cursor.skip_ws();
        match cursor.peek() {
            Some(c) if c == close => {
                cursor.bump();
                break;
            }
            Some(_) => {
                values.push(cursor.number()?);
                trailing_comma = false;
            }
            None => return Err(LiteralError::UnexpectedEnd { expected: "a number" }),
        }

        cursor.skip_ws();
        let offset = cursor.pos;
        match cursor.bump() {
            Some(',') => trailing_comma = true,
            Some(c) if c == close => break,
            Some(c) => {
                return Err(LiteralError::Unexpected {
                    found: c,
                    offset,
                    expected: "',' or a closing bracket",
                })
            }
            None => {
                return Err(LiteralError::UnexpectedEnd {
                    expected: "',' or a closing bracket",
                })
            }
        }
    }

    // `(0.5)` is a parenthesised scalar, not a one-element tuple.
    if close == ')' && values.len() == 1 && !trailing_comma {
        return Err(LiteralError::NotASequence {
            offset: open_offset,
        });
    }

    cursor.skip_ws();
    if !cursor.at_end() {
        return Err(LiteralError::TrailingInput { offset: cursor.pos });
    }

    Ok(values)
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    /// Scan one numeric token. Only digits, `.`, exponent markers and signs
    /// are consumed, so words such as `nan` or `inf` never reach `parse`.
    fn number(&mut self) -> Result<f64, LiteralError> {
        let start = self.pos;
        let mut prev: Option<char> = None;
        while let Some(c) = self.peek() {
            let accept = match c {
                '0'..='9' | '.' | 'e' | 'E' => true,
                '+' | '-' => prev.is_none() || matches!(prev, Some('e' | 'E')),
                _ => false,
            };
            if !accept {
                break;
            }
            prev = Some(c);
            self.bump();
        }

        let token = &self.src[start..self.pos];
        if token.is_empty() {
            return match self.peek() {
                Some(found) => Err(LiteralError::Unexpected {
                    found,
                    offset: start,
                    expected: "a number",
                }),
                None => Err(LiteralError::UnexpectedEnd { expected: "a number" }),
            };
        }

        token
            .parse::<f64>()
            .map_err(|_| LiteralError::InvalidNumber {
                token: token.to_string(),
                offset: start,
            })
    }
}
