use crate::error::SchemeError;
use crate::types::directive::{NameClass, ESCAPE, FULL_QUANTIFIER};

fn quantifiable_meta(b: u8) -> bool {
    NameClass::from_byte(b).is_some_and(NameClass::is_quantifiable)
}

/// Token types produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text copied verbatim into the username.
    Literal(String),
    /// A substitution point, optionally quantified with `+`.
    Directive { class: NameClass, quantified: bool },
}

/// Tokenizer for username schemes.
///
/// Scans bytes directly: every character with meaning in the grammar
/// (`\`, `+`, `f`, `l`, `d`) is ASCII, so literal runs can be sliced out of
/// the input without splitting a multi-byte character.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, pos: 0 }
    }

    /// The character ending just before `offset`, if any.
    fn char_before(&self, offset: usize) -> Option<char> {
        self.input.get(..offset).and_then(|s| s.chars().next_back())
    }

    /// Read a directive. The escape is at self.pos.
    fn read_directive(&mut self) -> Result<Token, SchemeError> {
        let bytes = self.input.as_bytes();
        let escape_at = self.pos;
        let meta_at = escape_at + 1;

        let Some(&meta) = bytes.get(meta_at) else {
            return Err(SchemeError::DanglingEscape { offset: escape_at });
        };

        let class = NameClass::from_byte(meta).ok_or_else(|| SchemeError::UnknownDirective {
            found: self.input.get(meta_at..).and_then(|s| s.chars().next()).unwrap_or('\u{fffd}'),
            offset: meta_at,
        })?;
        self.pos = meta_at + 1;

        // `\d+` is left for next_token to reject as a misplaced quantifier
        let quantified = class.is_quantifiable() && bytes.get(self.pos) == Some(&FULL_QUANTIFIER);
        if quantified {
            self.pos += 1;
        }

        Ok(Token::Directive { class, quantified })
    }

    /// Read literal text up to the next escape or misplaced quantifier.
    ///
    /// A `+` right after a literal `f` or `l` is kept as text: `elf+` is the
    /// literal "elf+". Any other `+` ends the run and is rejected by
    /// next_token.
    #[inline]
    fn read_literal(&mut self) -> Token {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        let len = bytes.len();

        while self.pos < len {
            match bytes[self.pos] {
                ESCAPE => break,
                FULL_QUANTIFIER if self.pos == start || !quantifiable_meta(bytes[self.pos - 1]) => break,
                _ => self.pos += 1,
            }
        }

        Token::Literal(self.input[start..self.pos].to_string())
    }

    /// Get the next token, or None at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, SchemeError> {
        let Some(&b) = self.input.as_bytes().get(self.pos) else {
            return Ok(None);
        };

        match b {
            ESCAPE => self.read_directive().map(Some),
            // A literal `f`/`l` always carries its `+` along in read_literal,
            // so a token starting here follows `\d`, another `+`, or text.
            FULL_QUANTIFIER => Err(match self.char_before(self.pos) {
                Some(after) => SchemeError::MisplacedQuantifier { offset: self.pos, after },
                None => SchemeError::QuantifierAtStart,
            }),
            _ => Ok(Some(self.read_literal())),
        }
    }

    /// Tokenize the entire input.
    pub fn tokenize_all(&mut self) -> Result<Vec<Token>, SchemeError> {
        let mut tokens = Vec::new();
        while let Some(tok) = self.next_token()? {
            tokens.push(tok);
        }
        Ok(tokens)
    }
}
