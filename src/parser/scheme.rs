use std::fmt;
use std::str::FromStr;

use super::lexer::{Lexer, Token};
use crate::error::SchemeError;

/// A validated username scheme.
///
/// Grammar:
/// ```text
/// scheme     = (literal | directive)*
/// directive  = '\' ( name '+'? | 'd' )
/// name       = 'f' | 'l'
/// literal    = any run of characters other than '\', where '+' may only
///              directly follow a literal 'f' or 'l'
/// ```
///
/// The only way to build a `Scheme` is through [`Scheme::parse`], so holding
/// one means the token stream is well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    source: String,
    tokens: Vec<Token>,
}

impl Scheme {
    /// Tokenize and validate a scheme string.
    pub fn parse(text: &str) -> Result<Self, SchemeError> {
        let tokens = Lexer::new(text).tokenize_all()?;
        Ok(Scheme {
            source: text.to_string(),
            tokens,
        })
    }

    /// The scheme as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// An empty scheme is valid but always yields an empty username.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromStr for Scheme {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::parse(s)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parse a scheme string into a [`Scheme`].
pub fn parse(text: &str) -> Result<Scheme, SchemeError> {
    Scheme::parse(text)
}

/// Report the first grammar violation in `text`, if any.
pub fn check(text: &str) -> Result<(), SchemeError> {
    let mut lexer = Lexer::new(text);
    while lexer.next_token()?.is_some() {}
    Ok(())
}

/// Whether `text` is a valid scheme.
pub fn validate(text: &str) -> bool {
    check(text).is_ok()
}
