use super::cursor::NameCursor;
use crate::entropy::{DigitSource, Entropy};
use crate::error::GenerateError;
use crate::parser::lexer::Token;
use crate::parser::Scheme;
use crate::types::NameClass;

/// Generate a username from a first and last name according to `scheme`.
///
/// - `\f` / `\l` append the next letter of the first / last name
/// - `\f+` / `\l+` append the rest of that name
/// - `\d` appends a random digit 0 to 9
/// - anything else is copied as-is
///
/// A name directive that finds its name already used up appends nothing, so
/// `\f\f\f\f\f` on "John" gives "john". With `lowercase` the whole result,
/// literals included, is lowercased.
///
/// The scheme is validated before the names are checked.
pub fn generate(first: &str, last: &str, scheme: &str, lowercase: bool) -> Result<String, GenerateError> {
    generate_with(first, last, scheme, lowercase, &mut Entropy::thread())
}

/// [`generate`] drawing digits from `digits`.
pub fn generate_with<D>(
    first: &str,
    last: &str,
    scheme: &str,
    lowercase: bool,
    digits: &mut D,
) -> Result<String, GenerateError>
where
    D: DigitSource + ?Sized,
{
    let parsed = Scheme::parse(scheme).map_err(|source| GenerateError::InvalidScheme {
        scheme: scheme.to_string(),
        source,
    })?;
    render(&parsed, first, last, lowercase, digits)
}

/// Interpret an already-parsed scheme against a name pair.
pub fn render<D>(
    scheme: &Scheme,
    first: &str,
    last: &str,
    lowercase: bool,
    digits: &mut D,
) -> Result<String, GenerateError>
where
    D: DigitSource + ?Sized,
{
    if first.is_empty() || last.is_empty() {
        return Err(GenerateError::EmptyName);
    }

    let mut first_cursor = NameCursor::new(first);
    let mut last_cursor = NameCursor::new(last);
    let mut username = String::with_capacity(scheme.as_str().len() + first.len() + last.len());

    for token in scheme.tokens() {
        match *token {
            Token::Literal(ref text) => username.push_str(text),
            Token::Directive {
                class: NameClass::Digit,
                ..
            } => username.push(char::from(b'0' + digits.digit() % 10)),
            Token::Directive { class, quantified } => {
                let cursor = if class == NameClass::First {
                    &mut first_cursor
                } else {
                    &mut last_cursor
                };
                if quantified {
                    username.push_str(cursor.drain());
                } else if let Some(ch) = cursor.next_char() {
                    username.push(ch);
                }
            }
        }
    }

    Ok(if lowercase { username.to_lowercase() } else { username })
}
