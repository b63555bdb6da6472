//! Error types for scheme validation, username generation and batch runs.

use thiserror::Error;

/// The first grammar violation found while tokenizing a scheme.
///
/// Offsets are byte offsets into the scheme string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    /// A `\` is the last character of the scheme.
    #[error("missing meta character after '\\' at offset {offset}")]
    DanglingEscape {
        /// Offset of the escape character.
        offset: usize,
    },

    /// A `\` is followed by something other than `f`, `l` or `d`.
    #[error("invalid meta character '{found}' at offset {offset}")]
    UnknownDirective {
        /// The character following the escape.
        found: char,
        /// Offset of that character.
        offset: usize,
    },

    /// The scheme begins with `+`.
    #[error("quantifier '+' placed at the beginning of the scheme")]
    QuantifierAtStart,

    /// A `+` that neither quantifies `\f`/`\l` nor follows a literal `f` or `l`.
    #[error("quantifier '+' at offset {offset} placed after non-quantifiable character '{after}'")]
    MisplacedQuantifier {
        /// Offset of the quantifier.
        offset: usize,
        /// The character immediately before it.
        after: char,
    },
}

/// Errors returned when generating a single username.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The scheme failed validation.
    #[error("invalid username scheme '{scheme}': {source}")]
    InvalidScheme {
        /// The rejected scheme.
        scheme: String,
        /// Why it was rejected.
        source: SchemeError,
    },

    /// The first or last name was empty.
    #[error("first name and last name must not be empty")]
    EmptyName,
}

/// Errors returned by batch username generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// A single generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// Random names stopped producing new usernames before the request was met.
    #[error("generated only {generated} of {requested} unique usernames after {attempts} attempts")]
    Exhausted {
        /// Number of new usernames requested.
        requested: usize,
        /// Number of new usernames produced.
        generated: usize,
        /// Random-name attempts made.
        attempts: usize,
    },
}

/// Errors raised while reading a batch request document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request JSON is malformed or missing required fields.
    #[error("invalid batch request JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },
}
