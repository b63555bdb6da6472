pub mod lexer;
pub mod scheme;

pub use scheme::{check, parse, validate, Scheme};
