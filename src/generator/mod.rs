pub mod batch;
pub mod cursor;
pub mod interpreter;
pub mod seed;

pub use batch::{generate_usernames, generate_usernames_with, BatchReport, BatchRequest};
pub use interpreter::{generate, generate_with, render};
pub use seed::{resolve_and_generate, resolve_and_generate_with, SeedName};
