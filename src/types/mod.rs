pub mod directive;

pub use directive::NameClass;
