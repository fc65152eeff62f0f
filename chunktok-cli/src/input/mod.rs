//! Input handling module

pub mod delimiter;
pub mod glob_resolver;

pub use delimiter::unescape_delimiter;
pub use glob_resolver::resolve_patterns;
