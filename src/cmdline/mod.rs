//! Command-line string building and parsing.
//!
//! [`LineBuilder`] renders an argument vector as a single displayable command
//! line, quoting arguments that need it. [`LineParser`] splits a raw command
//! line back into tokens, tolerating mismatched and unterminated quotes.
//! The two are symmetric for plain arguments but deliberately not perfect
//! inverses: the builder is a display helper, not a shell-escaping layer.

mod builder;
mod parser;

pub use builder::LineBuilder;
pub use parser::LineParser;
