pub mod cache;
pub mod error;
pub mod language;
pub mod parse;
pub mod walk;

#[cfg(test)]
mod test;

pub use cache::{LoadStatus, ParserCache};
pub use error::{ParserError, SyntaxError};
pub use language::Language;
pub use parse::{ParsedSource, parse, parse_source};
pub use walk::{Preorder, preorder};

pub use tree_sitter::{Node, Point, Tree};
