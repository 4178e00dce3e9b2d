pub mod report;
pub mod summary;

#[cfg(test)]
mod test;

pub use report::DISTRIBUTION_LIMIT;
pub use summary::{AstSummary, Position, TopLevelNode, summarize};
