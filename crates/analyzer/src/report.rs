use std::fmt;

use crate::summary::{AstSummary, Position};

/// 文本报告中展示的节点类型数量
pub const DISTRIBUTION_LIMIT: usize = 10;

const BAR_WIDTH: usize = 20;

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for AstSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Nodes: {}", self.total_nodes)?;
        writeln!(f, "Tree Depth: {}", self.max_depth)?;
        writeln!(f, "Top-level Nodes: {}", self.top_level_nodes.len())?;

        writeln!(f)?;
        writeln!(f, "Top-Level AST Nodes")?;
        if self.top_level_nodes.is_empty() {
            writeln!(f, "No top-level nodes found.")?;
        } else {
            let width = self
                .top_level_nodes
                .iter()
                .map(|node| node.kind.len())
                .chain(["Node Type".len()])
                .max()
                .unwrap_or_default();
            writeln!(f, "{:<width$}  {:<14}  End Position", "Node Type", "Start Position")?;
            for node in &self.top_level_nodes {
                writeln!(
                    f,
                    "{:<width$}  {:<14}  {}",
                    node.kind,
                    node.start.to_string(),
                    node.end
                )?;
            }
        }

        let distribution = self.type_distribution(DISTRIBUTION_LIMIT);
        if let Some((_, highest)) = distribution.first() {
            writeln!(f)?;
            writeln!(f, "Node Type Distribution")?;
            let width = distribution
                .iter()
                .map(|(kind, _)| kind.len())
                .max()
                .unwrap_or_default();
            let count_width = highest.to_string().len();
            for (kind, count) in &distribution {
                let bar = "#".repeat((count * BAR_WIDTH).div_ceil(*highest));
                writeln!(f, "{kind:<width$}  {count:>count_width$}  {bar}")?;
            }
        }

        Ok(())
    }
}
