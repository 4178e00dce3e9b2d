use std::cmp::Reverse;
use std::collections::BTreeMap;

use parser::{Node, Point, preorder};
use serde::Serialize;

/// 发给 LLM 的摘要里最多列出的顶层节点数
pub const PROMPT_TOP_LEVEL_LIMIT: usize = 10;

/// 源码位置，行号从 1 开始，列号从 0 开始
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl From<Point> for Position {
    fn from(point: Point) -> Self {
        Self {
            line: point.row + 1,
            column: point.column,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopLevelNode {
    pub kind: String,
    pub start: Position,
    pub end: Position,
}

/// 语法树统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AstSummary {
    /// 所有节点数（含匿名节点）
    pub total_nodes: usize,
    /// 最大深度，根节点为 0
    pub max_depth: usize,
    /// 具名节点按类型计数
    pub node_types: BTreeMap<String, usize>,
    /// 深度为 1 的具名节点，按文档顺序
    pub top_level_nodes: Vec<TopLevelNode>,
}

/// 遍历整棵树（不限深度）生成统计信息
pub fn summarize(root: Node<'_>) -> AstSummary {
    let mut summary = AstSummary::default();

    for (node, depth) in preorder(root, None) {
        summary.total_nodes += 1;
        summary.max_depth = summary.max_depth.max(depth);

        if !node.is_named() {
            continue;
        }

        *summary
            .node_types
            .entry(node.kind().to_string())
            .or_default() += 1;

        if depth == 1 {
            summary.top_level_nodes.push(TopLevelNode {
                kind: node.kind().to_string(),
                start: node.start_position().into(),
                end: node.end_position().into(),
            });
        }
    }

    summary
}

impl AstSummary {
    /// 按数量降序取前 `limit` 个节点类型，数量相同时按名称升序
    pub fn type_distribution(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut types: Vec<_> = self
            .node_types
            .iter()
            .map(|(kind, count)| (kind.as_str(), *count))
            .collect();
        types.sort_by_key(|(kind, count)| (Reverse(*count), *kind));
        types.truncate(limit);
        types
    }

    /// 随代码一起发给 LLM 的摘要文本
    pub fn prompt_text(&self) -> String {
        let top_level = self
            .top_level_nodes
            .iter()
            .take(PROMPT_TOP_LEVEL_LIMIT)
            .map(|node| node.kind.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Total Nodes: {}\nTree Depth: {}\nTop-level Nodes: {}",
            self.total_nodes, self.max_depth, top_level
        )
    }
}
