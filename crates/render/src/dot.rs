use std::fmt::Write as _;

use parser::{Node, preorder};

/// 具名节点的填充色与边框色
const NAMED_COLORS: (&str, &str) = ("#E3F2FD", "#1976D2");
/// 匿名节点（标点、关键字等）的填充色与边框色
const ANONYMOUS_COLORS: (&str, &str) = ("#F5F5F5", "#757575");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotOptions {
    /// 最大渲染深度，根节点深度为 0
    pub max_depth: usize,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self { max_depth: 10 }
    }
}

/// 将语法树转换为 Graphviz DOT 文本
///
/// 节点 id 按前序遍历顺序从 0 开始分配，只计入实际输出的节点；
/// 深度超过 `max_depth` 的节点及其子树不会输出。
pub fn to_dot(root: Node<'_>, options: &DotOptions) -> String {
    let mut dot = String::from(concat!(
        "digraph AST {\n",
        "  rankdir=TB;\n",
        "  node [shape=box, style=rounded, fontname=Arial];\n",
        "  edge [fontname=Arial, fontsize=10];\n",
        "\n",
    ));

    // ancestors[d] 为当前路径上深度 d 的节点 id
    let mut ancestors: Vec<usize> = Vec::new();

    for (id, (node, depth)) in preorder(root, Some(options.max_depth)).enumerate() {
        ancestors.truncate(depth);
        let (fill, border) = if node.is_named() {
            NAMED_COLORS
        } else {
            ANONYMOUS_COLORS
        };

        let _ = writeln!(
            dot,
            "  node{id} [label=\"{}\", fillcolor=\"{fill}\", color=\"{border}\", style=\"rounded,filled\"];",
            escape_label(node.kind())
        );
        if let Some(parent) = ancestors.last() {
            let _ = writeln!(dot, "  node{parent} -> node{id};");
        }

        ancestors.push(id);
    }

    dot.push('}');
    dot
}

pub(crate) fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
