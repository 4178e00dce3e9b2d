use std::fmt::Write as _;

use parser::{Node, preorder};

const PREVIEW_LIMIT: usize = 40;

/// tree-sitter 的 S-expression 形式
pub fn sexp(root: Node<'_>) -> String {
    root.to_sexp()
}

/// 缩进形式的语法树，每层缩进两个空格
///
/// 每行包含节点类型、字节范围和转义后的文本预览，叶子节点用 `*` 标记。
/// 叶子节点显示完整文本，其他节点截断到 40 个字符。
pub fn outline(root: Node<'_>, source: &str, max_depth: Option<usize>) -> String {
    let mut out = String::new();

    for (node, depth) in preorder(root, max_depth) {
        let range = node.byte_range();
        let text = source.get(range.clone()).unwrap_or_default();
        let is_leaf = node.child_count() == 0;

        let preview = if is_leaf {
            text.to_string()
        } else {
            truncate(text, PREVIEW_LIMIT)
        };
        let marker = if is_leaf { "*" } else { "" };

        let _ = writeln!(
            out,
            "{}{}{} [{}..{}] {:?}",
            "  ".repeat(depth),
            node.kind(),
            marker,
            range.start,
            range.end,
            preview
        );
    }

    out
}

fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
