use tree_sitter::Node;

/// 前序遍历语法树，产出 `(node, depth)`，根节点深度为 0
///
/// 使用显式栈而不是递归，深层嵌套的输入不会耗尽调用栈。
/// 给定 `max_depth` 时，深度超过该值的节点及其子树都不会产出。
pub fn preorder(root: Node<'_>, max_depth: Option<usize>) -> Preorder<'_> {
    Preorder {
        stack: vec![(root, 0)],
        max_depth,
    }
}

pub struct Preorder<'tree> {
    stack: Vec<(Node<'tree>, usize)>,
    max_depth: Option<usize>,
}

impl<'tree> Iterator for Preorder<'tree> {
    type Item = (Node<'tree>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, depth) = self.stack.pop()?;
            if self.max_depth.is_some_and(|max| depth > max) {
                continue;
            }

            // 逆序入栈，保证按文档顺序弹出
            let mut cursor = node.walk();
            let children: Vec<_> = node.children(&mut cursor).collect();
            self.stack
                .extend(children.into_iter().rev().map(|child| (child, depth + 1)));

            return Some((node, depth));
        }
    }
}
