use std::time::Instant;

use tracing::debug;
use tree_sitter::{Node, Tree};

use crate::Language;
use crate::cache::ParserCache;
use crate::error::{ParserError, SyntaxError};
use crate::walk::preorder;

/// 解析结果：源码与其对应的语法树
#[derive(Debug, Clone)]
pub struct ParsedSource {
    language: Language,
    source: String,
    tree: Tree,
}

impl ParsedSource {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn has_errors(&self) -> bool {
        self.root_node().has_error()
    }

    /// 按文档顺序收集所有 ERROR 与 MISSING 节点
    pub fn syntax_errors(&self) -> Vec<SyntaxError> {
        if !self.has_errors() {
            return Vec::new();
        }

        preorder(self.root_node(), None)
            .filter_map(|(node, _)| {
                let range = node.byte_range();
                let span = (range.start, range.len()).into();
                if node.is_error() {
                    Some(SyntaxError::Unexpected { span })
                } else if node.is_missing() {
                    Some(SyntaxError::Missing {
                        kind: node.kind().to_string(),
                        span,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

/// 语法分析阶段
///
/// tree-sitter 对错误输入有容错能力，语法错误的代码同样会得到一棵树，
/// 错误以 ERROR / MISSING 节点的形式保留在树中，见 [`ParsedSource::syntax_errors`]。
///
/// # 错误处理
/// 只有 grammar 加载失败或 parser 没有返回树时才返回错误
pub fn parse(
    cache: &mut ParserCache,
    code: impl Into<String>,
    language: Language,
) -> Result<ParsedSource, ParserError> {
    let source = code.into();
    let parser = cache.parser(language)?;

    let started = Instant::now();
    let tree = parser
        .parse(&source, None)
        .ok_or(ParserError::ParseFailed { language })?;
    debug!(
        %language,
        bytes = source.len(),
        elapsed = ?started.elapsed(),
        "parsed source"
    );

    Ok(ParsedSource {
        language,
        source,
        tree,
    })
}

/// 使用一次性的 parser 解析，适合只解析一次的调用方
pub fn parse_source(code: impl Into<String>, language: Language) -> Result<ParsedSource, ParserError> {
    parse(&mut ParserCache::new(), code, language)
}
