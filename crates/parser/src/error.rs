#![allow(unused_assignments)]

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::Language;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParserError {
    #[error("unsupported language: {0}")]
    #[diagnostic(
        code(parser::unsupported_language),
        help("supported languages: Python, JavaScript, Java, C, C++")
    )]
    UnsupportedLanguage(String),

    #[error("failed to load {language} grammar: {message}")]
    #[diagnostic(code(parser::language_load))]
    LanguageLoad { language: Language, message: String },

    #[error("tree-sitter returned no tree for {language} source")]
    #[diagnostic(code(parser::parse_failed))]
    ParseFailed { language: Language },
}

/// 语法树中的错误节点（ERROR / MISSING）
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error("unexpected syntax")]
    #[diagnostic(code(syntax::unexpected))]
    Unexpected {
        #[label("here")]
        span: SourceSpan,
    },

    #[error("missing `{kind}`")]
    #[diagnostic(code(syntax::missing))]
    Missing {
        kind: String,
        #[label("expected here")]
        span: SourceSpan,
    },
}

impl SyntaxError {
    /// 获取错误的位置范围
    pub fn span(&self) -> SourceSpan {
        match self {
            Self::Unexpected { span } | Self::Missing { span, .. } => *span,
        }
    }
}
