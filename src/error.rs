use std::path::PathBuf;

use miette::NamedSource;
use parser::{ParserError, SyntaxError};
use review::ReviewError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// astview 错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("--render requires --emit graph")]
    RenderRequiresGraph,

    #[error("no code to analyze")]
    EmptyInput,

    #[error("cannot infer the language, pass --language")]
    UnknownLanguage,

    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error("{} syntax error(s) found", .errors.len())]
    Syntax {
        src: NamedSource<String>,
        errors: Vec<SyntaxError>,
    },

    #[error(transparent)]
    Review(#[from] ReviewError),

    #[error("failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),

    #[error("graphviz failed: {0}")]
    Graphviz(String),

    #[error("no grammar could be loaded")]
    NoLanguages,
}

impl AppError {
    /// 报告错误，语法错误以带源码标注的诊断形式输出
    pub fn report(self) {
        match self {
            Self::Syntax { src, errors } => {
                let count = errors.len();
                for error in errors {
                    let report = miette::Report::new(error).with_source_code(src.clone());
                    eprintln!("{:?}", report);
                }
                eprintln!("Error: {count} syntax error(s) found");
            }
            Self::Parser(error) => eprintln!("{:?}", miette::Report::new(error)),
            Self::Review(error) => eprintln!("{:?}", miette::Report::new(error)),
            _ => eprintln!("Error: {}", self),
        }
    }
}
