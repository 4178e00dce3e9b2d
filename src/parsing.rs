use std::fs;
use std::io::{self, Read};
use std::path::Path;

use parser::{Language, ParsedSource, ParserCache};
use tracing::info;

use crate::error::{AppError, Result};

/// 读取输入：给定路径时读文件，否则读 stdin
pub fn read_input(input_path: Option<&Path>) -> Result<String> {
    let text = match input_path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    Ok(text)
}

/// 确定源语言：显式指定优先，否则按扩展名推断
pub fn resolve_language(explicit: Option<Language>, input_path: Option<&Path>) -> Result<Language> {
    explicit
        .or_else(|| input_path.and_then(Language::from_path))
        .ok_or(AppError::UnknownLanguage)
}

/// 语法分析阶段
///
/// 空白输入直接报错，不进入解析
pub fn parse(cache: &mut ParserCache, code: String, language: Language) -> Result<ParsedSource> {
    if code.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let parsed = parser::parse(cache, code, language)?;
    info!(%language, "successfully parsed {language} code");
    Ok(parsed)
}

/// 语法检查：存在 ERROR / MISSING 节点时返回带源码的错误
pub fn check(parsed: &ParsedSource, name: &str) -> Result<()> {
    let errors = parsed.syntax_errors();
    if errors.is_empty() {
        return Ok(());
    }

    Err(AppError::Syntax {
        src: miette::NamedSource::new(name, parsed.source().to_string()),
        errors,
    })
}
