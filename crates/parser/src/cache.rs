use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, warn};

use crate::Language;
use crate::error::ParserError;

/// 按语言缓存 tree-sitter parser，首次使用时创建
#[derive(Default)]
pub struct ParserCache {
    parsers: HashMap<Language, tree_sitter::Parser>,
}

/// 单个语言的预加载结果
#[derive(Debug)]
pub struct LoadStatus {
    pub language: Language,
    pub result: Result<(), ParserError>,
}

impl ParserCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取语言对应的 parser，不存在时加载 grammar 并创建
    pub fn parser(&mut self, language: Language) -> Result<&mut tree_sitter::Parser, ParserError> {
        match self.parsers.entry(language) {
            Entry::Occupied(entry) => {
                debug!(%language, "parser cache hit");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let parser = create_parser(language)?;
                debug!(%language, "parser created");
                Ok(entry.insert(parser))
            }
        }
    }

    pub fn is_loaded(&self, language: Language) -> bool {
        self.parsers.contains_key(&language)
    }

    /// 预加载所有语言；单个语言失败只记录警告，不影响其他语言
    pub fn initialize_all(&mut self) -> Vec<LoadStatus> {
        Language::ALL
            .into_iter()
            .map(|language| {
                let result = self.parser(language).map(|_| ());
                if let Err(err) = &result {
                    warn!("could not load {language}: {err}");
                }
                LoadStatus { language, result }
            })
            .collect()
    }
}

fn create_parser(language: Language) -> Result<tree_sitter::Parser, ParserError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language.tree_sitter_language())
        .map_err(|err| ParserError::LanguageLoad {
            language,
            message: err.to_string(),
        })?;
    Ok(parser)
}
