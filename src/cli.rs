use std::path::PathBuf;
use std::time::Duration;

use clap::{Args as ClapArgs, Parser, ValueEnum};
use parser::Language;
use review::{ApiKey, DEFAULT_API_BASE, DEFAULT_MODEL, ReviewConfig};

use crate::error::{AppError, Result};

/// astview 命令行参数
#[derive(Parser, Debug)]
#[command(
    name = "astview",
    version,
    about = "parse source code with tree-sitter and inspect its syntax tree"
)]
pub struct Args {
    /// source file path, reads stdin when omitted
    #[arg(short, long)]
    pub input_path: Option<PathBuf>,

    /// source language, inferred from the file extension when omitted
    #[arg(short, long, value_enum)]
    pub language: Option<CliLanguage>,

    /// emit target
    #[arg(short, long, value_enum, default_value_t = EmitTarget::Graph)]
    pub emit: EmitTarget,

    /// maximum tree depth for `graph` and `outline`
    #[arg(
        short = 'd',
        long,
        default_value_t = 8,
        value_parser = clap::value_parser!(u8).range(3..=15)
    )]
    pub max_depth: u8,

    /// output file, (default stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// render the graph with Graphviz `dot` instead of emitting DOT text
    #[arg(long, value_enum, requires = "output")]
    pub render: Option<RenderFormat>,

    /// summary output format
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub format: SummaryFormat,

    /// load every grammar, print its status and exit
    #[arg(long)]
    pub list_languages: bool,

    #[command(flatten)]
    pub review: ReviewArgs,

    /// increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// clap 无法表达的参数组合检查
    pub fn validate(&self) -> Result<()> {
        if self.render.is_some() && self.emit != EmitTarget::Graph {
            return Err(AppError::RenderRequiresGraph);
        }
        Ok(())
    }
}

/// LLM 审查相关参数
#[derive(ClapArgs, Debug)]
pub struct ReviewArgs {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<ApiKey>,

    /// model used for `--emit review`
    #[arg(long, env = "ASTVIEW_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// API base url
    #[arg(long, env = "ASTVIEW_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// request timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout_secs: u64,
}

impl ReviewArgs {
    pub fn config(&self) -> ReviewConfig {
        ReviewConfig {
            api_key: self.api_key.clone().unwrap_or_default(),
            model: self.model.clone(),
            api_base: self.api_base.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// 输出目标
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum EmitTarget {
    /// Graphviz DOT 图
    Graph,
    /// S-expression
    Tree,
    /// 缩进形式的语法树
    Outline,
    /// 语法树统计
    Summary,
    /// LLM 代码审查
    Review,
    /// 语法错误检查
    Check,
}

/// CLI 语言（用于 clap 解析）
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum CliLanguage {
    Python,
    #[value(alias = "js")]
    Javascript,
    Java,
    C,
    #[value(alias = "c++")]
    Cpp,
}

impl From<CliLanguage> for Language {
    fn from(language: CliLanguage) -> Self {
        match language {
            CliLanguage::Python => Language::Python,
            CliLanguage::Javascript => Language::JavaScript,
            CliLanguage::Java => Language::Java,
            CliLanguage::C => Language::C,
            CliLanguage::Cpp => Language::Cpp,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum RenderFormat {
    Svg,
    Png,
    Pdf,
}

impl RenderFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Pdf => "pdf",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum SummaryFormat {
    Text,
    Json,
}
