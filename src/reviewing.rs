use analyzer::summarize;
use parser::ParsedSource;
use review::{GeminiClient, ReviewConfig, ReviewRequest};

use crate::error::Result;

/// LLM 审查阶段：源码与语法树摘要一起发给模型
pub async fn review(parsed: &ParsedSource, config: ReviewConfig) -> Result<String> {
    let client = GeminiClient::new(config)?;
    let summary = summarize(parsed.root_node()).prompt_text();

    let request = ReviewRequest {
        code: parsed.source(),
        language: parsed.language(),
        summary: &summary,
    };
    Ok(client.review(&request).await?)
}
