use analyzer::{AstSummary, summarize};
use parser::ParsedSource;

use crate::cli::SummaryFormat;
use crate::error::Result;

/// 生成语法树统计信息并按指定格式输出
pub fn summary_report(parsed: &ParsedSource, format: SummaryFormat) -> Result<String> {
    let summary: AstSummary = summarize(parsed.root_node());
    let text = match format {
        SummaryFormat::Text => summary.to_string(),
        SummaryFormat::Json => serde_json::to_string_pretty(&summary)?,
    };
    Ok(text)
}
