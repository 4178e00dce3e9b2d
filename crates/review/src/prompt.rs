use parser::Language;

/// 一次代码审查请求：源码、语言与语法树摘要
#[derive(Debug, Clone, Copy)]
pub struct ReviewRequest<'a> {
    pub code: &'a str,
    pub language: Language,
    pub summary: &'a str,
}

pub fn build_prompt(request: &ReviewRequest<'_>) -> String {
    let ReviewRequest {
        code,
        language,
        summary,
    } = request;
    let tag = language.fence_tag();

    format!(
        "You are a code analysis expert. Analyze the following {language} code \
         and its Abstract Syntax Tree summary.

Code:
```{tag}
{code}
```

AST Summary:
{summary}

Please provide:
1. A brief overview of what the code does
2. Potential bugs or issues (if any)
3. Code quality observations
4. Suggestions for improvement (if applicable)

Keep your analysis concise and practical."
    )
}
