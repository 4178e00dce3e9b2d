use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use parser::ParsedSource;
use render::DotOptions;
use tracing::debug;

use crate::cli::RenderFormat;
use crate::error::{AppError, Result};

pub fn graph(parsed: &ParsedSource, max_depth: usize) -> String {
    render::to_dot(parsed.root_node(), &DotOptions { max_depth })
}

pub fn tree(parsed: &ParsedSource) -> String {
    render::sexp(parsed.root_node())
}

pub fn outline(parsed: &ParsedSource, max_depth: usize) -> String {
    render::outline(parsed.root_node(), parsed.source(), Some(max_depth))
}

/// 调用 Graphviz 渲染 DOT 文本
///
/// 通过 stdin 将 DOT 传给 `dot -T<format> -o <output>`，`dot` 需要在 PATH 中
pub fn render_with_graphviz(dot: &str, format: RenderFormat, output_path: &Path) -> Result<()> {
    run_graphviz("dot", dot, format, output_path)
}

pub(crate) fn run_graphviz(
    program: &str,
    dot: &str,
    format: RenderFormat,
    output_path: &Path,
) -> Result<()> {
    debug!(program, format = format.as_str(), output = %output_path.display(), "running graphviz");

    let mut child = Command::new(program)
        .arg(format!("-T{}", format.as_str()))
        .arg("-o")
        .arg(output_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| AppError::Graphviz(format!("failed to run `{program}`: {e}")))?;

    // 写入失败时子进程可能已经退出，仍然要回收并读取 stderr
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(dot.as_bytes()),
        None => Ok(()),
    };

    let output = child
        .wait_with_output()
        .map_err(|e| AppError::Graphviz(e.to_string()))?;

    if !output.status.success() {
        let std_err = String::from_utf8_lossy(&output.stderr);
        let std_err = std_err.trim();
        if std_err.is_empty() {
            return Err(AppError::Graphviz(format!("`{program}` exited with {}", output.status)));
        }
        return Err(AppError::Graphviz(std_err.to_string()));
    }

    written.map_err(|e| AppError::Graphviz(format!("failed to write DOT to `{program}`: {e}")))
}
