use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use parser::LoadStatus;
use tracing::debug;

use crate::error::{AppError, Result};

/// 写入文本，缺少结尾换行时补上
pub fn write_text<W: Write>(writer: &mut W, text: &str) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// 写到文件或 stdout；stdout 被下游关闭（如 `| head`）时视为成功
pub fn write_output(text: &str, output_path: Option<&Path>) -> Result<()> {
    match output_path {
        Some(path) => {
            let write_err = |source| AppError::Write {
                path: path.to_path_buf(),
                source,
            };
            let mut file = fs::File::create(path).map_err(write_err)?;
            write_text(&mut file, text).map_err(write_err)
        }
        None => write_stdout(&mut io::stdout().lock(), text),
    }
}

pub fn write_stdout<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    match write_text(writer, text) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("stdout closed early");
            Ok(())
        }
        Err(source) => Err(AppError::Write {
            path: PathBuf::from("<stdout>"),
            source,
        }),
    }
}

/// `--list-languages` 的状态表
pub fn format_statuses(statuses: &[LoadStatus]) -> String {
    let mut text = String::new();
    for status in statuses {
        let extensions = status.language.extensions().join(", ");
        let line = match &status.result {
            Ok(()) => format!("{:<12}{:<32}ok\n", status.language, extensions),
            Err(e) => format!("{:<12}{:<32}error: {e}\n", status.language, extensions),
        };
        text.push_str(&line);
    }
    text
}

/// 至少一个 grammar 加载成功
pub fn ensure_any_loaded(statuses: &[LoadStatus]) -> Result<()> {
    if statuses.iter().all(|status| status.result.is_err()) {
        return Err(AppError::NoLanguages);
    }
    Ok(())
}
