mod analyzing;
mod cli;
mod error;
mod output;
mod parsing;
mod rendering;
mod reviewing;


use std::io;
use std::process::ExitCode;

use clap::Parser as _;
use parser::ParserCache;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Args, EmitTarget};
use crate::error::Result;

const LOG_ENV_VAR: &str = "ASTVIEW_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.report();
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    args.validate()?;

    let mut cache = ParserCache::new();
    if args.list_languages {
        return list_languages(&mut cache);
    }

    let input_path = args.input_path.as_deref();
    let language = parsing::resolve_language(args.language.map(Into::into), input_path)?;
    let code = parsing::read_input(input_path)?;
    let parsed = parsing::parse(&mut cache, code, language)?;
    let max_depth = usize::from(args.max_depth);

    let text = match args.emit {
        EmitTarget::Graph => {
            let dot = rendering::graph(&parsed, max_depth);
            if let (Some(format), Some(output)) = (args.render, args.output.as_deref()) {
                return rendering::render_with_graphviz(&dot, format, output);
            }
            dot
        }
        EmitTarget::Tree => rendering::tree(&parsed),
        EmitTarget::Outline => rendering::outline(&parsed, max_depth),
        EmitTarget::Summary => analyzing::summary_report(&parsed, args.format)?,
        EmitTarget::Review => reviewing::review(&parsed, args.review.config()).await?,
        EmitTarget::Check => {
            let name = input_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "<stdin>".to_string());
            parsing::check(&parsed, &name)?;
            format!("no syntax errors in {name}")
        }
    };

    output::write_output(&text, args.output.as_deref())
}

/// 预加载所有 grammar 并输出状态，全部失败时返回错误
fn list_languages(cache: &mut ParserCache) -> Result<()> {
    let statuses = cache.initialize_all();
    output::write_stdout(&mut io::stdout().lock(), &output::format_statuses(&statuses))?;
    output::ensure_any_loaded(&statuses)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .with_env_var(LOG_ENV_VAR)
                .from_env_lossy(),
        )
        .init();
}
