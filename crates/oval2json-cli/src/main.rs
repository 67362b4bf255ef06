use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use oval2json_core::report::render;
use oval2json_core::source::{read_document, read_stdin};

mod args;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error during OVAL to JSON conversion: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = args::Args::parse();

    // RUST_LOG wins; otherwise only dropped-record warnings unless -v.
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if args.verbose {
        EnvFilter::new("oval2json=debug,oval2json_core=debug")
    } else {
        EnvFilter::new("oval2json=warn,oval2json_core=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let source = match &args.input {
        Some(path) => read_document(path)?,
        None => read_stdin()?,
    };
    debug!(bytes = source.size_bytes, sha256 = %source.sha256, "document read");

    let conversion = oval2json_core::convert_source(&source)?;

    let output = match args.format {
        args::OutputFormat::Json if args.compact => {
            serde_json::to_string(&conversion.output)?
        }
        args::OutputFormat::Json => serde_json::to_string_pretty(&conversion.output)?,
        args::OutputFormat::Text => {
            render::render_text(&conversion, env!("CARGO_PKG_VERSION"))
                .trim_end()
                .to_string()
        }
    };

    match args.out {
        Some(path) => std::fs::write(&path, format!("{output}\n"))
            .with_context(|| format!("failed to write output: {}", path.display()))?,
        None => println!("{output}"),
    }

    Ok(())
}
