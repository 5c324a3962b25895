use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use mdhtml::{Converter, LineSpans, Options};
use tracing::{info, warn};

mod site;

#[derive(Parser)]
#[command(name = "mdhtml")]
#[command(about = "Generate HTML pages from Markdown files")]
struct Cli {
    /// Markdown files to convert
    inputs: Vec<PathBuf>,

    /// Static asset directory copied into the output
    #[arg(short, long = "static", default_value = "static")]
    static_dir: PathBuf,

    /// Output directory (removed and recreated on every run)
    #[arg(short, long, default_value = "public")]
    output: PathBuf,

    /// Keep every inline span of list items and quote lines
    #[arg(long)]
    preserve_line_spans: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            line_spans: if self.preserve_line_spans {
                LineSpans::Preserve
            } else {
                LineSpans::Flatten
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = format!("mdhtml={log_level}");
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .init();

    site::reset_dir(&cli.output)?;

    if cli.static_dir.is_dir() {
        let copied = site::copy_tree(&cli.static_dir, &cli.output)?;
        info!(files = copied, from = %cli.static_dir.display(), "copied static assets");
    } else {
        warn!(path = %cli.static_dir.display(), "static directory not found, skipping");
    }

    let converter = Converter::with_options(cli.options());
    for input in &cli.inputs {
        site::generate_page(&converter, input, &cli.output)?;
    }

    Ok(())
}
