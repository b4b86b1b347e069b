mod commands;
mod error;
mod locator;
mod report;
mod resolver;
mod scanner;
mod types;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::commands::OutputFormat;

#[derive(Parser)]
#[command(name = "doclink", about = "Find broken internal links in MDX documentation")]
struct Cli {
    /// Emit the report as a JSON document instead of text.
    #[arg(long)]
    json: bool,
    /// Documentation root to scan; skips the layout heuristic.
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };

    match commands::check(cli.root, format) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}
