//! guidemark - render a Markdown guide to an HTML fragment.
//!
//! Reads a Markdown file (or stdin with `-`) and prints the rendered HTML
//! fragment, optionally preceded by a table-of-contents list, or the whole
//! parse result as JSON for downstream tooling.

use std::fs;
use std::io::{self, Read};
use std::process;

use clap::Parser;
use guidemark_core::{toc_html, RenderOptions, Renderer};
use log::debug;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(
    name = "guidemark",
    version,
    about = "Render a Markdown guide to an HTML fragment"
)]
struct Cli {
    /// Markdown file to render, or `-` for stdin
    file: String,

    /// Emit the table-of-contents list before the document body
    #[arg(long)]
    toc: bool,

    /// Emit the parse result as JSON instead of HTML
    #[arg(long, conflicts_with = "toc")]
    json: bool,

    /// CSS class for unordered lists
    #[arg(long)]
    list_class: Option<String>,

    /// CSS class for ordered lists
    #[arg(long)]
    ordered_list_class: Option<String>,

    /// HTML fragment to emit for empty input
    #[arg(long)]
    placeholder: Option<String>,

    /// Collect headings up to this level for the table of contents
    #[arg(long, default_value_t = 3)]
    toc_limit: u8,
}

#[derive(Debug, Error)]
enum CliError {
    /// A missing file gets a distinct hint from other read failures.
    #[error("'{path}' not found; check that the Markdown file exists and is reachable")]
    NotFound { path: String },

    #[error("failed to read '{path}': {source}")]
    Unreadable { path: String, source: io::Error },

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let markdown = read_source(&cli.file)?;

    let doc = Renderer::with_options(render_options(cli)).render(&markdown);
    debug!(
        "rendered '{}': {} bytes of html, {} headings",
        cli.file,
        doc.html.len(),
        doc.headings.len()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    if cli.toc {
        if let Some(toc) = toc_html(&doc.headings) {
            println!("{toc}");
        }
    }
    println!("{}", doc.html);

    Ok(())
}

fn render_options(cli: &Cli) -> RenderOptions {
    let defaults = RenderOptions::default();
    RenderOptions {
        unordered_list_class: cli.list_class.clone(),
        ordered_list_class: cli.ordered_list_class.clone(),
        placeholder: cli.placeholder.clone().unwrap_or(defaults.placeholder),
        toc_level_limit: cli.toc_limit,
    }
}

fn read_source(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Unreadable {
                path: path.to_string(),
                source,
            })?;
        return Ok(buffer);
    }

    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CliError::NotFound {
            path: path.to_string(),
        },
        _ => CliError::Unreadable {
            path: path.to_string(),
            source,
        },
    })
}
