//! inkswap - change the fill color of text runs in a PDF.
//!
//! Two modes: a single `--target`/`--replacement` pair (run-scoped, with
//! black restored after each matched run), or a JSON color map applying
//! several independent replacements by closeness.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use inkswap_core::model::color::{Color, ColorTable};
use inkswap_core::rewrite::{FixedTarget, RewritePolicy, TableRewrite};
use inkswap_core::PageEditor;
use lopdf::Document;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Change the fill color of text runs in a PDF without touching layout
/// or any other page content.
#[derive(Parser, Debug)]
#[command(name = "inkswap")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input PDF file
    input: PathBuf,

    /// Path to write the rewritten PDF to
    output: PathBuf,

    /// Hex color to replace (fixed-target mode)
    #[arg(short = 't', long, default_value = "#FF0000", conflicts_with = "color_map")]
    target: String,

    /// Hex color to paint matched runs with (fixed-target mode)
    #[arg(
        short = 'r',
        long = "replacement",
        default_value = "#802020",
        conflicts_with = "color_map"
    )]
    replacement: String,

    /// JSON color map: an array of {"target": "#RRGGBB", "replacement": "#RRGGBB"}
    #[arg(short = 'm', long = "color-map")]
    color_map: Option<PathBuf>,

    /// A comma-separated list of page numbers to rewrite (1-indexed, default: all)
    #[arg(short = 'p', long)]
    pages: Option<String>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

#[derive(Debug, Deserialize)]
struct MapEntry {
    target: String,
    replacement: String,
}

/// Load a color map file, keeping file order as the match order.
fn load_color_map(path: &Path) -> Result<ColorTable> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read color map {}", path.display()))?;
    let entries: Vec<MapEntry> = serde_json::from_str(&data)
        .with_context(|| format!("invalid color map JSON in {}", path.display()))?;

    let mut table = ColorTable::new();
    for entry in &entries {
        table.insert(
            Color::from_hex(&entry.target)?,
            Color::from_hex(&entry.replacement)?,
        );
    }
    Ok(table)
}

fn build_policy(args: &Args) -> Result<RewritePolicy> {
    if let Some(ref path) = args.color_map {
        let table = load_color_map(path)?;
        if table.is_empty() {
            bail!("color map {} contains no entries", path.display());
        }
        debug!(entries = table.len(), "using color-table policy");
        return Ok(TableRewrite::new(table).into());
    }

    let target = Color::from_hex(&args.target)?;
    let replacement = Color::from_hex(&args.replacement)?;
    debug!(?target, ?replacement, "using fixed-target policy");
    Ok(FixedTarget::new(target, replacement)?.into())
}

/// Parse the -p option into 1-indexed page numbers.
fn parse_pages(pages: &str) -> Vec<u32> {
    pages
        .split(',')
        .filter_map(|s| s.trim().parse::<u32>().ok())
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.debug { "debug" } else { "info" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if !args.input.is_file() {
        bail!("input file does not exist: {}", args.input.display());
    }

    let mut policy = build_policy(&args)?;
    let mut document = Document::load(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let mut editor = PageEditor::new(&mut document)?;
    match args.pages.as_deref().map(parse_pages) {
        Some(pages) if !pages.is_empty() => {
            for page_number in pages {
                editor.edit_page(page_number, &mut policy)?;
                debug!(page_number, "page rewritten");
            }
        }
        _ => editor.edit_document(&mut policy)?,
    }

    document
        .save(&args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    info!(output = %args.output.display(), "rewritten document saved");

    Ok(())
}
