//! Command implementations for the CUP processor CLI
//!
//! File discovery, reading and writing happen here; the parse/serialize
//! engine itself never touches the filesystem.

use anyhow::{bail, Context};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::cli::args::{Args, CheckArgs, Commands, NormalizeArgs, OutputFormat};
use crate::parser::parse_with_stats;
use crate::serializer::{serialize, Newline};

/// Main command runner for the CUP processor
pub fn run(args: Args) -> anyhow::Result<()> {
    setup_logging(args.verbose);

    match args.command {
        Some(Commands::Check(check_args)) => check(check_args),
        Some(Commands::Normalize(normalize_args)) => normalize(normalize_args),
        None => Ok(()), // main shows help before dispatching
    }
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse one file or every .cup file under a directory and report results
fn check(args: CheckArgs) -> anyhow::Result<()> {
    let files = discover_files(&args.path)?;
    if files.is_empty() {
        bail!("no .cup files found under {}", args.path.display());
    }
    info!("checking {} file(s)", files.len());

    let mut failed = 0usize;
    for file in &files {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;

        match parse_with_stats(&content) {
            Ok(result) => match args.format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&result.document)
                        .context("failed to render document as JSON")?;
                    println!("{}", json);
                }
                OutputFormat::Summary => print_summary(file, &result),
            },
            Err(error) => {
                failed += 1;
                println!("{} {}: {}", "error".red().bold(), file.display(), error);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} file(s) failed to parse", failed, files.len());
    }
    Ok(())
}

/// Parse and re-serialize a file in canonical form
fn normalize(args: NormalizeArgs) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let result = parse_with_stats(&content)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    if !result.stats.is_clean() {
        println!(
            "{} dropped {} malformed row(s) from {}",
            "warning".yellow().bold(),
            result.stats.rows_skipped,
            args.input.display()
        );
        for error in &result.stats.errors {
            debug!("{}", error);
        }
    }

    let newline = if args.crlf { Newline::CrLf } else { Newline::Lf };
    let rendered = serialize(&result.document, newline);

    std::fs::write(&args.output, rendered)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!(
        "{} {} -> {} ({} waypoints, {} tasks)",
        "normalized".green().bold(),
        args.input.display(),
        args.output.display(),
        result.document.waypoints.len(),
        result.document.tasks.len()
    );
    Ok(())
}

/// Collect the target file, or every .cup file below a directory
fn discover_files(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        bail!("{} is neither a file nor a directory", path.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|p| {
            p.extension()
                .map(|ext| ext.eq_ignore_ascii_case("cup"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

fn print_summary(file: &Path, result: &crate::parser::ParseResult) {
    let stats = &result.stats;
    println!(
        "{} {}: {} waypoints, {} tasks",
        "ok".green().bold(),
        file.display(),
        result.document.waypoints.len(),
        result.document.tasks.len()
    );

    if !stats.is_clean() {
        println!(
            "  {} {} of {} row(s) skipped ({:.1}% parsed)",
            "warning".yellow().bold(),
            stats.rows_skipped,
            stats.waypoint_rows,
            stats.success_rate()
        );
        for error in &stats.errors {
            println!("    {}", error.dimmed());
        }
    }
}
