use std::fs::File;
use std::io::{self as stdio, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use comp_forge::io::CifFile;

pub mod bonds;
pub mod classify;

/// Reads and indexes the chemical components dictionary at `path`.
pub fn load_dictionary(path: &Path, quiet: bool) -> Result<CifFile> {
    run_with_spinner("Indexing component dictionary", quiet, || {
        CifFile::open(path)
            .with_context(|| format!("Failed to read mmCIF input from {}", path.display()))
    })
}

/// Creates `path` for buffered writing, truncating any existing file.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Wraps long-running operations with a spinner rendered to stderr.
///
/// With `quiet` set the spinner is hidden and only the work runs.
pub fn run_with_spinner<T, F>(message: &str, quiet: bool, work: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());

    let result = work();

    match &result {
        Ok(_) => spinner.finish_with_message(format!("{} ✓", message)),
        Err(_) => spinner.abandon_with_message(format!("{} ✗", message)),
    }

    result
}

pub fn print_boxed_label<W: Write>(writer: &mut W, title: &str) -> stdio::Result<()> {
    let inner = format!(" {title} ");
    let width = inner.chars().count();
    writeln!(writer, "╭{}╮", "─".repeat(width))?;
    writeln!(writer, "│{}│", inner)?;
    writeln!(writer, "╰{}╯", "─".repeat(width))?;
    Ok(())
}
