use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use prettytable::{Table, format, row};

use comp_forge::io::write_category_list;
use comp_forge::ops::{Classification, classify_components_with};
use comp_forge::{MonomerCategory, rules};

use crate::commands::{create_output, load_dictionary, print_boxed_label, run_with_spinner};

const OUTPUT_FILES: [(MonomerCategory, &str); 3] = [
    (MonomerCategory::Nucleotide, "nucleotides.json"),
    (MonomerCategory::Carbohydrate, "carbohydrates.json"),
    (MonomerCategory::Peptide, "amino_acids.json"),
];

/// Sorts components into nucleotide, carbohydrate, and amino-acid lists.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Chemical components dictionary in mmCIF format.
    #[arg(value_name = "INFILE")]
    pub input: PathBuf,
    /// Directory receiving the JSON lists; created if missing.
    #[arg(value_name = "OUTDIR")]
    pub output_dir: PathBuf,
}

/// Classifies every component and writes one JSON list per category into `args.output_dir`.
pub fn run(args: &ClassifyArgs, quiet: bool) -> Result<()> {
    let dictionary = load_dictionary(&args.input, quiet)?;

    let classification = run_with_spinner("Classifying components", quiet, || {
        Ok(classify_components_with(&dictionary, rules::builtin()))
    })?;

    run_with_spinner("Writing category lists", quiet, || {
        write_lists(&classification, &args.output_dir)
    })?;

    if !quiet {
        print_summary(&classification, dictionary.len())?;
    }
    Ok(())
}

fn write_lists(classification: &Classification, output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory {}", output_dir.display())
    })?;

    for (category, file_name) in OUTPUT_FILES {
        let path = output_dir.join(file_name);
        let ids = classification.lists.list(category).unwrap_or_default();
        let mut writer = create_output(&path)?;
        write_category_list(&mut writer, ids)
            .with_context(|| format!("Failed to write {} list to {}", category, path.display()))?;
    }
    Ok(())
}

fn print_summary(classification: &Classification, component_count: usize) -> Result<()> {
    let mut stderr = io::stderr().lock();

    print_boxed_label(&mut stderr, "Classification Summary")?;
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["Category", "Type Annotations", "Components", "Output"]);
    for (category, file_name) in OUTPUT_FILES {
        let components = classification.lists.list(category).map_or(0, <[String]>::len);
        table.add_row(row![
            category,
            classification.buckets.bucket(category).len(),
            components,
            file_name
        ]);
    }
    table.add_row(row![
        MonomerCategory::Remainder,
        classification.buckets.bucket(MonomerCategory::Remainder).len(),
        component_count - classification.lists.total(),
        "-"
    ]);
    table
        .print(&mut stderr)
        .context("Failed to render classification summary")?;
    writeln!(&mut stderr)?;

    Ok(())
}
