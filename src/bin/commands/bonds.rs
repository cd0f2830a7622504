use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use prettytable::{Table, format, row};

use comp_forge::io::write_bond_graph;
use comp_forge::ops::extract_bond_graph;
use comp_forge::{BondGraph, BondType};

use crate::commands::{create_output, load_dictionary, print_boxed_label, run_with_spinner};

/// Builds the MessagePack bond dataset.
#[derive(Debug, Args)]
pub struct BondsArgs {
    /// Chemical components dictionary in mmCIF format.
    #[arg(value_name = "INFILE")]
    pub input: PathBuf,
    /// Destination of the MessagePack bond graph.
    #[arg(value_name = "OUTFILE")]
    pub output: PathBuf,
}

/// Extracts every component's bond table and writes the graph to `args.output`.
///
/// The output file is only created once extraction has succeeded.
pub fn run(args: &BondsArgs, quiet: bool) -> Result<()> {
    let dictionary = load_dictionary(&args.input, quiet)?;

    let graph = run_with_spinner("Extracting bond graph", quiet, || {
        extract_bond_graph(&dictionary).context("Failed to extract bond graph")
    })?;

    run_with_spinner("Writing bond dataset", quiet, || {
        let mut writer = create_output(&args.output)?;
        write_bond_graph(&mut writer, &graph).with_context(|| {
            format!("Failed to write bond dataset to {}", args.output.display())
        })
    })?;

    if !quiet {
        print_summary(&graph, dictionary.len())?;
    }
    Ok(())
}

fn print_summary(graph: &BondGraph, component_count: usize) -> Result<()> {
    let mut counts: BTreeMap<BondType, usize> = BTreeMap::new();
    for (_, bonds) in graph {
        for (_, _, bond_type) in bonds.iter() {
            *counts.entry(bond_type).or_default() += 1;
        }
    }

    let mut stderr = io::stderr().lock();

    print_boxed_label(&mut stderr, "Bond Dataset Summary")?;
    let mut summary_table = Table::new();
    summary_table.set_format(*format::consts::FORMAT_BOX_CHARS);
    summary_table.set_titles(row!["Metric", "Value"]);
    summary_table.add_row(row!["Components", component_count]);
    summary_table.add_row(row!["Components with bonds", graph.residue_count()]);
    summary_table.add_row(row!["Bonds", graph.bond_count()]);
    summary_table.add_row(row![
        "Aromatic bonds",
        counts
            .iter()
            .filter(|(bond_type, _)| bond_type.is_aromatic())
            .map(|(_, count)| count)
            .sum::<usize>()
    ]);
    summary_table
        .print(&mut stderr)
        .context("Failed to render bond summary")?;
    writeln!(&mut stderr)?;

    print_boxed_label(&mut stderr, "Bond Types")?;
    let mut type_table = Table::new();
    type_table.set_format(*format::consts::FORMAT_BOX_CHARS);
    type_table.set_titles(row!["Type", "Tag", "Aromatic", "Count"]);
    for (bond_type, count) in &counts {
        let aromatic = if bond_type.is_aromatic() { "yes" } else { "no" };
        type_table.add_row(row![bond_type, bond_type.tag(), aromatic, count]);
    }
    type_table
        .print(&mut stderr)
        .context("Failed to render bond type breakdown")?;

    Ok(())
}
