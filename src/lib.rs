//! Extracts lab metadata from provisioning output and writes Ansible inventories.
//!
//! Data flow: raw text -> [`extract::extract_labs`] -> [`models::LabRecord`]s ->
//! [`inventory::save_inventory_files`] -> one `hosts-cluster-<guid>.yml` per lab.

pub mod cli;
pub mod config;
pub mod extract;
pub mod inventory;
pub mod models;
pub mod output;

use cli::Cli;
use std::error::Error;
use std::path::PathBuf;

pub use extract::{extract_labs, parse_lab_config};
pub use inventory::{generate_inventory, save_inventory_files, save_lab_summary};
pub use models::{LabRecord, MergePolicy};

/// Files written by one run.
#[derive(Debug)]
pub struct RunOutput {
    pub inventory_files: Vec<PathBuf>,
    pub summary_file: PathBuf,
}

/// Parse the input file, print the summary, write inventories and the JSON summary.
pub fn run(cli: &Cli) -> Result<RunOutput, Box<dyn Error>> {
    log::info!("#Start run() config_file={}", cli.config_file.display());

    let labs = parse_lab_config(&cli.config_file, cli.merge_policy)?;
    output::print_lab_summary(&labs);

    let inventory_files = save_inventory_files(&labs, &cli.output_dir)?;
    println!(
        "\nGenerated {} inventory files in '{}' directory",
        inventory_files.len(),
        cli.output_dir.display()
    );

    let summary_file = save_lab_summary(&labs, &cli.output_dir)?;
    println!("Lab summary saved to: {}", summary_file.display());

    Ok(RunOutput {
        inventory_files,
        summary_file,
    })
}
