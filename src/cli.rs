//! Command line arguments.

use crate::config::{DEFAULT_OUTPUT_DIR, OUTPUT_DIR_ENV};
use crate::models::MergePolicy;
use clap::Parser;
use std::path::PathBuf;

/// Generate Ansible inventories from lab provisioning output
#[derive(Parser, Debug, Clone)]
#[command(name = "lab-inventory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Provisioning output file to parse
    pub config_file: PathBuf,

    /// Directory receiving the inventory files and lab_summary.json
    #[arg(short, long, env = OUTPUT_DIR_ENV, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Which side wins when the Data fragment repeats a field
    #[arg(long, value_enum, default_value_t = MergePolicy::FragmentWins)]
    pub merge_policy: MergePolicy,
}
