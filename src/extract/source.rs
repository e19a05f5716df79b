//! Reading provisioning output from disk.

use super::parser::extract_labs;
use crate::models::{LabRecord, MergePolicy};
use std::error::Error;
use std::path::Path;

/// Read the whole provisioning output file.
///
/// # Returns
/// * `Ok(String)` - the file content
/// * `Err` - if the file does not exist or cannot be read as UTF-8
pub fn read_lab_config(path: &Path) -> Result<String, Box<dyn Error>> {
    if !path.exists() {
        return Err(format!("Configuration file not found: {}", path.display()).into());
    }
    log::info!("Reading lab configuration: {}", path.display());
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
    Ok(content)
}

/// Read `path` and extract every lab record from it.
pub fn parse_lab_config(path: &Path, policy: MergePolicy) -> Result<Vec<LabRecord>, Box<dyn Error>> {
    let content = read_lab_config(path)?;
    Ok(extract_labs(&content, policy))
}
