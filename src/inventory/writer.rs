//! Writing inventory documents and the record summary to disk.

use super::generate::generate_inventory;
use crate::config::SUMMARY_FILE_NAME;
use crate::models::LabRecord;
use colored::Colorize;
use std::error::Error;
use std::path::{Path, PathBuf};

/// File name for a lab's inventory: `hosts-cluster-<guid>.yml`.
pub fn inventory_file_name(record: &LabRecord) -> String {
    let guid = record.lab_guid();
    let guid = if guid.is_empty() { "unknown" } else { guid.as_str() };
    format!("hosts-cluster-{guid}.yml")
}

/// Header comment placed before every inventory document.
fn inventory_header(lab_guid: &str) -> String {
    format!(
        "---\n\
# Ansible inventory for RHOSO deployment on cluster-{lab_guid} via SSH jump host (bastion)\n\
# Generated automatically from lab configuration data\n\
\n"
    )
}

/// Render the full inventory file content for one record.
pub fn render_inventory(record: &LabRecord) -> Result<String, Box<dyn Error>> {
    let inventory = generate_inventory(record);
    let body = serde_yaml::to_string(&inventory).map_err(|e| {
        format!(
            "Error serializing inventory for {}: {e}",
            record.service_name()
        )
    })?;
    Ok(inventory_header(&record.lab_guid()) + &body)
}

/// Write one inventory file per record into `output_dir`, creating it if needed.
///
/// Existing files with the same name are overwritten.
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - written paths, in record order
/// * `Err` - on the first serialization or I/O failure
pub fn save_inventory_files(
    records: &[LabRecord],
    output_dir: &Path,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    log::info!(
        "#Start save_inventory_files() {} records -> {}",
        records.len(),
        output_dir.display()
    );
    std::fs::create_dir_all(output_dir)
        .map_err(|e| format!("Error creating {}: {e}", output_dir.display()))?;

    let mut written = Vec::with_capacity(records.len());
    for record in records {
        let path = output_dir.join(inventory_file_name(record));
        let content = render_inventory(record)?;
        std::fs::write(&path, content)
            .map_err(|e| format!("Error writing {}: {e}", path.display()))?;
        println!(
            "Generated inventory file: {}",
            path.display().to_string().green()
        );
        written.push(path);
    }
    Ok(written)
}

/// Write every record as a pretty JSON array to `<output_dir>/lab_summary.json`.
pub fn save_lab_summary(records: &[LabRecord], output_dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let path = output_dir.join(SUMMARY_FILE_NAME);
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| format!("Error serializing lab summary: {e}"))?;
    log::info!("Writing lab summary to: {}", path.display());
    std::fs::write(&path, json).map_err(|e| format!("Error writing {}: {e}", path.display()))?;
    Ok(path)
}
