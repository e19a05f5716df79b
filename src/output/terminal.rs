//! Terminal output for parsed lab records.

use crate::models::{scalar_text, LabRecord};
use colored::Colorize;

/// Display text for a record field, `N/A` when absent.
pub fn format_field(record: &LabRecord, field: &str) -> String {
    match record.get(field) {
        None => "N/A".to_string(),
        Some(value) => scalar_text(value).unwrap_or_else(|| {
            serde_yaml::to_string(value)
                .map(|s| s.trim_end().to_string())
                .unwrap_or_else(|_| "?".to_string())
        }),
    }
}

/// Summary lines for one record: guid, service and bastion endpoint.
pub fn lab_summary_lines(record: &LabRecord) -> [String; 3] {
    [
        format!("  - Lab GUID: {}", format_field(record, "lab_guid")),
        format!("    Service: {}", format_field(record, "service_name")),
        format!(
            "    Bastion: {}:{}",
            format_field(record, "bastion_hostname"),
            format_field(record, "bastion_port")
        ),
    ]
}

/// Print the per-lab summary to stdout.
pub fn print_lab_summary(records: &[LabRecord]) {
    println!(
        "Parsed {} lab configurations:",
        records.len().to_string().bold()
    );
    for record in records {
        let [guid, service, bastion] = lab_summary_lines(record);
        println!("{}", guid.cyan());
        println!("{service}");
        println!("{bastion}");
        println!();
    }
}
