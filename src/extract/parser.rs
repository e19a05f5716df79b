//! Builds lab records from provisioning output.

use super::blocks::{split_blocks, LabBlock};
use super::fields::{extract_ip_fields, extract_labelled_fields};
use super::fragment::{locate_fragment, parse_fragment};
use crate::models::{LabRecord, MergePolicy};

/// Extract one record per lab block, in input order.
///
/// Pure: the same text and policy always give the same records.
pub fn extract_labs(content: &str, policy: MergePolicy) -> Vec<LabRecord> {
    log::info!("#Start extract_labs() content.len()={}", content.len());
    let records: Vec<LabRecord> = split_blocks(content)
        .iter()
        .map(|block| extract_block(block, policy))
        .collect();
    log::info!("Extracted {} lab records", records.len());
    records
}

/// Extract every field of a single block.
///
/// Pattern fields go in first, then the fragment is merged under `policy`.
/// A broken fragment is logged and skipped; the pattern fields are kept.
pub fn extract_block(block: &LabBlock<'_>, policy: MergePolicy) -> LabRecord {
    let mut record = LabRecord::new(block.service_name);

    for (field, value) in extract_labelled_fields(block.body) {
        record.insert(field, value);
    }
    for (field, value) in extract_ip_fields(block.body) {
        record.insert(field, value);
    }

    if let Some(text) = locate_fragment(block.body) {
        match parse_fragment(text) {
            Ok(Some(fragment)) => {
                log::debug!(
                    "{}: merging {} fragment fields ({policy:?})",
                    block.service_name,
                    fragment.len()
                );
                record.merge_fragment(fragment, policy);
            }
            Ok(None) => log::debug!("{}: fragment has no fields", block.service_name),
            Err(e) => log::warn!("{}: {e}", block.service_name),
        }
    }

    log::debug!(
        "{} -> guid='{}' fields={}",
        block.service_name,
        record.lab_guid(),
        record.len()
    );
    record
}
