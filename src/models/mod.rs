//! Domain models for lab inventory generation.
//!
//! - [`LabRecord`] - fields extracted from one lab block
//! - [`MergePolicy`] - fragment vs pattern field collision rule
//! - [`Inventory`] - fixed-shape Ansible inventory document

mod inventory;
mod lab_record;

// Re-export public types
pub use inventory::{GlobalGroup, HostGroup, HostVars, Inventory, InventoryVars};
pub use lab_record::{derive_lab_guid, scalar_text, LabRecord, MergePolicy};
