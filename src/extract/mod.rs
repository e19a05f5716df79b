//! Text-to-record extraction.
//!
//! Extraction runs in independently testable stages:
//! - [`blocks`] - split the input into per-lab blocks
//! - [`fields`] - labelled and `NAME=value` patterns inside a block
//! - [`fragment`] - the embedded YAML fragment
//! - [`parser`] - builds one [`LabRecord`](crate::models::LabRecord) per block
//! - [`source`] - reading the provisioning output file

mod blocks;
mod fields;
mod fragment;
mod parser;
mod source;

// Re-export public types and functions
pub use blocks::{split_blocks, LabBlock};
pub use fields::{extract_ip_fields, extract_labelled_fields, IP_FIELDS};
pub use fragment::{locate_fragment, parse_fragment};
pub use parser::{extract_block, extract_labs};
pub use source::{parse_lab_config, read_lab_config};
