//! Inventory generation and output files.
//!
//! - [`generate`] - record to fixed-shape [`Inventory`](crate::models::Inventory)
//! - [`writer`] - inventory files and the JSON record summary

mod generate;
mod writer;

pub use generate::{generate_inventory, private_key_path};
pub use writer::{inventory_file_name, render_inventory, save_inventory_files, save_lab_summary};
