//! Rendering of listings and package evaluations
//!
//! Each generator writes into any [`core::fmt::Write`] so callers decide where the text goes.
//!
//! - **Console**: the fixed-width evaluation report for a single package, with optional colors
//! - **Table**: author and maintainer listings, one row per package
//! - **JSON**: machine-readable forms of both

mod console;
mod json;
mod table;

pub use console::generate as generate_evaluation_console;
pub use json::{generate_evaluation as generate_evaluation_json, generate_listing as generate_listing_json};
pub use table::generate as generate_listing_table;

#[cfg(test)]
mod fixtures;
