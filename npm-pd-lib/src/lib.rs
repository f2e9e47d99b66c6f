#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for npm-pd
//!
//! This library consolidates all functionality for the npm-pd tool, which reports on npm
//! packages using the analysis published by npms.io.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`facts`]: npms.io data model, HTTP client, and paginated fetching
//! - [`metrics`]: Sub-score extraction from collected package data
//! - [`publisher`]: Filtering, sorting, and limiting of package listings
//! - [`reports`]: Console, table, and JSON rendering

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

pub mod facts;
pub mod metrics;
pub mod publisher;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
