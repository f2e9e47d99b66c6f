//! Command-line interface and orchestration for npm-pd
//!
//! This module implements the CLI commands and ties the other modules together: it parses
//! arguments, loads configuration, fetches data from npms.io, and renders the results.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **author** / **maintainer**: fetch every package claimed by a user, then filter, sort,
//!   and limit the listing before rendering it as a table or JSON
//! - **evaluate**: fetch one package's analysis, derive the local sub-scores, and render the
//!   fixed-width report or JSON
//! - **init**: write the default configuration file
//!
//! The `common` module provides the shared setup: logging, configuration loading, the API
//! client, and the progress spinner.

mod common;
mod config;
mod evaluate;
mod host;
mod init;
mod progress_reporter;
mod publisher;
mod run;

#[cfg(debug_assertions)]
pub use config::Config;

pub use common::{ColorMode, CommonArgs, LogLevel};
pub use evaluate::{EvaluateArgs, evaluate_package};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use progress_reporter::ProgressReporter;
pub use publisher::{PublisherArgs, process_publisher};
pub use run::run;
