//! Command dispatch logic for npm-pd

use super::{EvaluateArgs, InitArgs, PublisherArgs, evaluate_package, init_config, process_publisher};
use crate::facts::Claim;
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "npm-pd", version, author, long_about = None)]
#[command(about = "Show npms.io analysis for npm packages, authors, and maintainers")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch packages by author
    Author(Box<PublisherArgs>),
    /// Fetch packages by maintainer
    Maintainer(Box<PublisherArgs>),
    /// Show analysis for a package
    Evaluate(EvaluateArgs),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        Command::Author(args) => process_publisher(host, Claim::Author, args).await,
        Command::Maintainer(args) => process_publisher(host, Claim::Maintainer, args).await,
        Command::Evaluate(args) => evaluate_package(host, args).await,
        Command::Init(args) => init_config(host, args),
    }
}
