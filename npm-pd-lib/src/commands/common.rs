//! Setup shared by every command that talks to npms.io.

use super::config::{Config, validate_api_url};
use super::{Host, ProgressReporter};
use crate::Result;
use crate::facts::Client;
use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use ohno::IntoAppError;
use std::io::{IsTerminal, Write, stderr, stdout};

const LOG_TARGET: &str = "    common";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal,
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Common arguments shared between the commands that query npms.io
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to configuration file (default is `npm-pd.toml` in the current directory)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Root of the npms.io API, overriding the configuration file
    #[arg(long, value_name = "URL", env = "NPMS_API_URL")]
    pub api_url: Option<String>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

pub struct Common<'a, H: Host> {
    pub config: Config,
    pub client: Client,
    pub progress: ProgressReporter,
    host: &'a mut H,
    use_colors: bool,
}

impl<'a, H: Host> Common<'a, H> {
    /// Set up logging, load the configuration, and create the API client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the client cannot be built
    pub fn new(host: &'a mut H, args: &CommonArgs) -> Result<Self> {
        Self::init_logging(args.log_level);

        let base_dir = std::env::current_dir().into_app_err("determining the current directory")?;
        let base_dir = Utf8PathBuf::try_from(base_dir).into_app_err("current directory is not valid UTF-8")?;
        let config = Config::load(&base_dir, args.config.as_ref())?;

        let api_url = match &args.api_url {
            Some(url) => {
                validate_api_url(url)?;
                url.clone()
            }
            None => config.api_url.clone(),
        };
        log::debug!(target: LOG_TARGET, "Using npms.io API at {api_url}");

        let client = Client::new(api_url, config.request_timeout)?;

        // the spinner would interleave with log lines
        let show_progress = args.log_level == LogLevel::None && stderr().is_terminal();
        let progress = ProgressReporter::new(show_progress, args.color.enabled(stderr().is_terminal()));

        Ok(Self {
            config,
            client,
            progress,
            host,
            use_colors: args.color.enabled(stdout().is_terminal()),
        })
    }

    /// Initialize logger based on log level
    fn init_logging(log_level: LogLevel) {
        let level = match log_level {
            LogLevel::None => return,
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        // a logger may already be installed when several commands run in one process
        let _ = env_logger::Builder::from_env(env)
            .format_module_path(false)
            .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
            .try_init();
    }

    #[must_use]
    pub const fn use_colors(&self) -> bool {
        self.use_colors
    }

    /// Send rendered text to the host's output
    pub fn emit(&mut self, text: &str) {
        let _ = write!(self.host.output(), "{text}");
    }

    /// Send a note to the host's error output
    pub fn emit_error(&mut self, text: &str) {
        let _ = writeln!(self.host.error(), "{text}");
    }
}
