use crate::Result;
use crate::publisher::SortKey;
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when no explicit path is given
pub const CONFIG_FILE_NAME: &str = "npm-pd.toml";

/// The npms.io search endpoint refuses pages larger than this
const MAX_PAGE_SIZE: usize = 250;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root of the npms.io API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Number of search results requested per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Maximum number of pages fetched for one listing
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Time allowed for a single request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Sort order used when none is given on the command line
    #[serde(default)]
    pub default_sort: SortKey,
}

fn default_api_url() -> String {
    "https://api.npms.io/v2".to_string()
}

const fn default_page_size() -> usize {
    MAX_PAGE_SIZE
}

const fn default_max_pages() -> usize {
    40
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `npm-pd.toml` in `base_dir` is used when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading npm-pd configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
                Err(e) => return Err(e).into_app_err_with(|| format!("reading npm-pd configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of range or the API URL is unusable
    pub fn validate(&self) -> Result<()> {
        validate_api_url(&self.api_url)?;

        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(app_err!("page_size must be between 1 and {MAX_PAGE_SIZE}, got {}", self.page_size));
        }

        if self.max_pages == 0 {
            return Err(app_err!("max_pages must be at least 1"));
        }

        if self.request_timeout.is_zero() {
            return Err(app_err!("request_timeout must be greater than zero"));
        }

        Ok(())
    }
}

/// Check that `api_url` is an absolute http or https URL
///
/// # Errors
///
/// Returns an error describing why the URL is rejected
pub fn validate_api_url(api_url: &str) -> Result<()> {
    let url = Url::parse(api_url).into_app_err_with(|| format!("api_url '{api_url}' is not a valid URL"))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(app_err!("api_url must use http or https, got '{scheme}'")),
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
