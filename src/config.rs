use std::{num::NonZeroU32, path::Path, time::Duration};

use ::config::{Config, Environment, File, FileFormat};
use miette::{Context, IntoDiagnostic};
use serde::Deserialize;

use crate::{
    aggregator::DEFAULT_PER_TERM_COUNT, outside::DEFAULT_BASE_URL, result::Result,
    selector::DEFAULT_TARGET_WIDTH, service::AcquisitionOptions, types::Orientation,
};

/// Prefix of the environment variables overriding the settings, e.g. `REELPICK_API_KEY`
pub const ENV_PREFIX: &str = "REELPICK";

/// Application settings, merged from defaults, an optional TOML file and the environment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_key: Option<String>,
    pub base_url: String,
    /// Timeout of each HTTP request, in seconds
    pub timeout_secs: u64,
    /// Results asked for each search term, at least one
    pub per_term_count: NonZeroU32,
    pub orientation: Orientation,
    pub target_width: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: 30,
            per_term_count: DEFAULT_PER_TERM_COUNT,
            orientation: Orientation::default(),
            target_width: DEFAULT_TARGET_WIDTH,
        }
    }
}

impl Settings {
    /// Load the settings. The file is optional, a missing one is the same as an empty one.
    pub fn load(file: &Path) -> Result<Self> {
        Self::load_with_env(file, Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn load_with_env(file: &Path, env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(file).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()
            .into_diagnostic()
            .wrap_err_with(|| format!("Could not read settings from {}", file.display()))?
            .try_deserialize()
            .into_diagnostic()
            .wrap_err("Invalid settings")?;

        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn acquisition_options(&self) -> AcquisitionOptions {
        AcquisitionOptions {
            per_term_count: self.per_term_count,
            orientation: self.orientation,
        }
    }
}
