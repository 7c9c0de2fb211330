use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Result;
use clap::ValueEnum;
use serde::Deserialize;

use crate::{error::ValidationError, urls::is_valid_url};

pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const CLOUD_ENDPOINT: &str = "https://api.firecrawl.dev/v0/scrape";
/// Self-hosted instances usually skip authentication.
pub const SELF_HOSTED_API_KEY: &str = "dummy";
pub const OUTPUT_FILE_NAME: &str = "webpagepack-output.txt";

/// Where the scrape endpoint lives.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Cloud,
    SelfHosted,
}

impl Preset {
    pub fn default_endpoint(self) -> Option<&'static str> {
        match self {
            Preset::Cloud => Some(CLOUD_ENDPOINT),
            Preset::SelfHosted => None,
        }
    }

    pub fn default_api_key(self) -> Option<&'static str> {
        match self {
            Preset::Cloud => None,
            Preset::SelfHosted => Some(SELF_HOSTED_API_KEY),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PackerConfig {
    pub endpoint: String,
    pub api_key: String,
    pub delay: Duration,
    pub timeout: Duration,
    pub strict: bool,
}

impl PackerConfig {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            endpoint,
            api_key,
            delay: DEFAULT_DELAY,
            timeout: DEFAULT_TIMEOUT,
            strict: false,
        }
    }

    /// Fill in whatever `preset` provides, then validate.
    pub fn from_preset(
        preset: Option<Preset>,
        endpoint: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self, ValidationError> {
        let preset = preset.ok_or(ValidationError::Missing("preset"))?;
        let endpoint = endpoint
            .or_else(|| preset.default_endpoint().map(str::to_owned))
            .unwrap_or_default();
        let api_key = api_key
            .or_else(|| preset.default_api_key().map(str::to_owned))
            .unwrap_or_default();
        let config = Self::new(endpoint, api_key);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.endpoint.trim().is_empty() {
            return Err(ValidationError::Missing("endpoint"));
        }
        if !is_valid_url(&self.endpoint) {
            return Err(ValidationError::Endpoint(self.endpoint.clone()));
        }
        if self.api_key.is_empty() {
            return Err(ValidationError::Missing("api_key"));
        }
        if self.timeout.is_zero() {
            return Err(ValidationError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    pub fn timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    pub fn strict(self) -> Self {
        Self {
            strict: true,
            ..self
        }
    }
}

/// Optional TOML file; every key can also be given on the command line.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub preset: Option<Preset>,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub delay_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub strict: Option<bool>,
    pub output: Option<String>,
}

impl FileConfig {
    pub fn load<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Values given on the command line, each winning over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub preset: Option<Preset>,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub delay_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub strict: bool,
    pub output: Option<PathBuf>,
}

/// Everything a run needs once flags and file are merged.
#[derive(Debug)]
pub struct Settings {
    pub config: PackerConfig,
    pub output: PathBuf,
}

impl FileConfig {
    /// Flags first, then this file, then the defaults.
    ///
    /// `strict` is on if either side turns it on.
    pub fn merge(self, overrides: Overrides) -> Result<Settings, ValidationError> {
        let mut config = PackerConfig::from_preset(
            overrides.preset.or(self.preset),
            overrides.endpoint.or(self.endpoint),
            overrides.api_key.or(self.api_key),
        )?;
        if let Some(delay) = overrides.delay_ms.or(self.delay_ms) {
            config = config.delay(Duration::from_millis(delay));
        }
        if let Some(timeout) = overrides.timeout_ms.or(self.timeout_ms) {
            config = config.timeout(Duration::from_millis(timeout));
        }
        if overrides.strict || self.strict.unwrap_or(false) {
            config = config.strict();
        }
        config.validate()?;
        let output = overrides
            .output
            .or_else(|| self.output.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(OUTPUT_FILE_NAME));
        Ok(Settings { config, output })
    }
}
