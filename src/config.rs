use config as config_rs;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::cli::Cli;

pub const ENV_PREFIX: &str = "BRUTEKIT";
pub const DEFAULT_OUTPUT: &str = "output.txt";
pub const DEFAULT_NUMBERING_LIMIT: u32 = 50;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RunConfig {
    pub words: String,
    pub append_numbering: u32,
    pub numbering_limit: u32,
    pub years: String,
    pub append_padding: String,
    pub common_paddings_before: bool,
    pub common_paddings_after: bool,
    pub custom_paddings_only: bool,
    pub output: PathBuf,
    pub quiet: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
    #[error("no seed words given (-w)")]
    MissingWords,
    #[error("custom paddings only (-cpo) requires values via -ap")]
    CustomPaddingsMissing,
}

impl ConfigError {
    /// Whether this is a usage mistake rather than a broken environment.
    pub fn is_usage(&self) -> bool {
        matches!(self, ConfigError::MissingWords | ConfigError::CustomPaddingsMissing)
    }
}

impl RunConfig {
    /// Trimmed, non-empty seed words in input order.
    pub fn seed_words(&self) -> Vec<&str> {
        self.words
            .split(',')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seed_words().is_empty() {
            return Err(ConfigError::MissingWords);
        }
        if self.custom_paddings_only && self.append_padding.split(',').all(|v| v.trim().is_empty()) {
            return Err(ConfigError::CustomPaddingsMissing);
        }
        Ok(())
    }
}

/// Resolve the run configuration: defaults, then `BRUTEKIT_*`
/// environment variables, then whatever was given on the command line.
pub fn load_config(cli: &Cli) -> Result<RunConfig, ConfigError> {
    let mut builder = config_rs::Config::builder()
        .set_default("words", "")?
        .set_default("append_numbering", 0i64)?
        .set_default("numbering_limit", i64::from(DEFAULT_NUMBERING_LIMIT))?
        .set_default("years", "")?
        .set_default("append_padding", "")?
        .set_default("common_paddings_before", false)?
        .set_default("common_paddings_after", false)?
        .set_default("custom_paddings_only", false)?
        .set_default("output", DEFAULT_OUTPUT)?
        .set_default("quiet", false)?
        .add_source(config_rs::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

    // CLI flags take precedence
    builder = builder.set_override("words", cli.words.clone())?;
    if let Some(level) = cli.append_numbering {
        builder = builder.set_override("append_numbering", i64::from(level))?;
    }
    if let Some(limit) = cli.numbering_limit {
        builder = builder.set_override("numbering_limit", i64::from(limit))?;
    }
    if let Some(ref years) = cli.years {
        builder = builder.set_override("years", years.clone())?;
    }
    if let Some(ref padding) = cli.append_padding {
        builder = builder.set_override("append_padding", padding.clone())?;
    }
    if cli.common_paddings_before {
        builder = builder.set_override("common_paddings_before", true)?;
    }
    if cli.common_paddings_after {
        builder = builder.set_override("common_paddings_after", true)?;
    }
    if cli.custom_paddings_only {
        builder = builder.set_override("custom_paddings_only", true)?;
    }
    if let Some(ref output) = cli.output {
        builder = builder.set_override("output", output.clone())?;
    }
    if cli.quiet {
        builder = builder.set_override("quiet", true)?;
    }

    let mut cfg: RunConfig = builder.build()?.try_deserialize()?;
    if cfg.output.as_os_str().is_empty() {
        cfg.output = PathBuf::from(DEFAULT_OUTPUT);
    }
    cfg.validate()?;
    debug!(?cfg, "resolved run configuration");
    Ok(cfg)
}
