pub mod env_file;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};

pub use crate::domain::model::SourceMode;
pub use env_file::EnvConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "sum-check")]
#[command(about = "Sums a list of integers and checks that an HTTP endpoint answers 200 OK")]
pub struct CliConfig {
    #[arg(long, default_value = "file", help = "Input source: 'file' or 'stdin'")]
    pub source: String,

    #[arg(long, default_value = "numbers.json", help = "JSON file read in file mode")]
    pub input: String,

    #[arg(long, default_value = "app.env", help = "Env file that defines URL")]
    pub env_file: String,

    #[arg(long, default_value = "app.log")]
    pub log_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn source_mode(&self) -> Result<SourceMode> {
        self.source.parse()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("source", &self.source)?;
        self.source_mode()?;
        validate_path("input", &self.input)?;
        validate_path("env_file", &self.env_file)?;
        validate_path("log_file", &self.log_file)?;
        Ok(())
    }
}

/// Resolved settings for a single run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: SourceMode,
    pub input_path: String,
    pub url: String,
}

impl RunConfig {
    pub fn new(source: SourceMode, input_path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            source,
            input_path: input_path.into(),
            url: url.into(),
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        if self.source == SourceMode::File {
            validate_path("input", &self.input_path)?;
        }
        validate_url("URL", &self.url)
    }
}

impl ConfigProvider for RunConfig {
    fn source_mode(&self) -> SourceMode {
        self.source
    }

    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn endpoint_url(&self) -> &str {
        &self.url
    }
}
