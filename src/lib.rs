pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{FileSource, HttpChecker, StreamSource};
pub use crate::config::{EnvConfig, RunConfig, SourceMode};
pub use crate::core::{pipeline::SumCheckPipeline, runner::TaskRunner};
pub use crate::domain::model::{CheckResult, NumberList, RunSummary};
pub use crate::utils::error::{Result, TaskError};
