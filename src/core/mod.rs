pub mod aggregate;
pub mod pipeline;
pub mod runner;

pub use crate::domain::model::{CheckResult, NumberList, RunSummary};
pub use crate::domain::ports::{ConfigProvider, EndpointChecker, NumberSource, Pipeline};
pub use crate::utils::error::Result;
