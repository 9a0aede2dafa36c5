use crate::domain::model::{CheckResult, NumberList, SourceMode};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn source_mode(&self) -> SourceMode;
    fn input_path(&self) -> &str;
    fn endpoint_url(&self) -> &str;
}

#[async_trait]
pub trait NumberSource: Send + Sync {
    async fn load(&self) -> Result<NumberList>;
}

#[async_trait]
pub trait EndpointChecker: Send + Sync {
    async fn check(&self, url: &str) -> Result<CheckResult>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn ingest(&self) -> Result<NumberList>;
    fn aggregate(&self, numbers: &NumberList) -> i128;
    async fn verify(&self) -> Result<CheckResult>;
}
