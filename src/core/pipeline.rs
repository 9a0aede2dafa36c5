use crate::adapters::source_for;
use crate::core::{aggregate, ConfigProvider, EndpointChecker, NumberSource, Pipeline};
use crate::domain::model::{CheckResult, NumberList};
use crate::utils::error::Result;

/// Ingest → aggregate → verify over a configured source and endpoint.
pub struct SumCheckPipeline<C: ConfigProvider, E: EndpointChecker> {
    source: Box<dyn NumberSource>,
    checker: E,
    config: C,
}

impl<C: ConfigProvider, E: EndpointChecker> SumCheckPipeline<C, E> {
    pub fn new(config: C, checker: E) -> Self {
        let source = source_for(config.source_mode(), config.input_path());
        Self::with_source(config, source, checker)
    }

    pub fn with_source(config: C, source: Box<dyn NumberSource>, checker: E) -> Self {
        Self {
            source,
            checker,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider, E: EndpointChecker> Pipeline for SumCheckPipeline<C, E> {
    async fn ingest(&self) -> Result<NumberList> {
        tracing::debug!("Loading numbers from source: {}", self.config.source_mode());
        self.source.load().await
    }

    fn aggregate(&self, numbers: &NumberList) -> i128 {
        aggregate::sum(numbers)
    }

    async fn verify(&self) -> Result<CheckResult> {
        self.checker.check(self.config.endpoint_url()).await
    }
}
