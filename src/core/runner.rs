use crate::core::Pipeline;
use crate::domain::model::RunSummary;
use crate::utils::error::Result;

/// Runs a pipeline's steps in order, stopping at the first failure.
pub struct TaskRunner<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TaskRunner<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let numbers = self.pipeline.ingest().await.inspect_err(|e| {
            tracing::error!("Step 1: reading numbers failed: {}", e);
        })?;
        tracing::info!("Step 1: read numbers. Count: {}.", numbers.len());

        let sum = self.pipeline.aggregate(&numbers);
        tracing::info!("Step 2: summed numbers. Sum: {}.", sum);

        let check = self.pipeline.verify().await.inspect_err(|e| {
            tracing::error!("Step 3: HTTP GET check failed: {}", e);
        })?;
        tracing::info!("Step 3: HTTP GET check. Status: {}.", check.status);

        Ok(RunSummary::new(&numbers, sum, check))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CheckResult, NumberList};
    use crate::utils::error::TaskError;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct StubPipeline {
        numbers: Option<Vec<i64>>,
        status: u16,
        verified: AtomicBool,
    }

    impl StubPipeline {
        fn new(numbers: Option<Vec<i64>>, status: u16) -> Self {
            Self {
                numbers,
                status,
                verified: AtomicBool::new(false),
            }
        }
    }

    #[async_trait::async_trait]
    impl Pipeline for StubPipeline {
        async fn ingest(&self) -> Result<NumberList> {
            match &self.numbers {
                Some(numbers) => Ok(NumberList::new(numbers.clone())),
                None => Err(TaskError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "numbers.json",
                ))),
            }
        }

        fn aggregate(&self, numbers: &NumberList) -> i128 {
            crate::core::aggregate::sum(numbers)
        }

        async fn verify(&self) -> Result<CheckResult> {
            self.verified.store(true, Ordering::SeqCst);
            if self.status != 200 {
                return Err(TaskError::UnexpectedStatusError {
                    status: self.status,
                });
            }
            Ok(CheckResult {
                status: self.status,
            })
        }
    }

    #[tokio::test]
    async fn test_run_returns_summary() {
        let runner = TaskRunner::new(StubPipeline::new(Some(vec![10, 20, 30]), 200));

        let summary = runner.run().await.unwrap();
        assert_eq!(
            summary,
            RunSummary {
                count: 3,
                sum: 60,
                status: 200
            }
        );
    }

    #[tokio::test]
    async fn test_ingest_failure_skips_remaining_steps() {
        let runner = TaskRunner::new(StubPipeline::new(None, 200));

        let err = runner.run().await.unwrap_err();
        assert!(matches!(err, TaskError::IoError(_)));
        assert!(!runner.pipeline.verified.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_status_failure_is_returned() {
        let runner = TaskRunner::new(StubPipeline::new(Some(vec![1]), 500));

        let err = runner.run().await.unwrap_err();
        assert!(matches!(err, TaskError::UnexpectedStatusError { status: 500 }));
        assert_eq!(err.exit_code(), 3);
    }
}
