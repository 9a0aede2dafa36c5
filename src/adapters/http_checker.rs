use crate::domain::model::CheckResult;
use crate::domain::ports::EndpointChecker;
use crate::utils::error::{Result, TaskError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Single GET health check. Uses the client's default redirect policy and no timeout.
#[derive(Debug, Clone)]
pub struct HttpChecker {
    client: Client,
}

impl HttpChecker {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EndpointChecker for HttpChecker {
    async fn check(&self, url: &str) -> Result<CheckResult> {
        tracing::debug!("Making GET request to: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Endpoint response status: {}", status);

        // Release the connection before deciding on the outcome.
        drop(response);

        if status != StatusCode::OK {
            return Err(TaskError::UnexpectedStatusError {
                status: status.as_u16(),
            });
        }

        Ok(CheckResult {
            status: status.as_u16(),
        })
    }
}
