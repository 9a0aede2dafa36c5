use crate::domain::model::NumberList;
use crate::domain::ports::NumberSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a JSON document of the form `{"numbers": [1, 2, 3]}`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl NumberSource for FileSource {
    async fn load(&self) -> Result<NumberList> {
        tracing::debug!("Reading numbers from {}", self.path.display());
        let data = tokio::fs::read(&self.path).await?;
        let numbers: NumberList = serde_json::from_slice(&data)?;
        Ok(numbers)
    }
}
