use crate::utils::error::TaskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered integers read by the input step. Not modified after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberList {
    pub numbers: Vec<i64>,
}

impl NumberList {
    pub fn new(numbers: Vec<i64>) -> Self {
        Self { numbers }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.numbers
    }
}

impl From<Vec<i64>> for NumberList {
    fn from(numbers: Vec<i64>) -> Self {
        Self::new(numbers)
    }
}

/// Status of a completed health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    pub status: u16,
}

impl CheckResult {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub count: usize,
    pub sum: i128,
    pub status: u16,
}

impl RunSummary {
    pub fn new(numbers: &NumberList, sum: i128, check: CheckResult) -> Self {
        Self {
            count: numbers.len(),
            sum,
            status: check.status,
        }
    }
}

/// Where the input step reads numbers from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    #[default]
    File,
    Stdin,
}

impl FromStr for SourceMode {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(SourceMode::File),
            "stdin" => Ok(SourceMode::Stdin),
            other => Err(TaskError::config(format!(
                "unknown source '{}', expected either 'file' or 'stdin'",
                other
            ))),
        }
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceMode::File => write!(f, "file"),
            SourceMode::Stdin => write!(f, "stdin"),
        }
    }
}
