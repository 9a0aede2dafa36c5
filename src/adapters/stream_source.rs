use crate::domain::model::NumberList;
use crate::domain::ports::NumberSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::Mutex;

/// Reads one integer per line until the first line that is not an integer.
///
/// Reaching end of input also ends collection and keeps what was read so far.
/// Only a failing read is reported as an error.
pub struct StreamSource<R> {
    reader: Mutex<R>,
}

impl<R> StreamSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }
}

#[async_trait]
impl<R> NumberSource for StreamSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn load(&self) -> Result<NumberList> {
        let mut reader = self.reader.lock().await;
        let mut numbers = Vec::new();
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line).await? == 0 {
                tracing::debug!("End of input after {} numbers", numbers.len());
                break;
            }

            match line.trim().parse::<i64>() {
                Ok(number) => numbers.push(number),
                Err(_) => {
                    tracing::debug!("Stopping at non-integer line {:?}", line.trim());
                    break;
                }
            }
        }

        Ok(NumberList::new(numbers))
    }
}
