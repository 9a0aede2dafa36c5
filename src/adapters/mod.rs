// Adapters layer: concrete sources and checkers behind the domain ports.

pub mod file_source;
pub mod http_checker;
pub mod stream_source;

pub use file_source::FileSource;
pub use http_checker::HttpChecker;
pub use stream_source::StreamSource;

use crate::domain::model::SourceMode;
use crate::domain::ports::NumberSource;
use tokio::io::BufReader;

/// Picks the input adapter for `mode`. `input_path` is only used in file mode.
pub fn source_for(mode: SourceMode, input_path: &str) -> Box<dyn NumberSource> {
    match mode {
        SourceMode::File => Box::new(FileSource::new(input_path)),
        SourceMode::Stdin => Box::new(StreamSource::new(BufReader::new(tokio::io::stdin()))),
    }
}
