use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to write outcome line: {source}")]
    WriteLine {
        #[source]
        source: std::io::Error,
    },
}
