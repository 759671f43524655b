use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("Failed to launch {binary}: {source}")]
    CommandLaunch {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Extraction failed for {url}: {stderr}")]
    ExtractionFailed { url: String, stderr: String },

    #[error("Extractor produced non-UTF-8 output for {0}")]
    InvalidOutput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractorError>;
