//! Bulk profile URL extraction for Facebook and Instagram reels.
//!
//! Metadata extraction is delegated to the external yt-dlp binary; this
//! crate classifies each input URL, derives a best-effort profile URL from
//! the returned metadata, and renders the batch as a table plus CSV export.

pub mod batch;
pub mod error;
pub mod export;
pub mod extractor;
pub mod models;
pub mod resolver;

pub use batch::{collect_urls, BatchRunner};
pub use error::{ExtractorError, Result};
pub use extractor::{MetadataExtractor, YtDlpExtractor};
pub use models::{ExtractionConfig, MediaMetadata, Platform, ResultRecord};
pub use resolver::{ProfileResolver, PROFILE_NOT_AVAILABLE};
