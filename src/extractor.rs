use async_trait::async_trait;
use tokio::process::Command;

use crate::{ExtractorError, MediaMetadata, Result, models::ExtractionConfig};

/// Boundary to the external extraction backend. Implementations return a
/// typed result per URL; callers decide whether a failure is row-level or
/// fatal.
#[async_trait]
pub trait MetadataExtractor: Send + Sync {
    async fn extract(&self, url: &str) -> Result<MediaMetadata>;
}

/// Adapter around the yt-dlp binary. Metadata is fetched with
/// --dump-json --skip-download, one subprocess per URL. No timeout is
/// imposed; a hanging extraction blocks the caller.
pub struct YtDlpExtractor {
    config: ExtractionConfig,
}

impl YtDlpExtractor {
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }
}

impl Default for YtDlpExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataExtractor for YtDlpExtractor {
    async fn extract(&self, url: &str) -> Result<MediaMetadata> {
        let mut cmd = Command::new(&self.config.binary);
        cmd.arg("--dump-json")
            .arg("--skip-download")
            .arg("--no-playlist")
            .arg("--quiet");

        if self.config.force_generic {
            cmd.arg("--force-generic-extractor");
        }
        for arg in &self.config.extra_args {
            cmd.arg(arg);
        }
        cmd.arg(url);

        tracing::debug!("Running {} for {}", self.config.binary, url);

        let output = cmd
            .output()
            .await
            .map_err(|source| ExtractorError::CommandLaunch {
                binary: self.config.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ExtractorError::ExtractionFailed {
                url: url.to_string(),
                stderr,
            });
        }

        let json = std::str::from_utf8(&output.stdout)
            .map_err(|_| ExtractorError::InvalidOutput(url.to_string()))?;
        let metadata: MediaMetadata = serde_json::from_str(json)?;

        Ok(metadata)
    }
}
