use std::sync::Arc;
use std::time::Instant;

use crate::{
    MediaMetadata, MetadataExtractor, Platform, ProfileResolver, ResultRecord,
};

/// Split a free-text block into trimmed, non-empty URL lines. Order and
/// duplicates are preserved.
pub fn collect_urls(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sequential batch runner. Produces exactly one record per input URL, in
/// input order; adapter failures become row-level errors and never abort the
/// batch.
pub struct BatchRunner {
    extractor: Arc<dyn MetadataExtractor>,
    resolver: ProfileResolver,
}

impl BatchRunner {
    pub fn new(extractor: Arc<dyn MetadataExtractor>) -> Self {
        Self {
            extractor,
            resolver: ProfileResolver::new(),
        }
    }

    pub fn with_resolver(extractor: Arc<dyn MetadataExtractor>, resolver: ProfileResolver) -> Self {
        Self {
            extractor,
            resolver,
        }
    }

    pub async fn run(&self, urls: &[String]) -> Vec<ResultRecord> {
        self.run_with_progress(urls, |_, _| {}).await
    }

    /// Run the batch, invoking `progress` with (completed, total) after each
    /// item.
    pub async fn run_with_progress<F>(&self, urls: &[String], mut progress: F) -> Vec<ResultRecord>
    where
        F: FnMut(usize, usize),
    {
        let total = urls.len();
        let mut results = Vec::with_capacity(total);

        for (i, url) in urls.iter().enumerate() {
            let start = Instant::now();

            let record = match self.extractor.extract(url).await {
                Ok(metadata) => self.record_for(url, &metadata),
                Err(e) => {
                    tracing::warn!("Extraction failed for {}: {}", url, e);
                    ResultRecord::failure(url, e.to_string())
                }
            };

            tracing::info!(
                "Processed {} as {} in {:?} ({}/{})",
                url,
                record.platform,
                start.elapsed(),
                i + 1,
                total
            );

            results.push(record);
            progress(i + 1, total);
        }

        results
    }

    fn record_for(&self, url: &str, metadata: &MediaMetadata) -> ResultRecord {
        let platform = Platform::from_url(url);
        match self.resolver.resolve(platform, metadata) {
            Some(profile_url) => match platform {
                Platform::Facebook => ResultRecord::facebook(
                    url,
                    metadata.uploader.clone(),
                    metadata.uploader_id.clone(),
                    profile_url,
                ),
                Platform::Instagram => {
                    ResultRecord::instagram(url, metadata.channel.clone(), profile_url)
                }
                Platform::Unknown => ResultRecord::unsupported(url),
            },
            None => ResultRecord::unsupported(url),
        }
    }
}
