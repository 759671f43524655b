use serde::{Deserialize, Serialize};

/// Social platform detected from a raw input URL.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Platform {
    Facebook,
    Instagram,
    Unknown,
}

impl Platform {
    /// Pure substring classification, evaluated in order. A URL containing
    /// both domains classifies as Facebook (first match wins). No URL syntax
    /// validation is performed.
    pub fn from_url(url: &str) -> Self {
        if url.contains("facebook.com") {
            Platform::Facebook
        } else if url.contains("instagram.com") {
            Platform::Instagram
        } else {
            Platform::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Unknown => "Unknown",
        }
    }
}

/// Subset of the yt-dlp JSON document consulted for profile resolution.
/// All fields are optional and unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaMetadata {
    pub uploader: Option<String>,
    pub uploader_id: Option<String>,
    pub uploader_url: Option<String>,
    pub channel: Option<String>,
}

/// One output row per input URL. The column set is the union over all row
/// shapes; cells that do not apply to a shape stay empty.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResultRecord {
    #[serde(rename = "Platform")]
    pub platform: String,

    #[serde(rename = "Input URL")]
    pub input_url: String,

    #[serde(rename = "Uploader")]
    pub uploader: Option<String>,

    #[serde(rename = "Uploader ID")]
    pub uploader_id: Option<String>,

    #[serde(rename = "Channel (Username)")]
    pub channel: Option<String>,

    #[serde(rename = "Profile URL")]
    pub profile_url: Option<String>,

    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl ResultRecord {
    pub fn facebook(
        input_url: &str,
        uploader: Option<String>,
        uploader_id: Option<String>,
        profile_url: String,
    ) -> Self {
        Self {
            platform: Platform::Facebook.as_str().to_string(),
            input_url: input_url.to_string(),
            uploader,
            uploader_id,
            channel: None,
            profile_url: Some(profile_url),
            error: None,
        }
    }

    pub fn instagram(input_url: &str, channel: Option<String>, profile_url: String) -> Self {
        Self {
            platform: Platform::Instagram.as_str().to_string(),
            input_url: input_url.to_string(),
            uploader: None,
            uploader_id: None,
            channel,
            profile_url: Some(profile_url),
            error: None,
        }
    }

    pub fn unsupported(input_url: &str) -> Self {
        Self {
            platform: Platform::Unknown.as_str().to_string(),
            input_url: input_url.to_string(),
            uploader: None,
            uploader_id: None,
            channel: None,
            profile_url: None,
            error: Some("Unsupported URL".to_string()),
        }
    }

    pub fn failure(input_url: &str, message: String) -> Self {
        Self {
            platform: "Error".to_string(),
            input_url: input_url.to_string(),
            uploader: None,
            uploader_id: None,
            channel: None,
            profile_url: None,
            error: Some(message),
        }
    }
}

/// Configuration for the yt-dlp subprocess.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Binary to invoke; resolved through PATH unless absolute.
    pub binary: String,

    /// Pass --force-generic-extractor.
    pub force_generic: bool,

    /// Additional arguments appended before the URL.
    pub extra_args: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            binary: "yt-dlp".to_string(),
            force_generic: true,
            extra_args: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_detection() {
        assert_eq!(
            Platform::from_url("https://www.facebook.com/reel/123"),
            Platform::Facebook
        );
        assert_eq!(
            Platform::from_url("https://www.instagram.com/reel/abc/"),
            Platform::Instagram
        );
        assert_eq!(
            Platform::from_url("https://www.youtube.com/watch?v=123"),
            Platform::Unknown
        );
    }

    #[test]
    fn test_both_domains_prefer_facebook() {
        // First match wins in evaluation order.
        let url = "https://www.facebook.com/share?next=https://www.instagram.com/abc/";
        assert_eq!(Platform::from_url(url), Platform::Facebook);
    }

    #[test]
    fn test_metadata_ignores_unknown_fields() {
        let json = r#"{
            "id": "123",
            "title": "some reel",
            "uploader": "Some Body",
            "uploader_id": "100044",
            "view_count": 42
        }"#;
        let metadata: MediaMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.uploader.as_deref(), Some("Some Body"));
        assert_eq!(metadata.uploader_id.as_deref(), Some("100044"));
        assert!(metadata.uploader_url.is_none());
        assert!(metadata.channel.is_none());
    }
}
