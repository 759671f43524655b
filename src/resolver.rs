use std::collections::HashMap;

use crate::{MediaMetadata, Platform};

/// Rendered in place of a profile URL when the metadata carries no usable
/// identifier.
pub const PROFILE_NOT_AVAILABLE: &str = "Profile URL not available";

type ResolveFn = fn(&MediaMetadata) -> String;

/// Registry mapping a platform to its profile-URL rule. New platforms
/// register a rule instead of extending a central conditional.
pub struct ProfileResolver {
    rules: HashMap<Platform, ResolveFn>,
}

impl ProfileResolver {
    pub fn new() -> Self {
        let mut rules: HashMap<Platform, ResolveFn> = HashMap::new();
        rules.insert(Platform::Facebook, resolve_facebook);
        rules.insert(Platform::Instagram, resolve_instagram);
        Self { rules }
    }

    pub fn register(&mut self, platform: Platform, rule: ResolveFn) {
        self.rules.insert(platform, rule);
    }

    /// Returns None when the platform has no registered rule. Registered
    /// rules always produce a string: either a profile URL or the
    /// not-available sentinel.
    pub fn resolve(&self, platform: Platform, metadata: &MediaMetadata) -> Option<String> {
        self.rules.get(&platform).map(|rule| rule(metadata))
    }
}

impl Default for ProfileResolver {
    fn default() -> Self {
        Self::new()
    }
}

// Identifiers are interpolated verbatim, without percent-encoding. yt-dlp
// reports numeric ids and plain usernames here in practice.
fn resolve_facebook(metadata: &MediaMetadata) -> String {
    match metadata.uploader_id.as_deref() {
        Some(id) if !id.is_empty() => format!("https://www.facebook.com/profile.php?id={}", id),
        _ => uploader_url_or_sentinel(metadata),
    }
}

fn resolve_instagram(metadata: &MediaMetadata) -> String {
    match metadata.channel.as_deref() {
        Some(channel) if !channel.is_empty() => {
            format!("https://www.instagram.com/{}/", channel)
        }
        _ => uploader_url_or_sentinel(metadata),
    }
}

fn uploader_url_or_sentinel(metadata: &MediaMetadata) -> String {
    metadata
        .uploader_url
        .clone()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| PROFILE_NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(
        uploader_id: Option<&str>,
        uploader_url: Option<&str>,
        channel: Option<&str>,
    ) -> MediaMetadata {
        MediaMetadata {
            uploader: None,
            uploader_id: uploader_id.map(String::from),
            uploader_url: uploader_url.map(String::from),
            channel: channel.map(String::from),
        }
    }

    #[test]
    fn test_facebook_uploader_id() {
        let resolver = ProfileResolver::new();
        let url = resolver
            .resolve(Platform::Facebook, &metadata(Some("123"), None, None))
            .unwrap();
        assert_eq!(url, "https://www.facebook.com/profile.php?id=123");
    }

    #[test]
    fn test_facebook_falls_back_to_uploader_url() {
        let resolver = ProfileResolver::new();
        let url = resolver
            .resolve(
                Platform::Facebook,
                &metadata(None, Some("https://fb.com/x"), None),
            )
            .unwrap();
        assert_eq!(url, "https://fb.com/x");
    }

    #[test]
    fn test_facebook_empty_id_treated_as_absent() {
        let resolver = ProfileResolver::new();
        let url = resolver
            .resolve(
                Platform::Facebook,
                &metadata(Some(""), Some("https://fb.com/x"), None),
            )
            .unwrap();
        assert_eq!(url, "https://fb.com/x");
    }

    #[test]
    fn test_facebook_sentinel_when_nothing_usable() {
        let resolver = ProfileResolver::new();
        let url = resolver
            .resolve(Platform::Facebook, &metadata(None, None, None))
            .unwrap();
        assert_eq!(url, PROFILE_NOT_AVAILABLE);
    }

    #[test]
    fn test_instagram_channel() {
        let resolver = ProfileResolver::new();
        let url = resolver
            .resolve(Platform::Instagram, &metadata(None, None, Some("abc")))
            .unwrap();
        assert_eq!(url, "https://www.instagram.com/abc/");
    }

    #[test]
    fn test_instagram_falls_back_to_uploader_url() {
        let resolver = ProfileResolver::new();
        let url = resolver
            .resolve(
                Platform::Instagram,
                &metadata(None, Some("https://www.instagram.com/abc"), None),
            )
            .unwrap();
        assert_eq!(url, "https://www.instagram.com/abc");
    }

    #[test]
    fn test_unknown_platform_has_no_rule() {
        let resolver = ProfileResolver::new();
        assert!(resolver
            .resolve(Platform::Unknown, &metadata(Some("123"), None, None))
            .is_none());
    }

    #[test]
    fn test_identifier_passed_through_verbatim() {
        // No percent-encoding is applied to interpolated identifiers.
        let resolver = ProfileResolver::new();
        let url = resolver
            .resolve(Platform::Instagram, &metadata(None, None, Some("a b&c")))
            .unwrap();
        assert_eq!(url, "https://www.instagram.com/a b&c/");
    }
}
