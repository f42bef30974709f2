pub mod config;
pub mod error;
pub mod shell;
pub mod summarize;
pub mod youtube;

use async_trait::async_trait;

use crate::error::Error;

/// One available transcript track, keyed by human-readable display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub name: String,
    pub code: String,
}

/// Narrow interface to the transcript-retrieval service
#[async_trait]
pub trait TranscriptService {
    /// List the transcript languages available for a video. Display names are
    /// unique; when two codes share a name, the later track's code wins.
    async fn list_languages(&self, video_id: &str) -> Result<Vec<LanguageOption>, Error>;

    /// Fetch the transcript for an exact language code, segments joined with a
    /// single space in document order. Never returns an empty string.
    async fn fetch_text(&self, video_id: &str, code: &str) -> Result<String, Error>;
}

/// Narrow interface to the generative completion service
#[async_trait]
pub trait CompletionService {
    async fn generate(&self, transcript_text: &str) -> Result<String, Error>;
}

/// Extract video ID from various YouTube URL formats
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    if input.contains("youtube.com") {
        // youtube.com/watch?v=ID
        if let Some(caps) = regex::Regex::new(r"youtube\.com/watch\?(?:[^#]*&)?v=([^&#]+)")
            .unwrap()
            .captures(input)
        {
            return Some(caps[1].to_string());
        }

        // youtube.com/embed/ID (trailing query stripped)
        if let Some(caps) = regex::Regex::new(r"youtube\.com/embed/([^?#]+)")
            .unwrap()
            .captures(input)
        {
            return Some(caps[1].to_string());
        }

        // youtube.com/v/ID (trailing query stripped)
        if let Some(caps) = regex::Regex::new(r"youtube\.com/v/([^?#]+)")
            .unwrap()
            .captures(input)
        {
            return Some(caps[1].to_string());
        }

        return None;
    }

    // youtu.be/ID — the entire path minus the leading slash
    if input.contains("youtu.be") {
        if let Some(caps) = regex::Regex::new(r"youtu\.be/([^?#]+)").unwrap().captures(input) {
            return Some(caps[1].to_string());
        }
        return None;
    }

    // Bare 11-character video ID
    if regex::Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap().is_match(input) {
        return Some(input.to_string());
    }

    None
}
