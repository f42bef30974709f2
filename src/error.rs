use thiserror::Error;

/// User-facing failure categories. Every external call is wrapped into one of
/// these at the point of the call; none of them is fatal to the process.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid YouTube URL. Please enter a valid YouTube video link.")]
    InvalidLink,

    #[error("Error fetching transcripts: {0}")]
    ListFailed(String),

    #[error("Error extracting transcript: {0}")]
    FetchFailed(String),

    #[error("API key not found. Please set the {0} environment variable.")]
    MissingApiKey(String),

    #[error("Error generating summary: {0}")]
    GenerationFailed(String),
}
