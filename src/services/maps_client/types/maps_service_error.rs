use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapsServiceError {
    #[error("Google Places API key is not configured")]
    MissingApiKey,
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("Failed to send request: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Google Places API responded with HTTP {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("Failed to get response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("Google Places API error: {status}{}", .message.as_deref().map(|m| format!(" ({m})")).unwrap_or_default())]
    UpstreamStatus {
        status: String,
        message: Option<String>,
    },
}
