//! Analysis client error types

use thiserror::Error;

/// Everything that can end a submission in the `Failed` state. Intake
/// rejections happen before any request and use `intake::Rejection` instead.
///
/// The `Display` text is what the user sees, so keep it short.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Could not reach the analysis service: {0}")]
    Transport(String),

    #[error("Failed to analyze PGN file (HTTP {0})")]
    Service(u16),

    #[error("Analysis service returned an unreadable response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for AnalyzeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            AnalyzeError::Config(e.to_string())
        } else {
            AnalyzeError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AnalyzeError {
    fn from(e: serde_json::Error) -> Self {
        AnalyzeError::MalformedResponse(e.to_string())
    }
}
