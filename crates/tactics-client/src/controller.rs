//! Request lifecycle: `Idle → Loading → {Succeeded, Failed}`, and back to
//! `Loading` on the next submission.
//!
//! Transitions are plain methods on `RequestState` so they can be driven and
//! tested without any HTTP. `PendingAnalysis` is the single in-flight request.

use crate::client::AnalysisClient;
use crate::error::AnalyzeError;
use crate::intake::ValidatedFile;
use crate::model::AnalysisResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(AnalysisResult),
    /// User-facing failure message
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Whether the submit affordance should be enabled.
    pub fn can_submit(&self, has_file: bool) -> bool {
        has_file && !self.is_loading()
    }

    /// Enter `Loading`, dropping any previous result or error.
    ///
    /// Returns false and leaves the state alone if a request is already in
    /// flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = RequestState::Loading;
        true
    }

    /// Apply the outcome of the in-flight request. Ignored unless `Loading`.
    pub fn finish(&mut self, outcome: Result<AnalysisResult, AnalyzeError>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match outcome {
            Ok(result) => RequestState::Succeeded(result),
            Err(e) => RequestState::Failed(e.to_string()),
        };
        true
    }

    /// Forget a finished result or error. An in-flight request is untouched.
    pub fn clear(&mut self) {
        if !self.is_loading() {
            *self = RequestState::Idle;
        }
    }
}

/// An upload that has been started but not yet sent.
///
/// Owns everything it needs, so the session is free while it is awaited.
#[derive(Debug)]
pub struct PendingAnalysis {
    pub(crate) client: AnalysisClient,
    pub(crate) file: ValidatedFile,
}

impl PendingAnalysis {
    pub fn file(&self) -> &ValidatedFile {
        &self.file
    }

    pub async fn send(self) -> Result<AnalysisResult, AnalyzeError> {
        self.client.analyze(&self.file).await
    }
}
