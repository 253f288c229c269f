//! One analysis workflow: a held file, a request state and a client.
//!
//! Sessions share nothing. To drive one from several tasks, put it behind a
//! `tokio::sync::Mutex` and use `begin_submit` / `complete` so the lock is not
//! held while the request is in flight.

use tracing::{debug, info, warn};

use crate::client::AnalysisClient;
use crate::config::ClientConfig;
use crate::controller::{PendingAnalysis, RequestState};
use crate::error::AnalyzeError;
use crate::intake::{
    CandidateFile, DragEvent, DragState, FileIntake, IntakeSource, Rejection, ValidatedFile,
};
use crate::model::AnalysisResult;
use crate::view::ResultView;

#[derive(Debug)]
pub struct AnalyzerSession {
    intake: FileIntake,
    state: RequestState,
    client: AnalysisClient,
}

impl AnalyzerSession {
    pub fn new(config: &ClientConfig) -> Result<Self, AnalyzeError> {
        Ok(Self::with_client(AnalysisClient::new(config)?))
    }

    pub fn with_client(client: AnalysisClient) -> Self {
        Self {
            intake: FileIntake::new(),
            state: RequestState::Idle,
            client,
        }
    }

    /// Offer a picked or dropped file. On acceptance the previous result and
    /// error are cleared; a rejection changes nothing but the error message.
    ///
    /// While a request is in flight the state stays `Loading`, and its
    /// outcome lands next to the newly held file when it completes.
    pub fn select_file(
        &mut self,
        source: IntakeSource,
        candidate: Option<CandidateFile>,
    ) -> Result<&ValidatedFile, Rejection> {
        let file = self.intake.select_file(source, candidate)?;
        self.state.clear();
        Ok(file)
    }

    pub fn on_drag(&mut self, event: DragEvent) -> DragState {
        self.intake.on_drag(event)
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit(self.intake.held().is_some())
    }

    /// Move to `Loading` and hand out the request to send.
    ///
    /// `None` when no file is held or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<PendingAnalysis> {
        let file = self.intake.held()?.clone();
        if !self.state.begin() {
            debug!(file = %file.name(), "Submission ignored, request already in flight");
            return None;
        }
        self.intake.clear_rejection();

        info!(
            file = %file.name(),
            bytes = file.len(),
            endpoint = %self.client.endpoint(),
            "Submitting PGN for analysis"
        );
        Some(PendingAnalysis {
            client: self.client.clone(),
            file,
        })
    }

    /// Apply the outcome of a request started with `begin_submit`.
    pub fn complete(&mut self, outcome: Result<AnalysisResult, AnalyzeError>) -> &RequestState {
        match &outcome {
            Ok(result) => info!(games = result.len(), "Analysis complete"),
            Err(e) => warn!(error = %e, "Analysis failed"),
        }
        if !self.state.finish(outcome) {
            debug!("Dropped analysis outcome, no request in flight");
        }
        &self.state
    }

    /// Submit the held file and wait for the service. No-op without a file or
    /// while a request is in flight.
    pub async fn submit(&mut self) -> &RequestState {
        if let Some(pending) = self.begin_submit() {
            let outcome = pending.send().await;
            self.complete(outcome);
        }
        &self.state
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn file(&self) -> Option<&ValidatedFile> {
        self.intake.held()
    }

    pub fn drag_state(&self) -> DragState {
        self.intake.drag_state()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.state.result()
    }

    /// Message to show the user: the latest intake rejection, else the
    /// request failure.
    pub fn error(&self) -> Option<&str> {
        self.intake
            .rejection()
            .map(|r| r.message.as_str())
            .or_else(|| self.state.error())
    }

    pub fn view(&self) -> Option<ResultView<'_>> {
        self.result().map(ResultView::new)
    }
}
