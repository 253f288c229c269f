//! File intake: acceptance policy for candidate PGN files and drag feedback.
//!
//! The check is name-based only. File contents are never inspected here, so a
//! `.pgn` file with garbage inside is accepted and left for the service to
//! reject.

use std::fmt;

use tracing::{info, warn};

/// Extension a file name must end with, compared case-sensitively.
pub const PGN_EXTENSION: &str = ".pgn";

/// A file the user picked or dropped, not yet checked.
#[derive(Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl fmt::Debug for CandidateFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A candidate that passed the acceptance policy. Only `FileIntake` builds these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFile(CandidateFile);

impl ValidatedFile {
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0.bytes
    }

    pub fn len(&self) -> usize {
        self.0.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.bytes.is_empty()
    }
}

/// Where a candidate came from. Only changes the wording of the rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeSource {
    Picker,
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    InvalidExtension,
    /// The picker or drop event carried no file at all
    NoFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub reason: RejectionReason,
    pub message: String,
}

impl Rejection {
    fn new(reason: RejectionReason, source: IntakeSource) -> Self {
        let message = match source {
            IntakeSource::Picker => "Please select a valid PGN file",
            IntakeSource::Drop => "Please drop a valid PGN file",
        };
        Self {
            reason,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Rejection {}

/// Drop-zone highlight state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Inactive,
    Dragging,
    Dropped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragState {
    pub fn apply(self, event: DragEvent) -> Self {
        match event {
            DragEvent::Enter | DragEvent::Over => DragState::Dragging,
            DragEvent::Leave => DragState::Inactive,
            DragEvent::Drop => DragState::Dropped,
        }
    }

    pub fn is_active(self) -> bool {
        self == DragState::Dragging
    }
}

pub fn has_pgn_extension(name: &str) -> bool {
    name.ends_with(PGN_EXTENSION)
}

/// Holds at most one validated file.
#[derive(Debug, Default)]
pub struct FileIntake {
    held: Option<ValidatedFile>,
    drag: DragState,
    rejection: Option<Rejection>,
}

impl FileIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the acceptance policy on a picked or dropped file.
    ///
    /// A rejection leaves the held file untouched.
    pub fn select_file(
        &mut self,
        source: IntakeSource,
        candidate: Option<CandidateFile>,
    ) -> Result<&ValidatedFile, Rejection> {
        let candidate = match candidate {
            Some(c) => c,
            None => return Err(self.reject(source, RejectionReason::NoFile, None)),
        };

        if !has_pgn_extension(&candidate.name) {
            return Err(self.reject(
                source,
                RejectionReason::InvalidExtension,
                Some(candidate.name.as_str()),
            ));
        }

        info!(file = %candidate.name, bytes = candidate.bytes.len(), ?source, "PGN file accepted");
        self.rejection = None;
        Ok(&*self.held.insert(ValidatedFile(candidate)))
    }

    fn reject(
        &mut self,
        source: IntakeSource,
        reason: RejectionReason,
        name: Option<&str>,
    ) -> Rejection {
        warn!(file = name.unwrap_or(""), ?reason, ?source, "File rejected");
        let rejection = Rejection::new(reason, source);
        self.rejection = Some(rejection.clone());
        rejection
    }

    pub fn on_drag(&mut self, event: DragEvent) -> DragState {
        self.drag = self.drag.apply(event);
        self.drag
    }

    pub fn held(&self) -> Option<&ValidatedFile> {
        self.held.as_ref()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Most recent rejection, cleared by the next accepted file.
    pub fn rejection(&self) -> Option<&Rejection> {
        self.rejection.as_ref()
    }

    pub(crate) fn clear_rejection(&mut self) {
        self.rejection = None;
    }
}
