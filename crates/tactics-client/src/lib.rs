pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod intake;
pub mod model;
pub mod report;
pub mod session;
pub mod view;

pub use client::AnalysisClient;
pub use config::ClientConfig;
pub use controller::{PendingAnalysis, RequestState};
pub use error::AnalyzeError;
pub use intake::{CandidateFile, DragEvent, DragState, IntakeSource, Rejection, RejectionReason};
pub use model::{AnalysisResult, GameTactics, Outcome, TacticEvent, TacticKind};
pub use session::AnalyzerSession;
