use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::AnalyzeError;
use crate::intake::ValidatedFile;
use crate::model::AnalysisResult;

/// Multipart field the service reads the upload from.
pub const UPLOAD_FIELD: &str = "pgn_file";

/// HTTP client for the external tactics service.
#[derive(Clone, Debug)]
pub struct AnalysisClient {
    client: Client,
    endpoint: Url,
}

impl AnalysisClient {
    pub fn new(config: &ClientConfig) -> Result<Self, AnalyzeError> {
        let endpoint = analyze_url(&config.base_url)?;

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, endpoint })
    }

    /// Full URL of the analyze endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Upload one PGN file and decode the per-game breakdown.
    pub async fn analyze(&self, file: &ValidatedFile) -> Result<AnalysisResult, AnalyzeError> {
        let part = Part::bytes(file.bytes().to_vec()).file_name(file.name().to_string());
        let form = Form::new().part(UPLOAD_FIELD, part);

        let resp = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalyzeError::Transport(e.to_string()))?;

        let status = resp.status();
        debug!(%status, endpoint = %self.endpoint, "Analysis service responded");

        if !status.is_success() {
            return Err(AnalyzeError::Service(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| AnalyzeError::Transport(format!("Body read error: {e}")))?;

        AnalysisResult::from_json(&body)
    }
}

/// `{base_url}/analyze`, tolerating a trailing slash on the base.
fn analyze_url(base_url: &str) -> Result<Url, AnalyzeError> {
    let trimmed = base_url.trim_end_matches('/');
    let url = Url::parse(&format!("{trimmed}/analyze"))
        .map_err(|e| AnalyzeError::Config(format!("invalid base URL {base_url:?}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AnalyzeError::Config(format!(
            "unsupported URL scheme {other:?} in {base_url:?}"
        ))),
    }
}
