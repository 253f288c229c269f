#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::Mutex};

/// The one-game payload used across tests: a single executed pin.
pub fn single_game_payload() -> Value {
    json!({
        "game_1": {
            "executed": [{"move_number": 5, "tactic": "pin", "piece": "Bb5", "target": "Nc6"}],
            "missed": [],
            "allowed": []
        }
    })
}

pub const SAMPLE_PGN: &[u8] = br#"[Event "Casual"]
[White "Player1"]
[Black "Player2"]
[Result "1-0"]

1. e4 e5 2. Nf3 Nc6 3. Bb5 a6 1-0"#;

/// How the mock service answers one request.
#[derive(Clone, Debug)]
pub enum Reply {
    Json(Value),
    Status(StatusCode),
    Text(&'static str),
    Delayed(Duration, Value),
}

/// A multipart field as the mock service received it.
#[derive(Clone, Debug)]
pub struct Upload {
    pub field: String,
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
struct MockState {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    uploads: Arc<Mutex<Vec<Upload>>>,
}

async fn analyze(State(state): State<MockState>, mut multipart: Multipart) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        state.uploads.lock().await.push(Upload {
            field: name,
            file_name,
            bytes,
        });
    }

    // Replies are served in order; the last one repeats.
    let reply = {
        let mut replies = state.replies.lock().await;
        if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().cloned()
        }
    };

    match reply {
        Some(Reply::Json(body)) => Json(body).into_response(),
        Some(Reply::Status(status)) => (status, "analysis failed").into_response(),
        Some(Reply::Text(body)) => (StatusCode::OK, body).into_response(),
        Some(Reply::Delayed(delay, body)) => {
            tokio::time::sleep(delay).await;
            Json(body).into_response()
        }
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// Start a mock analysis service on an ephemeral port.
/// Returns its base URL and the uploads it has received.
pub async fn spawn_service(replies: Vec<Reply>) -> (String, Arc<Mutex<Vec<Upload>>>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock service");
    let addr = listener.local_addr().expect("mock service address");

    let uploads = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        replies: Arc::new(Mutex::new(replies.into())),
        uploads: uploads.clone(),
    };
    let app = Router::new()
        .route("/analyze", post(analyze))
        .with_state(state);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{addr}"), uploads)
}

/// Base URL of a port nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe port");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}
