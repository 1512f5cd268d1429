//! Async HTTP client for the keepsake JSON API.

use std::time::Duration;

use anyhow::Context;
use keepsake_core::{
  Error, Result,
  api::{KeepsakeApi, Resource},
  note::DraftNote,
};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

/// Async HTTP client for the keepsake REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct ApiClient {
  client:   Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: &str) -> anyhow::Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self {
      client,
      base_url: base_url.trim().trim_end_matches('/').to_string(),
    })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }
}

impl KeepsakeApi for ApiClient {
  type Response = Response;

  fn base_url(&self) -> &str {
    &self.base_url
  }

  /// `GET /api/couple`, `/api/memories` or `/api/notes`
  async fn get(&self, resource: Resource) -> Result<Response> {
    let path = resource.path();
    debug!(path, "GET");
    let resp = self
      .client
      .get(self.url(path))
      .send()
      .await
      .map_err(|e| Error::Transport(Box::new(e)))?;
    check_status("GET", path, resp)
  }

  async fn read_json(&self, response: Response) -> Result<Value> {
    response.json().await.map_err(|e| {
      if e.is_decode() {
        Error::Decode(Box::new(e))
      } else {
        Error::Transport(Box::new(e))
      }
    })
  }

  /// `POST /api/notes` — body: `{"author":…,"message":…,"mood":…}`
  async fn create_note(&self, draft: &DraftNote) -> Result<()> {
    let path = Resource::Notes.path();
    debug!(path, author = %draft.author, "POST");
    let resp = self
      .client
      .post(self.url(path))
      .json(draft)
      .send()
      .await
      .map_err(|e| Error::Transport(Box::new(e)))?;
    check_status("POST", path, resp).map(drop)
  }
}

fn check_status(method: &'static str, path: &'static str, resp: Response) -> Result<Response> {
  let status = resp.status();
  if !status.is_success() {
    return Err(Error::Status {
      method,
      path,
      status: status.as_u16(),
    });
  }
  Ok(resp)
}

#[cfg(test)]
mod tests {
  use std::sync::{Arc, Mutex};

  use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
  };
  use keepsake_core::{WorkflowError, view::{Submission, ViewController}};
  use serde_json::json;

  use super::*;
  use crate::testing::serve;

  type Notes = Arc<Mutex<Vec<Value>>>;

  async fn list_notes(State(notes): State<Notes>) -> Json<Value> {
    Json(Value::Array(notes.lock().unwrap().clone()))
  }

  async fn add_note(State(notes): State<Notes>, Json(draft): Json<DraftNote>) -> (StatusCode, Json<Value>) {
    let mut notes = notes.lock().unwrap();
    let id = notes.len() + 1;
    notes.push(json!({
      "id": id,
      "author": draft.author,
      "message": draft.message,
      "mood": draft.mood,
      "updated_at": "2024-02-14T08:00:00Z",
    }));
    (StatusCode::CREATED, Json(json!({ "id": id })))
  }

  fn keepsake_server(notes: Notes) -> Router {
    Router::new()
      .route(
        "/api/couple",
        get(|| async { Json(json!({ "person_a": "Fauzan", "person_b": "Aisyah" })) }),
      )
      .route(
        "/api/memories",
        get(|| async { Json(json!([{ "id": 1, "title": "First date", "event_date": "2021-06-12" }])) }),
      )
      .route("/api/notes", get(list_notes).post(add_note))
      .with_state(notes)
  }

  fn seed_notes() -> Notes {
    Arc::new(Mutex::new(vec![
      json!({ "id": 1, "author": "Aisyah", "message": "Good morning" }),
      json!({ "id": 2, "author": "Fauzan", "message": "Lunch?", "mood": "hungry" }),
    ]))
  }

  // ── Client ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn trailing_slash_is_ignored() {
    let base = serve(keepsake_server(seed_notes())).await;
    let client = ApiClient::new(&format!("{base}/")).unwrap();
    assert_eq!(client.base_url(), base);

    let resp = client.get(Resource::Notes).await.unwrap();
    let body = client.read_json(resp).await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);
  }

  #[tokio::test]
  async fn non_success_status_is_an_error() {
    let base = serve(Router::new().route(
      "/api/couple",
      get(|| async { (StatusCode::NOT_FOUND, "missing") }),
    ))
    .await;
    let client = ApiClient::new(&base).unwrap();

    let err = client.get(Resource::Couple).await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 404, path: "/api/couple", .. }));
  }

  #[tokio::test]
  async fn html_body_is_a_decode_error() {
    let base = serve(Router::new().route(
      "/api/memories",
      get(|| async { "<html>oops</html>" }),
    ))
    .await;
    let client = ApiClient::new(&base).unwrap();

    let resp = client.get(Resource::Memories).await.unwrap();
    assert!(matches!(client.read_json(resp).await, Err(Error::Decode(_))));
  }

  #[tokio::test]
  async fn unreachable_server_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{addr}")).unwrap();
    assert!(matches!(client.get(Resource::Notes).await, Err(Error::Transport(_))));
  }

  // ── End to end through the view controller ──────────────────────────────────

  #[tokio::test]
  async fn load_then_post_a_note() {
    let notes = seed_notes();
    let base = serve(keepsake_server(notes.clone())).await;
    let mut view = ViewController::new(ApiClient::new(&base).unwrap(), "Fauzan");

    view.load().await;
    assert_eq!(view.state().error, None);
    assert_eq!(view.state().couple.as_ref().unwrap().person_a, "Fauzan");
    assert_eq!(view.state().memories.len(), 1);
    assert_eq!(view.state().notes.len(), 2);

    view.draft_mut().message = "Hi".into();
    assert_eq!(view.submit_note().await.unwrap(), Submission::Posted);

    let state = view.state();
    assert_eq!(state.notes.len(), 3);
    assert_eq!(state.notes[2].message, "Hi");
    assert_eq!(state.notes[2].mood, None);
    assert_eq!(state.draft.message, "");
    assert_eq!(state.draft.author, "Fauzan");
    assert_eq!(notes.lock().unwrap()[2]["mood"], json!(""));
  }

  #[tokio::test]
  async fn one_failing_endpoint_fails_the_load() {
    let base = serve(
      Router::new()
        .route("/api/couple", get(|| async { Json(json!({ "person_a": "Fauzan" })) }))
        .route("/api/memories", get(|| async { Json(json!([])) }))
        .route("/api/notes", get(|| async { StatusCode::INTERNAL_SERVER_ERROR })),
    )
    .await;
    let mut view = ViewController::new(ApiClient::new(&base).unwrap(), "Fauzan");

    view.load().await;
    assert!(!view.state().loading);
    assert_eq!(view.state().error.as_deref(), Some("Failed to fetch data"));
    assert_eq!(view.state().couple, None);
  }

  #[tokio::test]
  async fn rejected_post_keeps_the_draft() {
    let notes = seed_notes();
    let list = notes.clone();
    let base = serve(
      Router::new()
        .route("/api/couple", get(|| async { Json(json!({})) }))
        .route("/api/memories", get(|| async { Json(json!([])) }))
        .route(
          "/api/notes",
          get(list_notes).post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .with_state(list),
    )
    .await;
    let mut view = ViewController::new(ApiClient::new(&base).unwrap(), "Fauzan");
    view.load().await;
    view.draft_mut().message = "Hi".into();
    view.draft_mut().mood = "shy".into();

    let err = view.submit_note().await.unwrap_err();
    assert!(matches!(err, WorkflowError::Add(Error::Status { status: 500, .. })));
    assert_eq!(view.state().notes.len(), 2);
    assert_eq!(view.state().draft.message, "Hi");
    assert_eq!(view.state().draft.mood, "shy");
    assert_eq!(view.state().error, None);
    assert_eq!(notes.lock().unwrap().len(), 2);
  }
}
