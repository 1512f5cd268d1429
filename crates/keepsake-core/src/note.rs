//! Love notes, and the draft the form edits before posting one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::loose;

/// Author pre-filled into a fresh draft when none is configured.
pub const DEFAULT_AUTHOR: &str = "Fauzan";

/// A note as listed by `GET /api/notes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
  #[serde(default, deserialize_with = "loose::opt_text")]
  pub id:         Option<String>,
  #[serde(default, deserialize_with = "loose::text")]
  pub author:     String,
  #[serde(default, deserialize_with = "loose::text")]
  pub message:    String,
  #[serde(default, deserialize_with = "loose::opt_text")]
  pub mood:       Option<String>,
  #[serde(default, deserialize_with = "loose::opt_text")]
  pub updated_at: Option<String>,
}

impl Note {
  /// Normalise a `GET /api/notes` payload. Server order is kept.
  pub fn from_payload(payload: Value) -> Vec<Self> {
    loose::records(payload, "note")
  }
}

/// The not-yet-submitted note held by the form.
///
/// Serialises as the `POST /api/notes` body; an empty mood is sent as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftNote {
  pub author:  String,
  pub message: String,
  pub mood:    String,
}

impl DraftNote {
  /// A blank draft signed by `author`.
  pub fn new(author: impl Into<String>) -> Self {
    Self {
      author:  author.into(),
      message: String::new(),
      mood:    String::new(),
    }
  }

  /// Only drafts with a non-blank message are ever sent.
  pub fn is_submittable(&self) -> bool {
    !self.message.trim().is_empty()
  }
}
