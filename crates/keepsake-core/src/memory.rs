//! Memories — dated entries on the timeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::loose;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
  #[serde(default, deserialize_with = "loose::opt_text")]
  pub id:          Option<String>,
  #[serde(default, deserialize_with = "loose::text")]
  pub title:       String,
  #[serde(default, deserialize_with = "loose::opt_text")]
  pub event_date:  Option<String>,
  #[serde(default, deserialize_with = "loose::opt_text")]
  pub location:    Option<String>,
  #[serde(default, deserialize_with = "loose::opt_text")]
  pub description: Option<String>,
  #[serde(default, deserialize_with = "loose::opt_text")]
  pub photo_url:   Option<String>,
}

impl Memory {
  /// Normalise a `GET /api/memories` payload. Server order is kept.
  pub fn from_payload(payload: Value) -> Vec<Self> {
    loose::records(payload, "memory")
  }
}
