//! The couple profile — the singleton record at the top of the page.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::loose;

/// The two people and their relationship metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoupleProfile {
  #[serde(default, deserialize_with = "loose::text")]
  pub person_a:    String,
  #[serde(default, deserialize_with = "loose::text")]
  pub person_b:    String,
  #[serde(default, deserialize_with = "loose::opt_text")]
  pub anniversary: Option<String>,
  #[serde(default, deserialize_with = "loose::opt_text")]
  pub story:       Option<String>,
}

impl CoupleProfile {
  /// Normalise a `GET /api/couple` payload.
  ///
  /// A profile exists iff the payload is a mapping with at least one key;
  /// `null`, `{}` and non-mappings all mean "no profile yet".
  pub fn from_payload(payload: Value) -> Option<Self> {
    match payload {
      Value::Object(map) if !map.is_empty() => {
        let profile: Self = serde_json::from_value(Value::Object(map)).unwrap_or_else(|e| {
          debug!(error = %e, "unreadable couple profile; keeping it empty");
          Self::default()
        });
        Some(profile)
      }
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn populated_profile() {
    let profile = CoupleProfile::from_payload(json!({
      "person_a": "Fauzan",
      "person_b": "Aisyah",
      "anniversary": "2021-06-12",
      "story": "Met at a bookshop.",
      "id": 1
    }))
    .unwrap();

    assert_eq!(profile.person_a, "Fauzan");
    assert_eq!(profile.person_b, "Aisyah");
    assert_eq!(profile.anniversary.as_deref(), Some("2021-06-12"));
    assert_eq!(profile.story.as_deref(), Some("Met at a bookshop."));
  }

  #[test]
  fn empty_or_missing_profile_is_absent() {
    assert_eq!(CoupleProfile::from_payload(json!({})), None);
    assert_eq!(CoupleProfile::from_payload(json!(null)), None);
    assert_eq!(CoupleProfile::from_payload(json!(["a", "b"])), None);
    assert_eq!(CoupleProfile::from_payload(json!("couple")), None);
  }

  #[test]
  fn any_key_makes_a_profile() {
    let profile = CoupleProfile::from_payload(json!({ "detail": "not found" })).unwrap();
    assert_eq!(profile, CoupleProfile::default());
  }
}
