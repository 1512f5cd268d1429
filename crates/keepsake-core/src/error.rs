//! Error types for `keepsake-core`.

use thiserror::Error;

/// Boxed transport-level cause, kept opaque so this crate stays HTTP-free.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A single API call failed.
#[derive(Debug, Error)]
pub enum Error {
  #[error("{method} {path} → {status}")]
  Status {
    method: &'static str,
    path:   &'static str,
    status: u16,
  },

  #[error("request failed: {0}")]
  Transport(#[source] BoxError),

  #[error("response body is not valid JSON: {0}")]
  Decode(#[source] BoxError),
}

/// A view-controller workflow failed.
///
/// The display strings are the static messages shown to the user; the
/// underlying [`Error`] is kept as the source for logging.
#[derive(Debug, Error)]
pub enum WorkflowError {
  #[error("Failed to fetch data")]
  Load(#[source] Error),

  #[error("Failed to add note")]
  Add(#[source] Error),

  #[error("Failed to refresh notes")]
  Refresh(#[source] Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
