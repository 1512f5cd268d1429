//! The seam between the view controller and the network.

use serde_json::Value;

use crate::{Result, note::DraftNote};

/// The three resources loaded on start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
  Couple,
  Memories,
  Notes,
}

impl Resource {
  /// Path relative to the base URL.
  pub const fn path(self) -> &'static str {
    match self {
      Resource::Couple => "/api/couple",
      Resource::Memories => "/api/memories",
      Resource::Notes => "/api/notes",
    }
  }
}

/// Access to the keepsake REST API.
///
/// Fetching is split in two so callers can wait for every status line
/// before reading any body.
pub trait KeepsakeApi {
  /// A response that passed the status check and whose body is unread.
  type Response;

  /// The resolved base URL requests are made against.
  fn base_url(&self) -> &str;

  /// `GET <resource>`; non-2xx statuses are errors.
  async fn get(&self, resource: Resource) -> Result<Self::Response>;

  /// Read a response body as JSON.
  async fn read_json(&self, response: Self::Response) -> Result<Value>;

  /// `POST /api/notes` with `draft` as the JSON body. The response body is
  /// ignored.
  async fn create_note(&self, draft: &DraftNote) -> Result<()>;
}
