//! View state and the two workflows that mutate it.
//!
//! [`ViewController`] owns the single [`ViewState`] record. Apart from draft
//! editing, state only changes inside [`ViewController::load`] and
//! [`ViewController::submit_note`].

use tracing::{debug, info, warn};

use crate::{
  WorkflowError,
  api::{KeepsakeApi, Resource},
  couple::CoupleProfile,
  memory::Memory,
  note::{DraftNote, Note},
};

// ─── State ────────────────────────────────────────────────────────────────────

/// Everything the screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
  /// True only while the load workflow is in flight.
  pub loading:    bool,
  /// Load failure message, shown in place of the profile.
  pub error:      Option<String>,
  pub couple:     Option<CoupleProfile>,
  pub memories:   Vec<Memory>,
  pub notes:      Vec<Note>,
  pub draft:      DraftNote,
  /// True only while the submission workflow is in flight.
  pub submitting: bool,
}

impl ViewState {
  fn new(default_author: &str) -> Self {
    Self {
      loading:    false,
      error:      None,
      couple:     None,
      memories:   Vec::new(),
      notes:      Vec::new(),
      draft:      DraftNote::new(default_author),
      submitting: false,
    }
  }
}

/// Result of a call to [`ViewController::submit_note`] that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Submission {
  /// The note was created and the list refreshed.
  Posted,
  /// The draft message was blank; nothing was sent.
  Skipped,
}

/// The three normalised payloads of a successful load.
struct Snapshot {
  couple:   Option<CoupleProfile>,
  memories: Vec<Memory>,
  notes:    Vec<Note>,
}

// ─── Controller ───────────────────────────────────────────────────────────────

pub struct ViewController<A> {
  api:            A,
  state:          ViewState,
  default_author: String,
  /// Base URL of the most recent load attempt.
  loaded_for:     Option<String>,
}

impl<A: KeepsakeApi> ViewController<A> {
  pub fn new(api: A, default_author: impl Into<String>) -> Self {
    let default_author = default_author.into();
    Self {
      state: ViewState::new(&default_author),
      api,
      default_author,
      loaded_for: None,
    }
  }

  pub fn state(&self) -> &ViewState {
    &self.state
  }

  pub fn api(&self) -> &A {
    &self.api
  }

  /// The form's handle on the draft. Editing never touches other state.
  pub fn draft_mut(&mut self) -> &mut DraftNote {
    &mut self.state.draft
  }

  /// Swap the API client, e.g. after the base URL was changed. The next
  /// [`begin_load_if_stale`](Self::begin_load_if_stale) starts a load iff
  /// the new base URL differs from the last one loaded.
  pub fn replace_api(&mut self, api: A) {
    self.api = api;
  }

  /// Whether the current base URL has not been loaded yet.
  pub fn needs_load(&self) -> bool {
    self.loaded_for.as_deref() != Some(self.api.base_url())
  }

  /// Enter the loading state once per resolved base URL. Returns whether
  /// the caller should now run [`load`](Self::load).
  pub fn begin_load_if_stale(&mut self) -> bool {
    if !self.needs_load() {
      return false;
    }
    self.begin_load();
    true
  }

  // ── Load ──────────────────────────────────────────────────────────────────

  /// Enter the loading state. Called by [`load`](Self::load); exposed so a
  /// renderer can paint the in-flight state before awaiting.
  pub fn begin_load(&mut self) {
    self.state.loading = true;
    self.state.error = None;
  }

  /// Fetch profile, memories and notes together and apply them, all or
  /// nothing. Failures land in [`ViewState::error`].
  pub async fn load(&mut self) {
    self.begin_load();
    self.loaded_for = Some(self.api.base_url().to_string());
    info!(base_url = self.api.base_url(), "loading keepsake data");

    match fetch_all(&self.api).await {
      Ok(snapshot) => {
        debug!(
          has_couple = snapshot.couple.is_some(),
          memories = snapshot.memories.len(),
          notes = snapshot.notes.len(),
          "load complete"
        );
        self.state.couple = snapshot.couple;
        self.state.memories = snapshot.memories;
        self.state.notes = snapshot.notes;
      }
      Err(e) => {
        warn!(error = %e, cause = ?std::error::Error::source(&e), "load failed");
        self.state.error = Some(e.to_string());
      }
    }

    self.state.loading = false;
  }

  // ── Submit ────────────────────────────────────────────────────────────────

  /// Enter the submitting state if the draft may be sent. Returns `false`,
  /// changing nothing, for a blank message.
  pub fn begin_submit(&mut self) -> bool {
    if !self.state.draft.is_submittable() {
      return false;
    }
    self.state.submitting = true;
    true
  }

  /// Post the draft, reset it, and replace the notes with a fresh listing.
  ///
  /// Errors are for the caller to surface; they never touch
  /// [`ViewState::error`]. A failed post keeps the draft as typed.
  pub async fn submit_note(&mut self) -> Result<Submission, WorkflowError> {
    if !self.begin_submit() {
      debug!("blank note; not submitting");
      return Ok(Submission::Skipped);
    }

    let result = self.post_and_refresh().await;
    self.state.submitting = false;

    match result {
      Ok(()) => Ok(Submission::Posted),
      Err(e) => {
        warn!(error = %e, cause = ?std::error::Error::source(&e), "note submission failed");
        Err(e)
      }
    }
  }

  async fn post_and_refresh(&mut self) -> Result<(), WorkflowError> {
    self
      .api
      .create_note(&self.state.draft)
      .await
      .map_err(WorkflowError::Add)?;
    self.state.draft = DraftNote::new(self.default_author.as_str());

    // The refresh is held to the same status check as every other call: a
    // non-2xx listing fails the refresh instead of emptying the list.
    let response = self
      .api
      .get(Resource::Notes)
      .await
      .map_err(WorkflowError::Refresh)?;
    let payload = self
      .api
      .read_json(response)
      .await
      .map_err(WorkflowError::Refresh)?;
    self.state.notes = Note::from_payload(payload);
    Ok(())
  }
}

/// Wait for all three status lines, then read all three bodies.
async fn fetch_all<A: KeepsakeApi>(api: &A) -> Result<Snapshot, WorkflowError> {
  let (couple, memories, notes) = tokio::try_join!(
    api.get(Resource::Couple),
    api.get(Resource::Memories),
    api.get(Resource::Notes)
  )
  .map_err(WorkflowError::Load)?;

  let (couple, memories, notes) = tokio::try_join!(
    api.read_json(couple),
    api.read_json(memories),
    api.read_json(notes)
  )
  .map_err(WorkflowError::Load)?;

  Ok(Snapshot {
    couple:   CoupleProfile::from_payload(couple),
    memories: Memory::from_payload(memories),
    notes:    Note::from_payload(notes),
  })
}
