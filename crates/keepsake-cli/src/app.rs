//! Application state and key dispatcher.
//!
//! Key handling is synchronous and returns a [`Command`]; the event loop
//! runs the async workflows so it can paint the in-flight state first.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keepsake_core::{
  api::KeepsakeApi,
  view::{Submission, ViewController},
};
use tracing::info;

use crate::client::ApiClient;

// ─── Focus ────────────────────────────────────────────────────────────────────

/// A field of the note form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Author,
  Mood,
  Message,
}

/// Which pane receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  Timeline,
  Form(Field),
  Notes,
}

impl Focus {
  const ORDER: [Focus; 5] = [
    Focus::Timeline,
    Focus::Form(Field::Author),
    Focus::Form(Field::Mood),
    Focus::Form(Field::Message),
    Focus::Notes,
  ];

  fn position(self) -> usize {
    Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
  }

  pub fn next(self) -> Self {
    Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
  }

  pub fn prev(self) -> Self {
    let len = Self::ORDER.len();
    Self::ORDER[(self.position() + len - 1) % len]
  }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Nothing,
  Quit,
  Reload,
  Submit,
  /// Switch to this base URL.
  Connect(String),
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Data, draft and workflow flags.
  pub view: ViewController<ApiClient>,

  /// Header title.
  pub title: String,

  /// Configured default author, for the welcome and footer lines.
  pub author: String,

  pub focus: Focus,

  /// Selected entry in the memories timeline.
  pub timeline_cursor: usize,

  /// Selected entry in the notes list.
  pub notes_cursor: usize,

  /// Blocking notification; swallows keys until dismissed.
  pub alert: Option<String>,

  /// Base-URL input, while the connect prompt is open.
  pub url_prompt: Option<String>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,
}

impl App {
  pub fn new(view: ViewController<ApiClient>, title: String, author: String) -> Self {
    Self {
      view,
      title,
      author,
      focus: Focus::Timeline,
      timeline_cursor: 0,
      notes_cursor: 0,
      alert: None,
      url_prompt: None,
      status_msg: String::new(),
    }
  }

  // ── Workflows ─────────────────────────────────────────────────────────────

  /// Run the submission workflow, turning failures into an alert.
  pub async fn submit(&mut self) {
    match self.view.submit_note().await {
      Ok(Submission::Posted) => {
        self.status_msg = "Note posted.".into();
        self.notes_cursor = self.notes_cursor.min(self.view.state().notes.len().saturating_sub(1));
      }
      Ok(Submission::Skipped) => {}
      Err(e) => self.alert = Some(e.to_string()),
    }
  }

  /// Load, resetting list cursors once the data is in.
  pub async fn load(&mut self) {
    self.view.load().await;
    self.timeline_cursor = 0;
    self.notes_cursor = 0;
    self.status_msg.clear();
  }

  /// Point the app at `base_url`. Returns whether the URL changed, in which
  /// case the view is already in its loading state and the caller should
  /// [`load`](Self::load) next.
  pub fn connect(&mut self, base_url: &str) -> bool {
    match ApiClient::new(base_url) {
      Ok(client) => {
        info!(base_url = client.base_url(), "switching API base URL");
        self.view.replace_api(client);
        if self.view.begin_load_if_stale() {
          return true;
        }
        self.status_msg.clear();
      }
      Err(e) => self.alert = Some(format!("{e:#}")),
    }
    false
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  pub fn handle_key(&mut self, key: KeyEvent) -> Command {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Command::Quit;
    }

    if self.alert.is_some() {
      if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        self.alert = None;
      }
      return Command::Nothing;
    }

    if self.url_prompt.is_some() {
      return self.handle_prompt_key(key);
    }

    match self.focus {
      Focus::Form(field) => self.handle_form_key(field, key),
      Focus::Timeline | Focus::Notes => self.handle_browse_key(key),
    }
  }

  fn handle_prompt_key(&mut self, key: KeyEvent) -> Command {
    let Some(input) = self.url_prompt.as_mut() else {
      return Command::Nothing;
    };
    match key.code {
      KeyCode::Esc => self.url_prompt = None,
      KeyCode::Enter => {
        let url = input.trim().to_string();
        self.url_prompt = None;
        if !url.is_empty() {
          return Command::Connect(url);
        }
      }
      KeyCode::Backspace => {
        input.pop();
      }
      KeyCode::Char(c) => input.push(c),
      _ => {}
    }
    Command::Nothing
  }

  fn handle_form_key(&mut self, field: Field, key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Esc => self.focus = Focus::Timeline,
      KeyCode::Tab => self.focus = self.focus.next(),
      KeyCode::BackTab => self.focus = self.focus.prev(),
      KeyCode::Down if field != Field::Message => self.focus = self.focus.next(),
      KeyCode::Up if field != Field::Author => self.focus = self.focus.prev(),
      KeyCode::Enter => {
        if !self.view.state().submitting {
          return Command::Submit;
        }
      }
      KeyCode::Backspace => {
        self.field_mut(field).pop();
      }
      KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
        self.field_mut(field).push(c);
      }
      _ => {}
    }
    Command::Nothing
  }

  fn handle_browse_key(&mut self, key: KeyEvent) -> Command {
    match key.code {
      // Quit
      KeyCode::Char('q') => return Command::Quit,

      // Focus
      KeyCode::Tab => self.focus = self.focus.next(),
      KeyCode::BackTab => self.focus = self.focus.prev(),
      KeyCode::Char('i') | KeyCode::Char('n') => self.focus = Focus::Form(Field::Message),

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.focused_len();
        let cursor = self.focused_cursor();
        if len > 0 && *cursor + 1 < len {
          *cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        let cursor = self.focused_cursor();
        *cursor = cursor.saturating_sub(1);
      }

      // Data
      KeyCode::Char('r') => return Command::Reload,
      KeyCode::Char('u') => {
        self.url_prompt = Some(self.view.api().base_url().to_string());
      }

      _ => {}
    }
    Command::Nothing
  }

  fn field_mut(&mut self, field: Field) -> &mut String {
    let draft = self.view.draft_mut();
    match field {
      Field::Author => &mut draft.author,
      Field::Mood => &mut draft.mood,
      Field::Message => &mut draft.message,
    }
  }

  fn focused_len(&self) -> usize {
    match self.focus {
      Focus::Notes => self.view.state().notes.len(),
      _ => self.view.state().memories.len(),
    }
  }

  fn focused_cursor(&mut self) -> &mut usize {
    match self.focus {
      Focus::Notes => &mut self.notes_cursor,
      _ => &mut self.timeline_cursor,
    }
  }
}
