//! Right column: the note form and the love notes list.

use keepsake_core::{date, note::Note};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span, Text},
  widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use super::{MUTED, ROSE, ROSE_LIGHT, pane_block};
use crate::app::{App, Field, Focus};

/// Rows taken by the form pane, borders included.
pub const FORM_HEIGHT: u16 = 10;

// ─── Form ─────────────────────────────────────────────────────────────────────

/// Render the "Leave a Love Note" form into `area`.
pub fn draw_form(f: &mut Frame, area: Rect, app: &App) {
  let state = app.view.state();
  let draft = &state.draft;
  let active = match app.focus {
    Focus::Form(field) => Some(field),
    _ => None,
  };

  let mut lines = Vec::new();
  for (field, label, value, placeholder) in [
    (Field::Author, "Author", &draft.author, ""),
    (Field::Mood, "Mood (optional)", &draft.mood, ""),
    (Field::Message, "Message", &draft.message, "Write something sweet..."),
  ] {
    let is_active = active == Some(field);
    lines.push(Line::styled(label, Style::default().fg(Color::Gray)));
    lines.push(input_line(value, placeholder, is_active));
  }

  let (label, style) = if state.submitting {
    ("[ Sending... ]", Style::default().fg(MUTED))
  } else {
    (
      "[ Post Note ]",
      Style::default()
        .fg(Color::White)
        .bg(ROSE)
        .add_modifier(Modifier::BOLD),
    )
  };
  lines.push(Line::from(Span::styled(label, style)));

  let para = Paragraph::new(lines).block(pane_block("Leave a Love Note", active.is_some()));
  f.render_widget(para, area);
}

fn input_line(value: &str, placeholder: &str, active: bool) -> Line<'static> {
  let prefix = if active { "› " } else { "  " };
  let mut spans = vec![Span::styled(prefix, Style::default().fg(ROSE_LIGHT))];

  if value.is_empty() && !active {
    spans.push(Span::styled(placeholder.to_string(), Style::default().fg(MUTED)));
  } else {
    spans.push(Span::raw(value.to_string()));
  }
  if active {
    spans.push(Span::styled("_", Style::default().fg(ROSE_LIGHT)));
  }
  Line::from(spans)
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// Render the notes list into `area`, in server order.
pub fn draw_list(f: &mut Frame, area: Rect, app: &App) {
  let notes = &app.view.state().notes;
  let focused = app.focus == Focus::Notes;
  let block = pane_block("Love Notes", focused);

  if notes.is_empty() {
    let empty = Paragraph::new("No notes yet. Be the first to write one!")
      .style(Style::default().fg(MUTED))
      .wrap(Wrap { trim: true })
      .block(block);
    f.render_widget(empty, area);
    return;
  }

  let items: Vec<ListItem> = notes.iter().map(note_item).collect();

  let mut state = ListState::default();
  state.select(Some(app.notes_cursor.min(notes.len() - 1)));

  let highlight = if focused {
    Style::default().bg(Color::Rgb(60, 20, 30))
  } else {
    Style::default()
  };

  f.render_stateful_widget(
    List::new(items).block(block).highlight_style(highlight),
    area,
    &mut state,
  );
}

fn note_item(note: &Note) -> ListItem<'static> {
  let mood = note
    .mood
    .as_deref()
    .map(|m| format!("#{m}"))
    .unwrap_or_default();
  let when = note
    .updated_at
    .as_deref()
    .map(date::display_timestamp)
    .unwrap_or_default();

  let mut meta = Vec::new();
  if !mood.is_empty() {
    meta.push(Span::styled(format!("{mood}  "), Style::default().fg(ROSE_LIGHT)));
  }
  if !when.is_empty() {
    meta.push(Span::styled(when, Style::default().fg(MUTED)));
  }

  let mut lines = Vec::new();
  if !meta.is_empty() {
    lines.push(Line::from(meta));
  }
  lines.push(Line::from(note.message.clone()));
  lines.push(Line::styled(
    format!("— {}", note.author),
    Style::default().fg(Color::Gray),
  ));
  lines.push(Line::from(""));

  ListItem::new(Text::from(lines))
}
