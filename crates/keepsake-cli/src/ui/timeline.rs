//! Memories timeline — left pane.

use keepsake_core::{date, memory::Memory};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span, Text},
  widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use super::{MUTED, ROSE_LIGHT, pane_block};
use crate::app::{App, Focus};

/// Render the timeline into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let memories = &app.view.state().memories;
  let focused = app.focus == Focus::Timeline;
  let block = pane_block("Memories Timeline", focused);

  if memories.is_empty() {
    let empty = Paragraph::new("No memories yet. Add some to see your journey appear here.")
      .style(Style::default().fg(MUTED))
      .wrap(Wrap { trim: true })
      .block(block);
    f.render_widget(empty, area);
    return;
  }

  let items: Vec<ListItem> = memories.iter().map(memory_item).collect();

  let mut state = ListState::default();
  state.select(Some(app.timeline_cursor.min(memories.len() - 1)));

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

fn memory_item(memory: &Memory) -> ListItem<'static> {
  let mut heading = vec![
    Span::styled("● ", Style::default().fg(ROSE_LIGHT)),
    Span::styled(
      memory.title.clone(),
      Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ),
  ];
  if let Some(day) = &memory.event_date {
    heading.push(Span::styled(
      format!(" • {}", date::display_date(day)),
      Style::default().fg(Color::Gray),
    ));
  }

  let mut lines = vec![Line::from(heading)];
  if let Some(location) = &memory.location {
    lines.push(Line::styled(format!("  {location}"), Style::default().fg(MUTED)));
  }
  if let Some(description) = &memory.description {
    lines.push(Line::from(format!("  {description}")));
  }
  if let Some(url) = &memory.photo_url {
    lines.push(Line::styled(
      format!("  View photo: {url}"),
      Style::default()
        .fg(ROSE_LIGHT)
        .add_modifier(Modifier::UNDERLINED),
    ));
  }
  lines.push(Line::from(""));

  ListItem::new(Text::from(lines))
}
