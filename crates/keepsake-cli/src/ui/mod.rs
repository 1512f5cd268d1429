//! TUI rendering — orchestrates all panes.

pub mod notes;
pub mod profile;
pub mod timeline;

use keepsake_core::api::KeepsakeApi;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Flex, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, Focus};

// ─── Palette ──────────────────────────────────────────────────────────────────

pub const ROSE: Color = Color::Rgb(225, 29, 72);
pub const ROSE_LIGHT: Color = Color::Rgb(251, 113, 133);
pub const MUTED: Color = Color::DarkGray;

/// Border style for a pane, brighter when it has focus.
pub fn pane_block(title: &str, focused: bool) -> Block<'_> {
  let border = if focused { ROSE_LIGHT } else { MUTED };
  Block::default()
    .title(Span::styled(
      format!(" {title} "),
      Style::default().fg(ROSE).add_modifier(Modifier::BOLD),
    ))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border))
}

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, profile, body, footer, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Length(7), // profile
      Constraint::Min(0),    // body
      Constraint::Length(1), // footer
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  profile::draw(f, rows[1], app);
  draw_body(f, rows[2], app);
  draw_footer(f, rows[3], app);
  draw_status(f, rows[4], app);

  if let Some(input) = &app.url_prompt {
    draw_url_prompt(f, area, input);
  }
  if let Some(message) = &app.alert {
    draw_alert(f, area, message);
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let left = Span::styled(
    format!(" {}", app.title),
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{}  ·  System check: /test ", app.view.api().base_url()),
    Style::default().fg(Color::Gray),
  );

  // Simple left-right header: pad the middle.
  let left_width = left.width() as u16;
  let right_width = right.width() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);
  f.render_widget(Paragraph::new(line).style(Style::default().bg(ROSE)), area);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  // Timeline on the left (60%), form above notes on the right (40%).
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
    .split(area);

  timeline::draw(f, cols[0], app);

  let right = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(notes::FORM_HEIGHT), Constraint::Min(0)])
    .split(cols[1]);

  notes::draw_form(f, right[0], app);
  notes::draw_list(f, right[1], app);
}

// ─── Footer ───────────────────────────────────────────────────────────────────

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
  let footer = Paragraph::new(format!("Built with ❤ for {}", app.author))
    .style(Style::default().fg(MUTED))
    .centered();
  f.render_widget(footer, area);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = if app.alert.is_some() {
    ("ALERT", "Enter/Esc dismiss")
  } else if app.url_prompt.is_some() {
    ("CONNECT", "Type a base URL  Enter connect  Esc cancel")
  } else {
    match app.focus {
      Focus::Form(_) => (
        "COMPOSE",
        "Tab/↑↓ field  Enter post  Esc back",
      ),
      Focus::Timeline | Focus::Notes => (
        "BROWSE",
        "Tab focus  ↑↓/jk scroll  i write  r reload  u server  q quit",
      ),
    }
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(ROSE_LIGHT)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(format!("  {status}"), Style::default().fg(MUTED));

  f.render_widget(
    Paragraph::new(Line::from(vec![mode_span, hint_span])).style(Style::default().bg(Color::Black)),
    area,
  );
}

// ─── Overlays ─────────────────────────────────────────────────────────────────

/// A `width` × `height` rectangle centred in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let [row] = Layout::vertical([Constraint::Length(height)])
    .flex(Flex::Center)
    .areas(area);
  let [cell] = Layout::horizontal([Constraint::Length(width)])
    .flex(Flex::Center)
    .areas(row);
  cell
}

fn draw_alert(f: &mut Frame, area: Rect, message: &str) {
  let popup = centered(area, 50.min(area.width), 5);
  let block = Block::default()
    .title(" Oops ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(ROSE));
  let body = Paragraph::new(vec![
    Line::from(message.to_string()),
    Line::from(""),
    Line::from(Span::styled("[ OK ]", Style::default().add_modifier(Modifier::BOLD))),
  ])
  .centered()
  .wrap(Wrap { trim: true })
  .block(block);

  f.render_widget(Clear, popup);
  f.render_widget(body, popup);
}

fn draw_url_prompt(f: &mut Frame, area: Rect, input: &str) {
  let popup = centered(area, 60.min(area.width), 3);
  let block = Block::default()
    .title(" API base URL ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(ROSE_LIGHT));
  let body = Paragraph::new(format!("{input}_")).block(block);

  f.render_widget(Clear, popup);
  f.render_widget(body, popup);
}
