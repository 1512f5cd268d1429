//! Profile pane — loading, error, the couple, or a welcome.

use keepsake_core::{couple::CoupleProfile, date};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Paragraph, Wrap},
};

use super::{MUTED, ROSE, pane_block};
use crate::app::App;

/// Render the profile pane into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let state = app.view.state();

  let lines = if state.loading {
    vec![Line::styled("Loading their story...", Style::default().fg(MUTED))]
  } else if let Some(error) = &state.error {
    vec![
      Line::styled(error.clone(), Style::default().fg(Color::Red)),
      Line::styled("Press r to try again.", Style::default().fg(MUTED)),
    ]
  } else if let Some(couple) = &state.couple {
    couple_lines(couple)
  } else {
    welcome_lines(&app.author)
  };

  let para = Paragraph::new(lines)
    .wrap(Wrap { trim: true })
    .block(pane_block("Our story", false));
  f.render_widget(para, area);
}

fn couple_lines(couple: &CoupleProfile) -> Vec<Line<'static>> {
  let mut lines = vec![Line::from(vec![
    Span::styled(
      format!("{} & {}", couple.person_a, couple.person_b),
      Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ),
    Span::raw("   "),
    Span::styled(
      " A little place to celebrate love ",
      Style::default().fg(Color::White).bg(ROSE),
    ),
  ])];

  if let Some(anniversary) = &couple.anniversary {
    lines.push(Line::from(vec![
      Span::styled("Anniversary: ", Style::default().fg(MUTED)),
      Span::styled(
        date::display_date(anniversary),
        Style::default().add_modifier(Modifier::BOLD),
      ),
    ]));
  }
  if let Some(story) = &couple.story {
    lines.push(Line::from(""));
    lines.push(Line::from(story.clone()));
  }
  lines
}

fn welcome_lines(author: &str) -> Vec<Line<'static>> {
  vec![
    Line::styled(
      format!("Welcome, {author}!"),
      Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ),
    Line::from(
      "Start by adding your couple profile and memories using the database viewer, \
       or just leave love notes below.",
    ),
  ]
}
