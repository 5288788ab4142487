use crate::state::State;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return a centered spinner with a caption for the given area height.
///
pub fn widget<'a>(state: &State, caption: &'a str, height: u16) -> Paragraph<'a> {
    let theme = state.get_theme();
    let frame = FRAMES[*state.get_spinner_index() % FRAMES.len()];
    let mut lines: Vec<Line> = (0..height.saturating_sub(2) / 2)
        .map(|_| Line::from(""))
        .collect();
    lines.push(Line::from(Span::styled(
        frame,
        Style::default().fg(theme.accent.to_color()),
    )));
    lines.push(Line::from(Span::styled(
        caption,
        Style::default().fg(theme.text_secondary.to_color()),
    )));
    Paragraph::new(lines).alignment(Alignment::Center)
}
