mod articles;
mod detail;
mod footer;
mod log;

use self::log::log;
use super::Frame;
use crate::motion::Millis;
use crate::state::{State, View};
use articles::articles;
use detail::detail;
use footer::footer;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

/// Render the whole screen according to state.
///
pub fn render(frame: &mut Frame, state: &mut State) {
    let now = state.now();
    draw(frame, state, now);
}

fn draw(frame: &mut Frame, state: &mut State, now: Millis) {
    let size = frame.size();
    let theme = state.get_theme();
    frame.render_widget(
        Block::default().style(
            Style::default()
                .bg(theme.background.to_color())
                .fg(theme.text.to_color()),
        ),
        size,
    );

    let mut constraints = vec![Constraint::Min(0)];
    if state.is_log_visible() {
        constraints.push(Constraint::Percentage(30));
    }
    constraints.push(Constraint::Length(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    match state.current_view() {
        View::Articles => articles(frame, chunks[0], state, now),
        View::Detail { .. } => detail(frame, chunks[0], state),
    }
    if state.is_log_visible() {
        log(frame, chunks[1], state);
    }
    footer(frame, chunks[chunks.len() - 1], state);
}
