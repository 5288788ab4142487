use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

const LIST_HINTS: &str = " j/k: move  enter: open  f: favorite  r: refresh  l: log  q: quit";
const DETAIL_HINTS: &str = " j/k: scroll  f: favorite  r: reload  esc: back  l: log  q: quit";

/// Render footer with key hints and the favorite count.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(18)])
        .split(size);

    let hints = match state.current_view() {
        View::Articles => LIST_HINTS,
        View::Detail { .. } => DETAIL_HINTS,
    };
    frame.render_widget(
        Paragraph::new(hints).style(styling::muted_text_style(theme)),
        chunks[0],
    );

    let favorites = Line::from(vec![
        Span::styled("♥ ", Style::default().fg(theme.favorite.to_color())),
        Span::styled(
            format!("{} favorites ", state.favorite_count()),
            styling::secondary_text_style(theme),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(favorites).alignment(Alignment::Right),
        chunks[1],
    );
}
