use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};
use tui_logger::TuiLoggerWidget;

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title(" Log (l: hide) ")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let widget = TuiLoggerWidget::default()
        .block(block)
        .style_error(styling::error_text_style(theme))
        .style_warn(ratatui::style::Style::default().fg(theme.favorite.to_color()))
        .style_info(styling::normal_text_style(theme))
        .style_debug(styling::secondary_text_style(theme))
        .style_trace(styling::muted_text_style(theme))
        .output_separator(' ')
        .output_timestamp(Some("%H:%M:%S".to_string()));
    frame.render_widget(widget, size);
}
