use super::Frame;
use crate::feed::Article;
use crate::motion::Millis;
use crate::state::{LoadState, State};
use crate::ui::theme::{ColorSpec, Theme};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const LOADING_CAPTION: &str = "Loading articles...";
const CARD_HEIGHT: u16 = 6;
const CARD_SLOT: u16 = CARD_HEIGHT + 1;
/// Motion offset units covered by one terminal row.
const UNITS_PER_ROW: f64 = 10.0;

/// Everything needed to draw one card.
///
struct CardLook {
    opacity: f64,
    selected: bool,
    pressed: bool,
    favorite: bool,
}

/// Render the article card list according to state.
///
pub fn articles(frame: &mut Frame, size: Rect, state: &mut State, now: Millis) {
    let theme = state.get_theme().clone();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styling::active_block_border_style(&theme))
        .title(title(state, &theme));
    let list_area = block.inner(size);
    frame.render_widget(block, size);

    if state.get_articles().is_empty() {
        state.set_card_regions(vec![]);
        match state.get_articles_load() {
            LoadState::Failed => {
                frame.render_widget(
                    notice(
                        "Could not load articles. Press r to retry.",
                        styling::error_text_style(&theme),
                        list_area.height,
                    ),
                    list_area,
                );
            }
            LoadState::Loaded => {
                frame.render_widget(
                    notice(
                        "No articles yet.",
                        styling::secondary_text_style(&theme),
                        list_area.height,
                    ),
                    list_area,
                );
            }
            LoadState::Idle | LoadState::Loading => {
                frame.render_widget(
                    spinner::widget(state, LOADING_CAPTION, list_area.height),
                    list_area,
                );
            }
        }
        return;
    }

    let screen = state.screen_frame(now);
    let area = scaled(list_area, screen.scale);
    let visible = (area.height / CARD_SLOT).max(1) as usize;
    let first = state.get_selected_index().saturating_sub(visible - 1);
    let pressed = state.get_press().map(|press| press.id);

    let mut regions = vec![];
    for (position, article) in state
        .get_articles()
        .iter()
        .enumerate()
        .skip(first)
        .take(visible + 1)
    {
        let slot_y = area.y + (position - first) as u16 * CARD_SLOT;
        if slot_y >= area.bottom() {
            break;
        }
        let item = state.item_frame(article.id, now);
        let opacity = (item.opacity * screen.opacity).clamp(0.0, 1.0);
        if opacity <= 0.0 {
            continue;
        }
        let shift = (item.offset / UNITS_PER_ROW).round().max(0.0) as u16;
        let card = Rect::new(area.x, slot_y.saturating_add(shift), area.width, CARD_HEIGHT)
            .intersection(area);
        if card.height == 0 {
            continue;
        }
        let look = CardLook {
            opacity,
            selected: position == state.get_selected_index(),
            pressed: pressed == Some(article.id),
            favorite: state.is_favorite(article.id),
        };
        render_card(frame, card, article, &theme, &look);
        regions.push((article.id, card));
    }
    state.set_card_regions(regions);
}

/// Shrink the area around its center by the container scale.
///
fn scaled(area: Rect, scale: f64) -> Rect {
    let shrink = (1.0 - scale).clamp(0.0, 1.0);
    let inset_x = (area.width as f64 * shrink / 2.0).round() as u16;
    let inset_y = (area.height as f64 * shrink / 2.0).round() as u16;
    Rect::new(
        area.x + inset_x,
        area.y + inset_y,
        area.width.saturating_sub(inset_x * 2),
        area.height.saturating_sub(inset_y * 2),
    )
}

fn title<'a>(state: &State, theme: &Theme) -> Line<'a> {
    let mut spans = vec![Span::styled(
        " Articles ",
        styling::active_block_title_style(),
    )];
    let has_articles = !state.get_articles().is_empty();
    match state.get_articles_load() {
        LoadState::Loading if has_articles => {
            let frame = spinner::FRAMES[*state.get_spinner_index() % spinner::FRAMES.len()];
            spans.push(Span::styled(
                format!("{} Refreshing ", frame),
                Style::default().fg(theme.accent.to_color()),
            ));
        }
        LoadState::Failed if has_articles => {
            spans.push(Span::styled(
                "Refresh failed ",
                styling::error_text_style(theme),
            ));
        }
        _ => (),
    }
    if let Some(loaded_at) = state.get_loaded_at() {
        spans.push(Span::styled(
            format!("updated {} ", loaded_at.format("%H:%M:%S")),
            styling::muted_text_style(theme),
        ));
    }
    Line::from(spans)
}

fn notice(message: &str, style: Style, height: u16) -> Paragraph<'_> {
    let mut lines: Vec<Line> = (0..height.saturating_sub(1) / 2)
        .map(|_| Line::from(""))
        .collect();
    lines.push(Line::from(Span::styled(message, style)));
    Paragraph::new(lines).alignment(Alignment::Center)
}

fn render_card(frame: &mut Frame, area: Rect, article: &Article, theme: &Theme, look: &CardLook) {
    let fade = |spec: &ColorSpec| theme.faded(spec, look.opacity);

    let border = if look.selected {
        &theme.border_active
    } else {
        &theme.border_normal
    };
    let (border_type, border_style) = if look.pressed {
        (
            BorderType::Thick,
            Style::default()
                .fg(fade(&theme.accent))
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (BorderType::Rounded, Style::default().fg(fade(border)))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(Style::default().bg(fade(&theme.surface)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(inner);

    let heading = Line::from(vec![
        Span::styled(
            format!(" {} ", article.initial()),
            Style::default()
                .fg(fade(&theme.accent_text))
                .bg(fade(&theme.accent))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            article.title.clone(),
            Style::default()
                .fg(fade(&theme.text))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(heading), rows[0]);

    frame.render_widget(
        Paragraph::new(article.body.replace('\n', " "))
            .style(Style::default().fg(fade(&theme.text_secondary)))
            .wrap(Wrap { trim: true }),
        rows[1],
    );

    let meta = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(rows[2]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Article #{}", article.id),
            Style::default().fg(fade(&theme.text_muted)),
        )),
        meta[0],
    );
    let marker = if look.favorite { "♥ " } else { "♡ " };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(marker, Style::default().fg(fade(&theme.favorite))),
            Span::styled(
                "Read more ›",
                Style::default()
                    .fg(fade(&theme.accent))
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Right),
        meta[1],
    );
}
