use super::Frame;
use crate::feed::{Article, CommentThread};
use crate::state::{DetailState, LoadState, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const LOADING_CAPTION: &str = "Loading article...";

/// Render the article detail view according to state.
///
pub fn detail(frame: &mut Frame, size: Rect, state: &State) {
    let detail = match state.get_detail() {
        Some(detail) => detail,
        None => return,
    };
    let theme = state.get_theme();
    let mut heading = vec![Span::styled(
        format!(" Article #{} ", detail.post_id),
        styling::active_block_title_style(),
    )];
    if state.is_favorite(detail.post_id) {
        heading.push(Span::styled(
            "♥ ",
            Style::default().fg(theme.favorite.to_color()),
        ));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styling::active_block_border_style(theme))
        .title(Line::from(heading));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    match (detail.status(), detail.content()) {
        (LoadState::Loaded, Some((article, comments))) => {
            let paragraph = Paragraph::new(content(article, comments, theme))
                .wrap(Wrap { trim: false })
                .scroll((detail.scroll, 0));
            frame.render_widget(paragraph, inner);
        }
        (LoadState::Failed, _) => {
            frame.render_widget(failure(detail, theme), inner);
        }
        _ => {
            frame.render_widget(
                spinner::widget(state, LOADING_CAPTION, inner.height),
                inner,
            );
        }
    }
}

fn content<'a>(article: &'a Article, comments: &'a CommentThread, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", article.initial()),
                styling::avatar_style(theme),
            ),
            Span::raw(" "),
            Span::styled(
                article.title.as_str(),
                Style::default()
                    .fg(theme.text.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("Cover {}", article.image_url),
            styling::muted_text_style(theme),
        )),
        Line::from(""),
    ];
    lines.extend(
        article
            .body
            .lines()
            .map(|line| Line::from(Span::styled(line, styling::normal_text_style(theme)))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Comments ({})", comments.items.len()),
        Style::default()
            .fg(theme.accent.to_color())
            .add_modifier(Modifier::BOLD),
    )));
    if comments.items.is_empty() {
        lines.push(Line::from(Span::styled(
            "No comments yet.",
            styling::muted_text_style(theme),
        )));
    }
    for comment in &comments.items {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                comment.name.as_str(),
                Style::default()
                    .fg(theme.text.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(comment.email.as_str(), styling::muted_text_style(theme)),
        ]));
        lines.extend(
            comment
                .body
                .lines()
                .map(|line| Line::from(Span::styled(line, styling::secondary_text_style(theme)))),
        );
    }
    lines
}

fn failure<'a>(detail: &DetailState, theme: &Theme) -> Paragraph<'a> {
    let reason = match (detail.article_load, detail.comments_load) {
        (LoadState::Failed, LoadState::Failed) => "Could not load this article or its comments.",
        (LoadState::Failed, _) => "Could not load this article.",
        _ => "Could not load the comments for this article.",
    };
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(reason, styling::error_text_style(theme))),
        Line::from(Span::styled(
            "Press r to retry or Esc to go back.",
            styling::secondary_text_style(theme),
        )),
    ])
    .alignment(Alignment::Center)
}
