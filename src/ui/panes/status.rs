//! Status bar rendering with keybindings and state indicators

use crate::player::PlayerState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the status bar needs to know about the app
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    /// Cursor position and sequence length; `None` when nothing is loaded
    pub position: Option<(usize, usize)>,
    pub state: PlayerState,
    /// Prompt label and buffer while a text prompt is open
    pub prompt: Option<(&'a str, &'a str)>,
    pub is_error: bool,
    pub tree_view: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let step_text = match data.position {
        Some((index, total)) => format!(" Step {}/{} ", index + 1, total),
        None => String::from(" Step -/- "),
    };

    let bar_style = Style::default().bg(DEFAULT_THEME.current_line_bg);

    let mut left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if data.is_error {
                    DEFAULT_THEME.error
                } else if data.prompt.is_some() {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", bar_style.fg(DEFAULT_THEME.comment)),
    ];

    match data.prompt {
        Some((label, buffer)) => {
            left_spans.push(Span::styled(
                format!(" {}: ", label),
                bar_style.fg(DEFAULT_THEME.secondary),
            ));
            left_spans.push(Span::styled(
                format!("{}█", buffer),
                bar_style.fg(DEFAULT_THEME.fg),
            ));
        }
        None => left_spans.push(Span::styled(
            format!(" {} ", data.message),
            bar_style.fg(if data.is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        )),
    }

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    let bindings: &[(&str, &str)] = if data.prompt.is_some() {
        &[(" ↵ ", " submit "), (" esc ", " cancel ")]
    } else if data.tree_view {
        &[
            (" ←/→ ", " step "),
            (" ⎵ ", " play "),
            (" i/s/d ", " insert/search/delete "),
            (" c ", " clear "),
            (" ⇥ ", " algo "),
            ("q", " quit "),
        ]
    } else {
        &[
            (" ←/→ ", " step "),
            (" ⎵ ", " play "),
            (" ↵ / ⌫ ", " end/start "),
            (" r ", " run "),
            (" ⇥ ", " algo "),
            (" e/t ", " array/target "),
            (" +/- ", " speed "),
            ("q", " quit "),
        ]
    };

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    let badge = match data.state {
        _ if data.prompt.is_some() => Some((" ⌨ INPUT ", DEFAULT_THEME.secondary)),
        PlayerState::Playing => Some((" ▶ PLAYING ", DEFAULT_THEME.secondary)),
        PlayerState::Complete => Some((" END ", DEFAULT_THEME.error)),
        PlayerState::Paused if data.position.is_some_and(|(index, _)| index == 0) => {
            Some((" START ", DEFAULT_THEME.success))
        }
        PlayerState::Paused | PlayerState::Empty => None,
    };

    if let Some((label, color)) = badge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_style)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
