//! Pseudocode listing pane

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render `lines` with the 1-based `current` line highlighted
pub fn render_pseudocode_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[&str],
    current: Option<usize>,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Pseudocode ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let number_width = lines.len().to_string().len();
    let text: Vec<Line> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let number = i + 1;
            let is_current = current == Some(number);
            let (number_style, code_style) = if is_current {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.border_focused)
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    Style::default().fg(DEFAULT_THEME.comment),
                    Style::default().fg(DEFAULT_THEME.fg),
                )
            };
            Line::from(vec![
                Span::styled(format!("{:>w$} ", number, w = number_width), number_style),
                Span::styled(*line, code_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(text).block(block), area);
}
