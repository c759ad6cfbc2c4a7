//! Current action and run details

use crate::step::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Label/value pairs describing the markers a step carries
pub fn step_details(step: &Step) -> Vec<(&'static str, String)> {
    let mut details = vec![("length", step.array.len().to_string())];
    if let Some(target) = step.search_target {
        details.push(("target", target.to_string()));
    }
    if let Some(pivot) = step.pivot_index {
        let text = match step.array.get(pivot) {
            Some(value) => format!("[{}] = {}", pivot, value),
            None => pivot.to_string(),
        };
        details.push(("pivot", text));
    }
    if let Some(gap) = step.gap {
        details.push(("gap", gap.to_string()));
    }
    if let (Some(low), Some(high)) = (step.low, step.high) {
        details.push(("low/high", format!("{} / {}", low, high)));
    }
    if let Some(mid) = step.mid {
        details.push(("mid", mid.to_string()));
    }
    if let Some(found) = step.found {
        details.push(("found", if found { "yes" } else { "no" }.to_string()));
    }
    if !step.sorted_indices.is_empty() {
        details.push((
            "sorted",
            format!("{}/{}", step.sorted_indices.len(), step.array.len()),
        ));
    }
    details
}

pub fn render_info_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    action: &str,
    details: &[(&str, String)],
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
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = vec![
        Line::from(Span::styled(
            action.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    let mut detail_spans = Vec::new();
    for (i, (label, value)) in details.iter().enumerate() {
        if i > 0 {
            detail_spans.push(Span::styled("  │  ", Style::default().fg(DEFAULT_THEME.comment)));
        }
        detail_spans.push(Span::styled(
            format!("{}: ", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        detail_spans.push(Span::styled(
            value.clone(),
            Style::default().fg(DEFAULT_THEME.primary),
        ));
    }
    lines.push(Line::from(detail_spans));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::binary;

    #[test]
    fn test_binary_search_details() {
        let steps = binary::steps(&[10, 20, 30, 40, 50], 30);
        let last = steps.last().unwrap();
        let details = step_details(last);
        let get = |label: &str| {
            details
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.clone())
        };
        assert_eq!(get("target").as_deref(), Some("30"));
        assert_eq!(get("mid").as_deref(), Some("2"));
        assert_eq!(get("found").as_deref(), Some("yes"));
        assert_eq!(get("gap"), None);
    }
}
