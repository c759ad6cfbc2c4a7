//! Array bars pane

use crate::config::MAX_ARRAY_VALUE;
use crate::ui::theme::DEFAULT_THEME;
use crate::visual::VisualState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

/// Render one bar per value, colored by its visual state.
///
/// `states` must be the same length as `values`; missing entries draw idle.
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    values: &[u32],
    states: &[VisualState],
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
        .border_style(border_style);

    let inner_width = area.width.saturating_sub(2);
    let (bar_width, bar_gap) = bar_geometry(inner_width, values.len());
    let show_values = bar_width >= 3;

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let state = states.get(i).copied().unwrap_or(VisualState::Idle);
            let color = DEFAULT_THEME.visual(state);
            let bar = Bar::default()
                .value(u64::from(value))
                .style(Style::default().fg(color))
                .value_style(Style::default().bg(color).fg(Color::Black));
            if show_values {
                bar
            } else {
                bar.text_value(String::new())
            }
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(u64::from(MAX_ARRAY_VALUE));

    frame.render_widget(chart, area);
}

/// Widest bars that fit `count` bars into `width` columns
fn bar_geometry(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let count = u16::try_from(count).unwrap_or(u16::MAX);
    let gap = if width >= count.saturating_mul(3) { 1 } else { 0 };
    let width_per_bar = width / count;
    let bar_width = width_per_bar.saturating_sub(gap).max(1);
    (bar_width, gap)
}
