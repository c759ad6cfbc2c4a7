//! Binary search tree pane
//!
//! Nodes are laid out on a grid: the column comes from the in-order position
//! and the row from the depth, with a connector row between levels.

use crate::bst::{BstStep, TreeNode};
use crate::ui::theme::DEFAULT_THEME;
use crate::visual::{node_state, NodeContext, VisualState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Columns reserved per node label
const CELL_WIDTH: usize = 5;

/// A node's position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedNode {
    pub value: u32,
    pub depth: usize,
    pub column: usize,
    pub parent_column: Option<usize>,
}

/// In-order placement of every node
pub fn layout(root: &TreeNode) -> Vec<PlacedNode> {
    fn walk(
        node: &TreeNode,
        depth: usize,
        parent: Option<usize>,
        next_column: &mut usize,
        out: &mut Vec<PlacedNode>,
    ) {
        // A left child learns its parent's column once the left subtree is placed
        let slot = out.len();
        out.push(PlacedNode {
            value: node.value,
            depth,
            column: 0,
            parent_column: parent,
        });
        let first_left = out.len();
        if let Some(left) = &node.left {
            walk(left, depth + 1, None, next_column, out);
        }
        let column = *next_column;
        *next_column += 1;
        out[slot].column = column;
        if node.left.is_some() {
            out[first_left].parent_column = Some(column);
        }
        if let Some(right) = &node.right {
            walk(right, depth + 1, Some(column), next_column, out);
        }
    }

    let mut out = Vec::with_capacity(root.len());
    let mut next_column = 0;
    walk(root, 0, None, &mut next_column, &mut out);
    out
}

/// Render the tree with per-node states taken from the current step
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    tree: Option<&TreeNode>,
    step: Option<&BstStep>,
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

    let Some(root) = tree else {
        let paragraph = Paragraph::new("(empty tree) press i to insert a value")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let placed = layout(root);
    let lines = grid_lines(&placed, step);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn node_style(value: u32, step: Option<&BstStep>) -> Style {
    let state = match step {
        Some(step) => node_state(&NodeContext {
            action: &step.action,
            highlighted: step.value == value,
            on_path: step.path.contains(&value),
        }),
        None => VisualState::Idle,
    };
    let style = Style::default().fg(DEFAULT_THEME.visual(state));
    if state == VisualState::Idle {
        style
    } else {
        style.add_modifier(Modifier::BOLD)
    }
}

fn grid_lines(placed: &[PlacedNode], step: Option<&BstStep>) -> Vec<Line<'static>> {
    let max_depth = placed.iter().map(|n| n.depth).max().unwrap_or(0);
    let width = (placed.len() * CELL_WIDTH).max(1);
    let rows = max_depth * 2 + 1;
    let blank = (' ', Style::default());
    let mut grid = vec![vec![blank; width]; rows];

    let connector = Style::default().fg(DEFAULT_THEME.comment);
    for node in placed {
        let row = node.depth * 2;
        let start = node.column * CELL_WIDTH;
        let label = format!("{:^width$}", node.value, width = CELL_WIDTH);
        let style = node_style(node.value, step);
        for (offset, c) in label.chars().enumerate().take(CELL_WIDTH) {
            grid[row][start + offset] = (c, style);
        }

        if let Some(parent) = node.parent_column {
            let center = start + CELL_WIDTH / 2;
            let (glyph, x) = if node.column < parent {
                ('/', center + 1)
            } else {
                ('\\', center.saturating_sub(1))
            };
            if x < width {
                grid[row - 1][x] = (glyph, connector);
            }
        }
    }

    grid.into_iter().map(row_line).collect()
}

/// Merge runs of equally styled cells into spans
fn row_line(row: Vec<(char, Style)>) -> Line<'static> {
    let mut spans = Vec::new();
    let mut text = String::new();
    let mut current: Option<Style> = None;
    for (c, style) in row {
        if current.is_some_and(|s| s != style) {
            spans.push(Span::styled(std::mem::take(&mut text), current.unwrap_or_default()));
        }
        current = Some(style);
        text.push(c);
    }
    if !text.is_empty() {
        spans.push(Span::styled(text, current.unwrap_or_default()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bst::local::build_tree;

    #[test]
    fn test_layout_in_order_columns() {
        let tree = build_tree(&[15, 6, 23, 4, 7]).unwrap();
        let placed = layout(&tree);
        let find = |v: u32| placed.iter().find(|n| n.value == v).copied().unwrap();

        assert_eq!(find(4).column, 0);
        assert_eq!(find(6).column, 1);
        assert_eq!(find(7).column, 2);
        assert_eq!(find(15).column, 3);
        assert_eq!(find(23).column, 4);

        assert_eq!(find(15).parent_column, None);
        assert_eq!(find(6).parent_column, Some(3));
        assert_eq!(find(4).parent_column, Some(1));
        assert_eq!(find(7).parent_column, Some(1));
        assert_eq!(find(23).depth, 1);
    }

    #[test]
    fn test_grid_has_connector_rows() {
        let tree = build_tree(&[2, 1, 3]).unwrap();
        let lines = grid_lines(&layout(&tree), None);
        assert_eq!(lines.len(), 3);
        let connectors: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(connectors.contains('/'));
        assert!(connectors.contains('\\'));
    }
}
