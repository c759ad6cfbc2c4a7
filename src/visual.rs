//! Visual-state precedence for bars and tree nodes
//!
//! Each rule table is an ordered list of `(predicate, state)` pairs. The
//! first predicate that holds decides the state; nothing matching means
//! [`VisualState::Idle`]. The tables are plain data so the precedence can be
//! tested without a terminal.

use crate::algorithms::{Algorithm, AlgorithmKind};
use crate::step::Step;

/// How a bar or node should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualState {
    Idle,
    /// Search target located here
    Found,
    /// Linear-search cursor
    Checking,
    /// Binary-search midpoint
    Mid,
    /// Inside the live binary-search window
    InRange,
    /// Outside the binary-search window
    Excluded,
    Sorted,
    Pivot,
    /// Being compared or moved
    Compared,
    /// BST node that was just inserted
    Inserted,
    /// BST node visited on the way down
    Visiting,
    /// BST lookup failed or was skipped here
    Missing,
    /// Earlier node on the current BST path
    OnPath,
}

/// Which family of bar rules applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarMode {
    Sort,
    LinearSearch,
    BinarySearch,
}

impl BarMode {
    pub fn for_algorithm(algorithm: Algorithm) -> Option<Self> {
        match (algorithm, algorithm.kind()) {
            (Algorithm::LinearSearch, _) => Some(BarMode::LinearSearch),
            (Algorithm::BinarySearch, _) => Some(BarMode::BinarySearch),
            (_, AlgorithmKind::Sort) => Some(BarMode::Sort),
            _ => None,
        }
    }
}

/// Everything a bar rule may look at
#[derive(Debug, Clone, Copy)]
pub struct BarContext<'a> {
    pub step: &'a Step,
    pub index: usize,
    pub mode: BarMode,
    /// Player is on the last step
    pub complete: bool,
}

pub type BarRule = (fn(&BarContext) -> bool, VisualState);

pub const BAR_RULES: &[BarRule] = &[
    (is_found, VisualState::Found),
    (is_linear_check, VisualState::Checking),
    (is_search_mid, VisualState::Mid),
    (is_search_range, VisualState::InRange),
    (is_binary_mode, VisualState::Excluded),
    (is_sorted, VisualState::Sorted),
    (is_pivot, VisualState::Pivot),
    (is_compared, VisualState::Compared),
];

fn is_found(ctx: &BarContext) -> bool {
    if ctx.step.found != Some(true) {
        return false;
    }
    match ctx.mode {
        BarMode::BinarySearch => ctx.step.mid == Some(ctx.index),
        BarMode::LinearSearch => ctx.step.current_index == Some(ctx.index),
        BarMode::Sort => false,
    }
}

fn is_linear_check(ctx: &BarContext) -> bool {
    ctx.mode == BarMode::LinearSearch && ctx.step.is_highlighted(ctx.index)
}

fn is_search_mid(ctx: &BarContext) -> bool {
    ctx.mode == BarMode::BinarySearch && ctx.step.mid == Some(ctx.index)
}

fn is_search_range(ctx: &BarContext) -> bool {
    ctx.mode == BarMode::BinarySearch
        && ctx.step.in_search_range(ctx.index)
        && ctx.step.mid != Some(ctx.index)
}

fn is_binary_mode(ctx: &BarContext) -> bool {
    ctx.mode == BarMode::BinarySearch
}

fn is_sorted(ctx: &BarContext) -> bool {
    ctx.mode == BarMode::Sort && (ctx.complete || ctx.step.is_sorted(ctx.index))
}

fn is_pivot(ctx: &BarContext) -> bool {
    ctx.mode == BarMode::Sort && ctx.step.pivot_index == Some(ctx.index)
}

fn is_compared(ctx: &BarContext) -> bool {
    ctx.mode == BarMode::Sort && ctx.step.is_highlighted(ctx.index)
}

pub fn bar_state(ctx: &BarContext) -> VisualState {
    BAR_RULES
        .iter()
        .find(|(applies, _)| applies(ctx))
        .map(|&(_, state)| state)
        .unwrap_or(VisualState::Idle)
}

/// States for every bar of a step, left to right
pub fn bar_states(step: &Step, mode: BarMode, complete: bool) -> Vec<VisualState> {
    (0..step.array.len())
        .map(|index| {
            bar_state(&BarContext {
                step,
                index,
                mode,
                complete,
            })
        })
        .collect()
}

/// Everything a tree-node rule may look at
#[derive(Debug, Clone, Copy)]
pub struct NodeContext<'a> {
    /// Action of the current BST step
    pub action: &'a str,
    /// Node is the subject of the current step
    pub highlighted: bool,
    /// Node appears on the current step's path
    pub on_path: bool,
}

pub type NodeRule = (fn(&NodeContext) -> bool, VisualState);

pub const NODE_RULES: &[NodeRule] = &[
    (node_inserted, VisualState::Inserted),
    (node_found, VisualState::Found),
    (node_visiting, VisualState::Visiting),
    (node_missing, VisualState::Missing),
    (node_on_path, VisualState::OnPath),
];

fn node_inserted(ctx: &NodeContext) -> bool {
    ctx.highlighted && matches!(ctx.action, "Inserted" | "Root Inserted")
}

fn node_found(ctx: &NodeContext) -> bool {
    ctx.highlighted && matches!(ctx.action, "Target Found" | "Value Deleted")
}

fn node_visiting(ctx: &NodeContext) -> bool {
    ctx.highlighted && matches!(ctx.action, "Move Left" | "Move Right" | "Visiting")
}

fn node_missing(ctx: &NodeContext) -> bool {
    ctx.highlighted
        && matches!(
            ctx.action,
            "Value Not Found" | "Value Already Exists (Skipping)"
        )
}

fn node_on_path(ctx: &NodeContext) -> bool {
    !ctx.highlighted && ctx.on_path
}

pub fn node_state(ctx: &NodeContext) -> VisualState {
    NODE_RULES
        .iter()
        .find(|(applies, _)| applies(ctx))
        .map(|&(_, state)| state)
        .unwrap_or(VisualState::Idle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{binary, linear, quick};

    #[test]
    fn test_binary_search_window() {
        let steps = binary::steps(&[10, 20, 30, 40, 50], 40);
        // After "checking mid 2" the low bound moves to 3
        let step = &steps[2];
        assert_eq!(step.low, Some(3));
        let states = bar_states(step, BarMode::BinarySearch, false);
        assert_eq!(
            states,
            vec![
                VisualState::Excluded,
                VisualState::Excluded,
                VisualState::Mid,
                VisualState::InRange,
                VisualState::InRange,
            ]
        );
    }

    #[test]
    fn test_found_beats_mid() {
        let steps = binary::steps(&[10, 20, 30], 20);
        let last = steps.last().unwrap();
        let states = bar_states(last, BarMode::BinarySearch, true);
        assert_eq!(states[1], VisualState::Found);
    }

    #[test]
    fn test_linear_check_and_found() {
        let steps = linear::steps(&[4, 9], 9);
        let checking = bar_states(&steps[1], BarMode::LinearSearch, false);
        assert_eq!(checking, vec![VisualState::Checking, VisualState::Idle]);

        let done = bar_states(steps.last().unwrap(), BarMode::LinearSearch, true);
        assert_eq!(done, vec![VisualState::Idle, VisualState::Found]);
    }

    #[test]
    fn test_sorted_beats_pivot_beats_compared() {
        let steps = quick::steps(&[3, 1, 2]);
        let compare = steps
            .iter()
            .find(|s| s.action.starts_with("Comparing 1"))
            .unwrap();
        let states = bar_states(compare, BarMode::Sort, false);
        assert_eq!(
            states,
            vec![VisualState::Idle, VisualState::Compared, VisualState::Pivot]
        );

        let all_sorted = bar_states(&steps[0], BarMode::Sort, true);
        assert!(all_sorted.iter().all(|&s| s == VisualState::Sorted));
    }

    #[test]
    fn test_search_modes_ignore_sort_markers() {
        let steps = quick::steps(&[3, 1, 2]);
        let states = bar_states(&steps[0], BarMode::LinearSearch, true);
        assert!(states.iter().all(|&s| s == VisualState::Idle));
    }

    #[test]
    fn test_node_rules() {
        let ctx = |action, highlighted, on_path| NodeContext {
            action,
            highlighted,
            on_path,
        };
        assert_eq!(node_state(&ctx("Inserted", true, true)), VisualState::Inserted);
        assert_eq!(node_state(&ctx("Move Left", true, true)), VisualState::Visiting);
        assert_eq!(node_state(&ctx("Value Not Found", true, false)), VisualState::Missing);
        assert_eq!(node_state(&ctx("Move Left", false, true)), VisualState::OnPath);
        assert_eq!(node_state(&ctx("Inserted", false, false)), VisualState::Idle);
    }

    #[test]
    fn test_modes_for_algorithms() {
        assert_eq!(BarMode::for_algorithm(Algorithm::ShellSort), Some(BarMode::Sort));
        assert_eq!(
            BarMode::for_algorithm(Algorithm::BinarySearch),
            Some(BarMode::BinarySearch)
        );
        assert_eq!(BarMode::for_algorithm(Algorithm::BstInsert), None);
    }
}
