//! In-process BST service
//!
//! Answers the same contract as the remote service: the tree travels in the
//! request and the mutated tree comes back in the response. Step actions use
//! the vocabulary the tree renderer understands ("Visiting", "Move Left",
//! "Move Right", "Root Inserted", "Inserted", "Value Already Exists
//! (Skipping)", "Target Found", "Value Not Found", "Value Deleted").

use super::{BstOperation, BstRequest, BstResponse, BstService, BstStep, TreeNode};
use crate::errors::BstError;

#[derive(Debug, Default)]
pub struct LocalBstService;

impl LocalBstService {
    pub fn new() -> Self {
        LocalBstService
    }
}

impl BstService for LocalBstService {
    fn execute(&mut self, request: &BstRequest) -> Result<BstResponse, BstError> {
        let mut tree = request.tree_state.clone();
        let value = request.value;
        let (mut steps, outcome) = descend(tree.as_ref(), value, request.operation);

        let message = match (request.operation, outcome) {
            (BstOperation::Insert, Outcome::Missing) => {
                tree = Some(insert(tree.take(), value));
                format!("Inserted {}", value)
            }
            (BstOperation::Insert, Outcome::Present) => {
                format!("{} already exists; tree unchanged", value)
            }
            (BstOperation::Search, Outcome::Present) => format!("Found {}", value),
            (BstOperation::Search, Outcome::Missing) => format!("{} is not in the tree", value),
            (BstOperation::Delete, Outcome::Present) => {
                tree = delete(tree.take(), value);
                format!("Deleted {}", value)
            }
            (BstOperation::Delete, Outcome::Missing) => {
                format!("{} is not in the tree; nothing deleted", value)
            }
        };

        if let Some(last) = steps.last_mut() {
            last.final_tree = tree.clone();
        }

        tracing::debug!(
            operation = %request.operation,
            value,
            steps = steps.len(),
            "local bst operation"
        );

        Ok(BstResponse {
            steps,
            new_tree_state: tree,
            message,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Present,
    Missing,
}

/// Walk from the root toward `value`, recording each decision
fn descend(root: Option<&TreeNode>, value: u32, operation: BstOperation) -> (Vec<BstStep>, Outcome) {
    let mut steps = Vec::new();
    let mut path = Vec::new();

    let step = |action: &str, subject: u32, path: &[u32]| BstStep {
        action: action.to_string(),
        value: subject,
        path: path.to_vec(),
        code_line: Some(code_line(operation, action)),
        final_tree: None,
    };

    let Some(root) = root else {
        match operation {
            BstOperation::Insert => {
                path.push(value);
                steps.push(step("Root Inserted", value, &path));
            }
            BstOperation::Search | BstOperation::Delete => {
                steps.push(step("Value Not Found", value, &path));
            }
        }
        return (steps, Outcome::Missing);
    };

    let mut node = root;
    loop {
        path.push(node.value);
        steps.push(step("Visiting", node.value, &path));

        if value == node.value {
            let action = match operation {
                BstOperation::Insert => "Value Already Exists (Skipping)",
                BstOperation::Search => "Target Found",
                BstOperation::Delete => "Value Deleted",
            };
            steps.push(step(action, node.value, &path));
            return (steps, Outcome::Present);
        }

        let (action, next) = if value < node.value {
            ("Move Left", node.left.as_deref())
        } else {
            ("Move Right", node.right.as_deref())
        };
        steps.push(step(action, node.value, &path));

        match next {
            Some(child) => node = child,
            None => {
                match operation {
                    BstOperation::Insert => {
                        path.push(value);
                        steps.push(step("Inserted", value, &path));
                    }
                    BstOperation::Search | BstOperation::Delete => {
                        steps.push(step("Value Not Found", node.value, &path));
                    }
                }
                return (steps, Outcome::Missing);
            }
        }
    }
}

/// Pseudocode line for an action, numbered as in the tree listings
fn code_line(operation: BstOperation, action: &str) -> usize {
    match (operation, action) {
        (_, "Visiting") => 2,
        (BstOperation::Delete, "Move Left") => 4,
        (BstOperation::Delete, "Move Right") => 6,
        (_, "Move Left") => 5,
        (_, "Move Right") => 7,
        (BstOperation::Insert, "Value Already Exists (Skipping)") => 8,
        (BstOperation::Delete, "Value Deleted") => 8,
        (BstOperation::Delete, "Value Not Found") => 2,
        _ => 3,
    }
}

fn insert(node: Option<TreeNode>, value: u32) -> TreeNode {
    match node {
        None => TreeNode::leaf(value),
        Some(mut n) => {
            if value < n.value {
                n.left = Some(Box::new(insert(n.left.take().map(|b| *b), value)));
            } else if value > n.value {
                n.right = Some(Box::new(insert(n.right.take().map(|b| *b), value)));
            }
            n
        }
    }
}

/// Remove `value`; a node with two children takes its in-order successor
fn delete(node: Option<TreeNode>, value: u32) -> Option<TreeNode> {
    let mut n = node?;
    if value < n.value {
        n.left = delete(n.left.take().map(|b| *b), value).map(Box::new);
        return Some(n);
    }
    if value > n.value {
        n.right = delete(n.right.take().map(|b| *b), value).map(Box::new);
        return Some(n);
    }

    match (n.left.take(), n.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(*child),
        (Some(left), Some(right)) => {
            let successor = min_value(&right);
            Some(TreeNode {
                value: successor,
                left: Some(left),
                right: delete(Some(*right), successor).map(Box::new),
            })
        }
    }
}

fn min_value(node: &TreeNode) -> u32 {
    let mut node = node;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    node.value
}

/// Build a tree by inserting `values` in order
pub fn build_tree(values: &[u32]) -> Option<TreeNode> {
    values
        .iter()
        .fold(None, |tree, &value| Some(insert(tree, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(operation: BstOperation, value: u32, tree: Option<TreeNode>) -> BstResponse {
        LocalBstService::new()
            .execute(&BstRequest {
                operation,
                value,
                tree_state: tree,
            })
            .unwrap()
    }

    fn actions(response: &BstResponse) -> Vec<&str> {
        response.steps.iter().map(|s| s.action.as_str()).collect()
    }

    #[test]
    fn test_insert_into_empty() {
        let response = run(BstOperation::Insert, 50, None);
        assert_eq!(actions(&response), vec!["Root Inserted"]);
        assert_eq!(response.new_tree_state, Some(TreeNode::leaf(50)));
        assert_eq!(response.steps[0].final_tree, Some(TreeNode::leaf(50)));
    }

    #[test]
    fn test_insert_walks_path() {
        let tree = build_tree(&[15, 6, 23]);
        let response = run(BstOperation::Insert, 7, tree);
        assert_eq!(
            actions(&response),
            vec!["Visiting", "Move Left", "Visiting", "Move Right", "Inserted"]
        );
        let lines: Vec<_> = response.steps.iter().map(|s| s.code_line).collect();
        assert_eq!(lines, vec![Some(2), Some(5), Some(2), Some(7), Some(3)]);
        let last = response.steps.last().unwrap();
        assert_eq!(last.path, vec![15, 6, 7]);
        assert_eq!(
            response.new_tree_state.unwrap().in_order(),
            vec![6, 7, 15, 23]
        );
    }

    #[test]
    fn test_duplicate_insert_is_skipped() {
        let tree = build_tree(&[15, 6]);
        let response = run(BstOperation::Insert, 6, tree.clone());
        assert_eq!(
            response.steps.last().unwrap().action,
            "Value Already Exists (Skipping)"
        );
        assert_eq!(response.new_tree_state, tree);
    }

    #[test]
    fn test_search_hit_and_miss() {
        let tree = build_tree(&[15, 6, 23, 4, 7, 71]);
        let hit = run(BstOperation::Search, 71, tree.clone());
        assert_eq!(hit.steps.last().unwrap().action, "Target Found");
        assert_eq!(hit.steps.last().unwrap().path, vec![15, 23, 71]);

        let miss = run(BstOperation::Search, 5, tree.clone());
        assert_eq!(miss.steps.last().unwrap().action, "Value Not Found");
        assert_eq!(miss.new_tree_state, tree);
    }

    #[test]
    fn test_delete_two_children_uses_successor() {
        let tree = build_tree(&[15, 6, 23, 4, 7, 71, 20]);
        let response = run(BstOperation::Delete, 15, tree);
        let tree = response.new_tree_state.unwrap();
        assert_eq!(tree.value, 20);
        assert_eq!(tree.in_order(), vec![4, 6, 7, 20, 23, 71]);
    }

    #[test]
    fn test_delete_last_node_empties_tree() {
        let response = run(BstOperation::Delete, 9, build_tree(&[9]));
        assert_eq!(response.new_tree_state, None);
        assert_eq!(response.steps.last().unwrap().action, "Value Deleted");
    }
}
