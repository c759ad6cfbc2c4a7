//! Binary search tree operations via an external collaborator
//!
//! Tree mutation and step generation live behind the [`BstService`] trait.
//! This module fixes the request/response contract and provides:
//!
//! - [`JsonBstService`]: encodes requests as JSON and hands them to any
//!   [`JsonTransport`] (the network layer is supplied by the embedder)
//! - [`local::LocalBstService`]: an in-process implementation of the same
//!   contract, used when no remote service is configured
//! - [`session::BstSession`]: the consumer side that owns the current tree,
//!   replays returned steps and turns failures into status messages
//!
//! Wire format (snake_case JSON):
//!
//! ```text
//! request  { "operation": "insert", "value": 42, "tree_state": {...} | null }
//! response { "steps": [{ "action": "Move Left", "value": 15, "path": [15] }],
//!            "new_tree_state": {...} | null, "message": "..." }
//! ```

pub mod local;
pub mod session;

use crate::errors::BstError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BstOperation {
    Insert,
    Search,
    Delete,
}

impl fmt::Display for BstOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BstOperation::Insert => write!(f, "insert"),
            BstOperation::Search => write!(f, "search"),
            BstOperation::Delete => write!(f, "delete"),
        }
    }
}

/// Serialized tree; `None` children are encoded as `null`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub value: u32,
    #[serde(default)]
    pub left: Option<Box<TreeNode>>,
    #[serde(default)]
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn leaf(value: u32) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        let mut node = Some(self);
        while let Some(n) = node {
            if value == n.value {
                return true;
            }
            node = if value < n.value {
                n.left.as_deref()
            } else {
                n.right.as_deref()
            };
        }
        false
    }

    pub fn in_order(&self) -> Vec<u32> {
        let mut out = Vec::new();
        fn walk(node: &TreeNode, out: &mut Vec<u32>) {
            if let Some(left) = &node.left {
                walk(left, out);
            }
            out.push(node.value);
            if let Some(right) = &node.right {
                walk(right, out);
            }
        }
        walk(self, &mut out);
        out
    }

    pub fn len(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.len()) + self.right.as_ref().map_or(0, |n| n.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BstRequest {
    pub operation: BstOperation,
    pub value: u32,
    pub tree_state: Option<TreeNode>,
}

/// One step of a tree operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BstStep {
    pub action: String,
    /// Node value this step is about
    pub value: u32,
    /// Values visited so far, root first
    #[serde(default)]
    pub path: Vec<u32>,
    /// Pseudocode line (1-based) to highlight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_line: Option<usize>,
    /// Tree after the operation, carried by the final step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_tree: Option<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BstResponse {
    #[serde(default)]
    pub steps: Vec<BstStep>,
    #[serde(default, alias = "new_tree_state_dict")]
    pub new_tree_state: Option<TreeNode>,
    #[serde(default)]
    pub message: String,
}

/// The collaborator that performs tree operations
pub trait BstService {
    fn execute(&mut self, request: &BstRequest) -> Result<BstResponse, BstError>;
}

/// Raw transport for [`JsonBstService`]: deliver a JSON body and return the
/// status code and response body
pub trait JsonTransport {
    fn post(&mut self, body: &str) -> Result<(u16, String), BstError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Speaks the JSON contract over a pluggable transport
#[derive(Debug)]
pub struct JsonBstService<T> {
    transport: T,
}

impl<T: JsonTransport> JsonBstService<T> {
    pub fn new(transport: T) -> Self {
        JsonBstService { transport }
    }
}

impl<T: JsonTransport> BstService for JsonBstService<T> {
    fn execute(&mut self, request: &BstRequest) -> Result<BstResponse, BstError> {
        let body = serde_json::to_string(request)?;
        let (status, text) = self.transport.post(&body)?;

        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status));
            return Err(BstError::Service { status, message });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned {
        status: u16,
        body: &'static str,
        sent: Vec<String>,
    }

    impl JsonTransport for Canned {
        fn post(&mut self, body: &str) -> Result<(u16, String), BstError> {
            self.sent.push(body.to_string());
            Ok((self.status, self.body.to_string()))
        }
    }

    fn canned(status: u16, body: &'static str) -> JsonBstService<Canned> {
        JsonBstService::new(Canned {
            status,
            body,
            sent: Vec::new(),
        })
    }

    fn request() -> BstRequest {
        BstRequest {
            operation: BstOperation::Insert,
            value: 5,
            tree_state: None,
        }
    }

    #[test]
    fn test_request_wire_format() {
        let mut service = canned(200, r#"{"steps": [], "new_tree_state": null, "message": ""}"#);
        service.execute(&request()).unwrap();
        assert_eq!(
            service.transport.sent[0],
            r#"{"operation":"insert","value":5,"tree_state":null}"#
        );
    }

    #[test]
    fn test_decodes_response_with_legacy_key() {
        let mut service = canned(
            200,
            r#"{"steps": [{"action": "Root Inserted", "value": 5, "path": [5]}],
                "new_tree_state_dict": {"value": 5, "left": null, "right": null},
                "message": "ok"}"#,
        );
        let response = service.execute(&request()).unwrap();
        assert_eq!(response.steps[0].action, "Root Inserted");
        assert_eq!(response.new_tree_state, Some(TreeNode::leaf(5)));
    }

    #[test]
    fn test_error_status_uses_error_body() {
        let mut service = canned(400, r#"{"error": "value required"}"#);
        let err = service.execute(&request()).unwrap_err();
        assert_eq!(
            err,
            BstError::Service {
                status: 400,
                message: "value required".to_string()
            }
        );
    }

    #[test]
    fn test_garbage_body_is_decode_error() {
        let mut service = canned(200, "<html>");
        assert!(matches!(
            service.execute(&request()),
            Err(BstError::Decode(_))
        ));
    }

    #[test]
    fn test_tree_helpers() {
        let tree = TreeNode {
            value: 10,
            left: Some(Box::new(TreeNode::leaf(4))),
            right: Some(Box::new(TreeNode {
                value: 20,
                left: None,
                right: Some(Box::new(TreeNode::leaf(30))),
            })),
        };
        assert_eq!(tree.in_order(), vec![4, 10, 20, 30]);
        assert_eq!(tree.len(), 4);
        assert!(tree.contains(30));
        assert!(!tree.contains(5));
    }
}
