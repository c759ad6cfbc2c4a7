//! Consumer side of the BST contract
//!
//! A [`BstSession`] owns the committed tree, sends it with every request and
//! replays the returned steps through its own [`Player`]. The tree returned
//! by the service is held back until playback reaches the final step, so the
//! old shape stays on screen while the walk is animated.

use super::{BstOperation, BstRequest, BstResponse, BstService, BstStep, TreeNode};
use crate::config::BST_SPEED_MS;
use crate::errors::BstError;
use crate::input::validate_bst_value;
use crate::player::{Player, PlayerState, Toggle};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct BstSession {
    tree: Option<TreeNode>,
    player: Player<BstStep>,
    /// Tree from the last response, waiting for playback to finish
    pending: Option<Option<TreeNode>>,
    operation: Option<BstOperation>,
    message: String,
}

impl Default for BstSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BstSession {
    pub fn new() -> Self {
        BstSession {
            tree: None,
            player: Player::new(Duration::from_millis(BST_SPEED_MS)),
            pending: None,
            operation: None,
            message: String::from("Tree is empty."),
        }
    }

    /// Start from an existing tree
    pub fn with_tree(tree: Option<TreeNode>) -> Self {
        let mut session = Self::new();
        session.message = match &tree {
            Some(root) => format!("Tree loaded with {} nodes.", root.len()),
            None => String::from("Tree is empty."),
        };
        session.tree = tree;
        session
    }

    /// Committed tree; does not reflect an operation still being replayed
    pub fn tree(&self) -> Option<&TreeNode> {
        self.tree.as_ref()
    }

    /// Tree to draw for the current step
    pub fn display_tree(&self) -> Option<&TreeNode> {
        match self.player.current().and_then(|s| s.final_tree.as_ref()) {
            Some(tree) => Some(tree),
            None => self.tree.as_ref(),
        }
    }

    pub fn player(&self) -> &Player<BstStep> {
        &self.player
    }

    pub fn current_step(&self) -> Option<&BstStep> {
        self.player.current()
    }

    pub fn operation(&self) -> Option<BstOperation> {
        self.operation
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Run one operation against `service`.
    ///
    /// Any failure is final for this call: the message reports it and the
    /// committed tree is left as it was.
    pub fn operate(
        &mut self,
        operation: BstOperation,
        value: i64,
        service: &mut dyn BstService,
        now: Instant,
    ) -> Result<(), BstError> {
        self.commit_pending();
        self.player.reset();
        self.operation = Some(operation);

        let value = match validate_bst_value(value) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(%operation, error = %e, "rejected bst value");
                let error = BstError::InvalidValue(e);
                self.report_error(&error);
                return Err(error);
            }
        };

        let request = BstRequest {
            operation,
            value,
            tree_state: self.tree.clone(),
        };

        let response = match service.execute(&request) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(%operation, value, error = %e, "bst operation failed");
                self.report_error(&e);
                return Err(e);
            }
        };

        self.apply(response, now);
        Ok(())
    }

    /// Show a failed operation in the status message
    pub fn report_error(&mut self, error: &BstError) {
        self.message = format!("Error: {}", error);
    }

    fn apply(&mut self, response: BstResponse, now: Instant) {
        let BstResponse {
            steps,
            new_tree_state,
            message,
        } = response;

        if steps.is_empty() {
            self.tree = new_tree_state;
            self.message = if message.is_empty() {
                String::from("No steps generated for this operation.")
            } else {
                message
            };
            return;
        }

        tracing::debug!(steps = steps.len(), "replaying bst steps");
        self.message = message;
        self.pending = Some(new_tree_state);
        self.player.load(steps, now);
        self.settle();
    }

    /// Commit the returned tree once playback sits on the final step
    fn settle(&mut self) {
        if self.pending.is_none() || self.player.state() != PlayerState::Complete {
            return;
        }
        self.commit_pending();
        self.message = match self.player.current() {
            Some(step)
                if ["Inserted", "Found", "Deleted"]
                    .iter()
                    .any(|word| step.action.contains(word)) =>
            {
                format!("Operation complete: {}. Tree is stable.", step.action)
            }
            _ => String::from("Operation completed."),
        };
    }

    fn commit_pending(&mut self) {
        let Some(response_tree) = self.pending.take() else {
            return;
        };
        let final_tree = self
            .player
            .steps()
            .last()
            .and_then(|s| s.final_tree.clone());
        self.tree = final_tree.or(response_tree);
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        let moved = self.player.poll(now);
        if moved {
            self.settle();
        }
        moved
    }

    pub fn toggle(&mut self, now: Instant) -> Toggle {
        self.player.toggle(now)
    }

    pub fn step_forward(&mut self) -> bool {
        let moved = self.player.step_forward();
        self.settle();
        moved
    }

    pub fn step_backward(&mut self) -> bool {
        self.player.step_backward()
    }

    pub fn seek_start(&mut self) -> bool {
        self.player.seek_start()
    }

    pub fn seek_end(&mut self) -> bool {
        let moved = self.player.seek_end();
        self.settle();
        moved
    }

    /// Change the replay interval; a pending tick is rescheduled from `now`
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.player.set_interval(interval, now);
    }

    pub fn clear_tree(&mut self) {
        self.player.reset();
        self.pending = None;
        self.operation = None;
        self.tree = None;
        self.message = String::from("Tree cleared.");
        tracing::info!("bst cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bst::local::{build_tree, LocalBstService};

    struct Failing(BstError);

    impl BstService for Failing {
        fn execute(&mut self, _: &BstRequest) -> Result<BstResponse, BstError> {
            Err(self.0.clone())
        }
    }

    struct Fixed(BstResponse);

    impl BstService for Fixed {
        fn execute(&mut self, _: &BstRequest) -> Result<BstResponse, BstError> {
            Ok(self.0.clone())
        }
    }

    const TICK: Duration = Duration::from_millis(BST_SPEED_MS);

    fn run_to_end(session: &mut BstSession, mut now: Instant) {
        while session.player().state() == PlayerState::Playing {
            now += TICK;
            session.poll(now);
        }
    }

    #[test]
    fn test_tree_applied_only_at_completion() {
        let now = Instant::now();
        let mut session = BstSession::with_tree(build_tree(&[15, 6, 23]));
        session
            .operate(BstOperation::Insert, 7, &mut LocalBstService::new(), now)
            .unwrap();

        assert!(!session.tree().unwrap().contains(7));

        run_to_end(&mut session, now);
        assert!(session.tree().unwrap().contains(7));
        assert_eq!(
            session.message(),
            "Operation complete: Inserted. Tree is stable."
        );
    }

    #[test]
    fn test_out_of_range_value_never_reaches_service() {
        let mut session = BstSession::with_tree(build_tree(&[5]));
        let err = session
            .operate(
                BstOperation::Insert,
                1000,
                &mut Failing(BstError::Transport("unreachable".into())),
                Instant::now(),
            )
            .unwrap_err();
        assert!(matches!(err, BstError::InvalidValue(_)));
        assert!(session.message().starts_with("Error: Please enter a number"));
        assert_eq!(session.tree(), build_tree(&[5]).as_ref());
    }

    #[test]
    fn test_service_failure_leaves_tree() {
        let mut session = BstSession::with_tree(build_tree(&[5, 3]));
        let result = session.operate(
            BstOperation::Delete,
            3,
            &mut Failing(BstError::Service {
                status: 500,
                message: "boom".into(),
            }),
            Instant::now(),
        );
        assert!(result.is_err());
        assert_eq!(session.message(), "Error: Service error (status 500): boom");
        assert_eq!(session.tree().unwrap().in_order(), vec![3, 5]);
        assert_eq!(session.player().state(), PlayerState::Empty);
    }

    #[test]
    fn test_empty_steps_apply_immediately() {
        let mut session = BstSession::new();
        let mut service = Fixed(BstResponse {
            steps: Vec::new(),
            new_tree_state: Some(TreeNode::leaf(8)),
            message: String::new(),
        });
        session
            .operate(BstOperation::Insert, 8, &mut service, Instant::now())
            .unwrap();
        assert_eq!(session.tree(), Some(&TreeNode::leaf(8)));
        assert_eq!(session.message(), "No steps generated for this operation.");
    }

    #[test]
    fn test_seek_end_commits() {
        let now = Instant::now();
        let mut session = BstSession::with_tree(build_tree(&[15, 6, 23, 4]));
        session
            .operate(BstOperation::Delete, 6, &mut LocalBstService::new(), now)
            .unwrap();
        session.toggle(now);
        assert!(session.seek_end());
        assert_eq!(session.tree().unwrap().in_order(), vec![4, 15, 23]);
    }

    #[test]
    fn test_new_operation_commits_interrupted_one() {
        let now = Instant::now();
        let mut session = BstSession::with_tree(build_tree(&[15]));
        let mut service = LocalBstService::new();
        session
            .operate(BstOperation::Insert, 6, &mut service, now)
            .unwrap();
        session
            .operate(BstOperation::Search, 6, &mut service, now)
            .unwrap();
        assert_eq!(session.tree().unwrap().in_order(), vec![6, 15]);
    }

    #[test]
    fn test_skipped_insert_reports_plain_completion() {
        let now = Instant::now();
        let mut session = BstSession::with_tree(build_tree(&[15, 6]));
        session
            .operate(BstOperation::Insert, 6, &mut LocalBstService::new(), now)
            .unwrap();
        run_to_end(&mut session, now);
        assert_eq!(
            session.current_step().unwrap().action,
            "Value Already Exists (Skipping)"
        );
        assert_eq!(session.message(), "Operation completed.");
    }

    #[test]
    fn test_step_backward_refused_while_replaying() {
        let now = Instant::now();
        let mut session = BstSession::with_tree(build_tree(&[15, 6, 23]));
        session
            .operate(BstOperation::Search, 23, &mut LocalBstService::new(), now)
            .unwrap();
        session.poll(now + TICK);
        assert!(!session.step_backward());
        assert_eq!(session.player().index(), 1);
        assert_eq!(session.player().state(), PlayerState::Playing);

        session.toggle(now + TICK);
        assert!(session.step_backward());
        assert_eq!(session.player().index(), 0);
    }

    #[test]
    fn test_set_interval() {
        let mut session = BstSession::new();
        session.set_interval(Duration::from_millis(125), Instant::now());
        assert_eq!(session.player().interval(), Duration::from_millis(125));
    }

    #[test]
    fn test_clear_tree() {
        let mut session = BstSession::with_tree(build_tree(&[1, 2, 3]));
        session.clear_tree();
        assert!(session.tree().is_none());
        assert_eq!(session.message(), "Tree cleared.");
    }
}
