// Step records and the recorder that builds them

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// One snapshot of visualization state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub array: Vec<u32>,
    pub action: String,
    pub highlight_indices: Vec<usize>,
    pub sorted_indices: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<usize>,
    /// Signed because a failed binary search can leave `high` at -1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<isize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_target: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_index: Option<usize>,
}

impl Step {
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlight_indices.contains(&index)
    }

    pub fn is_sorted(&self, index: usize) -> bool {
        self.sorted_indices.contains(&index)
    }

    /// True while `index` sits inside the live binary-search window
    pub fn in_search_range(&self, index: usize) -> bool {
        match (self.low, self.high) {
            (Some(low), Some(high)) => index >= low && (index as isize) <= high,
            _ => false,
        }
    }
}

/// Auxiliary markers attached to a step alongside the array and highlights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    pub pivot_index: Option<usize>,
    pub gap: Option<usize>,
    pub low: Option<usize>,
    pub high: Option<isize>,
    pub mid: Option<usize>,
    pub found: Option<bool>,
    pub search_target: Option<u32>,
    pub current_index: Option<usize>,
}

impl Markers {
    pub fn pivot(pivot_index: Option<usize>) -> Self {
        Markers {
            pivot_index,
            ..Markers::default()
        }
    }

    pub fn gap(gap: usize) -> Self {
        Markers {
            gap: Some(gap),
            ..Markers::default()
        }
    }
}

/// Insertion-ordered set of finalized indices that only ever grows
#[derive(Debug, Clone, Default)]
pub struct SortedSet {
    order: Vec<usize>,
    seen: FxHashSet<usize>,
}

impl SortedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every index in `[0, n)`
    pub fn full(n: usize) -> Self {
        let mut set = SortedSet::new();
        for i in 0..n {
            set.insert(i);
        }
        set
    }

    /// Returns false if the index was already present
    pub fn insert(&mut self, index: usize) -> bool {
        if self.seen.insert(index) {
            self.order.push(index);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.seen.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }
}

/// Finished, read-only step sequence produced by one driver run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Steps(Vec<Step>);

impl Deref for Steps {
    type Target = [Step];

    fn deref(&self) -> &[Step] {
        &self.0
    }
}

impl From<Vec<Step>> for Steps {
    fn from(steps: Vec<Step>) -> Self {
        Steps(steps)
    }
}

impl From<Steps> for Vec<Step> {
    fn from(steps: Steps) -> Self {
        steps.0
    }
}

/// Appends snapshots for one driver run
///
/// Every recorded step owns a full copy of the array, so later steps never
/// alias earlier ones. When a snapshot is passed it also becomes the working
/// array used by later steps that don't pass one.
#[derive(Debug)]
pub struct StepRecorder {
    array: Vec<u32>,
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new(input: &[u32]) -> Self {
        StepRecorder {
            array: input.to_vec(),
            steps: Vec::new(),
        }
    }

    /// Current working array
    pub fn array(&self) -> &[u32] {
        &self.array
    }

    pub fn record(
        &mut self,
        action: impl Into<String>,
        highlight: &[usize],
        snapshot: Option<&[u32]>,
        sorted: &SortedSet,
    ) {
        self.record_marked(action, highlight, snapshot, sorted, Markers::default());
    }

    pub fn record_marked(
        &mut self,
        action: impl Into<String>,
        highlight: &[usize],
        snapshot: Option<&[u32]>,
        sorted: &SortedSet,
        markers: Markers,
    ) {
        if let Some(snapshot) = snapshot {
            self.array.clear();
            self.array.extend_from_slice(snapshot);
        }

        self.steps.push(Step {
            array: self.array.clone(),
            action: action.into(),
            highlight_indices: highlight.to_vec(),
            sorted_indices: sorted.as_slice().to_vec(),
            pivot_index: markers.pivot_index,
            gap: markers.gap,
            low: markers.low,
            high: markers.high,
            mid: markers.mid,
            found: markers.found,
            search_target: markers.search_target,
            current_index: markers.current_index,
        });
    }

    pub fn finish(self) -> Steps {
        Steps(self.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_independent_copy() {
        let mut rec = StepRecorder::new(&[3, 1, 2]);
        let sorted = SortedSet::new();
        rec.record("start", &[], None, &sorted);

        let mut working = rec.array().to_vec();
        working.swap(0, 1);
        rec.record("swap", &[0, 1], Some(working.as_slice()), &sorted);
        working.swap(1, 2);

        let steps = rec.finish();
        assert_eq!(steps[0].array, vec![3, 1, 2]);
        assert_eq!(steps[1].array, vec![1, 3, 2]);
    }

    #[test]
    fn test_snapshot_becomes_working_array() {
        let mut rec = StepRecorder::new(&[2, 1]);
        let sorted = SortedSet::new();
        rec.record("swap", &[0, 1], Some(&[1, 2][..]), &sorted);
        rec.record("cleared", &[], None, &sorted);

        let steps = rec.finish();
        assert_eq!(steps[1].array, vec![1, 2]);
        assert!(steps[1].highlight_indices.is_empty());
    }

    #[test]
    fn test_sorted_set_ignores_duplicates() {
        let mut set = SortedSet::new();
        assert!(set.insert(4));
        assert!(set.insert(0));
        assert!(!set.insert(4));
        assert_eq!(set.as_slice(), &[4, 0]);
        assert!(set.contains(0));
        assert!(!set.contains(1));
    }

    #[test]
    fn test_search_range() {
        let mut rec = StepRecorder::new(&[1, 2, 3]);
        rec.record_marked(
            "bounds",
            &[],
            None,
            &SortedSet::new(),
            Markers {
                low: Some(1),
                high: Some(2),
                ..Markers::default()
            },
        );
        let steps = rec.finish();
        assert!(!steps[0].in_search_range(0));
        assert!(steps[0].in_search_range(1));
        assert!(steps[0].in_search_range(2));
    }
}
