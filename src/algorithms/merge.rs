//! Top-down merge sort
//!
//! Segments are half-open `[start, end)`. Ties take the left run first, so
//! the sort is stable. Each placement records a comparison step followed by
//! a placement step carrying the updated array.

use crate::step::{SortedSet, StepRecorder, Steps};

struct MergeSort {
    array: Vec<u32>,
    rec: StepRecorder,
    sorted: SortedSet,
}

pub fn steps(input: &[u32]) -> Steps {
    let mut sort = MergeSort {
        array: input.to_vec(),
        rec: StepRecorder::new(input),
        sorted: SortedSet::new(),
    };

    let n = sort.array.len();
    sort.split(0, n);

    let MergeSort { mut rec, .. } = sort;
    rec.record("Finished Merge Sort", &[], None, &SortedSet::full(n));
    rec.finish()
}

fn segment(start: usize, end: usize) -> Vec<usize> {
    (start..end).collect()
}

impl MergeSort {
    fn split(&mut self, start: usize, end: usize) {
        if end - start <= 1 {
            return;
        }

        self.rec.record(
            format!("Splitting array segment from {} to {}", start, end - 1),
            &segment(start, end),
            None,
            &self.sorted,
        );

        let mid = (start + end) / 2;
        self.split(start, mid);
        self.split(mid, end);
        self.merge(start, mid, end);
    }

    fn merge(&mut self, start: usize, mid: usize, end: usize) {
        let left = self.array[start..mid].to_vec();
        let right = self.array[mid..end].to_vec();
        let (mut i, mut j, mut k) = (0, 0, start);

        self.rec.record(
            format!("Preparing to merge elements from index {} to {}", start, end - 1),
            &segment(start, end),
            None,
            &self.sorted,
        );

        while i < left.len() && j < right.len() {
            self.rec.record(
                format!("Comparing {} and {}", left[i], right[j]),
                &[start + i, mid + j],
                None,
                &self.sorted,
            );

            if left[i] <= right[j] {
                self.array[k] = left[i];
                i += 1;
            } else {
                self.array[k] = right[j];
                j += 1;
            }

            self.rec.record(
                format!("Placing element {} at index {}", self.array[k], k),
                &[k],
                Some(self.array.as_slice()),
                &self.sorted,
            );
            k += 1;
        }

        while i < left.len() {
            self.array[k] = left[i];
            self.rec.record(
                format!(
                    "Placing remaining element {} from left half at {}",
                    self.array[k], k
                ),
                &[k],
                Some(self.array.as_slice()),
                &self.sorted,
            );
            i += 1;
            k += 1;
        }

        while j < right.len() {
            self.array[k] = right[j];
            self.rec.record(
                format!(
                    "Placing remaining element {} from right half at {}",
                    self.array[k], k
                ),
                &[k],
                Some(self.array.as_slice()),
                &self.sorted,
            );
            j += 1;
            k += 1;
        }

        self.rec.record(
            format!("Merged segment complete from index {} to {}", start, end - 1),
            &segment(start, end),
            None,
            &self.sorted,
        );
    }
}
