//! Quick sort with the Lomuto partition scheme
//!
//! The pivot is always the last element of the current range. It is placed at
//! `i + 1` after partitioning and marked sorted. Ranges of a single element
//! are marked sorted without partitioning.

use crate::step::{Markers, SortedSet, StepRecorder, Steps};

struct QuickSort {
    array: Vec<u32>,
    rec: StepRecorder,
    sorted: SortedSet,
}

pub fn steps(input: &[u32]) -> Steps {
    let mut sort = QuickSort {
        array: input.to_vec(),
        rec: StepRecorder::new(input),
        sorted: SortedSet::new(),
    };

    let n = sort.array.len();
    if n > 0 {
        sort.sort(0, n - 1);
    }

    let QuickSort { mut rec, .. } = sort;
    rec.record("Finished Quick Sort", &[], None, &SortedSet::full(n));
    rec.finish()
}

impl QuickSort {
    /// Sort the inclusive range `[low, high]`
    fn sort(&mut self, low: usize, high: usize) {
        if low < high {
            let pi = self.partition(low, high);
            self.sorted.insert(pi);

            if pi > low {
                self.sort(low, pi - 1);
            }
            if pi < high {
                self.sort(pi + 1, high);
            }
        } else if low == high && self.sorted.insert(low) {
            self.rec.record(
                format!("Sub-array of size 1 at index {} is sorted.", low),
                &[],
                None,
                &self.sorted,
            );
        }
    }

    fn partition(&mut self, low: usize, high: usize) -> usize {
        let pivot = self.array[high];
        let pivot_marker = Markers::pivot(Some(high));
        // Next slot for an element smaller than the pivot
        let mut boundary = low;

        self.rec.record_marked(
            format!("Selecting pivot {} at index {}", pivot, high),
            &[],
            None,
            &self.sorted,
            pivot_marker,
        );

        for j in low..high {
            self.rec.record_marked(
                format!("Comparing {} at {} with pivot {}", self.array[j], j, pivot),
                &[j],
                None,
                &self.sorted,
                pivot_marker,
            );

            if self.array[j] < pivot {
                self.array.swap(boundary, j);
                self.rec.record_marked(
                    format!(
                        "Swapping {} and {} to move small element left",
                        self.array[j], self.array[boundary]
                    ),
                    &[boundary, j],
                    Some(self.array.as_slice()),
                    &self.sorted,
                    pivot_marker,
                );
                boundary += 1;
            }

            self.rec.record_marked(
                "Resetting comparison highlights",
                &[],
                None,
                &self.sorted,
                pivot_marker,
            );
        }

        let pivot_index = boundary;
        self.array.swap(pivot_index, high);

        let mut placed = self.sorted.clone();
        placed.insert(pivot_index);
        self.rec.record(
            format!("Pivot {} placed correctly at index {}", pivot, pivot_index),
            &[pivot_index],
            Some(self.array.as_slice()),
            &placed,
        );

        pivot_index
    }
}
