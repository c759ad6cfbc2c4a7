//! Bubble sort with early exit
//!
//! When a pass makes no swaps the remaining unsorted prefix is marked sorted
//! on the spot, so the final state never shows stale "unsorted" bars.

use crate::step::{SortedSet, StepRecorder, Steps};

pub fn steps(input: &[u32]) -> Steps {
    let mut array = input.to_vec();
    let n = array.len();
    let mut rec = StepRecorder::new(&array);
    let mut sorted = SortedSet::new();

    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;

        for j in 0..n - 1 - i {
            rec.record(
                format!("Comparing array[{}] and array[{}]", j, j + 1),
                &[j, j + 1],
                None,
                &sorted,
            );

            if array[j] > array[j + 1] {
                let (a, b) = (array[j], array[j + 1]);
                array.swap(j, j + 1);
                swapped = true;
                rec.record(
                    format!("Swapping {} and {}", a, b),
                    &[j, j + 1],
                    Some(array.as_slice()),
                    &sorted,
                );
            }

            rec.record(
                "Comparison done. Resetting comparison highlights.",
                &[],
                None,
                &sorted,
            );
        }

        let boundary = n - 1 - i;
        sorted.insert(boundary);
        rec.record(
            format!("Position {} is finalized (Sorted).", boundary),
            &[boundary],
            None,
            &sorted,
        );

        if !swapped {
            for k in 0..boundary {
                sorted.insert(k);
            }
            break;
        }
    }

    if n > 0 && sorted.insert(0) {
        rec.record("Final element at index 0 is sorted.", &[0], None, &sorted);
    }

    rec.record("Finished Bubble Sort", &[], None, &SortedSet::full(n));
    rec.finish()
}
