// Selection sort; the minimum candidate rides in the pivot marker

use crate::step::{Markers, SortedSet, StepRecorder, Steps};

pub fn steps(input: &[u32]) -> Steps {
    let mut array = input.to_vec();
    let n = array.len();
    let mut rec = StepRecorder::new(&array);
    let mut sorted = SortedSet::new();

    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;

        rec.record_marked(
            format!("Starting pass {}. Current index is {}.", i + 1, i),
            &[i],
            None,
            &sorted,
            Markers::pivot(Some(min_index)),
        );

        for j in i + 1..n {
            rec.record_marked(
                format!(
                    "Comparing {} at {} with current minimum {} at {}.",
                    array[j], j, array[min_index], min_index
                ),
                &[j],
                None,
                &sorted,
                Markers::pivot(Some(min_index)),
            );

            if array[j] < array[min_index] {
                min_index = j;
                rec.record_marked(
                    format!("New minimum found: {} at index {}.", array[min_index], min_index),
                    &[j],
                    None,
                    &sorted,
                    Markers::pivot(Some(min_index)),
                );
            }

            rec.record_marked(
                "Comparison done.",
                &[],
                None,
                &sorted,
                Markers::pivot(Some(min_index)),
            );
        }

        if min_index != i {
            array.swap(i, min_index);
            rec.record(
                format!(
                    "Swapping {} (current position) with {} (new smallest) to place smallest element at {}.",
                    array[min_index], array[i], i
                ),
                &[i, min_index],
                Some(array.as_slice()),
                &sorted,
            );
        } else {
            rec.record(
                format!("Element at {} is already the smallest in the unsorted portion.", i),
                &[i],
                None,
                &sorted,
            );
        }

        sorted.insert(i);
        rec.record(
            format!("Position {} is finalized (Sorted).", i),
            &[],
            None,
            &sorted,
        );
    }

    if n > 0 && sorted.insert(n - 1) {
        rec.record(
            format!("Final element at index {} is sorted.", n - 1),
            &[],
            None,
            &sorted,
        );
    }

    rec.record("Finished Selection Sort", &[], None, &SortedSet::full(n));
    rec.finish()
}
