//! Shell sort with the halving gap sequence `n/2, n/4, ..., 1`
//!
//! Nothing is marked sorted until the closing step of the run.

use crate::step::{Markers, SortedSet, StepRecorder, Steps};

pub fn steps(input: &[u32]) -> Steps {
    let mut array = input.to_vec();
    let n = array.len();
    let mut rec = StepRecorder::new(&array);
    let sorted = SortedSet::new();
    let mut gap = n / 2;

    while gap > 0 {
        let marker = Markers::gap(gap);
        rec.record_marked(
            format!("Starting pass with Gap = {}", gap),
            &[],
            None,
            &sorted,
            marker,
        );

        for i in gap..n {
            let selected = array[i];
            let mut j = i;

            rec.record_marked(
                format!("Selecting element {} at index {}. Gap = {}", selected, i, gap),
                &[i],
                None,
                &sorted,
                marker,
            );

            while j >= gap && array[j - gap] > selected {
                rec.record_marked(
                    format!(
                        "Comparing {} at {} and selected element {}. Gap = {}",
                        array[j - gap],
                        j - gap,
                        selected,
                        gap
                    ),
                    &[j, j - gap],
                    None,
                    &sorted,
                    marker,
                );

                array[j] = array[j - gap];
                rec.record_marked(
                    format!("Shifting {} to {}. Gap = {}", array[j - gap], j, gap),
                    &[j],
                    Some(array.as_slice()),
                    &sorted,
                    marker,
                );

                j -= gap;
                rec.record_marked(
                    format!("Resetting highlights. Gap = {}", gap),
                    &[],
                    None,
                    &sorted,
                    marker,
                );
            }

            array[j] = selected;
            rec.record_marked(
                format!("Placing {} at index {}. Gap = {}", selected, j, gap),
                &[j],
                Some(array.as_slice()),
                &sorted,
                marker,
            );
        }

        gap /= 2;
    }

    rec.record_marked(
        "Finished Shell Sort",
        &[],
        None,
        &SortedSet::full(n),
        Markers::gap(0),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts() {
        let steps = steps(&[23, 29, 15, 19, 31, 7, 9, 5, 2]);
        assert_eq!(
            steps.last().unwrap().array,
            vec![2, 5, 7, 9, 15, 19, 23, 29, 31]
        );
    }

    #[test]
    fn test_gap_sequence() {
        let steps = steps(&[8, 7, 6, 5, 4, 3, 2, 1, 0]);
        let passes: Vec<_> = steps
            .iter()
            .filter(|s| s.action.starts_with("Starting pass"))
            .map(|s| s.gap.unwrap())
            .collect();
        assert_eq!(passes, vec![4, 2, 1]);
        assert_eq!(steps.last().unwrap().gap, Some(0));
    }

    #[test]
    fn test_no_incremental_sorted_marks() {
        let steps = steps(&[4, 3, 2, 1]);
        let (last, rest) = steps.split_last().unwrap();
        assert!(rest.iter().all(|s| s.sorted_indices.is_empty()));
        assert_eq!(last.sorted_indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_shift_step_shape() {
        let steps = steps(&[2, 1]);
        let actions: Vec<_> = steps.iter().map(|s| s.action.as_str()).collect();
        assert_eq!(
            actions,
            vec![
                "Starting pass with Gap = 1",
                "Selecting element 1 at index 1. Gap = 1",
                "Comparing 2 at 0 and selected element 1. Gap = 1",
                "Shifting 2 to 1. Gap = 1",
                "Resetting highlights. Gap = 1",
                "Placing 1 at index 0. Gap = 1",
                "Finished Shell Sort",
            ]
        );
        assert_eq!(steps[3].array, vec![2, 2]);
        assert_eq!(steps[5].array, vec![1, 2]);
    }
}
