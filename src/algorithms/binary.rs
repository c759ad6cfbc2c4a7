//! Binary search over an ascending array
//!
//! Bounds are tracked as signed integers because `high` drops to -1 when the
//! target is smaller than every element.

use crate::step::{Markers, SortedSet, StepRecorder, Steps};

pub fn steps(input: &[u32], target: u32) -> Steps {
    let mut rec = StepRecorder::new(input);
    let none = SortedSet::new();
    let marker = |low: isize, high: isize, mid: Option<usize>, found: bool| Markers {
        low: Some(low.max(0) as usize),
        high: Some(high),
        mid,
        found: Some(found),
        search_target: Some(target),
        ..Markers::default()
    };

    let mut low: isize = 0;
    let mut high: isize = input.len() as isize - 1;

    rec.record_marked(
        format!("Search started for target {}. Array must be sorted.", target),
        &[],
        None,
        &none,
        marker(low, high, None, false),
    );

    let mut found_at = None;
    while low <= high {
        let mid = ((low + high) / 2) as usize;
        let value = input[mid];

        rec.record_marked(
            format!("Checking mid element at index {}: Value is {}", mid, value),
            &[mid],
            None,
            &none,
            marker(low, high, Some(mid), false),
        );

        if value == target {
            found_at = Some(mid);
            break;
        } else if value < target {
            low = mid as isize + 1;
            rec.record_marked(
                format!(
                    "Target ({}) is greater than {}. Searching right half (New Low: {}).",
                    target, value, low
                ),
                &[],
                None,
                &none,
                marker(low, high, Some(mid), false),
            );
        } else {
            high = mid as isize - 1;
            rec.record_marked(
                format!(
                    "Target ({}) is less than {}. Searching left half (New High: {}).",
                    target, value, high
                ),
                &[],
                None,
                &none,
                marker(low, high, Some(mid), false),
            );
        }
    }

    match found_at {
        Some(mid) => rec.record_marked(
            format!("SUCCESS! Target {} found at index {}. Search complete.", target, mid),
            &[mid],
            None,
            &none,
            marker(low, high, Some(mid), true),
        ),
        None => rec.record_marked(
            format!(
                "FAILURE! Target {} not found. Low ({}) > High ({}).",
                target, low, high
            ),
            &[],
            None,
            &none,
            marker(low, high, None, false),
        ),
    }

    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_middle() {
        let steps = steps(&[10, 20, 30, 40, 50], 30);
        let hit = steps.iter().find(|s| s.found == Some(true)).unwrap();
        assert_eq!(hit.mid, Some(2));
        assert_eq!(steps.len(), 3);
    }

    #[test]
    fn test_absent_target_ends_with_crossed_bounds() {
        let steps = steps(&[10, 20, 30, 40, 50], 25);
        let last = steps.last().unwrap();
        assert_eq!(last.found, Some(false));
        assert_eq!(last.low, Some(2));
        assert_eq!(last.high, Some(1));
        assert!(last.low.unwrap() as isize > last.high.unwrap());
    }

    #[test]
    fn test_high_goes_negative() {
        let steps = steps(&[10, 20], 5);
        let last = steps.last().unwrap();
        assert_eq!(last.low, Some(0));
        assert_eq!(last.high, Some(-1));
        assert_eq!(last.action, "FAILURE! Target 5 not found. Low (0) > High (-1).");
    }

    #[test]
    fn test_bound_updates_recorded() {
        let steps = steps(&[1, 2, 3, 4, 5, 6, 7], 6);
        let lows: Vec<_> = steps
            .iter()
            .filter(|s| s.action.contains("Searching right half"))
            .map(|s| s.low.unwrap())
            .collect();
        assert_eq!(lows, vec![4]);
    }
}
