// Linear search: scan left to right, stop at the first match

use crate::step::{Markers, SortedSet, StepRecorder, Steps};

pub fn steps(input: &[u32], target: u32) -> Steps {
    let n = input.len();
    let mut rec = StepRecorder::new(input);
    let none = SortedSet::new();
    let marker = |current_index: Option<usize>, found: bool| Markers {
        current_index,
        found: Some(found),
        search_target: Some(target),
        ..Markers::default()
    };

    rec.record_marked(
        format!("Linear Search started for target {}.", target),
        &[],
        None,
        &none,
        marker(None, false),
    );

    let mut found_index = None;
    for (i, &value) in input.iter().enumerate() {
        rec.record_marked(
            format!("Comparing element at index {}: Value is {}", i, value),
            &[i],
            None,
            &none,
            marker(Some(i), false),
        );

        if value == target {
            found_index = Some(i);
            break;
        }

        rec.record_marked(
            format!("Value {} does not match {}. Moving to next index.", value, target),
            &[],
            None,
            &none,
            marker(Some(i), false),
        );
    }

    match found_index {
        Some(i) => rec.record_marked(
            format!("SUCCESS! Target {} found at index {}. Search complete.", target, i),
            &[i],
            None,
            &none,
            marker(Some(i), true),
        ),
        None => rec.record_marked(
            format!(
                "FAILURE! Target {} not found after checking all elements. Search complete.",
                target
            ),
            &[],
            None,
            &none,
            marker(n.checked_sub(1), false),
        ),
    }

    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let steps = steps(&[7, 7, 7], 7);
        let hit = steps.iter().find(|s| s.found == Some(true)).unwrap();
        assert_eq!(hit.current_index, Some(0));
        assert_eq!(steps.len(), 3);
    }

    #[test]
    fn test_miss_covers_every_index() {
        let steps = steps(&[4, 8, 15], 16);
        let visited: Vec<_> = steps
            .iter()
            .filter(|s| s.action.starts_with("Comparing"))
            .filter_map(|s| s.current_index)
            .collect();
        assert_eq!(visited, vec![0, 1, 2]);

        let last = steps.last().unwrap();
        assert_eq!(last.found, Some(false));
        assert_eq!(last.current_index, Some(2));
        assert_eq!(last.search_target, Some(16));
    }

    #[test]
    fn test_start_step_has_no_cursor() {
        let steps = steps(&[1], 1);
        assert_eq!(steps[0].current_index, None);
        assert_eq!(steps[0].found, Some(false));
    }
}
