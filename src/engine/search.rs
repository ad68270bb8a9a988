//! Search Step Generators
//!
//! Linear and binary search unrolled into step lists. The binary variant
//! keeps the full `[low, high]` interval per probe so the screen can
//! label the narrowing range.

/// One tick of the linear-search animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearStep {
    /// Probe the element at `index`.
    Check { index: usize },
    /// The probe at `index` matched the target. Terminal.
    Found { index: usize },
    /// The whole array was scanned without a match. Terminal.
    NotFound,
}

pub fn linear_search_steps(array: &[i64], target: i64) -> Vec<LinearStep> {
    let mut steps = Vec::with_capacity(array.len() + 1);
    for (index, &value) in array.iter().enumerate() {
        steps.push(LinearStep::Check { index });
        if value == target {
            steps.push(LinearStep::Found { index });
            return steps;
        }
    }
    steps.push(LinearStep::NotFound);
    steps
}

/// What a binary-search probe concluded about its midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Found,
    /// Midpoint was below the target, continue in `[mid + 1, high]`.
    GoRight,
    /// Midpoint was above the target, continue in `[low, mid - 1]`.
    GoLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryStep {
    Probe {
        low: usize,
        high: usize,
        mid: usize,
        outcome: ProbeOutcome,
    },
    /// The interval closed without finding the target. Terminal.
    NotFound,
}

/// Binary search over a sorted array, one `Probe` per interval halving.
pub fn binary_search_steps(array: &[i64], target: i64) -> Vec<BinaryStep> {
    let mut steps = Vec::new();
    let mut low: i64 = 0;
    let mut high: i64 = array.len() as i64 - 1;

    while low <= high {
        let mid = (low + high) / 2;
        let value = array[mid as usize];
        let outcome = if value == target {
            ProbeOutcome::Found
        } else if value < target {
            ProbeOutcome::GoRight
        } else {
            ProbeOutcome::GoLeft
        };
        steps.push(BinaryStep::Probe {
            low: low as usize,
            high: high as usize,
            mid: mid as usize,
            outcome,
        });
        match outcome {
            ProbeOutcome::Found => return steps,
            ProbeOutcome::GoRight => low = mid + 1,
            ProbeOutcome::GoLeft => high = mid - 1,
        }
    }
    steps.push(BinaryStep::NotFound);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_found(array: &[i64], target: i64) -> Option<usize> {
        linear_search_steps(array, target)
            .iter()
            .find_map(|s| match s {
                LinearStep::Found { index } => Some(*index),
                _ => None,
            })
    }

    fn binary_found(array: &[i64], target: i64) -> Option<usize> {
        binary_search_steps(array, target)
            .iter()
            .find_map(|s| match s {
                BinaryStep::Probe {
                    mid,
                    outcome: ProbeOutcome::Found,
                    ..
                } => Some(*mid),
                _ => None,
            })
    }

    #[test]
    fn linear_finds_first_occurrence() {
        assert_eq!(linear_found(&[4, 2, 7, 2], 2), Some(1));
        assert_eq!(linear_found(&[4, 2, 7], 9), None);
        assert_eq!(linear_found(&[], 1), None);
    }

    #[test]
    fn linear_checks_stop_at_match() {
        let steps = linear_search_steps(&[1, 2, 3], 2);
        assert_eq!(
            steps,
            vec![
                LinearStep::Check { index: 0 },
                LinearStep::Check { index: 1 },
                LinearStep::Found { index: 1 },
            ]
        );
    }

    #[test]
    fn binary_found_iff_present() {
        let array = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
        for target in 0..21 {
            let found = binary_found(&array, target);
            match found {
                Some(i) => assert_eq!(array[i], target),
                None => assert!(!array.contains(&target)),
            }
        }
    }

    #[test]
    fn binary_probe_count_is_logarithmic() {
        let array: Vec<i64> = (0..1024).collect();
        let steps = binary_search_steps(&array, 1023);
        assert!(steps.len() <= 11);
    }

    #[test]
    fn binary_empty_array_reports_not_found() {
        assert_eq!(binary_search_steps(&[], 5), vec![BinaryStep::NotFound]);
    }

    #[test]
    fn binary_intervals_narrow() {
        let array: Vec<i64> = (0..100).map(|v| v * 2).collect();
        let mut last_width = usize::MAX;
        for step in binary_search_steps(&array, 1) {
            if let BinaryStep::Probe { low, high, .. } = step {
                let width = high - low + 1;
                assert!(width < last_width);
                last_width = width;
            }
        }
    }
}
