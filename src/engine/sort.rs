//! Sort Step Generators
//!
//! Every sort is precomputed into a flat `SortStep` queue before the
//! animation starts; playback just applies one step per tick. `Swap` and
//! `Overwrite` are the only mutating steps, so replaying them against a
//! copy of the input reproduces the sorted array.

/// One tick of a sorting animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStep {
    /// Highlight two indices being compared.
    Compare(usize, usize),
    /// Exchange the values at two indices.
    Swap(usize, usize),
    /// Write `value` at `index` (merge sort copying back from its scratch
    /// buffer).
    Overwrite { index: usize, value: i64 },
    /// Mark an index as special for the current phase (quick sort's
    /// pivot, selection sort's running minimum).
    Pivot(usize),
    /// The value at this index is in its final position.
    MarkSorted(usize),
}

/// The five sorts the catalog exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl SortKind {
    pub fn title(self) -> &'static str {
        match self {
            SortKind::Bubble => "Bubble Sort",
            SortKind::Selection => "Selection Sort",
            SortKind::Insertion => "Insertion Sort",
            SortKind::Merge => "Merge Sort",
            SortKind::Quick => "Quick Sort",
        }
    }

    /// Label for the "special" index a `Pivot` step highlights.
    pub fn pivot_label(self) -> &'static str {
        match self {
            SortKind::Selection => "min",
            _ => "pivot",
        }
    }

    pub fn steps(self, input: &[i64]) -> Vec<SortStep> {
        match self {
            SortKind::Bubble => bubble_sort_steps(input),
            SortKind::Selection => selection_sort_steps(input),
            SortKind::Insertion => insertion_sort_steps(input),
            SortKind::Merge => merge_sort_steps(input),
            SortKind::Quick => quick_sort_steps(input),
        }
    }
}

pub fn bubble_sort_steps(input: &[i64]) -> Vec<SortStep> {
    let mut arr = input.to_vec();
    let mut steps = Vec::new();
    let n = arr.len();
    if n == 0 {
        return steps;
    }
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            steps.push(SortStep::Compare(j, j + 1));
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                steps.push(SortStep::Swap(j, j + 1));
            }
        }
        steps.push(SortStep::MarkSorted(n - 1 - i));
    }
    steps.push(SortStep::MarkSorted(0));
    steps
}

pub fn selection_sort_steps(input: &[i64]) -> Vec<SortStep> {
    let mut arr = input.to_vec();
    let mut steps = Vec::new();
    let n = arr.len();
    if n == 0 {
        return steps;
    }
    for i in 0..n - 1 {
        let mut min = i;
        steps.push(SortStep::Pivot(min));
        for j in i + 1..n {
            steps.push(SortStep::Compare(j, min));
            if arr[j] < arr[min] {
                min = j;
                steps.push(SortStep::Pivot(min));
            }
        }
        if min != i {
            arr.swap(i, min);
            steps.push(SortStep::Swap(i, min));
        }
        steps.push(SortStep::MarkSorted(i));
    }
    steps.push(SortStep::MarkSorted(n - 1));
    steps
}

pub fn insertion_sort_steps(input: &[i64]) -> Vec<SortStep> {
    let mut arr = input.to_vec();
    let mut steps = Vec::new();
    let n = arr.len();
    for i in 1..n {
        let mut j = i;
        while j > 0 {
            steps.push(SortStep::Compare(j - 1, j));
            if arr[j - 1] > arr[j] {
                arr.swap(j - 1, j);
                steps.push(SortStep::Swap(j - 1, j));
                j -= 1;
            } else {
                break;
            }
        }
    }
    for i in 0..n {
        steps.push(SortStep::MarkSorted(i));
    }
    steps
}

pub fn merge_sort_steps(input: &[i64]) -> Vec<SortStep> {
    fn merge(
        arr: &mut [i64],
        scratch: &mut [i64],
        left: usize,
        mid: usize,
        right: usize,
        steps: &mut Vec<SortStep>,
    ) {
        let mut i = left;
        let mut j = mid + 1;
        let mut k = left;

        while i <= mid && j <= right {
            steps.push(SortStep::Compare(i, j));
            if arr[i] <= arr[j] {
                scratch[k] = arr[i];
                i += 1;
            } else {
                scratch[k] = arr[j];
                j += 1;
            }
            k += 1;
        }
        while i <= mid {
            scratch[k] = arr[i];
            i += 1;
            k += 1;
        }
        while j <= right {
            scratch[k] = arr[j];
            j += 1;
            k += 1;
        }

        for m in left..=right {
            steps.push(SortStep::Overwrite {
                index: m,
                value: scratch[m],
            });
            arr[m] = scratch[m];
        }
    }

    fn sort(
        arr: &mut [i64],
        scratch: &mut [i64],
        left: usize,
        right: usize,
        steps: &mut Vec<SortStep>,
    ) {
        if left >= right {
            return;
        }
        let mid = (left + right) / 2;
        sort(arr, scratch, left, mid, steps);
        sort(arr, scratch, mid + 1, right, steps);
        merge(arr, scratch, left, mid, right, steps);
    }

    let mut arr = input.to_vec();
    let mut scratch = arr.clone();
    let mut steps = Vec::new();
    if !arr.is_empty() {
        let right = arr.len() - 1;
        sort(&mut arr, &mut scratch, 0, right, &mut steps);
    }
    for i in 0..input.len() {
        steps.push(SortStep::MarkSorted(i));
    }
    steps
}

pub fn quick_sort_steps(input: &[i64]) -> Vec<SortStep> {
    fn partition(arr: &mut [i64], low: usize, high: usize, steps: &mut Vec<SortStep>) -> usize {
        let pivot = arr[high];
        steps.push(SortStep::Pivot(high));

        let mut i = low;
        for j in low..high {
            steps.push(SortStep::Compare(j, high));
            if arr[j] < pivot {
                if i != j {
                    arr.swap(i, j);
                    steps.push(SortStep::Swap(i, j));
                }
                i += 1;
            }
        }
        if i != high {
            arr.swap(i, high);
            steps.push(SortStep::Swap(i, high));
        }
        steps.push(SortStep::MarkSorted(i));
        i
    }

    fn sort(arr: &mut [i64], low: i64, high: i64, steps: &mut Vec<SortStep>) {
        if low < high {
            let p = partition(arr, low as usize, high as usize, steps) as i64;
            sort(arr, low, p - 1, steps);
            sort(arr, p + 1, high, steps);
        } else if low == high {
            steps.push(SortStep::MarkSorted(low as usize));
        }
    }

    let mut arr = input.to_vec();
    let mut steps = Vec::new();
    if !arr.is_empty() {
        let high = arr.len() as i64 - 1;
        sort(&mut arr, 0, high, &mut steps);
    }
    steps
}

/// Apply the mutating steps to a copy of `input`.
pub fn replay(input: &[i64], steps: &[SortStep]) -> Vec<i64> {
    let mut arr = input.to_vec();
    for step in steps {
        match *step {
            SortStep::Swap(i, j) => arr.swap(i, j),
            SortStep::Overwrite { index, value } => arr[index] = value,
            _ => {}
        }
    }
    arr
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [SortKind; 5] = [
        SortKind::Bubble,
        SortKind::Selection,
        SortKind::Insertion,
        SortKind::Merge,
        SortKind::Quick,
    ];

    const INPUTS: &[&[i64]] = &[
        &[5, 3, 8, 4, 2, 7, 1, 6],
        &[1, 2, 3, 4, 5],
        &[5, 4, 3, 2, 1],
        &[2, 2, 2, 1, 3, 1],
        &[7, -3, 0, 7, -3],
        &[1],
        &[2, 1],
    ];

    #[test]
    fn replay_sorts_every_input() {
        for kind in KINDS {
            for input in INPUTS {
                let steps = kind.steps(input);
                let mut expected = input.to_vec();
                expected.sort_unstable();
                assert_eq!(
                    replay(input, &steps),
                    expected,
                    "{:?} failed on {:?}",
                    kind,
                    input
                );
            }
        }
    }

    #[test]
    fn every_index_gets_marked_sorted() {
        for kind in KINDS {
            let input = [9, 1, 8, 2, 7, 3];
            let steps = kind.steps(&input);
            for i in 0..input.len() {
                assert!(
                    steps.contains(&SortStep::MarkSorted(i)),
                    "{:?} never marked index {}",
                    kind,
                    i
                );
            }
        }
    }

    #[test]
    fn no_step_swaps_an_index_with_itself() {
        // A pivot already in place (sorted input) must not announce a
        // no-op exchange.
        for kind in KINDS {
            for input in INPUTS {
                for step in kind.steps(input) {
                    if let SortStep::Swap(i, j) = step {
                        assert_ne!(i, j, "{:?} on {:?}", kind, input);
                    }
                }
            }
        }
    }

    #[test]
    fn sorted_input_produces_no_swaps_for_bubble() {
        let steps = bubble_sort_steps(&[1, 2, 3, 4]);
        assert!(steps
            .iter()
            .all(|s| !matches!(s, SortStep::Swap(_, _))));
    }

    #[test]
    fn selection_tracks_running_minimum() {
        // First pass over [3,1,2]: min starts at 0, moves to 1, stays.
        let steps = selection_sort_steps(&[3, 1, 2]);
        assert_eq!(steps[0], SortStep::Pivot(0));
        assert_eq!(steps[1], SortStep::Compare(1, 0));
        assert_eq!(steps[2], SortStep::Pivot(1));
    }

    #[test]
    fn merge_overwrites_cover_merged_ranges() {
        let input = [4, 3, 2, 1];
        let steps = merge_sort_steps(&input);
        let overwrites = steps
            .iter()
            .filter(|s| matches!(s, SortStep::Overwrite { .. }))
            .count();
        // Two 2-way merges of width 2 plus one of width 4.
        assert_eq!(overwrites, 8);
    }

    #[test]
    fn empty_input_yields_no_steps() {
        for kind in KINDS {
            assert!(kind.steps(&[]).is_empty(), "{:?}", kind);
        }
    }
}
