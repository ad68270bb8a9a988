//! Input Parsing
//!
//! Comma-separated number parsing shared by the visualizer screens, plus
//! the random-input generators behind every "Random" button. Invalid
//! tokens are dropped rather than rejected, matching how the screens
//! tolerate sloppy input.

/// Parse comma-separated integers, dropping tokens that fail to parse.
pub fn parse_int_array(input: &str) -> Vec<i64> {
    input
        .split(',')
        .filter_map(|token| token.trim().parse::<i64>().ok())
        .collect()
}

/// Parse and sort, for the binary-search screen (the algorithm requires
/// a sorted array regardless of what the user typed).
pub fn parse_sorted_array(input: &str) -> Vec<i64> {
    let mut values = parse_int_array(input);
    values.sort_unstable();
    values
}

/// Parse a level-order tree description. The literal `null` (any case)
/// produces a hole; other unparseable tokens are dropped.
pub fn parse_tree_array(input: &str) -> Vec<Option<i64>> {
    input
        .split(',')
        .filter_map(|token| {
            let token = token.trim();
            if token.eq_ignore_ascii_case("null") {
                Some(None)
            } else {
                token.parse::<i64>().ok().map(Some)
            }
        })
        .collect()
}

/// Join values back into the comma-separated form the inputs use.
pub fn format_int_array(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Uniform integer in `1..=max` from the browser RNG.
pub fn random_value(max: i64) -> i64 {
    (js_sys::Math::random() * max as f64) as i64 + 1
}

/// Random array of `len` values in `1..=max`.
pub fn random_array(len: usize, max: i64) -> Vec<i64> {
    (0..len).map(|_| random_value(max)).collect()
}

/// Random sorted array (5-14 elements) plus a target guaranteed present,
/// for the search screens.
pub fn random_sorted_with_target() -> (Vec<i64>, i64) {
    let len = (js_sys::Math::random() * 10.0) as usize + 5;
    let mut values = random_array(len, 100);
    values.sort_unstable();
    let target = values[(js_sys::Math::random() * values.len() as f64) as usize];
    (values, target)
}

/// Random unsorted array (5-14 elements) plus a target drawn from it,
/// for the linear-search screen.
pub fn random_with_target() -> (Vec<i64>, i64) {
    let len = (js_sys::Math::random() * 10.0) as usize + 5;
    let values = random_array(len, 100);
    let target = values[(js_sys::Math::random() * values.len() as f64) as usize];
    (values, target)
}

/// Random level-order tree array. With `with_holes`, roughly 30% of the
/// slots become holes; the root never does.
pub fn random_tree_array(size: usize, with_holes: bool) -> Vec<Option<i64>> {
    let mut slots: Vec<Option<i64>> = (0..size)
        .map(|_| {
            if with_holes && js_sys::Math::random() < 0.3 {
                None
            } else {
                Some(random_value(100))
            }
        })
        .collect();
    if let Some(root) = slots.first_mut() {
        if root.is_none() {
            *root = Some(random_value(100));
        }
    }
    slots
}

/// Format a tree array, holes rendered as `null`.
pub fn format_tree_array(slots: &[Option<i64>]) -> String {
    slots
        .iter()
        .map(|slot| match slot {
            Some(v) => v.to_string(),
            None => "null".to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_drops_garbage() {
        assert_eq!(parse_int_array("1, 2,x, 3,,4 "), vec![1, 2, 3, 4]);
        assert_eq!(parse_int_array(""), Vec::<i64>::new());
        assert_eq!(parse_int_array("-5, 0, 12"), vec![-5, 0, 12]);
    }

    #[test]
    fn sorted_parse_sorts() {
        assert_eq!(parse_sorted_array("9,1,5,3"), vec![1, 3, 5, 9]);
    }

    #[test]
    fn tree_parse_keeps_holes() {
        assert_eq!(
            parse_tree_array("1,2,null,4,NULL,oops"),
            vec![Some(1), Some(2), None, Some(4), None]
        );
    }

    #[test]
    fn format_round_trips() {
        assert_eq!(format_int_array(&[5, 3, 8]), "5,3,8");
        assert_eq!(
            format_tree_array(&[Some(1), None, Some(3)]),
            "1,null,3"
        );
    }
}
