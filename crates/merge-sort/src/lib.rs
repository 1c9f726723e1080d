//! Bottom-up merge sort.
//!
//! The input is split into single-element runs, and neighbouring runs are
//! merged pairwise, round after round, until one run is left.

/// Merges two sorted slices into one sorted vector.
///
/// Equal elements are all kept, and on a tie the element from `a` goes first,
/// so the merge is stable. Whatever is left of either side once the other
/// runs out is appended.
pub fn merge<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if b[j] < a[i] {
            out.push(b[j].clone());
            j += 1;
        } else {
            out.push(a[i].clone());
            i += 1;
        }
    }

    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// One round of pairwise merging. An odd run out is carried over unchanged.
fn merge_round<T: Ord + Clone>(runs: Vec<Vec<T>>) -> Vec<Vec<T>> {
    let mut next = Vec::with_capacity(runs.len().div_ceil(2));
    let mut iter = runs.into_iter();
    while let Some(left) = iter.next() {
        match iter.next() {
            Some(right) => next.push(merge(&left, &right)),
            None => next.push(left),
        }
    }
    next
}

/// Sorts `items` by repeatedly merging neighbouring runs.
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut runs: Vec<Vec<T>> = items.iter().map(|x| vec![x.clone()]).collect();
    while runs.len() > 1 {
        runs = merge_round(runs);
    }
    runs.pop().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted<T: Ord>(v: &[T]) -> bool {
        v.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn merge_interleaves() {
        assert_eq!(merge(&[1, 4, 7], &[2, 3, 8]), vec![1, 2, 3, 4, 7, 8]);
    }

    #[test]
    fn merge_keeps_duplicates() {
        assert_eq!(merge(&[1, 2, 2], &[2, 3]), vec![1, 2, 2, 2, 3]);
    }

    #[test]
    fn merge_appends_both_remainders() {
        assert_eq!(merge(&[5, 6], &[1]), vec![1, 5, 6]);
        assert_eq!(merge(&[1], &[5, 6]), vec![1, 5, 6]);
        assert_eq!(merge::<i32>(&[], &[3, 4]), vec![3, 4]);
        assert_eq!(merge::<i32>(&[3, 4], &[]), vec![3, 4]);
    }

    /// Ordered by `key` only, so equal keys are real ties.
    #[derive(Debug, Clone)]
    struct Tagged {
        key: i32,
        tag: char,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn merge_is_stable() {
        let t = |key, tag| Tagged { key, tag };
        let a = [t(1, 'a'), t(2, 'a')];
        let b = [t(1, 'b'), t(2, 'b')];
        let tags: Vec<char> = merge(&a, &b).iter().map(|x| x.tag).collect();
        assert_eq!(tags, vec!['a', 'b', 'a', 'b']);
    }

    #[test]
    fn sorts_demo_input() {
        assert_eq!(merge_sort(&[1, 4, 6, 7, 8, 2, 3]), vec![1, 2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn odd_run_is_carried_over() {
        let runs = merge_round(vec![vec![3], vec![1], vec![2]]);
        assert_eq!(runs, vec![vec![1, 3], vec![2]]);
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(merge_sort::<i32>(&[]), Vec::<i32>::new());
        assert_eq!(merge_sort(&[42]), vec![42]);
    }

    #[test]
    fn converges_for_every_length() {
        for n in 0..40u32 {
            let input: Vec<u32> = (0..n).map(|i| (i * 7919 + 13) % 23).collect();
            let sorted = merge_sort(&input);
            assert_eq!(sorted.len(), input.len());
            assert!(is_sorted(&sorted), "n = {n}");

            let mut expected = input.clone();
            expected.sort();
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn works_on_strings() {
        let words = ["pear", "apple", "fig", "apple"];
        assert_eq!(merge_sort(&words), vec!["apple", "apple", "fig", "pear"]);
    }
}
