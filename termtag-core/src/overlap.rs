//! Containment and partial-overlap resolution
//!
//! Rules, applied to every ordered pair of candidates over half-open
//! original-text spans:
//!
//! - disjoint spans never interact;
//! - a span strictly inside another loses;
//! - of two identical spans, the one later in scan order loses;
//! - a partial overlap only matters when overlaps are eliminated, and then
//!   the later-starting candidate loses.
//!
//! The outcome does not depend on which candidate is looked at first.

use crate::annotation::Annotation;

/// Mark every candidate that loses against some other candidate
pub fn resolve(candidates: &mut [Annotation], eliminate_overlapping: bool) {
    let losers: Vec<bool> = (0..candidates.len())
        .map(|i| {
            (0..candidates.len()).any(|j| {
                i != j && loses_to((i, &candidates[i]), (j, &candidates[j]), eliminate_overlapping)
            })
        })
        .collect();

    for (candidate, lost) in candidates.iter_mut().zip(losers) {
        if lost {
            candidate.overlap = true;
        }
    }
}

/// Whether candidate `a` gives way to candidate `b`
///
/// The `usize` is the candidate's position in scan order.
pub fn loses_to(
    (a_pos, a): (usize, &Annotation),
    (b_pos, b): (usize, &Annotation),
    eliminate_overlapping: bool,
) -> bool {
    if !a.intersects(b) {
        return false;
    }
    if a.begin == b.begin && a.end == b.end {
        return a_pos > b_pos;
    }
    if a.is_within(b) {
        return true;
    }
    if b.is_within(a) {
        return false;
    }
    eliminate_overlapping && a.begin > b.begin
}

/// Keep the candidates not marked as overlapping, ordered by `(begin, end)`
pub fn survivors(candidates: Vec<Annotation>) -> Vec<Annotation> {
    let mut kept: Vec<Annotation> = candidates.into_iter().filter(|a| !a.overlap).collect();
    kept.sort_by_key(|a| (a.begin, a.end));
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::tests::span;

    fn spans(found: &[Annotation]) -> Vec<(usize, usize)> {
        found.iter().map(|a| (a.begin, a.end)).collect()
    }

    fn run(mut candidates: Vec<Annotation>, eliminate: bool) -> Vec<(usize, usize)> {
        resolve(&mut candidates, eliminate);
        spans(&survivors(candidates))
    }

    #[test]
    fn test_nested_loses_to_outer() {
        assert_eq!(run(vec![span(0, 8), span(0, 13)], false), vec![(0, 13)]);
        assert_eq!(run(vec![span(4, 8), span(0, 13)], false), vec![(0, 13)]);
    }

    #[test]
    fn test_identical_spans_keep_first() {
        let mut first = span(2, 6);
        first.uri = "urn:first".to_string();
        let mut second = span(2, 6);
        second.uri = "urn:second".to_string();

        let mut candidates = vec![first, second];
        resolve(&mut candidates, false);
        let kept = survivors(candidates);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].uri, "urn:first");
    }

    #[test]
    fn test_partial_overlap_kept_unless_eliminating() {
        let candidates = vec![span(0, 8), span(4, 12)];
        assert_eq!(run(candidates.clone(), false), vec![(0, 8), (4, 12)]);
        assert_eq!(run(candidates, true), vec![(0, 8)]);
    }

    #[test]
    fn test_partial_overlap_is_order_independent() {
        assert_eq!(run(vec![span(4, 12), span(0, 8)], true), vec![(0, 8)]);
        assert_eq!(run(vec![span(0, 8), span(4, 12)], true), vec![(0, 8)]);
    }

    #[test]
    fn test_adjacent_spans_do_not_overlap() {
        assert_eq!(run(vec![span(5, 9), span(0, 5)], true), vec![(0, 5), (5, 9)]);
    }

    #[test]
    fn test_survivors_are_sorted() {
        assert_eq!(
            run(vec![span(20, 25), span(0, 3), span(10, 12)], false),
            vec![(0, 3), (10, 12), (20, 25)]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(run(Vec::new(), true).is_empty());
    }
}
