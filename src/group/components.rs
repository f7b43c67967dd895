//! Offline connected-components sweep over 1-D intervals.
//!
//! Lines that sit within a wavelength tolerance of each other blend into a
//! single feature and must be fit jointly as a sum of Gaussians. We pad each
//! line's rest wavelength into an interval and merge the intervals that
//! overlap; each resulting component is one joint-fit group.
//!
//! The sweep is generic over the segment type via a `left`/`right` accessor
//! pair, so it is agnostic to what produced the intervals.
//!
//! Boundary policy: overlap is the *strict* inequality `left < ending`.
//! Two intervals that merely touch (`right_1 == left_2`) stay in separate
//! components.

use std::cmp::Ordering;

use crate::domain::LineDefinition;

/// One maximal group of mutually overlapping segments.
///
/// `beginning`/`ending` is the union extent of the members. Components are
/// produced in ascending order of `beginning`, never overlap each other, and
/// together own every input segment exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Component<S, E> {
    pub segments: Vec<S>,
    pub beginning: E,
    pub ending: E,
}

/// Accumulates one component during the sweep; finalized into the immutable
/// `Component` when the next gap is found.
struct ComponentBuilder<S, E> {
    segments: Vec<S>,
    beginning: E,
    ending: E,
}

impl<S, E: Copy> ComponentBuilder<S, E> {
    fn seed(segment: S, beginning: E, ending: E) -> Self {
        Self {
            segments: vec![segment],
            beginning,
            ending,
        }
    }

    fn finish(self) -> Component<S, E> {
        Component {
            segments: self.segments,
            beginning: self.beginning,
            ending: self.ending,
        }
    }
}

/// Group segments into connected components.
///
/// Deterministic O(n log n): stable-sort by left edge (ties keep their input
/// order, so grouping is reproducible when two segments share a left edge),
/// then sweep once, opening a new component at every gap.
///
/// Pure function; the empty input yields the empty output.
pub fn connected_components<S, E>(
    segments: &[S],
    left: impl Fn(&S) -> E,
    right: impl Fn(&S) -> E,
) -> Vec<Component<S, E>>
where
    S: Clone,
    E: PartialOrd + Copy,
{
    let mut sorted: Vec<S> = segments.to_vec();
    sorted.sort_by(|a, b| left(a).partial_cmp(&left(b)).unwrap_or(Ordering::Equal));

    let mut iter = sorted.into_iter();
    let Some(head) = iter.next() else {
        return Vec::new();
    };

    let mut components = Vec::new();
    let beginning = left(&head);
    let ending = right(&head);
    let mut open = ComponentBuilder::seed(head, beginning, ending);

    for segment in iter {
        let opening = left(&segment);
        let closing = right(&segment);
        if opening < open.ending {
            open.segments.push(segment);
            if closing > open.ending {
                open.ending = closing;
            }
        } else {
            components.push(open.finish());
            open = ComponentBuilder::seed(segment, opening, closing);
        }
    }
    components.push(open.finish());
    components
}

/// Group the joint-fit eligible lines of a line table within a wavelength
/// tolerance. Each line contributes the interval
/// `[wl_vacuum - tolerance, wl_vacuum + tolerance]`.
pub fn group_lines(lines: &[LineDefinition], tolerance: f64) -> Vec<Component<LineDefinition, f64>> {
    let eligible: Vec<LineDefinition> = lines.iter().filter(|l| l.grouped).cloned().collect();
    connected_components(
        &eligible,
        |l| l.wl_vacuum - tolerance,
        |l| l.wl_vacuum + tolerance,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pair_components(segments: &[(i32, i32)]) -> Vec<Component<(i32, i32), i32>> {
        connected_components(segments, |s| s.0, |s| s.1)
    }

    fn component(segments: Vec<(i32, i32)>, beginning: i32, ending: i32) -> Component<(i32, i32), i32> {
        Component {
            segments,
            beginning,
            ending,
        }
    }

    #[test]
    fn two_clusters_merge_separately() {
        let comps = pair_components(&[(0, 5), (3, 9), (16, 22), (20, 26), (25, 31)]);
        assert_eq!(
            comps,
            vec![
                component(vec![(0, 5), (3, 9)], 0, 9),
                component(vec![(16, 22), (20, 26), (25, 31)], 16, 31),
            ]
        );
    }

    #[test]
    fn nested_and_chained_overlaps_form_one_component() {
        let comps = pair_components(&[(0, 4), (1, 2), (3, 6), (5, 7)]);
        assert_eq!(comps, vec![component(vec![(0, 4), (1, 2), (3, 6), (5, 7)], 0, 7)]);
    }

    #[test]
    fn unsorted_input_is_sorted_before_sweeping() {
        let comps = pair_components(&[(0, 2), (5, 7), (1, 4), (8, 9), (3, 6)]);
        assert_eq!(
            comps,
            vec![
                component(vec![(0, 2), (1, 4), (3, 6), (5, 7)], 0, 7),
                component(vec![(8, 9)], 8, 9),
            ]
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(pair_components(&[]), vec![]);
    }

    #[test]
    fn single_segment_is_a_singleton_component() {
        assert_eq!(pair_components(&[(0, 2)]), vec![component(vec![(0, 2)], 0, 2)]);
    }

    #[test]
    fn touching_edges_do_not_merge() {
        // Equality is not overlap: a shared edge keeps the intervals apart.
        let comps = pair_components(&[(0, 3), (3, 5)]);
        assert_eq!(
            comps,
            vec![component(vec![(0, 3)], 0, 3), component(vec![(3, 5)], 3, 5)]
        );
    }

    #[test]
    fn components_partition_the_input() {
        let input = [(0, 2), (5, 7), (1, 4), (8, 9), (3, 6), (-3, -1)];
        let comps = pair_components(&input);

        let mut members: Vec<(i32, i32)> = comps.iter().flat_map(|c| c.segments.clone()).collect();
        members.sort();
        let mut expected = input.to_vec();
        expected.sort();
        assert_eq!(members, expected);

        for c in &comps {
            let min_left = c.segments.iter().map(|s| s.0).min().unwrap();
            let max_right = c.segments.iter().map(|s| s.1).max().unwrap();
            assert_eq!(c.beginning, min_left);
            assert_eq!(c.ending, max_right);
        }
        // Pairwise non-overlapping, in opening order.
        for w in comps.windows(2) {
            assert!(w[0].ending <= w[1].beginning);
        }
    }

    #[test]
    fn grouping_is_stable_under_input_shuffles() {
        let base = [(0, 5), (3, 9), (16, 22), (20, 26), (25, 31)];
        let shuffled = [(25, 31), (0, 5), (20, 26), (3, 9), (16, 22)];
        assert_eq!(pair_components(&base), pair_components(&shuffled));
    }

    #[test]
    fn identical_left_edges_keep_input_order() {
        // Stable sort: ties on the left edge preserve relative input order.
        let comps = pair_components(&[(0, 5), (0, 3), (0, 4)]);
        assert_eq!(comps, vec![component(vec![(0, 5), (0, 3), (0, 4)], 0, 5)]);
    }

    fn line(name: &str, wl: f64, grouped: bool) -> LineDefinition {
        LineDefinition {
            name: name.to_string(),
            wl_vacuum: wl,
            grouped,
        }
    }

    #[test]
    fn group_lines_blends_close_doublets() {
        // Halpha sits 14.75 Å from [NII]6548 and 20.66 Å from [NII]6583, so
        // an 11 Å padding chains all three; [OIII] stands alone.
        let lines = vec![
            line("NII6548", 6549.86, true),
            line("Halpha", 6564.61, true),
            line("NII6583", 6585.27, true),
            line("OIII5007", 5008.24, true),
        ];
        let groups = group_lines(&lines, 11.0);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].segments.len(), 1);
        assert_eq!(groups[0].segments[0].name, "OIII5007");
        let names: Vec<&str> = groups[1].segments.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["NII6548", "Halpha", "NII6583"]);
        assert_eq!(groups[1].beginning, 6549.86 - 11.0);
        assert_eq!(groups[1].ending, 6585.27 + 11.0);
    }

    #[test]
    fn group_lines_skips_auxiliary_lines() {
        let lines = vec![line("Hbeta", 4862.68, true), line("sky5577", 5578.5, false)];
        let groups = group_lines(&lines, 10.0);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].segments[0].name, "Hbeta");
    }
}
