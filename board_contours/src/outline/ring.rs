//! Index addressed primitives for editing a closed ring of segments in
//! place. All walks follow segment order and wrap from the last segment back
//! to the first.

use crate::core::math::Point;
use crate::core::traits::Real;
use crate::segment::Segment;

/// Returns the index of the segment whose literal start matches `point`
/// within `eps`.
pub(crate) fn index_of_start<T>(segs: &[Segment<T>], point: Point<T>, eps: T) -> Option<usize>
where
    T: Real,
{
    segs.iter().position(|s| s.start().fuzzy_eq_eps(point, eps))
}

/// Removes segments from the ring starting at index `from` (inclusive) until
/// reaching a segment whose start matches `until_start`, wrapping past the
/// end. Returns the index where the removed run began, adjusted for removals
/// before it (the insertion point for a replacement run), or `None` if the
/// walk consumed the whole ring without finding `until_start`.
pub(crate) fn remove_run_until<T>(
    segs: &mut Vec<Segment<T>>,
    from: usize,
    until_start: Point<T>,
    eps: T,
) -> Option<usize>
where
    T: Real,
{
    let mut gap = from;
    loop {
        if segs.is_empty() {
            return None;
        }
        if gap >= segs.len() {
            gap = 0;
        }
        if segs[gap].start().fuzzy_eq_eps(until_start, eps) {
            return Some(gap);
        }
        segs.remove(gap);
    }
}

/// Clones the run of segments starting at index `from` (inclusive) up to but
/// not including the segment whose start matches `until_start`, wrapping
/// past the end. Returns `None` if the walk returns to `from` without
/// finding `until_start`.
pub(crate) fn collect_run<T>(
    segs: &[Segment<T>],
    from: usize,
    until_start: Point<T>,
    eps: T,
) -> Option<Vec<Segment<T>>>
where
    T: Real,
{
    let mut run = Vec::new();
    let mut i = from;
    loop {
        if segs[i].start().fuzzy_eq_eps(until_start, eps) && !run.is_empty() {
            return Some(run);
        }
        if run.len() == segs.len() {
            return None;
        }
        run.push(segs[i]);
        i = (i + 1) % segs.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Point;

    fn ring() -> Vec<Segment<f64>> {
        // unit square CCW from the origin
        let p = |x: f64, y: f64| Point::xy(x, y);
        vec![
            Segment::line(p(0.0, 0.0), p(1.0, 0.0)).unwrap(),
            Segment::line(p(1.0, 0.0), p(1.0, 1.0)).unwrap(),
            Segment::line(p(1.0, 1.0), p(0.0, 1.0)).unwrap(),
            Segment::line(p(0.0, 1.0), p(0.0, 0.0)).unwrap(),
        ]
    }

    #[test]
    fn index_of_start_finds_segment() {
        let segs = ring();
        assert_eq!(index_of_start(&segs, Point::xy(1.0, 1.0), 1e-8), Some(2));
        assert_eq!(index_of_start(&segs, Point::xy(0.5, 0.5), 1e-8), None);
    }

    #[test]
    fn remove_run_wraps_past_end() {
        let mut segs = ring();
        // remove the run [3, 0] leaving segments 1 and 2
        let gap = remove_run_until(&mut segs, 3, Point::xy(1.0, 0.0), 1e-8);
        assert_eq!(gap, Some(0));
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].start(), Point::xy(1.0, 0.0));
    }

    #[test]
    fn remove_run_exhausts_ring() {
        let mut segs = ring();
        assert_eq!(
            remove_run_until(&mut segs, 0, Point::xy(0.5, 0.5), 1e-8),
            None
        );
        assert!(segs.is_empty());
    }

    #[test]
    fn collect_run_wraps_and_stops() {
        let segs = ring();
        let run = collect_run(&segs, 2, Point::xy(1.0, 0.0), 1e-8).unwrap();
        assert_eq!(run.len(), 3);
        assert_eq!(run[0].start(), Point::xy(1.0, 1.0));
        assert_eq!(run[2].end(), Point::xy(1.0, 0.0));
    }
}
