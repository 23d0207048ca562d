use board_contours::{Point, Segment, SegmentError};
use std::f64::consts::PI;

fn pt(x: f64, y: f64) -> Point<f64> {
    Point::xy(x, y)
}

macro_rules! assert_point_eq {
    ($p:expr, $x:expr, $y:expr) => {
        let p = $p;
        assert!(
            (p.x - $x).abs() < 1e-6 && (p.y - $y).abs() < 1e-6,
            "point mismatch: {:?}",
            p
        );
    };
}

#[test]
fn split_line_at_one_point() {
    let mut seg = Segment::line(pt(0.0, 0.0), pt(4.0, 0.0)).unwrap();
    let rest = seg.split(&[pt(1.0, 0.0)]).unwrap();
    assert_eq!(rest.len(), 1);
    assert_point_eq!(seg.start(), 0.0, 0.0);
    assert_point_eq!(seg.end(), 1.0, 0.0);
    assert_point_eq!(rest[0].start(), 1.0, 0.0);
    assert_point_eq!(rest[0].end(), 4.0, 0.0);
}

#[test]
fn split_line_at_two_points_sorts_them() {
    let mut seg = Segment::line(pt(0.0, 0.0), pt(4.0, 0.0)).unwrap();
    // given out of traversal order
    let rest = seg.split(&[pt(3.0, 0.0), pt(1.0, 0.0)]).unwrap();
    assert_eq!(rest.len(), 2);
    assert_point_eq!(seg.end(), 1.0, 0.0);
    assert_point_eq!(rest[0].start(), 1.0, 0.0);
    assert_point_eq!(rest[0].end(), 3.0, 0.0);
    assert_point_eq!(rest[1].end(), 4.0, 0.0);
}

#[test]
fn split_at_endpoint_is_a_no_op() {
    let mut seg = Segment::line(pt(0.0, 0.0), pt(4.0, 0.0)).unwrap();
    let rest = seg.split(&[pt(0.0, 0.0)]).unwrap();
    assert!(rest.is_empty());
    assert_point_eq!(seg.end(), 4.0, 0.0);
}

#[test]
fn split_point_off_segment_rejected() {
    let mut seg = Segment::line(pt(0.0, 0.0), pt(4.0, 0.0)).unwrap();
    assert_eq!(
        seg.split(&[pt(1.0, 1.0)]),
        Err(SegmentError::PointNotOnSegment)
    );
    // beyond the segment's range, but on the infinite line
    assert_eq!(
        seg.split(&[pt(5.0, 0.0)]),
        Err(SegmentError::PointNotOnSegment)
    );
}

#[test]
fn split_point_count_validated() {
    let mut seg = Segment::line(pt(0.0, 0.0), pt(4.0, 0.0)).unwrap();
    assert_eq!(seg.split(&[]), Err(SegmentError::BadSplitPointCount(0)));
    let ps = [pt(1.0, 0.0), pt(2.0, 0.0), pt(3.0, 0.0)];
    assert_eq!(seg.split(&ps), Err(SegmentError::BadSplitPointCount(3)));
}

#[test]
fn split_ccw_arc_conserves_length() {
    let mut seg = Segment::arc(pt(0.0, 0.0), pt(2.0, 0.0), pt(-2.0, 0.0), false).unwrap();
    let total = seg.length();
    let p = pt(2.0 * (PI / 3.0).cos(), 2.0 * (PI / 3.0).sin());
    let rest = seg.split(&[p]).unwrap();
    assert_eq!(rest.len(), 1);
    assert!((seg.length() + rest[0].length() - total).abs() < 1e-6);
    assert_point_eq!(seg.end(), p.x, p.y);
    assert_point_eq!(rest[0].start(), p.x, p.y);
    assert_point_eq!(rest[0].end(), -2.0, 0.0);
}

#[test]
fn split_cw_arc_orders_along_travel() {
    // clockwise half circle from (-1, 0) over the top to (1, 0); the point
    // at 120° comes before the point at 60° along the travel direction
    let mut seg = Segment::arc(pt(0.0, 0.0), pt(-1.0, 0.0), pt(1.0, 0.0), true).unwrap();
    let p120 = pt((2.0 * PI / 3.0).cos(), (2.0 * PI / 3.0).sin());
    let p60 = pt((PI / 3.0).cos(), (PI / 3.0).sin());
    let rest = seg.split(&[p60, p120]).unwrap();
    assert_eq!(rest.len(), 2);
    assert_point_eq!(seg.start(), -1.0, 0.0);
    assert_point_eq!(seg.end(), p120.x, p120.y);
    assert_point_eq!(rest[0].end(), p60.x, p60.y);
    assert_point_eq!(rest[1].end(), 1.0, 0.0);
    for frag in [&seg, &rest[0], &rest[1]] {
        match frag {
            Segment::Arc(a) => assert!(a.is_cw),
            _ => panic!("expected arc fragment"),
        }
    }
}

#[test]
fn split_arc_point_off_radius_rejected() {
    let mut seg = Segment::arc(pt(0.0, 0.0), pt(2.0, 0.0), pt(-2.0, 0.0), false).unwrap();
    assert_eq!(
        seg.split(&[pt(1.0, 0.5)]),
        Err(SegmentError::PointNotOnSegment)
    );
    // on the circle but outside the swept span
    assert_eq!(
        seg.split(&[pt(0.0, -2.0)]),
        Err(SegmentError::PointNotOnSegment)
    );
}

#[test]
fn split_circle_into_complementary_arcs() {
    let mut seg = Segment::circle(pt(0.0, 0.0), 1.0).unwrap();
    let rest = seg.split(&[pt(1.0, 0.0), pt(-1.0, 0.0)]).unwrap();
    assert_eq!(rest.len(), 1);
    assert!((seg.length() - PI).abs() < 1e-9);
    assert!((rest[0].length() - PI).abs() < 1e-9);
    assert_point_eq!(seg.start(), 1.0, 0.0);
    assert_point_eq!(seg.end(), -1.0, 0.0);
    assert_point_eq!(rest[0].start(), -1.0, 0.0);
    assert_point_eq!(rest[0].end(), 1.0, 0.0);
}

#[test]
fn split_circle_requires_two_distinct_points() {
    let mut seg = Segment::circle(pt(0.0, 0.0), 1.0).unwrap();
    assert_eq!(
        seg.split(&[pt(1.0, 0.0)]),
        Err(SegmentError::CircleSplitPoints)
    );
    let mut seg = Segment::circle(pt(0.0, 0.0), 1.0).unwrap();
    assert_eq!(
        seg.split(&[pt(1.0, 0.0), pt(1.0, 0.0)]),
        Err(SegmentError::CircleSplitPoints)
    );
}
