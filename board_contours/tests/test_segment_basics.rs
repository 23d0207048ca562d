use board_contours::{Point, Segment, SegmentError, SegmentKind};
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
fn degenerate_line_rejected() {
    assert_eq!(
        Segment::line(pt(1.0, 1.0), pt(1.0, 1.0)),
        Err(SegmentError::DegenerateLine)
    );
}

#[test]
fn non_planar_points_rejected() {
    assert_eq!(
        Segment::line(Point::new(0.0, 0.0, 1.0), pt(1.0, 0.0)),
        Err(SegmentError::NonPlanar)
    );
    assert_eq!(
        Segment::arc(Point::new(0.0, 0.0, 0.5), pt(1.0, 0.0), pt(0.0, 1.0), false),
        Err(SegmentError::NonPlanar)
    );
}

#[test]
fn arc_with_center_on_endpoint_rejected() {
    assert_eq!(
        Segment::arc(pt(1.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0), false),
        Err(SegmentError::DegenerateArc)
    );
}

#[test]
fn arc_with_mismatched_radii_rejected() {
    assert_eq!(
        Segment::arc(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 2.0), false),
        Err(SegmentError::RadiiDiffer)
    );
}

#[test]
fn arc_with_coincident_endpoints_becomes_circle() {
    let seg = Segment::arc(pt(0.0, 0.0), pt(2.0, 0.0), pt(2.0, 0.0), false).unwrap();
    assert_eq!(seg.kind(), SegmentKind::Circle);
    assert!((seg.length() - 2.0 * PI * 2.0).abs() < 1e-12);
}

#[test]
fn line_geometry() {
    let seg = Segment::line(pt(0.0, 0.0), pt(3.0, 4.0)).unwrap();
    assert_eq!(seg.kind(), SegmentKind::Line);
    assert!((seg.length() - 5.0).abs() < 1e-12);
    assert_point_eq!(seg.midpoint(), 1.5, 2.0);
    let b = seg.bounding_box();
    assert!((b.min_x - 0.0).abs() < 1e-12 && (b.max_y - 4.0).abs() < 1e-12);
}

#[test]
fn ccw_quarter_arc_geometry() {
    let seg = Segment::arc(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0), false).unwrap();
    assert_eq!(seg.kind(), SegmentKind::Arc);
    assert!((seg.length() - PI / 2.0).abs() < 1e-9);
    let m = seg.midpoint();
    let r = 0.5f64.sqrt();
    assert_point_eq!(m, r, r);
    assert_point_eq!(seg.start(), 1.0, 0.0);
    assert_point_eq!(seg.ccw_start(), 1.0, 0.0);
}

#[test]
fn cw_arc_literal_vs_ccw_endpoints() {
    // clockwise from (0, 1) down to (1, 0) sweeps the same quarter span
    let seg = Segment::arc(pt(0.0, 0.0), pt(0.0, 1.0), pt(1.0, 0.0), true).unwrap();
    assert!((seg.length() - PI / 2.0).abs() < 1e-9);
    assert_point_eq!(seg.start(), 0.0, 1.0);
    assert_point_eq!(seg.end(), 1.0, 0.0);
    assert_point_eq!(seg.ccw_start(), 1.0, 0.0);
    assert_point_eq!(seg.ccw_end(), 0.0, 1.0);
}

#[test]
fn reverse_flips_direction_not_span() {
    let mut seg = Segment::arc(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0), false).unwrap();
    let length = seg.length();
    seg.reverse();
    assert_point_eq!(seg.start(), 0.0, 1.0);
    assert_point_eq!(seg.end(), 1.0, 0.0);
    assert!((seg.length() - length).abs() < 1e-12);
    match seg {
        Segment::Arc(a) => assert!(a.is_cw),
        _ => panic!("expected arc"),
    }
}

#[test]
fn arc_bounding_box_includes_quadrant_extremes() {
    // half circle over the top: the box must reach up to the radius even
    // though both endpoints sit on the x axis
    let seg = Segment::arc(pt(0.0, 0.0), pt(1.0, 0.0), pt(-1.0, 0.0), false).unwrap();
    let b = seg.bounding_box();
    assert!((b.min_x + 1.0).abs() < 1e-9);
    assert!((b.max_x - 1.0).abs() < 1e-9);
    assert!(b.min_y.abs() < 1e-9);
    assert!((b.max_y - 1.0).abs() < 1e-9);
}

#[test]
fn contains_point() {
    let line = Segment::line(pt(0.0, 0.0), pt(2.0, 0.0)).unwrap();
    assert!(line.contains_point_eps(pt(1.0, 0.0), 1e-8));
    assert!(!line.contains_point_eps(pt(3.0, 0.0), 1e-8));
    assert!(!line.contains_point_eps(pt(1.0, 0.5), 1e-8));

    let arc = Segment::arc(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0), false).unwrap();
    let r = 0.5f64.sqrt();
    assert!(arc.contains_point_eps(pt(r, r), 1e-8));
    assert!(!arc.contains_point_eps(pt(-r, r), 1e-8));

    let circle = Segment::circle(pt(0.0, 0.0), 1.0).unwrap();
    assert!(circle.contains_point_eps(pt(-1.0, 0.0), 1e-8));
    assert!(!circle.contains_point_eps(pt(0.5, 0.0), 1e-8));
}

#[test]
fn circle_canonical_endpoint() {
    let circle = Segment::circle(pt(2.0, 3.0), 1.5).unwrap();
    assert_point_eq!(circle.start(), 3.5, 3.0);
    assert_point_eq!(circle.end(), 3.5, 3.0);
    assert_point_eq!(circle.midpoint(), 0.5, 3.0);
}
