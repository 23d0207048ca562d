use board_contours::core::math::{line_circle_intr, LineCircleIntr, Point};

fn pt(x: f64, y: f64) -> Point<f64> {
    Point::xy(x, y)
}

#[test]
fn crossing_through_center() {
    let result = line_circle_intr(pt(-2.0, 0.0), pt(2.0, 0.0), 1.0, pt(0.0, 0.0));
    match result {
        LineCircleIntr::TwoIntersects { t0, t1 } => {
            assert!((t0 - 0.25).abs() < 1e-12);
            assert!((t1 - 0.75).abs() < 1e-12);
        }
        _ => panic!("expected two intersects, got {:?}", result),
    }
}

#[test]
fn tangent_line() {
    let result = line_circle_intr(pt(-1.0, 1.0), pt(1.0, 1.0), 1.0, pt(0.0, 0.0));
    match result {
        LineCircleIntr::TangentIntersect { t0 } => {
            assert!((t0 - 0.5).abs() < 1e-12);
        }
        _ => panic!("expected tangent intersect, got {:?}", result),
    }
}

#[test]
fn line_misses_circle() {
    let result = line_circle_intr(pt(-1.0, 2.0), pt(1.0, 2.0), 1.0, pt(0.0, 0.0));
    assert_eq!(result, LineCircleIntr::NoIntersect);
}

#[test]
fn solutions_are_not_bounded_to_segment() {
    // the segment is a short stub at the center; the infinite line still
    // crosses the circle and the parametric values fall outside [0, 1]
    let result = line_circle_intr(pt(0.0, 0.0), pt(0.1, 0.0), 1.0, pt(0.0, 0.0));
    match result {
        LineCircleIntr::TwoIntersects { t0, t1 } => {
            assert!((t0 + 10.0).abs() < 1e-9);
            assert!((t1 - 10.0).abs() < 1e-9);
        }
        _ => panic!("expected two intersects, got {:?}", result),
    }
}

#[test]
fn vertical_tangent() {
    let result = line_circle_intr(pt(-1.0, -1.0), pt(-1.0, 1.0), 1.0, pt(0.0, 0.0));
    match result {
        LineCircleIntr::TangentIntersect { t0 } => {
            assert!((t0 - 0.5).abs() < 1e-12);
        }
        _ => panic!("expected tangent intersect, got {:?}", result),
    }
}
