use board_contours::drill::apply_drills;
use board_contours::{Outline, OutlineError, Point, Segment};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn pt(x: f64, y: f64) -> Point<f64> {
    Point::xy(x, y)
}

fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment<f64> {
    Segment::line(pt(x0, y0), pt(x1, y1)).unwrap()
}

fn square(half: f64) -> Outline<f64> {
    let mut outline = Outline::new();
    outline.add_segment(line(-half, -half, half, -half)).unwrap();
    outline.add_segment(line(half, -half, half, half)).unwrap();
    outline.add_segment(line(half, half, -half, half)).unwrap();
    outline.add_segment(line(-half, half, -half, -half)).unwrap();
    outline
}

fn circle(x: f64, y: f64, r: f64) -> Segment<f64> {
    Segment::circle(pt(x, y), r).unwrap()
}

#[test]
fn overlapping_drills_merge_into_a_compound_cutout() {
    let mut board = square(10.0);
    apply_drills(&mut board, vec![circle(0.0, 0.0, 1.0), circle(1.2, 0.0, 1.0)]).unwrap();

    assert_eq!(board.cutouts().len(), 1);
    assert!(board.drill_holes().is_empty());
    let cutout = &board.cutouts()[0];
    assert_eq!(cutout.segments().len(), 2);
    assert!(cutout.is_contiguous());
    // the pill covers both drill centers
    assert!(cutout.is_inside(pt(0.0, 0.0)).unwrap());
    assert!(cutout.is_inside(pt(1.2, 0.0)).unwrap());
    assert!(!cutout.is_inside(pt(0.6, 0.9)).unwrap());
}

#[test]
fn isolated_drill_becomes_a_hole() {
    let mut board = square(10.0);
    apply_drills(&mut board, vec![circle(5.0, 5.0, 0.5)]).unwrap();
    assert!(board.cutouts().is_empty());
    assert_eq!(board.drill_holes().len(), 1);
    assert_eq!(board.drill_holes()[0], circle(5.0, 5.0, 0.5));
}

#[test]
fn boundary_crossing_drill_notches_the_ring() {
    let mut board = square(10.0);
    apply_drills(&mut board, vec![circle(10.0, 0.0, 1.0)]).unwrap();
    assert!(board.cutouts().is_empty());
    assert!(board.drill_holes().is_empty());
    assert_eq!(board.segments().len(), 6);
    assert!(board.is_contiguous());
    assert!(!board.is_inside(pt(9.5, 0.0)).unwrap());
}

#[test]
fn mixed_batch_routes_each_group() {
    init_tracing();
    let mut board = square(10.0);
    apply_drills(
        &mut board,
        vec![
            circle(0.0, 0.0, 1.0),
            circle(1.2, 0.0, 1.0),
            circle(5.0, 5.0, 0.5),
            circle(10.0, 0.0, 1.0),
        ],
    )
    .unwrap();

    assert_eq!(board.cutouts().len(), 1);
    assert_eq!(board.drill_holes().len(), 1);
    assert_eq!(board.segments().len(), 6);
    assert!(board.is_contiguous());
}

#[test]
fn three_drills_chain_into_one_group() {
    // the middle drill bridges the outer two; re-scanning after each merge
    // must pick up the chain
    let mut board = square(10.0);
    apply_drills(
        &mut board,
        vec![
            circle(-1.5, 0.0, 1.0),
            circle(1.5, 0.0, 1.0),
            circle(0.0, 0.0, 1.0),
        ],
    )
    .unwrap();
    assert_eq!(board.cutouts().len(), 1);
    assert!(board.drill_holes().is_empty());
    let cutout = &board.cutouts()[0];
    assert!(cutout.is_inside(pt(-1.5, 0.0)).unwrap());
    assert!(cutout.is_inside(pt(1.5, 0.0)).unwrap());
}

#[test]
fn duplicate_drills_rejected() {
    let mut board = square(10.0);
    let result = apply_drills(&mut board, vec![circle(0.0, 0.0, 1.0), circle(0.0, 0.0, 1.0)]);
    assert!(matches!(result, Err(OutlineError::InvalidGeometry(_))));
    // grouping failed before the board was touched
    assert_eq!(board.segments().len(), 4);
    assert!(board.drill_holes().is_empty());
}

#[test]
fn non_circle_drill_rejected() {
    let mut board = square(10.0);
    let result = apply_drills(&mut board, vec![line(0.0, 0.0, 1.0, 0.0)]);
    assert!(matches!(result, Err(OutlineError::InvalidGeometry(_))));
}
