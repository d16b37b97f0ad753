use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn end_point(p: &StrokePath) -> Point {
    p.bez_path()
        .segments()
        .last()
        .map(|s| s.end())
        .expect("non-empty path")
}

#[test]
fn parse_line_path_has_expected_length() {
    let p = StrokePath::parse("M0,0 L100,0");
    assert!(!p.is_empty());
    assert!(approx(p.arc_length(), 100.0));
}

#[test]
fn malformed_description_yields_empty_path() {
    let p = StrokePath::parse("M0,0 L100,");
    assert!(p.is_empty());
    assert_eq!(p.arc_length(), 0.0);

    let p = StrokePath::parse("M10,10 X20,20");
    assert!(p.is_empty());

    let p = StrokePath::parse("not a path");
    assert!(p.is_empty());
}

#[test]
fn half_prefix_of_horizontal_line_ends_at_midpoint() {
    let p = StrokePath::parse("M0,0 L100,0");
    let half = p.extract_prefix(0.5);
    let first = half.bez_path().segments().next().unwrap();
    assert_eq!(first.start(), Point::new(0.0, 0.0));
    let end = end_point(&half);
    assert!(approx(end.x, 50.0) && approx(end.y, 0.0));
    assert!(approx(half.arc_length(), 50.0));
}

#[test]
fn prefix_bounds() {
    let p = StrokePath::parse("M0,0 C0,100 100,100 100,0");
    assert!(p.extract_prefix(0.0).is_empty());
    assert!(p.extract_prefix(-1.0).is_empty());
    assert!(p.extract_prefix(f64::NAN).is_empty());
    assert_eq!(p.extract_prefix(1.0), p);
    assert_eq!(p.extract_prefix(7.0), p);
    assert_eq!(p.extract_prefix(1.0).extract_prefix(1.0), p);
    assert!(approx(p.extract_prefix(1.0).arc_length(), p.arc_length()));
}

#[test]
fn prefix_length_is_monotonic() {
    let p = StrokePath::parse("M0,0 Q50,80 100,0 L160,40 C200,90 260,10 300,60");
    let total = p.arc_length();
    let mut prev = 0.0;
    for i in 0..=20 {
        let pct = f64::from(i) / 20.0;
        let len = p.extract_prefix(pct).arc_length();
        assert!(len + 1e-6 >= prev, "prefix length decreased at {pct}");
        assert!((len - pct * total).abs() < 1e-3, "prefix at {pct} has length {len}");
        prev = len;
    }
}

#[test]
fn each_contour_is_truncated_by_its_own_length() {
    let p = StrokePath::parse("M0,0 L100,0 M0,10 L0,210");
    let half = p.extract_prefix(0.5);
    let ends: Vec<Point> = half.bez_path().segments().map(|s| s.end()).collect();
    assert_eq!(ends.len(), 2);
    assert!(approx(ends[0].x, 50.0) && approx(ends[0].y, 0.0));
    assert!(approx(ends[1].x, 0.0) && approx(ends[1].y, 110.0));
    assert!(approx(half.arc_length(), 150.0));
}

#[test]
fn closed_contour_prefix_walks_closing_edge() {
    let square = StrokePath::parse("M0,0 L10,0 L10,10 L0,10 Z");
    assert!(approx(square.arc_length(), 40.0));
    let end = end_point(&square.extract_prefix(0.9));
    assert!(approx(end.x, 0.0) && approx(end.y, 4.0));
}

#[test]
fn polyline_needs_two_points() {
    assert!(StrokePath::from_polyline(&[]).is_empty());
    assert!(StrokePath::from_polyline(&[[5.0, 5.0]]).is_empty());

    let p = StrokePath::from_polyline(&[[0.0, 0.0], [30.0, 40.0], [30.0, 0.0]]);
    assert!(approx(p.arc_length(), 90.0));
}
