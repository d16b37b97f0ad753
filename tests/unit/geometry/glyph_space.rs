use super::*;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn em_box_maps_onto_canvas_edges() {
    let gs = GlyphSpace::for_canvas(Canvas::square(512).unwrap());
    assert!(close(gs.to_canvas(Point::new(0.0, 900.0)), Point::new(0.0, 0.0)));
    assert!(close(
        gs.to_canvas(Point::new(1024.0, -124.0)),
        Point::new(512.0, 512.0)
    ));
}

#[test]
fn y_axis_is_flipped() {
    let gs = GlyphSpace::for_canvas(Canvas::square(1024).unwrap());
    let lo = gs.to_canvas(Point::new(0.0, 100.0));
    let hi = gs.to_canvas(Point::new(0.0, 800.0));
    assert!(hi.y < lo.y);
}

#[test]
fn non_square_canvas_scales_axes_independently() {
    let gs = GlyphSpace::new(Canvas::new(2048, 512).unwrap(), 0.0);
    assert!(close(
        gs.to_canvas(Point::new(512.0, -512.0)),
        Point::new(1024.0, 256.0)
    ));
}

#[test]
fn apply_maps_every_point() {
    let gs = GlyphSpace::for_canvas(Canvas::square(1024).unwrap());
    let mut p = BezPath::new();
    p.move_to((0.0, 900.0));
    p.line_to((100.0, 800.0));
    let mapped = gs.apply(&p);
    let seg = mapped.segments().next().unwrap();
    assert!(close(kurbo::ParamCurve::start(&seg), Point::new(0.0, 0.0)));
    assert!(close(kurbo::ParamCurve::end(&seg), Point::new(100.0, 100.0)));
}
