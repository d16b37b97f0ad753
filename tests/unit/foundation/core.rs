use super::*;

#[test]
fn canvas_rejects_zero_and_oversized_sides() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    assert_eq!(
        Canvas::square(256).unwrap(),
        Canvas {
            width: 256,
            height: 256
        }
    );
}

#[test]
fn canvas_size_f64_matches_dimensions() {
    let c = Canvas::new(300, 200).unwrap();
    assert_eq!(c.size_f64(), (300.0, 200.0));
}
