use super::*;
use std::io::Cursor;

#[test]
fn empty_json_yields_defaults() {
    let opts = RenderOpts::from_reader(Cursor::new("{}")).unwrap();
    assert_eq!(opts, RenderOpts::default());
    assert_eq!(opts.completed_style(), &opts.pen);
}

#[test]
fn partial_json_overrides_fields() {
    let json = r##"{
        "canvas": { "width": 256, "height": 128 },
        "background": null,
        "pen": { "color": "#1565c0", "width": 30, "cap": "round" },
        "completed_pen": { "color": [0, 0, 0], "width": 30 }
    }"##;
    let opts = RenderOpts::from_reader(Cursor::new(json)).unwrap();
    assert_eq!(opts.canvas, Canvas::new(256, 128).unwrap());
    assert_eq!(opts.background, None);
    assert_eq!(opts.pen.color, Rgba8::rgb(0x15, 0x65, 0xc0));
    assert_eq!(opts.completed_style().color, Rgba8::BLACK);
    assert_eq!(opts.completed_style().cap, LineCap::Butt);
    assert_eq!(opts.outline, StrokeStyle::outline());
}

#[test]
fn invalid_values_are_rejected() {
    let err = RenderOpts::from_reader(Cursor::new(r##"{"pen":{"color":"#000000","width":0}}"##))
        .unwrap_err();
    assert!(matches!(err, BihuaError::Validation(_)));

    let err = RenderOpts::from_reader(Cursor::new(r#"{"canvas":{"width":0,"height":5}}"#))
        .unwrap_err();
    assert!(matches!(err, BihuaError::Validation(_)));

    let err = RenderOpts::from_reader(Cursor::new("not json")).unwrap_err();
    assert!(matches!(err, BihuaError::Serde(_)));
}
