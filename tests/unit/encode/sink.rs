use super::*;

fn frame(w: u32, h: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: px.repeat((w * h) as usize),
        premultiplied: true,
    }
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 4,
        height: 2,
        fps: 30,
    }
}

#[test]
fn in_memory_sink_captures_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(4, 2, [0, 0, 0, 255]))
        .unwrap();
    sink.push_frame(FrameIndex(1), &frame(4, 2, [255, 255, 255, 255]))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(&cfg()));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1]);
    assert!(sink.is_ended());
}

#[test]
fn png_sequence_writes_decodable_files() {
    let dir = PathBuf::from("target").join("unit_png_sequence");
    let _ = std::fs::remove_dir_all(&dir);

    let mut sink = PngSequenceSink::new(&dir).with_prefix("yong");
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(3), &frame(4, 2, [128, 0, 0, 128]))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written(), &[dir.join("yong_00003.png")]);
    let img = image::open(&sink.written()[0]).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 2));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);
}
