use super::*;

fn frame(w: u32, h: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: px.repeat((w * h) as usize),
        premultiplied: true,
    }
}

fn cfg(w: u32, h: u32) -> SinkConfig {
    SinkConfig {
        width: w,
        height: h,
        fps: Fps::default(),
    }
}

#[test]
fn in_memory_sink_captures_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(2, 2)).unwrap();
    sink.push_frame(FrameIndex(3), &frame(2, 2, [1, 2, 3, 255])).unwrap();
    sink.push_frame(FrameIndex(4), &frame(2, 2, [4, 5, 6, 255])).unwrap();
    sink.end().unwrap();

    assert!(sink.ended());
    assert_eq!(sink.config(), Some(cfg(2, 2)));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![3, 4]);
}

#[test]
fn in_memory_sink_rejects_repeated_index() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(1, 1)).unwrap();
    sink.push_frame(FrameIndex(0), &frame(1, 1, [0, 0, 0, 255])).unwrap();
    let err = sink
        .push_frame(FrameIndex(0), &frame(1, 1, [0, 0, 0, 255]))
        .unwrap_err();
    assert!(matches!(err, DogfieldError::Encode(_)));
}

#[test]
fn begin_resets_in_memory_sink() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(1, 1)).unwrap();
    sink.push_frame(FrameIndex(9), &frame(1, 1, [0, 0, 0, 255])).unwrap();
    sink.begin(cfg(1, 1)).unwrap();
    assert!(sink.frames().is_empty());
    sink.push_frame(FrameIndex(0), &frame(1, 1, [0, 0, 0, 255])).unwrap();
}

#[test]
fn frame_size_is_checked() {
    assert!(check_frame_size(cfg(2, 2), &frame(2, 2, [0; 4])).is_ok());
    assert!(check_frame_size(cfg(2, 2), &frame(2, 1, [0; 4])).is_err());

    let mut short = frame(2, 2, [0; 4]);
    short.data.pop();
    assert!(check_frame_size(cfg(2, 2), &short).is_err());
}

#[test]
fn png_sink_names_files_by_push_count() {
    let sink = PngSequenceSink::new("target/names");
    assert_eq!(
        sink.frame_path(0),
        PathBuf::from("target/names/frame_00000.png")
    );
    assert_eq!(
        sink.frame_path(123),
        PathBuf::from("target/names/frame_00123.png")
    );
}

#[test]
fn png_sink_requires_begin() {
    let mut sink = PngSequenceSink::new("target/unstarted");
    assert!(sink.push_frame(FrameIndex(0), &frame(1, 1, [0; 4])).is_err());
    assert!(sink.end().is_err());
}
