use super::*;

fn reading(h: u8, m: u8, s: u8) -> ClockReading {
    ClockReading::new(h, m, s).unwrap()
}

#[test]
fn minute_watch_fires_once_per_distinct_minute() {
    let mut w = MinuteWatch::default();
    assert_eq!(w.last(), None);
    assert!(w.observe(5));
    assert!(!w.observe(5));
    assert!(!w.observe(5));
    assert!(w.observe(6));
    assert!(!w.observe(6));
    assert!(w.observe(5));
    assert_eq!(w.last(), Some(5));
}

#[test]
fn minute_zero_counts_on_first_frame() {
    let mut w = MinuteWatch::default();
    assert!(w.observe(0));
    assert!(!w.observe(0));
}

#[test]
fn render_frame_advances_counter_once() {
    let mut s = RenderSession::new(Canvas::default(), ThemeKind::Running).unwrap();
    assert_eq!(s.frame_counter(), FrameIndex(0));
    let a = s.render_frame(reading(1, 2, 3));
    let b = s.render_frame(reading(1, 2, 3));
    assert_eq!(a.frame, FrameIndex(0));
    assert_eq!(b.frame, FrameIndex(1));
    assert_eq!(s.frame_counter(), FrameIndex(2));
}

#[test]
fn rollover_flag_tracks_minute_changes() {
    let mut s = RenderSession::new(Canvas::default(), ThemeKind::Classic).unwrap();
    let flags: Vec<bool> = [
        reading(9, 59, 58),
        reading(9, 59, 59),
        reading(10, 0, 0),
        reading(10, 0, 1),
        reading(10, 1, 0),
    ]
    .into_iter()
    .map(|r| s.render_frame(r).minute_rolled)
    .collect();
    assert_eq!(flags, vec![true, false, true, false, true]);
}

#[test]
fn render_frame_matches_pure_compose() {
    let mut s = RenderSession::new(Canvas::default(), ThemeKind::Prancing)
        .unwrap()
        .with_frame_counter(FrameIndex(40));
    let expected = s.compose(reading(4, 20, 0), FrameIndex(40));
    let out = s.render_frame(reading(4, 20, 0));
    assert_eq!(out.list, expected);
    assert_eq!(out.frame, FrameIndex(40));
}

#[test]
fn invalid_canvas_is_rejected() {
    assert!(
        RenderSession::new(
            Canvas {
                width: 0,
                height: 10
            },
            ThemeKind::Classic
        )
        .is_err()
    );
}

#[test]
fn from_config_uses_theme_and_canvas() {
    let cfg = ClockConfig {
        canvas: Canvas::new(320, 240).unwrap(),
        theme: ThemeKind::Prancing,
        ..ClockConfig::default()
    };
    let s = RenderSession::from_config(&cfg).unwrap();
    assert_eq!(s.canvas(), cfg.canvas);
    assert_eq!(s.theme().kind, ThemeKind::Prancing);
    assert!((s.geometry().field_radius - 96.0).abs() < 1e-9);
}
