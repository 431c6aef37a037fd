use super::*;
use crate::clock::reading::{FixedClock, SimulatedClock};
use crate::draw::list::DisplayList;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::theme::ThemeKind;

/// Returns a blank frame per list, or fails every call when `fail` is set.
struct BlankBackend {
    fail: bool,
}

impl RenderBackend for BlankBackend {
    fn render_list(&mut self, list: &DisplayList) -> DogfieldResult<FrameRGBA> {
        if self.fail {
            return Err(DogfieldError::render("backend down"));
        }
        Ok(FrameRGBA {
            width: list.canvas.width,
            height: list.canvas.height,
            data: vec![0; list.canvas.rgba_len()],
            premultiplied: true,
        })
    }
}

fn player(fail: bool) -> Player {
    let session = RenderSession::new(Canvas::new(64, 48).unwrap(), ThemeKind::Running).unwrap();
    Player::new(session, Box::new(BlankBackend { fail }), Fps::new(1, 1).unwrap())
}

fn reading(h: u8, m: u8, s: u8) -> ClockReading {
    ClockReading::new(h, m, s).unwrap()
}

fn offline(frames: u64) -> PlayerOpts {
    PlayerOpts {
        frames,
        pacing: Pacing::Offline,
    }
}

#[test]
fn run_pushes_every_frame_in_order() {
    let mut p = player(false);
    let mut sink = InMemorySink::new();
    let stats = p
        .run(&mut FixedClock(reading(8, 15, 0)), offline(5), &mut sink)
        .unwrap();

    assert_eq!(stats.frames_rendered, 5);
    assert_eq!(stats.minute_rollovers, 1);
    assert_eq!(stats.last_reading, Some(reading(8, 15, 0)));
    assert!(sink.ended());

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (64, 48));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2, 3, 4]);
    assert_eq!(p.session().frame_counter(), FrameIndex(5));
}

#[test]
fn simulated_clock_rollovers_are_counted() {
    let mut p = player(false);
    let mut sink = InMemorySink::new();
    let mut clock = SimulatedClock::new(reading(23, 59, 58), p.fps());
    let stats = p.run(&mut clock, offline(4), &mut sink).unwrap();

    // 23:59:58, 23:59:59, 00:00:00, 00:00:01
    assert_eq!(stats.minute_rollovers, 2);
    assert_eq!(stats.last_reading, Some(reading(0, 0, 1)));
}

#[test]
fn zero_frames_is_rejected() {
    let mut p = player(false);
    let mut sink = InMemorySink::new();
    let err = p
        .run(&mut FixedClock(reading(1, 0, 0)), offline(0), &mut sink)
        .unwrap_err();
    assert!(matches!(err, DogfieldError::Validation(_)));
    assert!(sink.config().is_none());
}

#[test]
fn failed_frame_does_not_poison_the_session() {
    let mut p = player(true);
    assert!(p.render_one(reading(2, 0, 0)).is_err());
    assert_eq!(p.session().frame_counter(), FrameIndex(1));

    p.backend = Box::new(BlankBackend { fail: false });
    let (out, frame) = p.render_one(reading(2, 0, 1)).unwrap();
    assert_eq!(out.frame, FrameIndex(1));
    assert!(!out.minute_rolled);
    assert_eq!(frame.width, 64);
}

#[test]
fn real_time_pacing_waits_between_frames() {
    let session = RenderSession::new(Canvas::new(16, 16).unwrap(), ThemeKind::Classic).unwrap();
    let mut p = Player::new(
        session,
        Box::new(BlankBackend { fail: false }),
        Fps::new(50, 1).unwrap(),
    );
    let mut sink = InMemorySink::new();
    let started = Instant::now();
    p.run(
        &mut FixedClock(reading(0, 0, 0)),
        PlayerOpts {
            frames: 3,
            pacing: Pacing::RealTime,
        },
        &mut sink,
    )
    .unwrap();
    // Frames 1 and 2 are due 20ms and 40ms after the start.
    assert!(started.elapsed() >= Duration::from_millis(40));
}
