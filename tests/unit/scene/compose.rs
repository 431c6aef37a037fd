use std::f64::consts::FRAC_PI_2;

use super::*;
use crate::draw::list::DrawOp;
use crate::theme::ThemeKind;

fn reading(h: u8, m: u8, s: u8) -> ClockReading {
    ClockReading::new(h, m, s).unwrap()
}

fn frame_for(kind: ThemeKind, r: ClockReading, f: u64) -> DisplayList {
    let canvas = Canvas::default();
    compose(
        kind.theme(),
        canvas,
        &FieldGeometry::new(canvas),
        r,
        FrameIndex(f),
    )
}

#[test]
fn compose_is_idempotent() {
    for kind in ThemeKind::ALL {
        let a = frame_for(kind, reading(7, 42, 13), 99);
        let b = frame_for(kind, reading(7, 42, 13), 99);
        assert_eq!(a, b);
    }
}

#[test]
fn animated_themes_change_with_frame_counter_only() {
    let r = reading(7, 42, 13);
    assert_eq!(
        frame_for(ThemeKind::Classic, r, 1),
        frame_for(ThemeKind::Classic, r, 2)
    );
    assert_ne!(
        frame_for(ThemeKind::Running, r, 1),
        frame_for(ThemeKind::Running, r, 2)
    );
    assert_ne!(
        frame_for(ThemeKind::Prancing, r, 1),
        frame_for(ThemeKind::Prancing, r, 2)
    );
}

#[test]
fn classic_labels_follow_figures_in_order() {
    let list = frame_for(ThemeKind::Classic, reading(12, 5, 59), 0);
    assert_eq!(list.texts(), vec!["12", "5", "59"]);

    let list = frame_for(ThemeKind::Classic, reading(21, 0, 0), 0);
    assert_eq!(list.texts(), vec!["9", "0", "0"]);
}

#[test]
fn other_themes_have_no_labels() {
    assert!(frame_for(ThemeKind::Running, reading(1, 2, 3), 0).texts().is_empty());
    assert!(frame_for(ThemeKind::Prancing, reading(1, 2, 3), 0).texts().is_empty());
}

#[test]
fn figures_are_drawn_hour_minute_second() {
    let list = frame_for(ThemeKind::Classic, reading(3, 0, 0), 0);
    let glows: Vec<_> = list
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Glow { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(glows, ThemeKind::Classic.theme().palette.to_vec());
}

#[test]
fn poses_match_dial_positions() {
    let g = FieldGeometry::new(Canvas::default());
    let [(_, hour), (_, minute), (_, second)] = poses(&g, reading(0, 30, 45));
    assert!((hour.angle + FRAC_PI_2).abs() < 1e-12);
    assert!((hour.position.x - 400.0).abs() < 1e-9);
    assert!((hour.position.y - (400.0 - 272.0)).abs() < 1e-9);
    assert!((minute.position.y - (400.0 + 192.0)).abs() < 1e-9);
    assert!((second.position.x - (400.0 - 112.0)).abs() < 1e-9);
}

#[test]
fn label_trails_its_figure() {
    // Three o'clock: directly above the figure.
    let at = label::label_offset(0.0);
    assert!(at.x.abs() < 1e-9);
    assert!((at.y + 35.0).abs() < 1e-9);
    // Twelve o'clock: behind the figure, which is heading right.
    let at = label::label_offset(-FRAC_PI_2);
    assert!((at.x + 35.0).abs() < 1e-9);
    assert!(at.y.abs() < 1e-9);
}
