use std::f64::consts::FRAC_PI_2;

use super::*;
use crate::draw::list::DrawOp;
use crate::foundation::core::Canvas;
use crate::theme::ThemeKind;

fn record(kind: ThemeKind, frame: u64, pose: Pose) -> Vec<DrawOp> {
    let mut p = Painter::new(Canvas::default());
    draw_figure(
        &mut p,
        kind.theme(),
        FigureKind::Minute,
        pose,
        FrameIndex(frame),
    );
    assert_eq!(p.depth(), 0);
    p.finish().ops
}

fn top_pose() -> Pose {
    Pose {
        position: Point::new(400.0, 208.0),
        angle: -FRAC_PI_2,
    }
}

fn leg_rects(ops: &[DrawOp]) -> Vec<kurbo::Rect> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Fill { color, .. }
                if *color == ThemeKind::Running.theme().palette[1].scaled(0.8) =>
            {
                op.device_bounds()
            }
            _ => None,
        })
        .collect()
}

#[test]
fn classic_figure_is_one_glow_group() {
    let ops = record(ThemeKind::Classic, 0, top_pose());
    assert_eq!(ops.len(), 1);
    match &ops[0] {
        DrawOp::Glow { blur, color, ops } => {
            assert_eq!(*blur, 20.0);
            assert_eq!(*color, ThemeKind::Classic.theme().palette[1]);
            // body + head (fill and outline each), four legs, tail
            assert_eq!(ops.len(), 9);
        }
        other => panic!("expected glow, got {other:?}"),
    }
}

#[test]
fn head_leads_in_direction_of_travel() {
    let ops = record(ThemeKind::Classic, 0, top_pose());
    let DrawOp::Glow { ops, .. } = &ops[0] else {
        panic!("expected glow");
    };
    // At the top of the dial the figure travels clockwise, i.e. toward +x on screen.
    let DrawOp::Fill { transform, .. } = &ops[2] else {
        panic!("expected head fill");
    };
    let head = *transform * Point::new(12.0, 0.0);
    assert!((head.x - 412.0).abs() < 1e-9);
    assert!((head.y - 208.0).abs() < 1e-9);
}

#[test]
fn classic_is_static_across_frames() {
    assert_eq!(
        record(ThemeKind::Classic, 0, top_pose()),
        record(ThemeKind::Classic, 1234, top_pose())
    );
}

#[test]
fn running_legs_swing_with_the_frame_counter() {
    let rest = leg_rects(&record(ThemeKind::Running, 0, top_pose()));
    let mid = leg_rects(&record(ThemeKind::Running, 5, top_pose()));
    assert_eq!(rest.len(), 4);
    assert_eq!(mid.len(), 4);
    assert_ne!(rest, mid);

    // Diagonal pairs move in opposite directions along the body axis.
    let dx: Vec<f64> = rest.iter().zip(&mid).map(|(a, b)| b.x0 - a.x0).collect();
    assert!((dx[0] + dx[1]).abs() < 1e-9);
    assert!((dx[0] - dx[3]).abs() < 1e-9);
    assert!(dx[0].abs() > 0.1);
}

#[test]
fn running_figure_has_face_details_and_no_glow() {
    let ops = record(ThemeKind::Running, 3, top_pose());
    assert!(ops.iter().all(|op| !matches!(op, DrawOp::Glow { .. })));
    let fills = ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Fill { .. }))
        .count();
    // body, head, 2 ears, snout, nose, 2 eyes, 4 legs
    assert_eq!(fills, 12);
}

#[test]
fn prancing_bounce_is_rectified() {
    let motion = &ThemeKind::Prancing.theme().motion;
    let Motion::Prancing(g) = motion else {
        panic!("prancing theme must prance");
    };
    assert_eq!(bounce_height(motion, FrameIndex(0)), 0.0);
    for f in 0..200 {
        let h = bounce_height(motion, FrameIndex(f));
        assert!((0.0..=g.bounce_amplitude).contains(&h));
    }
    let still = &ThemeKind::Classic.theme().motion;
    assert_eq!(bounce_height(still, FrameIndex(17)), 0.0);
}

#[test]
fn prancing_front_and_back_lift_out_of_phase() {
    let Motion::Prancing(g) = &ThemeKind::Prancing.theme().motion else {
        panic!("prancing theme must prance");
    };
    let front = LEGS[1];
    let back = LEGS[0];
    // Quarter cycle: front pair is fully lifted while the back pair is still down.
    let f = FrameIndex((FRAC_PI_2 / g.lift_rate).round() as u64);
    assert!(prancing_leg_lift(g, front, f) > prancing_leg_lift(g, back, f));
    for i in 0..100 {
        let l = prancing_leg_lift(g, back, FrameIndex(i));
        assert!((0.0..=g.lift_amplitude).contains(&l));
    }
}

#[test]
fn prancing_figure_rises_on_screen() {
    let pose = top_pose();
    let f = 16;
    let lift = bounce_height(&ThemeKind::Prancing.theme().motion, FrameIndex(f));
    assert!(lift > 0.0);
    let ops = record(ThemeKind::Prancing, f, pose);
    let DrawOp::Fill { transform, .. } = &ops[0] else {
        panic!("expected body fill");
    };
    let center = *transform * Point::ZERO;
    assert!((center.y - (pose.position.y - lift)).abs() < 1e-9);
}
