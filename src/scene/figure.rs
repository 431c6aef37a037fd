//! The dog figure.
//!
//! Local frame: origin at the figure center, +x along the direction of travel (head side),
//! ±y to either flank. The caller's rotation is `angle + π/2` so that +x is tangent to the
//! orbit.

use std::f64::consts::FRAC_PI_2;

use crate::clock::geometry::FigureKind;
use crate::draw::painter::Painter;
use crate::foundation::core::{FrameIndex, Point, Rgba8};
use crate::theme::{Motion, PrancingGait, RunningGait, Theme};

const LEG_SHADE: f64 = 0.8;
const TAIL_ALPHA: u8 = 150;
const TAIL_WIDTH: f64 = 3.0;
/// Tail control points; the spline runs from the second to the third.
const TAIL: [Point; 4] = [
    Point::new(-15.0, 0.0),
    Point::new(-15.0, 0.0),
    Point::new(-20.0, -5.0),
    Point::new(-22.0, -8.0),
];
const TAIL_BASE: Point = Point::new(-15.0, 0.0);
const PRANCE_TAIL_LIFT: f64 = -0.35;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pair {
    Front,
    Back,
}

#[derive(Clone, Copy, Debug)]
struct Leg {
    x: f64,
    /// -1 or +1: which flank.
    side: f64,
    pair: Pair,
}

const LEGS: [Leg; 4] = [
    Leg {
        x: -8.0,
        side: -1.0,
        pair: Pair::Back,
    },
    Leg {
        x: -2.0,
        side: -1.0,
        pair: Pair::Front,
    },
    Leg {
        x: -8.0,
        side: 1.0,
        pair: Pair::Back,
    },
    Leg {
        x: -2.0,
        side: 1.0,
        pair: Pair::Front,
    },
];

/// Where one figure is this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Canvas position on the orbit.
    pub position: Point,
    /// Orbit angle, radians.
    pub angle: f64,
}

/// Vertical lift of the whole figure, in screen pixels (positive is up).
pub(crate) fn bounce_height(motion: &Motion, frame: FrameIndex) -> f64 {
    match motion {
        Motion::Prancing(g) => (frame.as_f64() * g.bounce_rate).sin().abs() * g.bounce_amplitude,
        Motion::Still | Motion::Running(_) => 0.0,
    }
}

fn running_leg_offset(g: &RunningGait, leg: Leg, frame: FrameIndex) -> f64 {
    // Diagonal pairs move together, opposite to the other diagonal.
    let diagonal = match leg.pair {
        Pair::Front => leg.side,
        Pair::Back => -leg.side,
    };
    (frame.as_f64() * g.leg_rate).sin() * g.leg_amplitude * diagonal
}

fn prancing_leg_lift(g: &PrancingGait, leg: Leg, frame: FrameIndex) -> f64 {
    let lag = match leg.pair {
        Pair::Front => 0.0,
        Pair::Back => g.pair_phase,
    };
    (frame.as_f64() * g.lift_rate - lag).sin().max(0.0) * g.lift_amplitude
}

fn tail_angle(motion: &Motion, frame: FrameIndex) -> f64 {
    match motion {
        Motion::Still => 0.0,
        Motion::Running(g) => (frame.as_f64() * g.tail_rate).sin() * g.tail_amplitude,
        Motion::Prancing(_) => PRANCE_TAIL_LIFT,
    }
}

/// Draw one figure at its pose. All state changes are scoped to this call.
pub fn draw_figure(
    p: &mut Painter,
    theme: &Theme,
    kind: FigureKind,
    pose: Pose,
    frame: FrameIndex,
) {
    let color = theme.color(kind);
    let lift = bounce_height(&theme.motion, frame);

    let mut s = p.save();
    s.translate(pose.position.x, pose.position.y - lift);
    s.rotate(pose.angle + FRAC_PI_2);

    match theme.glow_blur(kind) {
        Some(blur) => s.glow(blur, color, |g| draw_dog(g, theme, color, frame)),
        None => draw_dog(&mut s, theme, color, frame),
    }
}

fn draw_dog(p: &mut Painter, theme: &Theme, color: Rgba8, frame: FrameIndex) {
    p.fill(color);
    match theme.outline {
        Some(c) => p.stroke(c, 1.0),
        None => p.no_stroke(),
    }
    p.ellipse(0.0, 0.0, 30.0, 18.0);
    p.circle(12.0, 0.0, 16.0);

    if !matches!(theme.motion, Motion::Still) {
        draw_face(p, color);
    }

    p.fill(color.scaled(LEG_SHADE));
    p.no_stroke();
    for leg in LEGS {
        draw_leg(p, &theme.motion, leg, frame);
    }

    let mut t = p.save();
    t.translate(TAIL_BASE.x, TAIL_BASE.y);
    t.rotate(tail_angle(&theme.motion, frame));
    t.stroke(color.with_alpha(TAIL_ALPHA), TAIL_WIDTH);
    t.no_fill();
    let local = TAIL.map(|pt| pt - TAIL_BASE.to_vec2());
    t.curve(&local);
}

fn draw_leg(p: &mut Painter, motion: &Motion, leg: Leg, frame: FrameIndex) {
    let (dx, lift) = match motion {
        Motion::Still => (0.0, 0.0),
        Motion::Running(g) => (running_leg_offset(g, leg, frame), 0.0),
        Motion::Prancing(g) => (0.0, prancing_leg_lift(g, leg, frame)),
    };
    // Legs reach from the flank (|y| = 2) out to |y| = 10; a lift pulls the paw in.
    let paw = (10.0 - lift) * leg.side;
    let len = (8.0 - lift) * leg.side;
    p.rect(leg.x + dx, paw, 4.0, -len);
}

fn draw_face(p: &mut Painter, color: Rgba8) {
    let dark = color.scaled(0.55);

    p.fill(dark);
    p.no_stroke();
    for side in [-1.0, 1.0] {
        p.ellipse(9.0, 6.5 * side, 6.0, 4.0);
    }

    p.fill(color.scaled(0.9));
    p.ellipse(19.0, 0.0, 7.0, 6.0);
    p.fill(Rgba8::rgb(20, 20, 20));
    p.circle(22.0, 0.0, 2.5);

    for side in [-1.0, 1.0] {
        p.circle(15.0, 3.5 * side, 2.5);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/figure.rs"]
mod tests;
