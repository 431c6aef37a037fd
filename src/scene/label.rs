use std::f64::consts::FRAC_PI_2;

use crate::draw::painter::Painter;
use crate::foundation::core::{Point, Rgba8};
use crate::scene::figure::Pose;

const LABEL_OFFSET: f64 = 35.0;
const LABEL_SIZE: (f64, f64) = (30.0, 20.0);
const LABEL_CORNER: f64 = 5.0;
const LABEL_TEXT_SIZE: f64 = 14.0;
const LABEL_BACKDROP: Rgba8 = Rgba8::rgba(0, 0, 0, 150);

/// Label center relative to the figure, a quarter turn behind the radial direction.
/// Trails the figure along its orbit; at three o'clock it sits straight above.
pub(crate) fn label_offset(angle: f64) -> Point {
    let a = angle - FRAC_PI_2;
    Point::new(a.cos() * LABEL_OFFSET, a.sin() * LABEL_OFFSET)
}

/// Numeral badge above a figure.
pub fn draw_label(p: &mut Painter, pose: Pose, text: &str, color: Rgba8) {
    let at = label_offset(pose.angle);

    let mut s = p.save();
    s.translate(pose.position.x, pose.position.y);
    s.fill(LABEL_BACKDROP);
    s.no_stroke();
    s.rounded_rect_centered(at.x, at.y, LABEL_SIZE.0, LABEL_SIZE.1, LABEL_CORNER);
    s.fill(color);
    s.text(text, at, LABEL_TEXT_SIZE);
}
