//! Per-frame scene composition.

pub(crate) mod background;
pub(crate) mod figure;
pub(crate) mod label;

use crate::clock::geometry::{ClockAngles, FieldGeometry, FigureKind};
use crate::clock::reading::ClockReading;
use crate::draw::list::DisplayList;
use crate::draw::painter::Painter;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::theme::Theme;

pub use figure::Pose;

/// Poses of all three figures, in draw order.
pub fn poses(geometry: &FieldGeometry, reading: ClockReading) -> [(FigureKind, Pose); 3] {
    let angles = ClockAngles::from_reading(reading);
    FigureKind::ALL.map(|kind| {
        let angle = angles.get(kind);
        (
            kind,
            Pose {
                position: geometry.position(kind, angle),
                angle,
            },
        )
    })
}

/// Record one frame.
///
/// Pure: the same theme, geometry, reading and frame counter always give the same list.
pub fn compose(
    theme: &Theme,
    canvas: Canvas,
    geometry: &FieldGeometry,
    reading: ClockReading,
    frame: FrameIndex,
) -> DisplayList {
    let mut p = Painter::new(canvas);

    background::draw_background(&mut p, theme, geometry);
    background::draw_guides(&mut p, theme, geometry);

    let poses = poses(geometry, reading);
    for (kind, pose) in poses {
        figure::draw_figure(&mut p, theme, kind, pose, frame);
    }
    if theme.labels {
        for (kind, pose) in poses {
            label::draw_label(&mut p, pose, &kind.label(reading), theme.color(kind));
        }
    }

    p.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compose.rs"]
mod tests;
