use kurbo::Shape as _;

use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8};

/// Stroke color and width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color, straight alpha.
    pub color: Rgba8,
    /// Stroke width in local units.
    pub width: f64,
}

/// One backend-agnostic drawing primitive.
///
/// Paths are in local coordinates; `transform` maps them to canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill the whole canvas.
    Clear(Rgba8),
    /// Fill a closed path.
    Fill {
        /// Path in local coordinates.
        path: BezPath,
        /// Local-to-canvas transform.
        transform: Affine,
        /// Fill color.
        color: Rgba8,
    },
    /// Stroke a path.
    Stroke {
        /// Path in local coordinates.
        path: BezPath,
        /// Local-to-canvas transform.
        transform: Affine,
        /// Color and width.
        style: StrokeStyle,
    },
    /// Single line of text centered on `anchor`.
    Text {
        /// Text content.
        text: String,
        /// Local-to-canvas transform.
        transform: Affine,
        /// Text center in local coordinates.
        anchor: Point,
        /// Font size in pixels.
        size: f64,
        /// Text color.
        color: Rgba8,
    },
    /// Draw `ops` over a blurred, tinted copy of their own coverage.
    Glow {
        /// Shadow blur, in canvas `shadowBlur` units (sigma is half of this).
        blur: f64,
        /// Shadow color.
        color: Rgba8,
        /// Grouped ops.
        ops: Vec<DrawOp>,
    },
}

impl DrawOp {
    /// Conservative canvas-space bounds, or `None` for full-canvas ops.
    pub fn device_bounds(&self) -> Option<Rect> {
        match self {
            DrawOp::Clear(_) => None,
            DrawOp::Fill {
                path, transform, ..
            } => Some((*transform * path.clone()).bounding_box()),
            DrawOp::Stroke {
                path,
                transform,
                style,
            } => {
                let b = (*transform * path.clone()).bounding_box();
                let scale = transform_scale(*transform);
                Some(b.inflate(style.width * scale, style.width * scale))
            }
            DrawOp::Text {
                text,
                transform,
                anchor,
                size,
                ..
            } => {
                let c = *transform * *anchor;
                let half_w = (text.chars().count() as f64 * 0.5 + 1.0) * size;
                Some(Rect::new(c.x - half_w, c.y - size, c.x + half_w, c.y + size))
            }
            DrawOp::Glow { blur, ops, .. } => {
                let mut acc: Option<Rect> = None;
                for op in ops {
                    let b = op.device_bounds()?;
                    acc = Some(acc.map_or(b, |a| a.union(b)));
                }
                acc.map(|r| r.inflate(blur * 1.5, blur * 1.5))
            }
        }
    }
}

fn transform_scale(t: Affine) -> f64 {
    let [a, b, c, d, _, _] = t.as_coeffs();
    (a * a + b * b).sqrt().max((c * c + d * d).sqrt())
}

/// Everything one frame draws, in painter's order.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayList {
    /// Target canvas.
    pub canvas: Canvas,
    /// Top-level ops.
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    /// Number of ops including those nested in glow groups.
    pub fn op_count(&self) -> usize {
        fn count(ops: &[DrawOp]) -> usize {
            ops.iter()
                .map(|op| match op {
                    DrawOp::Glow { ops, .. } => 1 + count(ops),
                    _ => 1,
                })
                .sum()
        }
        count(&self.ops)
    }

    /// Text of every text op, in order.
    pub fn texts(&self) -> Vec<&str> {
        fn collect<'a>(ops: &'a [DrawOp], out: &mut Vec<&'a str>) {
            for op in ops {
                match op {
                    DrawOp::Text { text, .. } => out.push(text),
                    DrawOp::Glow { ops, .. } => collect(ops, out),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        collect(&self.ops, &mut out);
        out
    }
}
