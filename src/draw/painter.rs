use std::ops::{Deref, DerefMut};

use kurbo::Shape as _;

use crate::draw::list::{DisplayList, DrawOp, StrokeStyle};
use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2};

const PATH_TOLERANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
struct DrawState {
    transform: Affine,
    fill: Option<Rgba8>,
    stroke: Option<StrokeStyle>,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            fill: Some(Rgba8::rgb(255, 255, 255)),
            stroke: Some(StrokeStyle {
                color: Rgba8::rgb(0, 0, 0),
                width: 1.0,
            }),
        }
    }
}

/// Immediate-mode recorder with a current transform and fill/stroke style.
///
/// Shapes are recorded into a [`DisplayList`] with whatever state is current. Use
/// [`Painter::save`] to scope state changes.
#[derive(Debug)]
pub struct Painter {
    canvas: Canvas,
    ops: Vec<DrawOp>,
    state: DrawState,
    saved: Vec<DrawState>,
}

/// State scope returned by [`Painter::save`]. Restores transform and style on drop.
pub struct Scope<'a> {
    painter: &'a mut Painter,
}

impl Deref for Scope<'_> {
    type Target = Painter;

    fn deref(&self) -> &Painter {
        self.painter
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Painter {
        self.painter
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.painter.restore();
    }
}

impl Painter {
    /// Start an empty recording for `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ops: Vec::new(),
            state: DrawState::default(),
            saved: Vec::new(),
        }
    }

    /// Stop recording.
    pub fn finish(self) -> DisplayList {
        debug_assert!(self.saved.is_empty(), "unbalanced painter scopes");
        DisplayList {
            canvas: self.canvas,
            ops: self.ops,
        }
    }

    /// Push the current state. It is restored when the returned scope drops.
    pub fn save(&mut self) -> Scope<'_> {
        self.saved.push(self.state);
        Scope { painter: self }
    }

    fn restore(&mut self) {
        if let Some(s) = self.saved.pop() {
            self.state = s;
        }
    }

    /// Scope nesting depth.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Current local-to-canvas transform.
    pub fn transform(&self) -> Affine {
        self.state.transform
    }

    /// Recording target.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Move the local origin.
    pub fn translate(&mut self, x: f64, y: f64) {
        self.state.transform *= Affine::translate(Vec2::new(x, y));
    }

    /// Rotate local axes by `theta` radians (clockwise on screen).
    pub fn rotate(&mut self, theta: f64) {
        self.state.transform *= Affine::rotate(theta);
    }

    /// Set the fill color.
    pub fn fill(&mut self, color: Rgba8) {
        self.state.fill = Some(color);
    }

    /// Disable fill.
    pub fn no_fill(&mut self) {
        self.state.fill = None;
    }

    /// Set the stroke color and width.
    pub fn stroke(&mut self, color: Rgba8, width: f64) {
        self.state.stroke = Some(StrokeStyle { color, width });
    }

    /// Disable stroke.
    pub fn no_stroke(&mut self) {
        self.state.stroke = None;
    }

    /// Fill the whole canvas, ignoring transform and style.
    pub fn clear(&mut self, color: Rgba8) {
        self.ops.push(DrawOp::Clear(color));
    }

    /// Ellipse centered on `(cx, cy)` with diameters `w` and `h`.
    pub fn ellipse(&mut self, cx: f64, cy: f64, w: f64, h: f64) {
        let e = kurbo::Ellipse::new(Point::new(cx, cy), Vec2::new(w / 2.0, h / 2.0), 0.0);
        self.shape(e.to_path(PATH_TOLERANCE));
    }

    /// Circle centered on `(cx, cy)` with diameter `d`.
    pub fn circle(&mut self, cx: f64, cy: f64, d: f64) {
        self.ellipse(cx, cy, d, d);
    }

    /// Rectangle from corner `(x, y)`. Negative sizes extend up or left.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let r = Rect::from_points(Point::new(x, y), Point::new(x + w, y + h));
        self.shape(r.to_path(PATH_TOLERANCE));
    }

    /// Rounded rectangle centered on `(cx, cy)`.
    pub fn rounded_rect_centered(&mut self, cx: f64, cy: f64, w: f64, h: f64, radius: f64) {
        let r = Rect::from_center_size(Point::new(cx, cy), (w, h)).to_rounded_rect(radius);
        self.shape(r.to_path(PATH_TOLERANCE));
    }

    /// Straight line, stroke only.
    pub fn line(&mut self, from: Point, to: Point) {
        let mut p = BezPath::new();
        p.move_to(from);
        p.line_to(to);
        self.stroke_only(p);
    }

    /// Open Catmull-Rom spline through `points[1..n-1]`, using the first and last points
    /// as tangent guides. Needs at least four points.
    pub fn curve(&mut self, points: &[Point]) {
        if let Some(path) = catmull_rom(points) {
            self.stroke_only(path);
        }
    }

    /// Text centered on `at`, in the current fill color.
    pub fn text(&mut self, text: impl Into<String>, at: Point, size: f64) {
        let Some(color) = self.state.fill else {
            return;
        };
        self.ops.push(DrawOp::Text {
            text: text.into(),
            transform: self.state.transform,
            anchor: at,
            size,
            color,
        });
    }

    /// Record whatever `draw` paints as one glow group.
    pub fn glow(&mut self, blur: f64, color: Rgba8, draw: impl FnOnce(&mut Painter)) {
        let outer = std::mem::take(&mut self.ops);
        {
            let mut inner = self.save();
            draw(&mut inner);
        }
        let ops = std::mem::replace(&mut self.ops, outer);
        if !ops.is_empty() {
            self.ops.push(DrawOp::Glow { blur, color, ops });
        }
    }

    fn shape(&mut self, path: BezPath) {
        if let Some(color) = self.state.fill {
            self.ops.push(DrawOp::Fill {
                path: path.clone(),
                transform: self.state.transform,
                color,
            });
        }
        self.stroke_only(path);
    }

    fn stroke_only(&mut self, path: BezPath) {
        if let Some(style) = self.state.stroke {
            self.ops.push(DrawOp::Stroke {
                path,
                transform: self.state.transform,
                style,
            });
        }
    }
}

/// Convert a Catmull-Rom point run into cubic Béziers (tightness 0).
pub(crate) fn catmull_rom(points: &[Point]) -> Option<BezPath> {
    if points.len() < 4 {
        return None;
    }
    let mut path = BezPath::new();
    path.move_to(points[1]);
    for w in points.windows(4) {
        let (p0, p1, p2, p3) = (w[0], w[1], w[2], w[3]);
        let c1 = p1 + (p2 - p0) / 6.0;
        let c2 = p2 - (p3 - p1) / 6.0;
        path.curve_to(c1, c2, p2);
    }
    Some(path)
}

#[cfg(test)]
#[path = "../../tests/unit/draw/painter.rs"]
mod tests;
