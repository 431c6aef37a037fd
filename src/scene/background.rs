use std::f64::consts::TAU;

use crate::clock::geometry::{FieldGeometry, FigureKind};
use crate::draw::painter::Painter;
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::math::Rng64;
use crate::theme::{DaisyStyle, Decoration, GrassStyle, Theme};

/// Clear the frame and lay down the theme's motif.
pub fn draw_background(p: &mut Painter, theme: &Theme, geometry: &FieldGeometry) {
    p.clear(theme.background);
    match &theme.decoration {
        Decoration::None => {}
        Decoration::Grass(style) => draw_grass(p, style),
        Decoration::Daisies(style) => draw_daisies(p, style, geometry),
    }
}

/// Orbit guide rings, if the theme has them.
pub fn draw_guides(p: &mut Painter, theme: &Theme, geometry: &FieldGeometry) {
    let Some(guide) = theme.guides else {
        return;
    };
    let mut s = p.save();
    s.no_fill();
    s.stroke(guide.color, guide.width);
    for kind in FigureKind::ALL {
        let r = geometry.orbit(kind);
        s.circle(geometry.center.x, geometry.center.y, r * 2.0);
    }
}

fn draw_grass(p: &mut Painter, style: &GrassStyle) {
    let canvas = p.canvas();
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let count = ((w * h) / style.area_per_blade).round() as u32;

    let mut rng = Rng64::new(style.seed);
    let mut s = p.save();
    s.no_fill();
    for _ in 0..count {
        let x = rng.range(0.0, w);
        let y = rng.range(0.0, h);
        let len = rng.range(style.length.0, style.length.1);
        let lean = rng.range(-style.max_lean, style.max_lean);
        let g = rng.range(f64::from(style.green.0), f64::from(style.green.1)) as u8;
        s.stroke(Rgba8::rgb(g / 3, g, g / 4), style.width);
        s.line(Point::new(x, y), Point::new(x + lean, y - len));
    }
}

/// Positions where a daisy would be drawn. Draws the same numbers whether or not a
/// candidate is rejected, so layout does not depend on the exclusion zone.
pub(crate) fn daisy_layout(
    style: &DaisyStyle,
    geometry: &FieldGeometry,
) -> Vec<(Point, f64, f64)> {
    let (w, h) = (geometry.center.x * 2.0, geometry.center.y * 2.0);
    let keep_out = style.exclusion * geometry.field_radius;

    let mut rng = Rng64::new(style.seed);
    let mut out = Vec::new();
    for _ in 0..style.attempts {
        let at = Point::new(rng.range(0.0, w), rng.range(0.0, h));
        let scale = rng.range(style.scale.0, style.scale.1);
        let spin = rng.range(0.0, TAU);
        if (at - geometry.center).hypot() < keep_out {
            continue;
        }
        out.push((at, scale, spin));
    }
    out
}

fn draw_daisies(p: &mut Painter, style: &DaisyStyle, geometry: &FieldGeometry) {
    let petals = style.petals.max(1);
    for (at, scale, spin) in daisy_layout(style, geometry) {
        let mut s = p.save();
        s.translate(at.x, at.y);
        s.rotate(spin);
        s.no_stroke();
        s.fill(style.petal);
        for i in 0..petals {
            let mut petal = s.save();
            petal.rotate(f64::from(i) * TAU / f64::from(petals));
            petal.ellipse(4.0 * scale, 0.0, 6.0 * scale, 3.0 * scale);
        }
        s.fill(style.heart);
        s.circle(0.0, 0.0, 4.0 * scale);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/background.rs"]
mod tests;
