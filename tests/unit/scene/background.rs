use super::*;
use crate::draw::list::DrawOp;
use crate::foundation::core::Canvas;
use crate::theme::ThemeKind;

fn record(kind: ThemeKind, canvas: Canvas) -> Vec<DrawOp> {
    let geometry = FieldGeometry::new(canvas);
    let mut p = Painter::new(canvas);
    draw_background(&mut p, kind.theme(), &geometry);
    draw_guides(&mut p, kind.theme(), &geometry);
    assert_eq!(p.depth(), 0);
    p.finish().ops
}

#[test]
fn background_starts_with_clear() {
    for kind in ThemeKind::ALL {
        let ops = record(kind, Canvas::default());
        assert_eq!(ops[0], DrawOp::Clear(kind.theme().background));
    }
}

#[test]
fn classic_draws_three_guide_rings_only() {
    let ops = record(ThemeKind::Classic, Canvas::default());
    assert_eq!(ops.len(), 4);
    let radii: Vec<f64> = ops[1..]
        .iter()
        .map(|op| {
            let DrawOp::Stroke { style, .. } = op else {
                panic!("guide rings must be stroke-only, got {op:?}");
            };
            assert_eq!(style.color, Rgba8::rgb(40, 40, 40));
            assert_eq!(style.width, 1.0);
            op.device_bounds().unwrap().width() / 2.0 - style.width
        })
        .collect();
    assert!((radii[0] - 272.0).abs() < 0.5);
    assert!((radii[1] - 192.0).abs() < 0.5);
    assert!((radii[2] - 112.0).abs() < 0.5);
}

#[test]
fn decoration_is_identical_across_passes() {
    for kind in ThemeKind::ALL {
        assert_eq!(
            record(kind, Canvas::default()),
            record(kind, Canvas::default())
        );
    }
}

#[test]
fn grass_density_follows_canvas_area() {
    let Decoration::Grass(style) = ThemeKind::Running.theme().decoration else {
        panic!("running theme must have grass");
    };
    let ops = record(ThemeKind::Running, Canvas::default());
    let blades = ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Stroke { style: s, .. } if s.width == style.width))
        .count();
    assert_eq!(blades, 400);
}

#[test]
fn daisies_stay_clear_of_the_orbits() {
    let Decoration::Daisies(style) = ThemeKind::Prancing.theme().decoration else {
        panic!("prancing theme must have daisies");
    };
    for canvas in [Canvas::default(), Canvas::new(1280, 720).unwrap()] {
        let g = FieldGeometry::new(canvas);
        let layout = daisy_layout(&style, &g);
        assert!(!layout.is_empty());
        assert!(layout.len() < style.attempts as usize);
        for (at, _, _) in layout {
            assert!((at - g.center).hypot() >= 1.1 * g.field_radius);
        }
    }
}

#[test]
fn daisy_candidates_do_not_shift_when_some_are_rejected() {
    let Decoration::Daisies(style) = ThemeKind::Prancing.theme().decoration else {
        panic!("prancing theme must have daisies");
    };
    let g = FieldGeometry::new(Canvas::default());
    let mut open = style;
    open.exclusion = 0.0;
    let all = daisy_layout(&open, &g);
    let kept = daisy_layout(&style, &g);
    assert_eq!(all.len(), style.attempts as usize);
    assert!(kept.iter().all(|d| all.contains(d)));
}

#[test]
fn prancing_has_no_guides() {
    let ops = record(ThemeKind::Prancing, Canvas::default());
    assert!(ops.iter().all(|op| !matches!(op, DrawOp::Stroke { .. })));
}
