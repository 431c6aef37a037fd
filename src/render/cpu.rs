use crate::draw::list::{DisplayList, DrawOp};
use crate::foundation::core::{Canvas, Rect};
use crate::foundation::error::{DogfieldError, DogfieldResult};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::render::blur::{blur_rgba8_premul, shadow_radius, shadow_sigma, tinted_coverage};
use crate::render::composite::{Tile, fill_solid, over_at, over_in_place};
use crate::render::text::{TextRasterizer, TextRun};

/// CPU raster backend powered by `vello_cpu`.
///
/// Consecutive fills and strokes are batched into one `vello_cpu` render. Clears, text and glow
/// groups break the batch and are composited directly onto the frame, preserving list order.
pub struct CpuBackend {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
    text: Option<TextRasterizer>,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
            text: None,
        }
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> DogfieldResult<R>,
    ) -> DogfieldResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn text_rasterizer(&mut self) -> &TextRasterizer {
        self.text.get_or_insert_with(|| {
            let r = TextRasterizer::new(self.settings.font_dir.as_deref());
            if r.face_count() == 0 {
                tracing::warn!("no fonts available; label text will not be drawn");
            }
            r
        })
    }

    fn draw_ops(&mut self, ops: &[DrawOp], canvas: Canvas, dst: &mut [u8]) -> DogfieldResult<()> {
        let mut batch: Vec<&DrawOp> = Vec::new();
        for op in ops {
            match op {
                DrawOp::Fill { .. } | DrawOp::Stroke { .. } => batch.push(op),
                DrawOp::Clear(color) => {
                    self.flush_batch(&mut batch, canvas, dst)?;
                    fill_solid(dst, color.premultiplied().to_array());
                }
                DrawOp::Text {
                    text,
                    transform,
                    anchor,
                    size,
                    color,
                } => {
                    self.flush_batch(&mut batch, canvas, dst)?;
                    let Some(bounds) = op.device_bounds() else {
                        continue;
                    };
                    let run = TextRun {
                        text,
                        transform: *transform,
                        anchor: *anchor,
                        size: *size,
                        color: *color,
                    };
                    let tile =
                        self.text_rasterizer()
                            .rasterize(run, bounds, canvas.width, canvas.height)?;
                    if let Some(t) = tile {
                        let tile = Tile {
                            x: t.x,
                            y: t.y,
                            width: t.width,
                            height: t.height,
                            data: &t.data,
                        };
                        over_at(dst, canvas.width, canvas.height, &tile)?;
                    }
                }
                DrawOp::Glow { blur, color, ops } => {
                    self.flush_batch(&mut batch, canvas, dst)?;
                    let mut layer = vec![0u8; canvas.rgba_len()];
                    self.draw_ops(ops, canvas, &mut layer)?;
                    if let Some(window) = shadow_window(op.device_bounds(), canvas) {
                        let (x, y, width, height) = window;
                        let coverage = tinted_coverage(&layer, canvas.width, window, *color);
                        let shadow = blur_rgba8_premul(
                            &coverage,
                            width,
                            height,
                            shadow_radius(*blur),
                            shadow_sigma(*blur),
                        )?;
                        let tile = Tile {
                            x: x as i32,
                            y: y as i32,
                            width,
                            height,
                            data: &shadow,
                        };
                        over_at(dst, canvas.width, canvas.height, &tile)?;
                    }
                    over_in_place(dst, &layer)?;
                }
            }
        }
        self.flush_batch(&mut batch, canvas, dst)
    }

    fn flush_batch(
        &mut self,
        batch: &mut Vec<&DrawOp>,
        canvas: Canvas,
        dst: &mut [u8],
    ) -> DogfieldResult<()> {
        if batch.is_empty() {
            return Ok(());
        }
        let (w, h) = canvas_u16(canvas)?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.with_ctx_mut(w, h, |ctx| {
            for op in batch.drain(..) {
                draw_vector_op(ctx, op);
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;
        over_in_place(dst, pixmap.data_as_u8_slice())
    }
}

impl RenderBackend for CpuBackend {
    fn render_list(&mut self, list: &DisplayList) -> DogfieldResult<FrameRGBA> {
        list.canvas.validate()?;
        let mut data = vec![0u8; list.canvas.rgba_len()];
        self.draw_ops(&list.ops, list.canvas, &mut data)?;
        tracing::trace!(ops = list.op_count(), "rasterized display list");
        Ok(FrameRGBA {
            width: list.canvas.width,
            height: list.canvas.height,
            data,
            premultiplied: true,
        })
    }
}

fn canvas_u16(canvas: Canvas) -> DogfieldResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| DogfieldError::render("canvas width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| DogfieldError::render("canvas height exceeds u16"))?;
    Ok((w, h))
}

/// Integer window `(x, y, w, h)` on the canvas that a glow's shadow can touch.
fn shadow_window(bounds: Option<Rect>, canvas: Canvas) -> Option<(u32, u32, u32, u32)> {
    let full = Rect::new(0.0, 0.0, f64::from(canvas.width), f64::from(canvas.height));
    let r = bounds.unwrap_or(full).intersect(full).expand();
    if r.area() <= 0.0 {
        return None;
    }
    Some((
        r.x0 as u32,
        r.y0 as u32,
        r.width() as u32,
        r.height() as u32,
    ))
}

fn draw_vector_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp) {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    match op {
        DrawOp::Fill {
            path,
            transform,
            color,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, color.a,
            ));
            ctx.fill_path(&bezpath_to_cpu(path));
        }
        DrawOp::Stroke {
            path,
            transform,
            style,
        } => {
            let c = style.color;
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
            ctx.set_stroke(
                vello_cpu::kurbo::Stroke::new(style.width).with_caps(vello_cpu::kurbo::Cap::Round),
            );
            ctx.stroke_path(&bezpath_to_cpu(path));
        }
        DrawOp::Clear(_) | DrawOp::Text { .. } | DrawOp::Glow { .. } => {}
    }
}

fn affine_to_cpu(a: crate::foundation::core::Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: crate::foundation::core::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &crate::foundation::core::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
