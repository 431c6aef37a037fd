use std::path::Path;
use std::sync::Arc;

use crate::foundation::core::{Affine, Point, Rect, Rgba8};
use crate::foundation::error::{DogfieldError, DogfieldResult};

/// One line of label text to rasterize.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TextRun<'a> {
    pub(crate) text: &'a str,
    pub(crate) transform: Affine,
    pub(crate) anchor: Point,
    pub(crate) size: f64,
    pub(crate) color: Rgba8,
}

/// Premultiplied pixels for a run, positioned in canvas pixels.
#[derive(Debug)]
pub(crate) struct TextTile {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<u8>,
}

/// Label rasterizer backed by `usvg` text layout and `resvg`.
pub(crate) struct TextRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl TextRasterizer {
    pub(crate) fn new(font_dir: Option<&Path>) -> Self {
        let mut db = usvg::fontdb::Database::new();
        if let Some(dir) = font_dir {
            load_fonts_from_dir(&mut db, dir);
        }
        db.load_system_fonts();

        // Make the generic family resolve to something when the platform default is missing.
        if let Some(name) = fallback_sans_family(&db) {
            db.set_sans_serif_family(name);
        }

        tracing::debug!(faces = db.len(), "label font database loaded");
        Self {
            fontdb: Arc::new(db),
        }
    }

    pub(crate) fn face_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Rasterize `run` clipped to `bounds` (canvas pixels). `None` when nothing is visible.
    pub(crate) fn rasterize(
        &self,
        run: TextRun<'_>,
        bounds: Rect,
        canvas_width: u32,
        canvas_height: u32,
    ) -> DogfieldResult<Option<TextTile>> {
        if run.text.trim().is_empty() || run.color.a == 0 || run.size <= 0.0 {
            return Ok(None);
        }
        let canvas = Rect::new(0.0, 0.0, f64::from(canvas_width), f64::from(canvas_height));
        let clip = bounds.intersect(canvas).expand();
        if clip.area() <= 0.0 {
            return Ok(None);
        }
        let (x, y) = (clip.x0 as i32, clip.y0 as i32);
        let (width, height) = (clip.width() as u32, clip.height() as u32);

        let svg = label_svg(run, x, y, width, height);
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts)
            .map_err(|e| DogfieldError::render(format!("label svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| DogfieldError::render("failed to allocate label pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        Ok(Some(TextTile {
            x,
            y,
            width,
            height,
            data: pixmap.take(),
        }))
    }
}

/// SVG document whose viewport is the `width`×`height` window of the canvas at `(x, y)`.
fn label_svg(run: TextRun<'_>, x: i32, y: i32, width: u32, height: u32) -> String {
    let [a, b, c, d, e, f] = run.transform.as_coeffs();
    let Rgba8 {
        r,
        g,
        b: blue,
        a: alpha,
    } = run.color;
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" "#,
            r#"viewBox="{x} {y} {w} {h}">"#,
            r#"<text transform="matrix({a} {b} {c} {d} {e} {f})" x="{ax}" y="{ay}" "#,
            r#"font-family="sans-serif" font-size="{size}" text-anchor="middle" "#,
            r#"dominant-baseline="central" fill="rgb({r},{g},{blue})" fill-opacity="{op}">"#,
            "{text}</text></svg>"
        ),
        w = width,
        h = height,
        x = x,
        y = y,
        a = a,
        b = b,
        c = c,
        d = d,
        e = e,
        f = f,
        ax = run.anchor.x,
        ay = run.anchor.y,
        size = run.size,
        r = r,
        g = g,
        blue = blue,
        op = f64::from(alpha) / 255.0,
        text = escape_xml(run.text),
    )
}

/// First loaded family, when the generic sans-serif query finds nothing.
fn fallback_sans_family(db: &usvg::fontdb::Database) -> Option<String> {
    let query = usvg::fontdb::Query {
        families: &[usvg::fontdb::Family::SansSerif],
        ..Default::default()
    };
    if db.query(&query).is_some() {
        return None;
    }
    db.faces()
        .find_map(|f| f.families.first().map(|(name, _)| name.clone()))
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "font directory is not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "skipping font file");
        }
    }
}
