use std::path::PathBuf;

use crate::draw::list::DisplayList;
use crate::foundation::error::{DogfieldError, DogfieldResult};

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**. The `premultiplied` flag makes this explicit at API
/// boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy of `data` with straight (unpremultiplied) alpha, suitable for PNG.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Turns a [`DisplayList`] into pixels.
pub trait RenderBackend {
    /// Rasterize every op of `list`, in order.
    fn render_list(&mut self, list: &DisplayList) -> DogfieldResult<FrameRGBA>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    #[default]
    Cpu,
}

/// Backend-agnostic settings.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// Extra font directory for label text, loaded ahead of system fonts.
    pub font_dir: Option<PathBuf>,
}

/// Create a rendering backend implementation.
pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> DogfieldResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => {
            if let Some(dir) = &settings.font_dir
                && !dir.is_dir()
            {
                return Err(DogfieldError::validation(format!(
                    "font_dir '{}' is not a directory",
                    dir.display()
                )));
            }
            Ok(Box::new(crate::render::cpu::CpuBackend::new(
                settings.clone(),
            )))
        }
    }
}
