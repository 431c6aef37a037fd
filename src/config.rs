use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{DogfieldError, DogfieldResult};
use crate::theme::ThemeKind;

/// Run configuration, loadable from JSON. Every field has a default.
///
/// ```json
/// { "canvas": { "width": 800, "height": 800 }, "theme": "running", "fps": { "num": 30, "den": 1 } }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    /// Output canvas.
    pub canvas: Canvas,
    /// Visual theme.
    pub theme: ThemeKind,
    /// Nominal frame rate of the draw loop.
    pub fps: Fps,
    /// Extra directory of `.ttf`/`.otf` files for label text, searched before system fonts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_dir: Option<PathBuf>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            theme: ThemeKind::default(),
            fps: Fps::default(),
            font_dir: None,
        }
    }
}

impl ClockConfig {
    /// Read and validate a JSON config file.
    pub fn from_path(path: &Path) -> DogfieldResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: ClockConfig = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| DogfieldError::serde(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON config string.
    pub fn from_json_str(s: &str) -> DogfieldResult<Self> {
        let cfg: ClockConfig =
            serde_json::from_str(s).map_err(|e| DogfieldError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check canvas and frame rate.
    pub fn validate(&self) -> DogfieldResult<()> {
        self.canvas.validate()?;
        Fps::new(self.fps.num, self.fps.den)?;
        Ok(())
    }
}
