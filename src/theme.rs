//! The closed set of visual themes.
//!
//! A [`Theme`] is plain data: palette, background motif and gait parameters. One renderer
//! ([`crate::scene::compose`]) interprets all three.

use std::f64::consts::FRAC_PI_2;

use crate::clock::geometry::FigureKind;
use crate::foundation::core::Rgba8;

/// Theme selector, as it appears in config files.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    /// Glowing figures on a dark field with numeral labels.
    #[default]
    Classic,
    /// Running dogs on a grass field.
    Running,
    /// Prancing dogs in a daisy meadow.
    Prancing,
}

impl ThemeKind {
    /// All theme kinds.
    pub const ALL: [ThemeKind; 3] = [ThemeKind::Classic, ThemeKind::Running, ThemeKind::Prancing];

    /// The immutable theme for this kind.
    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeKind::Classic => &CLASSIC,
            ThemeKind::Running => &RUNNING,
            ThemeKind::Prancing => &PRANCING,
        }
    }
}

/// Stroke used for orbit guide rings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideStyle {
    /// Ring color.
    pub color: Rgba8,
    /// Ring stroke width in pixels.
    pub width: f64,
}

/// Scattered grass blades.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrassStyle {
    /// Generator seed, reset before every pass.
    pub seed: u64,
    /// Canvas area (px²) per blade.
    pub area_per_blade: f64,
    /// Blade length range.
    pub length: (f64, f64),
    /// Maximum sideways lean of the blade tip.
    pub max_lean: f64,
    /// Green channel range.
    pub green: (u8, u8),
    /// Blade stroke width.
    pub width: f64,
}

/// Scattered daisies kept clear of the orbits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DaisyStyle {
    /// Generator seed, reset before every pass.
    pub seed: u64,
    /// Placement attempts per pass.
    pub attempts: u32,
    /// No daisy within `exclusion * field_radius` of the center.
    pub exclusion: f64,
    /// Petals per flower.
    pub petals: u8,
    /// Petal color.
    pub petal: Rgba8,
    /// Flower center color.
    pub heart: Rgba8,
    /// Flower size multiplier range.
    pub scale: (f64, f64),
}

/// Background motif.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decoration {
    /// Plain background.
    None,
    /// Grass blades.
    Grass(GrassStyle),
    /// Daisies.
    Daisies(DaisyStyle),
}

/// Leg swing and tail wag driven by the frame counter. Rates are radians per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunningGait {
    /// Leg offset amplitude along the body axis, px.
    pub leg_amplitude: f64,
    /// Leg cycle rate.
    pub leg_rate: f64,
    /// Tail wag amplitude, radians.
    pub tail_amplitude: f64,
    /// Tail wag rate.
    pub tail_rate: f64,
}

/// Whole-figure bounce plus front/back leg lift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrancingGait {
    /// Bounce height, px.
    pub bounce_amplitude: f64,
    /// Bounce rate.
    pub bounce_rate: f64,
    /// Leg lift, px.
    pub lift_amplitude: f64,
    /// Leg lift rate.
    pub lift_rate: f64,
    /// Phase lag of the back pair behind the front pair, radians.
    pub pair_phase: f64,
}

/// Animation style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Fixed posture.
    Still,
    /// Running cycle.
    Running(RunningGait),
    /// Prancing bounce.
    Prancing(PrancingGait),
}

/// Everything that differs between themes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Which theme this is.
    pub kind: ThemeKind,
    /// Frame clear color.
    pub background: Rgba8,
    /// Figure colors indexed by [`FigureKind::index`].
    pub palette: [Rgba8; 3],
    /// Body and head outline.
    pub outline: Option<Rgba8>,
    /// Orbit guide rings, if drawn.
    pub guides: Option<GuideStyle>,
    /// Background motif.
    pub decoration: Decoration,
    /// Gait.
    pub motion: Motion,
    /// Glow blur per figure, if the figures glow.
    pub glow: Option<[f64; 3]>,
    /// Draw numeral labels above the figures.
    pub labels: bool,
}

impl Theme {
    /// Figure color.
    pub fn color(&self, kind: FigureKind) -> Rgba8 {
        self.palette[kind.index()]
    }

    /// Glow blur for a figure, if any.
    pub fn glow_blur(&self, kind: FigureKind) -> Option<f64> {
        self.glow.map(|g| g[kind.index()])
    }
}

/// Red, cyan and white figures glowing on a near-black field.
pub const CLASSIC: Theme = Theme {
    kind: ThemeKind::Classic,
    background: Rgba8::rgb(15, 15, 15),
    palette: [
        Rgba8::rgb(255, 50, 50),
        Rgba8::rgb(50, 255, 255),
        Rgba8::rgb(255, 255, 255),
    ],
    outline: Some(Rgba8::rgba(255, 255, 255, 100)),
    guides: Some(GuideStyle {
        color: Rgba8::rgb(40, 40, 40),
        width: 1.0,
    }),
    decoration: Decoration::None,
    motion: Motion::Still,
    glow: Some([20.0; 3]),
    labels: true,
};

/// Brown, golden and cream dogs running over grass along worn tracks.
pub const RUNNING: Theme = Theme {
    kind: ThemeKind::Running,
    background: Rgba8::rgb(46, 82, 38),
    palette: [
        Rgba8::rgb(139, 90, 43),
        Rgba8::rgb(218, 165, 32),
        Rgba8::rgb(245, 222, 179),
    ],
    outline: Some(Rgba8::rgba(30, 20, 10, 160)),
    guides: Some(GuideStyle {
        color: Rgba8::rgba(120, 98, 60, 90),
        width: 6.0,
    }),
    decoration: Decoration::Grass(GrassStyle {
        seed: 42,
        area_per_blade: 1600.0,
        length: (6.0, 14.0),
        max_lean: 3.0,
        green: (95, 150),
        width: 1.5,
    }),
    motion: Motion::Running(RunningGait {
        leg_amplitude: 3.0,
        leg_rate: 0.3,
        tail_amplitude: 0.5,
        tail_rate: 0.12,
    }),
    glow: None,
    labels: false,
};

/// Pink, sky-blue and lemon dogs prancing through daisies.
pub const PRANCING: Theme = Theme {
    kind: ThemeKind::Prancing,
    background: Rgba8::rgb(118, 176, 92),
    palette: [
        Rgba8::rgb(255, 160, 180),
        Rgba8::rgb(150, 200, 255),
        Rgba8::rgb(255, 240, 140),
    ],
    outline: Some(Rgba8::rgba(60, 60, 60, 140)),
    guides: None,
    decoration: Decoration::Daisies(DaisyStyle {
        seed: 7,
        attempts: 90,
        exclusion: 1.1,
        petals: 8,
        petal: Rgba8::rgb(250, 250, 245),
        heart: Rgba8::rgb(240, 190, 40),
        scale: (0.8, 1.4),
    }),
    motion: Motion::Prancing(PrancingGait {
        bounce_amplitude: 6.0,
        bounce_rate: 0.1,
        lift_amplitude: 4.0,
        lift_rate: 0.2,
        pair_phase: FRAC_PI_2,
    }),
    glow: None,
    labels: false,
};
