use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

use dogfield::ClockSource as _;

#[derive(Parser, Debug)]
#[command(name = "dogfield", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a run of frames to a PNG sequence directory or an MP4 (requires `ffmpeg`).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct SharedArgs {
    /// Config JSON. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme.
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Extra directory of label fonts.
    #[arg(long)]
    font_dir: Option<PathBuf>,

    /// Log at DEBUG instead of INFO.
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    shared: SharedArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Clock reading to draw (`HH:MM` or `HH:MM:SS`). Defaults to the local time.
    #[arg(long)]
    time: Option<dogfield::ClockReading>,

    /// Animation frame counter.
    #[arg(long, default_value_t = 0)]
    frame_counter: u64,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    shared: SharedArgs,

    /// Output directory for `frame_NNNNN.png` files, or a `.mp4` path.
    #[arg(long)]
    out: PathBuf,

    /// Number of frames to render.
    #[arg(long)]
    frames: u64,

    /// Start reading for simulated time. Without it, frames show the local wall clock.
    #[arg(long)]
    start: Option<dogfield::ClockReading>,

    /// Pace frames in real time instead of rendering as fast as possible.
    #[arg(long, default_value_t = false)]
    live: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeChoice {
    Classic,
    Running,
    Prancing,
}

impl From<ThemeChoice> for dogfield::ThemeKind {
    fn from(c: ThemeChoice) -> Self {
        match c {
            ThemeChoice::Classic => dogfield::ThemeKind::Classic,
            ThemeChoice::Running => dogfield::ThemeKind::Running,
            ThemeChoice::Prancing => dogfield::ThemeKind::Prancing,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(shared: &SharedArgs) -> anyhow::Result<dogfield::ClockConfig> {
    let mut cfg = match &shared.config {
        Some(path) => dogfield::ClockConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => dogfield::ClockConfig::default(),
    };
    if let Some(theme) = shared.theme {
        cfg.theme = theme.into();
    }
    if let Some(w) = shared.width {
        cfg.canvas.width = w;
    }
    if let Some(h) = shared.height {
        cfg.canvas.height = h;
    }
    if let Some(fps) = shared.fps {
        cfg.fps = dogfield::Fps::new(fps, 1)?;
    }
    if let Some(dir) = &shared.font_dir {
        cfg.font_dir = Some(dir.clone());
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    init_tracing(args.shared.verbose);
    let cfg = resolve_config(&args.shared)?;

    let mut session = dogfield::RenderSession::from_config(&cfg)?
        .with_frame_counter(dogfield::FrameIndex(args.frame_counter));
    let mut backend = dogfield::create_backend(
        dogfield::BackendKind::Cpu,
        &dogfield::RenderSettings {
            font_dir: cfg.font_dir.clone(),
        },
    )?;

    let reading = args.time.unwrap_or_else(|| dogfield::SystemClock.now());
    let out = session.render_frame(reading);
    let frame = backend
        .render_list(&out.list)
        .with_context(|| format!("render {reading}"))?;

    dogfield::ensure_parent_dir(&args.out)?;
    dogfield::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    init_tracing(args.shared.verbose);
    let cfg = resolve_config(&args.shared)?;

    let mut clock: Box<dyn dogfield::ClockSource> = match args.start {
        Some(start) => Box::new(dogfield::SimulatedClock::new(start, cfg.fps)),
        None => Box::new(dogfield::SystemClock),
    };

    let is_mp4 = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("mp4"));
    let mut sink: Box<dyn dogfield::FrameSink> = if is_mp4 {
        let bg = cfg.theme.theme().background;
        Box::new(dogfield::FfmpegSink::new(dogfield::FfmpegSinkOpts {
            out_path: args.out.clone(),
            overwrite: true,
            bg_rgba: [bg.r, bg.g, bg.b, 255],
        }))
    } else {
        Box::new(dogfield::PngSequenceSink::new(args.out.clone()))
    };

    let mut player = dogfield::Player::from_config(&cfg)?;
    let opts = dogfield::PlayerOpts {
        frames: args.frames,
        pacing: if args.live {
            dogfield::Pacing::RealTime
        } else {
            dogfield::Pacing::Offline
        },
    };
    let stats = player.run(clock.as_mut(), opts, sink.as_mut())?;
    tracing::info!(
        frames = stats.frames_rendered,
        rollovers = stats.minute_rollovers,
        "render finished"
    );

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
