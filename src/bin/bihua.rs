use std::path::{Path, PathBuf};

use anyhow::Context as _;
use bihua::{
    AnimatorOpts, Canvas, CpuSurface, Ease, ManualScheduler, PlaybackOpts,
    PlaybackSession, PngSequenceSink, RenderOpts, StrokeAnimator, StrokeDataset,
    draw_frame_plan, write_png,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bihua", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print stroke information for a character.
    Info(InfoArgs),
    /// Render a single animation instant as a PNG.
    Frame(FrameArgs),
    /// Render the whole animation as a numbered PNG sequence.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Stroke dataset, one JSON record per line.
    #[arg(long)]
    data: PathBuf,

    /// Character to look up.
    #[arg(long = "char")]
    character: char,
}

#[derive(Args, Debug)]
struct StyleArgs {
    /// Render options JSON (canvas, colors, stroke widths, baseline).
    #[arg(long)]
    style: Option<PathBuf>,

    /// Square canvas size in pixels; overrides the style file.
    #[arg(long)]
    size: Option<u32>,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    style: StyleArgs,

    /// Index of the stroke being traced (0-based; the stroke count shows everything traced).
    #[arg(long, default_value_t = 0)]
    stroke: usize,

    /// Traced fraction of the current stroke, 0.0 to 1.0.
    #[arg(long, default_value_t = 1.0)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    style: StyleArgs,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Frames per second (1 to 1000).
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=i64::from(bihua::MAX_FPS)))]
    fps: u32,

    /// Time to trace one stroke, in milliseconds.
    #[arg(long, default_value_t = 800)]
    stroke_ms: u64,

    /// Easing of the pen along each stroke (linear, in-quad, out-quad, in-out-quad, out-cubic,
    /// in-out-cubic).
    #[arg(long, default_value = "linear")]
    ease: Ease,

    /// Extra copies of the completed character appended at the end.
    #[arg(long, default_value_t = 0)]
    hold: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn load_dataset(path: &Path) -> anyhow::Result<StrokeDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("open stroke dataset '{}'", path.display()))?;
    let (ds, report) = StrokeDataset::load_with_report(std::io::BufReader::new(file))
        .with_context(|| format!("read stroke dataset '{}'", path.display()))?;
    if !report.skipped.is_empty() {
        eprintln!(
            "loaded {} characters, skipped {} corrupt lines",
            ds.len(),
            report.skipped.len()
        );
    }
    Ok(ds)
}

fn load_render_opts(args: &StyleArgs) -> anyhow::Result<RenderOpts> {
    let mut opts = match &args.style {
        Some(path) => RenderOpts::from_path(path)
            .with_context(|| format!("load style '{}'", path.display()))?,
        None => RenderOpts::default(),
    };
    if let Some(side) = args.size {
        opts.canvas = Canvas::square(side)?;
    }
    Ok(opts)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let ds = load_dataset(&args.source.data)?;
    let ch = args.source.character;
    let Some(entry) = ds.get(ch) else {
        println!("{ch}: no stroke data available");
        return Ok(());
    };

    println!("{ch}: {} strokes", entry.stroke_count());
    for (i, median) in entry.medians.iter().enumerate() {
        println!("  stroke {}: {} median points", i + 1, median.len());
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let ds = load_dataset(&args.source.data)?;
    let render = load_render_opts(&args.style)?;
    let ch = args.source.character;

    let anim = StrokeAnimator::for_character(
        &ds,
        ch,
        AnimatorOpts::default(),
        ManualScheduler::new(),
    )?;
    let plan = anim.frame_at(args.stroke, args.progress);
    if plan.is_unavailable() {
        anyhow::bail!("no stroke data available for '{ch}'");
    }

    let frame = draw_frame_plan(&plan, &render, &mut CpuSurface::new())?;
    ensure_parent(&args.out)?;
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let ds = load_dataset(&args.source.data)?;
    let render = load_render_opts(&args.style)?;
    let ch = args.source.character;
    if !ds.contains(ch) {
        anyhow::bail!("no stroke data available for '{ch}'");
    }

    let animator = AnimatorOpts {
        stroke_duration_ms: args.stroke_ms,
        ease: args.ease,
        ..AnimatorOpts::default()
    };
    let playback = PlaybackOpts {
        fps: args.fps,
        hold_frames: args.hold,
    };
    let mut session = PlaybackSession::for_character(&ds, ch, animator, render, playback)?;
    let mut sink = PngSequenceSink::new(&args.out_dir);
    let stats = session.render_all(&mut sink)?;

    eprintln!(
        "wrote {} frames ({} strokes) to {}",
        stats.frames,
        stats.strokes,
        args.out_dir.display()
    );
    Ok(())
}
