use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotreel::FrameLoader as _;

#[derive(Parser, Debug)]
#[command(name = "dotreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play every frame image in a directory as a Braille animation.
    Play(PlayArgs),
    /// Encode a single image as Braille text and print it once.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Directory holding the frame images, played in lexicographic order.
    dir: PathBuf,

    /// Target frame rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Working resolution width in pixels.
    #[arg(long, default_value_t = 160)]
    width: u32,

    /// Working resolution height in pixels.
    #[arg(long, default_value_t = 120)]
    height: u32,

    /// Luma cutoff for binarization (strictly brighter pixels are lit).
    #[arg(long, default_value_t = dotreel::load::DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Load playback options from a JSON file instead of the flags above.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log per-frame diagnostics (frame path, pacing accumulator) to stderr.
    #[arg(long)]
    debug: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input image.
    image: PathBuf,

    /// Working resolution width in pixels.
    #[arg(long, default_value_t = 160)]
    width: u32,

    /// Working resolution height in pixels.
    #[arg(long, default_value_t = 120)]
    height: u32,

    /// Luma cutoff for binarization (strictly brighter pixels are lit).
    #[arg(long, default_value_t = dotreel::load::DEFAULT_THRESHOLD)]
    threshold: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let options = resolve_options(&args)?;
    if options.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let sources = dotreel::discover_frames(&args.dir)?;

    let mut loader = dotreel::ImageLoader::new(options.resolution, options.threshold);
    let mut sink = dotreel::AnsiTerminal::stdout();
    let clock = dotreel::MonotonicClock::new();

    let mut log_frame = |report: &dotreel::FrameReport<'_>| {
        tracing::debug!(
            frame = report.index.0,
            source = %report.source.display(),
            accumulator_secs = report.accumulator_secs,
            "frame emitted"
        );
    };
    let observer: Option<dotreel::FrameObserver<'_>> = if options.debug {
        Some(&mut log_frame)
    } else {
        None
    };

    let stats = dotreel::play_frames_observed(
        &sources,
        &options,
        &mut loader,
        &mut sink,
        &clock,
        observer,
    )?;

    eprintln!("played {} frames", stats.frames_emitted);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let resolution = dotreel::Resolution::new(args.width, args.height)?;
    let mut loader = dotreel::ImageLoader::new(resolution, args.threshold);
    let grid = loader.load(&args.image)?;
    print!("{}", dotreel::encode_frame(&grid));
    Ok(())
}

fn resolve_options(args: &PlayArgs) -> anyhow::Result<dotreel::PlaybackOptions> {
    let mut options = match &args.config {
        Some(path) => dotreel::PlaybackOptions::from_path(path)?,
        None => dotreel::PlaybackOptions {
            fps: dotreel::Fps::new(args.fps, 1)?,
            resolution: dotreel::Resolution::new(args.width, args.height)?,
            threshold: args.threshold,
            ..dotreel::PlaybackOptions::default()
        },
    };
    options.debug |= args.debug;
    Ok(options)
}
