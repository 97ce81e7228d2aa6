use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "kinetype", version)]
struct Cli {
    /// Log to stderr; repeat for more detail.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single frame and print its scene as JSON.
    Frame(FrameArgs),
    /// Evaluate a frame range into one JSON file per frame.
    Sequence(SequenceArgs),
    /// Print a content fingerprint for every frame of a range.
    Fingerprint(FingerprintArgs),
    /// Check a composition and report every out-of-range field.
    Validate(ValidateArgs),
    /// Print a default composition.
    Defaults(DefaultsArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RangeArgs {
    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); the composition duration when omitted.
    #[arg(long)]
    end: Option<u64>,

    /// Evaluate frames on a rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per parallel chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory receiving `frame_NNNNNN.json` files.
    #[arg(long)]
    out_dir: PathBuf,

    #[command(flatten)]
    range: RangeArgs,
}

#[derive(Parser, Debug)]
struct FingerprintArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    range: RangeArgs,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct DefaultsArgs {
    /// Scene kind.
    #[arg(long, value_enum, default_value_t = SceneKind::TextAnimation)]
    kind: SceneKind,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SceneKind {
    TextAnimation,
    GlyphGrid,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Defaults(args) => cmd_defaults(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_comp_json(path: &Path) -> anyhow::Result<kinetype::Composition> {
    let f = File::open(path).with_context(|| format!("open composition '{}'", path.display()))?;
    let r = BufReader::new(f);
    let comp: kinetype::Composition =
        serde_json::from_reader(r).with_context(|| "parse composition JSON")?;
    Ok(comp)
}

fn prepare(path: &Path) -> anyhow::Result<kinetype::PreparedComposition> {
    let comp = read_comp_json(path)?;
    Ok(kinetype::PreparedComposition::prepare(&comp)?)
}

fn resolve_range(
    prepared: &kinetype::PreparedComposition,
    args: &RangeArgs,
) -> anyhow::Result<(kinetype::FrameRange, kinetype::Threading)> {
    let end = args.end.unwrap_or(prepared.duration.0);
    let range = kinetype::FrameRange::new(
        kinetype::FrameIndex(args.start),
        kinetype::FrameIndex(end),
    )?;
    let threading = kinetype::Threading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    Ok((range, threading))
}

fn write_json<T: serde::Serialize>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, value)
                .with_context(|| format!("write '{}'", path.display()))?;
            w.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, value).context("write stdout")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let prepared = prepare(&args.in_path)?;
    let scene = kinetype::Evaluator::eval_frame(&prepared, kinetype::FrameIndex(args.frame));
    write_json(&scene, args.out.as_deref())?;
    if let Some(out) = &args.out {
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let prepared = prepare(&args.in_path)?;
    let (range, threading) = resolve_range(&prepared, &args.range)?;
    let (scenes, stats) = kinetype::eval_frames_with_stats(&prepared, range, &threading)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for scene in &scenes {
        let path = args.out_dir.join(format!("frame_{:06}.json", scene.frame.0));
        write_json(scene, Some(&path))?;
    }

    eprintln!(
        "wrote {} frames to {} ({} static)",
        stats.frames_total,
        args.out_dir.display(),
        stats.frames_static
    );
    Ok(())
}

fn cmd_fingerprint(args: FingerprintArgs) -> anyhow::Result<()> {
    let prepared = prepare(&args.in_path)?;
    let (range, threading) = resolve_range(&prepared, &args.range)?;
    let prints = kinetype::fingerprint_frames(&prepared, range, &threading)?;

    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    for (f, fp) in (range.start.0..range.end.0).zip(prints) {
        writeln!(w, "{f} {fp}")?;
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let comp = read_comp_json(&args.in_path)?;
    comp.validate()?;
    println!("ok");
    Ok(())
}

fn cmd_defaults(args: DefaultsArgs) -> anyhow::Result<()> {
    let comp = match args.kind {
        SceneKind::TextAnimation => {
            kinetype::Composition::text_animation(kinetype::TextAnimationConfig::default())
        }
        SceneKind::GlyphGrid => {
            kinetype::Composition::glyph_grid(kinetype::GlyphGridConfig::default())
        }
    };
    write_json(&comp, None)
}
