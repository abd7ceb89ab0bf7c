use std::{
    fs::File,
    io::{BufReader, Read as _, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use ringweave::{
    FrameSnapshot, MatchupAnimator, SpectrumReport, StreamConfig, stream, suggested_interval_ms,
};

#[derive(Parser, Debug)]
#[command(name = "ringweave", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the arc animation over a matchup sequence and emit frame snapshots.
    Animate(AnimateArgs),
    /// Emit the stride/participation spectrum report for a matchup sequence.
    Spectrum(SpectrumArgs),
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Input matchup sequence JSON (`[[0,1],[0,2],...]`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Total number of participants in the network.
    #[arg(long)]
    network_size: usize,

    /// Number of participants per matchup.
    #[arg(long)]
    match_size: usize,

    /// Output JSON path (stdout if omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SpectrumArgs {
    /// Input matchup sequence JSON (`[[0,1],[0,2],...]`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Total number of participants in the network.
    #[arg(long)]
    network_size: usize,

    /// Number of participants per matchup.
    #[arg(long)]
    match_size: usize,

    /// Output JSON path (stdout if omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Animation payload handed to rendering sinks.
#[derive(Debug, serde::Serialize)]
struct AnimationOutput {
    interval_ms: u64,
    frames: Vec<FrameSnapshot>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Animate(args) => cmd_animate(args),
        Command::Spectrum(args) => cmd_spectrum(args),
    }
}

fn read_matchups_json(path: &Path) -> anyhow::Result<Vec<ringweave::Matchup>> {
    let f = File::open(path).with_context(|| format!("open matchups '{}'", path.display()))?;
    let mut json = String::new();
    BufReader::new(f)
        .read_to_string(&mut json)
        .with_context(|| format!("read matchups '{}'", path.display()))?;
    Ok(stream::matchups_from_json(&json)?)
}

fn write_json(out: Option<&Path>, json: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            let mut f =
                File::create(path).with_context(|| format!("create '{}'", path.display()))?;
            f.write_all(json.as_bytes())
                .with_context(|| format!("write '{}'", path.display()))?;
            f.write_all(b"\n")?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let config = StreamConfig::new(args.network_size, args.match_size)?;
    let matchups = read_matchups_json(&args.in_path)?;

    let animator = MatchupAnimator::new(config, matchups.into_iter());
    let output = AnimationOutput {
        interval_ms: suggested_interval_ms(&config),
        frames: animator.run_to_halt()?,
    };

    let json = serde_json::to_string_pretty(&output).context("serialize animation output")?;
    write_json(args.out.as_deref(), &json)
}

fn cmd_spectrum(args: SpectrumArgs) -> anyhow::Result<()> {
    let config = StreamConfig::new(args.network_size, args.match_size)?;
    let matchups = read_matchups_json(&args.in_path)?;
    let matchups = stream::collect_validated(&config, matchups)?;

    let report = SpectrumReport::build(&config, matchups)?;
    let json = serde_json::to_string_pretty(&report).context("serialize spectrum report")?;
    write_json(args.out.as_deref(), &json)
}
