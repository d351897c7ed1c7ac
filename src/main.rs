//! runelink CLI entry point.
//!
//! Exit codes: 0 success, 1 error (unreadable or malformed input), 2 the
//! solution is invalid or a batch case did not pass.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use regex::Regex;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use runelink::batch::{BatchReport, compare_all};
use runelink::cases::CaseSource;
use runelink::config::RenderConfig;
use runelink::engine::build_trace;
use runelink::level::{encode_level, level_filename};
use runelink::parsers::{parse_puzzle, parse_solution};
use runelink::renderers::{GridRenderer, Renderer};
use runelink::syntax::types::{Cell, RuneId};
use runelink::{CheckReport, check_solution};

/// Validate, score and trace routes for grid rune-connection puzzles.
#[derive(Parser, Debug)]
#[command(name = "runelink", version = env!("RUNELINK_VERSION"))]
struct Cli {
    /// Log debug output to stderr (otherwise RUST_LOG, default warn)
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a solution and print its metrics
    Check(CheckArgs),
    /// Render one animation frame (or all of them)
    Frame(FrameArgs),
    /// Judge a directory of candidate outputs against reference outputs
    Batch(BatchArgs),
    /// Encode a rune layout as puzzle text
    Level(LevelArgs),
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Puzzle file
    puzzle: PathBuf,

    /// Solution file (reads from stdin if not provided)
    solution: Option<PathBuf>,

    /// Errors to list; 0 lists all
    #[arg(long = "max-errors", default_value = "5")]
    max_errors: usize,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    puzzle: PathBuf,
    solution: PathBuf,

    /// Step to show (default: the last one)
    #[arg(short = 's', long = "step")]
    step: Option<usize>,

    /// Print every frame from 0 to the last
    #[arg(long, conflicts_with = "step")]
    all: bool,

    /// Use plain ASCII instead of Unicode arrows and borders
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Draw row and column indices
    #[arg(short = 'c', long = "coords")]
    coords: bool,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Directory of puzzle inputs
    #[arg(long)]
    inputs: PathBuf,

    /// Directory of reference outputs
    #[arg(long)]
    outputs: PathBuf,

    /// Directory of candidate outputs to judge
    #[arg(long)]
    candidates: PathBuf,

    /// Only run cases whose file name matches this regex
    #[arg(long)]
    filter: Option<Regex>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct LevelArgs {
    #[arg(long)]
    rows: usize,

    #[arg(long)]
    cols: usize,

    /// Rune endpoint as ID:POS; give each id twice
    #[arg(long = "rune", value_name = "ID:POS", value_parser = parse_rune_arg)]
    runes: Vec<(RuneId, Cell)>,

    /// Write the level to this file (".txt" is appended when missing)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn parse_rune_arg(s: &str) -> Result<(RuneId, Cell), String> {
    let (id, pos) = s
        .split_once(':')
        .ok_or_else(|| format!("expected ID:POS, got '{}'", s))?;
    let id = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid rune id '{}'", id))?;
    let pos = pos
        .trim()
        .parse()
        .map_err(|_| format!("invalid position '{}'", pos))?;
    Ok((id, pos))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Check(args) => run_check(args),
        Command::Frame(args) => run_frame(args),
        Command::Batch(args) => run_batch(args),
        Command::Level(args) => run_level(args),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("runelink=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

// ─── I/O helpers ─────────────────────────────────────────────────────────────

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {}", path.display(), e))
}

fn read_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("cannot read stdin: {}", e))?;
    Ok(buf)
}

fn emit(text: &str) -> Result<(), String> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| format!("cannot write stdout: {}", e))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map(|s| s + "\n")
        .map_err(|e| format!("cannot encode JSON: {}", e))
}

// ─── Subcommands ─────────────────────────────────────────────────────────────

fn run_check(args: CheckArgs) -> Result<i32, String> {
    let puzzle = read_file(&args.puzzle)?;
    let solution = match args.solution {
        Some(ref path) => read_file(path)?,
        None => read_stdin()?,
    };

    let report = check_solution(&puzzle, &solution).map_err(|e| e.to_string())?;
    debug!(valid = report.valid, errors = report.errors.len(), "checked solution");

    if args.json {
        emit(&to_json(&report)?)?;
    } else {
        emit(&format_check(&report, args.max_errors))?;
    }
    Ok(if report.valid { 0 } else { 2 })
}

fn format_check(report: &CheckReport, max_errors: usize) -> String {
    let mut out = String::new();
    if report.valid {
        out.push_str("valid\n");
    } else {
        out.push_str(&format!("invalid: {} error(s)\n", report.messages.len()));
        let shown = if max_errors == 0 {
            report.messages.len()
        } else {
            max_errors.min(report.messages.len())
        };
        for message in &report.messages[..shown] {
            out.push_str(&format!("  {}\n", message));
        }
        if shown < report.messages.len() {
            out.push_str("  ...\n");
        }
    }

    let m = &report.metrics;
    let ratio = match m.tier() {
        Some(tier) => format!("{} ({})", m.ratio_display(), tier),
        None => m.ratio_display(),
    };
    out.push_str(&format!(
        "length {}  turns {}  min {}  ratio {}\n",
        m.total_length, m.total_turns, m.total_manhattan, ratio
    ));
    out
}

fn run_frame(args: FrameArgs) -> Result<i32, String> {
    let puzzle = parse_puzzle(&read_file(&args.puzzle)?).map_err(|e| e.to_string())?;
    let solution = parse_solution(&read_file(&args.solution)?).map_err(|e| e.to_string())?;

    let config = RenderConfig::new().ascii(args.use_ascii).coords(args.coords);
    let renderer = GridRenderer::new(config);
    let trace = build_trace(&puzzle.grid, &solution.paths);

    let frames = if args.all {
        trace.frames().collect()
    } else {
        vec![trace.frame(args.step.unwrap_or(trace.max_steps()))]
    };

    let blocks = frames
        .iter()
        .map(|frame| {
            let drawing = renderer.render(&puzzle, frame).map_err(|e| e.to_string())?;
            Ok(format!("step {}/{}\n{}", frame.step, frame.max_steps, drawing))
        })
        .collect::<Result<Vec<String>, String>>()?;
    emit(&blocks.join("\n"))?;
    Ok(0)
}

fn run_batch(args: BatchArgs) -> Result<i32, String> {
    let mut source = CaseSource::new(&args.inputs, &args.outputs);
    if let Some(filter) = args.filter {
        source = source.with_filter(filter);
    }
    let names = source
        .list()
        .map_err(|e| format!("cannot list '{}': {}", args.inputs.display(), e))?;

    let cases: Vec<_> = names
        .iter()
        .map(|name| source.load(name, &args.candidates))
        .collect();
    let report = compare_all(&cases);

    if args.json {
        emit(&to_json(&report)?)?;
    } else {
        emit(&format_batch(&report))?;
    }
    Ok(if report.all_passed() { 0 } else { 2 })
}

fn format_batch(report: &BatchReport) -> String {
    let width = report
        .outcomes
        .iter()
        .map(|o| o.case_id.len())
        .max()
        .unwrap_or(0)
        .max("case".len());

    let mut out = format!("{:<width$}  {:<7} {:>8}  {}\n", "case", "verdict", "time", "message");
    for o in &report.outcomes {
        out.push_str(&format!(
            "{:<width$}  {:<7} {:>8}  {}\n",
            o.case_id,
            o.verdict.to_string(),
            o.duration_hint(),
            o.message
        ));
    }
    out.push_str(&report.summary());
    out.push('\n');
    out
}

fn run_level(args: LevelArgs) -> Result<i32, String> {
    let cells = args
        .rows
        .checked_mul(args.cols)
        .ok_or_else(|| format!("grid {}x{} is too large", args.rows, args.cols))?;
    let mut layout: BTreeMap<Cell, RuneId> = BTreeMap::new();
    for (id, pos) in args.runes {
        if pos >= cells {
            return Err(format!(
                "rune {} at {} is outside a {}x{} grid",
                id, pos, args.rows, args.cols
            ));
        }
        if let Some(other) = layout.insert(pos, id) {
            return Err(format!("cell {} holds both rune {} and rune {}", pos, other, id));
        }
    }

    let text = encode_level(args.rows, args.cols, &layout).map_err(|e| e.to_string())?;

    match args.output {
        Some(name) => {
            let path = level_filename(&name);
            fs::write(&path, format!("{}\n", text))
                .map_err(|e| format!("cannot write '{}': {}", path, e))?;
            eprintln!("saved {}", path);
        }
        None => emit(&format!("{}\n", text))?,
    }
    Ok(0)
}
