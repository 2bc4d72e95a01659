use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "animark", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize a layered waveform and print it as JSON.
    Wave(WaveArgs),
    /// Compose a terminal replay timeline and print it as JSON.
    Terminal(TerminalArgs),
}

#[derive(Parser, Debug)]
struct WaveArgs {
    /// JSON parameter file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Parameter override as key=value (repeatable).
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Print compact JSON.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[derive(Parser, Debug)]
struct TerminalArgs {
    /// JSON parameter file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Command to type (repeatable). Replaces the configured list.
    #[arg(long = "cmd", value_name = "TEXT")]
    cmds: Vec<String>,

    /// Parameter override as key=value (repeatable).
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Print compact JSON.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Wave(args) => cmd_wave(args),
        Command::Terminal(args) => cmd_terminal(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read config '{}'", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let text = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("serialize output")?;
    println!("{text}");
    Ok(())
}

fn cmd_wave(args: WaveArgs) -> anyhow::Result<()> {
    let mut params = match &args.config {
        Some(path) => animark::WaveParams::from_json(&read_config(path)?)
            .with_context(|| format!("parse config '{}'", path.display()))?,
        None => animark::WaveParams::default(),
    };
    params.apply_pairs(&args.set).context("apply --set overrides")?;

    let spec = params.into_spec();
    let layers = animark::synthesize_or_default(&spec)?;
    print_json(&layers, args.compact)
}

fn cmd_terminal(args: TerminalArgs) -> anyhow::Result<()> {
    let mut params = match &args.config {
        Some(path) => animark::TerminalParams::from_json(&read_config(path)?)
            .with_context(|| format!("parse config '{}'", path.display()))?,
        None => animark::TerminalParams::default(),
    };
    params.apply_pairs(&args.set).context("apply --set overrides")?;
    if !args.cmds.is_empty() {
        params.commands = args.cmds;
    }

    let (commands, options) = params.into_parts();
    let timeline = animark::Compositor::new(options).compose(&commands);
    print_json(&timeline, args.compact)
}
