use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "clampstep", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full multiply, add, power, compound sequence and print the final value.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Input JSON with `start`, `minimum`, `maximum` and `coefficient`.
    #[arg(long = "in", conflicts_with_all = ["start", "min", "max", "coefficient"])]
    in_path: Option<PathBuf>,

    #[command(flatten)]
    values: ValueArgs,

    /// Print the value after every step as JSON.
    #[arg(long)]
    trace: bool,
}

#[derive(Args, Debug)]
struct ValueArgs {
    /// Starting value.
    #[arg(long, allow_negative_numbers = true)]
    start: Option<f64>,

    /// Lower bound.
    #[arg(long, allow_negative_numbers = true)]
    min: Option<f64>,

    /// Upper bound.
    #[arg(long, allow_negative_numbers = true)]
    max: Option<f64>,

    /// Coefficient used by every step.
    #[arg(long, allow_negative_numbers = true)]
    coefficient: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(args: &RunArgs) -> anyhow::Result<clampstep::SequenceInput> {
    if let Some(path) = &args.in_path {
        return clampstep::SequenceInput::from_path(path)
            .with_context(|| format!("load sequence input '{}'", path.display()));
    }

    let v = &args.values;
    let missing = |name: &str| anyhow::anyhow!("missing --{name} (or pass --in <json>)");
    Ok(clampstep::SequenceInput {
        start: v.start.ok_or_else(|| missing("start"))?,
        minimum: v.min.ok_or_else(|| missing("min"))?,
        maximum: v.max.ok_or_else(|| missing("max"))?,
        coefficient: v.coefficient.ok_or_else(|| missing("coefficient"))?,
    })
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let input = read_input(&args)?;
    input.params().validate()?;

    if args.trace {
        let trace = input.run_traced()?;
        let json = serde_json::to_string_pretty(&trace).context("serialize trace")?;
        println!("{json}");
    } else {
        println!("{}", input.run()?);
    }
    Ok(())
}
