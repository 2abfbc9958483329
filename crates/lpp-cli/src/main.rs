/// LPP command-line tool: decode, encode and inspect Low Power Payload
/// frames.
///
/// # Command overview
///
/// ```text
/// lpp <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Print the readings (or port values) in a frame
///   encode     Build a frame from a JSON manifest
///   inspect    Print a unit-by-unit breakdown with offsets and raw bytes
///   types      Print the channel type registry
///   help       Print help information
///
/// Global options:
///   --log-level <LEVEL>    error | warn (default) | info | debug | trace
///   --log-format <FORMAT>  text (default) | json
///   -h, --help             Print help
///   -V, --version          Print version
/// ```
///
/// `FILE` arguments accept `-` for stdin.
///
/// # Exit codes
///
/// | Code | Meaning                                         |
/// |------|-------------------------------------------------|
/// | 0    | Success                                         |
/// | 1    | Error (I/O failure, malformed frame, bad input) |
///
/// Errors and logs go to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use lpp_types::Generation;

mod cmd_decode;
mod cmd_encode;
mod cmd_inspect;
mod cmd_types;
mod input;
mod logging;

use crate::logging::{LogFormat, LogLevel, init_logging};

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The LPP (Low Power Payload) command-line tool.
#[derive(Parser)]
#[command(name = "lpp", version, about = "Low Power Payload codec CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log verbosity. `RUST_LOG` overrides this when set.
    #[arg(long, value_enum, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Log output format.
    #[arg(long, value_enum, default_value = "text", global = true)]
    log_format: LogFormat,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print the readings (or port values) in a frame.
    Decode(DecodeArgs),
    /// Build a frame from a JSON manifest.
    Encode(EncodeArgs),
    /// Print a unit-by-unit breakdown of a frame.
    Inspect(InspectArgs),
    /// Print the channel type registry.
    Types(TypesArgs),
}

/// Format revision selector for `--generation`.
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum GenerationArg {
    /// Downlink ends at `0xFF`; relative humidity is unsigned.
    #[default]
    Current,
    /// No downlink terminator; relative humidity is signed.
    Legacy,
}

impl From<GenerationArg> for Generation {
    fn from(arg: GenerationArg) -> Self {
        match arg {
            GenerationArg::Current => Generation::Current,
            GenerationArg::Legacy => Generation::Legacy,
        }
    }
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `lpp decode`.
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────────────┐
/// │ Flag         │ Effect                                               │
/// ├──────────────┼──────────────────────────────────────────────────────┤
/// │ --downlink   │ Treat the frame as downlink (channel + value units)  │
/// │ --hex        │ Input is hex text instead of raw bytes               │
/// │ --json       │ Print a JSON array instead of one line per unit      │
/// │ --generation │ current (default) | legacy                           │
/// └──────────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Frame file, or `-` for stdin.
    pub file: PathBuf,

    /// Decode as a downlink frame.
    #[arg(long)]
    pub downlink: bool,

    /// Read the input as hex text.
    #[arg(long)]
    pub hex: bool,

    /// Emit JSON.
    #[arg(long)]
    pub json: bool,

    /// Format revision.
    #[arg(long, value_enum, default_value = "current")]
    pub generation: GenerationArg,
}

/// Arguments for `lpp encode`.
///
/// The manifest lists uplink readings, downlink port values, or both:
///
/// ```json
/// {
///   "uplink": [
///     { "type": "temperature", "channel": 7, "value": -15.65 },
///     { "type": "gps", "channel": 1, "value": [52.3655, 4.8885, 21.54] }
///   ],
///   "downlink": [ { "channel": 1, "value": 1.0 } ],
///   "terminate": true
/// }
/// ```
///
/// Uplink units are written first, then downlink units, then the `0xFF`
/// terminator when `terminate` is true.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// JSON manifest, or `-` for stdin.
    pub input: PathBuf,

    /// Output frame file, or `-` for stdout.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Write the frame as hex text.
    #[arg(long)]
    pub hex: bool,
}

/// Arguments for `lpp inspect`.
///
/// Prints, per unit, its byte offset, channel, type tag, payload bytes and
/// decoded values. Stops at the first malformed unit and reports it.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Frame file, or `-` for stdin.
    pub file: PathBuf,

    /// Inspect as a downlink frame.
    #[arg(long)]
    pub downlink: bool,

    /// Read the input as hex text.
    #[arg(long)]
    pub hex: bool,

    /// Format revision.
    #[arg(long, value_enum, default_value = "current")]
    pub generation: GenerationArg,
}

/// Arguments for `lpp types`.
#[derive(clap::Args)]
pub struct TypesArgs {
    /// Show the registry as seen by this format revision.
    #[arg(long, value_enum, default_value = "current")]
    pub generation: GenerationArg,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Encode(args) => cmd_encode::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Types(args) => cmd_types::run(&args),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
