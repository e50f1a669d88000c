/// `kenall` command-line tool — normalize, parse, and validate postal-code
/// tables distributed as fixed-column CSV.
///
/// # Command overview
///
/// ```text
/// kenall <COMMAND> [OPTIONS]
///
/// Commands:
///   normalize  Rewrite a table so every row is one concrete address
///   parse      Print each row of a table as JSON
///   validate   Check that a table decodes and normalizes cleanly
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Log debug events to stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// Every command reads from a file argument or, when it is omitted or `-`,
/// from stdin. Input and output are UTF-8.
///
/// # Exit codes
///
/// | Code | Meaning                                  |
/// |------|------------------------------------------|
/// | 0    | Success                                  |
/// | 1    | Error (I/O failure, malformed row, etc.) |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;

mod cmd_normalize;
mod cmd_parse;
mod cmd_validate;
mod io;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Postal-code table tool.
#[derive(Parser)]
#[command(name = "kenall", version, about = "Postal-code table normalizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug events (classification decisions, skipped expansions).
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a table so every row is one concrete address.
    Normalize(NormalizeArgs),
    /// Print each row of a table as a JSON object.
    Parse(ParseArgs),
    /// Check that a table decodes and normalizes cleanly.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `kenall normalize`.
///
/// ```text
/// ┌──────────────┬─────────────────────────────────────────────────────┐
/// │ Flag         │ Effect                                              │
/// ├──────────────┼─────────────────────────────────────────────────────┤
/// │ -o / --output│ write to file instead of stdout                     │
/// │ --no-trim    │ keep leading/trailing whitespace in every field     │
/// │ --keep-width │ do not fold halfwidth kana / fullwidth ASCII        │
/// └──────────────┴─────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct NormalizeArgs {
    /// Input table (`-` or omitted for stdin).
    pub input: Option<PathBuf>,

    /// Write output to this path instead of stdout (`-` for stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep whitespace around field values.
    #[arg(long)]
    pub no_trim: bool,

    /// Keep halfwidth katakana and fullwidth ASCII as they are.
    #[arg(long)]
    pub keep_width: bool,
}

/// Arguments for `kenall parse`.
///
/// Rows are read verbatim, without trimming or normalization, and printed
/// one JSON object per line (or as one pretty-printed array).
#[derive(clap::Args)]
pub struct ParseArgs {
    /// Input table (`-` or omitted for stdin).
    pub input: Option<PathBuf>,

    /// Print a single indented JSON array instead of JSON lines.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for `kenall validate`.
///
/// Runs the full normalization without writing any output. Exits with 0
/// when every row decodes and every multi-row street name is closed.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Input table (`-` or omitted for stdin).
    pub input: Option<PathBuf>,

    /// Keep whitespace around field values.
    #[arg(long)]
    pub no_trim: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Normalize(args) => cmd_normalize::run(&args),
        Commands::Parse(args) => cmd_parse::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
