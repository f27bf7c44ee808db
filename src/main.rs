use anyhow::{Context, Result};
use binary_numeral::{BinaryLiteral, Mode, NumeralResult, decode_literal};
use clap::{Parser, ValueEnum};
use dcbor::prelude::*;
use tracing::debug;

/// Reinterpret binary digit strings as unsigned, signed, or floating-point
/// numerals
#[derive(Parser)]
#[command(name = "binary-numeral")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Binary literals, most-significant bit first
    #[arg(required = true)]
    bits: Vec<String>,

    /// Mode (STANDARD, UNSIGNED, SIGNED, FLOATING_POINT, FLOAT)
    #[arg(
        short,
        long,
        env = "BINARY_NUMERAL_MODE",
        default_value = "STANDARD"
    )]
    mode: String,

    /// Decode under every mode, ignoring --mode
    #[arg(short, long)]
    all_modes: bool,

    /// Output format
    #[arg(
        short,
        long,
        env = "BINARY_NUMERAL_FORMAT",
        value_enum,
        default_value_t = Format::Text
    )]
    format: Format,

    /// Also print the raw bit pattern as hex
    #[arg(short, long)]
    pattern: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    /// Hex-encoded deterministic CBOR
    Cbor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let modes: Vec<Mode> = if cli.all_modes {
        Mode::ALL.to_vec()
    } else {
        vec![cli.mode.parse::<Mode>().with_context(|| "Invalid --mode")?]
    };

    let mut failures = 0usize;
    for raw in &cli.bits {
        let literal = match BinaryLiteral::parse(raw) {
            Ok(literal) => literal,
            Err(e) => {
                eprintln!("{}: {}", raw, e);
                failures += 1;
                continue;
            }
        };
        if cli.pattern {
            println!("{} pattern={}", literal, literal.pattern_hex());
        }
        for &mode in &modes {
            match decode_literal(&literal, mode) {
                Ok(result) => {
                    debug!(
                        bits = %literal,
                        %mode,
                        decimal = %result.decimal(),
                        hex = result.hex(),
                        "decoded"
                    );
                    println!("{}", render(result, cli.format)?);
                }
                Err(e) => {
                    debug!(bits = %literal, %mode, error = %e, "rejected");
                    eprintln!("{} [{}]: {}", literal, mode, e);
                    failures += 1;
                }
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn render(result: NumeralResult, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => result.to_string(),
        Format::Json => serde_json::to_string(&result)
            .context("Failed to serialize result as JSON")?,
        Format::Cbor => hex::encode(CBOR::from(result).to_cbor_data()),
    })
}
