//! osm-codec CLI
//!
//! Decode uplink frames and encode downlink frames from the command line.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use osm_codec::frame::Reading;
use osm_codec::{Decoder, Encoder, Measurements, Result, Variables};
use tracing_subscriber::{fmt, EnvFilter};

/// osm-codec CLI
#[derive(Parser, Debug)]
#[command(name = "osm-codec")]
#[command(about = "Decode and encode LoRaWAN telemetry frames")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a hex frame into JSON measurements
    Decode {
        /// LoRaWAN fPort
        #[arg(short, long, default_value = "1")]
        port: u8,

        /// Device variable (key=value), may be repeated
        #[arg(long = "var", value_parser = parse_variable)]
        vars: Vec<(String, String)>,

        /// Fail on the first malformed record instead of returning a partial result
        #[arg(long)]
        strict: bool,

        /// Frame bytes as hex
        hex: String,
    },

    /// Encode a single-field JSON object into a hex frame
    Encode {
        /// LoRaWAN fPort
        #[arg(short, long, default_value = "1")]
        port: u8,

        /// Device variable (key=value), may be repeated
        #[arg(long = "var", value_parser = parse_variable)]
        vars: Vec<(String, String)>,

        /// JSON object with exactly one field, e.g. '{"TEMP": 22}'
        json: String,
    },

    /// List the records of a hex frame one per line
    Records {
        /// Frame bytes as hex
        hex: String,
    },
}

fn parse_variable(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", s))
}

/// Accepts "01 54 45", "0x015445" and "015445"
fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let cleaned: String = input.split_whitespace().collect();
    let cleaned = cleaned.strip_prefix("0x").unwrap_or(&cleaned);
    Ok(hex::decode(cleaned)?)
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Decode {
            port,
            vars,
            strict,
            hex,
        } => {
            let bytes = parse_hex(&hex)?;
            let variables: Variables = vars.into_iter().collect();
            let fields = if strict {
                Decoder::default().try_decode(&bytes)?
            } else {
                osm_codec::decode(port, &bytes, &variables)
            };
            println!("{}", serde_json::to_string_pretty(&fields)?);
        }
        Commands::Encode { port, vars, json } => {
            let fields: Measurements = serde_json::from_str(&json)?;
            let variables: Variables = vars.into_iter().collect();
            let bytes = osm_codec::encode(port, &fields, &variables);
            if bytes.is_empty() {
                // Re-run strictly to report why
                Encoder::default().try_encode(&fields)?;
            }
            println!("{}", hex::encode(bytes));
        }
        Commands::Records { hex } => {
            let bytes = parse_hex(&hex)?;
            let records = Decoder::default().records(&bytes)?;
            println!("version {}", records.version() as u8);
            for record in records {
                let record = record?;
                match &record.reading {
                    Reading::Single(value) => println!("{:<4} single {}", record.name, value),
                    Reading::Multi { mean, min, max } => println!(
                        "{:<4} multi  mean={} min={} max={}",
                        record.name, mean, min, max
                    ),
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,osm_codec=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("osm-codec v{}", osm_codec::VERSION);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
