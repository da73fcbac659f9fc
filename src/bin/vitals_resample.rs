use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Duration;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vitals_resample::common::parse::{parse_bucket_width, parse_timestamp};
use vitals_resample::source::read_measurements_from_path;
use vitals_resample::{resample_with_config, sink, SamplingConfig, Timestamp};

#[derive(Parser, Debug)]
#[command(name = "vitals-resample")]
#[command(about = "Downsample a file of timestamped measurements into fixed-width buckets")]
struct Args {
    /// Input file with Date,Type,Value rows
    #[arg(default_value = "read.csv")]
    input: PathBuf,

    /// Start of sampling; buckets closing before this instant are dropped
    #[arg(short, long, value_parser = parse_timestamp)]
    start: Timestamp,

    /// Bucket width, e.g. 90s, 5m, 2h
    #[arg(short, long, default_value = "5m", value_parser = parse_bucket_width)]
    width: Duration,

    /// Emit JSON instead of a text table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = SamplingConfig::new(args.start).with_width(args.width);

    let measurements = read_measurements_from_path(&args.input)?;
    let records = resample_with_config(&config, &measurements)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        sink::write_json(&mut out, &records)?;
    } else {
        sink::write_table(&mut out, &records)?;
    }
    Ok(())
}
