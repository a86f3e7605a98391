use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use polya_core::CountConfig;
use polya_count::serde_io::write_json;
use polya_count::{report_to_json, OrbitCounter, OrbitReport};
use tracing::info;

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Grid width (number of columns).
    #[arg(long, allow_hyphen_values = true)]
    pub width: i64,
    /// Grid height (number of rows).
    #[arg(long, allow_hyphen_values = true)]
    pub height: i64,
    /// Palette size.
    #[arg(long, allow_hyphen_values = true)]
    pub size: i64,
    /// YAML configuration overriding the default limits.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Print the full JSON report instead of the bare count.
    #[arg(long)]
    pub json: bool,
    /// Also write the JSON report to this path.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &CountArgs) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => CountConfig::load(path)?,
        None => CountConfig::default(),
    };
    let counter = OrbitCounter::new(config)?;
    let query = counter.query(args.width, args.height, args.size)?;
    let count = counter.count(&query)?;
    info!(orbits = %count.orbits, "count complete");

    if !args.json && args.out.is_none() {
        println!("{}", count.value());
        return Ok(());
    }
    let report = OrbitReport::from_count(&count)?;
    let json = report_to_json(&report)?;
    if let Some(path) = &args.out {
        write_json(path, &json)?;
    }
    if args.json {
        println!("{json}");
    } else {
        println!("{}", count.value());
    }
    Ok(())
}
