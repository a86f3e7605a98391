use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use polya_core::CountConfig;
use polya_count::OrbitCounter;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ClassesArgs {
    /// Size of the symmetric group.
    #[arg(long, allow_hyphen_values = true)]
    pub n: i64,
    /// YAML configuration overriding the default limits.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Emit JSON lines instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ClassRow {
    cycle_type: Vec<usize>,
    class_size: String,
}

pub fn run(args: &ClassesArgs) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => CountConfig::load(path)?,
        None => CountConfig::default(),
    };
    let counter = OrbitCounter::new(config)?;
    let weights = counter.classes(args.n)?;
    for (partition, weight) in weights.iter() {
        if args.json {
            let row = ClassRow {
                cycle_type: partition.parts().to_vec(),
                class_size: weight.to_string(),
            };
            println!("{}", serde_json::to_string(&row)?);
        } else {
            println!("{partition}\t{weight}");
        }
    }
    if !args.json {
        println!("total\t{}", weights.total_weight());
    }
    Ok(())
}
