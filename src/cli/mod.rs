use std::fs::canonicalize;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use colored::Colorize;

use crate::catalog::Category;
use crate::cli::args::Args;
use crate::config::{parse_config, RegressionConfig};
use crate::regression::Harness;
use crate::report::LogReporter;
use crate::verification::SystemRunner;
use crate::Result;

pub mod args;
pub mod logging;

pub const BANNER: &str = "GF180MCU LVS Regression v0.2";

pub fn default_run_name(now: DateTime<Utc>) -> String {
    now.format("unit_tests_%Y_%m_%d_%H_%M_%S").to_string()
}

fn print_parameters(device: &str, run_name: &str, output_dir: &Path, config: &RegressionConfig) {
    println!("{}\n", BANNER.bold());
    println!("Run parameters:");
    println!("\tDevice: {device}");
    if let Ok(category) = device.parse::<Category>() {
        println!("\tTest cases: {}", category.test_cases().len());
    }
    println!("\tRun name: {run_name}");
    println!("\tOutput directory: {output_dir:?}");
    println!("\tKLayout: {}", config.tool);
    println!("\tRuledeck: {:?}\n", config.ruledeck);
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    let run_name = args
        .run_name
        .clone()
        .unwrap_or_else(|| default_run_name(Utc::now()));

    let testing_dir = canonicalize(&args.testing_dir)
        .with_context(|| format!("testing directory {:?} does not exist", args.testing_dir))?;
    let output_dir = testing_dir.join(&run_name);
    std::fs::create_dir_all(&output_dir)?;

    logging::init(output_dir.join(format!("{run_name}.log")))?;

    let config = match &args.config {
        Some(path) => parse_config(path)
            .with_context(|| format!("failed to read configuration file {path:?}"))?,
        None => RegressionConfig::default(),
    };

    if let Some(mp) = args.mp {
        log::debug!("--mp={mp} has no effect; test cases run sequentially");
    }

    print_parameters(&args.device, &run_name, &output_dir, &config);

    let harness = Harness {
        config: &config,
        testing_dir: &testing_dir,
        runner: &SystemRunner,
        reporter: &LogReporter,
    };
    let tally = harness.run_device(&output_dir, &args.device)?;

    println!(
        "{} {} test cases of {}",
        "Passed".green().bold(),
        tally.passed,
        args.device
    );
    println!("Artifacts saved to: {:?}\n", &output_dir);

    Ok(())
}
