use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lvsreg",
    author,
    version,
    about = "Run GlobalFoundries 180nm MCU LVS regression",
    long_about = None,
    help_template(
        "{before-help}{name} {version}\n{author-with-newline}{about-with-newline}\n{usage-heading} {usage}\n\n{all-args}{after-help}"
    )
)]
pub struct Args {
    /// Name of device that we want to run regression for.
    ///
    /// Allowed values: MOS, BJT, DIODE, RES, MIMCAP, MOSCAP, MOS_SAB, EFUSE.
    #[arg(long)]
    pub device: String,

    /// The number of threads used in run. Accepted for compatibility; runs are sequential.
    #[arg(long)]
    pub mp: Option<usize>,

    /// Select your run name. Defaults to `unit_tests_<UTC timestamp>`.
    #[arg(long = "run_name")]
    pub run_name: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding `testcases/` and `man_testcases/`; run outputs are written here.
    #[arg(short, long, default_value = ".")]
    pub testing_dir: PathBuf,
}
