use std::path::PathBuf;

use thiserror::Error;

use crate::regression::Tally;

#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("io error")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration file")]
    Config(#[from] toml::de::Error),

    #[error("Klayout is not found. Please make sure {tool} is installed.")]
    ToolNotFound { tool: String },

    #[error("Was not able to get klayout version properly (banner: {banner:?}).")]
    UnknownVersion { banner: String },

    #[error("Prerequisites at a minimum: KLayout 0.{minimum}.0 (found {found})")]
    VersionTooOld { found: String, minimum: u32 },

    #[error("{net} testcase does not exist, please recheck")]
    MissingTestCase { net: String },

    #[error("{layout:?} generated an exception")]
    Invocation {
        layout: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid LVS invocation")]
    InvalidInvocation(#[from] crate::verification::klayout::LvsInvocationBuilderError),

    #[error("{layout:?} generated an exception: klayout exited with status {status:?}")]
    ToolFailed { layout: PathBuf, status: Option<i32> },

    #[error("failed to create run directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to stage {src:?} as {dst:?}")]
    Stage {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Klayout LVS run failed: no log found at {0:?}")]
    MissingLog(PathBuf),

    #[error("{name} testcase failed ({} passed, {} failed)", .tally.passed, .tally.failed)]
    TestCaseFailed {
        name: String,
        layout: PathBuf,
        tally: Tally,
    },

    #[error("Allowed devices are (MOS, BJT, DIODE, RES, MIMCAP, MOSCAP, MOS_SAB) only")]
    UnknownDevice { name: String },

    #[error("LVS regression test failed")]
    RegressionFailed { tally: Tally },
}

pub type Result<T> = std::result::Result<T, RegressionError>;
