use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::version::MIN_MINOR_VERSION;

/// Tool and file-system settings of a regression run.
///
/// Relative paths are resolved against the testing directory.
#[derive(Debug, Eq, PartialEq, Clone, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegressionConfig {
    /// KLayout binary.
    pub tool: String,
    /// LVS ruledeck passed to `klayout -r`.
    pub ruledeck: PathBuf,
    /// Directories searched, in order, for `<name>.gds` and `<net>.cdl`.
    pub testcase_dirs: Vec<PathBuf>,
    pub min_minor_version: u32,
}

impl Default for RegressionConfig {
    fn default() -> Self {
        Self {
            tool: "klayout".to_string(),
            ruledeck: PathBuf::from("../gf180mcu.lvs"),
            testcase_dirs: vec![PathBuf::from("testcases"), PathBuf::from("man_testcases")],
            min_minor_version: MIN_MINOR_VERSION,
        }
    }
}

pub fn parse_config(path: impl AsRef<Path>) -> Result<RegressionConfig> {
    let contents = std::fs::read_to_string(path)?;
    let data = toml::from_str(&contents)?;
    Ok(data)
}
