use std::path::{Path, PathBuf};

/// Per-category run directory, named after the table label up to its first space.
///
/// `MOS_SAB DEVICES` maps to `<output_dir>/LVS_MOS_SAB`.
pub fn run_dir(output_dir: impl AsRef<Path>, table: &str) -> PathBuf {
    let prefix = table.split(' ').next().unwrap_or(table);
    PathBuf::from(output_dir.as_ref()).join(format!("LVS_{prefix}"))
}

pub fn out_gds(work_dir: impl AsRef<Path>, name: &str) -> PathBuf {
    PathBuf::from(work_dir.as_ref()).join(format!("{name}.gds"))
}

pub fn out_cdl(work_dir: impl AsRef<Path>, name: &str) -> PathBuf {
    PathBuf::from(work_dir.as_ref()).join(format!("{name}.cdl"))
}

pub fn out_generated_cdl(work_dir: impl AsRef<Path>, net: &str) -> PathBuf {
    PathBuf::from(work_dir.as_ref()).join(format!("{net}_generated.cdl"))
}

pub fn out_lvsdb(work_dir: impl AsRef<Path>, name: &str) -> PathBuf {
    PathBuf::from(work_dir.as_ref()).join(format!("{name}.lvsdb"))
}

pub fn out_extracted(work_dir: impl AsRef<Path>, name: &str) -> PathBuf {
    PathBuf::from(work_dir.as_ref()).join(format!("{name}_extracted.cir"))
}

pub fn out_log(work_dir: impl AsRef<Path>, name: &str) -> PathBuf {
    PathBuf::from(work_dir.as_ref()).join(format!("{name}.log"))
}
