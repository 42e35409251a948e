use std::path::PathBuf;

use derive_builder::Builder;

use super::ToolCommand;

/// Printed by the GF180MCU ruledeck when the extracted and reference netlists agree.
pub const LVS_SUCCESS_MARKER: &str = "Congratulations! Netlists match";

/// Command that prints the KLayout version banner, e.g. `KLayout 0.28.6`.
pub fn version_command(tool: &str) -> ToolCommand {
    ToolCommand::new(tool).arg("-b").arg("-v")
}

/// A batch-mode LVS run of the GF180MCU ruledeck.
#[derive(Debug, Clone, Builder)]
#[builder(derive(Debug))]
pub struct LvsInvocation {
    /// Name or path of the KLayout binary.
    #[builder(setter(into))]
    pub tool: String,
    #[builder(setter(into))]
    pub ruledeck: PathBuf,
    /// Layout under test.
    #[builder(setter(into))]
    pub layout: PathBuf,
    /// LVS database written by the ruledeck.
    #[builder(setter(into))]
    pub report: PathBuf,
    /// Reference (schematic) netlist.
    #[builder(setter(into))]
    pub schematic: PathBuf,
    /// Netlist extracted from the layout.
    #[builder(setter(into))]
    pub target_netlist: PathBuf,
    /// Whitespace-separated `-rd` switches appended after the standard ones.
    #[builder(default, setter(into))]
    pub switches: String,
    /// Receives the combined stdout and stderr of the run.
    #[builder(setter(into))]
    pub log: PathBuf,
    #[builder(default, setter(into, strip_option))]
    pub work_dir: Option<PathBuf>,
}

impl LvsInvocation {
    #[inline]
    pub fn builder() -> LvsInvocationBuilder {
        LvsInvocationBuilder::default()
    }

    pub fn command(&self) -> ToolCommand {
        let mut cmd = ToolCommand::new(&self.tool)
            .arg("-b")
            .arg("-r")
            .arg(self.ruledeck.display().to_string())
            .arg("-rd")
            .arg(format!("input={}", self.layout.display()))
            .arg("-rd")
            .arg(format!("report={}", self.report.display()))
            .arg("-rd")
            .arg(format!("schematic={}", self.schematic.display()))
            .arg("-rd")
            .arg(format!("target_netlist={}", self.target_netlist.display()));
        cmd.args
            .extend(self.switches.split_whitespace().map(str::to_string));
        cmd.cwd = self.work_dir.clone();
        cmd.log = Some(self.log.clone());
        cmd
    }
}

/// Whether a KLayout LVS log reports matching netlists.
pub fn lvs_passed(log: &str) -> bool {
    log.contains(LVS_SUCCESS_MARKER)
}
