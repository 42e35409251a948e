//! The LVS regression loop: stage each test case, run KLayout on it,
//! and judge the run from its log.

use std::path::{Path, PathBuf};

use crate::catalog::{Category, TestCase};
use crate::config::RegressionConfig;
use crate::error::{RegressionError, Result};
use crate::netlist::write_clean_netlist;
use crate::paths::{
    out_cdl, out_extracted, out_gds, out_generated_cdl, out_log, out_lvsdb, run_dir,
};
use crate::report::Reporter;
use crate::verification::klayout::{lvs_passed, LvsInvocation};
use crate::verification::ProcessRunner;
use crate::version::{check_tool_version, ToolVersion};

/// Layouts containing this name tie their substrate to `sub!` rather than `vdd!`.
pub const GGNFET_SAMPLE: &str = "sample_ggnfet_06v0_dss";

/// Sample devices keep their reference netlist in `<name>.src.cdl`.
pub const SAMPLE_MARKER: &str = "sample";

/// Pass/fail counters for one category run.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Ruledeck switches for a test case.
pub fn switches_for(case: &TestCase) -> String {
    let substrate = if case.name.contains(GGNFET_SAMPLE) {
        " -rd lvs_sub=sub!"
    } else {
        " -rd lvs_sub=vdd!"
    };

    match case.switches {
        Some(extra) => format!("{extra}{substrate}"),
        None => substrate.to_string(),
    }
}

/// Base name (without `.cdl`) of the reference netlist for a layout.
pub fn netlist_name(name: &str) -> String {
    if name.contains(SAMPLE_MARKER) {
        format!("{name}.src")
    } else {
        name.to_string()
    }
}

/// Returns the first search directory holding both `<layout>.gds` and `<net>.cdl`.
pub fn resolve_inputs(
    search_dirs: &[PathBuf],
    layout: &str,
    net: &str,
) -> Option<(PathBuf, PathBuf)> {
    search_dirs.iter().find_map(|dir| {
        let gds = out_gds(dir, layout);
        let cdl = out_cdl(dir, net);
        (gds.is_file() && cdl.is_file()).then_some((gds, cdl))
    })
}

fn stage_err(src: &Path, dst: &Path) -> impl FnOnce(std::io::Error) -> RegressionError {
    let (src, dst) = (src.to_path_buf(), dst.to_path_buf());
    move |source| RegressionError::Stage { src, dst, source }
}

/// Every path involved in running one test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasePlan {
    pub name: String,
    pub net: String,
    pub switches: String,
    /// Original layout, as found in a search directory.
    pub layout_src: PathBuf,
    /// Original reference netlist.
    pub netlist_src: PathBuf,
    pub run_dir: PathBuf,
    pub staged_layout: PathBuf,
    pub staged_netlist: PathBuf,
    pub generated_netlist: PathBuf,
    pub report: PathBuf,
    pub extracted: PathBuf,
    pub log: PathBuf,
}

/// Everything a regression run needs from its environment.
pub struct Harness<'a> {
    pub config: &'a RegressionConfig,
    /// Root for relative search directories and the ruledeck; the tool runs here.
    pub testing_dir: &'a Path,
    pub runner: &'a dyn ProcessRunner,
    pub reporter: &'a dyn Reporter,
}

impl<'a> Harness<'a> {
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.testing_dir.join(path)
        }
    }

    pub fn check_tool_version(&self) -> Result<ToolVersion> {
        check_tool_version(
            self.runner,
            self.reporter,
            &self.config.tool,
            self.config.min_minor_version,
        )
    }

    pub fn plan_case(&self, run_dir: &Path, case: &TestCase) -> Result<CasePlan> {
        let name = case.name;
        let net = netlist_name(name);
        let switches = switches_for(case);

        let search_dirs: Vec<PathBuf> = self
            .config
            .testcase_dirs
            .iter()
            .map(|dir| self.resolve(dir))
            .collect();
        let (layout_src, netlist_src) = resolve_inputs(&search_dirs, name, &net)
            .ok_or_else(|| RegressionError::MissingTestCase { net: net.clone() })?;

        Ok(CasePlan {
            staged_layout: out_gds(run_dir, name),
            staged_netlist: out_cdl(run_dir, &net),
            generated_netlist: out_generated_cdl(run_dir, &net),
            report: out_lvsdb(run_dir, name),
            extracted: out_extracted(run_dir, name),
            log: out_log(run_dir, name),
            run_dir: run_dir.to_path_buf(),
            name: name.to_string(),
            net,
            switches,
            layout_src,
            netlist_src,
        })
    }

    /// Copies the original inputs into the run directory and writes the clean netlist.
    pub fn stage_case(&self, plan: &CasePlan) -> Result<()> {
        std::fs::create_dir_all(&plan.run_dir).map_err(|source| RegressionError::CreateDir {
            path: plan.run_dir.clone(),
            source,
        })?;
        std::fs::copy(&plan.layout_src, &plan.staged_layout)
            .map_err(stage_err(&plan.layout_src, &plan.staged_layout))?;
        std::fs::copy(&plan.netlist_src, &plan.staged_netlist)
            .map_err(stage_err(&plan.netlist_src, &plan.staged_netlist))?;
        write_clean_netlist(&plan.netlist_src, &plan.generated_netlist)
            .map_err(stage_err(&plan.netlist_src, &plan.generated_netlist))?;
        Ok(())
    }

    /// Runs KLayout LVS on a staged case. Returns whether the netlists matched.
    pub fn run_case(&self, plan: &CasePlan) -> Result<bool> {
        let invocation = LvsInvocation::builder()
            .tool(self.config.tool.as_str())
            .ruledeck(self.resolve(&self.config.ruledeck))
            .layout(&plan.staged_layout)
            .report(&plan.report)
            .schematic(&plan.generated_netlist)
            .target_netlist(&plan.extracted)
            .switches(plan.switches.as_str())
            .log(&plan.log)
            .work_dir(self.testing_dir)
            .build()?;

        let output = match self.runner.run(&invocation.command()) {
            Ok(output) => output,
            Err(source) => {
                self.reporter.error(&format!(
                    "{} generated an exception: {source}",
                    plan.staged_layout.display()
                ));
                return Err(RegressionError::Invocation {
                    layout: plan.staged_layout.clone(),
                    source,
                });
            }
        };

        if !output.success() {
            self.reporter.error(&format!(
                "{} generated an exception: exit status {:?}",
                plan.staged_layout.display(),
                output.code
            ));
            return Err(RegressionError::ToolFailed {
                layout: plan.staged_layout.clone(),
                status: output.code,
            });
        }

        if !plan.log.exists() {
            self.reporter.error("Klayout LVS run failed");
            return Err(RegressionError::MissingLog(plan.log.clone()));
        }

        let log = std::fs::read(&plan.log)?;
        Ok(lvs_passed(&String::from_utf8_lossy(&log)))
    }

    /// Runs every case in order, stopping at the first failure.
    ///
    /// `table` labels the summary and names the run directory
    /// (`LVS_<first word of table>`).
    pub fn lvs_check(&self, output_dir: &Path, table: &str, cases: &[TestCase]) -> Result<Tally> {
        let run_dir = run_dir(output_dir, table);
        let mut tally = Tally::default();

        for case in cases {
            let plan = self.plan_case(&run_dir, case).map_err(|e| {
                if let RegressionError::MissingTestCase { net } = &e {
                    self.reporter
                        .error(&format!("{net} testcase does not exist, please recheck"));
                }
                e
            })?;
            self.stage_case(&plan)?;

            if self.run_case(&plan)? {
                self.reporter
                    .info(&format!("{} testcase passed", plan.name));
                tally.passed += 1;
            } else {
                tally.failed += 1;
                self.reporter
                    .error(&format!("{} testcase failed.", plan.name));
                self.reporter.error(&format!(
                    "Please recheck {} file.",
                    plan.layout_src.display()
                ));
                return Err(RegressionError::TestCaseFailed {
                    name: plan.name,
                    layout: plan.layout_src,
                    tally,
                });
            }
        }

        self.reporter.info("==================================");
        self.reporter
            .info(&format!("NO. OF PASSED {table} : {}", tally.passed));
        self.reporter
            .info(&format!("NO. OF FAILED {table} : {}", tally.failed));
        self.reporter.info("==================================\n");

        Ok(tally)
    }

    /// Validates `device`, checks the tool, and runs the device's regression.
    pub fn run_device(&self, output_dir: &Path, device: &str) -> Result<Tally> {
        let category: Category = device.parse()?;

        self.check_tool_version()?;

        self.reporter.info(&format!(
            "Running Global Foundries 180nm MCU LVS regression on {category}"
        ));
        let tally = self.lvs_check(output_dir, &category.table(), category.test_cases())?;

        if tally.all_passed() {
            self.reporter
                .info("LVS regression test completed successfully.");
            Ok(tally)
        } else {
            self.reporter.error("LVS regression test failed.");
            Err(RegressionError::RegressionFailed { tally })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::catalog::{EFUSE_DEVICES, RES_DEVICES};
    use crate::tests::{CapturingReporter, FakeLog, FakeRunner};
    use crate::verification::klayout::LVS_SUCCESS_MARKER;

    const EFUSE_CDL: &str = ".SUBCKT efuse anode cathode\nXR0 anode cathode efuse $SUB=vss $[efuse]\n.ENDS\n";

    fn write_case(dir: &Path, layout: &str, net: &str) {
        std::fs::create_dir_all(dir).expect("failed to create testcase dir");
        std::fs::write(out_gds(dir, layout), b"GDSII").expect("failed to write layout");
        std::fs::write(out_cdl(dir, net), EFUSE_CDL).expect("failed to write netlist");
    }

    fn harness<'a>(
        config: &'a RegressionConfig,
        testing_dir: &'a Path,
        runner: &'a FakeRunner,
        reporter: &'a CapturingReporter,
    ) -> Harness<'a> {
        Harness {
            config,
            testing_dir,
            runner,
            reporter,
        }
    }

    #[test]
    fn test_switches() {
        let case = RES_DEVICES
            .iter()
            .find(|case| case.name == "ppolyf_u_3k")
            .unwrap();
        let switches = switches_for(case);
        assert_eq!(switches, "-rd poly_res=3k -rd lvs_sub=vdd!");

        assert_eq!(switches_for(&TestCase::new("efuse")), " -rd lvs_sub=vdd!");

        let switches = switches_for(&TestCase::new("sample_ggnfet_06v0_dss"));
        assert!(switches.contains("-rd lvs_sub=sub!"));
        assert!(!switches.contains("vdd!"));
    }

    #[test]
    fn test_netlist_name() {
        assert_eq!(netlist_name("sample_nfet_03v3"), "sample_nfet_03v3.src");
        assert_eq!(netlist_name("npn_10p00x10p00"), "npn_10p00x10p00");
    }

    #[test]
    fn test_efuse_passes() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let testing_dir = dir.path();
        write_case(&testing_dir.join("testcases"), "efuse", "efuse");
        let output_dir = testing_dir.join("run");

        let config = RegressionConfig::default();
        let runner = FakeRunner::new();
        let reporter = CapturingReporter::default();
        let tally = harness(&config, testing_dir, &runner, &reporter).lvs_check(
            &output_dir,
            "EFUSE DEVICES",
            EFUSE_DEVICES,
        )?;

        assert_eq!(tally, Tally { passed: 1, failed: 0 });
        assert!(tally.all_passed());

        let run_dir = output_dir.join("LVS_EFUSE");
        assert!(run_dir.join("efuse.gds").is_file());
        assert_eq!(std::fs::read_to_string(run_dir.join("efuse.cdl"))?, EFUSE_CDL);
        assert_eq!(
            std::fs::read_to_string(run_dir.join("efuse_generated.cdl"))?,
            ".SUBCKT efuse anode cathode\nXR0 anode cathode efuse vss efuse\n.ENDS\n"
        );
        assert!(std::fs::read_to_string(run_dir.join("efuse.log"))?.contains(LVS_SUCCESS_MARKER));

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        let cmd = &calls[0];
        assert_eq!(cmd.program, "klayout");
        assert_eq!(cmd.cwd.as_deref(), Some(testing_dir));
        assert!(cmd.args.contains(&format!(
            "input={}",
            run_dir.join("efuse.gds").display()
        )));
        assert!(cmd.args.contains(&format!(
            "schematic={}",
            run_dir.join("efuse_generated.cdl").display()
        )));
        assert!(cmd.args.contains(&format!(
            "{}",
            testing_dir.join("../gf180mcu.lvs").display()
        )));
        assert!(cmd.args.contains(&"lvs_sub=vdd!".to_string()));

        assert!(reporter.contains("efuse testcase passed"));
        assert!(reporter.contains("NO. OF PASSED EFUSE DEVICES : 1"));
        assert!(reporter.contains("NO. OF FAILED EFUSE DEVICES : 0"));
        Ok(())
    }

    #[test]
    fn test_res_switches_reach_the_tool() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let testing_dir = dir.path();
        write_case(&testing_dir.join("testcases"), "ppolyf_u_3k", "ppolyf_u_3k");

        let config = RegressionConfig::default();
        let runner = FakeRunner::new();
        let reporter = CapturingReporter::default();
        let cases = [TestCase::with_switches("ppolyf_u_3k", "-rd poly_res=3k")];
        harness(&config, testing_dir, &runner, &reporter).lvs_check(
            &testing_dir.join("run"),
            "RES DEVICES",
            &cases,
        )?;

        let args = &runner.calls()[0].args;
        let tail: Vec<&str> = args[args.len() - 4..].iter().map(String::as_str).collect();
        assert_eq!(tail, vec!["-rd", "poly_res=3k", "-rd", "lvs_sub=vdd!"]);
        Ok(())
    }

    #[test]
    fn test_sample_devices_use_src_netlist() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let testing_dir = dir.path();
        write_case(
            &testing_dir.join("testcases"),
            "sample_ggnfet_06v0_dss",
            "sample_ggnfet_06v0_dss.src",
        );

        let config = RegressionConfig::default();
        let runner = FakeRunner::new();
        let reporter = CapturingReporter::default();
        let cases = [TestCase::new("sample_ggnfet_06v0_dss")];
        let tally = harness(&config, testing_dir, &runner, &reporter).lvs_check(
            &testing_dir.join("run"),
            "MOS_SAB DEVICES",
            &cases,
        )?;
        assert_eq!(tally.passed, 1);

        let run_dir = testing_dir.join("run/LVS_MOS_SAB");
        assert!(run_dir.join("sample_ggnfet_06v0_dss.src.cdl").is_file());
        assert!(run_dir
            .join("sample_ggnfet_06v0_dss.src_generated.cdl")
            .is_file());
        let args = &runner.calls()[0].args;
        assert!(args.contains(&"lvs_sub=sub!".to_string()));
        assert!(!args.contains(&"lvs_sub=vdd!".to_string()));
        Ok(())
    }

    #[test]
    fn test_manual_testcases_are_a_fallback() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let testing_dir = dir.path();
        write_case(&testing_dir.join("man_testcases"), "rm1", "rm1");
        write_case(&testing_dir.join("man_testcases"), "rm2", "rm2");
        write_case(&testing_dir.join("testcases"), "rm2", "rm2");
        // Only a layout in the primary directory is not a match.
        std::fs::write(testing_dir.join("testcases/rm1.gds"), b"GDSII")?;

        let config = RegressionConfig::default();
        let runner = FakeRunner::new();
        let reporter = CapturingReporter::default();
        let h = harness(&config, testing_dir, &runner, &reporter);
        let run_dir = testing_dir.join("run/LVS_RES");

        let plan = h.plan_case(&run_dir, &TestCase::new("rm1"))?;
        assert_eq!(plan.layout_src, testing_dir.join("man_testcases/rm1.gds"));
        assert_eq!(plan.netlist_src, testing_dir.join("man_testcases/rm1.cdl"));

        let plan = h.plan_case(&run_dir, &TestCase::new("rm2"))?;
        assert_eq!(plan.layout_src, testing_dir.join("testcases/rm2.gds"));
        Ok(())
    }

    #[test]
    fn test_missing_testcase_is_fatal_before_running() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let testing_dir = dir.path();

        let config = RegressionConfig::default();
        let runner = FakeRunner::new();
        let reporter = CapturingReporter::default();
        let err = harness(&config, testing_dir, &runner, &reporter)
            .lvs_check(&testing_dir.join("run"), "EFUSE DEVICES", EFUSE_DEVICES)
            .unwrap_err();

        assert!(matches!(err, RegressionError::MissingTestCase { ref net } if net == "efuse"));
        assert!(runner.calls().is_empty());
        assert!(reporter.contains("efuse testcase does not exist"));
        Ok(())
    }

    #[test]
    fn test_failure_stops_the_loop() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let testing_dir = dir.path();
        let cases_dir = testing_dir.join("testcases");
        write_case(&cases_dir, "rm1", "rm1");
        write_case(&cases_dir, "rm2", "rm2");
        write_case(&cases_dir, "rm3", "rm3");

        let config = RegressionConfig::default();
        let runner = FakeRunner::new().with_log("rm2", FakeLog::Mismatch);
        let reporter = CapturingReporter::default();
        let cases = [
            TestCase::new("rm1"),
            TestCase::new("rm2"),
            TestCase::new("rm3"),
        ];
        let err = harness(&config, testing_dir, &runner, &reporter)
            .lvs_check(&testing_dir.join("run"), "RES DEVICES", &cases)
            .unwrap_err();

        match err {
            RegressionError::TestCaseFailed { name, layout, tally } => {
                assert_eq!(name, "rm2");
                assert_eq!(layout, cases_dir.join("rm2.gds"));
                assert_eq!(tally, Tally { passed: 1, failed: 1 });
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(runner.calls().len(), 2);
        assert!(!testing_dir.join("run/LVS_RES/rm3.log").exists());
        assert!(!testing_dir.join("run/LVS_RES/rm3.gds").exists());
        assert_eq!(
            reporter.errors(),
            vec![
                "rm2 testcase failed.".to_string(),
                format!("Please recheck {} file.", cases_dir.join("rm2.gds").display()),
            ]
        );
        assert!(reporter.contains("rm1 testcase passed"));
        assert!(!reporter.contains("NO. OF PASSED"));
        Ok(())
    }

    #[test]
    fn test_single_failure_counts_once() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let testing_dir = dir.path();
        write_case(&testing_dir.join("testcases"), "efuse", "efuse");

        let config = RegressionConfig::default();
        let runner = FakeRunner::new().with_log("efuse", FakeLog::Mismatch);
        let reporter = CapturingReporter::default();
        let err = harness(&config, testing_dir, &runner, &reporter)
            .lvs_check(&testing_dir.join("run"), "EFUSE DEVICES", EFUSE_DEVICES)
            .unwrap_err();

        assert!(matches!(
            err,
            RegressionError::TestCaseFailed {
                tally: Tally { passed: 0, failed: 1 },
                ..
            }
        ));
        Ok(())
    }

    #[test]
    fn test_missing_log_is_fatal() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let testing_dir = dir.path();
        write_case(&testing_dir.join("testcases"), "efuse", "efuse");

        let config = RegressionConfig::default();
        let runner = FakeRunner::new().with_log("efuse", FakeLog::Missing);
        let reporter = CapturingReporter::default();
        let err = harness(&config, testing_dir, &runner, &reporter)
            .lvs_check(&testing_dir.join("run"), "EFUSE DEVICES", EFUSE_DEVICES)
            .unwrap_err();

        assert!(matches!(err, RegressionError::MissingLog(_)));
        assert!(reporter.contains("Klayout LVS run failed"));
        Ok(())
    }

    #[test]
    fn test_launch_failure_is_fatal() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let testing_dir = dir.path();
        write_case(&testing_dir.join("testcases"), "rm1", "rm1");
        write_case(&testing_dir.join("testcases"), "rm2", "rm2");

        let config = RegressionConfig::default();
        let runner = FakeRunner::new().with_log("rm1", FakeLog::LaunchError);
        let reporter = CapturingReporter::default();
        let cases = [TestCase::new("rm1"), TestCase::new("rm2")];
        let err = harness(&config, testing_dir, &runner, &reporter)
            .lvs_check(&testing_dir.join("run"), "RES DEVICES", &cases)
            .unwrap_err();

        assert!(matches!(err, RegressionError::Invocation { .. }));
        assert!(reporter.contains("generated an exception"));
        assert_eq!(runner.calls().len(), 1);
        Ok(())
    }

    #[test]
    fn test_nonzero_exit_is_fatal() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let testing_dir = dir.path();
        write_case(&testing_dir.join("testcases"), "efuse", "efuse");

        let config = RegressionConfig::default();
        let runner = FakeRunner::new().with_log("efuse", FakeLog::Exit(1));
        let reporter = CapturingReporter::default();
        let err = harness(&config, testing_dir, &runner, &reporter)
            .lvs_check(&testing_dir.join("run"), "EFUSE DEVICES", EFUSE_DEVICES)
            .unwrap_err();

        assert!(matches!(
            err,
            RegressionError::ToolFailed { status: Some(1), .. }
        ));
        Ok(())
    }

    #[test]
    fn test_staging_errors_name_the_files() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let testing_dir = dir.path();
        write_case(&testing_dir.join("testcases"), "rm1", "rm1");

        let config = RegressionConfig::default();
        let runner = FakeRunner::new();
        let reporter = CapturingReporter::default();
        let h = harness(&config, testing_dir, &runner, &reporter);
        let plan = h.plan_case(&testing_dir.join("run/LVS_RES"), &TestCase::new("rm1"))?;
        std::fs::remove_file(&plan.layout_src)?;

        let err = h.stage_case(&plan).unwrap_err();
        match &err {
            RegressionError::Stage { src, dst, .. } => {
                assert_eq!(src, &plan.layout_src);
                assert_eq!(dst, &plan.staged_layout);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("rm1.gds"));
        Ok(())
    }

    #[test]
    fn test_rerun_overwrites_staged_files() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let testing_dir = dir.path();
        write_case(&testing_dir.join("testcases"), "efuse", "efuse");
        let output_dir = testing_dir.join("run");

        let config = RegressionConfig::default();
        let runner = FakeRunner::new();
        let reporter = CapturingReporter::default();
        let h = harness(&config, testing_dir, &runner, &reporter);
        h.lvs_check(&output_dir, "EFUSE DEVICES", EFUSE_DEVICES)?;

        std::fs::write(testing_dir.join("testcases/efuse.cdl"), "R0 a b $[r]")?;
        let tally = h.lvs_check(&output_dir, "EFUSE DEVICES", EFUSE_DEVICES)?;

        assert_eq!(tally.passed, 1);
        assert_eq!(
            std::fs::read_to_string(output_dir.join("LVS_EFUSE/efuse_generated.cdl"))?,
            "R0 a b r"
        );
        Ok(())
    }

    #[test]
    fn test_run_device() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let testing_dir = dir.path();
        write_case(&testing_dir.join("testcases"), "efuse", "efuse");

        let config = RegressionConfig::default();
        let runner = FakeRunner::new().with_version("KLayout 0.28.6\n");
        let reporter = CapturingReporter::default();
        let tally = harness(&config, testing_dir, &runner, &reporter)
            .run_device(&testing_dir.join("run"), "EFUSE")?;

        assert_eq!(tally, Tally { passed: 1, failed: 0 });
        assert!(reporter.contains("Running Global Foundries 180nm MCU LVS regression on EFUSE"));
        assert!(reporter.contains("LVS regression test completed successfully."));
        // Version check, then one LVS run.
        assert_eq!(runner.calls().len(), 2);
        Ok(())
    }

    #[test]
    fn test_run_device_rejects_unknown_device() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = RegressionConfig::default();
        let runner = FakeRunner::new().with_version("KLayout 0.28.6\n");
        let reporter = CapturingReporter::default();
        let err = harness(&config, dir.path(), &runner, &reporter)
            .run_device(&dir.path().join("run"), "efuse")
            .unwrap_err();

        assert!(matches!(err, RegressionError::UnknownDevice { .. }));
        assert!(runner.calls().is_empty());
        Ok(())
    }

    #[test]
    fn test_run_device_requires_recent_klayout() -> Result<()> {
        let dir = tempfile::tempdir()?;
        write_case(&dir.path().join("testcases"), "efuse", "efuse");
        let config = RegressionConfig::default();
        let runner = FakeRunner::new().with_version("KLayout 0.27.9\n");
        let reporter = CapturingReporter::default();
        let err = harness(&config, dir.path(), &runner, &reporter)
            .run_device(&dir.path().join("run"), "EFUSE")
            .unwrap_err();

        assert!(matches!(err, RegressionError::VersionTooOld { .. }));
        assert_eq!(runner.calls().len(), 1);
        assert!(!dir.path().join("run").exists());
        Ok(())
    }
}
