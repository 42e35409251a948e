use std::fs::File;
use std::path::PathBuf;
use std::process::{Command, Stdio};

pub mod klayout;

/// An external command to run to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory of the child process.
    pub cwd: Option<PathBuf>,
    /// If set, stdout and stderr are both redirected into this file
    /// instead of being captured.
    pub log: Option<PathBuf>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Renders the command the way a shell user would type it.
    pub fn display(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        if let Some(log) = &self.log {
            line.push_str(&format!(" > {} 2>&1", log.display()));
        }
        line
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code; `None` if the process was killed by a signal.
    pub code: Option<i32>,
    /// Captured stdout. Empty when the command was run with a log file.
    pub stdout: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external programs, blocking until they exit.
pub trait ProcessRunner {
    fn run(&self, cmd: &ToolCommand) -> std::io::Result<ToolOutput>;
}

/// Spawns real child processes.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, cmd: &ToolCommand) -> std::io::Result<ToolOutput> {
        let mut command = Command::new(&cmd.program);
        command.args(&cmd.args).stdin(Stdio::null());
        if let Some(cwd) = &cmd.cwd {
            command.current_dir(cwd);
        }

        log::debug!("running `{}`", cmd.display());

        match &cmd.log {
            Some(log_path) => {
                let out_file = File::create(log_path)?;
                let err_file = out_file.try_clone()?;
                let status = command.stdout(out_file).stderr(err_file).status()?;
                Ok(ToolOutput {
                    code: status.code(),
                    stdout: String::new(),
                })
            }
            None => {
                let output = command.output()?;
                Ok(ToolOutput {
                    code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                })
            }
        }
    }
}
