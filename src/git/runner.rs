use crate::error::{GitBumpError, Result};
use crate::git::{CommandOutput, CommandRunner};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Default executable name
pub const DEFAULT_PROGRAM: &str = "git";

/// Runs the real git executable in a working directory
#[derive(Debug, Clone)]
pub struct SystemRunner {
    program: String,
    workdir: PathBuf,
}

impl SystemRunner {
    /// Create a runner that invokes `git` inside `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        SystemRunner {
            program: DEFAULT_PROGRAM.to_string(),
            workdir: workdir.into(),
        }
    }

    /// Use a different executable (e.g., an absolute path to git)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Directory commands are executed in
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        debug!(program = %self.program, ?args, "running command");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| {
                GitBumpError::subprocess(&self.program, args, format!("failed to spawn: {}", e))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let reason = if stderr.trim().is_empty() {
                format!("exit code {}", output.status.code().unwrap_or(-1))
            } else {
                stderr.trim().to_string()
            };
            return Err(GitBumpError::subprocess(&self.program, args, reason));
        }

        Ok(CommandOutput { stdout, stderr })
    }
}
