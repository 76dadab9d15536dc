//! Git command abstraction layer
//!
//! Every version-control side effect of git-bump is a `git <args…>`
//! invocation. This module puts those invocations behind the
//! [CommandRunner] trait so the tag composer and history lister can be
//! exercised without a real repository.
//!
//! # Overview
//!
//! - [runner::SystemRunner]: spawns the real `git` binary via `std::process`
//! - [mock::MockRunner]: records calls and replays scripted results for tests
//! - [repository::discover_workdir]: locates the work-tree root with `git2`
//!
//! # Usage
//!
//! ```rust
//! # use git_bump::git::CommandRunner;
//! # fn example<R: CommandRunner>(runner: &R) -> git_bump::Result<()> {
//! let output = runner.run(&["log", "--oneline", "--format=%h %s"])?;
//! println!("{}", output.stdout);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;
pub mod runner;

pub use mock::MockRunner;
pub use repository::discover_workdir;
pub use runner::SystemRunner;

use crate::error::Result;

/// Captured output of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Output with only stdout set
    pub fn stdout(stdout: impl Into<String>) -> Self {
        CommandOutput {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }
}

/// Executes git commands on behalf of the release workflow
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync`.
///
/// ## Error Handling
///
/// A command that cannot be spawned or exits unsuccessfully must be reported
/// as [crate::error::GitBumpError::SubprocessFailure] carrying the captured
/// error text. Callers decide whether a failure is fatal.
pub trait CommandRunner: Send + Sync {
    /// Run `git` with the given arguments and wait for it to finish
    ///
    /// # Arguments
    /// * `args` - Argument vector passed verbatim (no shell interpretation)
    ///
    /// # Returns
    /// * `Ok(CommandOutput)` - The command exited successfully
    /// * `Err` - The command could not be spawned or exited non-zero
    fn run(&self, args: &[&str]) -> Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        (**self).run(args)
    }
}
