use crate::error::{GitBumpError, Result};
use crate::git::{CommandOutput, CommandRunner};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock runner for testing without spawning git
///
/// Every call is recorded. Results are replayed from a queue in call order;
/// once the queue is empty each call succeeds with empty output.
#[derive(Default)]
pub struct MockRunner {
    calls: Mutex<Vec<Vec<String>>>,
    responses: Mutex<VecDeque<Result<CommandOutput>>>,
}

impl MockRunner {
    /// Create a mock where every command succeeds with empty output
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful result for the next unanswered call
    pub fn push_ok(&self, output: CommandOutput) -> &Self {
        self.lock_responses().push_back(Ok(output));
        self
    }

    /// Queue a failure for the next unanswered call
    pub fn push_err(&self, message: impl Into<String>) -> &Self {
        let message = message.into();
        self.lock_responses()
            .push_back(Err(GitBumpError::SubprocessFailure {
                command: "git".to_string(),
                message,
            }));
        self
    }

    /// All recorded argument vectors, in call order
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of commands issued so far
    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<CommandOutput>>> {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(args.iter().map(|a| a.to_string()).collect());

        self.lock_responses()
            .pop_front()
            .unwrap_or_else(|| Ok(CommandOutput::default()))
    }
}
