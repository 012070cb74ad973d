//! Session state shared by the three CLI modes.

use nestkv_executor::{Command, Executor, Output, Result};

/// The executor plus session-level policy flags.
pub struct SessionState {
    executor: Executor,
    /// Skip confirmation prompts for destructive commands.
    pub assume_yes: bool,
}

impl SessionState {
    /// Wrap an executor with session policy.
    pub fn new(executor: Executor, assume_yes: bool) -> Self {
        Self {
            executor,
            assume_yes,
        }
    }

    /// Execute one command.
    pub fn execute(&self, command: Command) -> Result<Output> {
        self.executor.execute(command)
    }

    /// Current transaction nesting depth (1 = no open transaction).
    pub fn depth(&self) -> usize {
        self.executor.depth()
    }
}
