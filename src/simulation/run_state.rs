// simulation/run_state.rs
// Running/Paused gate for live recalculation

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

impl RunState {
    pub fn label(self) -> &'static str {
        match self {
            RunState::Running => "RUNNING",
            RunState::Paused => "PAUSED",
        }
    }
}

/// Decides whether an input change is pushed through to the display.
/// Pausing freezes the display, it never stops inputs from being stored.
#[derive(Debug, Clone, Default)]
pub struct LiveUpdateController {
    state: RunState,
}

impl LiveUpdateController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Returns true if the state changed.
    pub fn pause(&mut self) -> bool {
        let changed = self.state == RunState::Running;
        self.state = RunState::Paused;
        changed
    }

    /// Returns true if the state changed; the caller owes a recompute.
    pub fn resume(&mut self) -> bool {
        let changed = self.state == RunState::Paused;
        self.state = RunState::Running;
        changed
    }
}
