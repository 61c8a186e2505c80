/// Run/pause/stop switch for the frame loop.  The loop is single-threaded,
/// so plain flags are enough.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopControl {
    running: bool,
    paused: bool,
}

impl Default for LoopControl {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopControl {
    pub fn new() -> Self {
        LoopControl {
            running: true,
            paused: false,
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Ends the loop after the current frame.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether this frame should run the update step.  Drawing continues
    /// while paused.
    pub fn should_update(&self) -> bool {
        self.running && !self.paused
    }
}
