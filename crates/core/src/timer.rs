//! Drop timer - the accumulating gravity clock
//!
//! Every tick adds a fixed quantum while the timer is active. Once the total
//! is strictly greater than the current drop interval the caller performs a
//! soft drop, which resets the accumulator. `None` is the inactive state used
//! while no game is running.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropTimer {
    accumulated: Option<u32>,
}

impl DropTimer {
    /// An inactive timer
    pub fn new() -> Self {
        Self { accumulated: None }
    }

    /// Activate from zero
    pub fn start(&mut self) {
        self.accumulated = Some(0);
    }

    /// Deactivate
    pub fn stop(&mut self) {
        self.accumulated = None;
    }

    /// Zero the accumulator if active
    pub fn reset(&mut self) {
        if self.accumulated.is_some() {
            self.accumulated = Some(0);
        }
    }

    pub fn is_active(&self) -> bool {
        self.accumulated.is_some()
    }

    pub fn accumulated(&self) -> Option<u32> {
        self.accumulated
    }

    /// Add `quantum`; true when the total now exceeds `threshold`
    pub fn advance(&mut self, quantum: u32, threshold: f64) -> bool {
        let Some(acc) = self.accumulated else {
            return false;
        };
        let acc = acc.saturating_add(quantum);
        self.accumulated = Some(acc);
        f64::from(acc) > threshold
    }
}
