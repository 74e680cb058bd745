//! Cancelable one-shot deadline against simulation time.

/// A single pending action scheduled at an absolute virtual time.
///
/// Re-scheduling replaces the previous deadline; `fire` reports the deadline
/// exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DelayedAction {
    due: Option<f64>,
}

impl DelayedAction {
    #[inline]
    pub fn schedule(&mut self, now: f64, delay_secs: f32) {
        self.due = Some(now + f64::from(delay_secs));
    }

    #[inline]
    pub fn cancel(&mut self) {
        self.due = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Returns `true` once, on the first poll at or after the deadline.
    pub fn fire(&mut self, now: f64) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
