//! Counter-with-deadline gate in front of the vault catalog.
//!
//! Three taps on the masthead inside a short window unlock the hidden
//! listings. Taking the clock as an argument keeps the gate testable.

use std::time::Duration;

use web_time::Instant;

const TAPS_TO_UNLOCK: u8 = 3;
const TAP_WINDOW: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, Default)]
pub struct TapGate {
    count: u8,
    deadline: Option<Instant>,
    unlocked: bool,
}

impl TapGate {
    pub fn unlocked(&self) -> bool {
        self.unlocked
    }

    /// Registers a tap at `now`. Returns `true` once the gate is open; it
    /// never relocks afterwards.
    pub fn tap_at(&mut self, now: Instant) -> bool {
        if self.unlocked {
            return true;
        }
        match self.deadline {
            Some(deadline) if now <= deadline => self.count += 1,
            // First tap, or the window lapsed; the sequence starts over.
            _ => {
                self.count = 1;
                self.deadline = Some(now + TAP_WINDOW);
            }
        }
        if self.count >= TAPS_TO_UNLOCK {
            self.unlocked = true;
        }
        self.unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_quick_taps_unlock() {
        let start = Instant::now();
        let mut gate = TapGate::default();
        assert!(!gate.tap_at(start));
        assert!(!gate.tap_at(start + Duration::from_millis(300)));
        assert!(gate.tap_at(start + Duration::from_millis(600)));
        assert!(gate.unlocked());
    }

    #[test]
    fn slow_taps_restart_the_sequence() {
        let start = Instant::now();
        let mut gate = TapGate::default();
        gate.tap_at(start);
        gate.tap_at(start + Duration::from_millis(500));
        // Past the window; this tap counts as a new first tap.
        assert!(!gate.tap_at(start + Duration::from_secs(5)));
        assert!(!gate.tap_at(start + Duration::from_millis(5200)));
        assert!(gate.tap_at(start + Duration::from_millis(5400)));
    }

    #[test]
    fn stays_unlocked_once_open() {
        let start = Instant::now();
        let mut gate = TapGate::default();
        for i in 0..3 {
            gate.tap_at(start + Duration::from_millis(100 * i));
        }
        assert!(gate.tap_at(start + Duration::from_secs(60)));
        assert!(gate.unlocked());
    }
}
