//! Stopwatch module - elapsed time for the HUD
//!
//! Counts whole seconds while running. Driven by the same fixed-timestep
//! tick as the rest of the round; fractional milliseconds carry over between
//! ticks so no time is lost to rounding.

use crate::types::TIMER_TICK_MS;

/// Second-granularity stopwatch, started on the first move and stopped on
/// the winning match.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    running: bool,
    carry_ms: u32,
    seconds: u32,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Begin counting. Starting an already-running stopwatch is a no-op, so
    /// there is never more than one live tick stream.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halt counting without resetting the elapsed value.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and zero the counter; the display returns to "0:00".
    pub fn reset(&mut self) {
        self.running = false;
        self.carry_ms = 0;
        self.seconds = 0;
    }

    /// Accumulate elapsed time. Returns `true` when the displayed second
    /// count changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.running {
            return false;
        }

        self.carry_ms += elapsed_ms;
        let mut changed = false;
        while self.carry_ms >= TIMER_TICK_MS {
            self.carry_ms -= TIMER_TICK_MS;
            self.seconds += 1;
            changed = true;
        }
        changed
    }

    /// Format as `m:ss` (seconds zero-padded to two digits, minutes
    /// unpadded).
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stopwatch_reads_zero() {
        let sw = Stopwatch::new();
        assert!(!sw.is_running());
        assert_eq!(sw.seconds(), 0);
        assert_eq!(sw.display(), "0:00");
    }

    #[test]
    fn test_tick_while_stopped_does_nothing() {
        let mut sw = Stopwatch::new();
        assert!(!sw.tick(5000));
        assert_eq!(sw.seconds(), 0);
    }

    #[test]
    fn test_seconds_accumulate_across_ticks() {
        let mut sw = Stopwatch::new();
        sw.start();

        assert!(!sw.tick(999));
        assert_eq!(sw.seconds(), 0);

        // The millisecond that completes the first second.
        assert!(sw.tick(1));
        assert_eq!(sw.seconds(), 1);
    }

    #[test]
    fn test_large_tick_yields_multiple_seconds() {
        let mut sw = Stopwatch::new();
        sw.start();

        assert!(sw.tick(2500));
        assert_eq!(sw.seconds(), 2);

        // The 500ms remainder carries into the next second.
        assert!(sw.tick(500));
        assert_eq!(sw.seconds(), 3);
    }

    #[test]
    fn test_stop_freezes_and_start_resumes() {
        let mut sw = Stopwatch::new();
        sw.start();
        sw.tick(3000);
        sw.stop();

        assert!(!sw.tick(3000));
        assert_eq!(sw.seconds(), 3);

        sw.start();
        sw.tick(1000);
        assert_eq!(sw.seconds(), 4);
    }

    #[test]
    fn test_reset_zeroes_counter_and_carry() {
        let mut sw = Stopwatch::new();
        sw.start();
        sw.tick(1900);
        sw.reset();

        assert!(!sw.is_running());
        assert_eq!(sw.display(), "0:00");

        // Carry must not survive a reset.
        sw.start();
        sw.tick(100);
        assert_eq!(sw.seconds(), 0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut sw = Stopwatch::new();
        sw.start();
        sw.start();
        sw.tick(1000);
        assert_eq!(sw.seconds(), 1);
    }

    #[test]
    fn test_display_padding() {
        let mut sw = Stopwatch::new();
        sw.start();

        sw.tick(5_000);
        assert_eq!(sw.display(), "0:05");

        sw.tick(54_000);
        assert_eq!(sw.display(), "0:59");

        sw.tick(1_000);
        assert_eq!(sw.display(), "1:00");

        sw.tick(5_000);
        assert_eq!(sw.display(), "1:05");

        // Minutes are never padded.
        sw.tick(535_000);
        assert_eq!(sw.display(), "10:00");
    }
}
