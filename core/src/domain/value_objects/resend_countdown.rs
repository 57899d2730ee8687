//! Resend cooldown counter.

use serde::{Deserialize, Serialize};

/// Seconds a user must wait between consecutive code-delivery requests
pub const RESEND_COOLDOWN_SECONDS: u32 = 60;

/// Countdown gating the resend action
///
/// The counter only ever moves two ways: `tick` decrements by exactly one
/// (saturating at zero) and `reset` jumps back to
/// [`RESEND_COOLDOWN_SECONDS`] after a successful send. Resend is permitted
/// only when the counter reads zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendCountdown {
    seconds: u32,
}

impl ResendCountdown {
    /// A countdown that has already elapsed (resend allowed)
    pub fn idle() -> Self {
        Self { seconds: 0 }
    }

    /// Remaining seconds until resend is allowed
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Whether the cooldown has elapsed and resend is permitted
    pub fn is_elapsed(&self) -> bool {
        self.seconds == 0
    }

    /// Restarts the cooldown after a successful send or resend
    pub fn reset(&mut self) {
        self.reset_to(RESEND_COOLDOWN_SECONDS);
    }

    /// Restarts the cooldown with a configured interval
    pub fn reset_to(&mut self, seconds: u32) {
        self.seconds = seconds;
    }

    /// Advances the countdown by one second
    ///
    /// Ticking an elapsed countdown is a no-op; the counter never goes
    /// negative. Returns the remaining seconds.
    pub fn tick(&mut self) -> u32 {
        self.seconds = self.seconds.saturating_sub(1);
        self.seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_allows_resend() {
        let countdown = ResendCountdown::idle();
        assert!(countdown.is_elapsed());
        assert_eq!(countdown.seconds(), 0);
    }

    #[test]
    fn test_reset_sets_full_cooldown() {
        let mut countdown = ResendCountdown::idle();
        countdown.reset();
        assert_eq!(countdown.seconds(), RESEND_COOLDOWN_SECONDS);
        assert!(!countdown.is_elapsed());
    }

    #[test]
    fn test_tick_decrements_by_one() {
        let mut countdown = ResendCountdown::idle();
        countdown.reset();
        assert_eq!(countdown.tick(), RESEND_COOLDOWN_SECONDS - 1);
        assert_eq!(countdown.tick(), RESEND_COOLDOWN_SECONDS - 2);
    }

    #[test]
    fn test_tick_at_zero_is_idempotent() {
        let mut countdown = ResendCountdown::idle();
        assert_eq!(countdown.tick(), 0);
        assert_eq!(countdown.tick(), 0);
        assert!(countdown.is_elapsed());
    }

    #[test]
    fn test_reset_from_partial_countdown() {
        let mut countdown = ResendCountdown::idle();
        countdown.reset();
        for _ in 0..17 {
            countdown.tick();
        }
        countdown.reset();
        // Reset always lands on exactly the full cooldown
        assert_eq!(countdown.seconds(), RESEND_COOLDOWN_SECONDS);
    }

    #[test]
    fn test_reset_to_custom_interval() {
        let mut countdown = ResendCountdown::idle();
        countdown.reset_to(5);
        assert_eq!(countdown.seconds(), 5);
        for _ in 0..5 {
            countdown.tick();
        }
        assert!(countdown.is_elapsed());
    }

    #[test]
    fn test_full_cooldown_elapses() {
        let mut countdown = ResendCountdown::idle();
        countdown.reset();
        for _ in 0..RESEND_COOLDOWN_SECONDS {
            countdown.tick();
        }
        assert!(countdown.is_elapsed());
    }
}
