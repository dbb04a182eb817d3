//! Timer utilities shared by widgets.
//!
//! Timers are never cancelled directly. Each (re)arm bumps a generation
//! counter and the sleeping task only acts if its generation is still the
//! latest one, which gives cancel-and-reschedule semantics on every platform.

use std::time::Duration;

/// Sleep without blocking the UI thread.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

pub fn duration_ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Generation counter backing one logical timer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimerSlot {
    generation: u64,
    armed: bool,
}

impl TimerSlot {
    /// Arm (or re-arm) the timer, invalidating any earlier ticket.
    pub fn arm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        self.generation
    }

    /// Invalidate the pending ticket, if any.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.armed = false;
    }

    /// Consume `ticket` if it is still the live one. Returns `true` exactly
    /// once per arm, and only for the latest arm.
    pub fn fire(&mut self, ticket: u64) -> bool {
        if self.armed && ticket == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rearm_supersedes_previous_ticket() {
        let mut slot = TimerSlot::default();
        let first = slot.arm();
        let second = slot.arm();
        assert!(!slot.fire(first));
        assert!(slot.fire(second));
        assert!(!slot.fire(second), "a ticket fires at most once");
    }

    #[test]
    fn cancel_drops_pending_ticket() {
        let mut slot = TimerSlot::default();
        let ticket = slot.arm();
        slot.cancel();
        assert!(!slot.fire(ticket));
        assert_eq!(slot, TimerSlot { generation: 2, armed: false });
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test(start_paused = true)]
    async fn sleep_waits_for_requested_duration() {
        let start = tokio::time::Instant::now();
        sleep_ms(650).await;
        assert!(start.elapsed() >= duration_ms(650));
    }
}
