use std::time::Duration;

use tokio::time::Instant;

/// What a session timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Swap the faded-out slot of `column` to the photo of `round`.
    SwapPhoto { column: usize, round: usize },
    RevealName { column: usize },
    RevealAge { column: usize },
    /// Step the cursor forward.
    Advance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    seq: u64,
    pub due: Instant,
    pub action: TimerAction,
}

/// Pending timers of one slideshow session.
///
/// Cancelling drops the records outright, so a superseded timer can never be
/// handed out by [`TimerSet::take_due`].
#[derive(Debug, Default)]
pub struct TimerSet {
    next_seq: u64,
    pending: Vec<PendingTimer>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, from: Instant, delay: Duration, action: TimerAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingTimer {
            seq,
            due: from + delay,
            action,
        });
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn pending(&self) -> impl Iterator<Item = &PendingTimer> {
        self.pending.iter()
    }

    /// Earliest deadline, if anything is pending.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|t| t.due).min()
    }

    /// Remove and return the earliest timer due at or before `now`. Timers
    /// with the same deadline come out in scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Option<PendingTimer> {
        let pos = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(pos, _)| pos)?;
        Some(self.pending.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_due_orders_by_deadline_then_scheduling() {
        let t0 = Instant::now();
        let mut timers = TimerSet::new();
        timers.schedule(t0, Duration::from_secs(9), TimerAction::Advance);
        timers.schedule(t0, Duration::from_secs(5), TimerAction::RevealName { column: 0 });
        timers.schedule(t0, Duration::from_secs(5), TimerAction::RevealAge { column: 0 });

        assert_eq!(timers.next_due(), Some(t0 + Duration::from_secs(5)));
        assert!(timers.take_due(t0 + Duration::from_secs(4)).is_none());

        let now = t0 + Duration::from_secs(10);
        let order: Vec<_> = std::iter::from_fn(|| timers.take_due(now))
            .map(|t| t.action)
            .collect();
        assert_eq!(
            order,
            vec![
                TimerAction::RevealName { column: 0 },
                TimerAction::RevealAge { column: 0 },
                TimerAction::Advance,
            ]
        );
        assert!(timers.is_empty());
    }

    #[test]
    fn cancel_all_drops_everything() {
        let t0 = Instant::now();
        let mut timers = TimerSet::new();
        timers.schedule(t0, Duration::from_millis(800), TimerAction::Advance);
        timers.schedule(t0, Duration::from_millis(900), TimerAction::Advance);
        assert_eq!(timers.len(), 2);
        timers.cancel_all();
        assert!(timers.next_due().is_none());
        assert!(timers.take_due(t0 + Duration::from_secs(60)).is_none());
    }
}
