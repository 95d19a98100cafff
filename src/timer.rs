//! One-shot timer bookkeeping for the event loop
//!
//! The application runs a single-threaded event loop, so timers are plain
//! data: arming a timer records a deadline, and the loop asks "what is due
//! now?" on every pass. Nothing here spawns threads or sleeps.
//!
//! # Design Principles
//! - **Explicit time**: callers pass `Instant`s in; the set never reads the
//!   clock itself, which keeps tests free of real waiting
//! - **Due means `deadline <= now`**: a timer armed for t+1500ms fires on the
//!   first poll at or after that instant, never before
//! - **Atomic cancellation**: `cancel_all` drops every pending timer in one
//!   call so no stale callback can fire afterwards

#![allow(dead_code)] // Full cancel/inspect API; callers currently arm one timer at a time

use std::time::Instant;

/// Opaque handle identifying one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
struct Entry<T> {
    id: TimerId,
    tag: T,
    deadline: Instant,
}

/// A set of pending one-shot timers, each carrying a caller-defined tag.
#[derive(Debug)]
pub struct TimerSet<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T: Copy> TimerSet<T> {
    /// Create an empty timer set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Arm a one-shot timer that becomes due at `deadline`.
    ///
    /// Returns a handle that can later be passed to [`TimerSet::cancel`].
    pub fn arm(&mut self, tag: T, deadline: Instant) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, tag, deadline });
        id
    }

    /// Cancel a single pending timer.
    ///
    /// Returns `true` if the timer was still pending, `false` if it had
    /// already fired or been cancelled. Cancelling twice is harmless.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Cancel every pending timer at once.
    ///
    /// Returns how many timers were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        dropped
    }

    /// Remove and return the earliest timer whose deadline has been reached.
    ///
    /// Returns the tag together with the deadline the timer was armed for,
    /// so callers can chain follow-up deadlines from the scheduled instant
    /// rather than from however late the poll happened to run. Timers that
    /// share a deadline come out in the order they were armed.
    pub fn pop_due(&mut self, now: Instant) -> Option<(T, Instant)> {
        let mut due_idx: Option<usize> = None;
        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.deadline > now {
                continue;
            }
            match due_idx {
                Some(best) if self.entries[best].deadline <= entry.deadline => {}
                _ => due_idx = Some(idx),
            }
        }
        let idx = due_idx?;
        let entry = self.entries.remove(idx);
        Some((entry.tag, entry.deadline))
    }

    /// The earliest pending deadline, if any timer is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no timers are pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Copy> Default for TimerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tag {
        A,
        B,
        C,
    }

    fn base() -> Instant {
        Instant::now()
    }

    // ============================================================================
    // Arming and inspection
    // ============================================================================

    #[test]
    fn test_new_set_is_empty() {
        let set: TimerSet<Tag> = TimerSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.next_deadline(), None);
    }

    #[test]
    fn test_arm_returns_distinct_ids() {
        let t0 = base();
        let mut set = TimerSet::new();
        let a = set.arm(Tag::A, t0 + Duration::from_millis(10));
        let b = set.arm(Tag::B, t0 + Duration::from_millis(20));
        assert_ne!(a, b, "each armed timer must get its own id");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_next_deadline_reports_earliest() {
        let t0 = base();
        let mut set = TimerSet::new();
        set.arm(Tag::A, t0 + Duration::from_millis(500));
        set.arm(Tag::B, t0 + Duration::from_millis(100));
        assert_eq!(set.next_deadline(), Some(t0 + Duration::from_millis(100)));
    }

    // ============================================================================
    // Due handling
    // ============================================================================

    #[test]
    fn test_pop_due_nothing_before_deadline() {
        let t0 = base();
        let mut set = TimerSet::new();
        set.arm(Tag::A, t0 + Duration::from_millis(100));
        assert_eq!(set.pop_due(t0 + Duration::from_millis(99)), None);
        assert_eq!(set.len(), 1, "early poll must not consume the timer");
    }

    #[test]
    fn test_pop_due_at_exact_deadline() {
        let t0 = base();
        let deadline = t0 + Duration::from_millis(100);
        let mut set = TimerSet::new();
        set.arm(Tag::A, deadline);
        assert_eq!(set.pop_due(deadline), Some((Tag::A, deadline)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_pop_due_returns_earliest_first() {
        let t0 = base();
        let mut set = TimerSet::new();
        set.arm(Tag::B, t0 + Duration::from_millis(200));
        set.arm(Tag::A, t0 + Duration::from_millis(100));
        set.arm(Tag::C, t0 + Duration::from_millis(300));

        let now = t0 + Duration::from_millis(400);
        let first = set.pop_due(now).map(|(tag, _)| tag);
        let second = set.pop_due(now).map(|(tag, _)| tag);
        let third = set.pop_due(now).map(|(tag, _)| tag);
        assert_eq!(first, Some(Tag::A));
        assert_eq!(second, Some(Tag::B));
        assert_eq!(third, Some(Tag::C));
        assert_eq!(set.pop_due(now), None);
    }

    #[test]
    fn test_pop_due_ties_in_arm_order() {
        let t0 = base();
        let deadline = t0 + Duration::from_millis(50);
        let mut set = TimerSet::new();
        set.arm(Tag::B, deadline);
        set.arm(Tag::A, deadline);

        assert_eq!(set.pop_due(deadline), Some((Tag::B, deadline)));
        assert_eq!(set.pop_due(deadline), Some((Tag::A, deadline)));
    }

    #[test]
    fn test_pop_due_reports_armed_deadline_not_poll_time() {
        let t0 = base();
        let deadline = t0 + Duration::from_millis(100);
        let mut set = TimerSet::new();
        set.arm(Tag::A, deadline);

        // Poll far past the deadline; the returned instant is still the
        // armed deadline so chained timers stay on the original grid.
        let (_, fired_at) = set.pop_due(t0 + Duration::from_millis(900)).unwrap();
        assert_eq!(fired_at, deadline);
    }

    // ============================================================================
    // Cancellation
    // ============================================================================

    #[test]
    fn test_cancel_removes_single_timer() {
        let t0 = base();
        let mut set = TimerSet::new();
        let a = set.arm(Tag::A, t0 + Duration::from_millis(100));
        let _b = set.arm(Tag::B, t0 + Duration::from_millis(200));

        assert!(set.cancel(a), "first cancel hits a pending timer");
        assert!(!set.cancel(a), "second cancel of the same id is a no-op");
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.pop_due(t0 + Duration::from_millis(300)),
            Some((Tag::B, t0 + Duration::from_millis(200)))
        );
    }

    #[test]
    fn test_cancel_all_clears_everything() {
        let t0 = base();
        let mut set = TimerSet::new();
        set.arm(Tag::A, t0 + Duration::from_millis(100));
        set.arm(Tag::B, t0 + Duration::from_millis(200));
        set.arm(Tag::C, t0 + Duration::from_millis(300));

        assert_eq!(set.cancel_all(), 3);
        assert!(set.is_empty());
        assert_eq!(set.pop_due(t0 + Duration::from_millis(999)), None);
        assert_eq!(set.cancel_all(), 0, "cancelling an empty set drops nothing");
    }
}
