//! Frame-polled timers
//!
//! Timers do not run on their own thread. The owner polls the queue from its
//! frame update with the current time, and receives the payloads of every
//! timer whose deadline has passed, oldest deadline first.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled timer
    pub struct TimerId;
}

#[derive(Clone, Debug)]
struct Timer<T> {
    deadline_ms: u64,
    payload: T,
}

/// Deadline-ordered set of one-shot timers carrying a payload
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    timers: SlotMap<TimerId, Timer<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
        }
    }

    /// Schedule `payload` to fire once `delay_ms` has elapsed after `now_ms`
    pub fn schedule_after(&mut self, now_ms: u64, delay_ms: u64, payload: T) -> TimerId {
        let deadline_ms = now_ms.saturating_add(delay_ms);
        tracing::trace!("TimerQueue: scheduling timer for {}ms", deadline_ms);
        self.timers.insert(Timer {
            deadline_ms,
            payload,
        })
    }

    /// Remove and return every payload whose deadline is at or before `now_ms`
    pub fn poll(&mut self, now_ms: u64) -> Vec<T> {
        let mut due: Vec<(u64, TimerId)> = self
            .timers
            .iter()
            .filter(|(_, t)| t.deadline_ms <= now_ms)
            .map(|(id, t)| (t.deadline_ms, id))
            .collect();
        due.sort_by_key(|(deadline, _)| *deadline);

        due.into_iter()
            .filter_map(|(_, id)| self.timers.remove(id))
            .map(|t| t.payload)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_at_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(1_000, 250, "unmount");

        assert!(queue.poll(1_249).is_empty());
        assert!(!queue.is_empty());

        assert_eq!(queue.poll(1_250), vec!["unmount"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_poll_orders_by_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(0, 30, 3);
        queue.schedule_after(0, 10, 1);
        queue.schedule_after(0, 20, 2);

        assert_eq!(queue.poll(25), vec![1, 2]);
        assert_eq!(queue.poll(100), vec![3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_fires_only_once() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(0, 5, ());
        assert_eq!(queue.poll(10).len(), 1);
        assert!(queue.poll(20).is_empty());
        assert!(queue.is_empty());
    }
}
