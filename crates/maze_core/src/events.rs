//! Game-state events emitted across the core-to-host boundary
//!
//! The session pushes events into a queue during a tick and hands the
//! drained batch back to the host, which reacts however it likes
//! (counters, sounds, menus). Delivery is strictly in emission order.

/// Something the host should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A pickup was collected this tick
    ItemCollected {
        /// Identifier of the collected pickup
        id: u32,
    },
    /// All pickups were collected and the player reached the exit
    GameWon,
}

/// FIFO queue of pending session events
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<SessionEvent>,
}

impl EventQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for delivery at the end of the current tick
    pub fn send(&mut self, event: SessionEvent) {
        self.pending.push(event);
    }

    /// Take all pending events, leaving the queue empty
    pub fn drain(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Drop all pending events (used on state transitions)
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Number of events waiting for delivery
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no events are waiting
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_delivered_in_order() {
        let mut queue = EventQueue::new();
        queue.send(SessionEvent::ItemCollected { id: 2 });
        queue.send(SessionEvent::ItemCollected { id: 0 });
        queue.send(SessionEvent::GameWon);

        assert_eq!(
            queue.drain(),
            vec![
                SessionEvent::ItemCollected { id: 2 },
                SessionEvent::ItemCollected { id: 0 },
                SessionEvent::GameWon,
            ]
        );
    }

    #[test]
    fn test_drain_empties_the_queue() {
        let mut queue = EventQueue::new();
        queue.send(SessionEvent::GameWon);
        assert_eq!(queue.len(), 1);

        let _ = queue.drain();
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_clear_drops_pending_events() {
        let mut queue = EventQueue::new();
        queue.send(SessionEvent::ItemCollected { id: 1 });
        queue.clear();
        assert!(queue.is_empty());
    }
}
