use super::event::{EntityEvent, SubscriptionFilter};
use log::debug;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

struct Subscriber {
    filter: SubscriptionFilter,
    sender: Sender<EntityEvent>,
}

/// Subscriber registry and publisher.
#[derive(Default)]
pub struct EventBus {
    subscribers: Mutex<Vec<Subscriber>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber; events published from now on are delivered.
    pub fn subscribe(&self, filter: SubscriptionFilter) -> Subscription {
        let (sender, receiver) = mpsc::channel();
        self.lock().push(Subscriber { filter, sender });
        Subscription { filter, receiver }
    }

    /// Delivers `event` to every matching subscriber.
    ///
    /// Returns how many subscribers received it.
    pub fn publish(&self, event: &EntityEvent) -> usize {
        let mut subscribers = self.lock();
        let before = subscribers.len();
        let mut delivered = 0;
        subscribers.retain(|subscriber| {
            if !subscriber.filter.matches(event) {
                return true;
            }
            match subscriber.sender.send(event.clone()) {
                Ok(()) => {
                    delivered += 1;
                    true
                }
                Err(_) => false,
            }
        });
        debug!(
            "event=notify_publish module=notify status=ok kind={} delivered={} pruned={}",
            event.kind_label(),
            delivered,
            before - subscribers.len()
        );
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().len()
    }

    // Subscriber bookkeeping stays usable after a panic elsewhere.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Subscriber>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Receiving end of one subscription. Dropping it unsubscribes.
pub struct Subscription {
    filter: SubscriptionFilter,
    receiver: Receiver<EntityEvent>,
}

impl Subscription {
    pub fn filter(&self) -> SubscriptionFilter {
        self.filter
    }

    /// Returns the next queued event without blocking.
    pub fn try_next(&self) -> Option<EntityEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Waits up to `timeout` for the next event.
    pub fn next_timeout(&self, timeout: Duration) -> Option<EntityEvent> {
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Drains every queued event.
    pub fn drain(&self) -> Vec<EntityEvent> {
        self.receiver.try_iter().collect()
    }
}
