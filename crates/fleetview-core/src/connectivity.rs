//! Connectivity monitoring
//!
//! The host environment delivers became-online / became-offline events over
//! a channel; the monitor keeps the last-event-wins boolean. The source is
//! injected as a capability rather than reached for globally, so tests and
//! non-browser hosts can drive it. Dropping the monitor drops its receiver,
//! which releases the subscription on every exit path.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// An environment connectivity transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectivityEvent {
    /// Host became reachable
    Online,
    /// Host lost reachability
    Offline,
}

impl ConnectivityEvent {
    /// The boolean this event carries
    pub fn is_online(self) -> bool {
        matches!(self, ConnectivityEvent::Online)
    }
}

/// Something that can deliver connectivity transitions.
///
/// Hosts bridge their environment signals (browser online/offline events,
/// netlink, reachability APIs) through this; the core never subscribes to
/// anything global itself.
pub trait ConnectivitySource {
    /// Open a subscription. The subscription lives as long as the returned
    /// receiver; dropping it releases the listener.
    fn subscribe(&self) -> UnboundedReceiver<ConnectivityEvent>;
}

/// Tracks the current online/offline state from an injected source.
///
/// Initial state is `true` (optimistic default pending the first observed
/// event). Purely event-driven: no retries, no polling of the environment.
#[derive(Debug)]
pub struct ConnectivityMonitor {
    online: bool,
    events: UnboundedReceiver<ConnectivityEvent>,
}

impl ConnectivityMonitor {
    /// Subscribe to a source and start tracking
    pub fn new(source: &dyn ConnectivitySource) -> Self {
        Self {
            online: true,
            events: source.subscribe(),
        }
    }

    /// Current connectivity state
    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Apply one event, last-event-wins.
    ///
    /// Returns whether the state changed; repeated identical events are
    /// no-ops.
    pub fn apply(&mut self, event: ConnectivityEvent) -> bool {
        let next = event.is_online();
        if next == self.online {
            return false;
        }
        tracing::debug!(online = next, "connectivity changed");
        self.online = next;
        true
    }

    /// Drain all pending events without blocking.
    ///
    /// Returns how many events were applied. This is the single-threaded
    /// tick a host calls from its event loop.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next event that actually changes the state.
    ///
    /// Returns the new state, or `None` once the source has hung up.
    pub async fn next_transition(&mut self) -> Option<bool> {
        while let Some(event) = self.events.recv().await {
            if self.apply(event) {
                return Some(self.online);
            }
        }
        None
    }
}

/// An in-process connectivity source driven by explicit `push` calls.
///
/// Cloning shares the subscriber list, so a clone works as a push handle.
/// Used by tests and by hosts that bridge real environment callbacks.
#[derive(Debug, Clone, Default)]
pub struct ManualConnectivity {
    senders: Arc<Mutex<Vec<UnboundedSender<ConnectivityEvent>>>>,
}

impl ManualConnectivity {
    /// New source with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to every live subscriber
    pub fn push(&self, event: ConnectivityEvent) {
        let mut senders = self.senders.lock().unwrap();
        senders.retain(|tx| tx.send(event).is_ok());
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        let mut senders = self.senders.lock().unwrap();
        senders.retain(|tx| !tx.is_closed());
        senders.len()
    }
}

impl ConnectivitySource for ManualConnectivity {
    fn subscribe(&self) -> UnboundedReceiver<ConnectivityEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.lock().unwrap().push(tx);
        rx
    }
}
