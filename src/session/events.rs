/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Process-wide session signals
//!
//! [`SessionEvents`] is a small observer registry. Handlers are called
//! synchronously, in subscription order, on the task that publishes the
//! event. Subscriptions are identified by a [`SubscriptionId`] so they can be
//! removed deterministically.

use crate::constants::LOGOUT_EVENT;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Signals broadcast by the session layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEvent {
    /// The session ended, either because the backend rejected the token or
    /// because the user logged out
    Logout,
}

impl SessionEvent {
    /// Wire name of the signal
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::Logout => LOGOUT_EVENT,
        }
    }
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier returned by [`SessionEvents::subscribe`]
pub type SubscriptionId = u64;

type Handler = Arc<dyn Fn(SessionEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: AtomicU64,
    handlers: RwLock<Vec<(SubscriptionId, Handler)>>,
}

static GLOBAL_EVENTS: Lazy<SessionEvents> = Lazy::new(SessionEvents::new);

/// Observer registry for [`SessionEvent`]s
///
/// Clones share the same set of subscribers.
#[derive(Clone, Default)]
pub struct SessionEvents {
    registry: Arc<Registry>,
}

impl SessionEvents {
    /// Creates an isolated registry with no subscribers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry used by clients that are not given one
    #[must_use]
    pub fn global() -> Self {
        GLOBAL_EVENTS.clone()
    }

    /// Registers `handler` and returns the id needed to remove it
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(SessionEvent) + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.registry
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(handler)));
        debug!("Session subscriber {} registered", id);
        id
    }

    /// Removes a subscription. Returns `false` if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self
            .registry
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = handlers.len();
        handlers.retain(|(sid, _)| *sid != id);
        before != handlers.len()
    }

    /// Delivers `event` to every current subscriber and returns how many were notified
    ///
    /// The subscriber list is snapshotted first, so handlers may subscribe or
    /// unsubscribe while the event is being delivered.
    pub fn publish(&self, event: SessionEvent) -> usize {
        let snapshot: Vec<Handler> = self
            .registry
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        debug!("Publishing {} to {} subscribers", event, snapshot.len());
        for handler in &snapshot {
            handler(event);
        }
        snapshot.len()
    }

    /// Number of registered subscribers
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl fmt::Debug for SessionEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionEvents")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
