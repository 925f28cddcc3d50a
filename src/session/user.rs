//! Current-user state that follows the session lifecycle

use crate::session::events::{SessionEvent, SessionEvents, SubscriptionId};
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// Holder of the logged-in user's profile
///
/// The profile is dropped as soon as a [`SessionEvent::Logout`] is published
/// on the registry the holder was created with. The subscription is removed
/// when the holder is dropped.
pub struct CurrentUser {
    profile: Arc<RwLock<Option<Value>>>,
    events: SessionEvents,
    subscription: SubscriptionId,
}

impl CurrentUser {
    /// Creates an empty holder subscribed to `events`
    #[must_use]
    pub fn new(events: &SessionEvents) -> Self {
        let profile: Arc<RwLock<Option<Value>>> = Arc::new(RwLock::new(None));
        let slot = Arc::clone(&profile);
        let subscription = events.subscribe(move |event| match event {
            SessionEvent::Logout => {
                info!("Session ended, clearing current user");
                *slot.write().unwrap_or_else(PoisonError::into_inner) = None;
            }
        });
        Self {
            profile,
            events: events.clone(),
            subscription,
        }
    }

    /// Replaces the stored profile
    pub fn set(&self, profile: Value) {
        *self.profile.write().unwrap_or_else(PoisonError::into_inner) = Some(profile);
    }

    /// Merges the fields of `update` into the stored profile
    ///
    /// Non-object updates replace the profile outright.
    pub fn update(&self, update: Value) {
        let mut guard = self.profile.write().unwrap_or_else(PoisonError::into_inner);
        if let (Some(Value::Object(current)), Value::Object(fields)) = (guard.as_mut(), &update) {
            current.extend(fields.clone());
            return;
        }
        *guard = Some(update);
    }

    /// A copy of the stored profile
    #[must_use]
    pub fn get(&self) -> Option<Value> {
        self.profile
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a profile is stored
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.profile
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Verification level reported by the profile
    ///
    /// 0 when nobody is logged in, 1 when the profile does not say otherwise.
    #[must_use]
    pub fn verification_level(&self) -> u8 {
        match self
            .profile
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            None => 0,
            Some(profile) => profile
                .get("verification_level")
                .and_then(Value::as_u64)
                .and_then(|level| u8::try_from(level).ok())
                .filter(|level| *level > 0)
                .unwrap_or(1),
        }
    }

    /// Drops the stored profile
    pub fn clear(&self) {
        *self.profile.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl Drop for CurrentUser {
    fn drop(&mut self) {
        self.events.unsubscribe(self.subscription);
    }
}
