//! Auth-change notifications.
//!
//! DELIVERY
//! ========
//! Synchronous, in registration order, to every subscriber registered at
//! the moment of the broadcast. Events are not queued: a subscriber added
//! after a broadcast never sees it.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::Arc;

/// Ephemeral "the session changed" notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthChange {
    SignedIn,
    SignedOut,
}

impl AuthChange {
    pub fn is_authenticated(self) -> bool {
        matches!(self, AuthChange::SignedIn)
    }
}

/// Handle returned by `subscribe`; pass it back to `unsubscribe`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
}

pub type AuthCallback = Arc<dyn Fn(AuthChange) + Send + Sync>;

/// Ordered subscriber registry.
#[derive(Default)]
pub struct Subscribers {
    entries: Vec<(u64, AuthCallback)>,
    next_id: u64,
}

impl Subscribers {
    pub fn add(&mut self, callback: AuthCallback) -> Subscription {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push((id, callback));
        Subscription { id }
    }

    pub fn remove(&mut self, subscription: &Subscription) {
        self.entries.retain(|(id, _)| *id != subscription.id);
    }

    /// Callbacks in registration order, detached from the registry so the
    /// caller can invoke them without holding any lock.
    pub fn snapshot(&self) -> Vec<AuthCallback> {
        self.entries.iter().map(|(_, cb)| Arc::clone(cb)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
