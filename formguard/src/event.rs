//! Form events and listener registry.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

/// Kind of a [`FormEvent`], used to subscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ValueChanged,
    ValidationFailed,
    Submitted,
}

/// Notification emitted while validating a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    /// A field was evaluated with a new value.
    ValueChanged { field: String, value: String },
    /// A field failed validation. `message` is its primary error.
    ValidationFailed { field: String, message: String },
    /// The form was submitted.
    Submitted { valid: bool },
}

impl FormEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ValueChanged { .. } => EventKind::ValueChanged,
            Self::ValidationFailed { .. } => EventKind::ValidationFailed,
            Self::Submitted { .. } => EventKind::Submitted,
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

impl SubscriptionId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

type Handler = Box<dyn FnMut(&FormEvent) + Send>;

struct Subscription {
    id: SubscriptionId,
    kind: EventKind,
    handler: Handler,
}

/// Observers of one form, grouped by event kind.
///
/// Handlers run synchronously, in subscription order.
#[derive(Default)]
pub struct Listeners {
    subscriptions: Vec<Subscription>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one event kind.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&FormEvent) + Send + 'static,
    {
        let id = SubscriptionId::new();
        self.subscriptions.push(Subscription {
            id,
            kind,
            handler: Box::new(handler),
        });
        id
    }

    /// Remove a handler. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Deliver an event to every handler subscribed to its kind.
    pub fn emit(&mut self, event: &FormEvent) {
        let kind = event.kind();
        for subscription in self.subscriptions.iter_mut().filter(|s| s.kind == kind) {
            (subscription.handler)(event);
        }
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
