//! Injected key/value state shared between face scenes and the host.
//!
//! Faces never reach into global state; anything that needs persistent flags
//! (energy, solved puzzles, the current face) receives a [`StatePort`].

use std::collections::HashMap;
use std::fmt;

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Handle returned by [`StatePort::subscribe`].
    pub struct SubscriptionId;
}

/// A value stored under a state key.
#[derive(Debug, Clone, PartialEq)]
pub enum StateValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl StateValue {
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for StateValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for StateValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Listener invoked with the new value after a key changes.
pub type Listener = Box<dyn FnMut(&StateValue)>;

/// Key/value store with change notification.
pub trait StatePort {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<&StateValue>;

    /// Stores `value` under `key`, notifying subscribers if it changed.
    fn set(&mut self, key: &str, value: StateValue);

    /// Registers `listener` for changes to `key`.
    fn subscribe(&mut self, key: &str, listener: Listener) -> SubscriptionId;

    /// Removes a subscription. Returns `false` if it was already gone.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

struct Subscription {
    key: String,
    listener: Listener,
}

/// In-memory [`StatePort`]. Listeners run synchronously inside `set`.
#[derive(Default)]
pub struct MemoryState {
    values: HashMap<String, StateValue>,
    subscriptions: SlotMap<SubscriptionId, Subscription>,
}

impl MemoryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatePort for MemoryState {
    fn get(&self, key: &str) -> Option<&StateValue> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: StateValue) {
        if self.values.get(key) == Some(&value) {
            return;
        }
        for sub in self.subscriptions.values_mut() {
            if sub.key == key {
                (sub.listener)(&value);
            }
        }
        self.values.insert(key.to_owned(), value);
    }

    fn subscribe(&mut self, key: &str, listener: Listener) -> SubscriptionId {
        self.subscriptions.insert(Subscription {
            key: key.to_owned(),
            listener,
        })
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.remove(id).is_some()
    }
}

impl fmt::Debug for MemoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryState")
            .field("values", &self.values)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
