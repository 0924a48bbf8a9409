//! Ordered arbitration of proximity-gated interactions.
//!
//! Every interactable (a travel edge, an NPC, a prop) registers a predicate,
//! a callback and an optional hint. Each frame the first entry whose predicate
//! holds becomes the single active entry; it supplies the HUD hint and is the
//! only one the activate input reaches. Registration order is the priority.
//! Callers wanting nearest-first behavior must register accordingly or fold
//! several candidates into one predicate.

/// Per-frame test deciding whether an entry is usable.
pub type Predicate<P> = Box<dyn Fn(&P) -> bool>;

/// Action run when the active entry is activated.
pub type Callback<P, H> = Box<dyn FnMut(&P, &mut H)>;

struct Entry<P, H: ?Sized> {
    predicate: Predicate<P>,
    callback: Callback<P, H>,
    hint: Option<String>,
}

/// Append-only, order-preserving list of interactions with one active entry.
///
/// `P` is the probe describing the current frame (player position and
/// whatever else predicates need); `H` is the host the callbacks drive.
pub struct InteractionRegistry<P, H: ?Sized> {
    entries: Vec<Entry<P, H>>,
    active: Option<usize>,
}

impl<P, H: ?Sized> InteractionRegistry<P, H> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            active: None,
        }
    }

    /// Appends an entry and returns its position. Earlier entries always take
    /// priority over later ones.
    pub fn register(
        &mut self,
        predicate: impl Fn(&P) -> bool + 'static,
        callback: impl FnMut(&P, &mut H) + 'static,
        hint: Option<String>,
    ) -> usize {
        self.entries.push(Entry {
            predicate: Box::new(predicate),
            callback: Box::new(callback),
            hint,
        });
        self.entries.len() - 1
    }

    /// Re-evaluates the predicates in registration order and selects the
    /// first that holds.
    pub fn refresh(&mut self, probe: &P) -> Option<usize> {
        self.active = self.entries.iter().position(|e| (e.predicate)(probe));
        self.active
    }

    /// The entry selected by the last [`refresh`](Self::refresh).
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Runs the active entry's callback. Returns `false` when nothing is
    /// active.
    pub fn activate(&mut self, probe: &P, host: &mut H) -> bool {
        let Some(entry) = self.active.and_then(|i| self.entries.get_mut(i)) else {
            return false;
        };
        (entry.callback)(probe, host);
        true
    }

    /// Hint text of the active entry, or `default` when none is active or the
    /// active entry has no hint.
    #[must_use]
    pub fn hint<'a>(&'a self, default: &'a str) -> &'a str {
        self.active
            .and_then(|i| self.entries.get(i))
            .and_then(|e| e.hint.as_deref())
            .unwrap_or(default)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P, H: ?Sized> Default for InteractionRegistry<P, H> {
    fn default() -> Self {
        Self::new()
    }
}
