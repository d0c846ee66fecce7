//! Registry of host-owned vehicle body handles.

use std::collections::HashMap;

use tracing::warn;

/// String-keyed store of body handles with one active entry.
///
/// The handles are opaque to the trainer; asset loading and visibility live
/// with the host. The first registered body becomes active automatically,
/// and switching never rebuilds a handle, it only moves the active key.
#[derive(Clone, Debug)]
pub struct SkinRegistry<H> {
    bodies: HashMap<String, H>,
    active: Option<String>,
}

impl<H> Default for SkinRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> SkinRegistry<H> {
    pub fn new() -> Self {
        Self {
            bodies: HashMap::new(),
            active: None,
        }
    }

    /// Register a body handle under `name`.
    ///
    /// Returns `true` when this registration made the body active (the
    /// registry was empty). Re-registering a name replaces its handle and
    /// keeps the active key unchanged.
    pub fn register(&mut self, name: impl Into<String>, handle: H) -> bool {
        let name = name.into();
        let becomes_active = self.active.is_none();
        self.bodies.insert(name.clone(), handle);
        if becomes_active {
            self.active = Some(name);
        }
        becomes_active
    }

    /// Switch the active body. Returns `false` (and leaves the active key
    /// alone) when `name` was never registered; switching to the already
    /// active body is a no-op returning `true`.
    pub fn switch_to(&mut self, name: &str) -> bool {
        if self.active.as_deref() == Some(name) {
            return true;
        }
        if !self.bodies.contains_key(name) {
            warn!(body = name, "unknown vehicle body requested");
            return false;
        }
        self.active = Some(name.to_string());
        true
    }

    /// Name of the active body, if any is registered.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Handle of the active body.
    pub fn active_handle(&self) -> Option<&H> {
        self.active.as_ref().and_then(|name| self.bodies.get(name))
    }

    /// Look up a handle by name.
    pub fn get(&self, name: &str) -> Option<&H> {
        self.bodies.get(name)
    }

    /// Registered body names, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
