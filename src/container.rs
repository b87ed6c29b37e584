//! The parallel-state container.

use crate::error::{QuantumError, Result};
use crate::factory::Factory;
use indexmap::IndexMap;
use std::marker::PhantomData;
use tracing::trace;

/// A container for parallel, lazily-created states of a value.
///
/// States are materialized on first selection by the caller-supplied
/// factory, kept in creation order, and addressed by string identifier.
/// Exactly one state is "current" once any state exists; [`mutate`] and
/// [`current_mut`] target it. [`fork`] clones an existing state under a
/// new identifier, and [`for_each`] visits every state without moving the
/// cursor.
///
/// The cursor is stored as an identifier and resolved through the map on
/// every access, so a handle obtained after selection always aliases the
/// state's actual storage slot.
///
/// ```
/// use quantum::Quantum;
///
/// #[derive(Clone, Default)]
/// struct Settings {
///     verbosity: u8,
/// }
///
/// # fn main() -> quantum::Result<()> {
/// let mut profiles = Quantum::new(Settings::default);
/// profiles
///     .select("dev")?
///     .mutate(|s| s.verbosity = 3)?
///     .fork("ci", "dev")?
///     .mutate(|s| s.verbosity = 1)?;
///
/// assert_eq!(profiles.select("dev")?.current()?.verbosity, 3);
/// assert_eq!(profiles.select("ci")?.current()?.verbosity, 1);
/// # Ok(())
/// # }
/// ```
///
/// [`mutate`]: Quantum::mutate
/// [`current_mut`]: Quantum::current_mut
/// [`fork`]: Quantum::fork
/// [`for_each`]: Quantum::for_each
pub struct Quantum<T, F, Args = ()> {
    /// Produces new state values on first selection. Never replaced.
    factory: F,

    /// Identifier to state value, in creation order.
    slots: IndexMap<String, T>,

    /// Identifier of the most recently selected state.
    current: Option<String>,

    _args: PhantomData<fn(Args)>,
}

impl<T, F, Args> Quantum<T, F, Args>
where
    F: Factory<T, Args>,
{
    /// Create a container with no states.
    ///
    /// The factory is stored once and invoked each time an unknown
    /// identifier is selected.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            slots: IndexMap::new(),
            current: None,
            _args: PhantomData,
        }
    }

    /// Switch to the state named `id`, creating it first if necessary.
    ///
    /// An unknown identifier invokes the factory with `args`; a known one
    /// reuses the stored value verbatim and ignores `args`. Either way the
    /// cursor ends up on `id`.
    ///
    /// If the factory fails, nothing is inserted, the cursor does not
    /// move, and the error surfaces as [`QuantumError::Factory`].
    pub fn select_with(&mut self, id: impl Into<String>, args: Args) -> Result<&mut Self> {
        let id = id.into();

        if !self.slots.contains_key(&id) {
            let value = self
                .factory
                .produce(args)
                .map_err(|source| QuantumError::Factory {
                    id: id.clone(),
                    source,
                })?;
            trace!(state = %id, "created state");
            self.slots.insert(id.clone(), value);
        }

        self.current = Some(id);
        Ok(self)
    }

    /// Create a new state as an independent copy of an existing one, then
    /// select it.
    ///
    /// `Clone` is the deep-copy capability: composite payloads supply a
    /// structural clone, elementary payloads already copy by value.
    /// The source state is never touched.
    pub fn fork(&mut self, new_id: impl Into<String>, base_id: &str) -> Result<&mut Self>
    where
        T: Clone,
    {
        let new_id = new_id.into();

        if self.slots.contains_key(&new_id) {
            return Err(QuantumError::DuplicateState(new_id));
        }

        let copy = self
            .slots
            .get(base_id)
            .ok_or_else(|| QuantumError::UnknownBaseState(base_id.to_string()))?
            .clone();

        trace!(state = %new_id, base = %base_id, "forked state");
        self.slots.insert(new_id.clone(), copy);
        self.current = Some(new_id);
        Ok(self)
    }

    /// Run a callback against the currently selected state's storage.
    ///
    /// Side effects persist: every later selection of the same identifier
    /// observes them.
    pub fn mutate(&mut self, f: impl FnOnce(&mut T)) -> Result<&mut Self> {
        let id = self.current.as_ref().ok_or(QuantumError::NoCurrentState)?;
        let slot = self
            .slots
            .get_mut(id)
            .expect("current identifier always names a stored state");
        f(slot);
        Ok(self)
    }

    /// Visit every state in creation order with a mutable handle to its
    /// actual storage.
    ///
    /// Identifiers are lent as `&str`, so the callback cannot rename a
    /// key, and the cursor is left wherever it was before the traversal.
    pub fn for_each(&mut self, mut f: impl FnMut(&str, &mut T)) -> &mut Self {
        for (id, state) in self.slots.iter_mut() {
            f(id, state);
        }
        self
    }

    /// Shared handle to the currently selected state.
    pub fn current(&self) -> Result<&T> {
        let id = self.current.as_ref().ok_or(QuantumError::Empty)?;
        Ok(self
            .slots
            .get(id)
            .expect("current identifier always names a stored state"))
    }

    /// Mutable handle to the currently selected state's storage slot.
    ///
    /// Both in-place mutation and whole-value reassignment through the
    /// handle persist in the slot.
    pub fn current_mut(&mut self) -> Result<&mut T> {
        let id = self.current.as_ref().ok_or(QuantumError::Empty)?;
        Ok(self
            .slots
            .get_mut(id)
            .expect("current identifier always names a stored state"))
    }

    /// Identifier of the currently selected state, if any state exists.
    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// All known identifiers, in creation order.
    pub fn identifiers(&self) -> Vec<&str> {
        self.slots.keys().map(String::as_str).collect()
    }

    /// Whether `id` names a known state.
    pub fn has(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no state has ever been created.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read-only traversal in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.slots.iter().map(|(id, state)| (id.as_str(), state))
    }
}

impl<T: std::fmt::Debug, F, Args> std::fmt::Debug for Quantum<T, F, Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Quantum")
            .field("slots", &self.slots)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl<T, F> Quantum<T, F, ()>
where
    F: Factory<T, ()>,
{
    /// [`select_with`](Quantum::select_with) for zero-argument factories.
    pub fn select(&mut self, id: impl Into<String>) -> Result<&mut Self> {
        self.select_with(id, ())
    }
}
