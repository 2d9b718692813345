use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use crate::{Compute, State};

/// An owned copy of the states and computes a command may read.
///
/// Snapshots are taken on the UI thread at dispatch time and moved into the
/// command's future, so command code never touches live context storage.
#[derive(Default)]
pub struct CommandSnapshot {
    states: BTreeMap<TypeId, Box<dyn Any + Send>>,
    computes: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub(crate) fn insert_state(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.states.insert(id, value);
    }

    pub(crate) fn insert_compute(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.computes.insert(id, value);
    }

    /// Cloned state of type `T`.
    ///
    /// # Panics
    /// Panics when `T` was not registered or does not support snapshots;
    /// commands declare their inputs by reading them, so a missing state is
    /// a wiring bug, not a runtime condition.
    pub fn state<T: State + Clone + Send + 'static>(&self) -> T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .cloned()
            .unwrap_or_else(|| panic!("state snapshot for {} is missing", type_name::<T>()))
    }

    /// Cloned compute of type `T`.
    ///
    /// # Panics
    /// Panics when `T` was not recorded in the context.
    pub fn compute<T: Compute + Clone + Send + 'static>(&self) -> T {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .cloned()
            .unwrap_or_else(|| panic!("compute snapshot for {} is missing", type_name::<T>()))
    }
}
