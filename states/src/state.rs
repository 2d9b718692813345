use std::any::Any;

/// A typed value owned by a [`crate::StateCtx`].
///
/// States are read and mutated synchronously on the UI thread. A state that
/// wants to be visible to commands must provide a `snapshot()`; states that
/// return `None` (the default) are simply absent from command snapshots.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone of this state for a [`crate::CommandSnapshot`], if supported.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}

/// Helper for `State` impls that replace themselves wholesale from a boxed
/// value of the same type. Mismatched types are ignored with a log line
/// rather than panicking; the old value stays in place.
pub fn state_assign_impl<T: State + 'static>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => log::warn!(
            "ignoring state assignment with mismatched type for {}",
            std::any::type_name::<T>()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    struct Counter {
        value: u32,
    }

    impl State for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
            Some(Box::new(self.clone()))
        }
    }

    #[test]
    fn assign_replaces_value() {
        let mut counter = Counter { value: 1 };
        state_assign_impl(&mut counter, Box::new(Counter { value: 7 }));
        assert_eq!(counter.value, 7);
    }

    #[test]
    fn assign_ignores_mismatched_type() {
        let mut counter = Counter { value: 1 };
        state_assign_impl(&mut counter, Box::new("not a counter"));
        assert_eq!(counter.value, 1);
    }
}
