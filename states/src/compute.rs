use std::any::Any;

/// A compute-shaped cache: the latest result of an async operation.
///
/// Computes are recorded in a [`crate::StateCtx`] and only ever replaced
/// wholesale, from values a [`crate::Command`] publishes through an
/// [`crate::Updater`]. UI reads them via `ctx.cached::<T>()`.
pub trait Compute: Any {
    fn as_any(&self) -> &dyn Any;

    /// Clone of this compute for a [`crate::CommandSnapshot`].
    fn clone_boxed(&self) -> Box<dyn Any + Send>;

    /// Replace this compute with a published value of the same type.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Helper for the common `assign_box` body.
pub fn compute_assign_impl<T: Compute + 'static>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => log::warn!(
            "ignoring compute assignment with mismatched type for {}",
            std::any::type_name::<T>()
        ),
    }
}
