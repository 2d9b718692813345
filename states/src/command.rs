use std::any::{Any, TypeId};
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{Compute, CommandSnapshot};

/// A manual-only unit of async work.
///
/// Commands are dispatched explicitly via `ctx.dispatch::<C>()`. They are
/// allowed to perform network IO, and publish results by `updater.set(..)`.
/// The returned future must be `Send` on all targets; see the HTTP layer in
/// the business crate for how wasm requests are bridged to stay `Send`.
pub trait Command: Default + 'static {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>>;
}

pub(crate) struct ComputeUpdate {
    pub(crate) type_id: TypeId,
    pub(crate) value: Box<dyn Any + Send>,
}

/// Write handle a command uses to publish compute values.
///
/// Updates are queued on a channel and applied by the UI thread on its next
/// `sync_computes()`; a command may `set` the same compute several times
/// (e.g. `Loading` then `Loaded`).
#[derive(Clone)]
pub struct Updater {
    tx: flume::Sender<ComputeUpdate>,
}

impl Updater {
    pub(crate) fn new(tx: flume::Sender<ComputeUpdate>) -> Self {
        Self { tx }
    }

    pub fn set<T: Compute + Send + 'static>(&self, value: T) {
        let update = ComputeUpdate {
            type_id: TypeId::of::<T>(),
            value: Box::new(value),
        };
        // The receiver only disappears when the whole context is gone.
        if self.tx.send(update).is_err() {
            log::debug!(
                "dropping compute update for {}: context is gone",
                std::any::type_name::<T>()
            );
        }
    }
}
