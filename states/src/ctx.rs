use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::command::ComputeUpdate;
use crate::{Command, CommandSnapshot, Compute, Error, State, TaskHandle, TaskId, Updater};

/// Owner of all states and computes for one UI instance.
///
/// The context itself is not `Send`; it lives with the UI. Commands are the
/// only way work leaves this thread, and `sync_computes()` is the only way
/// results come back.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    updates_tx: flume::Sender<ComputeUpdate>,
    updates_rx: flume::Receiver<ComputeUpdate>,
    // One slot per command type; re-dispatch cancels the previous task.
    tasks: BTreeMap<TypeId, TaskHandle>,
    next_generation: u64,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (updates_tx, updates_rx) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            updates_tx,
            updates_rx,
            tasks: BTreeMap::new(),
            next_generation: 0,
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>()))
    }

    /// Shared reference to a registered state.
    ///
    /// # Panics
    /// Panics when `T` was never added; registration happens once at app
    /// construction, so a miss is a wiring bug.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable reference to a registered state.
    ///
    /// # Panics
    /// Panics when `T` was never added.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("{}", Error::state_not_found(type_name::<T>())))
    }

    /// Mutate a registered state in place.
    pub fn update<T: State>(&mut self, mutate: impl FnOnce(&mut T)) {
        mutate(self.state_mut::<T>());
    }

    /// Latest value of a recorded compute, if any.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
    }

    /// Dispatch a command: snapshot its inputs, cancel any still-running
    /// task of the same command type, and spawn the new task.
    pub fn dispatch<C: Command>(&mut self) {
        let mut snap = CommandSnapshot::default();
        for (id, state) in &self.states {
            if let Some(cloned) = state.snapshot() {
                snap.insert_state(*id, cloned);
            }
        }
        for (id, compute) in &self.computes {
            snap.insert_compute(*id, compute.clone_boxed());
        }

        let command_type = TypeId::of::<C>();
        if let Some(previous) = self.tasks.remove(&command_type) {
            previous.cancel();
        }

        self.next_generation += 1;
        let token = CancellationToken::new();
        let handle = TaskHandle::new(TaskId::new(command_type, self.next_generation), token.clone());
        self.tasks.insert(command_type, handle);

        let updater = Updater::new(self.updates_tx.clone());
        spawn_command(C::default().run(snap, updater, token));
    }

    /// Apply all pending compute updates. Call once per frame, before
    /// reading computes.
    pub fn sync_computes(&mut self) {
        while let Ok(update) = self.updates_rx.try_recv() {
            match self.computes.get_mut(&update.type_id) {
                Some(compute) => compute.assign_box(update.value),
                None => log::warn!("received update for unrecorded compute"),
            }
        }
    }

    /// Write handle for out-of-band producers (tests, pollers).
    pub fn updater(&self) -> Updater {
        Updater::new(self.updates_tx.clone())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_command(future: Pin<Box<dyn Future<Output = ()> + Send>>) {
    use std::sync::OnceLock;

    // Inside an ambient runtime (tests), reuse it so time control works.
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        handle.spawn(future);
        return;
    }

    static RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();
    RUNTIME
        .get_or_init(|| {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .thread_name("console-commands")
                .build()
                .expect("failed to start the command runtime")
        })
        .spawn(future);
}

#[cfg(target_arch = "wasm32")]
fn spawn_command(future: Pin<Box<dyn Future<Output = ()> + Send>>) {
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_assign_impl, state_assign_impl};
    use std::any::Any;

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    struct Greeting {
        text: String,
    }

    impl State for Greeting {
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

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    struct Echo {
        text: String,
    }

    impl Compute for Echo {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn clone_boxed(&self) -> Box<dyn Any + Send> {
            Box::new(self.clone())
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            compute_assign_impl(self, new_self);
        }
    }

    #[derive(Default)]
    struct EchoCommand;

    impl Command for EchoCommand {
        fn run(
            &self,
            snap: CommandSnapshot,
            updater: Updater,
            _cancel: CancellationToken,
        ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
            let greeting: Greeting = snap.state::<Greeting>();
            Box::pin(async move {
                updater.set(Echo {
                    text: greeting.text,
                });
            })
        }
    }

    #[test]
    fn state_roundtrip() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Greeting {
            text: "hello".to_owned(),
        });

        ctx.update::<Greeting>(|greeting| greeting.text.push_str(" world"));
        assert_eq!(ctx.state::<Greeting>().text, "hello world");
    }

    #[test]
    fn try_state_reports_missing() {
        let ctx = StateCtx::new();
        assert!(ctx.try_state::<Greeting>().is_err());
    }

    #[test]
    fn cached_is_none_until_recorded() {
        let ctx = StateCtx::new();
        assert!(ctx.cached::<Echo>().is_none());
    }

    #[test]
    fn updater_set_applies_on_sync() {
        let mut ctx = StateCtx::new();
        ctx.record_compute(Echo::default());

        ctx.updater().set(Echo {
            text: "direct".to_owned(),
        });
        assert_eq!(ctx.cached::<Echo>().map(|echo| echo.text.as_str()), Some(""));

        ctx.sync_computes();
        assert_eq!(
            ctx.cached::<Echo>().map(|echo| echo.text.as_str()),
            Some("direct")
        );
    }

    #[tokio::test]
    async fn dispatch_runs_command_and_syncs_result() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Greeting {
            text: "ping".to_owned(),
        });
        ctx.record_compute(Echo::default());

        ctx.dispatch::<EchoCommand>();

        // Give the spawned task a moment to publish.
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        ctx.sync_computes();

        assert_eq!(
            ctx.cached::<Echo>().map(|echo| echo.text.as_str()),
            Some("ping")
        );
    }

    #[test]
    fn mismatched_state_assign_is_ignored() {
        let mut greeting = Greeting {
            text: "keep".to_owned(),
        };
        state_assign_impl(&mut greeting, Box::new(42_u8));
        assert_eq!(greeting.text, "keep");
    }
}
