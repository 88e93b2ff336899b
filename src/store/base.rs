use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::actions::Action;
use crate::reducers::{root_reducer, RootState};

/// A deferred action: receives the store and dispatches whatever it needs to
/// once its own asynchronous work has settled.
pub type Thunk = Box<dyn FnOnce(Store) -> BoxFuture<'static, ()> + Send>;

/// Anything the store accepts: a plain action or a deferred computation.
pub enum Dispatchable {
    Action(Action),
    Thunk(Thunk),
}

impl Dispatchable {
    /// Wrap an async closure as a thunk.
    pub fn thunk<F, Fut>(f: F) -> Self
    where
        F: FnOnce(Store) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Dispatchable::Thunk(Box::new(move |store| Box::pin(f(store))))
    }
}

impl From<Action> for Dispatchable {
    fn from(action: Action) -> Self {
        Dispatchable::Action(action)
    }
}

impl fmt::Debug for Dispatchable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatchable::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Dispatchable::Thunk(_) => f.write_str("Thunk"),
        }
    }
}

/// The state container.
///
/// Owns the single [`RootState`] snapshot and replaces it on every applied
/// action; nothing else can write to it. Cloning a `Store` yields another
/// handle to the same state, which is how it gets passed to whoever needs it.
#[derive(Clone)]
pub struct Store {
    state: Arc<watch::Sender<Arc<RootState>>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.get_state())
            .finish()
    }
}

impl Store {
    /// A store starting from the default state.
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    pub fn with_state(state: RootState) -> Self {
        let (sender, _receiver) = watch::channel(Arc::new(state));
        Store {
            state: Arc::new(sender),
        }
    }

    /// The current snapshot.
    pub fn get_state(&self) -> Arc<RootState> {
        self.state.borrow().clone()
    }

    /// A receiver that is notified after every state replacement. A slow
    /// subscriber only sees the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<RootState>> {
        self.state.subscribe()
    }

    /// Reduces `action` into a new snapshot and returns it.
    ///
    /// Reductions are serialised, so concurrent callers never lose an update.
    pub fn apply(&self, action: Action) -> Arc<RootState> {
        let mut applied = None;
        self.state.send_modify(|current| {
            let next = Arc::new(root_reducer(&**current, &action));
            *current = Arc::clone(&next);
            applied = Some(next);
        });
        let state = applied.unwrap_or_else(|| self.get_state());
        debug!(
            event_name = "store.dispatch",
            event_domain = "store",
            action = action.kind(),
            is_authenticated = state.login.is_authenticated,
            "action applied"
        );
        state
    }

    /// Dispatches an action or runs a thunk to completion.
    pub async fn dispatch(&self, dispatchable: impl Into<Dispatchable>) {
        match dispatchable.into() {
            Dispatchable::Action(action) => {
                self.apply(action);
            }
            Dispatchable::Thunk(thunk) => {
                debug!(event_name = "store.thunk", event_domain = "store", "running thunk");
                thunk(self.clone()).await;
            }
        }
    }

    /// Starts a dispatch on the runtime and returns immediately.
    pub fn spawn_dispatch(&self, dispatchable: impl Into<Dispatchable>) -> JoinHandle<()> {
        let store = self.clone();
        let dispatchable = dispatchable.into();
        tokio::spawn(async move { store.dispatch(dispatchable).await })
    }
}
