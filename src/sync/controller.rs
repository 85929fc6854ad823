//! The listings controller
//!
//! One controller is mounted per listings view. It owns the view's state
//! (criteria, UI mirrors, displayed collection), keeps the address bar in
//! sync through the injected [`ParamsStore`], and drives the coalescing
//! state machine against the pluggable [`ListingFetcher`].
//!
//! Renderers observe the controller through a `tokio::sync::watch` channel
//! of [`ViewState`] snapshots; the controller knows nothing about how the
//! list is drawn.

use crate::core::criteria::{FilterCriteria, Selections, SortSelection};
use crate::core::fetch::ListingFetcher;
use crate::core::listing::Listing;
use crate::core::query;
use crate::sync::machine::{Effect, Event, MachineState, Phase};
use crate::sync::params::ParamsStore;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// What a renderer needs: the resolved collection and the soft-loading flag
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub displayed: Vec<Listing>,
    pub is_refreshing: bool,
}

struct ControllerState {
    machine: MachineState,
    selections: Selections,
    disposed: bool,
}

struct Inner {
    fetcher: Arc<dyn ListingFetcher>,
    params: Arc<dyn ParamsStore>,
    state: Mutex<ControllerState>,
    view_tx: watch::Sender<ViewState>,
}

/// Filter synchronization controller for one mounted listings view
pub struct ListingsController {
    inner: Arc<Inner>,
}

impl ListingsController {
    /// Mount a listings view
    ///
    /// Criteria are hydrated from the params store. When `initial` holds a
    /// non-empty server-supplied collection it seeds the displayed state and
    /// no fetch is triggered; otherwise a refresh with the decoded criteria
    /// starts immediately.
    ///
    /// Must be called from within a Tokio runtime: refreshes run on a
    /// spawned task.
    pub fn mount(
        fetcher: Arc<dyn ListingFetcher>,
        params: Arc<dyn ParamsStore>,
        initial: Option<Vec<Listing>>,
    ) -> Self {
        let criteria = query::decode(&params.read_params());
        let selections = Selections::from_criteria(&criteria);

        let seeded = match initial {
            Some(items) if !items.is_empty() => Some(items),
            _ => None,
        };
        let needs_fetch = seeded.is_none();
        let machine = MachineState::seeded(criteria.clone(), seeded.unwrap_or_default());

        let (view_tx, _) = watch::channel(ViewState {
            displayed: machine.displayed.clone(),
            is_refreshing: false,
        });
        let controller = Self {
            inner: Arc::new(Inner {
                fetcher,
                params,
                state: Mutex::new(ControllerState {
                    machine,
                    selections,
                    disposed: false,
                }),
                view_tx,
            }),
        };

        if needs_fetch {
            controller.request_refresh(criteria);
        }
        controller
    }

    /// Map a sort dropdown value onto the criteria
    ///
    /// The dropdown is a closed enumeration (`newest`, `oldest`, `highest`,
    /// `lowest`); any other input is a no-op.
    pub fn set_sort_selection(&self, value: &str) {
        let Some(selection) = SortSelection::parse(value) else {
            return;
        };
        self.apply(|selections| selections.sort = selection);
    }

    /// Set the tag filter; `"all"` clears it
    pub fn set_tag_selection(&self, value: &str) {
        if value.is_empty() {
            return;
        }
        let value = value.to_string();
        self.apply(|selections| selections.tag = value);
    }

    /// Set the city filter; `"all"` clears the whole location filter
    pub fn set_city_selection(&self, value: &str) {
        if value.is_empty() {
            return;
        }
        let value = value.to_string();
        self.apply(|selections| selections.city = value);
    }

    /// Reset criteria to the defaults and mirrors to `newest/all/all`,
    /// with a single params write and a single coalesced refresh
    pub fn clear_filters(&self) {
        self.apply(|selections| *selections = Selections::default());
    }

    /// Stop applying fetch completions. Idempotent; also invoked on drop.
    pub fn unmount(&self) {
        self.inner.lock_state().disposed = true;
    }

    /// Current view snapshot
    pub fn snapshot(&self) -> ViewState {
        self.inner.view_tx.borrow().clone()
    }

    /// Subscribe to view updates
    pub fn view(&self) -> watch::Receiver<ViewState> {
        self.inner.view_tx.subscribe()
    }

    /// View updates as a stream, for renderers that consume `Stream`s
    pub fn view_stream(&self) -> WatchStream<ViewState> {
        WatchStream::new(self.view())
    }

    /// The most recently requested criteria
    pub fn criteria(&self) -> FilterCriteria {
        self.inner.lock_state().machine.latest_requested.clone()
    }

    /// The current UI mirrors
    pub fn selections(&self) -> Selections {
        self.inner.lock_state().selections.clone()
    }

    pub fn is_refreshing(&self) -> bool {
        self.inner.lock_state().machine.is_refreshing()
    }

    /// Wait until no fetch is outstanding and return the settled view
    pub async fn settled(&self) -> ViewState {
        let mut rx = self.inner.view_tx.subscribe();
        match rx.wait_for(|view| !view.is_refreshing).await {
            Ok(view) => view.clone(),
            // The sender lives as long as `self`, so this arm is
            // unreachable; fall back to the current snapshot anyway.
            Err(_) => self.snapshot(),
        }
    }

    /// Update the mirrors, write the merged criteria to the params store,
    /// and forward exactly one refresh request to the coalescer.
    fn apply(&self, update: impl FnOnce(&mut Selections)) {
        let criteria = {
            let mut state = self.inner.lock_state();
            if state.disposed {
                return;
            }
            update(&mut state.selections);
            state.selections.criteria()
        };
        self.inner.params.write_params(&query::encode(&criteria));
        self.request_refresh(criteria);
    }

    fn request_refresh(&self, criteria: FilterCriteria) {
        let effect = {
            let mut state = self.inner.lock_state();
            if state.disposed {
                return;
            }
            state.machine.transition(Event::Requested(criteria))
        };
        self.inner.publish();
        if let Effect::StartFetch(wanted) = effect {
            let inner = Arc::clone(&self.inner);
            tokio::spawn(async move {
                inner.drive(wanted).await;
            });
        }
    }
}

impl Drop for ListingsController {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl Inner {
    /// Run the outstanding fetch to completion, chasing criteria that moved
    /// while it was in flight. Exactly one drive loop exists at a time.
    async fn drive(self: Arc<Self>, mut wanted: FilterCriteria) {
        loop {
            let event = match self.fetcher.fetch(&wanted).await {
                Ok(items) => Event::Completed {
                    for_criteria: wanted.clone(),
                    items,
                },
                Err(err) => {
                    tracing::warn!("Listings refresh failed for {:?}: {:#}", wanted, err);
                    Event::Failed {
                        for_criteria: wanted.clone(),
                    }
                }
            };
            let effect = {
                let mut state = self.lock_state();
                if state.disposed {
                    return;
                }
                state.machine.transition(event)
            };
            self.publish();
            match effect {
                Effect::StartFetch(next) => wanted = next,
                Effect::None => return,
            }
        }
    }

    fn publish(&self) {
        let view = {
            let state = self.lock_state();
            ViewState {
                displayed: state.machine.displayed.clone(),
                is_refreshing: state.machine.phase == Phase::Refreshing,
            }
        };
        self.view_tx.send_replace(view);
    }

    fn lock_state(&self) -> MutexGuard<'_, ControllerState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
