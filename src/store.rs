//! Global Application State Store
//!
//! Uses Leptos reactive_stores for the page's view state. The sync
//! protocol writes into it through [`StoreSurface`]; components read it.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use view_sync::{ViewPatch, ViewState, ViewSurface};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Everything the current admin page renders
    pub view: ViewState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Read the view state, tracking it in the current reactive scope
pub fn read_view<R>(store: &AppStore, f: impl FnOnce(&ViewState) -> R) -> R {
    f(&store.view().read())
}

/// The store as the protocol's rendering surface
#[derive(Clone, Copy)]
pub struct StoreSurface {
    store: AppStore,
}

impl StoreSurface {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl ViewSurface for StoreSurface {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.store.view().read_untracked())
    }

    fn update(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.store.view().write());
    }

    fn schedule(&self, delay: Duration, patch: ViewPatch) {
        let store = self.store;
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            store.view().write().apply(patch);
        });
    }

    fn reload(&self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::warn!("[STORE] reload failed: {:?}", e);
            }
        }
    }
}
