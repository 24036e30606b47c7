//! Store context and hooks for the UI.

use api::HttpApi;
use dioxus::prelude::*;
use store::{Action, AppState, Dispatch, ExpensesConfig};

/// Signal-backed handle to the application state.
///
/// `Copy`, so event handlers and spawned thunks can each hold their own.
#[derive(Clone, Copy, PartialEq)]
pub struct AppStore {
    state: Signal<AppState>,
}

impl AppStore {
    /// Read through a selector, subscribing the calling component to changes.
    pub fn select<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.read())
    }
}

impl Dispatch for AppStore {
    fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.name(), "dispatch");
        self.state.write().reduce(action);
    }

    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.peek())
    }
}

/// Get the store provided by [`StoreProvider`].
pub fn use_store() -> AppStore {
    use_context::<AppStore>()
}

/// Get the configuration provided by [`StoreProvider`].
pub fn use_config() -> ExpensesConfig {
    use_context::<ExpensesConfig>()
}

/// Get the backend client provided by [`StoreProvider`].
///
/// Clones share one connection pool.
pub fn use_api() -> HttpApi {
    use_context::<HttpApi>()
}

/// Provider component that owns the application state and the backend client.
/// Wrap your app with this component so views can select and dispatch.
#[component]
pub fn StoreProvider(initial: AppState, config: ExpensesConfig, children: Element) -> Element {
    let state = use_signal(move || initial);

    use_context_provider(|| AppStore { state });
    use_context_provider(|| HttpApi::from_config(&config));
    use_context_provider(move || config);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{selectors, UserId};

    #[component]
    fn ContextReader() -> Element {
        let api = use_api();
        let config = use_config();
        let store = use_store();
        let user = store.select(|state| {
            selectors::session(state)
                .map(|s| s.user_id.to_string())
                .unwrap_or_default()
        });
        rsx! {
            span { "{api.base_url()}|{config.pagination.page_size}|{user}" }
        }
    }

    #[component]
    fn Harness(config: ExpensesConfig) -> Element {
        rsx! {
            StoreProvider {
                initial: AppState::with_session(UserId::new("carol")),
                config,
                ContextReader {}
            }
        }
    }

    #[test]
    fn test_provider_shares_client_config_and_state() {
        let config = ExpensesConfig::new("https://api.test/v1/".to_string()).with_page_size(4);
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { config });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("https://api.test/v1|4|carol"));
    }
}
