use dioxus::prelude::*;

use store::{selectors, AppState, ExpensesConfig};
use ui::{use_store, StoreProvider};
use views::{Login, UserExpenses};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/users/:user_id/expenses")]
    UserExpenses { user_id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../expenses.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the bundled configuration, falling back to defaults.
fn load_config() -> ExpensesConfig {
    match ExpensesConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {}", ExpensesConfig::filename(), e);
            ExpensesConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let initial = match &config.session.user_id {
        Some(user_id) => AppState::with_session(user_id.clone()),
        None => AppState::new(),
    };

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        StoreProvider {
            initial,
            config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the signed-in user's expenses
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    let store = use_store();
    let user_id = store.select(|state| selectors::session(state).map(|s| s.user_id.to_string()));
    match user_id {
        Some(user_id) => nav.replace(Route::UserExpenses { user_id }),
        None => nav.replace(Route::Login {}),
    };
    rsx! {}
}
