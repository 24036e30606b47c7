use dioxus::prelude::*;
use store::UserId;
use ui::Expenses;

use crate::Route;

/// `/users/:user_id/expenses`
#[component]
pub fn UserExpenses(user_id: String) -> Element {
    let nav = use_navigator();

    let on_navigate = move |path: String| match path.parse::<Route>() {
        Ok(route) => {
            nav.push(route);
        }
        Err(_) => tracing::warn!(%path, "no route for navigation target"),
    };

    rsx! {
        // Keyed by user so switching users remounts and refetches.
        Expenses {
            key: "{user_id}",
            user_id: UserId::new(user_id.clone()),
            on_navigate,
        }
    }
}
