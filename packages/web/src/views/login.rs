//! Landing page for expired or missing sessions.

use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "login-container",
            h1 { "Expenses" }
            p { "Your session has ended. Sign in again to see your expenses." }
        }
    }
}
