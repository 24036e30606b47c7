use dioxus::prelude::*;

/// One display-ready error line.
#[component]
pub fn ErrorMessage(#[props(into)] message: String, #[props(default, into)] label: String) -> Element {
    rsx! {
        p {
            class: "error-message m-0 mb-2 text-sm text-red-700",
            role: "alert",
            "aria-label": "{label}",
            "{message}"
        }
    }
}
