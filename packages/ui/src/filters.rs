use dioxus::prelude::*;
use store::ExpenseFilters;

use crate::input::Input;

/// A date bound from the picker; a cleared picker removes the bound.
pub fn date_bound(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Description search and date range above the list.
#[component]
pub fn Filters(filters: ExpenseFilters, on_change: EventHandler<ExpenseFilters>) -> Element {
    let on_description = {
        let filters = filters.clone();
        move |description: String| {
            on_change.call(ExpenseFilters {
                description,
                ..filters.clone()
            })
        }
    };
    let on_from = {
        let filters = filters.clone();
        move |from: String| {
            on_change.call(ExpenseFilters {
                from: date_bound(from),
                ..filters.clone()
            })
        }
    };
    let on_to = {
        let filters = filters.clone();
        move |to: String| {
            on_change.call(ExpenseFilters {
                to: date_bound(to),
                ..filters.clone()
            })
        }
    };

    rsx! {
        div {
            class: "expense-filters flex items-end gap-3 mb-4",
            label {
                class: "flex flex-col text-xs text-neutral-600",
                "Search"
                Input {
                    value: filters.description.clone(),
                    small: true,
                    placeholder: "Description",
                    on_change: on_description,
                }
            }
            label {
                class: "flex flex-col text-xs text-neutral-600",
                "From"
                Input {
                    value: filters.from.clone().unwrap_or_default(),
                    r#type: "date",
                    small: true,
                    on_change: on_from,
                }
            }
            label {
                class: "flex flex-col text-xs text-neutral-600",
                "To"
                Input {
                    value: filters.to.clone().unwrap_or_default(),
                    r#type: "date",
                    small: true,
                    on_change: on_to,
                }
            }
            if !filters.is_empty() {
                button {
                    class: "expense-filters-clear",
                    onclick: move |_| on_change.call(ExpenseFilters::default()),
                    "Clear"
                }
            }
        }
    }
}
