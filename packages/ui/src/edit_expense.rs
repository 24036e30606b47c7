use dioxus::prelude::*;
use store::{ErrorBag, Expense, ExpenseDraft};

use crate::input::Input;

/// Inline form for creating or updating an expense.
///
/// Seeds its fields from `expense` on mount; mount it under a key that changes
/// with the edited record to re-seed. Field errors come from the store.
#[component]
pub fn EditExpense(
    expense: Option<Expense>,
    #[props(into)] submit_label: String,
    #[props(default)] errors: ErrorBag,
    on_submit: EventHandler<ExpenseDraft>,
) -> Element {
    let mut draft = use_signal({
        let initial = expense
            .as_ref()
            .map(ExpenseDraft::from_expense)
            .unwrap_or_default();
        move || initial
    });

    rsx! {
        div {
            class: "edit-expense p-4 border-t border-neutral-200",
            div {
                class: "mb-3",
                label { r#for: "expense-date", class: "block text-sm", "Date" }
                Input {
                    id: "expense-date",
                    r#type: "date",
                    value: draft().date,
                    on_change: move |date: String| draft.write().date = date,
                }
                for message in errors.get("date") {
                    p { class: "field-error text-xs text-red-700", "{message}" }
                }
            }
            div {
                class: "mb-3",
                label { r#for: "expense-description", class: "block text-sm", "Description" }
                Input {
                    id: "expense-description",
                    value: draft().description,
                    placeholder: "What was it for?",
                    on_change: move |description: String| draft.write().description = description,
                }
                for message in errors.get("description") {
                    p { class: "field-error text-xs text-red-700", "{message}" }
                }
            }
            div {
                class: "mb-3",
                label { r#for: "expense-amount", class: "block text-sm", "Amount" }
                Input {
                    id: "expense-amount",
                    value: draft().amount,
                    placeholder: "0.00",
                    on_change: move |amount: String| draft.write().amount = amount,
                }
                for message in errors.get("amount") {
                    p { class: "field-error text-xs text-red-700", "{message}" }
                }
            }
            button {
                class: "edit-expense-submit",
                r#type: "button",
                onclick: move |_| on_submit.call(draft()),
                "{submit_label}"
            }
        }
    }
}
