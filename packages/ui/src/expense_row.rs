use dioxus::prelude::*;
use store::{Expense, ExpenseId};

/// One expense as a four-cell table row.
///
/// `edit` marks the row whose record is loaded in the edit form.
#[component]
pub fn ExpenseRow(
    expense: Expense,
    edit: bool,
    on_edit: EventHandler<ExpenseId>,
    on_delete: EventHandler<ExpenseId>,
) -> Element {
    let edit_id = expense.id.clone();
    let delete_id = expense.id.clone();
    let row_class = if edit {
        "expense-row expense-row--editing"
    } else {
        "expense-row"
    };

    rsx! {
        tr {
            class: row_class,
            "data-expense-id": "{expense.id}",
            td { class: "expense-date", "{expense.date}" }
            td { class: "expense-description", "{expense.description}" }
            td { class: "expense-amount text-right", "{expense.display_amount()}" }
            td {
                class: "expense-actions",
                button {
                    class: "expense-edit",
                    disabled: edit,
                    onclick: move |_| on_edit.call(edit_id.clone()),
                    "Edit"
                }
                button {
                    class: "expense-delete",
                    title: "Delete expense",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}
