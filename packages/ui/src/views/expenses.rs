use api::{
    delete_expense, fetch_expenses, save_expense, set_editing_focus, set_filters,
    set_page_expenses, HttpApi,
};
use dioxus::prelude::*;
use store::{Dispatch, ExpenseDraft, ExpenseFilters, ExpenseId, UserId};

use crate::client::CallbackHistory;
use crate::{use_api, use_store, AppStore, EditExpense, ErrorMessage, ExpenseRow, Filters, Pagination};

use super::ExpensesView;

/// "New": leave update mode so the form creates again.
pub fn start_new<S: Dispatch>(store: &mut S, user_id: &UserId) {
    store.dispatch(set_editing_focus(user_id, None));
}

/// Connected expense list for one user.
///
/// Fetches on mount and re-renders from the store. Platform packages supply
/// `on_navigate` so thunks can redirect (e.g. to the login page).
#[component]
pub fn Expenses(user_id: UserId, on_navigate: EventHandler<String>) -> Element {
    let mut store = use_store();
    let api = use_api();
    let history = CallbackHistory(on_navigate);

    // Load on mount
    let _loader = use_resource({
        let user_id = user_id.clone();
        let api = api.clone();
        move || {
            let user_id = user_id.clone();
            let api = api.clone();
            async move {
                let mut store = store;
                fetch_expenses(&mut store, &api, &user_id, &history).await;
            }
        }
    });

    let view = store.select(|state| ExpensesView::project(state, &user_id));

    let on_edit = {
        let user_id = user_id.clone();
        move |expense_id: ExpenseId| {
            store.dispatch(set_editing_focus(&user_id, Some(expense_id)));
        }
    };

    let on_new = {
        let user_id = user_id.clone();
        move |_| start_new(&mut store, &user_id)
    };

    let on_delete = {
        let user_id = user_id.clone();
        let api = api.clone();
        move |expense_id: ExpenseId| {
            let user_id = user_id.clone();
            let api = api.clone();
            spawn(async move {
                let mut store = store;
                delete_expense(&mut store, &api, &user_id, &expense_id, &history).await;
            });
        }
    };

    let on_page_change = {
        let user_id = user_id.clone();
        let api = api.clone();
        move |page: u32| {
            store.dispatch(set_page_expenses(page));
            refetch(store, &api, &user_id, history);
        }
    };

    let on_filters_change = {
        let user_id = user_id.clone();
        let api = api.clone();
        move |filters: ExpenseFilters| {
            store.dispatch(set_filters(filters));
            refetch(store, &api, &user_id, history);
        }
    };

    let on_submit = {
        let user_id = user_id.clone();
        move |draft: ExpenseDraft| {
            let user_id = user_id.clone();
            let api = api.clone();
            spawn(async move {
                let mut store = store;
                save_expense(&mut store, &api, &user_id, &draft, &history).await;
            });
        }
    };

    rsx! {
        ExpensesList {
            view,
            on_edit,
            on_delete,
            on_new,
            on_page_change,
            on_filters_change,
            on_submit,
        }
    }
}

fn refetch(store: AppStore, api: &HttpApi, user_id: &UserId, history: CallbackHistory) {
    let api = api.clone();
    let user_id = user_id.clone();
    spawn(async move {
        let mut store = store;
        fetch_expenses(&mut store, &api, &user_id, &history).await;
    });
}

/// The expense list as a pure function of its projection.
#[component]
pub fn ExpensesList(
    view: ExpensesView,
    on_edit: EventHandler<ExpenseId>,
    on_delete: EventHandler<ExpenseId>,
    on_new: EventHandler<()>,
    on_page_change: EventHandler<u32>,
    on_filters_change: EventHandler<ExpenseFilters>,
    on_submit: EventHandler<ExpenseDraft>,
) -> Element {
    rsx! {
        div {
            class: "expenses",

            Filters {
                filters: view.filters.clone(),
                on_change: on_filters_change,
            }

            for (index, message) in view.general_errors.iter().enumerate() {
                ErrorMessage {
                    key: "{index}",
                    label: format!("error-{index}"),
                    message: message.clone(),
                }
            }

            if view.loading {
                p { class: "expenses-loading text-sm text-neutral-600", "Loading..." }
            }

            table {
                class: "expenses-table w-full",
                thead {
                    tr {
                        th { "Date" }
                        th { "Description" }
                        th { class: "text-right", "Amount" }
                        th {}
                    }
                }
                tbody {
                    if view.is_empty() {
                        tr {
                            class: "expenses-empty",
                            td { "No expenses" }
                            td {}
                            td {}
                            td {}
                        }
                    } else {
                        for row in view.rows.iter() {
                            ExpenseRow {
                                key: "{row.expense.id}",
                                expense: row.expense.clone(),
                                edit: row.edit,
                                on_edit,
                                on_delete,
                            }
                        }
                    }
                }
            }

            if view.show_new() {
                button {
                    class: "expenses-new",
                    onclick: move |_| on_new.call(()),
                    "New"
                }
            }

            Pagination {
                current_page: view.current_page,
                total_pages: view.total_pages,
                on_change: on_page_change,
            }

            EditExpense {
                key: "{view.form_key()}",
                expense: view.editing.clone(),
                submit_label: view.submit_label(),
                errors: view.field_errors.clone(),
                on_submit,
            }
        }
    }
}
