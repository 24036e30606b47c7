//! # Thunks — side-effecting commands over the store
//!
//! Each thunk talks to an [`ExpenseApi`] and describes the outcome to the store
//! as [`Action`]s. Nothing is returned to the caller; views observe results
//! only through the state they select.
//!
//! | Thunk | Effect |
//! |-------|--------|
//! | [`fetch_expenses`] | Loads the current page with the current filters. |
//! | [`delete_expense`] | Deletes a record, then re-fetches. |
//! | [`save_expense`] | Validates a draft, creates or updates depending on editing focus, clears focus, re-fetches. |
//!
//! An `Unauthorized` response from any of them sends the history to
//! [`LOGIN_PATH`]. Fetches are neither de-duplicated nor cancelled.
//!
//! The plain action creators ([`set_editing_focus`], [`set_page_expenses`],
//! [`set_filters`]) have no side effects and are dispatched directly.

use store::{
    selectors, Action, Dispatch, ExpenseDraft, ExpenseFilters, ExpenseId, UserId,
};

use crate::client::{ExpenseApi, ExpenseQuery};
use crate::error::ApiError;
use crate::history::{History, LOGIN_PATH};

pub fn set_editing_focus(user_id: &UserId, expense_id: Option<ExpenseId>) -> Action {
    Action::SetEditingFocus {
        user_id: user_id.clone(),
        expense_id,
    }
}

pub fn set_page_expenses(page: u32) -> Action {
    Action::SetPage(page)
}

pub fn set_filters(filters: ExpenseFilters) -> Action {
    Action::SetFilters(filters)
}

/// Load the current page of a user's expenses.
pub async fn fetch_expenses<S, A, H>(store: &mut S, api: &A, user_id: &UserId, history: &H)
where
    S: Dispatch,
    A: ExpenseApi,
    H: History,
{
    let query = store.with_state(|state| ExpenseQuery {
        page: selectors::current_page(state),
        filters: selectors::filters(state).clone(),
    });
    store.dispatch(Action::FetchStarted {
        user_id: user_id.clone(),
    });
    tracing::debug!(user = %user_id, page = query.page, "fetching expenses");

    match api.list_expenses(user_id, &query).await {
        Ok(page) => {
            tracing::info!(
                user = %user_id,
                count = page.items.len(),
                total_pages = page.total_pages,
                "expenses loaded"
            );
            store.dispatch(Action::FetchSucceeded {
                user_id: user_id.clone(),
                page,
            });
        }
        Err(err) => {
            tracing::warn!(user = %user_id, error = %err, "failed to load expenses");
            store.dispatch(Action::FetchFailed {
                user_id: user_id.clone(),
                errors: err.to_error_bag(),
            });
            redirect_if_signed_out(&err, history);
        }
    }
}

/// Delete one expense and reload the page it was on.
pub async fn delete_expense<S, A, H>(
    store: &mut S,
    api: &A,
    user_id: &UserId,
    expense_id: &ExpenseId,
    history: &H,
) where
    S: Dispatch,
    A: ExpenseApi,
    H: History,
{
    match api.delete_expense(user_id, expense_id).await {
        Ok(()) => {
            tracing::info!(user = %user_id, expense = %expense_id, "expense deleted");
            store.dispatch(Action::ExpenseRemoved {
                user_id: user_id.clone(),
                expense_id: expense_id.clone(),
            });
            fetch_expenses(store, api, user_id, history).await;
        }
        Err(err) => report_mutation_failure(store, history, err),
    }
}

/// Create or update from the edit form.
///
/// Creates when the user has no editing focus, otherwise updates the focused
/// record. Field errors from validation are dispatched without a request.
pub async fn save_expense<S, A, H>(
    store: &mut S,
    api: &A,
    user_id: &UserId,
    draft: &ExpenseDraft,
    history: &H,
) where
    S: Dispatch,
    A: ExpenseApi,
    H: History,
{
    let expense = match draft.validate() {
        Ok(expense) => expense,
        Err(errors) => {
            tracing::debug!(user = %user_id, "expense draft rejected");
            store.dispatch(Action::SetErrors(errors));
            return;
        }
    };

    let focus = store.with_state(|state| selectors::editing_focus(state, user_id).cloned());
    let result = match &focus {
        Some(expense_id) => api.update_expense(user_id, expense_id, &expense).await,
        None => api.create_expense(user_id, &expense).await,
    };

    match result {
        Ok(saved) => {
            tracing::info!(user = %user_id, expense = %saved.id, updated = focus.is_some(), "expense saved");
            store.dispatch(Action::ExpenseSaved {
                user_id: user_id.clone(),
                expense: saved,
            });
            store.dispatch(set_editing_focus(user_id, None));
            store.dispatch(Action::ClearErrors);
            fetch_expenses(store, api, user_id, history).await;
        }
        Err(err) => report_mutation_failure(store, history, err),
    }
}

fn report_mutation_failure<S: Dispatch, H: History>(store: &mut S, history: &H, err: ApiError) {
    tracing::warn!(error = %err, "expense mutation failed");
    store.dispatch(Action::SetErrors(err.to_error_bag()));
    redirect_if_signed_out(&err, history);
}

fn redirect_if_signed_out<H: History>(err: &ApiError, history: &H) {
    if matches!(err, ApiError::Unauthorized) {
        history.push(LOGIN_PATH);
    }
}
