//! Pure read-model queries over [`AppState`].
//!
//! Views never reach into the state directly; they go through these so the
//! projection stays in one place.

use crate::errors::ErrorBag;
use crate::models::{Expense, ExpenseFilters, ExpenseId, UserId};
use crate::state::{AppState, Session};

pub fn session(state: &AppState) -> Option<&Session> {
    state.session.as_ref()
}

/// Expenses loaded for a user; empty until the first successful fetch.
pub fn expenses_for<'a>(state: &'a AppState, user_id: &UserId) -> &'a [Expense] {
    state
        .expenses
        .get(user_id)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn editing_focus<'a>(state: &'a AppState, user_id: &UserId) -> Option<&'a ExpenseId> {
    state.editing_focus.get(user_id)
}

/// The record currently open for edit, if it is on the loaded page.
pub fn editing_expense<'a>(state: &'a AppState, user_id: &UserId) -> Option<&'a Expense> {
    let focus = editing_focus(state, user_id)?;
    expenses_for(state, user_id).iter().find(|e| &e.id == focus)
}

pub fn current_page(state: &AppState) -> u32 {
    state.current_page
}

pub fn total_pages(state: &AppState, user_id: &UserId) -> u32 {
    state.total_pages.get(user_id).copied().unwrap_or(0)
}

pub fn is_loading(state: &AppState) -> bool {
    state.pending_fetches > 0
}

pub fn errors(state: &AppState) -> &ErrorBag {
    &state.errors
}

pub fn filters(state: &AppState) -> &ExpenseFilters {
    &state.filters
}

pub fn save_generation(state: &AppState) -> u32 {
    state.save_generation
}
