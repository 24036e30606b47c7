//! # Application state and reducer
//!
//! [`AppState`] is the single source of truth read by every view. It is only
//! changed by [`AppState::reduce`], which applies one [`Action`] at a time.
//!
//! ## Invariants kept by the reducer
//!
//! - `current_page` is at least 1, and never exceeds the total page count of
//!   the active user's list when that count is non-zero.
//! - `pending_fetches` counts fetches started but not yet finished; the list is
//!   loading while it is non-zero.
//! - Removing the expense in editing focus clears the focus.
//! - Changing filters goes back to page 1.
//! - `save_generation` grows by one with every saved expense.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::errors::{ErrorBag, GENERAL};
use crate::models::{Expense, ExpenseFilters, ExpenseId, UserId};

/// The signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub session: Option<Session>,
    /// Expenses of the current page, per user, in server order.
    pub expenses: HashMap<UserId, Vec<Expense>>,
    pub editing_focus: HashMap<UserId, ExpenseId>,
    pub current_page: u32,
    pub total_pages: HashMap<UserId, u32>,
    /// User of the most recent fetch; page clamping follows this list.
    pub active_user: Option<UserId>,
    pub filters: ExpenseFilters,
    pub pending_fetches: u32,
    pub errors: ErrorBag,
    /// Count of successful saves; the edit form is keyed by it.
    pub save_generation: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: None,
            expenses: HashMap::new(),
            editing_focus: HashMap::new(),
            current_page: 1,
            total_pages: HashMap::new(),
            active_user: None,
            filters: ExpenseFilters::default(),
            pending_fetches: 0,
            errors: ErrorBag::new(),
            save_generation: 0,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state with a signed-in user.
    pub fn with_session(user_id: UserId) -> Self {
        Self {
            session: Some(Session { user_id }),
            ..Self::default()
        }
    }

    /// Apply one action.
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::FetchStarted { user_id } => {
                self.pending_fetches += 1;
                self.active_user = Some(user_id);
                self.errors.clear(GENERAL);
            }
            Action::FetchSucceeded { user_id, page } => {
                self.pending_fetches = self.pending_fetches.saturating_sub(1);
                self.expenses.insert(user_id.clone(), page.items);
                self.total_pages.insert(user_id.clone(), page.total_pages);
                self.active_user = Some(user_id);
                self.current_page = page.page.max(1);
                self.clamp_page();
            }
            Action::FetchFailed { user_id, errors } => {
                self.pending_fetches = self.pending_fetches.saturating_sub(1);
                self.active_user = Some(user_id);
                self.errors.merge(errors);
            }
            Action::SetEditingFocus {
                user_id,
                expense_id,
            } => match expense_id {
                Some(id) => {
                    self.editing_focus.insert(user_id, id);
                }
                None => {
                    self.editing_focus.remove(&user_id);
                }
            },
            Action::SetPage(page) => {
                self.current_page = page.max(1);
                self.clamp_page();
            }
            Action::SetFilters(filters) => {
                self.filters = filters;
                self.current_page = 1;
            }
            Action::ExpenseSaved { user_id, expense } => {
                self.save_generation = self.save_generation.wrapping_add(1);
                let list = self.expenses.entry(user_id).or_default();
                match list.iter_mut().find(|e| e.id == expense.id) {
                    Some(existing) => *existing = expense,
                    None => list.push(expense),
                }
            }
            Action::ExpenseRemoved {
                user_id,
                expense_id,
            } => {
                if let Some(list) = self.expenses.get_mut(&user_id) {
                    list.retain(|e| e.id != expense_id);
                }
                if self.editing_focus.get(&user_id) == Some(&expense_id) {
                    self.editing_focus.remove(&user_id);
                }
            }
            Action::SetErrors(errors) => {
                self.errors = errors;
            }
            Action::ClearErrors => {
                self.errors = ErrorBag::new();
            }
        }
    }

    fn clamp_page(&mut self) {
        let total = self
            .active_user
            .as_ref()
            .and_then(|u| self.total_pages.get(u))
            .copied()
            .unwrap_or(0);
        if total > 0 && self.current_page > total {
            self.current_page = total;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpensePage;

    fn user() -> UserId {
        UserId::new("u1")
    }

    fn expense(id: &str) -> Expense {
        Expense {
            id: ExpenseId::new(id),
            date: "2024-01-01 00:00".to_string(),
            description: format!("Expense {id}"),
            amount_cents: 500,
        }
    }

    fn loaded(items: Vec<Expense>, page: u32, total_pages: u32) -> AppState {
        let mut state = AppState::new();
        state.reduce(Action::FetchStarted { user_id: user() });
        state.reduce(Action::FetchSucceeded {
            user_id: user(),
            page: ExpensePage {
                items,
                page,
                total_pages,
            },
        });
        state
    }

    #[test]
    fn test_default_page_is_one() {
        let state = AppState::new();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.pending_fetches, 0);
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut state = AppState::new();
        state.errors = ErrorBag::general_message("old failure");
        state.reduce(Action::FetchStarted { user_id: user() });
        assert_eq!(state.pending_fetches, 1);
        assert!(state.errors.general().is_empty());

        state.reduce(Action::FetchSucceeded {
            user_id: user(),
            page: ExpensePage {
                items: vec![expense("a"), expense("b")],
                page: 2,
                total_pages: 3,
            },
        });
        assert_eq!(state.pending_fetches, 0);
        assert_eq!(state.expenses[&user()].len(), 2);
        assert_eq!(state.current_page, 2);
        assert_eq!(state.total_pages[&user()], 3);
    }

    #[test]
    fn test_overlapping_fetches_stay_loading() {
        let mut state = AppState::new();
        state.reduce(Action::FetchStarted { user_id: user() });
        state.reduce(Action::FetchStarted { user_id: user() });
        state.reduce(Action::FetchFailed {
            user_id: user(),
            errors: ErrorBag::general_message("timeout"),
        });
        assert_eq!(state.pending_fetches, 1);
        assert_eq!(state.errors.general(), ["timeout".to_string()]);
    }

    #[test]
    fn test_set_page_is_clamped() {
        let mut state = loaded(vec![expense("a")], 1, 4);
        state.reduce(Action::SetPage(9));
        assert_eq!(state.current_page, 4);
        state.reduce(Action::SetPage(0));
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_set_page_without_pages_is_not_clamped() {
        let mut state = loaded(vec![], 1, 0);
        state.reduce(Action::SetPage(3));
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn test_fetch_clamps_stale_page() {
        let state = loaded(vec![expense("a")], 5, 2);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_filters_reset_page() {
        let mut state = loaded(vec![expense("a")], 3, 3);
        state.reduce(Action::SetFilters(ExpenseFilters {
            description: "tax".to_string(),
            ..Default::default()
        }));
        assert_eq!(state.current_page, 1);
        assert_eq!(state.filters.description, "tax");
    }

    #[test]
    fn test_editing_focus() {
        let mut state = AppState::new();
        state.reduce(Action::SetEditingFocus {
            user_id: user(),
            expense_id: Some(ExpenseId::new("a")),
        });
        assert_eq!(state.editing_focus.get(&user()), Some(&ExpenseId::new("a")));

        state.reduce(Action::SetEditingFocus {
            user_id: user(),
            expense_id: None,
        });
        assert!(state.editing_focus.get(&user()).is_none());
    }

    #[test]
    fn test_saved_expense_is_upserted() {
        let mut state = loaded(vec![expense("a"), expense("b")], 1, 1);
        let mut changed = expense("a");
        changed.description = "Changed".to_string();
        state.reduce(Action::ExpenseSaved {
            user_id: user(),
            expense: changed,
        });
        state.reduce(Action::ExpenseSaved {
            user_id: user(),
            expense: expense("c"),
        });

        let list = &state.expenses[&user()];
        assert_eq!(list.len(), 3);
        assert_eq!(state.save_generation, 2);
        assert_eq!(list[0].description, "Changed");
        assert_eq!(list[2].id, ExpenseId::new("c"));
    }

    #[test]
    fn test_removing_focused_expense_clears_focus() {
        let mut state = loaded(vec![expense("a"), expense("b")], 1, 1);
        state.reduce(Action::SetEditingFocus {
            user_id: user(),
            expense_id: Some(ExpenseId::new("b")),
        });
        state.reduce(Action::ExpenseRemoved {
            user_id: user(),
            expense_id: ExpenseId::new("b"),
        });
        assert_eq!(state.expenses[&user()].len(), 1);
        assert!(state.editing_focus.is_empty());
    }

    #[test]
    fn test_errors_set_and_cleared() {
        let mut state = AppState::new();
        let mut bag = ErrorBag::new();
        bag.push("amount", "Amount is required");
        state.reduce(Action::SetErrors(bag.clone()));
        assert_eq!(state.errors, bag);
        state.reduce(Action::ClearErrors);
        assert!(state.errors.is_empty());
    }
}
