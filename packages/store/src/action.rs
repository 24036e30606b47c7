use crate::errors::ErrorBag;
use crate::models::{Expense, ExpenseFilters, ExpenseId, ExpensePage, UserId};

/// Every mutation [`crate::AppState`] accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    FetchStarted {
        user_id: UserId,
    },
    FetchSucceeded {
        user_id: UserId,
        page: ExpensePage,
    },
    FetchFailed {
        user_id: UserId,
        errors: ErrorBag,
    },
    SetEditingFocus {
        user_id: UserId,
        expense_id: Option<ExpenseId>,
    },
    SetPage(u32),
    SetFilters(ExpenseFilters),
    ExpenseSaved {
        user_id: UserId,
        expense: Expense,
    },
    ExpenseRemoved {
        user_id: UserId,
        expense_id: ExpenseId,
    },
    SetErrors(ErrorBag),
    ClearErrors,
}

impl Action {
    /// Short name used in dispatch logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::FetchStarted { .. } => "fetch_started",
            Action::FetchSucceeded { .. } => "fetch_succeeded",
            Action::FetchFailed { .. } => "fetch_failed",
            Action::SetEditingFocus { .. } => "set_editing_focus",
            Action::SetPage(_) => "set_page",
            Action::SetFilters(_) => "set_filters",
            Action::ExpenseSaved { .. } => "expense_saved",
            Action::ExpenseRemoved { .. } => "expense_removed",
            Action::SetErrors(_) => "set_errors",
            Action::ClearErrors => "clear_errors",
        }
    }
}
