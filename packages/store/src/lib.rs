//! Application state for the expense views: models, actions, reducer and
//! selectors. Framework-free; the `ui` crate wraps it in a Dioxus signal.

pub mod action;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod models;
pub mod selectors;
pub mod state;

pub use action::Action;
pub use config::ExpensesConfig;
pub use dispatch::{Dispatch, Store};
pub use errors::ErrorBag;
pub use models::{
    Expense, ExpenseDraft, ExpenseFilters, ExpenseId, ExpensePage, NewExpense, UserId,
};
pub use state::{AppState, Session};
