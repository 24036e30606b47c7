//! This crate contains all shared UI for the workspace.

mod client;
pub use client::CallbackHistory;

mod store_provider;
pub use store_provider::{use_api, use_config, use_store, AppStore, StoreProvider};

mod input;
pub use input::{date_input_value, normalize_date_selection, Input, InputKind};

mod error_message;
pub use error_message::ErrorMessage;

mod expense_row;
pub use expense_row::ExpenseRow;

mod edit_expense;
pub use edit_expense::EditExpense;

mod pagination;
pub use pagination::{page_items, PageItem, Pagination};

mod filters;
pub use filters::Filters;

pub mod views;
pub use views::{Expenses, ExpensesList, ExpensesView};
