//! # API crate — the expense backend client and the thunks built on it
//!
//! Everything side-effecting lives here; the `store` crate stays pure and the
//! `ui` crate only spawns thunks.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`ExpenseApi`] trait and the [`ExpenseQuery`] sent with list requests |
//! | [`http`] | [`HttpApi`], the `reqwest` implementation used by the app |
//! | [`memory`] | [`MemoryApi`], an in-memory implementation for tests and demos |
//! | [`error`] | [`ApiError`] and its conversion into the store's error bag |
//! | [`history`] | The [`History`] navigation seam used to redirect on expired sessions |
//! | [`thunks`] | `fetch_expenses`, `delete_expense`, `save_expense` and the plain action creators |

pub mod client;
pub mod error;
pub mod history;
pub mod http;
pub mod memory;
pub mod thunks;

pub use client::{ExpenseApi, ExpenseQuery};
pub use error::ApiError;
pub use history::{History, MemoryHistory, LOGIN_PATH};
pub use http::HttpApi;
pub use memory::MemoryApi;
pub use thunks::{
    delete_expense, fetch_expenses, save_expense, set_editing_focus, set_filters,
    set_page_expenses,
};
