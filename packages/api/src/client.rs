//! The expense backend as seen by the thunks.

use std::future::Future;

use store::{Expense, ExpenseFilters, ExpenseId, ExpensePage, NewExpense, UserId};

use crate::error::ApiError;

/// Page and filters of a list request.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseQuery {
    /// 1-based.
    pub page: u32,
    pub filters: ExpenseFilters,
}

impl Default for ExpenseQuery {
    fn default() -> Self {
        Self {
            page: 1,
            filters: ExpenseFilters::default(),
        }
    }
}

impl ExpenseQuery {
    /// Query-string pairs; empty filters are left out.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.max(1).to_string())];
        let description = self.filters.description.trim();
        if !description.is_empty() {
            params.push(("description", description.to_string()));
        }
        if let Some(from) = &self.filters.from {
            params.push(("from", from.clone()));
        }
        if let Some(to) = &self.filters.to {
            params.push(("to", to.clone()));
        }
        params
    }
}

/// Async access to a user's expenses.
pub trait ExpenseApi {
    fn list_expenses(
        &self,
        user_id: &UserId,
        query: &ExpenseQuery,
    ) -> impl Future<Output = Result<ExpensePage, ApiError>>;
    fn create_expense(
        &self,
        user_id: &UserId,
        expense: &NewExpense,
    ) -> impl Future<Output = Result<Expense, ApiError>>;
    fn update_expense(
        &self,
        user_id: &UserId,
        expense_id: &ExpenseId,
        expense: &NewExpense,
    ) -> impl Future<Output = Result<Expense, ApiError>>;
    fn delete_expense(
        &self,
        user_id: &UserId,
        expense_id: &ExpenseId,
    ) -> impl Future<Output = Result<(), ApiError>>;
}
