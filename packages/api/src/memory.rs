use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use store::{Expense, ExpenseId, ExpensePage, ExpensesConfig, NewExpense, UserId};

use crate::client::{ExpenseApi, ExpenseQuery};
use crate::error::ApiError;

/// In-memory ExpenseApi for tests and offline demos.
///
/// Filters and paginates like the real backend so the views see the same
/// page shapes.
#[derive(Clone, Debug)]
pub struct MemoryApi {
    data: Arc<Mutex<MemoryData>>,
    page_size: u32,
}

#[derive(Debug, Default)]
struct MemoryData {
    expenses: HashMap<UserId, Vec<Expense>>,
    next_id: u64,
    signed_out: bool,
    failure: Option<(u16, String)>,
    calls: Vec<String>,
}

impl Default for MemoryApi {
    fn default() -> Self {
        Self::new(10)
    }
}

impl MemoryApi {
    pub fn new(page_size: u32) -> Self {
        Self {
            data: Arc::new(Mutex::new(MemoryData::default())),
            page_size: page_size.max(1),
        }
    }

    /// Empty backend paging like the configured server.
    pub fn from_config(config: &ExpensesConfig) -> Self {
        Self::new(config.pagination.page_size)
    }

    /// Seed a user's expenses directly.
    pub fn insert(&self, user_id: &UserId, expense: NewExpense) -> Expense {
        let mut data = self.data.lock().unwrap();
        data.next_id += 1;
        let expense = expense.into_expense(ExpenseId::new(data.next_id.to_string()));
        data.expenses
            .entry(user_id.clone())
            .or_default()
            .push(expense.clone());
        expense
    }

    /// Make every later call fail with `Unauthorized`.
    pub fn sign_out(&self) {
        self.data.lock().unwrap().signed_out = true;
    }

    /// Make every later call fail with the given status.
    pub fn fail_with(&self, status: u16, message: &str) {
        self.data.lock().unwrap().failure = Some((status, message.to_string()));
    }

    /// Names of the calls received so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.data.lock().unwrap().calls.clone()
    }

    pub fn expenses(&self, user_id: &UserId) -> Vec<Expense> {
        self.data
            .lock()
            .unwrap()
            .expenses
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    fn begin(&self, call: &str) -> Result<std::sync::MutexGuard<'_, MemoryData>, ApiError> {
        let mut data = self.data.lock().unwrap();
        data.calls.push(call.to_string());
        if data.signed_out {
            return Err(ApiError::Unauthorized);
        }
        if let Some((status, message)) = data.failure.clone() {
            return Err(crate::http::error_for_status(status, call, &message));
        }
        Ok(data)
    }
}

fn not_found(user_id: &UserId, expense_id: &ExpenseId) -> ApiError {
    ApiError::NotFound(format!("/users/{user_id}/expenses/{expense_id}"))
}

impl ExpenseApi for MemoryApi {
    async fn list_expenses(
        &self,
        user_id: &UserId,
        query: &ExpenseQuery,
    ) -> Result<ExpensePage, ApiError> {
        let data = self.begin("list")?;
        let matching: Vec<&Expense> = data
            .expenses
            .get(user_id)
            .map(|list| list.iter().filter(|e| query.filters.matches(e)).collect())
            .unwrap_or_default();

        let page_size = self.page_size as usize;
        let total_pages = matching.len().div_ceil(page_size) as u32;
        let page = query.page.clamp(1, total_pages.max(1));
        let items = matching
            .into_iter()
            .skip((page as usize - 1) * page_size)
            .take(page_size)
            .cloned()
            .collect();

        Ok(ExpensePage {
            items,
            page,
            total_pages,
        })
    }

    async fn create_expense(
        &self,
        user_id: &UserId,
        expense: &NewExpense,
    ) -> Result<Expense, ApiError> {
        let mut data = self.begin("create")?;
        data.next_id += 1;
        let created = expense
            .clone()
            .into_expense(ExpenseId::new(data.next_id.to_string()));
        data.expenses
            .entry(user_id.clone())
            .or_default()
            .push(created.clone());
        Ok(created)
    }

    async fn update_expense(
        &self,
        user_id: &UserId,
        expense_id: &ExpenseId,
        expense: &NewExpense,
    ) -> Result<Expense, ApiError> {
        let mut data = self.begin("update")?;
        let existing = data
            .expenses
            .get_mut(user_id)
            .and_then(|list| list.iter_mut().find(|e| &e.id == expense_id))
            .ok_or_else(|| not_found(user_id, expense_id))?;
        *existing = expense.clone().into_expense(expense_id.clone());
        Ok(existing.clone())
    }

    async fn delete_expense(&self, user_id: &UserId, expense_id: &ExpenseId) -> Result<(), ApiError> {
        let mut data = self.begin("delete")?;
        let list = data
            .expenses
            .get_mut(user_id)
            .ok_or_else(|| not_found(user_id, expense_id))?;
        let before = list.len();
        list.retain(|e| &e.id != expense_id);
        if list.len() == before {
            return Err(not_found(user_id, expense_id));
        }
        Ok(())
    }
}
