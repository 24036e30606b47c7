//! # HTTP client for the expense backend
//!
//! [`HttpApi`] implements [`ExpenseApi`] over JSON/HTTP with `reqwest`, which
//! runs both natively and in the browser (WASM).
//!
//! ## Endpoints
//!
//! | Operation | Request | Success body |
//! |-----------|---------|--------------|
//! | list | `GET {base}/users/{user}/expenses?page=&description=&from=&to=` | [`ExpensePage`] |
//! | create | `POST {base}/users/{user}/expenses` with [`NewExpense`] | [`Expense`] |
//! | update | `PUT {base}/users/{user}/expenses/{id}` with [`NewExpense`] | [`Expense`] |
//! | delete | `DELETE {base}/users/{user}/expenses/{id}` | empty |
//!
//! ## Status mapping
//!
//! | Status | Error |
//! |--------|-------|
//! | 401 | [`ApiError::Unauthorized`] |
//! | 404 | [`ApiError::NotFound`] with the request path |
//! | 422 | [`ApiError::Validation`] decoded from `{"errors": {field: [message]}}` |
//! | other non-2xx | [`ApiError::Status`] with the response text |

use reqwest::{Client, Response};
use serde::Deserialize;
use store::{ErrorBag, Expense, ExpenseId, ExpensePage, ExpensesConfig, NewExpense, UserId};

use crate::client::{ExpenseApi, ExpenseQuery};
use crate::error::ApiError;

#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ValidationBody {
    #[serde(default)]
    errors: ErrorBag,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ExpensesConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, user_id: &UserId) -> String {
        format!("{}/users/{}/expenses", self.base_url, user_id)
    }

    fn item_url(&self, user_id: &UserId, expense_id: &ExpenseId) -> String {
        format!("{}/{}", self.collection_url(user_id), expense_id)
    }
}

/// Map a non-success response to an error.
pub(crate) fn error_for_status(status: u16, path: &str, body: &str) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        404 => ApiError::NotFound(path.to_string()),
        422 => match serde_json::from_str::<ValidationBody>(body) {
            Ok(parsed) if !parsed.errors.is_empty() => ApiError::Validation(parsed.errors),
            _ => ApiError::Validation(ErrorBag::general_message("The expense is not valid.")),
        },
        status => ApiError::Status {
            status,
            message: body.trim().to_string(),
        },
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let path = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), %path, "expense request failed");
    Err(error_for_status(status.as_u16(), &path, &body))
}

impl ExpenseApi for HttpApi {
    async fn list_expenses(
        &self,
        user_id: &UserId,
        query: &ExpenseQuery,
    ) -> Result<ExpensePage, ApiError> {
        let response = self
            .client
            .get(self.collection_url(user_id))
            .query(&query.to_params())
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn create_expense(
        &self,
        user_id: &UserId,
        expense: &NewExpense,
    ) -> Result<Expense, ApiError> {
        let response = self
            .client
            .post(self.collection_url(user_id))
            .json(expense)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn update_expense(
        &self,
        user_id: &UserId,
        expense_id: &ExpenseId,
        expense: &NewExpense,
    ) -> Result<Expense, ApiError> {
        let response = self
            .client
            .put(self.item_url(user_id, expense_id))
            .json(expense)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn delete_expense(&self, user_id: &UserId, expense_id: &ExpenseId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.item_url(user_id, expense_id))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}
