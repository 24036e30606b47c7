//! # Domain models for expenses
//!
//! Defines the records held in [`crate::AppState`] and exchanged with the
//! expense backend. These types are `Serialize + Deserialize` so they can cross
//! the HTTP boundary unchanged.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Expense`] | A stored expense. Carries a stable [`ExpenseId`], the date (`YYYY-MM-DD HH:mm`), a description, and the amount in cents. |
//! | [`ExpenseDraft`] | The edit form's raw field text. Validated into a [`NewExpense`] or an [`ErrorBag`] of field errors. |
//! | [`NewExpense`] | A validated payload for create/update requests. |
//! | [`ExpenseFilters`] | Description substring and optional date bounds applied by the list query. |
//! | [`ExpensePage`] | One page of a user's expenses as returned by the backend. |
//!
//! ## Helper functions
//!
//! - [`parse_amount`] — `"12.5"` → `1250` cents, rejecting negatives and more
//!   than two decimals.
//! - [`format_amount`] — the inverse, always with two decimals.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::ErrorBag;

/// Format every expense date is stored and emitted in.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Identifier of a user whose expenses are listed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identifier of an expense record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// "2024-03-01 00:00"
    pub date: String,
    pub description: String,
    pub amount_cents: i64,
}

impl Expense {
    /// Amount as shown in the list, e.g. "12.50".
    pub fn display_amount(&self) -> String {
        format_amount(self.amount_cents)
    }
}

/// Validated create/update payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub date: String,
    pub description: String,
    pub amount_cents: i64,
}

impl NewExpense {
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            date: self.date,
            description: self.description,
            amount_cents: self.amount_cents,
        }
    }
}

/// Raw text of the edit form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseDraft {
    pub date: String,
    pub description: String,
    pub amount: String,
}

impl ExpenseDraft {
    /// Seed a draft from an existing record (update mode).
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            date: expense.date.clone(),
            description: expense.description.clone(),
            amount: expense.display_amount(),
        }
    }

    /// Validate every field, collecting one message per failing field.
    pub fn validate(&self) -> Result<NewExpense, ErrorBag> {
        let mut errors = ErrorBag::new();

        let description = self.description.trim();
        if description.is_empty() {
            errors.push("description", "Description is required");
        }

        let date = self.date.trim();
        if date.is_empty() {
            errors.push("date", "Date is required");
        } else if NaiveDateTime::parse_from_str(date, DATE_FORMAT).is_err() {
            errors.push("date", "Date must look like YYYY-MM-DD HH:mm");
        }

        let amount = parse_amount(&self.amount);
        if amount.is_none() {
            errors.push("amount", "Amount must be a positive number with at most two decimals");
        }

        match amount {
            Some(amount_cents) if errors.is_empty() => Ok(NewExpense {
                date: date.to_string(),
                description: description.to_string(),
                amount_cents,
            }),
            _ => Err(errors),
        }
    }
}

/// List filters. Empty description and `None` bounds match everything.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseFilters {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

impl ExpenseFilters {
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.from.is_none() && self.to.is_none()
    }

    /// Whether an expense passes these filters.
    ///
    /// Dates share one fixed-width format, so bounds compare lexically. Bounds
    /// are inclusive and only their `YYYY-MM-DD` prefix is compared.
    pub fn matches(&self, expense: &Expense) -> bool {
        let needle = self.description.trim().to_lowercase();
        if !needle.is_empty() && !expense.description.to_lowercase().contains(&needle) {
            return false;
        }
        let day = day_of(&expense.date);
        if let Some(from) = self.from.as_deref() {
            if day < day_of(from) {
                return false;
            }
        }
        if let Some(to) = self.to.as_deref() {
            if day > day_of(to) {
                return false;
            }
        }
        true
    }
}

fn day_of(date: &str) -> &str {
    date.get(..10).unwrap_or(date)
}

/// A page of expenses for one user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpensePage {
    pub items: Vec<Expense>,
    pub page: u32,
    pub total_pages: u32,
}

/// Parse a decimal amount into cents.
pub fn parse_amount(input: &str) -> Option<i64> {
    let input = input.trim();
    let (whole, frac) = match input.split_once('.') {
        Some((w, f)) => (w, f),
        None => (input, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 2 {
        return None;
    }
    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(frac)
}

/// Format cents as a decimal string with two places.
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, date: &str, description: &str) -> Expense {
        Expense {
            id: ExpenseId::new(id),
            date: date.to_string(),
            description: description.to_string(),
            amount_cents: 100,
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12"), Some(1200));
        assert_eq!(parse_amount("12.5"), Some(1250));
        assert_eq!(parse_amount(" 0.07 "), Some(7));
        assert_eq!(parse_amount(".5"), Some(50));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("-3"), None);
        assert_eq!(parse_amount("1.234"), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1250), "12.50");
        assert_eq!(format_amount(7), "0.07");
        assert_eq!(format_amount(-199), "-1.99");
    }

    #[test]
    fn test_validate_draft() {
        let draft = ExpenseDraft {
            date: "2024-03-01 09:30".to_string(),
            description: "  Lunch ".to_string(),
            amount: "8.90".to_string(),
        };
        let valid = draft.validate().unwrap();
        assert_eq!(valid.description, "Lunch");
        assert_eq!(valid.amount_cents, 890);
        assert_eq!(valid.date, "2024-03-01 09:30");
    }

    #[test]
    fn test_validate_draft_collects_field_errors() {
        let draft = ExpenseDraft {
            date: "yesterday".to_string(),
            description: "".to_string(),
            amount: "lots".to_string(),
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("description").len(), 1);
        assert_eq!(errors.get("date").len(), 1);
        assert_eq!(errors.get("amount").len(), 1);
        assert!(errors.general().is_empty());
    }

    #[test]
    fn test_draft_from_expense() {
        let mut e = expense("1", "2024-01-02 00:00", "Taxi");
        e.amount_cents = 2305;
        let draft = ExpenseDraft::from_expense(&e);
        assert_eq!(draft.amount, "23.05");
        assert_eq!(draft.validate().unwrap().amount_cents, 2305);
    }

    #[test]
    fn test_filters_match() {
        let e = expense("1", "2024-02-10 12:00", "Coffee beans");

        assert!(ExpenseFilters::default().matches(&e));

        let by_text = ExpenseFilters {
            description: "COFFEE".to_string(),
            ..Default::default()
        };
        assert!(by_text.matches(&e));

        let bounded = ExpenseFilters {
            from: Some("2024-02-10 00:00".to_string()),
            to: Some("2024-02-10 00:00".to_string()),
            ..Default::default()
        };
        assert!(bounded.matches(&e));

        let after = ExpenseFilters {
            from: Some("2024-02-11 00:00".to_string()),
            ..Default::default()
        };
        assert!(!after.matches(&e));
    }

    #[test]
    fn test_expense_serialization() {
        let e = expense("abc", "2024-01-01 00:00", "Books");
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"id\":\"abc\""));
        assert!(json.contains("\"amount_cents\":100"));

        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
