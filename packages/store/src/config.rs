//! # Application configuration — `expenses.toml`
//!
//! Defines the TOML configuration read by the web binary at startup
//! (filename: [`ExpensesConfig::filename`] = `"expenses.toml"`). It tells the
//! client where the expense backend lives, how many records a page holds, and
//! which user is signed in by default.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080/api"
//!
//! [pagination]
//! page_size = 10
//!
//! [session]
//! user_id = "demo"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ExpensesConfig`] | Top-level config. Provides builder helpers, TOML parsing, and the canonical filename. |
//! | [`ApiConfig`] | Backend base URL. |
//! | [`PaginationConfig`] | `page_size`, default **10**. |
//! | [`SessionConfig`] | Optional default user id. |
//!
//! All sections are optional; a missing or empty file is the default
//! configuration.

use serde::{Deserialize, Serialize};

use crate::models::UserId;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpensesConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Absolute base URL of the expense backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    10
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl ExpensesConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
            ..Self::default()
        }
    }

    /// Builder method to set the page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.pagination.page_size = page_size;
        self
    }

    pub fn filename() -> &'static str {
        "expenses.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
