//! HTTP API Client
//!
//! Client for the Outlay expense endpoints. The base URL is injected at
//! construction; nothing is read from the environment at call time.

use gloo_net::http::Request;

use crate::state::global::{Expense, ExpenseDraft};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:4000/api";

/// Local storage key for the API base URL override
const API_URL_KEY: &str = "outlay_api_url";

/// Get the API base URL from local storage or use default
pub fn stored_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn store_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url);
        }
    }
}

/// Error envelope returned by the API on failure
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Client for the expense endpoints, bound to one base URL
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (trailing slash tolerated)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The base URL this client was constructed with
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch all expenses
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, String> {
        let response = Request::get(&self.url("/expenses"))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let error: ApiError = response.json().await.unwrap_or(ApiError {
                error: "Unknown error".to_string(),
                code: None,
            });
            return Err(error.error);
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Create a new expense from a validated draft
    pub async fn create_expense(&self, draft: &ExpenseDraft) -> Result<Expense, String> {
        let response = Request::post(&self.url("/expenses"))
            .json(draft)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let error: ApiError = response.json().await.unwrap_or(ApiError {
                error: "Unknown error".to_string(),
                code: None,
            });
            return Err(error.error);
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Delete an expense by id
    pub async fn delete_expense(&self, id: &str) -> Result<(), String> {
        let response = Request::delete(&self.url(&format!("/expenses/{}", id)))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let error: ApiError = response.json().await.unwrap_or(ApiError {
                error: "Unknown error".to_string(),
                code: None,
            });
            return Err(error.error);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = ApiClient::new("http://localhost:4000/api/");
        assert_eq!(client.base_url(), "http://localhost:4000/api");
    }

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:4000/api");
        assert_eq!(client.url("/expenses"), "http://localhost:4000/api/expenses");
        assert_eq!(
            client.url("/expenses/abc123"),
            "http://localhost:4000/api/expenses/abc123"
        );
    }
}
