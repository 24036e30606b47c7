use store::ErrorBag;
use thiserror::Error;

/// Failures reported by an [`crate::ExpenseApi`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not signed in")]
    Unauthorized,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("rejected by validation")]
    Validation(ErrorBag),
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// Messages to put in the store's error bag.
    ///
    /// Validation failures keep their field categories; everything else
    /// becomes a single general message.
    pub fn to_error_bag(&self) -> ErrorBag {
        match self {
            ApiError::Validation(bag) => bag.clone(),
            ApiError::Unauthorized => {
                ErrorBag::general_message("Your session has expired. Please sign in again.")
            }
            ApiError::NotFound(_) => ErrorBag::general_message("That expense no longer exists."),
            ApiError::Status { status, .. } if *status >= 500 => {
                ErrorBag::general_message("The server had a problem. Please try again later.")
            }
            ApiError::Status { message, .. } if !message.is_empty() => {
                ErrorBag::general_message(message.clone())
            }
            ApiError::Status { status, .. } => {
                ErrorBag::general_message(format!("Request failed with status {status}."))
            }
            ApiError::Http(_) => {
                ErrorBag::general_message("Could not reach the server. Check your connection.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_keeps_fields() {
        let mut bag = ErrorBag::new();
        bag.push("amount", "Amount is required");
        let err = ApiError::Validation(bag.clone());
        assert_eq!(err.to_error_bag(), bag);
    }

    #[test]
    fn test_other_errors_are_general() {
        let bag = ApiError::Unauthorized.to_error_bag();
        assert_eq!(bag.general().len(), 1);

        let bag = ApiError::Status {
            status: 503,
            message: "upstream down".to_string(),
        }
        .to_error_bag();
        assert_eq!(
            bag.general(),
            ["The server had a problem. Please try again later.".to_string()]
        );

        let bag = ApiError::Status {
            status: 409,
            message: "Duplicate expense".to_string(),
        }
        .to_error_bag();
        assert_eq!(bag.general(), ["Duplicate expense".to_string()]);
    }
}
