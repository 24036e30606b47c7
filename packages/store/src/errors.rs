//! Category-keyed error messages kept in the store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category for load and mutation failures shown above the list.
pub const GENERAL: &str = "general";

/// Display-ready error messages grouped by category.
///
/// `"general"` holds list-level failures; any other key names a form field.
/// Messages keep insertion order within a category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorBag(BTreeMap<String, Vec<String>>);

impl ErrorBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bag holding a single general message.
    pub fn general_message(message: impl Into<String>) -> Self {
        let mut bag = Self::new();
        bag.push(GENERAL, message);
        bag
    }

    pub fn push(&mut self, category: &str, message: impl Into<String>) {
        self.0
            .entry(category.to_string())
            .or_default()
            .push(message.into());
    }

    /// Messages for a category, empty when there are none.
    pub fn get(&self, category: &str) -> &[String] {
        self.0.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drop every message in a category.
    pub fn clear(&mut self, category: &str) {
        self.0.remove(category);
    }

    /// Append all messages of `other`, category by category.
    pub fn merge(&mut self, other: ErrorBag) {
        for (category, messages) in other.0 {
            self.0.entry(category).or_default().extend(messages);
        }
    }

    pub fn general(&self) -> &[String] {
        self.get(GENERAL)
    }

    /// Everything except the general category.
    pub fn fields(&self) -> ErrorBag {
        ErrorBag(
            self.0
                .iter()
                .filter(|(k, _)| k.as_str() != GENERAL)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut bag = ErrorBag::new();
        bag.push(GENERAL, "A");
        bag.push(GENERAL, "B");
        assert_eq!(bag.general(), ["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_fields_excludes_general() {
        let mut bag = ErrorBag::general_message("Could not load");
        bag.push("amount", "Amount is required");
        let fields = bag.fields();
        assert!(fields.general().is_empty());
        assert_eq!(fields.get("amount").len(), 1);
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_deserialize_from_map() {
        let bag: ErrorBag =
            serde_json::from_str(r#"{"general":["x"],"date":["bad date"]}"#).unwrap();
        assert_eq!(bag.general(), ["x".to_string()]);
        assert_eq!(bag.get("date"), ["bad date".to_string()]);
        assert!(bag.get("missing").is_empty());
    }
}
