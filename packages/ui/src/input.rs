//! Controlled text/date field.

use chrono::{NaiveDate, NaiveDateTime};
use dioxus::prelude::*;
use store::models::DATE_FORMAT;

/// Which field [`Input`] renders.
///
/// Anything but `"date"` is a plain field that keeps its HTML type
/// (`text`, `number`, `password`...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text(String),
    Date,
}

impl Default for InputKind {
    fn default() -> Self {
        InputKind::Text("text".to_string())
    }
}

impl From<&str> for InputKind {
    fn from(value: &str) -> Self {
        match value.trim() {
            "date" => InputKind::Date,
            "" => InputKind::default(),
            other => InputKind::Text(other.to_string()),
        }
    }
}

impl From<String> for InputKind {
    fn from(value: String) -> Self {
        InputKind::from(value.as_str())
    }
}

impl InputKind {
    /// Value passed to `on_change` for a raw event value, if any.
    ///
    /// Plain fields pass the text through untouched. The date picker emits
    /// `YYYY-MM-DD HH:mm`, or an empty string when it is cleared.
    pub fn change_value(&self, raw: &str) -> Option<String> {
        match self {
            InputKind::Text(_) => Some(raw.to_string()),
            InputKind::Date if raw.trim().is_empty() => Some(String::new()),
            InputKind::Date => normalize_date_selection(raw),
        }
    }
}

/// Turn a picker selection into `YYYY-MM-DD HH:mm`.
///
/// The picker yields a bare date, so the time is midnight. A value that already
/// carries a time keeps it.
pub fn normalize_date_selection(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, DATE_FORMAT) {
        return Some(datetime.format(DATE_FORMAT).to_string());
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.format(DATE_FORMAT).to_string())
}

/// The `YYYY-MM-DD` part a date picker can display, or empty.
pub fn date_input_value(value: &str) -> String {
    value
        .get(..10)
        .filter(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").is_ok())
        .unwrap_or_default()
        .to_string()
}

fn size_class(small: bool) -> &'static str {
    if small {
        "input text-sm px-2 py-1"
    } else {
        "input text-base px-3 py-2"
    }
}

/// A single editable field that reports its value as a string.
///
/// `type = "date"` renders a selection-only date picker emitting
/// `YYYY-MM-DD HH:mm` (empty when cleared); anything else renders a field of
/// that type emitting the raw text on every keystroke.
#[component]
pub fn Input(
    #[props(into)] value: String,
    #[props(default, into)] r#type: InputKind,
    #[props(default)] small: bool,
    #[props(default, into)] id: String,
    #[props(default, into)] placeholder: String,
    on_change: EventHandler<String>,
) -> Element {
    match r#type.clone() {
        InputKind::Date => rsx! {
            input {
                id: "{id}",
                class: "{size_class(small)}",
                r#type: "date",
                value: date_input_value(&value),
                // Selection only; typed dates are ignored.
                onkeydown: move |evt: KeyboardEvent| evt.prevent_default(),
                onchange: move |evt: FormEvent| {
                    match InputKind::Date.change_value(&evt.value()) {
                        Some(date) => on_change.call(date),
                        None => tracing::debug!(raw = %evt.value(), "ignoring unparsable date"),
                    }
                },
            }
        },
        InputKind::Text(html_type) => rsx! {
            input {
                id: "{id}",
                class: "{size_class(small)}",
                r#type: "{html_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    if let Some(text) = r#type.change_value(&evt.value()) {
                        on_change.call(text);
                    }
                },
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_type_string() {
        let text = |t: &str| InputKind::Text(t.to_string());
        assert_eq!(InputKind::from("date"), InputKind::Date);
        assert_eq!(InputKind::from("text"), text("text"));
        assert_eq!(InputKind::from("number"), text("number"));
        assert_eq!(InputKind::from("password"), text("password"));
        assert_eq!(InputKind::from(""), text("text"));
        assert_eq!(InputKind::default(), text("text"));
    }

    #[test]
    fn test_text_change_passes_raw_string() {
        let kind = InputKind::default();
        for raw in ["", "a", "  padded  ", "12.50", "2024-03-07"] {
            assert_eq!(kind.change_value(raw), Some(raw.to_string()));
        }
        assert_eq!(InputKind::from("number").change_value("007"), Some("007".to_string()));
    }

    #[test]
    fn test_date_change_values() {
        let kind = InputKind::Date;
        assert_eq!(kind.change_value("2024-03-07"), Some("2024-03-07 00:00".to_string()));
        assert_eq!(kind.change_value(""), Some(String::new()));
        assert_eq!(kind.change_value("  "), Some(String::new()));
        assert_eq!(kind.change_value("2024-13-01"), None);
    }

    #[test]
    fn test_normalize_date_selection() {
        assert_eq!(
            normalize_date_selection("2024-03-07"),
            Some("2024-03-07 00:00".to_string())
        );
        assert_eq!(
            normalize_date_selection("2024-03-07 18:45"),
            Some("2024-03-07 18:45".to_string())
        );
        assert_eq!(normalize_date_selection(""), None);
        assert_eq!(normalize_date_selection("2024-02-30"), None);
    }

    #[test]
    fn test_normalized_dates_match_format() {
        for raw in ["1999-12-31", "2000-01-01", "2024-02-29"] {
            let value = normalize_date_selection(raw).unwrap();
            assert_eq!(value.len(), 16);
            assert!(NaiveDateTime::parse_from_str(&value, DATE_FORMAT).is_ok());
        }
    }

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value("2024-03-07 00:00"), "2024-03-07");
        assert_eq!(date_input_value(""), "");
        assert_eq!(date_input_value("garbage value"), "");
    }

    #[component]
    fn TextHarness(value: String, small: bool) -> Element {
        rsx! {
            Input { value, r#type: "text", small, on_change: move |_: String| {} }
        }
    }

    #[component]
    fn DateHarness(value: String) -> Element {
        rsx! {
            Input { value, r#type: "date", on_change: move |_: String| {} }
        }
    }

    #[test]
    fn test_renders_text_field() {
        let mut dom = VirtualDom::new_with_props(
            TextHarness,
            TextHarnessProps {
                value: "coffee".to_string(),
                small: true,
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("type=\"text\""));
        assert!(html.contains("value=\"coffee\""));
        assert!(html.contains("text-sm"));
    }

    #[test]
    fn test_renders_date_picker() {
        let mut dom = VirtualDom::new_with_props(
            DateHarness,
            DateHarnessProps {
                value: "2024-03-07 00:00".to_string(),
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("type=\"date\""));
        assert!(html.contains("value=\"2024-03-07\""));
        assert!(html.contains("text-base"));
    }

    #[component]
    fn NumberHarness(value: String) -> Element {
        rsx! {
            Input { value, r#type: "number", on_change: move |_: String| {} }
        }
    }

    #[test]
    fn test_renders_requested_html_type() {
        let mut dom = VirtualDom::new_with_props(
            NumberHarness,
            NumberHarnessProps {
                value: "3".to_string(),
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("type=\"number\""));
        assert!(html.contains("value=\"3\""));
    }
}
