use serde::{Deserialize, Serialize};

/// Selector hints used by the Playwright helper to locate elements in the DOM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorHint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>, // ARIA role, e.g. "textbox", "button"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>, // accessible name (aria-label or visible text)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>, // HTML tag, e.g. "input", "button", "a"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>, // type attribute, e.g. "text", "submit", "file"
    #[serde(rename = "formId", skip_serializing_if = "Option::is_none")]
    pub form_id: Option<String>, // parent form ID, e.g. "login-form"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<String>, // exact CSS selector; overrides the other hints
}

impl SelectorHint {
    /// Hint for an input field by accessible name and optional form ID.
    pub fn input(name: &str, form_id: Option<&str>) -> Self {
        SelectorHint {
            role: Some("textbox".into()),
            name: Some(name.to_string()),
            tag: Some("input".into()),
            input_type: None,
            form_id: form_id.map(|s| s.to_string()),
            css: None,
        }
    }

    /// Hint for a button or link by label.
    pub fn button(label: &str) -> Self {
        SelectorHint {
            role: Some("button".into()),
            name: Some(label.to_string()),
            tag: None,
            input_type: None,
            form_id: None,
            css: None,
        }
    }

    /// Hint for a navigation link by visible text.
    pub fn link(label: &str) -> Self {
        SelectorHint {
            role: Some("link".into()),
            name: Some(label.to_string()),
            tag: Some("a".into()),
            input_type: None,
            form_id: None,
            css: None,
        }
    }

    /// Hint for a `<select>` dropdown by accessible name.
    pub fn dropdown(name: &str, form_id: Option<&str>) -> Self {
        SelectorHint {
            role: None,
            name: Some(name.to_string()),
            tag: Some("select".into()),
            input_type: None,
            form_id: form_id.map(|s| s.to_string()),
            css: None,
        }
    }

    /// Hint for a checkbox by accessible name.
    pub fn checkbox(name: &str) -> Self {
        SelectorHint {
            role: Some("checkbox".into()),
            name: Some(name.to_string()),
            tag: Some("input".into()),
            input_type: Some("checkbox".into()),
            form_id: None,
            css: None,
        }
    }

    /// Hint for a file input by accessible name.
    pub fn file_input(name: &str) -> Self {
        SelectorHint {
            role: None,
            name: Some(name.to_string()),
            tag: Some("input".into()),
            input_type: Some("file".into()),
            form_id: None,
            css: None,
        }
    }

    /// Hint addressing one exact element by CSS selector. Used when an
    /// action must target the same element an earlier query waited on.
    pub fn css(selector: &str) -> Self {
        SelectorHint {
            role: None,
            name: None,
            tag: None,
            input_type: None,
            form_id: None,
            css: Some(selector.to_string()),
        }
    }
}
