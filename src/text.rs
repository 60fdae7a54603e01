//! Label values and the rendering boundary.
//!
//! `TextState` is an opaque value: the library compares, hashes and stores it
//! but never interprets it. Turning it into a display string is the job of a
//! host-supplied [`LabelRenderer`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Equatable, hashable, localizable label text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextState {
    content: String,
    #[serde(default)]
    verbatim: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accessibility_label: Option<Box<TextState>>,
}

impl TextState {
    /// Creates a localizable label. `content` doubles as the localization key.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            verbatim: false,
            accessibility_label: None,
        }
    }

    /// Creates a label that renderers must display as-is.
    pub fn verbatim(content: impl Into<String>) -> Self {
        Self {
            verbatim: true,
            ..Self::new(content)
        }
    }

    /// Attaches an alternate label read by assistive technologies.
    pub fn with_accessibility_label(mut self, label: impl Into<TextState>) -> Self {
        self.accessibility_label = Some(Box::new(label.into()));
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_verbatim(&self) -> bool {
        self.verbatim
    }

    pub fn accessibility_label(&self) -> Option<&TextState> {
        self.accessibility_label.as_deref()
    }
}

impl From<&str> for TextState {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for TextState {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl fmt::Display for TextState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Turns label values into strings a native control can display.
pub trait LabelRenderer {
    fn render(&self, text: &TextState) -> String;

    /// Renders the accessibility label, if the text carries one.
    fn accessibility_label(&self, text: &TextState) -> Option<String> {
        text.accessibility_label().map(|label| self.render(label))
    }
}

/// Renderer that performs no localization.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl LabelRenderer for PlainRenderer {
    fn render(&self, text: &TextState) -> String {
        text.content().to_string()
    }
}
