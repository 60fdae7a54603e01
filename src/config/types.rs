use serde::{Deserialize, Serialize};

/// Upper bound for [`DiagnosticsSettings::dump_indent`].
pub const MAX_DUMP_INDENT: usize = 16;

/// Root settings container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub diagnostics: DiagnosticsSettings,
    #[serde(default)]
    pub animation: AnimationSettings,
}

/// Controls which protocol violations reach the issue reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsSettings {
    /// Report animated carriers dispatched through an async handler (default: true).
    #[serde(default = "default_true")]
    pub report_async_animation: bool,
    /// Report builder elements that match no known state variant (default: true).
    #[serde(default = "default_true")]
    pub report_narrowing: bool,
    /// Indentation of the state dump embedded in reports (default: 4).
    #[serde(default = "default_dump_indent")]
    pub dump_indent: usize,
}

/// Animation behavior of synchronous dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSettings {
    /// When false, animated carriers are dispatched without the animator
    /// (reduced-motion hosts). Default: true.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

fn default_dump_indent() -> usize {
    4
}

impl Default for DiagnosticsSettings {
    fn default() -> Self {
        Self {
            report_async_animation: default_true(),
            report_narrowing: default_true(),
            dump_indent: default_dump_indent(),
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}
