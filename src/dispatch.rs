//! Host facilities used while dispatching actions.
//!
//! The core never animates or reports on its own. A [`Dispatcher`] bundles the
//! two facilities it calls into:
//!
//! - [`Animator`]: runs a state change inside a visual-transition context
//! - [`IssueReporter`]: receives non-fatal protocol diagnostics
//!
//! The default dispatcher runs bodies immediately and reports through
//! `tracing`.

use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::config::Settings;
use crate::state::Animation;

/// Runs a state change under a host-defined animation.
///
/// Implementations must invoke `body` exactly once, synchronously, before
/// returning.
pub trait Animator: Send + Sync {
    fn animate(&self, animation: Option<&Animation>, body: &mut dyn FnMut());
}

/// Non-fatal diagnostic sink. Must not block.
pub trait IssueReporter: Send + Sync {
    fn report(&self, message: &str);
}

impl<T: Animator + ?Sized> Animator for Arc<T> {
    fn animate(&self, animation: Option<&Animation>, body: &mut dyn FnMut()) {
        (**self).animate(animation, body)
    }
}

impl<T: IssueReporter + ?Sized> IssueReporter for Arc<T> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }
}

/// Animator for hosts without a transition system: runs the body directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateAnimator;

impl Animator for ImmediateAnimator {
    fn animate(&self, _animation: Option<&Animation>, body: &mut dyn FnMut()) {
        body();
    }
}

/// Reports issues as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl IssueReporter for TracingReporter {
    fn report(&self, message: &str) {
        tracing::warn!(target: "alert_state::issue", "{}", message);
    }
}

/// Collects reported issues in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.messages.lock().len()
    }

    /// Drains the recorded messages.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock())
    }
}

impl IssueReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

/// Animator, reporter and settings used by `with_action` and friends.
#[derive(Clone)]
pub struct Dispatcher {
    animator: Arc<dyn Animator>,
    reporter: Arc<dyn IssueReporter>,
    settings: Settings,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::from_settings(Settings::default())
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub fn new(
        animator: impl Animator + 'static,
        reporter: impl IssueReporter + 'static,
    ) -> Self {
        Self {
            animator: Arc::new(animator),
            reporter: Arc::new(reporter),
            settings: Settings::default(),
        }
    }

    /// Default facilities configured by `settings`.
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            animator: Arc::new(ImmediateAnimator),
            reporter: Arc::new(TracingReporter),
            settings,
        }
    }

    /// Process-wide default dispatcher used by the handler-only dispatch methods.
    pub fn shared() -> &'static Dispatcher {
        static SHARED: OnceLock<Dispatcher> = OnceLock::new();
        SHARED.get_or_init(Dispatcher::default)
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_animator(mut self, animator: impl Animator + 'static) -> Self {
        self.animator = Arc::new(animator);
        self
    }

    pub fn with_reporter(mut self, reporter: impl IssueReporter + 'static) -> Self {
        self.reporter = Arc::new(reporter);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn report(&self, message: &str) {
        self.reporter.report(message);
    }

    /// Calls `perform` with `action` inside the animator.
    ///
    /// Falls back to a direct call when animation is disabled. If the animator
    /// returns without running the body, the issue is reported and `perform`
    /// still runs, so the handler sees the action exactly once.
    pub(crate) fn perform_animated<A>(
        &self,
        animation: Option<&Animation>,
        action: Option<A>,
        perform: impl FnOnce(Option<A>),
    ) {
        if !self.settings.animation.enabled {
            perform(action);
            return;
        }

        let mut pending = Some((perform, action));
        self.animator.animate(animation, &mut || {
            if let Some((perform, action)) = pending.take() {
                perform(action);
            }
        });

        if let Some((perform, action)) = pending.take() {
            self.report(
                "Animator returned without running the dispatch body. \
                 The action was performed without animation.",
            );
            perform(action);
        }
    }

    /// Pretty `Debug` rendering indented by `diagnostics.dump_indent`.
    pub(crate) fn dump(&self, value: &dyn fmt::Debug) -> String {
        let indent = " ".repeat(self.settings.diagnostics.dump_indent);
        format!("{:#?}", value)
            .lines()
            .map(|line| format!("{}{}", indent, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
