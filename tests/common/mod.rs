//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use alert_state::dispatch::{Animator, Dispatcher, RecordingReporter};
use alert_state::state::Animation;
use parking_lot::Mutex;
use std::sync::Arc;

/// Application action used across the integration tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    Confirm,
    Delete,
    Search(String),
    Rename(String),
}

/// Action type a parent feature wraps child actions in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParentAction {
    Child(Action),
    Dismiss,
}

/// Install a test-friendly tracing subscriber once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("alert_state=trace")
        .with_test_writer()
        .try_init();
}

// -- Handlers -----------------------------------------------------------------

/// Records every action a handler receives.
#[derive(Clone)]
pub struct Recorder<A> {
    received: Arc<Mutex<Vec<Option<A>>>>,
}

impl<A: Clone + Send + 'static> Recorder<A> {
    pub fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn handler(&self) -> impl Fn(Option<A>) + Send + Sync + 'static {
        let received = Arc::clone(&self.received);
        move |action| received.lock().push(action)
    }

    pub fn received(&self) -> Vec<Option<A>> {
        self.received.lock().clone()
    }
}

// -- Host facilities ----------------------------------------------------------

/// Animator that records every animation it runs a body under.
#[derive(Default)]
pub struct RecordingAnimator {
    animations: Mutex<Vec<Option<Animation>>>,
}

impl RecordingAnimator {
    pub fn animations(&self) -> Vec<Option<Animation>> {
        self.animations.lock().clone()
    }
}

impl Animator for RecordingAnimator {
    fn animate(&self, animation: Option<&Animation>, body: &mut dyn FnMut()) {
        self.animations.lock().push(animation.copied());
        body();
    }
}

/// Dispatcher wired to recording facilities, plus handles to inspect them.
pub fn recording_dispatcher() -> (Dispatcher, Arc<RecordingAnimator>, Arc<RecordingReporter>) {
    let animator = Arc::new(RecordingAnimator::default());
    let reporter = Arc::new(RecordingReporter::new());
    let dispatcher = Dispatcher::new(Arc::clone(&animator), Arc::clone(&reporter));
    (dispatcher, animator, reporter)
}
