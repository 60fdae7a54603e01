//! Action carrier: an optional action plus the mode it is sent in.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use crate::dispatch::Dispatcher;

/// Timing curve of an [`Animation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Spring,
}

/// Host-neutral animation token handed to the [`Animator`](crate::dispatch::Animator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Animation {
    pub curve: Curve,
    pub duration: Duration,
    #[serde(default)]
    pub delay: Duration,
}

impl Default for Animation {
    fn default() -> Self {
        Self::ease_in_out(Duration::from_millis(350))
    }
}

impl Animation {
    fn with_curve(curve: Curve, duration: Duration) -> Self {
        Self {
            curve,
            duration,
            delay: Duration::ZERO,
        }
    }

    pub fn linear(duration: Duration) -> Self {
        Self::with_curve(Curve::Linear, duration)
    }

    pub fn ease_in(duration: Duration) -> Self {
        Self::with_curve(Curve::EaseIn, duration)
    }

    pub fn ease_out(duration: Duration) -> Self {
        Self::with_curve(Curve::EaseOut, duration)
    }

    pub fn ease_in_out(duration: Duration) -> Self {
        Self::with_curve(Curve::EaseInOut, duration)
    }

    pub fn spring() -> Self {
        Self::with_curve(Curve::Spring, Duration::from_millis(550))
    }

    /// Delays the start of the animation.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// An optional action tagged with how it should be sent.
///
/// `None` means the interaction is a no-op for the application, but the
/// handler is still called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction<A> {
    /// Send the action directly.
    Send(Option<A>),
    /// Send the action inside the host's animation facility.
    AnimatedSend {
        action: Option<A>,
        animation: Option<Animation>,
    },
}

impl<A> Default for ButtonAction<A> {
    fn default() -> Self {
        Self::Send(None)
    }
}

impl<A> From<A> for ButtonAction<A> {
    fn from(action: A) -> Self {
        Self::Send(Some(action))
    }
}

impl<A: Hash> Hash for ButtonAction<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        // The animation token stays out of the hash. Equal carriers still hash
        // equal; carriers differing only by animation collide.
        self.action().hash(state);
    }
}

impl<A> ButtonAction<A> {
    pub fn send(action: Option<A>) -> Self {
        Self::Send(action)
    }

    pub fn send_animated(action: Option<A>, animation: Option<Animation>) -> Self {
        Self::AnimatedSend { action, animation }
    }

    /// The carried action, whatever the mode.
    pub fn action(&self) -> Option<&A> {
        match self {
            Self::Send(action) | Self::AnimatedSend { action, .. } => action.as_ref(),
        }
    }

    pub fn into_action(self) -> Option<A> {
        match self {
            Self::Send(action) | Self::AnimatedSend { action, .. } => action,
        }
    }

    pub fn animation(&self) -> Option<&Animation> {
        match self {
            Self::Send(_) => None,
            Self::AnimatedSend { animation, .. } => animation.as_ref(),
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, Self::AnimatedSend { .. })
    }

    /// Rewrites the carried action, keeping the mode and animation token.
    pub fn map<B>(self, transform: impl FnOnce(Option<A>) -> Option<B>) -> ButtonAction<B> {
        match self {
            Self::Send(action) => ButtonAction::Send(transform(action)),
            Self::AnimatedSend { action, animation } => ButtonAction::AnimatedSend {
                action: transform(action),
                animation,
            },
        }
    }

    /// Hands the action to `perform`, wrapped in the animator when animated.
    pub fn dispatch(&self, dispatcher: &Dispatcher, perform: impl FnOnce(Option<A>))
    where
        A: Clone,
    {
        match self {
            Self::Send(action) => {
                tracing::trace!(animated = false, "dispatching action");
                perform(action.clone());
            }
            Self::AnimatedSend { action, animation } => {
                tracing::trace!(animated = true, "dispatching action");
                dispatcher.perform_animated(animation.as_ref(), action.clone(), perform);
            }
        }
    }

    /// Hands the action to an async `perform`.
    ///
    /// Async handlers cannot run inside an animation. An animated carrier is
    /// reported through the dispatcher and then performed without animation.
    pub async fn dispatch_async<F, Fut>(&self, dispatcher: &Dispatcher, perform: F)
    where
        A: Clone + Debug,
        F: FnOnce(Option<A>) -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.is_animated() && dispatcher.settings().diagnostics.report_async_animation {
            dispatcher.report(&format!(
                "An animated action was performed asynchronously: …\n\n  Action:\n{}\n\n\
                 Asynchronous actions cannot be animated. Evaluate this action in a \
                 synchronous closure, or animate the state change explicitly.",
                dispatcher.dump(self)
            ));
        }
        tracing::trace!(animated = self.is_animated(), "dispatching action asynchronously");
        perform(self.action().cloned()).await;
    }
}
