//! Button state.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::future::Future;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

use super::action::{Animation, ButtonAction};
use super::ActionState;
use crate::dispatch::Dispatcher;
use crate::text::TextState;

/// Semantic intent of a button. A button without a role uses `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonRole {
    Cancel,
    Destructive,
}

/// Data description of a button.
///
/// Equality and hashing look at the carrier, label and role. The identity is
/// excluded, so two independently built buttons with the same content are
/// equal.
#[derive(Debug, Clone)]
pub struct ButtonState<A> {
    id: Uuid,
    action: ButtonAction<A>,
    label: TextState,
    role: Option<ButtonRole>,
}

impl<A> ButtonState<A> {
    /// Button without a role whose interaction sends no action.
    pub fn new(label: impl Into<TextState>) -> Self {
        Self {
            id: Uuid::new_v4(),
            action: ButtonAction::default(),
            label: label.into(),
            role: None,
        }
    }

    pub fn cancel(label: impl Into<TextState>) -> Self {
        Self::new(label).with_role(ButtonRole::Cancel)
    }

    pub fn destructive(label: impl Into<TextState>) -> Self {
        Self::new(label).with_role(ButtonRole::Destructive)
    }

    pub fn with_role(mut self, role: ButtonRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Sends `action` on interaction.
    pub fn sending(self, action: A) -> Self {
        self.with_carrier(ButtonAction::send(Some(action)))
    }

    /// Sends `action` inside `animation` on interaction.
    pub fn sending_animated(self, action: A, animation: Animation) -> Self {
        self.with_carrier(ButtonAction::send_animated(Some(action), Some(animation)))
    }

    pub fn with_carrier(mut self, action: ButtonAction<A>) -> Self {
        self.action = action;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn action(&self) -> &ButtonAction<A> {
        &self.action
    }

    pub fn label(&self) -> &TextState {
        &self.label
    }

    pub fn role(&self) -> Option<ButtonRole> {
        self.role
    }

    /// Transforms the button's action into a new action type.
    ///
    /// The identity, label and role carry over unchanged.
    pub fn map<B>(self, transform: impl FnOnce(Option<A>) -> Option<B>) -> ButtonState<B> {
        ButtonState {
            id: self.id,
            action: self.action.map(transform),
            label: self.label,
            role: self.role,
        }
    }

    /// Passes the button's action to `perform` using the shared dispatcher.
    pub fn with_action(&self, perform: impl FnOnce(Option<A>))
    where
        A: Clone,
    {
        self.with_action_in(Dispatcher::shared(), perform);
    }

    /// Passes the button's action to `perform`. Animated carriers run inside
    /// the dispatcher's animator.
    pub fn with_action_in(&self, dispatcher: &Dispatcher, perform: impl FnOnce(Option<A>))
    where
        A: Clone,
    {
        tracing::trace!(id = %self.id, "button dispatch");
        self.action.dispatch(dispatcher, perform);
    }

    /// Passes the button's action to an async `perform` using the shared dispatcher.
    ///
    /// Async closures cannot be performed with animation. If the carrier is
    /// animated, an issue is reported and the action is performed without it.
    pub async fn with_action_async<F, Fut>(&self, perform: F)
    where
        A: Clone + Debug,
        F: FnOnce(Option<A>) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.with_action_async_in(Dispatcher::shared(), perform).await;
    }

    pub async fn with_action_async_in<F, Fut>(&self, dispatcher: &Dispatcher, perform: F)
    where
        A: Clone + Debug,
        F: FnOnce(Option<A>) -> Fut,
        Fut: Future<Output = ()>,
    {
        tracing::trace!(id = %self.id, "button async dispatch");
        self.action.dispatch_async(dispatcher, perform).await;
    }
}

impl<A> ActionState for ButtonState<A> {
    type Action = A;

    fn id(&self) -> Uuid {
        self.id
    }

    fn label(&self) -> &TextState {
        &self.label
    }
}

impl<A: PartialEq> PartialEq for ButtonState<A> {
    fn eq(&self, other: &Self) -> bool {
        self.action == other.action && self.label == other.label && self.role == other.role
    }
}

impl<A: Eq> Eq for ButtonState<A> {}

impl<A: Hash> Hash for ButtonState<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.action.hash(state);
        self.label.hash(state);
        self.role.hash(state);
    }
}
