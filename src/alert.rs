//! Alert and confirmation-dialog descriptions.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

use crate::state::{AnyActionState, ButtonState, TextFieldState};
use crate::text::TextState;

/// Data description of an alert: a title, an optional message and a list of
/// buttons and text fields.
#[derive(Debug, Clone)]
pub struct AlertState<A> {
    id: Uuid,
    title: TextState,
    message: Option<TextState>,
    actions: Vec<AnyActionState<A>>,
}

impl<A> AlertState<A> {
    pub fn new(title: impl Into<TextState>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message: None,
            actions: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<TextState>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Appends elements, typically the output of an
    /// [`ActionStateBuilder`](crate::state::ActionStateBuilder).
    pub fn with_actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AnyActionState<A>>,
    {
        self.actions.extend(actions.into_iter().map(Into::into));
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &TextState {
        &self.title
    }

    pub fn message(&self) -> Option<&TextState> {
        self.message.as_ref()
    }

    pub fn actions(&self) -> &[AnyActionState<A>] {
        &self.actions
    }

    pub fn buttons(&self) -> impl Iterator<Item = &ButtonState<A>> {
        self.actions.iter().filter_map(AnyActionState::as_button)
    }

    pub fn text_fields(&self) -> impl Iterator<Item = &TextFieldState<A>> {
        self.actions.iter().filter_map(AnyActionState::as_text_field)
    }

    pub fn map<B>(
        self,
        transform: impl Fn(Option<A>) -> Option<B> + Send + Sync + 'static,
    ) -> AlertState<B>
    where
        A: 'static,
        B: 'static,
    {
        let transform = crate::state::shared_transform(transform);
        AlertState {
            id: self.id,
            title: self.title,
            message: self.message,
            actions: self
                .actions
                .into_iter()
                .map(|action| action.map(transform.clone()))
                .collect(),
        }
    }
}

impl<A: PartialEq> PartialEq for AlertState<A> {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.message == other.message && self.actions == other.actions
    }
}

impl<A: Eq> Eq for AlertState<A> {}

impl<A: Hash> Hash for AlertState<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.message.hash(state);
        self.actions.hash(state);
    }
}

/// Whether a confirmation dialog shows its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleVisibility {
    /// Let the host decide. Native action sheets hide it.
    #[default]
    Automatic,
    Visible,
    Hidden,
}

/// Data description of a confirmation dialog (action sheet).
#[derive(Debug, Clone)]
pub struct ConfirmationDialogState<A> {
    id: Uuid,
    title: TextState,
    title_visibility: TitleVisibility,
    message: Option<TextState>,
    buttons: Vec<ButtonState<A>>,
}

impl<A> ConfirmationDialogState<A> {
    pub fn new(title: impl Into<TextState>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            title_visibility: TitleVisibility::default(),
            message: None,
            buttons: Vec::new(),
        }
    }

    pub fn with_title_visibility(mut self, visibility: TitleVisibility) -> Self {
        self.title_visibility = visibility;
        self
    }

    pub fn with_message(mut self, message: impl Into<TextState>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_buttons(mut self, buttons: impl IntoIterator<Item = ButtonState<A>>) -> Self {
        self.buttons.extend(buttons);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &TextState {
        &self.title
    }

    pub fn title_visibility(&self) -> TitleVisibility {
        self.title_visibility
    }

    pub fn message(&self) -> Option<&TextState> {
        self.message.as_ref()
    }

    pub fn buttons(&self) -> &[ButtonState<A>] {
        &self.buttons
    }

    pub fn map<B>(self, transform: impl Fn(Option<A>) -> Option<B>) -> ConfirmationDialogState<B> {
        ConfirmationDialogState {
            id: self.id,
            title: self.title,
            title_visibility: self.title_visibility,
            message: self.message,
            buttons: self
                .buttons
                .into_iter()
                .map(|button| button.map(&transform))
                .collect(),
        }
    }
}

impl<A: PartialEq> PartialEq for ConfirmationDialogState<A> {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.title_visibility == other.title_visibility
            && self.message == other.message
            && self.buttons == other.buttons
    }
}

impl<A: Eq> Eq for ConfirmationDialogState<A> {}

impl<A: Hash> Hash for ConfirmationDialogState<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.title_visibility.hash(state);
        self.message.hash(state);
        self.buttons.hash(state);
    }
}
