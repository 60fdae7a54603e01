//! Materializes alert descriptions into toolkit-neutral native controls.
//!
//! A host toolkit walks a [`NativeAlert`] to build its own alert controller:
//! one native button per [`NativeAction`], one native text field per
//! [`NativeTextField`]. Interactions are forwarded back through
//! [`NativeAction::tap`] and [`NativeTextField::edit`], which feed the
//! application handler.

use std::fmt;
use std::sync::Arc;

use crate::alert::{AlertState, ConfirmationDialogState, TitleVisibility};
use crate::dispatch::Dispatcher;
use crate::state::{AnyActionState, ButtonRole, ButtonState, TextFieldBinding, TextFieldState};
use crate::text::LabelRenderer;

/// Application callback receiving dispatched actions.
pub type Handler<A> = Arc<dyn Fn(Option<A>) + Send + Sync>;

/// Presentation style of the native alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertStyle {
    Alert,
    ActionSheet,
}

/// Native button style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionStyle {
    #[default]
    Default,
    Cancel,
    Destructive,
}

impl From<ButtonRole> for ActionStyle {
    fn from(role: ButtonRole) -> Self {
        match role {
            ButtonRole::Cancel => ActionStyle::Cancel,
            ButtonRole::Destructive => ActionStyle::Destructive,
        }
    }
}

impl From<Option<ButtonRole>> for ActionStyle {
    fn from(role: Option<ButtonRole>) -> Self {
        role.map(ActionStyle::from).unwrap_or_default()
    }
}

/// A configured native button.
pub struct NativeAction<A> {
    title: String,
    style: ActionStyle,
    accessibility_label: Option<String>,
    button: ButtonState<A>,
    dispatcher: Dispatcher,
    handler: Handler<A>,
}

impl<A> NativeAction<A> {
    fn new(
        button: ButtonState<A>,
        renderer: &dyn LabelRenderer,
        dispatcher: &Dispatcher,
        handler: Handler<A>,
    ) -> Self {
        Self {
            title: renderer.render(button.label()),
            style: button.role().into(),
            accessibility_label: renderer.accessibility_label(button.label()),
            button,
            dispatcher: dispatcher.clone(),
            handler,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn style(&self) -> ActionStyle {
        self.style
    }

    pub fn accessibility_label(&self) -> Option<&str> {
        self.accessibility_label.as_deref()
    }

    pub fn button(&self) -> &ButtonState<A> {
        &self.button
    }

    /// Forwards one user tap to the handler.
    pub fn tap(&self)
    where
        A: Clone,
    {
        tracing::trace!(title = %self.title, "native action tapped");
        let handler = &self.handler;
        self.button
            .with_action_in(&self.dispatcher, |action| handler(action));
    }
}

impl<A> fmt::Debug for NativeAction<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeAction")
            .field("title", &self.title)
            .field("style", &self.style)
            .field("accessibility_label", &self.accessibility_label)
            .finish_non_exhaustive()
    }
}

/// A configured native text field with its private text buffer.
pub struct NativeTextField<A> {
    placeholder: String,
    accessibility_label: Option<String>,
    binding: TextFieldBinding<A>,
    handler: Handler<A>,
}

impl<A> NativeTextField<A> {
    fn new(state: TextFieldState<A>, renderer: &dyn LabelRenderer, handler: Handler<A>) -> Self {
        Self {
            placeholder: renderer.render(state.placeholder()),
            accessibility_label: renderer.accessibility_label(state.placeholder()),
            binding: TextFieldBinding::new(state),
            handler,
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn accessibility_label(&self) -> Option<&str> {
        self.accessibility_label.as_deref()
    }

    pub fn text(&self) -> &str {
        self.binding.text()
    }

    /// Applies a user edit and forwards the resulting action.
    pub fn edit(&mut self, text: impl Into<String>) {
        let handler = Arc::clone(&self.handler);
        self.binding.set_text(text, move |action| handler(action));
    }

    /// Forwards the action for the current text, e.g. on return.
    pub fn submit(&self) {
        let handler = &self.handler;
        self.binding.submit(|action| handler(action));
    }
}

impl<A> fmt::Debug for NativeTextField<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeTextField")
            .field("placeholder", &self.placeholder)
            .field("text", &self.binding.text())
            .finish_non_exhaustive()
    }
}

/// Controls materialized from an alert or confirmation dialog.
pub struct NativeAlert<A> {
    title: Option<String>,
    message: Option<String>,
    style: AlertStyle,
    actions: Vec<NativeAction<A>>,
    text_fields: Vec<NativeTextField<A>>,
}

impl<A> NativeAlert<A> {
    /// Builds an alert: every button becomes an action, every text field a
    /// text field, in declaration order.
    pub fn from_alert(
        state: &AlertState<A>,
        renderer: &dyn LabelRenderer,
        dispatcher: &Dispatcher,
        handler: impl Fn(Option<A>) + Send + Sync + 'static,
    ) -> Self
    where
        A: Clone,
    {
        let handler: Handler<A> = Arc::new(handler);
        let mut actions = Vec::new();
        let mut text_fields = Vec::new();

        for element in state.actions() {
            match element {
                AnyActionState::Button(button) => actions.push(NativeAction::new(
                    button.clone(),
                    renderer,
                    dispatcher,
                    Arc::clone(&handler),
                )),
                AnyActionState::TextField(text_field) => text_fields.push(NativeTextField::new(
                    text_field.clone(),
                    renderer,
                    Arc::clone(&handler),
                )),
            }
        }

        tracing::debug!(
            id = %state.id(),
            actions = actions.len(),
            text_fields = text_fields.len(),
            "materialized alert"
        );

        Self {
            title: Some(renderer.render(state.title())),
            message: state.message().map(|message| renderer.render(message)),
            style: AlertStyle::Alert,
            actions,
            text_fields,
        }
    }

    /// Builds an action sheet. The title is shown only when its visibility is
    /// [`TitleVisibility::Visible`].
    pub fn from_confirmation_dialog(
        state: &ConfirmationDialogState<A>,
        renderer: &dyn LabelRenderer,
        dispatcher: &Dispatcher,
        handler: impl Fn(Option<A>) + Send + Sync + 'static,
    ) -> Self
    where
        A: Clone,
    {
        let handler: Handler<A> = Arc::new(handler);
        let actions = state
            .buttons()
            .iter()
            .map(|button| NativeAction::new(button.clone(), renderer, dispatcher, Arc::clone(&handler)))
            .collect();

        Self {
            title: (state.title_visibility() == TitleVisibility::Visible)
                .then(|| renderer.render(state.title())),
            message: state.message().map(|message| renderer.render(message)),
            style: AlertStyle::ActionSheet,
            actions,
            text_fields: Vec::new(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn style(&self) -> AlertStyle {
        self.style
    }

    pub fn actions(&self) -> &[NativeAction<A>] {
        &self.actions
    }

    /// First action with the given rendered title.
    pub fn action(&self, title: &str) -> Option<&NativeAction<A>> {
        self.actions.iter().find(|action| action.title() == title)
    }

    pub fn text_fields(&self) -> &[NativeTextField<A>] {
        &self.text_fields
    }

    pub fn text_field_mut(&mut self, index: usize) -> Option<&mut NativeTextField<A>> {
        self.text_fields.get_mut(index)
    }
}

impl<A> fmt::Debug for NativeAlert<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeAlert")
            .field("title", &self.title)
            .field("message", &self.message)
            .field("style", &self.style)
            .field("actions", &self.actions)
            .field("text_fields", &self.text_fields)
            .finish()
    }
}
