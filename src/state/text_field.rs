//! Text-field state and the presentation-side text buffer.

use std::fmt;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use uuid::Uuid;

use super::ActionState;
use crate::text::TextState;

type Embed<A> = Arc<dyn Fn(&str) -> Option<A> + Send + Sync>;

/// Data description of a text field.
///
/// The field turns its current text into an action through an embedding
/// function. The state itself is immutable; the text being edited lives in a
/// [`TextFieldBinding`] owned by whoever presents the field.
///
/// Equality and hashing cover the initial text and placeholder only. Embedding
/// functions cannot be compared, so two fields that differ only in how they
/// embed text are equal.
pub struct TextFieldState<A> {
    id: Uuid,
    initial_text: String,
    placeholder: TextState,
    embed: Embed<A>,
}

impl<A> TextFieldState<A> {
    /// Creates an empty text field. `embed` must be pure: it is called again on
    /// every edit.
    pub fn new(
        placeholder: impl Into<TextState>,
        embed: impl Fn(&str) -> Option<A> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            initial_text: String::new(),
            placeholder: placeholder.into(),
            embed: Arc::new(embed),
        }
    }

    pub fn with_initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = text.into();
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn initial_text(&self) -> &str {
        &self.initial_text
    }

    pub fn placeholder(&self) -> &TextState {
        &self.placeholder
    }

    /// The action `text` maps to.
    pub fn embed(&self, text: &str) -> Option<A> {
        (self.embed)(text)
    }

    /// Passes the action for `text` to `perform`.
    pub fn with_action(&self, text: &str, perform: impl FnOnce(Option<A>)) {
        tracing::trace!(id = %self.id, "text field dispatch");
        perform(self.embed(text));
    }

    /// Passes the action for `text` to an async `perform`.
    pub async fn with_action_async<F, Fut>(&self, text: &str, perform: F)
    where
        F: FnOnce(Option<A>) -> Fut,
        Fut: Future<Output = ()>,
    {
        tracing::trace!(id = %self.id, "text field async dispatch");
        let action = self.embed(text);
        perform(action).await;
    }

    /// Transforms the embedded action into a new action type.
    ///
    /// The new embedding is `text -> transform(embed(text))`.
    pub fn map<B>(
        self,
        transform: impl Fn(Option<A>) -> Option<B> + Send + Sync + 'static,
    ) -> TextFieldState<B>
    where
        A: 'static,
        B: 'static,
    {
        let embed = self.embed;
        TextFieldState {
            id: self.id,
            initial_text: self.initial_text,
            placeholder: self.placeholder,
            embed: Arc::new(move |text: &str| transform(embed(text))),
        }
    }
}

impl<A> Clone for TextFieldState<A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            initial_text: self.initial_text.clone(),
            placeholder: self.placeholder.clone(),
            embed: Arc::clone(&self.embed),
        }
    }
}

impl<A> fmt::Debug for TextFieldState<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFieldState")
            .field("id", &self.id)
            .field("initial_text", &self.initial_text)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

impl<A> PartialEq for TextFieldState<A> {
    fn eq(&self, other: &Self) -> bool {
        self.initial_text == other.initial_text && self.placeholder == other.placeholder
    }
}

impl<A> Eq for TextFieldState<A> {}

impl<A> Hash for TextFieldState<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.initial_text.hash(state);
        self.placeholder.hash(state);
    }
}

impl<A> ActionState for TextFieldState<A> {
    type Action = A;

    fn id(&self) -> Uuid {
        self.id
    }

    fn label(&self) -> &TextState {
        &self.placeholder
    }
}

/// Text buffer owned by one presentation of a text field.
///
/// The buffer starts at the field's initial text. Every edit updates it first
/// and then dispatches the embedding of the new value, exactly once.
#[derive(Debug, Clone)]
pub struct TextFieldBinding<A> {
    state: TextFieldState<A>,
    text: String,
}

impl<A> TextFieldBinding<A> {
    pub fn new(state: TextFieldState<A>) -> Self {
        let text = state.initial_text.clone();
        Self { state, text }
    }

    pub fn state(&self) -> &TextFieldState<A> {
        &self.state
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text and dispatches its action.
    pub fn set_text(&mut self, text: impl Into<String>, perform: impl FnOnce(Option<A>)) {
        self.text = text.into();
        self.state.with_action(&self.text, perform);
    }

    /// Replaces the text and dispatches its action to an async handler.
    pub async fn set_text_async<F, Fut>(&mut self, text: impl Into<String>, perform: F)
    where
        F: FnOnce(Option<A>) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.text = text.into();
        self.state.with_action_async(&self.text, perform).await;
    }

    /// Dispatches the action for the current text without editing it.
    pub fn submit(&self, perform: impl FnOnce(Option<A>)) {
        self.state.with_action(&self.text, perform);
    }

    /// Swaps in a new state and reseeds the buffer from its initial text, so
    /// the new embedding never sees text typed against the old one.
    pub fn replace_state(&mut self, state: TextFieldState<A>) {
        self.text = state.initial_text.clone();
        self.state = state;
    }
}

impl<A> From<TextFieldState<A>> for TextFieldBinding<A> {
    fn from(state: TextFieldState<A>) -> Self {
        Self::new(state)
    }
}
