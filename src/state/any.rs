//! Closed union over every element an alert can hold.

use std::any::Any;
use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use super::button::ButtonState;
use super::text_field::TextFieldState;
use super::ActionState;
use crate::dispatch::Dispatcher;
use crate::text::TextState;

/// A button or a text field over the same action type.
///
/// Equality, hashing and identity follow the active variant. Values of
/// different variants are never equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyActionState<A> {
    Button(ButtonState<A>),
    TextField(TextFieldState<A>),
}

/// An element offered to a builder matched no known state variant.
#[derive(Debug, Error)]
pub enum NarrowError {
    #[error("Element is not a button or text field state over action type '{action}'")]
    Unmatched {
        action: &'static str,
        /// The rejected element, handed back to the caller.
        element: Box<dyn Any + Send>,
    },
}

impl<A> From<ButtonState<A>> for AnyActionState<A> {
    fn from(button: ButtonState<A>) -> Self {
        Self::Button(button)
    }
}

impl<A> From<TextFieldState<A>> for AnyActionState<A> {
    fn from(text_field: TextFieldState<A>) -> Self {
        Self::TextField(text_field)
    }
}

impl<A> AnyActionState<A> {
    pub fn id(&self) -> Uuid {
        match self {
            Self::Button(button) => button.id(),
            Self::TextField(text_field) => text_field.id(),
        }
    }

    pub fn as_button(&self) -> Option<&ButtonState<A>> {
        match self {
            Self::Button(button) => Some(button),
            Self::TextField(_) => None,
        }
    }

    pub fn as_text_field(&self) -> Option<&TextFieldState<A>> {
        match self {
            Self::Button(_) => None,
            Self::TextField(text_field) => Some(text_field),
        }
    }

    pub fn is_button(&self) -> bool {
        matches!(self, Self::Button(_))
    }

    pub fn is_text_field(&self) -> bool {
        matches!(self, Self::TextField(_))
    }

    /// Transforms the payload's action type, keeping the variant and identity.
    pub fn map<B>(
        self,
        transform: impl Fn(Option<A>) -> Option<B> + Send + Sync + 'static,
    ) -> AnyActionState<B>
    where
        A: 'static,
        B: 'static,
    {
        match self {
            Self::Button(button) => AnyActionState::Button(button.map(transform)),
            Self::TextField(text_field) => AnyActionState::TextField(text_field.map(transform)),
        }
    }

    /// Dispatches the element's action.
    ///
    /// Buttons send their carrier. Text fields send the embedding of their
    /// initial text; edits go through a
    /// [`TextFieldBinding`](super::TextFieldBinding).
    pub fn with_action_in(&self, dispatcher: &Dispatcher, perform: impl FnOnce(Option<A>))
    where
        A: Clone,
    {
        match self {
            Self::Button(button) => button.with_action_in(dispatcher, perform),
            Self::TextField(text_field) => text_field.with_action(text_field.initial_text(), perform),
        }
    }

    pub fn with_action(&self, perform: impl FnOnce(Option<A>))
    where
        A: Clone,
    {
        self.with_action_in(Dispatcher::shared(), perform);
    }

    pub async fn with_action_async_in<F, Fut>(&self, dispatcher: &Dispatcher, perform: F)
    where
        A: Clone + Debug,
        F: FnOnce(Option<A>) -> Fut,
        Fut: Future<Output = ()>,
    {
        match self {
            Self::Button(button) => button.with_action_async_in(dispatcher, perform).await,
            Self::TextField(text_field) => {
                text_field
                    .with_action_async(text_field.initial_text(), perform)
                    .await
            }
        }
    }

    pub async fn with_action_async<F, Fut>(&self, perform: F)
    where
        A: Clone + Debug,
        F: FnOnce(Option<A>) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.with_action_async_in(Dispatcher::shared(), perform).await;
    }
}

impl<A: 'static> AnyActionState<A> {
    /// Narrows a type-erased element into the closed union.
    ///
    /// Accepts `ButtonState<A>`, `TextFieldState<A>` and `AnyActionState<A>`.
    pub fn try_from_any(element: Box<dyn Any + Send>) -> Result<Self, NarrowError> {
        let element = match element.downcast::<AnyActionState<A>>() {
            Ok(state) => return Ok(*state),
            Err(element) => element,
        };
        let element = match element.downcast::<ButtonState<A>>() {
            Ok(button) => return Ok(Self::Button(*button)),
            Err(element) => element,
        };
        match element.downcast::<TextFieldState<A>>() {
            Ok(text_field) => Ok(Self::TextField(*text_field)),
            Err(element) => Err(NarrowError::Unmatched {
                action: std::any::type_name::<A>(),
                element,
            }),
        }
    }
}

impl<A> ActionState for AnyActionState<A> {
    type Action = A;

    fn id(&self) -> Uuid {
        AnyActionState::id(self)
    }

    fn label(&self) -> &TextState {
        match self {
            Self::Button(button) => button.label(),
            Self::TextField(text_field) => text_field.placeholder(),
        }
    }
}

/// Shares one transform across several `map` calls.
pub(crate) fn shared_transform<A, B>(
    transform: impl Fn(Option<A>) -> Option<B> + Send + Sync + 'static,
) -> impl Fn(Option<A>) -> Option<B> + Send + Sync + Clone + 'static
where
    A: 'static,
    B: 'static,
{
    let transform = Arc::new(transform);
    move |action| transform(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Action {
        Confirm,
        Query(String),
    }

    #[test]
    fn variants_never_compare_equal() {
        let button = AnyActionState::<Action>::from(ButtonState::new("Search"));
        let field = AnyActionState::from(TextFieldState::new("Search", |_: &str| None::<Action>));
        assert_ne!(button, field);
    }

    #[test]
    fn id_projects_payload() {
        let button = ButtonState::new("OK").sending(Action::Confirm);
        let id = button.id();
        assert_eq!(AnyActionState::from(button).id(), id);
    }

    #[test]
    fn narrows_known_variants() {
        let button: Box<dyn Any + Send> = Box::new(ButtonState::new("OK").sending(Action::Confirm));
        let state = AnyActionState::<Action>::try_from_any(button).unwrap();
        assert!(state.is_button());

        let field: Box<dyn Any + Send> = Box::new(TextFieldState::new("Query", |text: &str| {
            Some(Action::Query(text.to_string()))
        }));
        let state = AnyActionState::<Action>::try_from_any(field).unwrap();
        assert!(state.is_text_field());
    }

    #[test]
    fn rejects_unknown_element() {
        let err = AnyActionState::<Action>::try_from_any(Box::new(42_u8)).unwrap_err();
        let NarrowError::Unmatched { element, .. } = err;
        assert_eq!(element.downcast_ref::<u8>(), Some(&42));
    }

    #[test]
    fn rejects_other_action_type() {
        let button: Box<dyn Any + Send> = Box::new(ButtonState::new("OK").sending(7_u32));
        assert!(AnyActionState::<Action>::try_from_any(button).is_err());
    }

    #[test]
    fn text_field_dispatches_initial_text() {
        let state = AnyActionState::from(
            TextFieldState::new("Query", |text: &str| Some(Action::Query(text.to_string())))
                .with_initial_text("seed"),
        );
        let mut received = Vec::new();
        state.with_action(|action| received.push(action));
        assert_eq!(received, vec![Some(Action::Query("seed".into()))]);
    }
}
