//! Ordered list building for states.
//!
//! Mirrors declarative list syntax with plain method calls:
//!
//! - sequence: [`StateBuilder::push`]
//! - optional: [`StateBuilder::push_optional`], [`StateBuilder::when`]
//! - either/or: [`StateBuilder::either`]
//! - loops: [`StateBuilder::extend`]
//! - availability-gated branches: [`StateBuilder::limited_availability`]
//!
//! Output order is declaration order. Nothing is deduplicated.

use std::any::Any;

use super::any::{AnyActionState, NarrowError};
use super::button::ButtonState;
use super::text_field::TextFieldState;
use crate::dispatch::Dispatcher;

/// Builder for a heterogeneous list of alert elements.
pub type ActionStateBuilder<A> = StateBuilder<AnyActionState<A>>;

/// Builder for a list of buttons.
pub type ButtonStateBuilder<A> = StateBuilder<ButtonState<A>>;

/// Builder for a list of text fields.
pub type TextFieldStateBuilder<A> = StateBuilder<TextFieldState<A>>;

/// Collects elements of one type in declaration order.
#[derive(Debug, Clone)]
pub struct StateBuilder<T> {
    items: Vec<T>,
}

impl<T> Default for StateBuilder<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> StateBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, item: impl Into<T>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Appends `item` if present; `None` contributes nothing.
    pub fn push_optional<I: Into<T>>(mut self, item: Option<I>) -> Self {
        if let Some(item) = item {
            self.items.push(item.into());
        }
        self
    }

    /// Runs `branch` only when `condition` holds.
    pub fn when(self, condition: bool, branch: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            branch(self)
        } else {
            self
        }
    }

    /// Runs exactly one of the two branches.
    pub fn either(
        self,
        condition: bool,
        first: impl FnOnce(Self) -> Self,
        second: impl FnOnce(Self) -> Self,
    ) -> Self {
        if condition {
            first(self)
        } else {
            second(self)
        }
    }

    /// Flattens a sequence of elements into the list.
    pub fn extend<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    /// Includes a branch the caller gated on availability.
    ///
    /// Reaching this call means the gate passed, so the elements are included
    /// unconditionally.
    pub fn limited_availability<I>(self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        let before = self.items.len();
        let builder = self.extend(items);
        tracing::debug!(
            count = builder.items.len() - before,
            "included limited-availability branch"
        );
        builder
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn build(self) -> Vec<T> {
        self.items
    }
}

impl<A: 'static> StateBuilder<AnyActionState<A>> {
    /// Appends a type-erased element after narrowing it into the closed union.
    ///
    /// Elements matching no variant are dropped. The drop is reported through
    /// the dispatcher unless `diagnostics.report_narrowing` is off.
    pub fn push_any(mut self, element: Box<dyn Any + Send>, dispatcher: &Dispatcher) -> Self {
        match AnyActionState::try_from_any(element) {
            Ok(state) => self.items.push(state),
            Err(err @ NarrowError::Unmatched { .. }) => {
                tracing::debug!(position = self.items.len(), "dropping unmatched element");
                if dispatcher.settings().diagnostics.report_narrowing {
                    dispatcher.report(&format!(
                        "{}. The element was dropped from the list at position {}.",
                        err,
                        self.items.len()
                    ));
                }
            }
        }
        self
    }
}

impl<T> FromIterator<T> for StateBuilder<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for StateBuilder<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
