//! Declarative action state: buttons, text fields and the lists they form.
//!
//! # Architecture
//!
//! ```text
//! ButtonState ──┐
//!               ├──→ AnyActionState ──→ StateBuilder ──→ Vec<AnyActionState>
//! TextFieldState┘          │
//!                          └── map(Action → NewAction), with_action(handler)
//! ```
//!
//! - **State**: immutable values over a caller-owned action type
//! - **map**: rewrites the action type while keeping identity
//! - **with_action**: the only place an action is handed to a handler

mod action;
mod any;
mod builder;
mod button;
mod text_field;

pub use action::{Animation, ButtonAction, Curve};
pub use any::{AnyActionState, NarrowError};
pub(crate) use any::shared_transform;
pub use builder::{ActionStateBuilder, ButtonStateBuilder, StateBuilder, TextFieldStateBuilder};
pub use button::{ButtonRole, ButtonState};
pub use text_field::{TextFieldBinding, TextFieldState};

use crate::text::TextState;
use uuid::Uuid;

/// Capabilities shared by every element an alert can hold.
pub trait ActionState {
    /// Caller-owned action type.
    type Action;

    /// Stable identity assigned at construction and preserved by `map`.
    fn id(&self) -> Uuid;

    /// Text describing the element: a button's label or a text field's placeholder.
    fn label(&self) -> &TextState;
}
