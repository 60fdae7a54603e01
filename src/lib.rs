//! Toolkit-neutral data description of alerts and their controls.
//!
//! Applications describe buttons and text fields over their own action type,
//! transform that type with `map` as state moves through the app, and hand the
//! final description to a host adapter. The adapter materializes native
//! controls and routes each interaction to a handler through `with_action`.
//!
//! ```
//! use alert_state::state::{ActionStateBuilder, ButtonState, TextFieldState};
//! use alert_state::alert::AlertState;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Action {
//!     Delete,
//!     Rename(String),
//! }
//!
//! let alert = AlertState::new("Delete file?").with_actions(
//!     ActionStateBuilder::new()
//!         .push(TextFieldState::new("New name", |text: &str| {
//!             Some(Action::Rename(text.to_string()))
//!         }))
//!         .push(ButtonState::destructive("Delete").sending(Action::Delete))
//!         .push(ButtonState::cancel("Cancel"))
//!         .build(),
//! );
//!
//! let mut sent = Vec::new();
//! alert.buttons().next().unwrap().with_action(|action| sent.push(action));
//! assert_eq!(sent, vec![Some(Action::Delete)]);
//! ```

pub mod adapter;
pub mod alert;
pub mod config;
pub mod dispatch;
pub mod state;
pub mod text;

pub use alert::{AlertState, ConfirmationDialogState, TitleVisibility};
pub use dispatch::{Animator, Dispatcher, IssueReporter};
pub use state::{
    ActionState, ActionStateBuilder, Animation, AnyActionState, ButtonAction, ButtonRole,
    ButtonState, TextFieldBinding, TextFieldState,
};
pub use text::TextState;
