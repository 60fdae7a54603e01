mod common;

use alert_state::config::{AnimationSettings, DiagnosticsSettings, Settings};
use alert_state::dispatch::Dispatcher;
use alert_state::state::{
    Animation, AnyActionState, ButtonAction, ButtonState, TextFieldBinding, TextFieldState,
};
use common::{init_tracing, recording_dispatcher, Action, Recorder};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn sync_dispatch_delivers_exactly_once() {
    init_tracing();
    let button = ButtonState::new("OK").sending(Action::Confirm);
    let recorder = Recorder::new();

    button.with_action(recorder.handler());

    assert_eq!(recorder.received(), vec![Some(Action::Confirm)]);
}

#[test]
fn sync_dispatch_of_empty_carrier_still_calls_handler() {
    let button = ButtonState::<Action>::cancel("Cancel");
    let recorder = Recorder::new();

    button.with_action(recorder.handler());

    assert_eq!(recorder.received(), vec![None]);
}

#[test]
fn plain_carrier_bypasses_animator() {
    let (dispatcher, animator, reporter) = recording_dispatcher();
    let button = ButtonState::new("OK").sending(Action::Confirm);
    let recorder = Recorder::new();

    button.with_action_in(&dispatcher, recorder.handler());

    assert_eq!(recorder.received(), vec![Some(Action::Confirm)]);
    assert!(animator.animations().is_empty());
    assert_eq!(reporter.count(), 0);
}

#[test]
fn animated_carrier_runs_inside_animator() {
    let (dispatcher, animator, reporter) = recording_dispatcher();
    let animation = Animation::ease_in(Duration::from_millis(200));
    let button = ButtonState::destructive("Delete").sending_animated(Action::Delete, animation);
    let recorder = Recorder::new();

    button.with_action_in(&dispatcher, recorder.handler());

    assert_eq!(recorder.received(), vec![Some(Action::Delete)]);
    assert_eq!(animator.animations(), vec![Some(animation)]);
    assert_eq!(reporter.count(), 0);
}

#[test]
fn animated_carrier_without_token_still_uses_animator() {
    let (dispatcher, animator, _) = recording_dispatcher();
    let button = ButtonState::new("OK")
        .with_carrier(ButtonAction::send_animated(Some(Action::Confirm), None));
    let recorder = Recorder::new();

    button.with_action_in(&dispatcher, recorder.handler());

    assert_eq!(recorder.received(), vec![Some(Action::Confirm)]);
    assert_eq!(animator.animations(), vec![None]);
}

#[test]
fn reduced_motion_skips_animator() {
    let (dispatcher, animator, _) = recording_dispatcher();
    let dispatcher = dispatcher.with_settings(Settings {
        animation: AnimationSettings { enabled: false },
        ..Settings::default()
    });
    let button = ButtonState::new("OK").sending_animated(Action::Confirm, Animation::default());
    let recorder = Recorder::new();

    button.with_action_in(&dispatcher, recorder.handler());

    assert_eq!(recorder.received(), vec![Some(Action::Confirm)]);
    assert!(animator.animations().is_empty());
}

#[test]
fn successive_dispatches_keep_invocation_order() {
    let first = ButtonState::new("1").sending(Action::Confirm);
    let second = ButtonState::new("2").sending(Action::Delete);
    let recorder = Recorder::new();

    first.with_action(recorder.handler());
    second.with_action(recorder.handler());
    first.with_action(recorder.handler());

    assert_eq!(
        recorder.received(),
        vec![Some(Action::Confirm), Some(Action::Delete), Some(Action::Confirm)]
    );
}

#[tokio::test]
async fn async_dispatch_of_plain_carrier() {
    let (dispatcher, _, reporter) = recording_dispatcher();
    let button = ButtonState::new("OK").sending(Action::Confirm);
    let received = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&received);
    button
        .with_action_async_in(&dispatcher, |action| async move {
            tokio::task::yield_now().await;
            sink.lock().push(action);
        })
        .await;

    assert_eq!(*received.lock(), vec![Some(Action::Confirm)]);
    assert_eq!(reporter.count(), 0);
}

#[tokio::test]
async fn async_dispatch_of_animated_carrier_reports_and_still_delivers() {
    let (dispatcher, animator, reporter) = recording_dispatcher();
    let button = ButtonState::destructive("Delete").sending_animated(Action::Delete, Animation::spring());
    let received = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&received);
    button
        .with_action_async_in(&dispatcher, |action| async move {
            sink.lock().push(action);
        })
        .await;

    assert_eq!(*received.lock(), vec![Some(Action::Delete)]);
    assert!(animator.animations().is_empty());

    let messages = reporter.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("An animated action was performed asynchronously"));
    assert!(messages[0].contains("Delete"));
    assert!(messages[0].contains("Spring"));
}

#[tokio::test]
async fn async_animation_report_can_be_disabled() {
    let (dispatcher, _, reporter) = recording_dispatcher();
    let dispatcher = dispatcher.with_settings(Settings {
        diagnostics: DiagnosticsSettings {
            report_async_animation: false,
            ..DiagnosticsSettings::default()
        },
        ..Settings::default()
    });
    let button = ButtonState::new("OK").sending_animated(Action::Confirm, Animation::default());
    let received = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&received);
    button
        .with_action_async_in(&dispatcher, |action| async move {
            sink.lock().push(action);
        })
        .await;

    assert_eq!(*received.lock(), vec![Some(Action::Confirm)]);
    assert_eq!(reporter.count(), 0);
}

#[tokio::test]
async fn container_async_dispatch_reports_animated_button() {
    let (dispatcher, _, reporter) = recording_dispatcher();
    let state: AnyActionState<Action> = ButtonState::new("OK")
        .sending_animated(Action::Confirm, Animation::default())
        .into();
    let received = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&received);
    state
        .with_action_async_in(&dispatcher, |action| async move {
            sink.lock().push(action);
        })
        .await;

    assert_eq!(*received.lock(), vec![Some(Action::Confirm)]);
    assert_eq!(reporter.count(), 1);
}

#[test]
fn text_field_dispatches_reconciled_text() {
    let field = TextFieldState::new("Search", |text: &str| Some(Action::Search(text.to_string())));
    let mut binding = TextFieldBinding::new(field);
    assert_eq!(binding.text(), "");

    binding.set_text("abc", |_| {});
    let recorder = Recorder::new();
    binding.submit(recorder.handler());

    assert_eq!(recorder.received(), vec![Some(Action::Search("abc".into()))]);
}

#[test]
fn every_edit_dispatches_once_with_new_value() {
    let field = TextFieldState::new("Search", |text: &str| Some(Action::Search(text.to_string())));
    let mut binding = TextFieldBinding::new(field);
    let recorder = Recorder::new();

    for text in ["a", "ab", "abc"] {
        binding.set_text(text, recorder.handler());
    }

    assert_eq!(
        recorder.received(),
        vec![
            Some(Action::Search("a".into())),
            Some(Action::Search("ab".into())),
            Some(Action::Search("abc".into())),
        ]
    );
}

#[test]
fn embedding_may_decline_to_produce_an_action() {
    let field = TextFieldState::new("Name", |text: &str| {
        (!text.trim().is_empty()).then(|| Action::Rename(text.trim().to_string()))
    });
    let mut binding = TextFieldBinding::new(field);
    let recorder = Recorder::new();

    binding.set_text("   ", recorder.handler());
    binding.set_text(" notes ", recorder.handler());

    assert_eq!(
        recorder.received(),
        vec![None, Some(Action::Rename("notes".into()))]
    );
}

#[tokio::test]
async fn text_field_async_edit_dispatches_new_value() {
    let field = TextFieldState::new("Search", |text: &str| Some(Action::Search(text.to_string())));
    let mut binding = TextFieldBinding::new(field);
    let received = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&received);
    binding
        .set_text_async("query", |action| async move {
            sink.lock().push(action);
        })
        .await;

    assert_eq!(binding.text(), "query");
    assert_eq!(*received.lock(), vec![Some(Action::Search("query".into()))]);
}

#[test]
fn shared_dispatcher_is_reused() {
    assert!(std::ptr::eq(Dispatcher::shared(), Dispatcher::shared()));
}
