// Host-side tests for command dispatch and the control panel text.

use boxsplash_core::{BoxSplash, Command, ConfigError, ConfigProxy, Notification};
use std::time::Duration;

fn started_app() -> BoxSplash {
    let mut app = BoxSplash::new(ConfigProxy::default(), 11);
    app.dispatch(Command::Resize {
        width: 640.0,
        height: 480.0,
    })
    .unwrap();
    app.dispatch(Command::Startup).unwrap();
    app.take_notifications();
    app
}

#[test]
fn startup_publishes_preset_labels_and_loads_nothing() {
    let mut app = BoxSplash::new(ConfigProxy::default(), 11);
    app.dispatch(Command::Startup).unwrap();
    let notes = app.take_notifications();
    assert_eq!(notes.len(), 1);
    match &notes[0] {
        Notification::ConfigOptions(labels) => assert_eq!(labels.len(), 5),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(app.panel().config_buttons(), app.configs().labels().as_slice());
    assert_eq!(app.panel().header(), "Control Panel");
    assert_eq!(app.panel().available_label(), "Available Configurations:");
    assert_eq!(app.panel().configuration_label(), "Now Displaying:");
    assert_eq!(app.panel().start_stop_label(), "Start");
    assert!(app.world().particles().is_empty());
    assert!(!app.world().is_running());
}

#[test]
fn retrieving_a_preset_labels_the_panel_and_starts_the_world() {
    let mut app = started_app();
    app.dispatch(Command::RetrieveConfigOption(0)).unwrap();
    assert_eq!(
        app.take_notifications(),
        vec![
            Notification::ConfigOptionRetrieved("Light".into()),
            Notification::AnimationStateChanged(true),
        ]
    );
    assert_eq!(app.world().particles().len(), 20);
    assert_eq!(app.panel().configuration_label(), "Now Displaying: Light");
    assert_eq!(app.panel().current_label(), Some("Light"));
    assert_eq!(app.panel().start_stop_label(), "Stop");
}

#[test]
fn retrieving_the_current_preset_again_leaves_the_world_alone() {
    let mut app = started_app();
    app.dispatch(Command::RetrieveConfigOption(0)).unwrap();
    app.take_notifications();
    app.dispatch(Command::RetrieveConfigOption(0)).unwrap();
    assert_eq!(
        app.take_notifications(),
        vec![Notification::ConfigOptionRetrieved("Light".into())]
    );
    assert!(app.world().is_running());
}

#[test]
fn switching_presets_while_running_restarts() {
    let mut app = started_app();
    app.dispatch(Command::RetrieveConfigOption(0)).unwrap();
    app.take_notifications();
    app.dispatch(Command::RetrieveConfigOption(2)).unwrap();
    assert_eq!(
        app.take_notifications(),
        vec![
            Notification::ConfigOptionRetrieved("Medium".into()),
            Notification::AnimationStateChanged(false),
            Notification::AnimationStateChanged(true),
        ]
    );
    assert_eq!(app.world().particles().len(), 80);
}

#[test]
fn toggle_flips_the_button_caption() {
    let mut app = started_app();
    app.dispatch(Command::RetrieveConfigOption(1)).unwrap();
    app.take_notifications();

    app.dispatch(Command::ToggleStartStop).unwrap();
    assert_eq!(
        app.take_notifications(),
        vec![Notification::AnimationStateChanged(false)]
    );
    assert_eq!(app.panel().start_stop_label(), "Start");

    app.dispatch(Command::ToggleStartStop).unwrap();
    assert_eq!(
        app.take_notifications(),
        vec![Notification::AnimationStateChanged(true)]
    );
    assert_eq!(app.panel().start_stop_label(), "Stop");
}

#[test]
fn toggle_on_an_empty_world_does_nothing() {
    let mut app = started_app();
    app.dispatch(Command::ToggleStartStop).unwrap();
    assert!(app.take_notifications().is_empty());
    assert_eq!(app.panel().start_stop_label(), "Start");
}

#[test]
fn unknown_preset_is_reported_without_side_effects() {
    let mut app = started_app();
    let err = app.dispatch(Command::RetrieveConfigOption(9)).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownPreset { index: 9, .. }));
    assert!(app.take_notifications().is_empty());
    assert_eq!(app.panel().configuration_label(), "Now Displaying:");
}

#[test]
fn pointer_motion_steers_and_update_ticks() {
    let mut app = started_app();
    app.dispatch(Command::RetrieveConfigOption(0)).unwrap();
    app.dispatch(Command::PointerMoved { x: 420.0 }).unwrap();
    assert!((app.world().angle() - 1.0).abs() < 1e-4);
    assert_eq!(app.update(Duration::from_millis(20)), 2);

    app.dispatch(Command::ToggleStartStop).unwrap();
    assert_eq!(app.world().angle(), 0.0);
    assert_eq!(app.update(Duration::from_millis(20)), 0);
}
