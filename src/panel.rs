use boxsplash_core::{BoxSplash, Command, Notification};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::constants::{
    CONFIG_BUTTON_PREFIX, CURRENT_CONFIG_LABEL_ID, PANEL_ID, START_BUTTON_ID,
};
use crate::dom;
use crate::input;

/// Build the panel markup from the model's panel state and wire its buttons.
pub fn build(document: &web::Document, app: &Rc<RefCell<BoxSplash>>) -> anyhow::Result<()> {
    let root = document
        .get_element_by_id(PANEL_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", PANEL_ID))?;
    root.set_inner_html("");

    let panel = app.borrow().panel().clone();
    dom::create_child(document, &root, "h1", Some("header-label"), panel.header())?;
    dom::create_child(
        document,
        &root,
        "p",
        Some("available-configs-label"),
        panel.available_label(),
    )?;
    for (i, label) in panel.config_buttons().iter().enumerate() {
        let id = format!("{}{}", CONFIG_BUTTON_PREFIX, i + 1);
        dom::create_child(document, &root, "button", Some(&id), label)?;
    }
    dom::create_child(
        document,
        &root,
        "p",
        Some(CURRENT_CONFIG_LABEL_ID),
        &panel.configuration_label(),
    )?;
    dom::create_child(
        document,
        &root,
        "button",
        Some(START_BUTTON_ID),
        panel.start_stop_label(),
    )?;

    // One listener for the whole panel; buttons are told apart by id.
    let app_click = app.clone();
    dom::on_click(&root, move |ev| {
        let command = dom::event_target_id(&ev).and_then(|id| {
            input::panel_command_for_id(&id, CONFIG_BUTTON_PREFIX, START_BUTTON_ID)
        });
        if let Some(command) = command {
            dispatch(&app_click, command);
        }
    });
    Ok(())
}

/// Run a command and reflect any resulting notifications in the page.
pub fn dispatch(app: &Rc<RefCell<BoxSplash>>, command: Command) {
    if let Err(e) = app.borrow_mut().dispatch(command) {
        log::warn!("[panel] {e}");
    }
    refresh(app);
}

pub fn refresh(app: &Rc<RefCell<BoxSplash>>) {
    let notifications = app.borrow_mut().take_notifications();
    if notifications.is_empty() {
        return;
    }
    let Some(document) = dom::window_document() else {
        return;
    };
    let app = app.borrow();
    let panel = app.panel();
    for n in notifications {
        match n {
            Notification::ConfigOptionRetrieved(_) => {
                dom::set_text(&document, CURRENT_CONFIG_LABEL_ID, &panel.configuration_label());
            }
            Notification::AnimationStateChanged(_) => {
                dom::set_text(&document, START_BUTTON_ID, panel.start_stop_label());
            }
            Notification::ConfigOptions(labels) => {
                log::debug!("[panel] {} presets available", labels.len());
            }
        }
    }
}
