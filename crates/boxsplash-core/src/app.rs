//! Command dispatch between a host's input and the model.
//!
//! Hosts translate their own events (button clicks, key presses, pointer
//! motion, window resizes) into [`Command`]s and read back
//! [`Notification`]s to refresh their panel.

use std::time::Duration;

use crate::config::{ConfigError, ConfigProxy};
use crate::panel::ControlPanel;
use crate::world::{WorldEvent, WorldSpace};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Startup,
    RetrieveConfigOption(usize),
    ToggleStartStop,
    PointerMoved { x: f32 },
    Resize { width: f32, height: f32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    ConfigOptions(Vec<String>),
    ConfigOptionRetrieved(String),
    AnimationStateChanged(bool),
}

pub struct BoxSplash {
    configs: ConfigProxy,
    world: WorldSpace,
    panel: ControlPanel,
    outbox: Vec<Notification>,
}

impl BoxSplash {
    pub fn new(configs: ConfigProxy, seed: u64) -> Self {
        Self {
            configs,
            world: WorldSpace::new(seed),
            panel: ControlPanel::new(),
            outbox: Vec::new(),
        }
    }

    pub fn configs(&self) -> &ConfigProxy {
        &self.configs
    }

    pub fn world(&self) -> &WorldSpace {
        &self.world
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn dispatch(&mut self, command: Command) -> Result<(), ConfigError> {
        match command {
            Command::Startup => {
                let labels = self.configs.labels();
                self.panel.set_configuration_buttons(labels.clone());
                self.outbox.push(Notification::ConfigOptions(labels));
            }
            Command::RetrieveConfigOption(index) => {
                let config = self.configs.retrieve_config_option(index)?;
                log::info!("[config] option {} -> `{}`", index, config.label);
                self.panel.set_configuration_label(config.label.clone());
                self.outbox
                    .push(Notification::ConfigOptionRetrieved(config.label.clone()));
                self.world.set_configuration(config);
            }
            Command::ToggleStartStop => {
                self.world.toggle_start_stop();
            }
            Command::PointerMoved { x } => self.world.steer(x),
            Command::Resize { width, height } => self.world.resize(width, height),
        }
        self.forward_world_events();
        Ok(())
    }

    /// Advance the world by `dt`; returns the number of ticks run.
    pub fn update(&mut self, dt: Duration) -> u32 {
        let ticks = self.world.update(dt);
        self.forward_world_events();
        ticks
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.outbox)
    }

    fn forward_world_events(&mut self) {
        for event in self.world.take_events() {
            match event {
                WorldEvent::AnimationStateChanged { running } => {
                    self.panel.animation_state_changed(running);
                    self.outbox.push(Notification::AnimationStateChanged(running));
                }
            }
        }
    }
}
