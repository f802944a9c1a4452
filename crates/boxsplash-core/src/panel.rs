/// Text shown by the control panel, independent of how a host lays it out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlPanel {
    header: &'static str,
    available_label: &'static str,
    config_buttons: Vec<String>,
    current: Option<String>,
    running: bool,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            header: "Control Panel",
            available_label: "Available Configurations:",
            ..Default::default()
        }
    }

    pub fn header(&self) -> &'static str {
        self.header
    }

    pub fn available_label(&self) -> &'static str {
        self.available_label
    }

    /// One caption per preset, in list order.
    pub fn config_buttons(&self) -> &[String] {
        &self.config_buttons
    }

    pub fn set_configuration_buttons(&mut self, labels: Vec<String>) {
        self.config_buttons = labels;
    }

    pub fn set_configuration_label(&mut self, label: impl Into<String>) {
        self.current = Some(label.into());
    }

    pub fn animation_state_changed(&mut self, running: bool) {
        self.running = running;
    }

    pub fn current_label(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn configuration_label(&self) -> String {
        match &self.current {
            Some(label) => format!("Now Displaying: {label}"),
            None => "Now Displaying:".to_string(),
        }
    }

    pub fn start_stop_label(&self) -> &'static str {
        if self.running {
            "Stop"
        } else {
            "Start"
        }
    }
}
