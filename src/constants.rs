// Page wiring and drawing constants for the web frontend.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "world-space";
pub const PANEL_ID: &str = "control-panel";

// Element ids created by the control panel
pub const CURRENT_CONFIG_LABEL_ID: &str = "current-config-label";
pub const START_BUTTON_ID: &str = "start-button";
pub const CONFIG_BUTTON_PREFIX: &str = "config-button-"; // followed by the 1-based index

// Canvas drawing
pub const BACKGROUND_CSS: &str = "#000000";
pub const BORDER_LINE_WIDTH: f64 = 1.0;

// Longest frame delta fed to the world; longer gaps (hidden tab) are dropped
pub const MAX_FRAME_DT_MS: u64 = 250;
