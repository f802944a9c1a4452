use boxsplash_core::Command;

// ---------------- Pointer and canvas helpers ----------------

/// Pointer x in CSS pixels from the canvas' left edge, the unit the world
/// is laid out in.
#[inline]
pub fn pointer_world_x(client_x: f32, rect_left: f32) -> f32 {
    client_x - rect_left
}

/// CSS size of a canvas whose backing store is `width_px` x `height_px`
/// device pixels.
#[inline]
pub fn css_size(width_px: u32, height_px: u32, dpr: f64) -> (f32, f32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    ((width_px as f64 / dpr) as f32, (height_px as f64 / dpr) as f32)
}

// ---------------- Keyboard helpers ----------------

#[inline]
pub fn preset_index_for_key(key: &str) -> Option<usize> {
    match key {
        "1" => Some(0),
        "2" => Some(1),
        "3" => Some(2),
        "4" => Some(3),
        "5" => Some(4),
        "6" => Some(5),
        "7" => Some(6),
        "8" => Some(7),
        "9" => Some(8),
        _ => None,
    }
}

pub fn command_for_key(key: &str) -> Option<Command> {
    if let Some(index) = preset_index_for_key(key) {
        return Some(Command::RetrieveConfigOption(index));
    }
    match key {
        " " | "Spacebar" | "s" | "S" => Some(Command::ToggleStartStop),
        _ => None,
    }
}

// ---------------- Panel helpers ----------------

/// Parse the 1-based index suffix of a preset button id.
#[inline]
pub fn preset_index_from_button_id(id: &str, prefix: &str) -> Option<usize> {
    let n: usize = id.strip_prefix(prefix)?.parse().ok()?;
    n.checked_sub(1)
}

/// Command for a click on the panel element with `id`, if it is a button.
pub fn panel_command_for_id(id: &str, preset_prefix: &str, start_id: &str) -> Option<Command> {
    if id == start_id {
        return Some(Command::ToggleStartStop);
    }
    preset_index_from_button_id(id, preset_prefix).map(Command::RetrieveConfigOption)
}
