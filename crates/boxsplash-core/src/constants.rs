use std::time::Duration;

use crate::color::Rgb;

// Shared animation tuning constants used by both web and native frontends.

// Timing
pub const TICK_INTERVAL: Duration = Duration::from_millis(10); // one animation step
pub const MAX_CATCH_UP_STEPS: u32 = 25; // cap on ticks run for a single long frame

// Interaction
pub const STEER_DEGREES_PER_PX: f32 = 0.01; // rotation per tick per pixel from the vanishing point

// Spawning
pub const SPAWN_EXTENT_XY: f32 = 250.0; // x and y are drawn from [-extent/2, extent/2)

// Depth shading
pub const FILL_FAR: Rgb = Rgb::new(0x22, 0x22, 0x22); // fill colour at progress 1
pub const BORDER_NEAR: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
pub const BORDER_FAR: Rgb = Rgb::new(0x01, 0x01, 0x01);
pub const BORDER_WIDTH_PX: f32 = 1.0;

// Viewport used until a host reports its real size
pub const DEFAULT_VIEWPORT: [f32; 2] = [640.0, 480.0];

// Default RNG seed for reproducible worlds
pub const DEFAULT_SEED: u64 = 42;
