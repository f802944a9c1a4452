//! Preset configurations and the proxy that hands them out.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgb;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no preset at index {index} ({available} available)")]
    UnknownPreset { index: usize, available: usize },
    #[error("preset `{label}` is invalid: {reason}")]
    Invalid { label: String, reason: &'static str },
    #[error("preset list is empty")]
    Empty,
    #[error("failed to parse preset list: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// A named bundle of animation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxConfig {
    pub label: String,
    pub count: usize,
    pub size: f32,
    pub focal_length: f32,
    pub color: Rgb,
}

impl BoxConfig {
    pub fn new(label: impl Into<String>, count: usize, size: f32, focal_length: f32, color: Rgb) -> Self {
        Self {
            label: label.into(),
            count,
            size,
            focal_length,
            color,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let reason = if self.count == 0 {
            Some("count must be at least 1")
        } else if !(self.size.is_finite() && self.size > 0.0) {
            Some("size must be a positive number")
        } else if !(self.focal_length.is_finite() && self.focal_length > 0.0) {
            Some("focal_length must be a positive number")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(ConfigError::Invalid {
                label: self.label.clone(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

/// The five built-in presets, lightest first.
pub fn default_presets() -> Vec<BoxConfig> {
    vec![
        BoxConfig::new("Light", 20, 50.0, 500.0, Rgb::from_u32(0xFF0000)),
        BoxConfig::new("Medium-light", 40, 30.0, 400.0, Rgb::from_u32(0x00FF00)),
        BoxConfig::new("Medium", 80, 20.0, 300.0, Rgb::from_u32(0x0000FF)),
        BoxConfig::new("Heavy-medium", 160, 10.0, 200.0, Rgb::from_u32(0xFF00FF)),
        BoxConfig::new("Heavy (IE Killer)", 320, 5.0, 200.0, Rgb::from_u32(0x00FFFF)),
    ]
}

/// Ordered, immutable list of presets.
///
/// Each preset is handed out as a shared `Arc` so the world can tell a
/// repeated selection of the same preset apart from an equal-valued one.
#[derive(Clone, Debug)]
pub struct ConfigProxy {
    options: Vec<Arc<BoxConfig>>,
}

impl Default for ConfigProxy {
    fn default() -> Self {
        Self {
            options: default_presets().into_iter().map(Arc::new).collect(),
        }
    }
}

impl ConfigProxy {
    pub fn new(options: Vec<BoxConfig>) -> Result<Self, ConfigError> {
        if options.is_empty() {
            return Err(ConfigError::Empty);
        }
        for option in &options {
            option.validate()?;
        }
        Ok(Self {
            options: options.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse a RON list of presets, e.g.
    /// `[(label: "Sparse", count: 4, size: 40.0, focal_length: 300.0, color: "#FFAA00")]`.
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let options: Vec<BoxConfig> = ron::from_str(source)?;
        Self::new(options)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn options(&self) -> &[Arc<BoxConfig>] {
        &self.options
    }

    pub fn labels(&self) -> Vec<String> {
        self.options.iter().map(|c| c.label.clone()).collect()
    }

    pub fn retrieve_config_option(&self, index: usize) -> Result<Arc<BoxConfig>, ConfigError> {
        self.options
            .get(index)
            .cloned()
            .ok_or(ConfigError::UnknownPreset {
                index,
                available: self.options.len(),
            })
    }
}
