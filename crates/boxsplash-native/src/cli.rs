use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use boxsplash_core::{ConfigProxy, DEFAULT_SEED};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Perspective box particles", long_about = None)]
pub struct Args {
    /// Preset index to load on launch (0-based)
    #[arg(long)]
    pub preset: Option<usize>,
    /// RON file replacing the built-in preset list
    #[arg(long)]
    pub presets: Option<PathBuf>,
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
    #[arg(long, default_value_t = 800)]
    pub width: u32,
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

impl Args {
    pub fn load_presets(&self) -> anyhow::Result<ConfigProxy> {
        let Some(path) = &self.presets else {
            return Ok(ConfigProxy::default());
        };
        let txt = fs::read_to_string(path).with_context(|| format!("read presets {:?}", path))?;
        let proxy =
            ConfigProxy::from_ron(&txt).with_context(|| format!("load presets {:?}", path))?;
        log::info!("[presets] loaded {} from {:?}", proxy.len(), path);
        Ok(proxy)
    }
}
