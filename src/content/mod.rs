//! Content domain: data-driven tuning loaded from RON at startup.

mod data;
mod loader;
#[cfg(test)]
mod tests;

pub use data::{BlockDef, GameplayConfig, LevelLayout, PropDef};
pub use loader::{ContentLoadError, load_gameplay_config, parse_gameplay_config};

use std::path::Path;

use bevy::prelude::*;

use crate::audio::SfxRng;
use crate::core::CurrentLevel;

pub const GAMEPLAY_CONFIG_PATH: &str = "assets/data/gameplay.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let config = match load_gameplay_config(Path::new(GAMEPLAY_CONFIG_PATH)) {
            Ok(config) => {
                info!(
                    "Loaded gameplay config: level={}, props={}",
                    config.level,
                    config.layout.props.len()
                );
                config
            }
            Err(e) => {
                warn!("{}; using built-in defaults", e);
                GameplayConfig::default()
            }
        };

        insert_config(app, config);
    }
}

/// Install every section of the config as its own resource
fn insert_config(app: &mut App, config: GameplayConfig) {
    app.insert_resource(CurrentLevel(config.level))
        .insert_resource(SfxRng::new(config.sfx_seed))
        .insert_resource(config.movement)
        .insert_resource(config.breakables)
        .insert_resource(config.bgm)
        .insert_resource(config.layout);
}
