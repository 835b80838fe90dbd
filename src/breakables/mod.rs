//! Breakables domain: props that break after enough hits and drop gems.

mod components;
mod events;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Breakable, Gem, HitOutcome, POINTS_PER_GEM, reward_count};
pub use events::BreakableHitEvent;
pub use resources::{BreakableSounds, BreakableTuning};
pub use systems::{spawn_breakable, spawn_gem};

use bevy::prelude::*;

use crate::breakables::systems::{handle_breakable_hits, load_breakable_sounds};

pub struct BreakablesPlugin;

impl Plugin for BreakablesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BreakableTuning>()
            .add_message::<BreakableHitEvent>()
            .add_systems(Startup, load_breakable_sounds)
            .add_systems(
                Update,
                handle_breakable_hits.run_if(resource_exists::<BreakableSounds>),
            );
    }
}
