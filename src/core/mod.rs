//! Core domain: game-flow messages, score, and scheduled removal.

mod events;
mod removal;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use events::{
    PlayerLoseEvent, PlayerResetEvent, PlayerWinEvent, ScoreUpdateEvent, ToggleGamePopupEvent,
};
pub use removal::RemovalQueue;
pub use resources::{CurrentLevel, GamePopup, Score};

use bevy::prelude::*;

use crate::core::removal::despawn_expired;
use crate::core::systems::{apply_score_updates, reset_score_on_reset, toggle_game_popup};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentLevel>()
            .init_resource::<Score>()
            .init_resource::<GamePopup>()
            .init_resource::<RemovalQueue>()
            .add_message::<PlayerWinEvent>()
            .add_message::<PlayerLoseEvent>()
            .add_message::<PlayerResetEvent>()
            .add_message::<ScoreUpdateEvent>()
            .add_message::<ToggleGamePopupEvent>()
            .add_systems(
                Update,
                (apply_score_updates, toggle_game_popup, reset_score_on_reset),
            )
            .add_systems(PostUpdate, despawn_expired);
    }
}
