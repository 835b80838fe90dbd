//! Core domain: subscribers for score and popup messages.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::{PlayerResetEvent, ScoreUpdateEvent, ToggleGamePopupEvent};
use crate::core::resources::{GamePopup, Score};

pub(crate) fn apply_score_updates(
    mut score_events: MessageReader<ScoreUpdateEvent>,
    mut score: ResMut<Score>,
) {
    for event in score_events.read() {
        score.add(event.amount);
        info!(
            "Score +{} (total={}, breaks={})",
            event.amount, score.total, score.breaks
        );
    }
}

pub(crate) fn toggle_game_popup(
    mut popup_events: MessageReader<ToggleGamePopupEvent>,
    mut popup: ResMut<GamePopup>,
) {
    for _ in popup_events.read() {
        popup.toggle();
        debug!("Game popup visible={}", popup.visible);
    }
}

pub(crate) fn reset_score_on_reset(
    mut reset_events: MessageReader<PlayerResetEvent>,
    mut score: ResMut<Score>,
) {
    if reset_events.read().count() > 0 {
        score.reset();
    }
}
