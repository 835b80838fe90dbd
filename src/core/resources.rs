//! Core domain: shared resources for level selection, score, and popup state.

use bevy::prelude::*;

/// Level number chosen before the level starts. Selects the BGM track.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CurrentLevel(pub i32);

/// Running score total for the current level
#[derive(Resource, Debug, Default)]
pub struct Score {
    pub total: i32,
    pub breaks: u32,
}

impl Score {
    pub fn add(&mut self, amount: i32) {
        self.total += amount;
        self.breaks += 1;
    }

    pub fn reset(&mut self) {
        self.total = 0;
        self.breaks = 0;
    }
}

/// Visibility of the in-game popup. Drawing it belongs to the UI layer.
#[derive(Resource, Debug, Default)]
pub struct GamePopup {
    pub visible: bool,
}

impl GamePopup {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}
