//! Core domain: game-flow messages shared between domains.

use bevy::ecs::message::Message;

/// Fired by game-flow logic when the player clears the level
#[derive(Debug, Default)]
pub struct PlayerWinEvent;

impl Message for PlayerWinEvent {}

/// Fired by game-flow logic when the player fails the level
#[derive(Debug, Default)]
pub struct PlayerLoseEvent;

impl Message for PlayerLoseEvent {}

/// Fired by game-flow logic when the level is restarted
#[derive(Debug, Default)]
pub struct PlayerResetEvent;

impl Message for PlayerResetEvent {}

/// Score gained from a broken object
#[derive(Debug)]
pub struct ScoreUpdateEvent {
    pub amount: i32,
}

impl Message for ScoreUpdateEvent {}

/// Request to show or hide the in-game popup
#[derive(Debug, Default)]
pub struct ToggleGamePopupEvent;

impl Message for ToggleGamePopupEvent {}
