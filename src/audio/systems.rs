//! Audio domain: BGM playback systems.

use std::time::Duration;

use bevy::audio::{AudioSinkPlayback, Volume};
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::audio::bgm::{BgmState, BgmTuning, FadeKind, FadeProgress, TrackStart};
use crate::core::{CurrentLevel, PlayerLoseEvent, PlayerResetEvent, PlayerWinEvent};

/// The entity playing the current level's music
#[derive(Component, Debug)]
pub struct BgmTrack {
    pub index: usize,
}

fn spawn_track(
    commands: &mut Commands,
    asset_server: &AssetServer,
    tuning: &BgmTuning,
    start: TrackStart,
    volume: f32,
) {
    let Some(path) = tuning.tracks.get(start.index) else {
        return;
    };

    commands.spawn((
        BgmTrack { index: start.index },
        AudioPlayer::new(asset_server.load::<AudioSource>(path.clone())),
        PlaybackSettings {
            volume: Volume::Linear(volume),
            start_position: Some(Duration::from_secs_f32(start.offset)),
            ..PlaybackSettings::LOOP
        },
    ));
    info!(
        "BGM started: track={} ({}), offset={:.1}s",
        start.index, path, start.offset
    );
}

pub(crate) fn start_level_bgm(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    level: Res<CurrentLevel>,
    tuning: Res<BgmTuning>,
    mut state: ResMut<BgmState>,
) {
    if let Some(start) = state.begin(level.0, &tuning) {
        spawn_track(&mut commands, &asset_server, &tuning, start, state.volume);
    }
}

pub(crate) fn request_bgm_fades(
    mut win_events: MessageReader<PlayerWinEvent>,
    mut lose_events: MessageReader<PlayerLoseEvent>,
    mut reset_events: MessageReader<PlayerResetEvent>,
    tuning: Res<BgmTuning>,
    mut state: ResMut<BgmState>,
) {
    let requests = win_events
        .read()
        .map(|_| FadeKind::Win)
        .chain(lose_events.read().map(|_| FadeKind::Lose))
        .chain(reset_events.read().map(|_| FadeKind::Reset))
        .collect::<Vec<_>>();

    for kind in requests {
        if state.request_fade(kind, &tuning) {
            debug!(
                "BGM fade started: {:?} over {:.1}s",
                kind,
                kind.duration(&tuning)
            );
        } else {
            debug!("BGM fade {:?} dropped: fade already running", kind);
        }
    }
}

pub(crate) fn advance_bgm_fade(
    mut commands: Commands,
    time: Res<Time>,
    asset_server: Res<AssetServer>,
    level: Res<CurrentLevel>,
    tuning: Res<BgmTuning>,
    mut state: ResMut<BgmState>,
    mut tracks: Query<(Entity, &BgmTrack, &mut AudioSink)>,
    pending: Query<Entity, (With<BgmTrack>, Without<AudioSink>)>,
) {
    match state.tick(time.delta_secs()) {
        FadeProgress::Idle => {}
        FadeProgress::Fading(volume) => {
            for (_, _, mut sink) in &mut tracks {
                sink.set_volume(Volume::Linear(volume));
            }
        }
        FadeProgress::Finished(kind) => {
            for (entity, track, sink) in &tracks {
                sink.stop();
                commands.entity(entity).despawn();
                info!("BGM track {} stopped after {:?} fade", track.index, kind);
            }
            // A track whose sink has not been created yet never started
            for entity in &pending {
                commands.entity(entity).despawn();
            }

            // A reset replays the level, so its music starts over even when
            // the reset arrived during another fade
            if state.take_restart() {
                if let Some(start) = state.begin(level.0, &tuning) {
                    spawn_track(&mut commands, &asset_server, &tuning, start, state.volume);
                }
            }
        }
    }
}
