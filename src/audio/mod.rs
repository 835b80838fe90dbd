//! Audio domain: level music with guarded fades, and one-shot sound emitters.

mod bgm;
mod sfx;
mod systems;
#[cfg(test)]
mod tests;

pub use bgm::{
    BgmState, BgmTuning, FadeKind, FadeProgress, LOOP_START_OFFSET_SECS, TrackStart, VolumeFade,
};
pub use sfx::{
    EmitterSound, PITCH_JITTER, SfxRng, SoundEmitter, one_shot_settings, spawn_sound_emitter,
};
pub use systems::BgmTrack;

use bevy::prelude::*;

use crate::audio::systems::{advance_bgm_fade, request_bgm_fades, start_level_bgm};

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BgmTuning>()
            .init_resource::<BgmState>()
            .init_resource::<SfxRng>()
            .add_systems(Startup, start_level_bgm)
            .add_systems(Update, (request_bgm_fades, advance_bgm_fade).chain());
    }
}
