//! Audio domain: one-shot sound effects and pitch jitter.

use bevy::audio::Volume;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::RemovalQueue;

/// Random pitch offset applied around a base pitch
pub const PITCH_JITTER: f32 = 0.1;

/// Seeded RNG for sound variation, so runs with a fixed seed sound the same
#[derive(Resource, Debug)]
pub struct SfxRng(pub ChaCha8Rng);

impl SfxRng {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Pitch uniformly drawn from `base ± PITCH_JITTER`
    pub fn jitter_pitch(&mut self, base: f32) -> f32 {
        self.0
            .random_range(base - PITCH_JITTER..=base + PITCH_JITTER)
    }
}

impl Default for SfxRng {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Emitter entity whose removal is handled by the `RemovalQueue`
#[derive(Component, Debug)]
pub struct SoundEmitter;

/// Fire-and-forget playback; Bevy despawns the entity when the clip ends
pub fn one_shot_settings(volume: f32, pitch: f32) -> PlaybackSettings {
    PlaybackSettings::DESPAWN
        .with_volume(Volume::Linear(volume))
        .with_speed(pitch)
}

/// Clip played once by a placed emitter
#[derive(Debug, Clone)]
pub struct EmitterSound {
    pub clip: Handle<AudioSource>,
    pub volume: f32,
    pub pitch: f32,
    /// Clip length in seconds; the emitter is removed after this long
    pub length: f32,
}

/// Spawn a sound emitter at `position` and schedule its removal
pub fn spawn_sound_emitter(
    commands: &mut Commands,
    removals: &mut RemovalQueue,
    now: f32,
    position: Vec2,
    sound: EmitterSound,
) -> Entity {
    let emitter = commands
        .spawn((
            SoundEmitter,
            Transform::from_translation(position.extend(0.0)),
            AudioPlayer::new(sound.clip),
            PlaybackSettings::ONCE
                .with_volume(Volume::Linear(sound.volume))
                .with_speed(sound.pitch),
        ))
        .id();
    removals.schedule(emitter, now + sound.length);
    emitter
}
