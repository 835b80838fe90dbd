//! Audio domain: background-music track selection and volume fades.
//!
//! `BgmState` owns the fade guard: while a `VolumeFade` is running, further
//! fade requests are dropped rather than queued or merged. A dropped reset
//! still leaves a pending restart, so the level music always comes back.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Loop point used by every level after the first
pub const LOOP_START_OFFSET_SECS: f32 = 20.6;

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BgmTuning {
    /// One track per level, indexed by level number
    pub tracks: Vec<String>,
    pub volume: f32,
    pub loop_start_offset: f32,
    pub win_fade_secs: f32,
    pub lose_fade_secs: f32,
    pub reset_fade_secs: f32,
}

impl Default for BgmTuning {
    fn default() -> Self {
        Self {
            tracks: vec![
                "audio/bgm/bgm_000_loop.ogg".to_string(),
                "audio/bgm/bgm_00_loop.ogg".to_string(),
                "audio/bgm/bgm_01_loop.ogg".to_string(),
                "audio/bgm/bgm_02_loop.ogg".to_string(),
            ],
            volume: 1.0,
            loop_start_offset: LOOP_START_OFFSET_SECS,
            win_fade_secs: 3.5,
            lose_fade_secs: 0.5,
            reset_fade_secs: 1.0,
        }
    }
}

impl BgmTuning {
    /// Playback start position for a level: the intro only plays on level 0
    pub fn start_offset(&self, level: i32) -> f32 {
        if level < 1 {
            0.0
        } else {
            self.loop_start_offset
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeKind {
    Win,
    Lose,
    Reset,
}

impl FadeKind {
    pub fn duration(self, tuning: &BgmTuning) -> f32 {
        match self {
            FadeKind::Win => tuning.win_fade_secs,
            FadeKind::Lose => tuning.lose_fade_secs,
            FadeKind::Reset => tuning.reset_fade_secs,
        }
    }
}

/// Linear fade from a starting volume to silence
#[derive(Debug, Clone, Copy)]
pub struct VolumeFade {
    pub kind: FadeKind,
    pub start_volume: f32,
    pub elapsed: f32,
    pub duration: f32,
}

impl VolumeFade {
    pub fn new(kind: FadeKind, start_volume: f32, duration: f32) -> Self {
        Self {
            kind,
            start_volume,
            elapsed: 0.0,
            duration,
        }
    }

    /// Advance by `dt` and return the new volume
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt;
        let t = if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.start_volume * (1.0 - t)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Track to start playing and where
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackStart {
    pub index: usize,
    pub offset: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeProgress {
    Idle,
    Fading(f32),
    /// Volume reached zero; playback should stop
    Finished(FadeKind),
}

#[derive(Resource, Debug, Default)]
pub struct BgmState {
    pub current_track: Option<usize>,
    pub volume: f32,
    pub playing: bool,
    fade: Option<VolumeFade>,
    restart_pending: bool,
}

impl BgmState {
    /// Select the track for `level`. Returns `None` when the level has no track.
    pub fn begin(&mut self, level: i32, tuning: &BgmTuning) -> Option<TrackStart> {
        let index = usize::try_from(level)
            .ok()
            .filter(|&index| index < tuning.tracks.len());

        let Some(index) = index else {
            warn!(
                "No BGM track for level {} ({} tracks configured)",
                level,
                tuning.tracks.len()
            );
            self.current_track = None;
            self.playing = false;
            return None;
        };

        self.current_track = Some(index);
        self.volume = tuning.volume;
        self.playing = true;

        Some(TrackStart {
            index,
            offset: tuning.start_offset(level),
        })
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Start a fade-out unless one is already running. Returns whether the
    /// request was taken.
    pub fn request_fade(&mut self, kind: FadeKind, tuning: &BgmTuning) -> bool {
        if kind == FadeKind::Reset {
            self.restart_pending = true;
        }
        if self.is_fading() {
            return false;
        }

        self.fade = Some(VolumeFade::new(kind, self.volume, kind.duration(tuning)));
        true
    }

    pub fn tick(&mut self, dt: f32) -> FadeProgress {
        let Some(fade) = self.fade.as_mut() else {
            return FadeProgress::Idle;
        };

        self.volume = fade.advance(dt);

        if fade.is_finished() {
            let kind = fade.kind;
            self.volume = 0.0;
            self.playing = false;
            self.fade = None;
            FadeProgress::Finished(kind)
        } else {
            FadeProgress::Fading(self.volume)
        }
    }

    /// Whether a reset arrived since the last restart. Clears the flag.
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart_pending)
    }
}
