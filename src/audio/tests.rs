//! Audio domain: tests for BGM selection, fades, and pitch jitter.

use super::{
    BgmState, BgmTuning, FadeKind, FadeProgress, LOOP_START_OFFSET_SECS, PITCH_JITTER, SfxRng,
    TrackStart, VolumeFade,
};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// -----------------------------------------------------------------------------
// Track selection
// -----------------------------------------------------------------------------

#[test]
fn test_start_offset_by_level() {
    let tuning = BgmTuning::default();
    assert_eq!(tuning.start_offset(-1), 0.0);
    assert_eq!(tuning.start_offset(0), 0.0);
    assert_eq!(tuning.start_offset(1), LOOP_START_OFFSET_SECS);
    assert_eq!(tuning.start_offset(3), LOOP_START_OFFSET_SECS);
}

#[test]
fn test_level_zero_plays_first_track_from_start() {
    let tuning = BgmTuning::default();
    let mut state = BgmState::default();

    let start = state.begin(0, &tuning);
    assert_eq!(
        start,
        Some(TrackStart {
            index: 0,
            offset: 0.0
        })
    );
    assert_eq!(state.current_track, Some(0));
    assert!(state.playing);
    assert_eq!(state.volume, tuning.volume);
}

#[test]
fn test_level_two_plays_third_track_from_loop_point() {
    let tuning = BgmTuning::default();
    let mut state = BgmState::default();

    let start = state.begin(2, &tuning);
    assert_eq!(
        start,
        Some(TrackStart {
            index: 2,
            offset: 20.6
        })
    );
}

#[test]
fn test_out_of_range_level_plays_nothing() {
    let tuning = BgmTuning::default();
    let mut state = BgmState::default();

    assert_eq!(state.begin(4, &tuning), None);
    assert_eq!(state.begin(-1, &tuning), None);
    assert!(!state.playing);
    assert_eq!(state.current_track, None);
}

// -----------------------------------------------------------------------------
// Fades
// -----------------------------------------------------------------------------

#[test]
fn test_fade_durations() {
    let tuning = BgmTuning::default();
    assert_eq!(FadeKind::Win.duration(&tuning), 3.5);
    assert_eq!(FadeKind::Lose.duration(&tuning), 0.5);
    assert_eq!(FadeKind::Reset.duration(&tuning), 1.0);
}

#[test]
fn test_volume_fade_is_linear() {
    let mut fade = VolumeFade::new(FadeKind::Reset, 0.8, 1.0);
    assert!(approx(fade.advance(0.25), 0.6));
    assert!(approx(fade.advance(0.25), 0.4));
    assert!(!fade.is_finished());
    assert!(approx(fade.advance(0.5), 0.0));
    assert!(fade.is_finished());
}

#[test]
fn test_zero_length_fade_finishes_immediately() {
    let mut fade = VolumeFade::new(FadeKind::Lose, 1.0, 0.0);
    assert_eq!(fade.advance(0.0), 0.0);
    assert!(fade.is_finished());
}

#[test]
fn test_fade_reaches_silence_and_stops() {
    let tuning = BgmTuning::default();
    let mut state = BgmState::default();
    state.begin(1, &tuning);

    assert!(state.request_fade(FadeKind::Lose, &tuning));
    assert!(state.is_fading());

    match state.tick(0.25) {
        FadeProgress::Fading(volume) => assert!(approx(volume, 0.5)),
        other => panic!("expected Fading, got {:?}", other),
    }
    assert!(state.playing);

    assert_eq!(state.tick(0.25), FadeProgress::Finished(FadeKind::Lose));
    assert_eq!(state.volume, 0.0);
    assert!(!state.playing);
    assert!(!state.is_fading());
    assert_eq!(state.tick(0.25), FadeProgress::Idle);
}

#[test]
fn test_overlapping_fade_requests_are_dropped() {
    let tuning = BgmTuning::default();
    let mut state = BgmState::default();
    state.begin(0, &tuning);

    assert!(state.request_fade(FadeKind::Win, &tuning));
    assert!(!state.request_fade(FadeKind::Lose, &tuning));
    assert!(!state.request_fade(FadeKind::Reset, &tuning));

    // Still running the first 3.5s win fade
    assert!(matches!(state.tick(1.0), FadeProgress::Fading(_)));
    assert!(matches!(state.tick(2.0), FadeProgress::Fading(_)));
    assert_eq!(state.tick(0.5), FadeProgress::Finished(FadeKind::Win));

    // Guard cleared: a new fade is accepted
    assert!(state.request_fade(FadeKind::Reset, &tuning));
}

#[test]
fn test_idle_state_has_no_fade() {
    let mut state = BgmState::default();
    assert!(!state.is_fading());
    assert_eq!(state.tick(1.0), FadeProgress::Idle);
}

#[test]
fn test_reset_during_lose_fade_still_restarts_music() {
    let tuning = BgmTuning::default();
    let mut state = BgmState::default();
    state.begin(1, &tuning);

    assert!(state.request_fade(FadeKind::Lose, &tuning));
    assert!(matches!(state.tick(0.2), FadeProgress::Fading(_)));
    assert!(!state.request_fade(FadeKind::Reset, &tuning));

    // The lose fade runs to completion, then the level track comes back
    assert_eq!(state.tick(0.3), FadeProgress::Finished(FadeKind::Lose));
    assert!(state.take_restart());
    assert_eq!(
        state.begin(1, &tuning),
        Some(TrackStart {
            index: 1,
            offset: LOOP_START_OFFSET_SECS,
        })
    );
    assert!(state.playing);
    assert!(approx(state.volume, tuning.volume));
    assert!(!state.take_restart());
}

#[test]
fn test_win_or_lose_alone_does_not_restart_music() {
    let tuning = BgmTuning::default();
    let mut state = BgmState::default();
    state.begin(0, &tuning);

    assert!(state.request_fade(FadeKind::Win, &tuning));
    assert_eq!(state.tick(4.0), FadeProgress::Finished(FadeKind::Win));
    assert!(!state.take_restart());
}

#[test]
fn test_reset_fade_requests_restart() {
    let tuning = BgmTuning::default();
    let mut state = BgmState::default();
    state.begin(2, &tuning);

    assert!(state.request_fade(FadeKind::Reset, &tuning));
    assert_eq!(state.tick(1.0), FadeProgress::Finished(FadeKind::Reset));
    assert!(state.take_restart());
}

// -----------------------------------------------------------------------------
// SfxRng
// -----------------------------------------------------------------------------

#[test]
fn test_pitch_jitter_stays_in_range() {
    let mut rng = SfxRng::new(Some(7));
    for _ in 0..200 {
        let pitch = rng.jitter_pitch(1.2);
        assert!(pitch >= 1.2 - PITCH_JITTER - EPSILON);
        assert!(pitch <= 1.2 + PITCH_JITTER + EPSILON);
    }
}

#[test]
fn test_seeded_pitch_is_reproducible() {
    let mut a = SfxRng::new(Some(42));
    let mut b = SfxRng::new(Some(42));
    for _ in 0..10 {
        assert_eq!(a.jitter_pitch(1.0), b.jitter_pitch(1.0));
    }
}
