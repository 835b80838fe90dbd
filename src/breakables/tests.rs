//! Breakables domain: tests for hit handling and reward counts.

use super::{Breakable, HitOutcome, reward_count};

// -----------------------------------------------------------------------------
// Hit handling
// -----------------------------------------------------------------------------

#[test]
fn test_health_decreases_per_hit() {
    let mut crate_prop = Breakable::new(3.0, 30);

    let mut last = crate_prop.health;
    for _ in 0..2 {
        let outcome = crate_prop.react_to_hit(1.0);
        assert!(matches!(outcome, HitOutcome::Damaged { .. }));
        assert!(crate_prop.health < last);
        last = crate_prop.health;
    }
    assert_eq!(crate_prop.health, 1.0);
}

#[test]
fn test_breaks_when_health_first_reaches_zero() {
    let mut crate_prop = Breakable::new(2.0, 45);

    assert_eq!(
        crate_prop.react_to_hit(1.0),
        HitOutcome::Damaged { remaining: 1.0 }
    );
    assert_eq!(
        crate_prop.react_to_hit(1.0),
        HitOutcome::Broken {
            score: 45,
            rewards: 4
        }
    );
}

#[test]
fn test_overkill_hit_breaks() {
    let mut crate_prop = Breakable::new(1.0, 10);
    assert_eq!(
        crate_prop.react_to_hit(5.0),
        HitOutcome::Broken {
            score: 10,
            rewards: 1
        }
    );
    assert_eq!(crate_prop.health, -4.0);
}

#[test]
fn test_hits_after_breaking_break_again() {
    // No re-entrancy guard: a prop hit twice before despawning breaks twice
    let mut crate_prop = Breakable::new(1.0, 20);
    assert!(matches!(
        crate_prop.react_to_hit(1.0),
        HitOutcome::Broken { .. }
    ));
    assert!(matches!(
        crate_prop.react_to_hit(1.0),
        HitOutcome::Broken { .. }
    ));
}

#[test]
fn test_negative_damage_is_accepted() {
    let mut crate_prop = Breakable::new(1.0, 20);
    assert_eq!(
        crate_prop.react_to_hit(-2.0),
        HitOutcome::Damaged { remaining: 3.0 }
    );
}

// -----------------------------------------------------------------------------
// Reward counts
// -----------------------------------------------------------------------------

#[test]
fn test_reward_count_truncates() {
    assert_eq!(reward_count(0), 0);
    assert_eq!(reward_count(9), 0);
    assert_eq!(reward_count(10), 1);
    assert_eq!(reward_count(19), 1);
    assert_eq!(reward_count(100), 10);
}

#[test]
fn test_reward_count_floor_for_all_small_values() {
    for value in 0..500 {
        assert_eq!(reward_count(value), (value / 10) as u32);
    }
}

#[test]
fn test_negative_value_drops_nothing() {
    assert_eq!(reward_count(-5), 0);
    assert_eq!(reward_count(-50), 0);
}
