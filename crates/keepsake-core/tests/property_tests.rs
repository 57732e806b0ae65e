//! Property-based tests for the countdown engine and timeline state.
//!
//! Uses proptest to verify the invariants that hold for every instant and
//! every photo collection, not just the handful of fixtures in unit tests.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use keepsake_core::{
    caption_from_filename, shuffled_order, AnnualDate, CountdownSnapshot, LightboxState, Photo,
    TimelineState, YearGroup,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any month/day pair that exists in some year (Feb 29 included).
fn annual_date_strategy() -> impl Strategy<Value = AnnualDate> {
    (1u32..=12, 1u32..=31)
        .prop_filter_map("day must exist in the month", |(month, day)| {
            AnnualDate::new(month, day).ok()
        })
}

/// An arbitrary instant between 1990 and 2090.
fn instant_strategy() -> impl Strategy<Value = NaiveDateTime> {
    let days = NaiveDate::from_ymd_opt(2090, 12, 31).unwrap().num_days_from_ce()
        - NaiveDate::from_ymd_opt(1990, 1, 1).unwrap().num_days_from_ce();
    (0..=days, 0u32..86_400).prop_map(|(day, second)| {
        let date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + chrono::Duration::days(day as i64);
        date.and_time(chrono::NaiveTime::MIN) + chrono::Duration::seconds(second as i64)
    })
}

fn year_group_strategy() -> impl Strategy<Value = YearGroup> {
    (2019i32..=2025, 0usize..=24).prop_map(|(year, count)| YearGroup {
        year,
        photos: (0..count)
            .map(|i| Photo {
                source_path: format!("/memories/{year}/photo-{i}.jpg"),
                caption: format!("Photo {i}"),
                width: None,
                height: None,
            })
            .collect(),
    })
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    let mut seen = vec![false; len];
    order.len() == len
        && order.iter().all(|&i| {
            let fresh = i < len && !seen[i];
            if fresh {
                seen[i] = true;
            }
            fresh
        })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// prev <= now < next, and they are one annual cycle (365/366 days) apart.
    #[test]
    fn occurrence_windowing(target in annual_date_strategy(), now in instant_strategy()) {
        let next = target.next_occurrence(now);
        let prev = target.previous_occurrence(now);
        prop_assert!(prev <= now);
        prop_assert!(now < next);
        let cycle_days = next.signed_duration_since(prev).num_days();
        prop_assert!(cycle_days == 365 || cycle_days == 366);
    }

    /// Fractions stay in bounds and partition the cycle.
    #[test]
    fn fraction_bounds(target in annual_date_strategy(), now in instant_strategy()) {
        let snap = CountdownSnapshot::at(target, now);
        prop_assert!((0.0..=1.0).contains(&snap.remaining_fraction));
        prop_assert!((0.0..=1.0).contains(&snap.elapsed_fraction));
        prop_assert!((snap.remaining_fraction + snap.elapsed_fraction - 1.0).abs() < 1e-9);
        prop_assert!(snap.to_next.total_seconds <= snap.cycle.total_seconds);
    }

    /// Advancing the clock within one cycle never increases the remaining time.
    #[test]
    fn countdown_monotone(target in annual_date_strategy(), now in instant_strategy(), step in 1i64..3600) {
        let later = now + chrono::Duration::seconds(step);
        let a = CountdownSnapshot::at(target, now);
        let b = CountdownSnapshot::at(target, later);
        // monotone unless the step crossed the occurrence, where the
        // remaining time jumps back up toward a full cycle
        if target.next_occurrence(now) == target.next_occurrence(later) {
            prop_assert!(b.to_next.total_seconds <= a.to_next.total_seconds);
        } else {
            prop_assert!(b.to_next.total_seconds > a.to_next.total_seconds);
        }
    }

    /// Every shuffle is a permutation of [0, len).
    #[test]
    fn shuffle_is_permutation(len in 0usize..=24, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert!(is_permutation(&shuffled_order(len, &mut rng), len));
    }

    /// Display orders survive arbitrary toggle sequences as permutations.
    #[test]
    fn timeline_orders_stay_permutations(
        groups in prop::collection::vec(year_group_strategy(), 1..=7),
        toggles in prop::collection::vec(0usize..7, 0..20),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = TimelineState::new(&groups, &mut rng);
        for idx in toggles {
            state.toggle(idx, &mut rng);
        }
        for (idx, group) in groups.iter().enumerate() {
            prop_assert!(is_permutation(state.display_order(idx), group.photos.len()));
        }
    }

    /// next() after prev() is the identity for non-empty groups, and N next()
    /// calls wrap all the way around.
    #[test]
    fn lightbox_wraparound(group in year_group_strategy(), start in 0usize..24) {
        prop_assume!(!group.photos.is_empty());
        let len = group.photos.len();
        let groups = vec![group];

        let mut lb = LightboxState::open(&groups, 0, start);
        let origin = lb.photo_index;
        prop_assert!(origin < len);

        lb.next(&groups);
        lb.prev(&groups);
        prop_assert_eq!(lb.photo_index, origin);

        for _ in 0..len {
            lb.next(&groups);
        }
        prop_assert_eq!(lb.photo_index, origin);
    }

    /// Captions never keep separators and always capitalize word heads.
    #[test]
    fn caption_shape(stem in "[a-z0-9]{1,8}([-_][a-z0-9]{1,8}){0,3}") {
        let caption = caption_from_filename(&format!("{stem}.jpg"));
        prop_assert!(!caption.contains('-'));
        prop_assert!(!caption.contains('_'));
        for word in caption.split(' ') {
            let first = word.chars().next().unwrap();
            prop_assert!(!first.is_ascii_lowercase());
        }
    }
}
