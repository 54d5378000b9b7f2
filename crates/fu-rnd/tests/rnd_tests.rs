// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use fu_math::{Vec2, Vec3};
use fu_rnd::distributed::{self, box_muller, marsaglia_polar};
use fu_rnd::{add, ascending, unit_vec2, unit_vec3, Rng, RndError, DEFAULT_CHARSET};
use proptest::prelude::*;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[test]
fn matching_seeds_replay_the_same_sequence() {
    let mut a = Rng::from_seed_u64(42);
    let mut b = Rng::from_seed_u64(42);
    for _ in 0..64 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
    assert_ne!(
        Rng::from_seed_u64(1).next_u64(),
        Rng::from_seed_u64(2).next_u64()
    );
}

#[test]
fn seeded_dice_rolls_are_stable() {
    let mut rng = Rng::from_seed_u64(42);
    let rolls: Vec<i64> = (0..8).map(|_| rng.int(0, 6).unwrap()).collect();
    assert_eq!(rolls, vec![2, 4, 0, 2, 5, 0, 2, 1]);
}

#[test]
fn reversed_bounds_are_an_error() {
    let mut rng = Rng::from_seed_u64(1);
    let err = rng.int(5, 1).unwrap_err();
    assert_eq!(err, RndError::InvalidRange { min: 5, max: 1 });
    assert_eq!(err.to_string(), "invalid range: min 5 is greater than max 1");
    assert!(rng.int_below(-1).is_err());
}

#[test]
fn pick_from_nothing_is_none() {
    let mut rng = Rng::from_seed_u64(3);
    assert_eq!(rng.pick::<u8>(&[]), None);
    let items = [10, 20, 30];
    for _ in 0..32 {
        assert!(items.contains(rng.pick(&items).unwrap()));
    }
}

#[test]
fn strings_use_the_requested_alphabet() {
    let mut rng = Rng::from_seed_u64(9);
    let s = rng.string(32, "xyz").unwrap();
    assert_eq!(s.chars().count(), 32);
    assert!(s.chars().all(|c| "xyz".contains(c)));

    let d = rng.string_default(16);
    assert_eq!(d.len(), 16);
    assert!(d.chars().all(|c| DEFAULT_CHARSET.contains(c)));

    assert_eq!(rng.string(3, ""), Err(RndError::EmptyCharset));
    assert_eq!(rng.string(0, ""), Ok(String::new()));
}

#[test]
fn add_respects_the_minimum_step() {
    let mut rng = Rng::from_seed_u64(17);
    assert_eq!(add(&mut rng, 100, 4, 4), Ok(104));
}

#[test]
fn ascending_never_decreases() {
    let mut next = ascending(Rng::from_seed_u64(11), 10, 1, 100).unwrap();
    let mut prev = 100;
    for _ in 0..200 {
        let value = next();
        assert!(value > prev && value - prev < 10);
        prev = value;
    }
}

#[test]
fn random_days_stay_within_the_window() {
    let mut rng = Rng::from_seed_u64(8);
    let week = Duration::from_secs(7 * 86_400);
    for _ in 0..100 {
        let d = fu_rnd::time::days(&mut rng, 7).unwrap();
        assert!(d >= Duration::from_secs(60) && d < week, "{d:?}");
    }
}

#[test]
fn random_dates_fall_between_the_bounds() {
    let mut rng = Rng::from_seed_u64(8);
    let min = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let max = min + Duration::from_secs(30 * 86_400);
    for _ in 0..100 {
        let date = fu_rnd::time::date(&mut rng, min, max).unwrap();
        assert!(date >= min && date < max);
    }
}

#[test]
fn time_add_respects_both_step_bounds() {
    let mut rng = Rng::from_seed_u64(8);
    let start = SystemTime::now();
    let (at_least, at_most) = (Duration::from_secs(600), Duration::from_secs(3_600));
    for _ in 0..100 {
        let later = fu_rnd::time::add(&mut rng, start, at_most, at_least).unwrap();
        let step = later.duration_since(start).unwrap();
        assert!(step >= at_least && step < at_most, "{step:?}");
    }
    assert_eq!(
        fu_rnd::time::add(&mut rng, start, at_least, at_most),
        Err(RndError::InvertedSpan)
    );
}

#[test]
fn ascending_instants_never_go_back() {
    let start = UNIX_EPOCH + Duration::from_secs(1_000_000);
    let max_step = Duration::from_secs(3_600);
    let mut next = fu_rnd::time::ascending(Rng::from_seed_u64(21), max_step, start);
    let mut prev = start;
    for _ in 0..200 {
        let value = next();
        let step = value.duration_since(prev).unwrap();
        assert!(step < max_step);
        prev = value;
    }
    assert!(prev > start);
}

#[test]
fn normal_samples_have_the_requested_moments() {
    let mut rng = Rng::from_seed_u64(2024);
    let n = 20_000;
    for transform in [box_muller as fn(f64, f64) -> f64, marsaglia_polar] {
        let samples: Vec<f64> = (0..n)
            .map(|_| distributed::next(&mut rng, 5.0, 2.0, transform))
            .collect();
        let mean = samples.iter().sum::<f64>() / f64::from(n);
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / f64::from(n);
        assert!((mean - 5.0).abs() < 0.1, "mean {mean}");
        assert!((var.sqrt() - 2.0).abs() < 0.1, "std dev {}", var.sqrt());
    }
}

#[test]
fn random_directions_are_unit_length() {
    let mut rng = Rng::from_seed_u64(8);
    for _ in 0..256 {
        let v: Vec2<f64> = unit_vec2(&mut rng);
        let w: Vec3<f64> = unit_vec3(&mut rng);
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!((w.length() - 1.0).abs() < 1e-12);
    }
    let f: Vec3<f32> = unit_vec3(&mut rng);
    assert!((f.length() - 1.0).abs() < 1e-5);
}

#[test]
fn random_directions_cover_both_hemispheres() {
    let mut rng = Rng::from_seed_u64(77);
    let mean: Vec3<f64> = Vec3::average((0..4_000).map(|_| unit_vec3(&mut rng)));
    assert!(mean.length() < 0.05, "mean direction {mean}");
}

proptest! {
    #[test]
    fn int_stays_in_half_open_range(seed in any::<u64>(), min in -1_000_i64..1_000, width in 1_i64..1_000) {
        let mut rng = Rng::from_seed_u64(seed);
        let value = rng.int(min, min + width).unwrap();
        prop_assert!((min..min + width).contains(&value));
    }

    #[test]
    fn unit_floats_stay_below_one(seed in any::<u64>()) {
        let mut rng = Rng::from_seed_u64(seed);
        for _ in 0..16 {
            let d = rng.next_f64();
            let f = rng.next_f32();
            prop_assert!((0.0..1.0).contains(&d));
            prop_assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn doubles_respect_bounds(seed in any::<u64>(), lo in -100.0_f64..0.0, hi in 0.5_f64..100.0) {
        let mut rng = Rng::from_seed_u64(seed);
        let x = rng.double(lo, hi);
        prop_assert!(x >= lo && x <= hi);
        let y = rng.float(-1.0, 1.0);
        prop_assert!((-1.0..=1.0).contains(&y));
    }
}
