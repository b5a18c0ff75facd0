use super::prelude::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::PI;

fn vec_in(range: std::ops::Range<f64>) -> impl Strategy<Value = Vec2d> {
    (range.clone(), range).prop_map(|(x, y)| Vec2d::new(x, y))
}

proptest! {
    #[test]
    fn degree_views_round_trip(d in -1.0e4f64..1.0e4) {
        let a = Angle::from_degrees(d);
        prop_assert!((a.degrees() - d).abs() < ACCURACY);
        prop_assert!((a.radians() - d * PI / 180.0).abs() < ACCURACY);
        prop_assert!((a.percent() - d / 360.0 * 100.0).abs() < ACCURACY);
    }

    #[test]
    fn radian_and_percent_views_round_trip(r in -100.0f64..100.0, p in -1.0e3f64..1.0e3) {
        prop_assert!((Angle::from_radians(r).radians() - r).abs() < ACCURACY);
        prop_assert!((Angle::from_percent(p).percent() - p).abs() < ACCURACY);
    }

    #[test]
    fn order_follows_raw_degrees(a in -1.0e3f64..1.0e3, b in -1.0e3f64..1.0e3) {
        let (x, y) = (Angle::from_degrees(a), Angle::from_degrees(b));
        prop_assert_eq!(x < y, a.to_radians() < b.to_radians());
        prop_assert_eq!(x == y, a.to_radians() == b.to_radians());
    }

    #[test]
    fn squared_length_matches_length(v in vec_in(-1.0e3..1.0e3)) {
        let l = v.length();
        prop_assert!(l >= 0.0);
        let tol = ACCURACY * (1.0 + v.length_squared());
        prop_assert!((v.length_squared() - l * l).abs() < tol);
    }

    #[test]
    fn addition_commutes_with_zero_identity(a in vec_in(-1.0e3..1.0e3), b in vec_in(-1.0e3..1.0e3)) {
        prop_assert!((a + b).approx_eq(&(b + a), ACCURACY));
        prop_assert!((Vec2d::ZERO + b).approx_eq(&b, ACCURACY));
        prop_assert!((a - Vec2d::ZERO).approx_eq(&a, ACCURACY));
    }

    #[test]
    fn negation_cancels(v in vec_in(-1.0e3..1.0e3)) {
        prop_assert!((v + (-v)).approx_eq(&Vec2d::ZERO, ACCURACY));
        prop_assert!((-(-v)).approx_eq(&v, ACCURACY));
    }

    #[test]
    fn polar_preserves_length(r in 0.0f64..1.0e3, d in -720.0f64..720.0) {
        let v = Vec2d::from_polar(r, Angle::from_degrees(d));
        prop_assert!((v.length() - r).abs() < ACCURACY);
    }
}

#[test]
fn percent_and_radian_anchors() {
    assert!((Angle::from_radians(PI).degrees() - 180.0).abs() < ACCURACY);
    assert!((Angle::from_percent(75.0).radians() - 3.0 * PI / 2.0).abs() < ACCURACY);
}

#[test]
fn polar_round_trip_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..256 {
        let v = Vec2d::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
        let back = Vec2d::from_polar(v.length(), v.angle());
        assert!(back.approx_eq(&v, ACCURACY), "v={v} back={back}");
    }
}

#[test]
fn subtraction_anchor_and_sum_randomized_seeded() {
    assert!((Vec2d::new(3.0, 7.0) - Vec2d::new(11.0, -6.0))
        .approx_eq(&Vec2d::new(-8.0, 13.0), ACCURACY));

    let mut rng = StdRng::seed_from_u64(7);
    let vs: Vec<Vec2d> = (0..32)
        .map(|_| Vec2d::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    let total: Vec2d = vs.iter().sum();
    let cancelled: Vec2d = vs.iter().map(|v| -v).sum::<Vec2d>() + total;
    assert!(cancelled.approx_eq(&Vec2d::ZERO, ACCURACY));
}

#[test]
fn tolerance_is_opt_in() {
    let tol = Tolerance::default();
    let a = Vec2d::from_polar(2.0, Angle::from_degrees(90.0));
    assert_ne!(a, Vec2d::new(0.0, 2.0));
    assert!(tol.vectors(a, Vec2d::new(0.0, 2.0)));
    assert!(tol.angles(Angle::from_degrees(360.0), Angle::FULL_TURN));
    assert!(!tol.angles(Angle::from_degrees(30.0), Angle::from_degrees(390.0)));
    assert_eq!(Vec2::new(1.0, 0.0), *Vec2d::new(1.0, 0.0).as_vector());
}
