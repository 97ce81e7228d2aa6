use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn critical() -> SpringConfig {
    // zeta = 20 / (2 * sqrt(100 * 1)) = 1
    SpringConfig::new(20.0, 100.0, 1.0)
}

#[test]
fn sampling_is_pure() {
    let s = Spring::new(SpringConfig::new(5.0, 20.0, 1.0))
        .with_duration(10.0)
        .with_delay(3.0);
    for f in 0..40u32 {
        let a = s.sample(f64::from(f), fps30());
        let b = s.sample(f64::from(f), fps30());
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn frames_before_release_hold_start_value() {
    let s = Spring::new(critical())
        .with_range(-50.0, 50.0)
        .with_delay(12.0);
    assert_eq!(s.sample(0.0, fps30()), -50.0);
    assert_eq!(s.sample(12.0, fps30()), -50.0);
    assert!(s.sample(13.0, fps30()) > -50.0);
}

#[test]
fn negative_frames_clamp_to_rest() {
    let a = spring_state(-4.0, fps30(), &critical());
    let b = spring_state(0.0, fps30(), &critical());
    assert_eq!(a, b);
    assert_eq!(a.position, 0.0);
}

#[test]
fn critically_damped_response_is_monotonic_and_bounded() {
    let mut prev = 0.0;
    for f in 0..120u32 {
        let v = spring_state(f64::from(f), fps30(), &critical()).position;
        assert!(v >= prev - 1e-12, "frame {f}: {v} < {prev}");
        assert!(v <= 1.0 + 1e-12);
        prev = v;
    }
    assert!(prev > 0.999);
}

#[test]
fn fractional_frames_interpolate_between_whole_frames() {
    let lo = spring_state(10.0, fps30(), &critical()).position;
    let mid = spring_state(10.5, fps30(), &critical()).position;
    let hi = spring_state(11.0, fps30(), &critical()).position;
    assert!(lo < mid && mid < hi);
}

#[test]
fn underdamped_spring_overshoots_unless_clamped() {
    let loose = SpringConfig::new(5.0, 20.0, 1.0);
    assert!(loose.damping_ratio() < 1.0);
    let peak = (0..200u32)
        .map(|f| spring(f64::from(f), fps30(), loose, 1.0, None, 0.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);

    let clamped = SpringConfig {
        overshoot_clamping: true,
        ..loose
    };
    for f in 0..200u32 {
        assert!(spring(f64::from(f), fps30(), clamped, 1.0, None, 0.0) <= 1.0);
    }
}

#[test]
fn measured_duration_is_positive_and_finite() {
    let n = measure_spring(fps30(), &SpringConfig::default(), REST_THRESHOLD);
    assert!(n >= 1.0);
    assert!(n < 10_000.0);
    let stiff = measure_spring(fps30(), &SpringConfig::new(20.0, 400.0, 1.0), REST_THRESHOLD);
    assert!(stiff < n);
}

#[test]
fn fixed_duration_pins_the_target_afterwards() {
    let s = Spring::new(SpringConfig::new(5.0, 20.0, 1.0))
        .with_range(0.0, 300.0)
        .with_duration(10.0)
        .with_delay(6.0);
    assert_eq!(s.sample(17.0, fps30()), 300.0);
    assert_eq!(s.sample(10_000.0, fps30()), 300.0);
    let mid = s.sample(11.0, fps30());
    assert!(mid > 0.0 && mid.is_finite());
}

#[test]
fn zero_duration_is_an_instant_step() {
    let s = Spring::new(critical()).with_duration(0.0).with_delay(5.0);
    assert_eq!(s.sample(4.0, fps30()), 0.0);
    assert_eq!(s.sample(6.0, fps30()), 1.0);
}

#[test]
fn degenerate_coefficients_stay_finite() {
    let broken = SpringConfig::new(0.0, 0.0, 0.0);
    for f in [0.0, 1.0, 30.0, 400.0] {
        assert!(spring(f, fps30(), broken, 1.0, Some(10.0), 0.0).is_finite());
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-12, "{actual} != {expected}");
}

#[test]
fn measured_settling_frames_match_reference() {
    assert_eq!(
        measure_spring(fps30(), &SpringConfig::new(5.0, 20.0, 1.0), REST_THRESHOLD),
        62.0
    );
    assert_eq!(
        measure_spring(fps30(), &SpringConfig::new(7.0, 32.0, 1.2), REST_THRESHOLD),
        54.0
    );
}

#[test]
fn normalized_spring_matches_reference_values() {
    let cfg = SpringConfig::new(5.0, 20.0, 1.0);
    let at = |f: f64| spring(f, fps30(), cfg, 1.0, Some(10.0), 0.0);
    assert_close(at(1.0), 0.2913434550693501);
    assert_close(at(3.0), 1.0344589702507812);
    assert_close(at(5.0), 1.0906554009707068);
}

#[test]
fn natural_spring_matches_reference_value() {
    let cfg = SpringConfig::new(16.0, 210.0, 0.8);
    assert_close(spring(2.0, fps30(), cfg, 1.0, None, 0.0), 0.358549932556667);
}

#[test]
fn far_frames_land_exactly_on_target() {
    let cfg = SpringConfig::new(16.0, 210.0, 0.8);
    assert_eq!(spring_state(5_000.0, fps30(), &cfg).position, 1.0);
    let late = spring_state(2_000_000.5, fps30(), &cfg);
    assert_eq!(late.position, 1.0);
    assert!(late.velocity.abs() < f64::MIN_POSITIVE);
    assert_eq!(spring(3_000_000.0, fps30(), cfg, 460.0, None, 0.0), 460.0);
}
