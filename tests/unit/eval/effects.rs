use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn entry_spring() -> SpringConfig {
    SpringConfig::new(5.0, 20.0, 1.0)
}

#[test]
fn scramble_is_blank_then_random_then_true() {
    assert_eq!(scramble("A", 2.0, 3.0, 12.0), " ");

    for f in 3..15 {
        let shown = scramble("A", f64::from(f), 3.0, 12.0);
        assert_eq!(shown.chars().count(), 1);
        assert!(SCRAMBLE_CHARSET.contains(&shown), "frame {f}: {shown:?}");
    }

    assert_eq!(scramble("A", 15.0, 3.0, 12.0), "A");
    assert_eq!(scramble("A", 100.0, 3.0, 12.0), "A");
}

#[test]
fn scramble_follows_the_seed_formula() {
    let (frame, start) = (7.0, 3.0);
    let seed = ((frame - start + 1.0) * 17.23 + start * 131.0 + f64::from(b'Q')).sin() * 10000.0;
    let idx = (seed.floor().abs() as usize) % SCRAMBLE_CHARSET.len();
    let expected = &SCRAMBLE_CHARSET[idx..idx + 1];
    assert_eq!(scramble("Q", frame, start, 12.0), expected);
}

#[test]
fn scramble_disabled_always_shows_content() {
    assert_eq!(scramble("夜", 0.0, 30.0, 0.0), "夜");
    assert_eq!(scramble("夜", 50.0, 30.0, 0.0), "夜");
}

#[test]
fn shake_is_bounded_and_zero_without_amplitude() {
    assert_eq!(shake_offset(10.0, 3, 0.0, 2.0), 0.0);
    assert_eq!(shake_offset(0.0, 0, 12.0, 2.0), 0.0);
    for f in 0..60 {
        assert!(shake_offset(f64::from(f), 2, 12.0, 1.5).abs() <= 12.0);
    }
}

#[test]
fn blur_in_runs_from_blurred_to_identity() {
    let start = blur_in(0.0, 20.0, 1.4);
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.blur_px, 20.0);
    assert!((start.scale - 1.4).abs() < 1e-12);

    let end = blur_in(1.0, 20.0, 1.4);
    assert_eq!(end.opacity, 1.0);
    assert_eq!(end.blur_px, 0.0);
    assert!((end.scale - 1.0).abs() < 1e-12);

    assert_eq!(blur_in(0.3, 0.0, 1.4), BlurIn::IDENTITY);
    assert_eq!(blur_in(1.2, 20.0, 1.4).blur_px, 0.0);
}

#[test]
fn entry_progress_is_delayed_and_pinned_after_duration() {
    let clock = UnitClock::new(6.0, fps30(), 2, 3.0);
    assert_eq!(clock.entry_delay, 6.0);
    assert_eq!(entry_progress(&clock, entry_spring(), 10.0), 0.0);

    let later = UnitClock::new(17.0, fps30(), 2, 3.0);
    assert_eq!(entry_progress(&later, entry_spring(), 10.0), 1.0);

    assert_eq!(drop_offset(0.0, 700.0), -700.0);
    assert_eq!(drop_offset(1.0, 700.0), 0.0);
}

#[test]
fn flip_starts_upright_at_ninety_degrees() {
    let before = UnitClock::new(3.0, fps30(), 1, 3.0);
    assert_eq!(flip_tilt(&before, entry_spring(), 10.0, 2.0), 90.0);

    let after = UnitClock::new(40.0, fps30(), 1, 3.0);
    assert_eq!(flip_tilt(&after, entry_spring(), 10.0, 2.0), 0.0);

    let s = flip_spring(entry_spring());
    assert_eq!((s.damping, s.stiffness, s.mass), (10.0, 60.0, 1.0));
}

#[test]
fn swing_duration_heuristic() {
    assert_eq!(SwingParams::duration_for(10.0, 22.0), 20.0);
    assert_eq!(SwingParams::duration_for(10.0, 60.0), 30.0);
    assert_eq!(SwingParams::duration_for(12.0, 45.0), 24.0);
}

fn swing_params() -> SwingParams {
    SwingParams {
        spring: SpringConfig::new(7.0, 32.0, 1.2),
        duration: 20.0,
        distance: 650.0,
        sway_x: 5.0,
        sway_y: 18.0,
        sway_decay: 22.0,
    }
}

#[test]
fn swing_hangs_above_before_release() {
    let clock = UnitClock::new(0.0, fps30(), 2, 3.0);
    let s = swing(&clock, &swing_params(), 10.0);
    assert_eq!(s.progress, 0.0);
    assert!((s.opacity_factor - 0.3).abs() < 1e-12);
    assert!(s.offset.y <= -650.0 + 18.0);
    assert_eq!(tether_length(650.0, -700.0, 10.0), 0.0);
}

#[test]
fn swing_settles_at_rest_with_decayed_sway() {
    let clock = UnitClock::new(170.0, fps30(), 1, 3.0);
    let s = swing(&clock, &swing_params(), 10.0);
    assert_eq!(s.progress, 1.0);
    assert_eq!(s.opacity_factor, 1.0);
    assert!(s.offset.y.abs() < 0.05, "offset.y = {}", s.offset.y);
    assert!(s.offset.x.abs() < 0.05, "offset.x = {}", s.offset.x);
    let len = tether_length(650.0, s.offset.y, -20.0);
    assert!((len - 630.0).abs() < 0.05);
}
