use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"kinetype");
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_bytes(b"kine");
    b.write_bytes(b"type");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn lerp_extrapolates_past_unit_interval() {
    assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
    assert_eq!(lerp(10.0, 20.0, 1.5), 25.0);
    assert_eq!(lerp(0.0, 4.0, -0.25), -1.0);
}

#[test]
fn round_half_up_matches_js_round() {
    assert_eq!(round_half_up(2.5), 3.0);
    assert_eq!(round_half_up(-2.5), -2.0);
    assert_eq!(round_half_up(8.8), 9.0);
    assert_eq!(clamp01(1.3), 1.0);
    assert_eq!(clamp01(-0.1), 0.0);
}
