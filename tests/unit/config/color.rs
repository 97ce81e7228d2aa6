use super::*;

#[test]
fn parses_short_long_and_alpha_forms() {
    assert_eq!(parse_hex("#fff").unwrap(), Rgba8::WHITE);
    assert_eq!(parse_hex("#C48F00").unwrap(), Rgba8::rgb(0xc4, 0x8f, 0x00));
    assert_eq!(
        parse_hex("#ffffff40").unwrap(),
        Rgba8 {
            r: 255,
            g: 255,
            b: 255,
            a: 0x40
        }
    );
}

#[test]
fn rejects_malformed_colors() {
    assert!(parse_hex("fff").is_err());
    assert!(parse_hex("#ffff").is_err());
    assert!(parse_hex("#gg0000").is_err());
    assert!(parse_hex("#ｆｆｆ").is_err());
}

#[test]
fn wrong_length_names_the_accepted_forms() {
    let err = parse_hex("#12345").unwrap_err();
    assert_eq!(err, "color '#12345' must be #RGB, #RRGGBB or #RRGGBBAA");
}

#[test]
fn serializes_as_hex_string() {
    let v = serde_json::to_value(Rgba8::rgb(0x05, 0x05, 0x05)).unwrap();
    assert_eq!(v, serde_json::json!("#050505"));
    let back: Rgba8 = serde_json::from_value(serde_json::json!("#12121280")).unwrap();
    assert_eq!(to_hex(back), "#12121280");
}
