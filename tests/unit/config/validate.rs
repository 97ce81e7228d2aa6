use super::*;
use crate::config::model::{GlyphGridConfig, TextAnimationConfig};

#[test]
fn default_compositions_validate() {
    Composition::text_animation(TextAnimationConfig::default())
        .validate()
        .unwrap();
    Composition::glyph_grid(GlyphGridConfig::default())
        .validate()
        .unwrap();
}

#[test]
fn every_violation_is_reported_with_its_path() {
    let mut t = TextAnimationConfig::default();
    t.animation.entry_duration = 5.0;
    t.effects.swing.damping = 99.0;
    t.effects.grid.columns = 0;
    let comp = Composition::text_animation(t);

    let errs = validate_composition(&comp).unwrap_err();
    let text = errs.to_string();
    assert_eq!(errs.errors.len(), 3, "{text}");
    assert!(text.contains("$.scene.params.animation.entry_duration: must be in [10, 90]"));
    assert!(text.contains("$.scene.params.effects.swing.damping"));
    assert!(text.contains("$.scene.params.effects.grid.columns"));
}

#[test]
fn text_length_counts_utf16_units() {
    let mut t = TextAnimationConfig::default();
    t.text.body = "😀".repeat(16);
    assert!(Composition::text_animation(t.clone()).validate().is_ok());
    t.text.body = "😀".repeat(17);
    let err = Composition::text_animation(t).validate().unwrap_err();
    assert!(err.to_string().contains("text.body"));
}

#[test]
fn empty_content_is_rejected() {
    let mut t = TextAnimationConfig::default();
    t.text.body.clear();
    t.effects.grid.words = vec!["a".to_string(), String::new()];
    let errs = validate_composition(&Composition::text_animation(t)).unwrap_err();
    let text = errs.to_string();
    assert!(text.contains("$.scene.params.text.body"));
    assert!(text.contains("$.scene.params.effects.grid.words[1]: word must be non-empty"));

    let g = GlyphGridConfig {
        text: String::new(),
        ..GlyphGridConfig::default()
    };
    assert!(Composition::glyph_grid(g).validate().is_err());
}

#[test]
fn non_finite_values_are_rejected() {
    let mut t = TextAnimationConfig::default();
    t.appearance.font_size = f64::NAN;
    let err = Composition::text_animation(t).validate().unwrap_err();
    assert!(matches!(err, KinetypeError::Validation(_)));
    assert!(err.to_string().contains("finite"));
}

#[test]
fn timeline_fields_are_checked() {
    let mut comp = Composition::glyph_grid(GlyphGridConfig::default());
    comp.fps.num = 0;
    comp.canvas.height = 0;
    comp.duration = crate::foundation::core::FrameIndex(0);
    let errs = validate_composition(&comp).unwrap_err();
    assert_eq!(errs.errors.len(), 3);
    assert!(errs.to_string().contains("$.fps.num"));
}
