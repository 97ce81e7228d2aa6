use super::*;
use crate::config::model::{Composition, GlyphGridConfig, TextAnimationConfig};

fn prepared_text() -> PreparedComposition {
    let mut cfg = TextAnimationConfig::default();
    cfg.text.body = "Coffee Time".to_string();
    PreparedComposition::prepare(&Composition::text_animation(cfg)).unwrap()
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn parallel_matches_sequential() {
    let prepared = prepared_text();
    let seq = eval_frames(&prepared, range(0, 40), &Threading::default()).unwrap();
    let par = eval_frames(
        &prepared,
        range(0, 40),
        &Threading {
            parallel: true,
            chunk_size: 7,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq.len(), 40);
    assert_eq!(seq, par);
    for (i, s) in par.iter().enumerate() {
        assert_eq!(s.frame, FrameIndex(i as u64));
    }
}

#[test]
fn fingerprints_match_across_threading() {
    let prepared =
        PreparedComposition::prepare(&Composition::glyph_grid(GlyphGridConfig::default()))
            .unwrap();
    let a = fingerprint_frames(&prepared, range(10, 30), &Threading::default()).unwrap();
    let b = fingerprint_frames(
        &prepared,
        range(10, 30),
        &Threading {
            parallel: true,
            ..Threading::default()
        },
    )
    .unwrap();
    assert_eq!(a, b);
}

#[test]
fn settled_frames_count_as_static() {
    let mut cfg = TextAnimationConfig::default();
    cfg.text.body = "Coffee Time".to_string();
    cfg.effects.swing.enabled = false;
    cfg.effects.flip.enabled = false;
    let prepared = PreparedComposition::prepare(&Composition::text_animation(cfg)).unwrap();

    let (_, stats) =
        eval_frames_with_stats(&prepared, range(170, 180), &Threading::default()).unwrap();
    assert_eq!(stats.frames_total, 10);
    assert_eq!(stats.frames_static, 9);

    let (_, early) =
        eval_frames_with_stats(&prepared, range(0, 10), &Threading::default()).unwrap();
    assert_eq!(early.frames_static, 0);
}

#[test]
fn bad_ranges_are_rejected() {
    let prepared = prepared_text();
    let empty = eval_frames(&prepared, range(5, 5), &Threading::default()).unwrap_err();
    assert!(matches!(empty, KinetypeError::Validation(_)));

    let past = eval_frames(&prepared, range(0, 181), &Threading::default()).unwrap_err();
    assert!(matches!(past, KinetypeError::Evaluation(_)));

    let zero_threads = Threading {
        parallel: true,
        chunk_size: 8,
        threads: Some(0),
    };
    let err = eval_frames(&prepared, range(0, 4), &zero_threads).unwrap_err();
    assert!(matches!(err, KinetypeError::Validation(_)));
}
