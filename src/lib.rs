//! kinetype is a deterministic frame-state engine for procedurally animated typography.
//!
//! Given a configuration and a frame index it computes, for every character or word, where
//! it is, how it is rotated, scaled, blurred and faded, and what it currently reads as. It
//! also computes where a virtual camera is looking. Nothing is rasterized here: the output of
//! every frame is a declarative [`Scene`] that a renderer can draw.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: build or deserialize a [`Composition`] and [`validate`](Composition::validate) it.
//! 2. **Prepare**: [`PreparedComposition::prepare`] lays the units out once.
//! 3. **Evaluate**: [`Evaluator::eval_frame`] turns `prepared + frame` into a [`Scene`].
//! 4. **Batch** (optional): [`eval_frames`] evaluates a frame range, optionally on a rayon pool.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Stateless frames**: every frame is recomputed from scratch; evaluating frames out of
//!   order, in parallel, or repeatedly yields identical results.
//! - **No ambient randomness**: all variation comes from [`seeded_random`] over fixed seeds.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod eval;
mod foundation;
mod layout;
mod pipeline;
mod scene;

pub use animation::random::{SeedPurpose, derive_seed, seeded_random, unit_random};
pub use animation::spring::{
    REST_THRESHOLD, Spring, SpringConfig, SpringState, measure_spring, spring, spring_state,
};
pub use config::model::{
    AnimationSettings, Appearance, BlurInEffect, CameraSmoothing, Composition, DecodeEffect,
    EffectSettings, FlipEffect, FontPreset, GlyphGridConfig, GridEffect, SceneConfig,
    SwingEffect, TextAnimationConfig, TextSettings,
};
pub use eval::camera::{AngleRule, CameraAnchor, CameraState, CameraTracker, ZoomRule};
pub use eval::effects::{
    BlurIn, EntryMode, SCRAMBLE_CHARSET, SwingParams, SwingState, UnitClock, blur_in,
    drop_offset, entry_progress, flip_spring, flip_tilt, scramble, shake_offset, swing,
    tether_length,
};
pub use eval::evaluator::{Evaluator, PreparedComposition, PreparedScene};
pub use eval::grid::{GlyphGridScene, WordGridScene};
pub use eval::text::TextRowScene;
pub use foundation::core::{
    Affine, Canvas, Fps, FrameCtx, FrameIndex, FrameRange, Point, Rect, Rgba8, Vec2,
};
pub use foundation::error::{KinetypeError, KinetypeResult};
pub use layout::glyphs::layout_glyph_columns;
pub use layout::noise::{NOISE_BAR_COUNT, NoiseBar, noise_bars};
pub use layout::row::{CELL_HEIGHT_EM, RowMetrics, TextRow, layout_text_row};
pub use layout::script::ScriptClass;
pub use layout::tiles::layout_word_tiles;
pub use layout::{LayoutUnit, TileAccent};
pub use pipeline::{EvalStats, Threading, eval_frames, eval_frames_with_stats, fingerprint_frames};
pub use scene::fingerprint::{SceneFingerprint, fingerprint_scene};
pub use scene::model::{
    BarNode, Fill, GlyphNode, Scene, SceneNode, Shadow, SpacerNode, TetherNode, TextStyle,
    TileNode, VisualDescriptor,
};
