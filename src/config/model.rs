use crate::foundation::core::{Canvas, Fps, FrameIndex, Rgba8};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// A complete, serializable animation configuration.
///
/// A composition is plain data: load it from JSON, [`validate`](Composition::validate) it,
/// then hand it to [`crate::PreparedComposition::prepare`] once and evaluate frames from the
/// prepared form.
pub struct Composition {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output viewport dimensions.
    pub canvas: Canvas,
    /// Total duration in frames.
    pub duration: FrameIndex,
    /// What to animate and how.
    pub scene: SceneConfig,
}

impl Composition {
    /// The text animation preset: 180 frames at 30 fps, 1920x1080.
    pub fn text_animation(config: TextAnimationConfig) -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            canvas: FULL_HD,
            duration: FrameIndex(180),
            scene: SceneConfig::TextAnimation(config),
        }
    }

    /// The glyph grid preset: 690 frames at 30 fps, 1920x1080.
    pub fn glyph_grid(config: GlyphGridConfig) -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            canvas: FULL_HD,
            duration: FrameIndex(690),
            scene: SceneConfig::GlyphGrid(config),
        }
    }
}

const FULL_HD: Canvas = Canvas {
    width: 1920,
    height: 1080,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
/// Scene kind selector.
pub enum SceneConfig {
    /// A single row of characters with stacked entry effects (or the word grid when its
    /// effect is enabled).
    TextAnimation(TextAnimationConfig),
    /// Characters in vertical columns followed by a zooming, rotating camera.
    GlyphGrid(GlyphGridConfig),
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Parameters of the text animation scene.
pub struct TextAnimationConfig {
    /// Text content.
    pub text: TextSettings,
    /// Colours, font and size.
    pub appearance: Appearance,
    /// Timing and spring coefficients.
    pub animation: AnimationSettings,
    /// Per-effect toggles and magnitudes.
    pub effects: EffectSettings,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Text content of the text animation.
pub struct TextSettings {
    /// Characters to animate (1..=32 UTF-16 units).
    pub body: String,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            body: "Crypto Ninja Coffee Time".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Visual appearance of the text animation.
pub struct Appearance {
    /// Scene background colour.
    pub background: Rgba8,
    /// Glyph colour.
    pub color: Rgba8,
    /// Font size in pixels (24..=260).
    pub font_size: f64,
    /// Font family preset.
    pub font_preset: FontPreset,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background: Rgba8::rgb(0xc4, 0x8f, 0x00),
            color: Rgba8::WHITE,
            font_size: 110.0,
            font_preset: FontPreset::ModernGothic,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Named font family stacks.
pub enum FontPreset {
    /// Japanese gothic sans-serif.
    #[default]
    ModernGothic,
    /// Condensed display sans-serif.
    CinemaSans,
    /// Monospace.
    CyberMono,
    /// Serif / mincho.
    ClassicSerif,
}

impl FontPreset {
    /// CSS-style family stack for this preset.
    pub fn family_stack(self) -> &'static str {
        match self {
            Self::ModernGothic => {
                r#""Noto Sans JP", "Hiragino Kaku Gothic ProN", "Yu Gothic", sans-serif"#
            }
            Self::CinemaSans => r#""Oswald", "Arial Narrow", "Noto Sans JP", sans-serif"#,
            Self::CyberMono => r#""Roboto Mono", "IBM Plex Mono", "SFMono-Regular", monospace"#,
            Self::ClassicSerif => r#""Times New Roman", "Noto Serif JP", "Yu Mincho", serif"#,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Entry timing, shake and the entry spring.
pub struct AnimationSettings {
    /// Frames an entry spring is normalized to (10..=90).
    pub entry_duration: f64,
    /// Frames between consecutive character entries (1..=24).
    pub stagger_frames: f64,
    /// Horizontal shake amplitude in pixels (0..=40).
    pub shake_amplitude: f64,
    /// Shake frequency multiplier (0..=2).
    pub shake_speed: f64,
    /// Entry spring mass (0.1..=5).
    pub spring_mass: f64,
    /// Entry spring damping (5..=40).
    pub spring_damping: f64,
    /// Entry spring stiffness (20..=300).
    pub spring_stiffness: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            entry_duration: 10.0,
            stagger_frames: 3.0,
            shake_amplitude: 0.0,
            shake_speed: 2.0,
            spring_mass: 1.0,
            spring_damping: 5.0,
            spring_stiffness: 20.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// All optional effect layers.
pub struct EffectSettings {
    /// Scramble/decode.
    pub decode: DecodeEffect,
    /// Blur-in landing.
    pub blur_in: BlurInEffect,
    /// 3D flip up.
    pub flip: FlipEffect,
    /// Pendulum swing entry.
    pub swing: SwingEffect,
    /// Word grid scene (replaces the character row when enabled).
    pub grid: GridEffect,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Scramble/decode effect.
pub struct DecodeEffect {
    /// Toggle.
    pub enabled: bool,
    /// Frames of random characters before the true one (0..=30).
    pub frames: f64,
}

impl Default for DecodeEffect {
    fn default() -> Self {
        Self {
            enabled: true,
            frames: 12.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Blur-in effect.
pub struct BlurInEffect {
    /// Toggle.
    pub enabled: bool,
    /// Blur radius at the start of the entry, in pixels (0..=40).
    pub strength: f64,
    /// Scale at the start of the entry (1..=2).
    pub scale: f64,
}

impl Default for BlurInEffect {
    fn default() -> Self {
        Self {
            enabled: true,
            strength: 20.0,
            scale: 1.4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// 3D flip effect.
pub struct FlipEffect {
    /// Toggle.
    pub enabled: bool,
    /// Extra frames after the entry delay before the flip starts (0..=20).
    pub delay: f64,
}

impl Default for FlipEffect {
    fn default() -> Self {
        Self {
            enabled: true,
            delay: 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Pendulum swing entry.
pub struct SwingEffect {
    /// Toggle.
    pub enabled: bool,
    /// Fall height in pixels (50..=400).
    pub initial_height: f64,
    /// Horizontal sway amplitude in pixels (0..=20).
    pub sway_x: f64,
    /// Vertical sway amplitude in pixels (0..=40).
    pub sway_y: f64,
    /// Sway decay constant in frames; larger is slower (5..=60).
    pub sway_decay: f64,
    /// Fall spring mass (0.5..=3).
    pub mass: f64,
    /// Fall spring damping (4..=15).
    pub damping: f64,
    /// Fall spring stiffness (15..=60).
    pub stiffness: f64,
    /// Random vertical placement range in pixels (0..=200).
    pub jitter: f64,
}

impl Default for SwingEffect {
    fn default() -> Self {
        Self {
            enabled: true,
            initial_height: 220.0,
            sway_x: 5.0,
            sway_y: 18.0,
            sway_decay: 22.0,
            mass: 1.2,
            damping: 7.0,
            stiffness: 32.0,
            jitter: 60.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Word grid scene parameters.
pub struct GridEffect {
    /// Toggle.
    pub enabled: bool,
    /// Words, one tile each.
    pub words: Vec<String>,
    /// Tiles per row (1..=8).
    pub columns: u32,
    /// Tile edge in pixels (60..=240).
    pub tile_size: f64,
    /// Space between tiles in pixels (0..=200).
    pub gap: f64,
    /// Frames the camera stays on each word (5..=180).
    pub hold_frames: f64,
    /// Zoom/rotate accent strength (0..=0.5).
    pub variation_intensity: f64,
    /// How the camera moves between words.
    pub camera_smoothing: CameraSmoothing,
}

impl Default for GridEffect {
    fn default() -> Self {
        Self {
            enabled: false,
            words: ["風", "に", "さら", "わ", "れ", "夜", "を", "裂く"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            columns: 3,
            tile_size: 150.0,
            gap: 60.0,
            hold_frames: 24.0,
            variation_intensity: 0.18,
            camera_smoothing: CameraSmoothing::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Parameters of the glyph grid scene.
pub struct GlyphGridConfig {
    /// Characters to lay out; `\n` starts a new column.
    pub text: String,
    /// Colour of the glyph the camera is on.
    pub active_color: Rgba8,
    /// Colour of every other glyph.
    pub text_color: Rgba8,
    /// Glyphs per column before wrapping (1..=40).
    pub columns: u32,
    /// Glyph size in pixels (20..=260).
    pub tile_size: f64,
    /// Space between glyph cells in pixels (0..=120).
    pub gap: f64,
    /// Frames the camera stays on each glyph (1..=600).
    pub hold_frames: f64,
    /// How the camera moves between glyphs.
    pub camera_smoothing: CameraSmoothing,
}

impl Default for GlyphGridConfig {
    fn default() -> Self {
        Self {
            text: "Crypto Ninja Coffee Time".to_string(),
            active_color: Rgba8::rgb(0xff, 0xc8, 0x57),
            text_color: Rgba8::WHITE,
            columns: 3,
            tile_size: 200.0,
            gap: 30.0,
            hold_frames: 20.0,
            camera_smoothing: CameraSmoothing::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Camera motion between targets.
pub enum CameraSmoothing {
    /// One spring from the origin evaluated at the absolute frame; later targets are
    /// reached without easing once the first spring has settled.
    #[default]
    Settle,
    /// Each hold segment springs from the previous target to the current one, released at
    /// the segment's first frame.
    Segment,
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
