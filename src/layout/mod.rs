//! Once-per-configuration placement of animated units.
//!
//! Every function here is a pure function of its inputs: the same text and grid parameters
//! always produce the same ordered units, which the per-frame resolver then reads but never
//! mutates.

pub(crate) mod glyphs;
pub(crate) mod noise;
pub(crate) mod row;
pub(crate) mod script;
pub(crate) mod tiles;

use crate::foundation::core::Vec2;
use script::ScriptClass;

/// One animated element: a single character or a whole word.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayoutUnit {
    /// Character or word shown once the unit has settled.
    pub content: String,
    /// Dense, stable position in the unit list.
    pub index: usize,
    /// Position of the content in the decomposed input; seeds per-unit randomness.
    pub source_index: usize,
    /// Anchor in scene space (cell origin, or glyph centre for glyph columns).
    pub position: Vec2,
    /// Cell extent.
    pub size: Vec2,
    /// Static in-plane rotation.
    pub rotation_deg: f64,
    /// Static scale factor.
    pub scale: f64,
    pub class: ScriptClass,
    pub accent: TileAccent,
    /// Static vertical placement jitter in pixels.
    pub jitter: f64,
}

impl LayoutUnit {
    pub(crate) fn new(content: String, index: usize, source_index: usize) -> Self {
        let class = ScriptClass::of_str(&content);
        Self {
            content,
            index,
            source_index,
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            rotation_deg: 0.0,
            scale: 1.0,
            class,
            accent: TileAccent::None,
            jitter: 0.0,
        }
    }

    /// Word-separating space in a text row.
    pub fn is_space(&self) -> bool {
        self.content == " "
    }

    /// Centre of the unit's cell.
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }
}

/// Static emphasis of a word tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileAccent {
    #[default]
    None,
    Zoom,
    Rotate,
}
