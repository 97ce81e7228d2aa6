//! Hash-like spatial noise used for layout jitter and per-unit variation.
//!
//! Not a general-purpose RNG: each value is a pure function of its seed, so any unit can be
//! re-derived at any frame without consuming a stream.

/// Maps a seed to a reproducible value in `[0, 1)`.
///
/// `fract(sin(seed * 12.9898) * 43758.5453)`, evaluated in `f64`.
pub fn seeded_random(seed: f64) -> f64 {
    let x = (seed * 12.9898).sin() * 43758.5453;
    let v = x - x.floor();
    // A tiny negative `x` rounds up to exactly 1.0.
    if v >= 1.0 { 0.0 } else { v }
}

/// What a random draw is used for.
///
/// Each purpose owns a fixed offset that is added to the unit index. Offsets are shared with
/// previously rendered material, so they must never change; purposes used together inside
/// one composition always carry distinct offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedPurpose {
    /// Scale of an ideographic glyph in the glyph grid.
    IdeographScale,
    /// Scale of a hiragana glyph in the glyph grid.
    KanaScale,
    /// Scale of any other glyph in the glyph grid.
    GlyphScale,
    /// In-plane tilt of a glyph in the glyph grid.
    GlyphRotation,
    /// Vertical placement jitter of a swinging character.
    SwingJitter,
    NoiseX,
    NoiseY,
    NoiseWidth,
    NoiseHeight,
    NoiseRotation,
    NoiseOpacity,
}

impl SeedPurpose {
    pub const fn offset(self) -> u64 {
        match self {
            Self::IdeographScale | Self::SwingJitter => 1,
            Self::KanaScale => 13,
            Self::GlyphScale => 23,
            Self::GlyphRotation => 37,
            Self::NoiseX => 101,
            Self::NoiseY => 202,
            Self::NoiseWidth => 303,
            Self::NoiseHeight => 404,
            Self::NoiseRotation => 505,
            Self::NoiseOpacity => 606,
        }
    }
}

/// Seed for the draw `purpose` of the unit at `unit_index`.
pub fn derive_seed(unit_index: usize, purpose: SeedPurpose) -> f64 {
    (unit_index as u64).saturating_add(purpose.offset()) as f64
}

/// Shorthand for `seeded_random(derive_seed(unit_index, purpose))`.
pub fn unit_random(unit_index: usize, purpose: SeedPurpose) -> f64 {
    seeded_random(derive_seed(unit_index, purpose))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/random.rs"]
mod tests;
