use crate::{
    animation::random::{SeedPurpose, unit_random},
    foundation::core::{Canvas, Vec2},
};

pub const NOISE_BAR_COUNT: usize = 50;

/// One translucent streak of the glyph grid's background texture.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct NoiseBar {
    /// Top-left corner in scene space.
    pub position: Vec2,
    pub width: f64,
    pub height: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
}

/// Static noise bars spread over twice the larger canvas edge.
pub fn noise_bars(canvas: Canvas, tile_size: f64, gap: f64) -> Vec<NoiseBar> {
    let spread = 2.0 * canvas.width_f64().max(canvas.height_f64());
    let height_step = tile_size + gap;

    (0..NOISE_BAR_COUNT)
        .map(|i| NoiseBar {
            position: Vec2::new(
                (unit_random(i, SeedPurpose::NoiseX) - 0.5) * spread,
                unit_random(i, SeedPurpose::NoiseY) * spread * 0.8,
            ),
            width: 6.0 + unit_random(i, SeedPurpose::NoiseWidth) * 40.0,
            height: height_step * (0.5 + unit_random(i, SeedPurpose::NoiseHeight) * 3.0),
            rotation_deg: unit_random(i, SeedPurpose::NoiseRotation) * 180.0,
            opacity: 0.05 + unit_random(i, SeedPurpose::NoiseOpacity) * 0.25,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/noise.rs"]
mod tests;
