use crate::{
    animation::random::{SeedPurpose, unit_random},
    foundation::{core::Vec2, math::round_half_up},
    layout::{LayoutUnit, script::is_wide},
};

/// Glyph cell height as a multiple of the font size.
pub const CELL_HEIGHT_EM: f64 = 1.25;

/// A single horizontal line of characters, left edge at `x = 0`, top edge at `y = 0`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextRow {
    pub units: Vec<LayoutUnit>,
    pub width: f64,
    pub height: f64,
}

impl TextRow {
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Horizontal metrics of a text row for one font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowMetrics {
    pub font_size: f64,
    /// Space between neighbouring cells.
    pub gap: f64,
    pub letter_spacing: f64,
    pub space_width: f64,
}

impl RowMetrics {
    pub fn for_font_size(font_size: f64) -> Self {
        Self {
            font_size,
            gap: round_half_up(font_size * 0.08),
            letter_spacing: round_half_up(font_size * 0.025),
            space_width: (font_size * 0.2).max(10.0),
        }
    }

    /// Nominal advance of `c`; the rasterizer does the real shaping.
    pub fn advance(&self, c: char) -> f64 {
        if c == ' ' {
            return self.space_width;
        }
        let em = if is_wide(c) { 1.0 } else { 0.6 };
        self.font_size * em + self.letter_spacing
    }
}

/// Lays `text` out as one row of cells, one per Unicode scalar value.
///
/// Spaces become spacer cells. `swing_jitter` is the maximum vertical placement jitter;
/// each unit receives `(r - 0.5) * 2 * swing_jitter` seeded by its index.
pub fn layout_text_row(text: &str, font_size: f64, swing_jitter: f64) -> TextRow {
    let metrics = RowMetrics::for_font_size(font_size);
    let height = font_size * CELL_HEIGHT_EM;
    let mut units = Vec::new();
    let mut x = 0.0;

    for (index, ch) in text.chars().enumerate() {
        if index > 0 {
            x += metrics.gap;
        }
        let width = metrics.advance(ch);
        let mut unit = LayoutUnit::new(ch.to_string(), index, index);
        unit.position = Vec2::new(x, 0.0);
        unit.size = Vec2::new(width, height);
        if swing_jitter > 0.0 {
            unit.jitter = (unit_random(index, SeedPurpose::SwingJitter) - 0.5) * 2.0 * swing_jitter;
        }
        units.push(unit);
        x += width;
    }

    tracing::debug!(units = units.len(), width = x, "laid out text row");
    TextRow {
        units,
        width: x,
        height: if x > 0.0 { height } else { 0.0 },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/row.rs"]
mod tests;
