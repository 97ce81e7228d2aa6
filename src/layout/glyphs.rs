use crate::{
    animation::random::{SeedPurpose, unit_random},
    foundation::core::Vec2,
    layout::{LayoutUnit, script::ScriptClass},
};

/// Lays characters out in vertical columns that advance right-to-left.
///
/// `'\n'` closes the current column without producing a unit; its source index is still
/// consumed so seeds stay aligned with the input text. A column also closes after
/// `max_rows` characters. Each unit's `position` is the centre of its glyph.
pub fn layout_glyph_columns(
    text: &str,
    max_rows: u32,
    tile_size: f64,
    gap: f64,
) -> Vec<LayoutUnit> {
    let step = tile_size + gap;
    let max_rows = max_rows.max(1) as usize;
    let mut units = Vec::new();
    let mut column = 0usize;
    let mut row = 0usize;

    for (source_index, ch) in text.chars().enumerate() {
        if ch == '\n' {
            column += 1;
            row = 0;
            continue;
        }

        let mut unit = LayoutUnit::new(ch.to_string(), units.len(), source_index);
        unit.position = Vec2::new(-(column as f64) * step, row as f64 * step);
        unit.size = Vec2::new(tile_size, tile_size);
        unit.scale = glyph_scale(unit.class, source_index);
        unit.rotation_deg = (unit_random(source_index, SeedPurpose::GlyphRotation) - 0.5) * 10.0;
        units.push(unit);

        row += 1;
        if row >= max_rows {
            column += 1;
            row = 0;
        }
    }

    tracing::debug!(units = units.len(), "laid out glyph columns");
    units
}

fn glyph_scale(class: ScriptClass, source_index: usize) -> f64 {
    match class {
        ScriptClass::Ideograph => {
            1.8 + unit_random(source_index, SeedPurpose::IdeographScale) * 0.7
        }
        ScriptClass::Hiragana => 0.7 + unit_random(source_index, SeedPurpose::KanaScale) * 0.2,
        ScriptClass::Latin | ScriptClass::Other => {
            1.0 + unit_random(source_index, SeedPurpose::GlyphScale) * 0.4
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/glyphs.rs"]
mod tests;
