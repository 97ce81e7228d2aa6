use crate::{
    foundation::core::Vec2,
    layout::{LayoutUnit, TileAccent},
};

/// Lays words out row-major on a square-tile grid.
///
/// `column = index % columns`, `row = index / columns`. Every third tile (starting at 0) is
/// zoom-accented by `1 + intensity`; of the rest, every fifth is rotated by
/// `intensity * 20` degrees.
pub fn layout_word_tiles<S: AsRef<str>>(
    words: &[S],
    columns: u32,
    tile_size: f64,
    gap: f64,
    intensity: f64,
) -> Vec<LayoutUnit> {
    let columns = columns.max(1) as usize;
    let step = tile_size + gap;

    let units: Vec<LayoutUnit> = words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let col = index % columns;
            let row = index / columns;
            let mut unit = LayoutUnit::new(word.as_ref().to_string(), index, index);
            unit.position = Vec2::new(col as f64 * step, row as f64 * step);
            unit.size = Vec2::new(tile_size, tile_size);
            unit.accent = tile_accent(index);
            match unit.accent {
                TileAccent::Zoom => unit.scale = 1.0 + intensity,
                TileAccent::Rotate => unit.rotation_deg = intensity * 20.0,
                TileAccent::None => {}
            }
            unit
        })
        .collect();

    tracing::debug!(units = units.len(), columns, "laid out word tiles");
    units
}

fn tile_accent(index: usize) -> TileAccent {
    if index % 3 == 0 {
        TileAccent::Zoom
    } else if index % 5 == 0 {
        TileAccent::Rotate
    } else {
        TileAccent::None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tiles.rs"]
mod tests;
