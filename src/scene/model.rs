use crate::foundation::core::{Affine, Canvas, FrameIndex, Point, Rect, Rgba8, Vec2};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything a rasterizer needs to draw one frame.
pub struct Scene {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// Output viewport.
    pub canvas: Canvas,
    /// Nodes in painter's order; `nodes[0]` is always [`SceneNode::Background`].
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    pub(crate) fn with_background(frame: FrameIndex, canvas: Canvas, color: Rgba8) -> Self {
        Self {
            frame,
            canvas,
            nodes: vec![SceneNode::Background { color }],
        }
    }

    /// Number of unit-bearing nodes (glyphs, spacers, tiles), searching groups recursively.
    pub fn unit_count(&self) -> usize {
        count_units(&self.nodes)
    }

    /// Unit-bearing glyph nodes in painter's order, searching groups recursively.
    pub fn glyphs(&self) -> Vec<&GlyphNode> {
        let mut out = Vec::new();
        collect_glyphs(&self.nodes, &mut out);
        out
    }
}

fn count_units(nodes: &[SceneNode]) -> usize {
    nodes
        .iter()
        .map(|n| match n {
            SceneNode::Group { children, .. } => count_units(children),
            SceneNode::Glyph(_) | SceneNode::Spacer(_) | SceneNode::Tile(_) => 1,
            SceneNode::Background { .. } | SceneNode::Tether(_) | SceneNode::Bar(_) => 0,
        })
        .sum()
}

fn collect_glyphs<'a>(nodes: &'a [SceneNode], out: &mut Vec<&'a GlyphNode>) {
    for n in nodes {
        match n {
            SceneNode::Group { children, .. } => collect_glyphs(children, out),
            SceneNode::Glyph(g) => out.push(g),
            _ => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// One drawable element.
pub enum SceneNode {
    /// Full-canvas fill.
    Background { color: Rgba8 },
    /// Children drawn under a shared transform.
    Group {
        transform: Affine,
        children: Vec<SceneNode>,
    },
    Glyph(GlyphNode),
    /// Invisible space in a text row.
    Spacer(SpacerNode),
    /// Swing-mode string above a character.
    Tether(TetherNode),
    Tile(TileNode),
    /// Background texture streak.
    Bar(BarNode),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Resolved per-frame visual state of one unit.
pub struct VisualDescriptor {
    /// Translation from the unit's rest position.
    pub offset: Vec2,
    /// In-plane rotation.
    pub rotation_deg: f64,
    /// Rotation about the horizontal axis (3D flip).
    pub tilt_x_deg: f64,
    pub scale: f64,
    /// In `[0, 1]`.
    pub opacity: f64,
    /// Gaussian blur radius, `>= 0`.
    pub blur_px: f64,
    /// Content currently shown; differs from the true content while scrambling.
    pub display: String,
}

impl VisualDescriptor {
    /// Settled state showing `display`.
    pub fn identity(display: impl Into<String>) -> Self {
        Self {
            offset: Vec2::ZERO,
            rotation_deg: 0.0,
            tilt_x_deg: 0.0,
            scale: 1.0,
            opacity: 1.0,
            blur_px: 0.0,
            display: display.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Shadow {
    pub offset: Vec2,
    pub blur: f64,
    pub color: Rgba8,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextStyle {
    /// CSS-style family stack.
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: u16,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
    pub color: Rgba8,
    pub shadow: Option<Shadow>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A character (or word) with its resolved visual state.
pub struct GlyphNode {
    pub unit_index: usize,
    /// True content.
    pub content: String,
    /// Cell box at rest, before `visual` is applied.
    pub cell: Rect,
    /// Transform origin; the glyph is centred on it horizontally.
    pub anchor: Point,
    pub visual: VisualDescriptor,
    pub style: TextStyle,
    /// Region outside which the glyph is not drawn, in the same space as `cell`.
    pub clip: Option<Rect>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SpacerNode {
    pub unit_index: usize,
    pub cell: Rect,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Vertical gradient line hanging above a swinging character.
pub struct TetherNode {
    pub unit_index: usize,
    /// Bottom end, directly above the glyph.
    pub bottom: Point,
    pub length: f64,
    pub width: f64,
    pub color_top: Rgba8,
    pub color_bottom: Rgba8,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fill {
    Solid {
        color: Rgba8,
    },
    LinearGradient {
        angle_deg: f64,
        from: Rgba8,
        to: Rgba8,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A rounded word tile.
pub struct TileNode {
    pub unit_index: usize,
    pub label: String,
    /// Tile box at rest; `scale` and `rotation_deg` apply about its centre.
    pub rect: Rect,
    pub scale: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
    pub active: bool,
    pub corner_radius: f64,
    pub fill: Fill,
    pub border_width: f64,
    pub border_color: Rgba8,
    pub shadow: Shadow,
    pub label_style: TextStyle,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BarNode {
    pub rect: Rect,
    pub rotation_deg: f64,
    pub opacity: f64,
    pub color: Rgba8,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
