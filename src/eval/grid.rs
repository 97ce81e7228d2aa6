use crate::{
    config::model::{GlyphGridConfig, GridEffect},
    eval::camera::{CameraState, CameraTracker},
    foundation::core::{Canvas, Fps, FrameCtx, FrameIndex, Point, Rect, Rgba8, Vec2},
    layout::{
        LayoutUnit,
        glyphs::layout_glyph_columns,
        noise::{NoiseBar, noise_bars},
        tiles::layout_word_tiles,
    },
    scene::model::{
        BarNode, Fill, GlyphNode, Scene, SceneNode, Shadow, TextStyle, TileNode, VisualDescriptor,
    },
};

const WORD_GRID_BACKGROUND: Rgba8 = Rgba8::rgb(0x05, 0x05, 0x05);
const WORD_FONT_FAMILY: &str = r#""Inter", "Noto Sans JP", sans-serif"#;
const ACTIVE_TILE_SCALE: f64 = 1.15;
const INACTIVE_TILE_OPACITY: f64 = 0.65;
const TILE_RADIUS: f64 = 24.0;

/// Words on tiles, visited one after another by a panning camera.
#[derive(Clone, Debug, PartialEq)]
pub struct WordGridScene {
    pub tiles: Vec<LayoutUnit>,
    pub tile_size: f64,
    pub camera: CameraTracker,
}

impl WordGridScene {
    pub fn prepare(cfg: &GridEffect) -> Self {
        Self {
            tiles: layout_word_tiles(
                &cfg.words,
                cfg.columns,
                cfg.tile_size,
                cfg.gap,
                cfg.variation_intensity,
            ),
            tile_size: cfg.tile_size,
            camera: CameraTracker::word_grid(cfg.hold_frames, cfg.camera_smoothing),
        }
    }

    pub fn camera_state(&self, frame: FrameIndex, fps: Fps) -> Option<CameraState> {
        self.camera.state(frame.as_f64(), fps, &self.tiles)
    }

    pub fn scene(&self, ctx: FrameCtx) -> Scene {
        let FrameCtx { frame, fps, canvas } = ctx;
        let mut scene = Scene::with_background(frame, canvas, WORD_GRID_BACKGROUND);
        let Some(cam) = self.camera_state(frame, fps) else {
            return scene;
        };

        let label_style = TextStyle {
            font_family: WORD_FONT_FAMILY.to_string(),
            font_size: self.tile_size * 0.35,
            font_weight: 700,
            line_height: 1.0,
            color: Rgba8::WHITE,
            shadow: None,
        };
        let children = self
            .tiles
            .iter()
            .map(|tile| {
                let active = tile.index == cam.target_index;
                SceneNode::Tile(tile_node(tile, active, &label_style))
            })
            .collect();

        scene.nodes.push(SceneNode::Group {
            transform: cam.to_affine(canvas),
            children,
        });
        scene
    }
}

fn tile_node(tile: &LayoutUnit, active: bool, label_style: &TextStyle) -> TileNode {
    let rect = Rect::from_origin_size(tile.position.to_point(), tile.size.to_size());
    let (fill, border_width, border_color, shadow) = if active {
        (
            Fill::LinearGradient {
                angle_deg: 145.0,
                from: Rgba8::rgb(0x2d, 0x2d, 0x2d),
                to: Rgba8::rgb(0x18, 0x18, 0x18),
            },
            3.0,
            Rgba8::rgb(0xff, 0xef, 0x5c),
            Shadow {
                offset: Vec2::new(0.0, 20.0),
                blur: 50.0,
                color: Rgba8::rgba(0, 0, 0, 0.45),
            },
        )
    } else {
        (
            Fill::Solid {
                color: Rgba8::rgba(18, 18, 18, 0.8),
            },
            2.0,
            Rgba8::rgba(255, 255, 255, 0.25),
            Shadow {
                offset: Vec2::new(0.0, 10.0),
                blur: 25.0,
                color: Rgba8::rgba(0, 0, 0, 0.25),
            },
        )
    };

    TileNode {
        unit_index: tile.index,
        label: tile.content.clone(),
        rect,
        scale: if active { ACTIVE_TILE_SCALE } else { tile.scale },
        rotation_deg: tile.rotation_deg,
        opacity: if active { 1.0 } else { INACTIVE_TILE_OPACITY },
        active,
        corner_radius: TILE_RADIUS,
        fill,
        border_width,
        border_color,
        shadow,
        label_style: label_style.clone(),
    }
}

const GLYPH_GRID_BACKGROUND: Rgba8 = Rgba8::rgb(0xf4, 0xf4, 0xf4);
const EMPTY_GLYPH_GRID_BACKGROUND: Rgba8 = Rgba8::WHITE;
const GLYPH_FONT_FAMILY: &str = r#""Shippori Mincho", "Noto Serif JP", serif"#;
const NOISE_COLOR: Rgba8 = Rgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 38,
};

/// Glyphs in vertical columns over a noise texture, followed by a zooming, tilting camera.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphGridScene {
    pub glyphs: Vec<LayoutUnit>,
    pub noise: Vec<NoiseBar>,
    pub tile_size: f64,
    pub active_color: Rgba8,
    pub text_color: Rgba8,
    pub camera: CameraTracker,
}

impl GlyphGridScene {
    pub fn prepare(cfg: &GlyphGridConfig, canvas: Canvas) -> Self {
        Self {
            glyphs: layout_glyph_columns(&cfg.text, cfg.columns, cfg.tile_size, cfg.gap),
            noise: noise_bars(canvas, cfg.tile_size, cfg.gap),
            tile_size: cfg.tile_size,
            active_color: cfg.active_color,
            text_color: cfg.text_color,
            camera: CameraTracker::glyph_grid(cfg.hold_frames, cfg.camera_smoothing),
        }
    }

    pub fn camera_state(&self, frame: FrameIndex, fps: Fps) -> Option<CameraState> {
        self.camera.state(frame.as_f64(), fps, &self.glyphs)
    }

    pub fn scene(&self, ctx: FrameCtx) -> Scene {
        let FrameCtx { frame, fps, canvas } = ctx;
        let Some(cam) = self.camera_state(frame, fps) else {
            return Scene::with_background(frame, canvas, EMPTY_GLYPH_GRID_BACKGROUND);
        };
        let mut scene = Scene::with_background(frame, canvas, GLYPH_GRID_BACKGROUND);

        let mut children: Vec<SceneNode> = self
            .noise
            .iter()
            .map(|bar| {
                SceneNode::Bar(BarNode {
                    rect: Rect::from_origin_size(bar.position.to_point(), (bar.width, bar.height)),
                    rotation_deg: bar.rotation_deg,
                    opacity: bar.opacity,
                    color: NOISE_COLOR,
                })
            })
            .collect();

        children.extend(self.glyphs.iter().map(|g| {
            let active = g.index == cam.target_index;
            let half = g.size * 0.5;
            let cell = Rect::from_origin_size((g.position - half).to_point(), g.size.to_size());
            let mut visual = VisualDescriptor::identity(g.content.clone());
            visual.scale = g.scale;
            visual.rotation_deg = g.rotation_deg;
            SceneNode::Glyph(GlyphNode {
                unit_index: g.index,
                content: g.content.clone(),
                cell,
                anchor: Point::new(g.position.x, g.position.y),
                visual,
                style: TextStyle {
                    font_family: GLYPH_FONT_FAMILY.to_string(),
                    font_size: self.tile_size,
                    font_weight: 800,
                    line_height: 1.0,
                    color: if active {
                        self.active_color
                    } else {
                        self.text_color
                    },
                    shadow: None,
                },
                clip: None,
            })
        }));

        scene.nodes.push(SceneNode::Group {
            transform: cam.to_affine(canvas),
            children,
        });
        scene
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/grid.rs"]
mod tests;
