use super::*;
use crate::config::model::CameraSmoothing;

fn canvas() -> Canvas {
    Canvas {
        width: 1920,
        height: 1080,
    }
}

fn ctx(frame: u64) -> FrameCtx {
    FrameCtx::new(FrameIndex(frame), Fps::new(30, 1).unwrap(), canvas())
}

fn tiles_of(scene: &Scene) -> Vec<TileNode> {
    match &scene.nodes[1] {
        SceneNode::Group { children, .. } => children
            .iter()
            .filter_map(|n| match n {
                SceneNode::Tile(t) => Some(t.clone()),
                _ => None,
            })
            .collect(),
        other => panic!("expected a group, got {other:?}"),
    }
}

#[test]
fn word_grid_highlights_the_active_tile() {
    let grid = WordGridScene::prepare(&GridEffect::default());
    let scene = grid.scene(ctx(30));
    assert!(matches!(
        scene.nodes[0],
        SceneNode::Background { color } if color == WORD_GRID_BACKGROUND
    ));

    let tiles = tiles_of(&scene);
    assert_eq!(tiles.len(), 8);
    let active: Vec<usize> = tiles.iter().filter(|t| t.active).map(|t| t.unit_index).collect();
    assert_eq!(active, vec![1]);

    let on = &tiles[1];
    assert_eq!(on.scale, 1.15);
    assert_eq!(on.opacity, 1.0);
    assert_eq!(on.border_width, 3.0);
    assert!(matches!(on.fill, Fill::LinearGradient { angle_deg, .. } if angle_deg == 145.0));

    let zoomed = &tiles[3];
    assert!(!zoomed.active);
    assert!((zoomed.scale - 1.18).abs() < 1e-12);
    assert_eq!(zoomed.opacity, 0.65);
    assert_eq!(zoomed.corner_radius, 24.0);
    assert!((zoomed.label_style.font_size - 52.5).abs() < 1e-12);

    let rotated = &tiles[5];
    assert!((rotated.rotation_deg - 3.6).abs() < 1e-12);
}

#[test]
fn word_grid_camera_settles_on_the_last_tile() {
    let cfg = GridEffect {
        camera_smoothing: CameraSmoothing::Segment,
        ..GridEffect::default()
    };
    let grid = WordGridScene::prepare(&cfg);
    let cam = grid.camera_state(FrameIndex(600), Fps::new(30, 1).unwrap()).unwrap();
    assert_eq!(cam.target_index, 7);
    let centre = grid.tiles[7].center();
    assert!((cam.x - centre.x).abs() < 1e-3);
    assert!((cam.y - centre.y).abs() < 1e-3);
}

#[test]
fn glyph_grid_draws_noise_under_glyphs() {
    let cfg = GlyphGridConfig::default();
    let grid = GlyphGridScene::prepare(&cfg, canvas());
    let scene = grid.scene(ctx(45));
    assert!(matches!(
        scene.nodes[0],
        SceneNode::Background { color } if color == GLYPH_GRID_BACKGROUND
    ));

    let SceneNode::Group { children, .. } = &scene.nodes[1] else {
        panic!("expected a group");
    };
    let bars = children.iter().take_while(|n| matches!(n, SceneNode::Bar(_))).count();
    assert_eq!(bars, 50);
    assert_eq!(children.len(), 50 + grid.glyphs.len());

    let glyphs = scene.glyphs();
    assert_eq!(glyphs.len(), cfg.text.chars().count());
    for g in glyphs {
        let expected = if g.unit_index == 2 {
            cfg.active_color
        } else {
            cfg.text_color
        };
        assert_eq!(g.style.color, expected, "glyph {}", g.unit_index);
        assert_eq!(g.style.font_size, 200.0);
        assert_eq!(g.cell.center(), g.anchor);
    }
}

#[test]
fn empty_glyph_grid_is_plain_white() {
    let cfg = GlyphGridConfig {
        text: String::new(),
        ..GlyphGridConfig::default()
    };
    let scene = GlyphGridScene::prepare(&cfg, canvas()).scene(ctx(0));
    assert_eq!(scene.nodes.len(), 1);
    assert!(matches!(
        scene.nodes[0],
        SceneNode::Background { color } if color == Rgba8::WHITE
    ));
}

#[test]
fn default_glyph_camera_is_one_spring_from_the_origin() {
    let cfg = GlyphGridConfig::default();
    assert_eq!(cfg.camera_smoothing, CameraSmoothing::Settle);
    let grid = GlyphGridScene::prepare(&cfg, canvas());
    let fps = Fps::new(30, 1).unwrap();

    let at_40 = grid.camera_state(FrameIndex(40), fps).unwrap();
    assert_eq!(at_40.target_index, 2);
    assert!(at_40.x.abs() < 0.01);
    assert!((at_40.y - 460.0).abs() < 0.01, "{}", at_40.y);

    let at_60 = grid.camera_state(FrameIndex(60), fps).unwrap();
    assert_eq!(at_60.target_index, 3);
    assert!((at_60.x + 230.0).abs() < 0.01, "{}", at_60.x);
    assert!(at_60.y.abs() < 0.01, "{}", at_60.y);

    let segmented = GlyphGridScene::prepare(
        &GlyphGridConfig {
            camera_smoothing: CameraSmoothing::Segment,
            ..cfg
        },
        canvas(),
    );
    let lagging = segmented.camera_state(FrameIndex(40), fps).unwrap();
    assert!((lagging.y - 230.0).abs() < 1.0, "{}", lagging.y);
}
