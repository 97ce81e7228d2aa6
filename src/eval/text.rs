use crate::{
    animation::spring::SpringConfig,
    config::model::TextAnimationConfig,
    eval::effects::{
        self, BlurIn, EntryMode, SwingParams, UnitClock, blur_in, drop_offset, entry_progress,
        flip_tilt, scramble, shake_offset,
    },
    foundation::{
        core::{Canvas, Fps, FrameCtx, Point, Rect, Rgba8, Vec2},
        math::clamp01,
    },
    layout::{
        LayoutUnit,
        row::{TextRow, layout_text_row},
    },
    scene::model::{
        GlyphNode, Scene, SceneNode, Shadow, SpacerNode, TetherNode, TextStyle, VisualDescriptor,
    },
};

const FONT_WEIGHT: u16 = 800;
const LINE_HEIGHT: f64 = 1.3;
const BLUR_FALLBACK_FAMILY: &str = r#""Roboto Mono", monospace"#;
const TETHER_GAP: f64 = 8.0;
const TETHER_WIDTH: f64 = 3.0;

/// A prepared text animation: the laid-out row plus every parameter the effect layers
/// read, with disabled effects already reduced to their identity values.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRowScene {
    pub row: TextRow,
    pub background: Rgba8,
    pub style: TextStyle,
    pub entry_spring: SpringConfig,
    pub entry_duration: f64,
    pub stagger_frames: f64,
    pub shake_amplitude: f64,
    pub shake_speed: f64,
    /// Zero when decoding is off.
    pub scramble_frames: f64,
    /// Zero when blur-in is off.
    pub blur_strength: f64,
    pub blur_scale: f64,
    /// `None` when flipping is off; otherwise the extra flip delay.
    pub flip_delay: Option<f64>,
    pub entry_mode: EntryMode,
}

impl TextRowScene {
    pub fn prepare(cfg: &TextAnimationConfig, canvas: Canvas) -> Self {
        let font_size = cfg.appearance.font_size;
        let fx = &cfg.effects;
        let height = canvas.height_f64();

        let swing = &fx.swing;
        let entry_mode = if swing.enabled {
            EntryMode::Swing(SwingParams {
                spring: SpringConfig::new(swing.damping, swing.stiffness, swing.mass),
                duration: SwingParams::duration_for(
                    cfg.animation.entry_duration,
                    swing.sway_decay,
                ),
                distance: swing.initial_height.max(height / 2.0 + font_size),
                sway_x: swing.sway_x,
                sway_y: swing.sway_y,
                sway_decay: swing.sway_decay.max(f64::MIN_POSITIVE),
            })
        } else {
            EntryMode::Drop {
                distance: height / 2.0 + font_size * 1.5,
            }
        };
        let jitter = if swing.enabled { swing.jitter } else { 0.0 };

        let blur_strength = if fx.blur_in.enabled {
            fx.blur_in.strength
        } else {
            0.0
        };
        let family = cfg.appearance.font_preset.family_stack();
        let font_family = if blur_strength > 0.0 {
            format!("{family}, {BLUR_FALLBACK_FAMILY}")
        } else {
            family.to_string()
        };

        let a = &cfg.animation;
        Self {
            row: layout_text_row(&cfg.text.body, font_size, jitter),
            background: cfg.appearance.background,
            style: TextStyle {
                font_family,
                font_size,
                font_weight: FONT_WEIGHT,
                line_height: LINE_HEIGHT,
                color: cfg.appearance.color,
                shadow: Some(Shadow {
                    offset: Vec2::new(0.0, 14.0),
                    blur: 24.0,
                    color: Rgba8::rgba(0, 0, 0, 0.35),
                }),
            },
            entry_spring: SpringConfig::new(a.spring_damping, a.spring_stiffness, a.spring_mass),
            entry_duration: a.entry_duration,
            stagger_frames: a.stagger_frames,
            shake_amplitude: a.shake_amplitude,
            shake_speed: a.shake_speed,
            scramble_frames: if fx.decode.enabled {
                fx.decode.frames
            } else {
                0.0
            },
            blur_strength,
            blur_scale: if blur_strength > 0.0 {
                fx.blur_in.scale
            } else {
                1.0
            },
            flip_delay: fx.flip.enabled.then_some(fx.flip.delay),
            entry_mode,
        }
    }

    /// Visual state of one non-space unit, plus its tether length in swing mode.
    pub fn resolve_unit(
        &self,
        frame: f64,
        fps: Fps,
        unit: &LayoutUnit,
    ) -> (VisualDescriptor, Option<f64>) {
        let clock = UnitClock::new(frame, fps, unit.index, self.stagger_frames);
        let progress = entry_progress(&clock, self.entry_spring, self.entry_duration);

        let (offset, opacity_factor, tether) = match &self.entry_mode {
            EntryMode::Drop { distance } => (
                Vec2::new(0.0, drop_offset(progress, *distance) + unit.jitter),
                1.0,
                None,
            ),
            EntryMode::Swing(params) => {
                let s = effects::swing(&clock, params, self.entry_duration);
                let tether = effects::tether_length(params.distance, s.offset.y, unit.jitter);
                (s.offset, s.opacity_factor, Some(tether))
            }
        };

        let shake = shake_offset(frame, unit.index, self.shake_amplitude, self.shake_speed);
        let tilt_x_deg = match self.flip_delay {
            Some(extra) => flip_tilt(&clock, self.entry_spring, self.entry_duration, extra),
            None => 0.0,
        };
        let BlurIn {
            opacity,
            blur_px,
            scale,
        } = if self.blur_strength > 0.0 {
            blur_in(progress, self.blur_strength, self.blur_scale)
        } else {
            BlurIn::IDENTITY
        };

        let visual = VisualDescriptor {
            offset: offset + Vec2::new(shake, 0.0),
            rotation_deg: 0.0,
            tilt_x_deg,
            scale,
            opacity: clamp01(opacity * opacity_factor),
            blur_px,
            display: scramble(
                &unit.content,
                frame,
                clock.entry_delay,
                self.scramble_frames,
            ),
        };
        (visual, tether)
    }

    /// Row origin (top-left of the rest cells) on the canvas.
    ///
    /// Drop mode centres the row. Swing mode hangs the tethers from a line above the
    /// canvas; each cell sits below its current tether and the glyph is offset from there,
    /// so a falling glyph moves by twice its offset and starts above the canvas.
    pub fn row_origin(&self, canvas: Canvas) -> Vec2 {
        let x = (canvas.width_f64() - self.row.width) / 2.0;
        match self.entry_mode {
            EntryMode::Drop { .. } => Vec2::new(x, (canvas.height_f64() - self.row.height) / 2.0),
            EntryMode::Swing(_) => Vec2::new(x, self.tether_line(canvas)),
        }
    }

    fn tether_line(&self, canvas: Canvas) -> f64 {
        let h = canvas.height_f64();
        h * 0.05 - h * 0.2
    }

    pub fn scene(&self, ctx: FrameCtx) -> Scene {
        let FrameCtx { frame, fps, canvas } = ctx;
        let mut scene = Scene::with_background(frame, canvas, self.background);
        let origin = self.row_origin(canvas);
        let f = ctx.f();

        for unit in &self.row.units {
            let cell_origin = origin + unit.position;
            if unit.is_space() {
                scene.nodes.push(SceneNode::Spacer(SpacerNode {
                    unit_index: unit.index,
                    cell: Rect::from_origin_size(cell_origin.to_point(), unit.size.to_size()),
                }));
                continue;
            }

            let (visual, tether) = self.resolve_unit(f, fps, unit);
            match tether {
                Some(length) => {
                    let rope_end = cell_origin.y + length;
                    let cell = Rect::from_origin_size(
                        Point::new(cell_origin.x, rope_end + TETHER_GAP),
                        unit.size.to_size(),
                    );
                    scene.nodes.push(SceneNode::Tether(TetherNode {
                        unit_index: unit.index,
                        bottom: Point::new(cell.center().x, rope_end),
                        length,
                        width: TETHER_WIDTH,
                        color_top: Rgba8::rgba(255, 255, 255, 0.8),
                        color_bottom: Rgba8::rgba(255, 255, 255, 0.2),
                    }));
                    scene.nodes.push(self.glyph_node(unit, cell, visual, None));
                }
                None => {
                    let cell =
                        Rect::from_origin_size(cell_origin.to_point(), unit.size.to_size());
                    scene.nodes.push(self.glyph_node(unit, cell, visual, Some(cell)));
                }
            }
        }
        scene
    }

    fn glyph_node(
        &self,
        unit: &LayoutUnit,
        cell: Rect,
        visual: VisualDescriptor,
        clip: Option<Rect>,
    ) -> SceneNode {
        SceneNode::Glyph(GlyphNode {
            unit_index: unit.index,
            content: unit.content.clone(),
            cell,
            anchor: Point::new(cell.center().x, cell.y1),
            visual,
            style: self.style.clone(),
            clip,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/text.rs"]
mod tests;
