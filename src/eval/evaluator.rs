use crate::{
    config::model::{Composition, SceneConfig},
    eval::{
        camera::CameraState,
        grid::{GlyphGridScene, WordGridScene},
        text::TextRowScene,
    },
    foundation::{
        core::{Canvas, Fps, FrameCtx, FrameIndex},
        error::KinetypeResult,
    },
    scene::model::Scene,
};

/// Layout and resolved parameters of one scene kind, computed once per configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum PreparedScene {
    TextRow(TextRowScene),
    WordGrid(WordGridScene),
    GlyphGrid(GlyphGridScene),
}

impl PreparedScene {
    /// Number of animated units the layout produced.
    pub fn unit_count(&self) -> usize {
        match self {
            Self::TextRow(s) => s.row.units.len(),
            Self::WordGrid(s) => s.tiles.len(),
            Self::GlyphGrid(s) => s.glyphs.len(),
        }
    }
}

/// A validated composition with its layout already computed.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedComposition {
    pub fps: Fps,
    pub canvas: Canvas,
    pub duration: FrameIndex,
    pub scene: PreparedScene,
}

impl PreparedComposition {
    /// Validate `comp` and lay it out.
    #[tracing::instrument(skip(comp))]
    pub fn prepare(comp: &Composition) -> KinetypeResult<Self> {
        comp.validate()?;
        Ok(Self::prepare_unchecked(comp))
    }

    /// Lay `comp` out without range-checking it first.
    pub fn prepare_unchecked(comp: &Composition) -> Self {
        let scene = match &comp.scene {
            SceneConfig::TextAnimation(cfg) => {
                let grid = &cfg.effects.grid;
                if grid.enabled && !grid.words.is_empty() {
                    PreparedScene::WordGrid(WordGridScene::prepare(grid))
                } else {
                    PreparedScene::TextRow(TextRowScene::prepare(cfg, comp.canvas))
                }
            }
            SceneConfig::GlyphGrid(cfg) => {
                PreparedScene::GlyphGrid(GlyphGridScene::prepare(cfg, comp.canvas))
            }
        };
        tracing::debug!(units = scene.unit_count(), "prepared composition");
        Self {
            fps: comp.fps,
            canvas: comp.canvas,
            duration: comp.duration,
            scene,
        }
    }

    pub fn frame_ctx(&self, frame: FrameIndex) -> FrameCtx {
        FrameCtx::new(frame, self.fps, self.canvas)
    }

    /// Camera pose at `frame`; `None` for the text row and for empty grids.
    pub fn camera_state(&self, frame: FrameIndex) -> Option<CameraState> {
        match &self.scene {
            PreparedScene::TextRow(_) => None,
            PreparedScene::WordGrid(s) => s.camera_state(frame, self.fps),
            PreparedScene::GlyphGrid(s) => s.camera_state(frame, self.fps),
        }
    }
}

/// Stateless evaluator from a prepared composition to per-frame scenes.
pub struct Evaluator;

impl Evaluator {
    /// Resolve every unit at `frame`.
    ///
    /// Frames past the composition's duration are evaluated like any other; the result
    /// depends only on `prepared` and `frame`.
    #[tracing::instrument(skip(prepared))]
    pub fn eval_frame(prepared: &PreparedComposition, frame: FrameIndex) -> Scene {
        let ctx = prepared.frame_ctx(frame);
        match &prepared.scene {
            PreparedScene::TextRow(s) => s.scene(ctx),
            PreparedScene::WordGrid(s) => s.scene(ctx),
            PreparedScene::GlyphGrid(s) => s.scene(ctx),
        }
    }

    /// Validate, prepare and evaluate a single frame of `comp`.
    pub fn eval_composition(comp: &Composition, frame: FrameIndex) -> KinetypeResult<Scene> {
        let prepared = PreparedComposition::prepare(comp)?;
        Ok(Self::eval_frame(&prepared, frame))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
