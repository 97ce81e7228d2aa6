//! Per-frame resolution of prepared layouts into scenes.

pub(crate) mod camera;
pub(crate) mod effects;
pub(crate) mod evaluator;
pub(crate) mod grid;
pub(crate) mod text;
