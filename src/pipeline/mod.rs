//! Range evaluation, sequential or on a rayon pool.

use rayon::prelude::*;

use crate::{
    eval::evaluator::{Evaluator, PreparedComposition},
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{KinetypeError, KinetypeResult},
    },
    scene::{
        fingerprint::{SceneFingerprint, fingerprint_scene},
        model::Scene,
    },
};

#[derive(Clone, Debug)]
pub struct Threading {
    pub parallel: bool,
    pub chunk_size: usize,
    /// Worker count; rayon's default when `None`.
    pub threads: Option<usize>,
}

impl Default for Threading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct EvalStats {
    pub frames_total: u64,
    /// Frames whose scene equals the previous frame's, ignoring the frame number.
    pub frames_static: u64,
}

/// Evaluate `range` (start inclusive, end exclusive).
///
/// Sequential and parallel evaluation return identical scenes in frame order.
pub fn eval_frames(
    prepared: &PreparedComposition,
    range: FrameRange,
    threading: &Threading,
) -> KinetypeResult<Vec<Scene>> {
    eval_frames_with_stats(prepared, range, threading).map(|(scenes, _)| scenes)
}

pub fn eval_frames_with_stats(
    prepared: &PreparedComposition,
    range: FrameRange,
    threading: &Threading,
) -> KinetypeResult<(Vec<Scene>, EvalStats)> {
    check_range(prepared, range)?;

    let scenes = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        let chunk_size = normalized_chunk_size(threading.chunk_size);
        let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);

        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = (chunk_start + chunk_size).min(range.end.0);
            tracing::debug!(chunk_start, chunk_end, "evaluating chunk");
            let mut scenes: Vec<Scene> = pool.install(|| {
                (chunk_start..chunk_end)
                    .into_par_iter()
                    .map(|f| Evaluator::eval_frame(prepared, FrameIndex(f)))
                    .collect()
            });
            out.append(&mut scenes);
            chunk_start = chunk_end;
        }
        out
    } else {
        (range.start.0..range.end.0)
            .map(|f| Evaluator::eval_frame(prepared, FrameIndex(f)))
            .collect()
    };

    let stats = EvalStats {
        frames_total: scenes.len() as u64,
        frames_static: scenes
            .windows(2)
            .filter(|w| w[0].nodes == w[1].nodes)
            .count() as u64,
    };
    Ok((scenes, stats))
}

/// Fingerprint every frame of `range`.
pub fn fingerprint_frames(
    prepared: &PreparedComposition,
    range: FrameRange,
    threading: &Threading,
) -> KinetypeResult<Vec<SceneFingerprint>> {
    let scenes = eval_frames(prepared, range, threading)?;
    Ok(scenes.iter().map(fingerprint_scene).collect())
}

fn check_range(prepared: &PreparedComposition, range: FrameRange) -> KinetypeResult<()> {
    if range.is_empty() {
        return Err(KinetypeError::validation("frame range must be non-empty"));
    }
    if range.end.0 > prepared.duration.0 {
        return Err(KinetypeError::evaluation(format!(
            "frame range end {} is past the composition duration {}",
            range.end.0, prepared.duration.0
        )));
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> KinetypeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(KinetypeError::validation(
            "threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| KinetypeError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    chunk_size.max(1) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/mod.rs"]
mod tests;
