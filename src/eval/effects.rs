//! Independent effect layers of the text animation.
//!
//! Every layer is a pure function of the frame, the unit and its parameters. Layers never
//! read each other's output; [`crate::eval::text`] composes them.

use crate::{
    animation::spring::{Spring, SpringConfig},
    foundation::{
        core::{Fps, Vec2},
        math::clamp01,
    },
};
use std::f64::consts::PI;

/// Characters shown while a unit is scrambling.
pub const SCRAMBLE_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789#$%&*@!?";

/// Time as seen by one unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitClock {
    pub frame: f64,
    pub fps: Fps,
    pub index: usize,
    /// Frame at which the unit's entry starts, `index * stagger`.
    pub entry_delay: f64,
}

impl UnitClock {
    pub fn new(frame: f64, fps: Fps, index: usize, stagger_frames: f64) -> Self {
        Self {
            frame,
            fps,
            index,
            entry_delay: index as f64 * stagger_frames,
        }
    }
}

/// How a unit arrives at its rest position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntryMode {
    /// Falls `distance` pixels into a clipped slot, driven by the entry spring.
    Drop { distance: f64 },
    /// Falls on a tether with its own spring, then sways with a decaying amplitude.
    Swing(SwingParams),
}

/// Resolved pendulum parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwingParams {
    pub spring: SpringConfig,
    /// Spring duration in frames.
    pub duration: f64,
    /// Fall distance in pixels.
    pub distance: f64,
    pub sway_x: f64,
    pub sway_y: f64,
    /// Frames for the sway amplitude to decay by `1/e`.
    pub sway_decay: f64,
}

impl SwingParams {
    /// `duration = max(entry_duration * 2, floor(sway_decay / 2))`.
    pub fn duration_for(entry_duration: f64, sway_decay: f64) -> f64 {
        (entry_duration * 2.0).max((sway_decay / 2.0).floor())
    }
}

/// Progress of the entry spring, normalized to `duration` frames.
pub fn entry_progress(clock: &UnitClock, spring: SpringConfig, duration: f64) -> f64 {
    Spring::new(spring)
        .with_duration(duration)
        .with_delay(clock.entry_delay)
        .sample(clock.frame, clock.fps)
}

/// Vertical translation of a falling unit: `-distance` at rest before entry, 0 when landed.
pub fn drop_offset(progress: f64, distance: f64) -> f64 {
    -distance + progress * distance
}

/// Opacity, blur and scale of the blur-in landing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurIn {
    pub opacity: f64,
    pub blur_px: f64,
    pub scale: f64,
}

impl BlurIn {
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        blur_px: 0.0,
        scale: 1.0,
    };
}

/// Blur-in state for entry `progress`; identity when `strength <= 0`.
pub fn blur_in(progress: f64, strength: f64, max_scale: f64) -> BlurIn {
    if strength <= 0.0 {
        return BlurIn::IDENTITY;
    }
    BlurIn {
        opacity: progress,
        blur_px: (strength * (1.0 - progress)).max(0.0),
        scale: max_scale - (max_scale - 1.0) * progress,
    }
}

/// Content shown at `frame` by a unit whose entry starts at `start`.
///
/// Blank before `start`, a pseudo-random charset member for `frames` frames, then
/// `content`. With `frames <= 0` the content is always shown.
pub fn scramble(content: &str, frame: f64, start: f64, frames: f64) -> String {
    if frames <= 0.0 {
        return content.to_string();
    }
    if frame < start {
        return " ".to_string();
    }
    if frame - start >= frames {
        return content.to_string();
    }

    let code = content.encode_utf16().next().map_or(0.0, f64::from);
    let seed = ((frame - start + 1.0) * 17.23 + start * 131.0 + code).sin() * 10000.0;
    let charset = SCRAMBLE_CHARSET.as_bytes();
    let pick = (seed.floor().abs() as usize) % charset.len();
    char::from(charset[pick]).to_string()
}

/// Horizontal shake, `amplitude * sin((frame + index*4) * (pi/15) * speed)`.
pub fn shake_offset(frame: f64, index: usize, amplitude: f64, speed: f64) -> f64 {
    amplitude * ((frame + index as f64 * 4.0) * (PI / 15.0) * speed).sin()
}

/// Flip spring derived from the entry spring: stiffer and more damped.
pub fn flip_spring(entry: SpringConfig) -> SpringConfig {
    SpringConfig {
        damping: entry.damping + 5.0,
        stiffness: entry.stiffness + 40.0,
        ..entry
    }
}

/// Rotation about the horizontal axis: 90 degrees before the flip, 0 once settled.
pub fn flip_tilt(clock: &UnitClock, entry: SpringConfig, duration: f64, extra_delay: f64) -> f64 {
    let p = Spring::new(flip_spring(entry))
        .with_duration(duration)
        .with_delay(clock.entry_delay + extra_delay)
        .sample(clock.frame, clock.fps);
    (1.0 - p) * 90.0
}

/// Pendulum state of one unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwingState {
    /// Fall progress in `[0, 1]`.
    pub progress: f64,
    pub offset: Vec2,
    /// Multiplier applied to the unit's opacity.
    pub opacity_factor: f64,
}

/// Pendulum fall followed by a sway that decays once the entry window has passed.
pub fn swing(clock: &UnitClock, params: &SwingParams, entry_duration: f64) -> SwingState {
    let raw = Spring::new(params.spring)
        .with_duration(params.duration)
        .with_delay(clock.entry_delay)
        .sample(clock.frame, clock.fps);
    let progress = clamp01(raw);

    let f = clock.frame;
    let i = clock.index as f64;
    let hang = (f - (clock.entry_delay + entry_duration)).max(0.0);
    let decay = (-hang / params.sway_decay).exp();

    let sway_y = params.sway_y * decay * ((f + i * 4.0) * 0.12).sin();
    let sway_x = params.sway_x * decay * ((f + i * 6.0) * 0.1).sin();

    SwingState {
        progress,
        offset: Vec2::new(sway_x, drop_offset(progress, params.distance) + sway_y),
        opacity_factor: (progress + 0.3).min(1.0),
    }
}

/// Length of the tether above a swinging unit.
pub fn tether_length(distance: f64, offset_y: f64, jitter: f64) -> f64 {
    (distance + offset_y + jitter).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/effects.rs"]
mod tests;
