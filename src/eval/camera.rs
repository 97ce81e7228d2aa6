use crate::{
    animation::spring::{Spring, SpringConfig},
    config::model::CameraSmoothing,
    foundation::core::{Affine, Canvas, Fps, Vec2},
    layout::{LayoutUnit, script::ScriptClass},
};

/// Which point of a unit the camera centres on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraAnchor {
    /// The unit's `position`.
    Position,
    /// The centre of the unit's cell.
    CellCenter,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomRule {
    /// Constant zoom; not smoothed.
    Fixed(f64),
    /// `latin` when the target is an ASCII letter, `other` otherwise.
    ByScript { latin: f64, other: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AngleRule {
    /// Constant angle; not smoothed.
    Fixed(f64),
    /// `+degrees` for targets `0..every`, `-degrees` for the next `every`, and so on.
    Alternate { degrees: f64, every: usize },
}

/// Where the camera wants to be for one target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Pose {
    x: f64,
    y: f64,
    zoom: f64,
    angle: f64,
}

/// Spring-smoothed virtual camera that visits units in order, `hold_frames` each.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTracker {
    pub hold_frames: f64,
    pub spring: SpringConfig,
    pub smoothing: CameraSmoothing,
    pub anchor: CameraAnchor,
    pub zoom: ZoomRule,
    pub angle: AngleRule,
}

impl CameraTracker {
    /// Word grid camera: pans to tile centres, no zoom or rotation.
    pub fn word_grid(hold_frames: f64, smoothing: CameraSmoothing) -> Self {
        Self {
            hold_frames,
            spring: SpringConfig::new(20.0, 180.0, 0.8),
            smoothing,
            anchor: CameraAnchor::CellCenter,
            zoom: ZoomRule::Fixed(1.0),
            angle: AngleRule::Fixed(0.0),
        }
    }

    /// Glyph grid camera: zooms in on Latin letters and tilts every four glyphs.
    pub fn glyph_grid(hold_frames: f64, smoothing: CameraSmoothing) -> Self {
        Self {
            hold_frames,
            spring: SpringConfig::new(16.0, 210.0, 0.8),
            smoothing,
            anchor: CameraAnchor::Position,
            zoom: ZoomRule::ByScript {
                latin: 1.6,
                other: 1.1,
            },
            angle: AngleRule::Alternate {
                degrees: 15.0,
                every: 4,
            },
        }
    }

    /// `min(count - 1, floor(frame / hold_frames))`, or `None` when there is nothing to
    /// follow.
    pub fn target_index(&self, frame: f64, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        // NaN casts to 0 and +inf saturates, so degenerate holds stay in range.
        let k = (frame / self.hold_frames).floor().max(0.0) as usize;
        Some(k.min(count - 1))
    }

    /// Camera state at `frame`, recomputed from scratch.
    pub fn state(&self, frame: f64, fps: Fps, units: &[LayoutUnit]) -> Option<CameraState> {
        let target_index = self.target_index(frame, units.len())?;
        let target = self.pose(&units[target_index], target_index);

        let smoothed = match self.smoothing {
            CameraSmoothing::Settle => self.ease(Pose::default(), target, frame, 0.0, fps),
            CameraSmoothing::Segment => {
                let mut from = Pose::default();
                for k in 0..target_index {
                    let end = (k + 1) as f64 * self.hold_frames;
                    let to = self.pose(&units[k], k);
                    from = self.ease(from, to, end, k as f64 * self.hold_frames, fps);
                }
                let start = target_index as f64 * self.hold_frames;
                self.ease(from, target, frame, start, fps)
            }
        };

        Some(CameraState {
            target_index,
            x: smoothed.x,
            y: smoothed.y,
            zoom: smoothed.zoom,
            angle_deg: smoothed.angle,
        })
    }

    fn pose(&self, unit: &LayoutUnit, index: usize) -> Pose {
        let at = match self.anchor {
            CameraAnchor::Position => unit.position,
            CameraAnchor::CellCenter => unit.center(),
        };
        let zoom = match self.zoom {
            ZoomRule::Fixed(z) => z,
            ZoomRule::ByScript { latin, other } => {
                if unit.content.chars().any(|c| ScriptClass::of(c) == ScriptClass::Latin) {
                    latin
                } else {
                    other
                }
            }
        };
        let angle = match self.angle {
            AngleRule::Fixed(a) => a,
            AngleRule::Alternate { degrees, every } => {
                if (index / every.max(1)) % 2 == 0 {
                    degrees
                } else {
                    -degrees
                }
            }
        };
        Pose {
            x: at.x,
            y: at.y,
            zoom,
            angle,
        }
    }

    fn ease(&self, from: Pose, to: Pose, frame: f64, delay: f64, fps: Fps) -> Pose {
        let channel = |a: f64, b: f64| {
            Spring::new(self.spring)
                .with_range(a, b)
                .with_delay(delay)
                .sample(frame, fps)
        };
        Pose {
            x: channel(from.x, to.x),
            y: channel(from.y, to.y),
            zoom: match self.zoom {
                ZoomRule::Fixed(z) => z,
                ZoomRule::ByScript { .. } => channel(from.zoom, to.zoom),
            },
            angle: match self.angle {
                AngleRule::Fixed(a) => a,
                AngleRule::Alternate { .. } => channel(from.angle, to.angle),
            },
        }
    }
}

/// Smoothed camera pose at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CameraState {
    pub target_index: usize,
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
    pub angle_deg: f64,
}

impl CameraState {
    /// `translate(W/2, H/2) * rotate(-angle) * scale(zoom) * translate(-x, -y)`.
    pub fn to_affine(&self, canvas: Canvas) -> Affine {
        Affine::translate(canvas.center())
            * Affine::rotate(-self.angle_deg.to_radians())
            * Affine::scale(self.zoom)
            * Affine::translate(Vec2::new(-self.x, -self.y))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/camera.rs"]
mod tests;
