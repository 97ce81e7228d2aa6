use crate::foundation::{core::Fps, math::lerp};

/// Mass/spring/damper coefficients.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
    /// Never let progress pass the target.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(10.0, 100.0, 1.0)
    }
}

impl SpringConfig {
    pub const fn new(damping: f64, stiffness: f64, mass: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass,
            overshoot_clamping: false,
        }
    }

    /// `zeta = c / (2 * sqrt(k * m))`; `>= 1` means no oscillation.
    pub fn damping_ratio(&self) -> f64 {
        let (c, k, m) = self.coefficients();
        c / (2.0 * (k * m).sqrt())
    }

    fn coefficients(&self) -> (f64, f64, f64) {
        (
            self.damping.max(MIN_COEFFICIENT),
            self.stiffness.max(MIN_COEFFICIENT),
            self.mass.max(MIN_COEFFICIENT),
        )
    }
}

/// Displacement and velocity of the unit step response.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    pub position: f64,
    pub velocity: f64,
}

/// Distance from the target under which the spring counts as settled.
pub const REST_THRESHOLD: f64 = 0.005;

const MIN_COEFFICIENT: f64 = 1e-9;
const MAX_STEP_MS: f64 = 64.0;
const REST_HOLD_FRAMES: u32 = 20;
const MAX_MEASURE_FRAMES: u64 = 10_000;

fn advance(state: SpringState, dt_ms: f64, config: &SpringConfig) -> SpringState {
    let (c, k, m) = config.coefficients();
    let v0 = -state.velocity;
    let x0 = 1.0 - state.position;
    let zeta = c / (2.0 * (k * m).sqrt());
    let omega0 = (k / m).sqrt();
    let t = dt_ms.min(MAX_STEP_MS) / 1000.0;

    if zeta < 1.0 {
        let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
        let (sin1, cos1) = (omega1 * t).sin_cos();
        let envelope = (-zeta * omega0 * t).exp();
        let frag = envelope * (sin1 * ((v0 + zeta * omega0 * x0) / omega1) + x0 * cos1);
        SpringState {
            position: 1.0 - frag,
            velocity: zeta * omega0 * frag
                - envelope * (cos1 * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin1),
        }
    } else {
        let envelope = (-omega0 * t).exp();
        SpringState {
            position: 1.0 - envelope * (x0 + (v0 + omega0 * x0) * t),
            velocity: envelope * (v0 * (t * omega0 - 1.0) + t * x0 * omega0 * omega0),
        }
    }
}

fn frame_time_ms(frame: f64, fps: Fps) -> f64 {
    frame / fps.as_f64() * 1000.0
}

/// Unit step response (0 -> 1) at `frame`, integrated from frame 0 on every call.
///
/// Negative frames clamp to frame 0. A fractional frame advances the final step by its
/// fractional part only.
///
/// Stepping stops once the position is exactly 1.0 with a subnormal velocity: no further
/// step can move the position, so late frames cost no more than the settling time.
pub fn spring_state(frame: f64, fps: Fps, config: &SpringConfig) -> SpringState {
    let frame = if frame.is_nan() { 0.0 } else { frame.max(0.0) };
    let whole = frame.floor();
    let rest = frame - whole;
    let last = whole as u64;

    let mut state = SpringState::default();
    let mut last_ms = 0.0;
    for f in 0..=last {
        let at = if f == last { f as f64 + rest } else { f as f64 };
        let now = frame_time_ms(at, fps);
        state = advance(state, now - last_ms, config);
        last_ms = now;
        if is_at_rest(state) {
            break;
        }
    }
    state
}

fn is_at_rest(state: SpringState) -> bool {
    state.position == 1.0 && state.velocity.abs() < f64::MIN_POSITIVE
}

/// Number of frames the spring needs to settle within `threshold` of its target and stay
/// there for 20 frames.
pub fn measure_spring(fps: Fps, config: &SpringConfig, threshold: f64) -> f64 {
    let threshold = threshold.max(f64::EPSILON);
    let distance = |s: SpringState| (s.position - 1.0).abs();

    let mut frame = 0u64;
    let mut last_ms = 0.0;
    let mut state = advance(SpringState::default(), 0.0, config);
    let mut step = |frame: u64, state: SpringState| {
        let now = frame_time_ms(frame as f64, fps);
        let next = advance(state, now - last_ms, config);
        last_ms = now;
        next
    };

    while distance(state) >= threshold && frame < MAX_MEASURE_FRAMES {
        frame += 1;
        state = step(frame, state);
    }

    let mut finished = frame;
    let mut held = 0;
    while held < REST_HOLD_FRAMES && frame < MAX_MEASURE_FRAMES {
        frame += 1;
        state = step(frame, state);
        if distance(state) >= threshold {
            held = 0;
            finished = frame + 1;
        }
        held += 1;
    }
    finished as f64
}

/// A spring animation from `from` to `to`, released at `delay`.
///
/// With a duration the natural settling time is stretched or squeezed to exactly that many
/// frames and the value is pinned to `to` afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub config: SpringConfig,
    pub from: f64,
    pub to: f64,
    pub duration_in_frames: Option<f64>,
    pub delay: f64,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            from: 0.0,
            to: 1.0,
            duration_in_frames: None,
            delay: 0.0,
        }
    }

    pub fn with_range(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn with_duration(mut self, frames: f64) -> Self {
        self.duration_in_frames = Some(frames);
        self
    }

    pub fn with_delay(mut self, frames: f64) -> Self {
        self.delay = frames;
        self
    }

    pub fn sample(&self, frame: f64, fps: Fps) -> f64 {
        let elapsed = frame - self.delay;
        if elapsed.is_nan() || elapsed <= 0.0 {
            return self.from;
        }

        let progress = match self.duration_in_frames {
            None => spring_state(elapsed, fps, &self.config).position,
            Some(d) if d.is_nan() || d <= 0.0 => 1.0,
            Some(d) => {
                if elapsed > d {
                    return self.to;
                }
                let natural = measure_spring(fps, &self.config, REST_THRESHOLD).max(1.0);
                spring_state(elapsed / (d / natural), fps, &self.config).position
            }
        };

        let progress = if self.config.overshoot_clamping {
            progress.min(1.0)
        } else {
            progress
        };
        lerp(self.from, self.to, progress)
    }
}

/// One-shot form of [`Spring::sample`]: progress toward `to` starting from 0.
pub fn spring(
    frame: f64,
    fps: Fps,
    config: SpringConfig,
    to: f64,
    duration_in_frames: Option<f64>,
    delay: f64,
) -> f64 {
    Spring {
        config,
        from: 0.0,
        to,
        duration_in_frames,
        delay,
    }
    .sample(frame, fps)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
