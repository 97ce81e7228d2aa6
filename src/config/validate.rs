use crate::config::model::{
    AnimationSettings, Appearance, Composition, EffectSettings, GlyphGridConfig, GridEffect,
    SceneConfig, SwingEffect, TextAnimationConfig,
};
use crate::foundation::error::{KinetypeError, KinetypeResult};
use std::fmt;

const MAX_TEXT_UTF16_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigPathElem {
    Field(&'static str),
    Index(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct ConfigError {
    pub(crate) path: Vec<ConfigPathElem>,
    pub(crate) message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[ConfigPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            ConfigPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            ConfigPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

#[derive(Debug, Clone)]
pub(crate) struct ConfigErrors {
    pub(crate) errors: Vec<ConfigError>,
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigErrors {}

impl From<ConfigErrors> for KinetypeError {
    fn from(errs: ConfigErrors) -> Self {
        KinetypeError::validation(errs.to_string())
    }
}

#[derive(Default)]
struct Checker {
    path: Vec<ConfigPathElem>,
    errors: Vec<ConfigError>,
}

impl Checker {
    fn scope(&mut self, elem: ConfigPathElem, f: impl FnOnce(&mut Self)) {
        self.path.push(elem);
        f(self);
        self.path.pop();
    }

    fn field(&mut self, name: &'static str, f: impl FnOnce(&mut Self)) {
        self.scope(ConfigPathElem::Field(name), f);
    }

    fn fail(&mut self, field: &'static str, message: impl Into<String>) {
        let mut path = self.path.clone();
        path.push(ConfigPathElem::Field(field));
        self.errors.push(ConfigError {
            path,
            message: message.into(),
        });
    }

    fn range(&mut self, field: &'static str, value: f64, min: f64, max: f64) {
        if !value.is_finite() {
            self.fail(field, "must be a finite number");
        } else if value < min || value > max {
            self.fail(field, format!("must be in [{min}, {max}], got {value}"));
        }
    }

    fn int_range(&mut self, field: &'static str, value: u32, min: u32, max: u32) {
        if value < min || value > max {
            self.fail(field, format!("must be in [{min}, {max}], got {value}"));
        }
    }

    fn finish(self) -> Result<(), ConfigErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigErrors {
                errors: self.errors,
            })
        }
    }
}

pub(crate) fn validate_composition(comp: &Composition) -> Result<(), ConfigErrors> {
    let mut c = Checker::default();

    c.field("fps", |c| {
        if comp.fps.num == 0 {
            c.fail("num", "must be > 0");
        }
        if comp.fps.den == 0 {
            c.fail("den", "must be > 0");
        }
    });
    c.field("canvas", |c| {
        if comp.canvas.width == 0 {
            c.fail("width", "must be > 0");
        }
        if comp.canvas.height == 0 {
            c.fail("height", "must be > 0");
        }
    });
    if comp.duration.0 == 0 {
        c.fail("duration", "must be > 0 frames");
    }

    c.field("scene", |c| {
        c.field("params", |c| match &comp.scene {
            SceneConfig::TextAnimation(t) => check_text_animation(c, t),
            SceneConfig::GlyphGrid(g) => check_glyph_grid(c, g),
        })
    });

    c.finish()
}

fn check_text_animation(c: &mut Checker, t: &TextAnimationConfig) {
    c.field("text", |c| {
        let len = t.text.body.encode_utf16().count();
        if len == 0 {
            c.fail("body", "must contain at least 1 character");
        } else if len > MAX_TEXT_UTF16_LEN {
            c.fail(
                "body",
                format!("must be at most {MAX_TEXT_UTF16_LEN} characters, got {len}"),
            );
        }
    });
    c.field("appearance", |c| check_appearance(c, &t.appearance));
    c.field("animation", |c| check_animation(c, &t.animation));
    c.field("effects", |c| check_effects(c, &t.effects));
}

fn check_appearance(c: &mut Checker, a: &Appearance) {
    c.range("font_size", a.font_size, 24.0, 260.0);
}

fn check_animation(c: &mut Checker, a: &AnimationSettings) {
    c.range("entry_duration", a.entry_duration, 10.0, 90.0);
    c.range("stagger_frames", a.stagger_frames, 1.0, 24.0);
    c.range("shake_amplitude", a.shake_amplitude, 0.0, 40.0);
    c.range("shake_speed", a.shake_speed, 0.0, 2.0);
    c.range("spring_mass", a.spring_mass, 0.1, 5.0);
    c.range("spring_damping", a.spring_damping, 5.0, 40.0);
    c.range("spring_stiffness", a.spring_stiffness, 20.0, 300.0);
}

fn check_effects(c: &mut Checker, e: &EffectSettings) {
    c.field("decode", |c| c.range("frames", e.decode.frames, 0.0, 30.0));
    c.field("blur_in", |c| {
        c.range("strength", e.blur_in.strength, 0.0, 40.0);
        c.range("scale", e.blur_in.scale, 1.0, 2.0);
    });
    c.field("flip", |c| c.range("delay", e.flip.delay, 0.0, 20.0));
    c.field("swing", |c| check_swing(c, &e.swing));
    c.field("grid", |c| check_grid(c, &e.grid));
}

fn check_swing(c: &mut Checker, s: &SwingEffect) {
    c.range("initial_height", s.initial_height, 50.0, 400.0);
    c.range("sway_x", s.sway_x, 0.0, 20.0);
    c.range("sway_y", s.sway_y, 0.0, 40.0);
    c.range("sway_decay", s.sway_decay, 5.0, 60.0);
    c.range("mass", s.mass, 0.5, 3.0);
    c.range("damping", s.damping, 4.0, 15.0);
    c.range("stiffness", s.stiffness, 15.0, 60.0);
    c.range("jitter", s.jitter, 0.0, 200.0);
}

fn check_grid(c: &mut Checker, g: &GridEffect) {
    if g.words.is_empty() {
        c.fail("words", "must contain at least 1 word");
    }
    c.field("words", |c| {
        for (i, w) in g.words.iter().enumerate() {
            if w.is_empty() {
                c.scope(ConfigPathElem::Index(i), |c| {
                    let path = c.path.clone();
                    c.errors.push(ConfigError {
                        path,
                        message: "word must be non-empty".to_string(),
                    });
                });
            }
        }
    });
    c.int_range("columns", g.columns, 1, 8);
    c.range("tile_size", g.tile_size, 60.0, 240.0);
    c.range("gap", g.gap, 0.0, 200.0);
    c.range("hold_frames", g.hold_frames, 5.0, 180.0);
    c.range("variation_intensity", g.variation_intensity, 0.0, 0.5);
}

fn check_glyph_grid(c: &mut Checker, g: &GlyphGridConfig) {
    if g.text.is_empty() {
        c.fail("text", "must contain at least 1 character");
    }
    c.int_range("columns", g.columns, 1, 40);
    c.range("tile_size", g.tile_size, 20.0, 260.0);
    c.range("gap", g.gap, 0.0, 120.0);
    c.range("hold_frames", g.hold_frames, 1.0, 600.0);
}

impl Composition {
    /// Range-check every numeric field and reject empty content.
    ///
    /// All violations are reported at once, one per line, each prefixed with its JSON path
    /// (for example `$.scene.params.animation.entry_duration`).
    pub fn validate(&self) -> KinetypeResult<()> {
        validate_composition(self).map_err(KinetypeError::from)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/validate.rs"]
mod tests;
