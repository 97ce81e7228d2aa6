use crate::{
    foundation::{
        core::{Rect, Rgba8, Vec2},
        math::Fnv1a64,
    },
    scene::model::{
        BarNode, Fill, GlyphNode, Scene, SceneNode, Shadow, SpacerNode, TetherNode, TextStyle,
        TileNode, VisualDescriptor,
    },
};

/// 128-bit content hash of a [`Scene`], stable across runs and thread counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SceneFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for SceneFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

pub fn fingerprint_scene(scene: &Scene) -> SceneFingerprint {
    let mut h = PairHasher {
        a: Fnv1a64::new_default(),
        b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
    };

    h.u64(scene.frame.0);
    h.u64(u64::from(scene.canvas.width));
    h.u64(u64::from(scene.canvas.height));
    h.nodes(&scene.nodes);

    SceneFingerprint {
        hi: h.a.finish(),
        lo: h.b.finish(),
    }
}

struct PairHasher {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl PairHasher {
    fn bytes(&mut self, bytes: &[u8]) {
        self.a.write_bytes(bytes);
        self.b.write_bytes(bytes);
    }

    fn u8(&mut self, v: u8) {
        self.bytes(&[v]);
    }

    fn u64(&mut self, v: u64) {
        self.a.write_u64(v);
        self.b.write_u64(v);
    }

    fn f64(&mut self, v: f64) {
        self.u64(v.to_bits());
    }

    fn str(&mut self, s: &str) {
        self.u64(s.len() as u64);
        self.bytes(s.as_bytes());
    }

    fn vec2(&mut self, v: Vec2) {
        self.f64(v.x);
        self.f64(v.y);
    }

    fn rect(&mut self, r: Rect) {
        for c in [r.x0, r.y0, r.x1, r.y1] {
            self.f64(c);
        }
    }

    fn color(&mut self, c: Rgba8) {
        self.bytes(&[c.r, c.g, c.b, c.a]);
    }

    fn nodes(&mut self, nodes: &[SceneNode]) {
        self.u64(nodes.len() as u64);
        for n in nodes {
            self.node(n);
        }
    }

    fn node(&mut self, node: &SceneNode) {
        match node {
            SceneNode::Background { color } => {
                self.u8(0);
                self.color(*color);
            }
            SceneNode::Group {
                transform,
                children,
            } => {
                self.u8(1);
                for c in transform.as_coeffs() {
                    self.f64(c);
                }
                self.nodes(children);
            }
            SceneNode::Glyph(g) => {
                self.u8(2);
                self.glyph(g);
            }
            SceneNode::Spacer(SpacerNode { unit_index, cell }) => {
                self.u8(3);
                self.u64(*unit_index as u64);
                self.rect(*cell);
            }
            SceneNode::Tether(t) => {
                self.u8(4);
                self.tether(t);
            }
            SceneNode::Tile(t) => {
                self.u8(5);
                self.tile(t);
            }
            SceneNode::Bar(BarNode {
                rect,
                rotation_deg,
                opacity,
                color,
            }) => {
                self.u8(6);
                self.rect(*rect);
                self.f64(*rotation_deg);
                self.f64(*opacity);
                self.color(*color);
            }
        }
    }

    fn glyph(&mut self, g: &GlyphNode) {
        self.u64(g.unit_index as u64);
        self.str(&g.content);
        self.rect(g.cell);
        self.vec2(g.anchor.to_vec2());
        self.visual(&g.visual);
        self.style(&g.style);
        match g.clip {
            Some(r) => {
                self.u8(1);
                self.rect(r);
            }
            None => self.u8(0),
        }
    }

    fn visual(&mut self, v: &VisualDescriptor) {
        self.vec2(v.offset);
        self.f64(v.rotation_deg);
        self.f64(v.tilt_x_deg);
        self.f64(v.scale);
        self.f64(v.opacity);
        self.f64(v.blur_px);
        self.str(&v.display);
    }

    fn style(&mut self, s: &TextStyle) {
        self.str(&s.font_family);
        self.f64(s.font_size);
        self.u64(u64::from(s.font_weight));
        self.f64(s.line_height);
        self.color(s.color);
        match &s.shadow {
            Some(sh) => {
                self.u8(1);
                self.shadow(sh);
            }
            None => self.u8(0),
        }
    }

    fn shadow(&mut self, s: &Shadow) {
        self.vec2(s.offset);
        self.f64(s.blur);
        self.color(s.color);
    }

    fn tether(&mut self, t: &TetherNode) {
        self.u64(t.unit_index as u64);
        self.vec2(t.bottom.to_vec2());
        self.f64(t.length);
        self.f64(t.width);
        self.color(t.color_top);
        self.color(t.color_bottom);
    }

    fn tile(&mut self, t: &TileNode) {
        self.u64(t.unit_index as u64);
        self.str(&t.label);
        self.rect(t.rect);
        self.f64(t.scale);
        self.f64(t.rotation_deg);
        self.f64(t.opacity);
        self.u8(u8::from(t.active));
        self.f64(t.corner_radius);
        match t.fill {
            Fill::Solid { color } => {
                self.u8(0);
                self.color(color);
            }
            Fill::LinearGradient {
                angle_deg,
                from,
                to,
            } => {
                self.u8(1);
                self.f64(angle_deg);
                self.color(from);
                self.color(to);
            }
        }
        self.f64(t.border_width);
        self.color(t.border_color);
        self.shadow(&t.shadow);
        self.style(&t.label_style);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/fingerprint.rs"]
mod tests;
