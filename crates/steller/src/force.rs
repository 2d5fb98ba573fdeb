//! Pairwise force model.
//!
//! Both forces measure the *boundary distance vector*: the segment between
//! the two points where the center-to-center line leaves each shape. Using
//! boundaries instead of centers makes big nodes keep longer edges and lets
//! the overlap branches below detect actual contact.
//!
//! Both forces are exactly antisymmetric (the force on `o` from `v` is the
//! bit-exact negation of the force on `v` from `o`), so the step engine
//! evaluates each pair once.

use crate::model::{Point, Rect};
use crate::shape::Shape;

/// Tunable force parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceConfig {
    /// Smallest spring rest length; the actual rest length also grows with
    /// the two node sizes.
    pub min_spring_length: f64,
    /// Hooke constant of the springs along edges.
    pub spring_stiffness: f64,
    /// Electrical constant of the pairwise repulsion.
    pub repulsion: f64,
    /// Clamp on every per-distance force scalar, and the deterministic
    /// fallback magnitude when a boundary distance is exactly zero.
    pub max_force: f64,
}

impl ForceConfig {
    pub const DEFAULT_MIN_SPRING_LENGTH: f64 = 30.0;
    pub const DEFAULT_SPRING_STIFFNESS: f64 = 0.3;
    pub const DEFAULT_REPULSION: f64 = 250.0;
    pub const DEFAULT_MAX_FORCE: f64 = 10.0;
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            min_spring_length: Self::DEFAULT_MIN_SPRING_LENGTH,
            spring_stiffness: Self::DEFAULT_SPRING_STIFFNESS,
            repulsion: Self::DEFAULT_REPULSION,
            max_force: Self::DEFAULT_MAX_FORCE,
        }
    }
}

/// A vertex resolved for force evaluation: center, drawn bbox, shape.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Body {
    pub center: Point,
    pub bbox: Rect,
    pub shape: Shape,
}

impl Body {
    pub fn new(center: Point, width: f64, height: f64, shape: Shape) -> Self {
        Self {
            center,
            bbox: Rect::centered(center, width, height),
            shape,
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center.x += dx;
        self.center.y += dy;
        self.bbox.x = self.center.x;
        self.bbox.y = self.center.y;
    }
}

/// Boundary endpoints of the segment joining two bodies: `v`'s boundary
/// point toward `o`'s center, then `o`'s toward `v`'s.
fn boundary_span(v: &Body, o: &Body) -> (Point, Point) {
    (
        v.shape.intersection(v.bbox, o.center),
        o.shape.intersection(o.bbox, v.center),
    )
}

/// Spring force on `v` exerted by the edge toward `o`.
pub(crate) fn hooke_attraction(cfg: &ForceConfig, v: &Body, o: &Body) -> (f64, f64) {
    let (vi, oi) = boundary_span(v, o);
    // A span pointing against the center line means the boundaries overlap;
    // springs never pull through the other shape.
    if (o.center.x - v.center.x) * (oi.x - vi.x) < 0.0
        || (o.center.y - v.center.y) * (oi.y - vi.y) < 0.0
    {
        return (0.0, 0.0);
    }
    let dx = oi.x - vi.x;
    let dy = oi.y - vi.y;
    let distance = dx.hypot(dy);
    // Rest length grows with the shapes: center gap minus boundary gap.
    let spacing = v.center.distance_to(o.center) - distance;
    let length = spacing.max(cfg.min_spring_length);
    let force = if distance == 0.0 {
        -cfg.max_force
    } else {
        -cfg.spring_stiffness * (length - distance) / distance
    };
    let force = force.clamp(-cfg.max_force, cfg.max_force);
    (force * dx, force * dy)
}

/// Electrical force on `v` exerted by `o`.
pub(crate) fn coulomb_repulsion(cfg: &ForceConfig, v: &Body, o: &Body) -> (f64, f64) {
    let (vi, oi) = boundary_span(v, o);
    let (mut x0, mut y0) = (vi.x, vi.y);
    let (mut x1, mut y1) = (oi.x, oi.y);
    // Overlapping boxes invert the span; swapping the offending axis keeps
    // the push outward.
    if (o.center.x - v.center.x) * (x1 - x0) < 0.0 {
        std::mem::swap(&mut x0, &mut x1);
    }
    if (o.center.y - v.center.y) * (y1 - y0) < 0.0 {
        std::mem::swap(&mut y0, &mut y1);
    }
    let dx = x1 - x0;
    let dy = y1 - y0;
    let distance = dx.hypot(dy);
    let force = if distance == 0.0 {
        -cfg.max_force
    } else {
        -cfg.repulsion / (distance * distance)
    };
    let force = force.clamp(-cfg.max_force, cfg.max_force);
    (force * dx, force * dy)
}
