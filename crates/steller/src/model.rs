//! Core vertex capabilities and geometry primitives.
//!
//! These are intentionally lightweight and `Copy`-friendly: the step engine
//! rebuilds its dense state from them on every apply, and tests compare them
//! directly.

use std::fmt;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::shape::Shape;

/// A position in canvas coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// An axis-aligned bounding box. `x`/`y` are the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self::new(center.x, center.y, width, height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn half_w(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_h(&self) -> f64 {
        self.height / 2.0
    }
}

/// What the engine needs to know about a node.
///
/// Implementations are typically cheap handles (ids, indices, interned
/// labels); the engine clones them into its results. `dimensions` and
/// `shape` are read once per apply, so they may consult a renderer or a
/// cache without being hot.
pub trait Vertex: Clone + Eq + Hash + fmt::Debug {
    /// Rendered width and height of the node's bounding box.
    fn dimensions(&self) -> (f64, f64);

    /// Boundary shape used for force geometry.
    fn shape(&self) -> Shape;

    /// Display label, consumed only by external-tool strategies.
    fn label(&self) -> Option<&str> {
        None
    }
}

/// Node centers keyed by vertex.
pub type PositionMap<V> = FxHashMap<V, Point>;

/// The pinned subset: these vertices exert forces but never move.
pub type FixedSet<V> = FxHashSet<V>;

/// Output of a layout strategy.
#[derive(Debug, Clone)]
pub struct LayoutResult<V> {
    /// New center for every input vertex (same key set as the input).
    pub positions: PositionMap<V>,
    /// Mean per-vertex force magnitude after the last step. Interactive
    /// callers compare this against their own stop threshold. Strategies
    /// without a force model report `0.0`.
    pub residual: f64,
}
