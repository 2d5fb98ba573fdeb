#![forbid(unsafe_code)]

//! Headless force-directed graph layout (boundary-aware spring embedder).
//!
//! `steller` computes node positions and draws nothing. Forces act between
//! node *boundaries* rather than centers, so node size and shape change the
//! geometry, and pinned vertices push and pull without moving. Strategies
//! share one trait:
//!
//! - [`OneStepForceLayout`]: one relaxation pass per call, for caller-driven
//!   interactive loops.
//! - [`ForceLayout`]: batch relaxation until the residual force falls below
//!   a threshold.
//! - [`DotLayout`]: delegate placement to an external GraphViz-style
//!   program.

pub mod dot;
pub mod error;
pub mod force;
pub mod layout;
pub mod model;
pub mod shape;
mod step;

pub use dot::DotLayout;
pub use error::{Error, Result};
pub use force::ForceConfig;
pub use layout::{ForceLayout, Layout, OneStepForceLayout};
pub use model::{FixedSet, LayoutResult, Point, PositionMap, Rect, Vertex};
pub use shape::Shape;
