//! Layout strategies over the step engine.
//!
//! Strategies are plain configuration values with `&self` methods: one
//! value can serve a caller-owned interactive loop across ticks, with the
//! caller free to move or pin vertices between applies.

use crate::error::Result;
use crate::force::ForceConfig;
use crate::model::{FixedSet, LayoutResult, PositionMap, Vertex};
use crate::step::Sim;

/// An interchangeable layout algorithm.
pub trait Layout<V: Vertex> {
    /// Computes new positions for every vertex in `positions`.
    ///
    /// Every edge endpoint must be present in `positions`. Vertices in
    /// `fixed` keep their exact input coordinates. The returned map always
    /// has the same key set as the input.
    fn apply(
        &self,
        positions: &PositionMap<V>,
        edges: &[(V, V)],
        fixed: &FixedSet<V>,
    ) -> Result<LayoutResult<V>>;
}

/// One force pass per apply.
///
/// Interactive callers drive the loop themselves and compare the returned
/// residual to their own stop threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneStepForceLayout {
    pub forces: ForceConfig,
}

impl OneStepForceLayout {
    pub fn new(forces: ForceConfig) -> Self {
        Self { forces }
    }
}

impl<V: Vertex> Layout<V> for OneStepForceLayout {
    fn apply(
        &self,
        positions: &PositionMap<V>,
        edges: &[(V, V)],
        fixed: &FixedSet<V>,
    ) -> Result<LayoutResult<V>> {
        let mut sim = Sim::build(positions, edges, fixed)?;
        let residual = sim.step(&self.forces);
        Ok(LayoutResult {
            positions: sim.positions(),
            residual,
        })
    }
}

/// Batch relaxation: steps until the residual drops below
/// `force_threshold`, capped at `iterations` passes.
#[derive(Debug, Clone, Copy)]
pub struct ForceLayout {
    pub forces: ForceConfig,
    pub iterations: usize,
    pub force_threshold: f64,
}

impl ForceLayout {
    pub const DEFAULT_ITERATIONS: usize = 100;
    pub const DEFAULT_FORCE_THRESHOLD: f64 = 0.001;
}

impl Default for ForceLayout {
    fn default() -> Self {
        Self {
            forces: ForceConfig::default(),
            iterations: Self::DEFAULT_ITERATIONS,
            force_threshold: Self::DEFAULT_FORCE_THRESHOLD,
        }
    }
}

impl<V: Vertex> Layout<V> for ForceLayout {
    fn apply(
        &self,
        positions: &PositionMap<V>,
        edges: &[(V, V)],
        fixed: &FixedSet<V>,
    ) -> Result<LayoutResult<V>> {
        // The sim is built once; vertex capabilities are not re-read
        // between passes.
        let mut sim = Sim::build(positions, edges, fixed)?;
        let mut residual = 0.0;
        let mut steps = 0usize;
        while steps < self.iterations {
            residual = sim.step(&self.forces);
            steps += 1;
            if residual < self.force_threshold {
                break;
            }
        }
        tracing::debug!(steps, residual, "force layout finished");
        Ok(LayoutResult {
            positions: sim.positions(),
            residual,
        })
    }
}
