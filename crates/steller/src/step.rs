//! Dense step engine shared by the force strategies.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::force::{self, Body, ForceConfig};
use crate::model::{FixedSet, PositionMap, Vertex};

/// Simulation state resolved from the caller's maps. `Vertex` capabilities
/// are read once at build time, so a batch of steps never re-queries them.
#[derive(Debug)]
pub(crate) struct Sim<V> {
    vertices: Vec<SimVertex<V>>,
    edges: Vec<(usize, usize)>,
}

#[derive(Debug)]
struct SimVertex<V> {
    key: V,
    body: Body,
    fixed: bool,
    fx: f64,
    fy: f64,
}

impl<V: Vertex> Sim<V> {
    /// Resolves positions, edges and the fixed set into dense state,
    /// rejecting edges whose endpoints are absent from the position map.
    pub fn build(
        positions: &PositionMap<V>,
        edges: &[(V, V)],
        fixed: &FixedSet<V>,
    ) -> Result<Self> {
        let mut index: FxHashMap<&V, usize> = FxHashMap::default();
        let mut vertices = Vec::with_capacity(positions.len());
        for (key, &center) in positions {
            let (width, height) = key.dimensions();
            index.insert(key, vertices.len());
            vertices.push(SimVertex {
                key: key.clone(),
                body: Body::new(center, width, height, key.shape()),
                fixed: fixed.contains(key),
                fx: 0.0,
                fy: 0.0,
            });
        }
        let mut pairs = Vec::with_capacity(edges.len());
        for (origin, end) in edges {
            let a = *index
                .get(origin)
                .ok_or_else(|| Error::missing_endpoint(origin))?;
            let b = *index.get(end).ok_or_else(|| Error::missing_endpoint(end))?;
            pairs.push((a, b));
        }
        Ok(Self {
            vertices,
            edges: pairs,
        })
    }

    /// One unit-time force pass. All forces are computed from the pre-step
    /// positions, then every free vertex moves by its force vector.
    ///
    /// Returns the residual: the mean force magnitude over all vertices.
    /// Fixed vertices do not move but their force still counts, so a pinned
    /// graph under tension reports a non-zero residual.
    pub fn step(&mut self, forces: &ForceConfig) -> f64 {
        for v in &mut self.vertices {
            v.fx = 0.0;
            v.fy = 0.0;
        }
        let n = self.vertices.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (fx, fy) = force::coulomb_repulsion(
                    forces,
                    &self.vertices[i].body,
                    &self.vertices[j].body,
                );
                self.vertices[i].fx += fx;
                self.vertices[i].fy += fy;
                // Exact antisymmetry lets one evaluation serve the pair.
                self.vertices[j].fx -= fx;
                self.vertices[j].fy -= fy;
            }
        }
        for &(a, b) in &self.edges {
            if a == b {
                // self-loops carry no spring
                continue;
            }
            let (fx, fy) =
                force::hooke_attraction(forces, &self.vertices[a].body, &self.vertices[b].body);
            self.vertices[a].fx += fx;
            self.vertices[a].fy += fy;
            self.vertices[b].fx -= fx;
            self.vertices[b].fy -= fy;
        }
        let mut total = 0.0;
        for v in &mut self.vertices {
            total += v.fx.hypot(v.fy);
            if !v.fixed {
                v.body.translate(v.fx, v.fy);
            }
        }
        if n == 0 { 0.0 } else { total / n as f64 }
    }

    /// Snapshot of the current centers, keyed like the input map.
    pub fn positions(&self) -> PositionMap<V> {
        self.vertices
            .iter()
            .map(|v| (v.key.clone(), v.body.center))
            .collect()
    }
}
