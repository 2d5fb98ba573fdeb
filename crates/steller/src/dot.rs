//! External-tool layout via GraphViz-style programs.
//!
//! The graph is serialized to `dot` source, piped to the program with
//! `-Tplain`, and node positions are parsed back from the `plain` output.
//! Nothing else of the output format is load-bearing.

use std::io::{self, Write as _};
use std::process::{Command, Stdio};

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::model::{FixedSet, LayoutResult, Point, PositionMap, Vertex};

/// `plain` coordinates are in inches; canvas coordinates are points.
const POINTS_PER_INCH: f64 = 72.0;

/// Delegates placement to an external GraphViz-style program.
///
/// Fixed vertices are rejected up front: the external program would
/// reposition them silently, corrupting an interactive caller's pins.
#[derive(Debug, Clone)]
pub struct DotLayout {
    program: String,
}

impl DotLayout {
    pub const DEFAULT_PROGRAM: &'static str = "fdp";

    /// Lays out with the default engine, `fdp`.
    pub fn new() -> Self {
        Self::with_program(Self::DEFAULT_PROGRAM)
    }

    /// Lays out with a specific GraphViz engine (`dot`, `neato`, `fdp`,
    /// ...), looked up on the search path.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn backend_failed(&self, detail: impl Into<String>) -> Error {
        Error::BackendFailed {
            program: self.program.clone(),
            detail: detail.into(),
        }
    }

    fn backend_output(&self, detail: impl Into<String>) -> Error {
        Error::BackendOutput {
            program: self.program.clone(),
            detail: detail.into(),
        }
    }

    fn run(&self, source: &str) -> Result<String> {
        let mut child = Command::new(&self.program)
            .arg("-Tplain")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    Error::BackendNotInstalled {
                        program: self.program.clone(),
                    }
                } else {
                    self.backend_failed(format!("failed to spawn: {e}"))
                }
            })?;
        if let Some(mut stdin) = child.stdin.take() {
            // A program that exits early closes the pipe; the exit status
            // below is the failure worth reporting then.
            let _ = stdin.write_all(source.as_bytes());
        }
        let output = child
            .wait_with_output()
            .map_err(|e| self.backend_failed(format!("failed to read output: {e}")))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.backend_failed(format!(
                "exit={} {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }
        String::from_utf8(output.stdout).map_err(|_| self.backend_output("output is not UTF-8"))
    }
}

impl Default for DotLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Layout<V> for DotLayout {
    fn apply(
        &self,
        positions: &PositionMap<V>,
        edges: &[(V, V)],
        fixed: &FixedSet<V>,
    ) -> Result<LayoutResult<V>> {
        if !fixed.is_empty() {
            return Err(Error::FixedUnsupported { strategy: "dot" });
        }
        let keys: Vec<&V> = positions.keys().collect();
        let mut index: FxHashMap<&V, usize> = FxHashMap::default();
        for (i, key) in keys.iter().enumerate() {
            index.insert(*key, i);
        }
        let mut pairs = Vec::with_capacity(edges.len());
        for (origin, end) in edges {
            let a = *index
                .get(origin)
                .ok_or_else(|| Error::missing_endpoint(origin))?;
            let b = *index.get(end).ok_or_else(|| Error::missing_endpoint(end))?;
            pairs.push((a, b));
        }
        let source = render_dot(&keys, &pairs);
        tracing::debug!(program = %self.program, vertices = keys.len(), "invoking external layout");
        let stdout = self.run(&source)?;
        let parsed = parse_plain(&stdout);
        let mut out = PositionMap::default();
        for (i, key) in keys.iter().enumerate() {
            let name = node_name(i);
            let point = parsed
                .get(&name)
                .copied()
                .ok_or_else(|| self.backend_output(format!("no position for node {name}")))?;
            out.insert((*key).clone(), point);
        }
        Ok(LayoutResult {
            positions: out,
            residual: 0.0,
        })
    }
}

fn node_name(i: usize) -> String {
    format!("s{i}")
}

fn render_dot<V: Vertex>(keys: &[&V], edges: &[(usize, usize)]) -> String {
    let mut out = String::from("digraph {\n");
    for (i, key) in keys.iter().enumerate() {
        let name = node_name(i);
        match key.label() {
            Some(label) => {
                out.push_str(&format!("  {name} [label=\"{}\"];\n", escape_label(label)));
            }
            None => out.push_str(&format!("  {name};\n")),
        }
    }
    for &(a, b) in edges {
        out.push_str(&format!("  {} -> {};\n", node_name(a), node_name(b)));
    }
    out.push_str("}\n");
    out
}

fn escape_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for ch in label.chars() {
        match ch {
            '"' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}

/// Extracts `node <name> <x> <y> ...` records from `plain` output, scaled
/// to points. Other records (`graph`, `edge`, `stop`) and malformed lines
/// are skipped; absences surface when the caller maps names back.
fn parse_plain(text: &str) -> FxHashMap<String, Point> {
    let mut points = FxHashMap::default();
    for line in text.lines() {
        let mut fields = line.split_whitespace();
        if fields.next() != Some("node") {
            continue;
        }
        let Some(name) = fields.next() else { continue };
        let Some(x) = fields.next().and_then(|f| f.parse::<f64>().ok()) else {
            continue;
        };
        let Some(y) = fields.next().and_then(|f| f.parse::<f64>().ok()) else {
            continue;
        };
        points.insert(
            name.to_string(),
            Point::new(x * POINTS_PER_INCH, y * POINTS_PER_INCH),
        );
    }
    points
}
