use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use steller::{
    FixedSet, ForceConfig, Layout, OneStepForceLayout, Point, PositionMap, Shape, Vertex,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Node(usize);

impl Vertex for Node {
    fn dimensions(&self) -> (f64, f64) {
        (24.0, 16.0)
    }

    fn shape(&self) -> Shape {
        if self.0.is_multiple_of(2) {
            Shape::oval()
        } else {
            Shape::rectangle()
        }
    }
}

struct Ring {
    nodes: usize,
}

impl Ring {
    fn positions(&self) -> PositionMap<Node> {
        let mut out = PositionMap::default();
        let radius = 60.0 * (self.nodes as f64).sqrt();
        for i in 0..self.nodes {
            let angle = std::f64::consts::TAU * i as f64 / self.nodes as f64;
            out.insert(
                Node(i),
                Point::new(radius * angle.cos(), radius * angle.sin()),
            );
        }
        out
    }

    fn edges(&self) -> Vec<(Node, Node)> {
        (0..self.nodes)
            .map(|i| (Node(i), Node((i + 1) % self.nodes)))
            .collect()
    }
}

fn bench_one_step(c: &mut Criterion) {
    let strategy = OneStepForceLayout::new(ForceConfig::default());
    let fixed = FixedSet::default();
    let mut group = c.benchmark_group("one_step");
    for nodes in [30, 120] {
        let ring = Ring { nodes };
        let positions = ring.positions();
        let edges = ring.edges();
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &nodes, |b, _| {
            b.iter(|| {
                let result = strategy
                    .apply(black_box(&positions), black_box(&edges), &fixed)
                    .unwrap();
                black_box(result.residual)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_one_step);
criterion_main!(benches);
