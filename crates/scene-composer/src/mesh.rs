//! Wireframe geometry
//!
//! Local-space vertex and edge lists for the decorative shapes. Polyhedra
//! keep only their true edges (no face diagonals), the way an edges overlay
//! would show them.

use glam::Vec3;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Default)]
pub struct Wireframe {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[u32; 2]>,
}

impl Wireframe {
    /// Icosahedron of the given circumradius, each face split into `4^detail` triangles.
    pub fn icosahedron(radius: f32, detail: u32) -> Self {
        let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let mut vertices: Vec<Vec3> = [
            [-1.0, t, 0.0],
            [1.0, t, 0.0],
            [-1.0, -t, 0.0],
            [1.0, -t, 0.0],
            [0.0, -1.0, t],
            [0.0, 1.0, t],
            [0.0, -1.0, -t],
            [0.0, 1.0, -t],
            [t, 0.0, -1.0],
            [t, 0.0, 1.0],
            [-t, 0.0, -1.0],
            [-t, 0.0, 1.0],
        ]
        .iter()
        .map(|v| Vec3::from_array(*v).normalize() * radius)
        .collect();

        let mut faces: Vec<[u32; 3]> = vec![
            [0, 11, 5],
            [0, 5, 1],
            [0, 1, 7],
            [0, 7, 10],
            [0, 10, 11],
            [1, 5, 9],
            [5, 11, 4],
            [11, 10, 2],
            [10, 7, 6],
            [7, 1, 8],
            [3, 9, 4],
            [3, 4, 2],
            [3, 2, 6],
            [3, 6, 8],
            [3, 8, 9],
            [4, 9, 5],
            [2, 4, 11],
            [6, 2, 10],
            [8, 6, 7],
            [9, 8, 1],
        ];

        for _ in 0..detail {
            let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
            let mut midpoint = |a: u32, b: u32, vertices: &mut Vec<Vec3>| -> u32 {
                let key = (a.min(b), a.max(b));
                *midpoints.entry(key).or_insert_with(|| {
                    let mid = (vertices[a as usize] + vertices[b as usize]).normalize() * radius;
                    vertices.push(mid);
                    (vertices.len() - 1) as u32
                })
            };

            let mut next = Vec::with_capacity(faces.len() * 4);
            for [a, b, c] in faces {
                let ab = midpoint(a, b, &mut vertices);
                let bc = midpoint(b, c, &mut vertices);
                let ca = midpoint(c, a, &mut vertices);
                next.extend([[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]);
            }
            faces = next;
        }

        let mut edges = BTreeSet::new();
        for [a, b, c] in faces {
            for (i, j) in [(a, b), (b, c), (c, a)] {
                edges.insert([i.min(j), i.max(j)]);
            }
        }

        Self {
            vertices,
            edges: edges.into_iter().collect(),
        }
    }

    pub fn octahedron(radius: f32) -> Self {
        let vertices = vec![
            Vec3::X * radius,
            -Vec3::X * radius,
            Vec3::Y * radius,
            -Vec3::Y * radius,
            Vec3::Z * radius,
            -Vec3::Z * radius,
        ];
        Self::convex_hull_edges(vertices)
    }

    pub fn dodecahedron(radius: f32) -> Self {
        let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let inv = 1.0 / phi;
        let mut raw = Vec::with_capacity(20);
        for x in [-1.0, 1.0] {
            for y in [-1.0, 1.0] {
                for z in [-1.0, 1.0] {
                    raw.push(Vec3::new(x, y, z));
                }
            }
        }
        for a in [-1.0, 1.0] {
            for b in [-1.0, 1.0] {
                raw.push(Vec3::new(0.0, a * inv, b * phi));
                raw.push(Vec3::new(a * inv, b * phi, 0.0));
                raw.push(Vec3::new(a * phi, 0.0, b * inv));
            }
        }
        let vertices = raw.into_iter().map(|v| v.normalize() * radius).collect();
        Self::convex_hull_edges(vertices)
    }

    /// Circle of `segments` points in the XY plane; the centre line of a thin torus.
    pub fn ring(radius: f32, segments: u32) -> Self {
        let segments = segments.max(3);
        let vertices = (0..segments)
            .map(|i| {
                let a = i as f32 / segments as f32 * std::f32::consts::TAU;
                Vec3::new(a.cos() * radius, a.sin() * radius, 0.0)
            })
            .collect();
        let edges = (0..segments).map(|i| [i, (i + 1) % segments]).collect();
        Self { vertices, edges }
    }

    /// Axis-aligned box centred on the origin.
    pub fn cuboid(size: Vec3) -> Self {
        let h = size * 0.5;
        let mut vertices = Vec::with_capacity(8);
        for x in [-h.x, h.x] {
            for y in [-h.y, h.y] {
                for z in [-h.z, h.z] {
                    vertices.push(Vec3::new(x, y, z));
                }
            }
        }
        // Vertex index bits are (x, y, z); an edge changes exactly one bit
        let mut edges = Vec::with_capacity(12);
        for i in 0..8u32 {
            for bit in [1u32, 2, 4] {
                let j = i | bit;
                if j != i {
                    edges.push([i, j]);
                }
            }
        }
        Self { vertices, edges }
    }

    /// Square grid in the XZ plane, `divisions` cells per side.
    pub fn grid(size: f32, divisions: u32) -> Self {
        let divisions = divisions.max(1);
        let half = size * 0.5;
        let step = size / divisions as f32;
        let mut vertices = Vec::new();
        let mut edges = Vec::new();
        for i in 0..=divisions {
            let k = -half + i as f32 * step;
            let base = vertices.len() as u32;
            vertices.extend([
                Vec3::new(-half, 0.0, k),
                Vec3::new(half, 0.0, k),
                Vec3::new(k, 0.0, -half),
                Vec3::new(k, 0.0, half),
            ]);
            edges.push([base, base + 1]);
            edges.push([base + 2, base + 3]);
        }
        Self { vertices, edges }
    }

    /// Lattice of `(segments + 1)²` vertices in the XY plane connected along both axes.
    pub fn plane(size: f32, segments: u32) -> Self {
        let segments = segments.max(1);
        let n = segments + 1;
        let half = size * 0.5;
        let step = size / segments as f32;
        let mut vertices = Vec::with_capacity((n * n) as usize);
        for row in 0..n {
            for col in 0..n {
                vertices.push(Vec3::new(
                    -half + col as f32 * step,
                    half - row as f32 * step,
                    0.0,
                ));
            }
        }
        let mut edges = Vec::new();
        for row in 0..n {
            for col in 0..n {
                let i = row * n + col;
                if col + 1 < n {
                    edges.push([i, i + 1]);
                }
                if row + 1 < n {
                    edges.push([i, i + n]);
                }
            }
        }
        Self { vertices, edges }
    }

    /// Connect every vertex pair at the minimum pairwise distance. Correct for
    /// regular polyhedra, whose edges are exactly their shortest chords.
    fn convex_hull_edges(vertices: Vec<Vec3>) -> Self {
        let mut shortest = f32::MAX;
        for (i, a) in vertices.iter().enumerate() {
            for b in &vertices[i + 1..] {
                shortest = shortest.min(a.distance(*b));
            }
        }

        let mut edges = Vec::new();
        for (i, a) in vertices.iter().enumerate() {
            for (j, b) in vertices.iter().enumerate().skip(i + 1) {
                if a.distance(*b) < shortest * 1.01 {
                    edges.push([i as u32, j as u32]);
                }
            }
        }
        Self { vertices, edges }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
