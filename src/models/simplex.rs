use crate::intersections::{cross_product, dot_product, negate_vector};

/// A 3D simplex (tetrahedron) used as the GJK search structure
///
/// Always holds exactly 4 points; refinement replaces one vertex at a time.
/// Each in-progress intersection test owns its simplex exclusively.
#[derive(Debug, Clone)]
pub struct Tetrahedron {
    pub points: [(f64, f64, f64); 4],
}

/// Closest point to `p` on triangle (a, b, c), via the vertex/edge/face
/// Voronoi-region walk.
fn closest_point_on_triangle(
    p: (f64, f64, f64),
    a: (f64, f64, f64),
    b: (f64, f64, f64),
    c: (f64, f64, f64),
) -> (f64, f64, f64) {
    let ab = (b.0 - a.0, b.1 - a.1, b.2 - a.2);
    let ac = (c.0 - a.0, c.1 - a.1, c.2 - a.2);
    let ap = (p.0 - a.0, p.1 - a.1, p.2 - a.2);

    let d1 = dot_product(ab, ap);
    let d2 = dot_product(ac, ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return a;
    }

    let bp = (p.0 - b.0, p.1 - b.1, p.2 - b.2);
    let d3 = dot_product(ab, bp);
    let d4 = dot_product(ac, bp);
    if d3 >= 0.0 && d4 <= d3 {
        return b;
    }

    let cp = (p.0 - c.0, p.1 - c.1, p.2 - c.2);
    let d5 = dot_product(ab, cp);
    let d6 = dot_product(ac, cp);
    if d6 >= 0.0 && d5 <= d6 {
        return c;
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return (a.0 + v * ab.0, a.1 + v * ab.1, a.2 + v * ab.2);
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return (a.0 + w * ac.0, a.1 + w * ac.1, a.2 + w * ac.2);
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return (b.0 + w * (c.0 - b.0), b.1 + w * (c.1 - b.1), b.2 + w * (c.2 - b.2));
    }

    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    (
        a.0 + v * ab.0 + w * ac.0,
        a.1 + v * ab.1 + w * ac.1,
        a.2 + v * ab.2 + w * ac.2,
    )
}

impl Tetrahedron {
    pub fn new(a: (f64, f64, f64), b: (f64, f64, f64), c: (f64, f64, f64), d: (f64, f64, f64)) -> Self {
        Self { points: [a, b, c, d] }
    }

    /// True if the origin and the opposite vertex are on the same side of
    /// face (a, b, c). An origin exactly on the face plane counts as inside;
    /// the anti-touching bias lives in the tester's progress checks, not
    /// here.
    fn same_side(a: (f64, f64, f64), b: (f64, f64, f64), c: (f64, f64, f64), d: (f64, f64, f64)) -> bool {
        let normal = cross_product(
            (b.0 - a.0, b.1 - a.1, b.2 - a.2),
            (c.0 - a.0, c.1 - a.1, c.2 - a.2),
        );
        let dot_v4 = dot_product(normal, (d.0 - a.0, d.1 - a.1, d.2 - a.2));
        let dot_origin = dot_product(normal, negate_vector(a));

        dot_v4 * dot_origin >= 0.0
    }

    /// True if the tetrahedron contains the origin: the origin must be on the
    /// inner side of all four faces.
    pub fn contains_origin(&self) -> bool {
        let [a, b, c, d] = self.points;

        Self::same_side(a, b, c, d)
            && Self::same_side(b, c, d, a)
            && Self::same_side(c, d, a, b)
            && Self::same_side(d, a, b, c)
    }

    /// Outward normal of the face closest to the origin, along with the index
    /// of the vertex opposite that face (the one a refinement step replaces).
    ///
    /// Faces whose plane has the origin on the inner side cannot be closest
    /// and are skipped via a sentinel distance. The returned normal is not
    /// normalized.
    pub fn closest_face_to_origin(&self) -> ((f64, f64, f64), usize) {
        let p = &self.points;

        // Normal of the face opposite vertex i
        let mut normals = [
            cross_product(
                (p[2].0 - p[1].0, p[2].1 - p[1].1, p[2].2 - p[1].2),
                (p[3].0 - p[1].0, p[3].1 - p[1].1, p[3].2 - p[1].2),
            ),
            cross_product(
                (p[2].0 - p[0].0, p[2].1 - p[0].1, p[2].2 - p[0].2),
                (p[3].0 - p[0].0, p[3].1 - p[0].1, p[3].2 - p[0].2),
            ),
            cross_product(
                (p[3].0 - p[0].0, p[3].1 - p[0].1, p[3].2 - p[0].2),
                (p[1].0 - p[0].0, p[1].1 - p[0].1, p[1].2 - p[0].2),
            ),
            cross_product(
                (p[2].0 - p[0].0, p[2].1 - p[0].1, p[2].2 - p[0].2),
                (p[1].0 - p[0].0, p[1].1 - p[0].1, p[1].2 - p[0].2),
            ),
        ];

        // Flip each normal away from its opposite vertex
        for i in 0..4 {
            let face_vertex = p[(i + 1) % 4];
            let toward_opposite = (
                p[i].0 - face_vertex.0,
                p[i].1 - face_vertex.1,
                p[i].2 - face_vertex.2,
            );

            if dot_product(normals[i], toward_opposite) > 0.0 {
                normals[i] = negate_vector(normals[i]);
            }
        }

        let mut distances = [0.0_f64; 4];

        for i in 0..4 {
            if dot_product(p[(i + 1) % 4], normals[i]) > 0.0 {
                // Origin is on the inner side of this face's plane
                distances[i] = f64::MAX;
            } else {
                let closest = closest_point_on_triangle(
                    (0.0, 0.0, 0.0),
                    p[(i + 1) % 4],
                    p[(i + 2) % 4],
                    p[(i + 3) % 4],
                );
                distances[i] = dot_product(closest, closest);
            }
        }

        let mut best = 0;
        for i in 1..4 {
            if distances[i] < distances[best] {
                best = i;
            }
        }

        (normals[best], best)
    }

    /// True if `vertex` coincides (within `epsilon` squared distance) with
    /// any existing simplex vertex.
    pub fn contains_vertex(&self, vertex: (f64, f64, f64), epsilon: f64) -> bool {
        self.points.iter().any(|point| {
            let diff = (point.0 - vertex.0, point.1 - vertex.1, point.2 - vertex.2);
            dot_product(diff, diff) < epsilon
        })
    }
}
