// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::collections::BTreeMap;

use crate::geometry::Point2;
use crate::kernel::{EPS, Orientation, circumradius2, incircle, orient2d, orientation};

pub const SQRT_3: f64 = 1.7320508075688772;

type Tri = [usize; 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Edge(usize, usize);

impl Edge {
    #[inline]
    fn new(a: usize, b: usize) -> Self {
        if a < b { Edge(a, b) } else { Edge(b, a) }
    }
}

/// Bowyer-Watson triangulation of distinct, pre-validated points, legalized
/// into the Delaunay configuration with a deterministic diagonal choice on
/// cocircular ties.
///
/// Returns canonical CCW triangles: smallest vertex first, collinear
/// triangles filtered out, the whole list sorted. Identical input therefore
/// yields an identical triangle list, independent of map iteration order.
pub(super) fn build(points: &[Point2<f64>]) -> Vec<Tri> {
    debug_assert!(points.len() >= 3);
    let mut work = points.to_vec();

    // Super-triangle containing all points
    let (minx, miny, maxx, maxy) = bbox(&work);
    let delta = (maxx - minx).max(maxy - miny);
    let cx = (minx + maxx) * 0.5;
    let cy = (miny + maxy) * 0.5;
    let r = 64.0 * delta + 1.0;

    let s0 = work.len();
    work.push(Point2::new(cx, cy + 2.0 * r));
    work.push(Point2::new(cx - SQRT_3 * r, cy - r));
    work.push(Point2::new(cx + SQRT_3 * r, cy - r));

    let mut triangles: Vec<Tri> = vec![[s0, s0 + 1, s0 + 2]];
    for pid in 0..s0 {
        insert_point(pid, &work, &mut triangles);
    }

    // Remove everything attached to the super vertices
    triangles.retain(|t| t.iter().all(|&v| v < s0));

    legalize(points, &mut triangles);

    triangles.retain(|&[a, b, c]| {
        orientation(&points[a], &points[b], &points[c], EPS) != Orientation::Collinear
    });
    for t in triangles.iter_mut() {
        *t = canonical(*t, points);
    }
    triangles.sort_unstable();
    triangles.dedup();
    triangles
}

/// Insert one point: collect triangles whose circumcircle contains it, carve
/// the cavity out, and fan the boundary edges to the new point.
fn insert_point(pid: usize, points: &[Point2<f64>], triangles: &mut Vec<Tri>) {
    let p = &points[pid];

    let mut bad: Vec<usize> = Vec::new();
    for (i, &t) in triangles.iter().enumerate() {
        if in_circumcircle(p, t, points) {
            bad.push(i);
        }
    }
    if bad.is_empty() {
        return;
    }

    // Cavity boundary edges appear exactly once
    let mut edge_count: BTreeMap<Edge, u32> = BTreeMap::new();
    for &i in &bad {
        let [a, b, c] = triangles[i];
        for e in [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)] {
            *edge_count.entry(e).or_insert(0) += 1;
        }
    }
    let boundary: Vec<Edge> = edge_count
        .into_iter()
        .filter_map(|(e, n)| (n == 1).then_some(e))
        .collect();

    // Remove in reverse to keep swap_remove indices valid
    bad.sort_unstable();
    for &i in bad.iter().rev() {
        triangles.swap_remove(i);
    }

    for e in boundary {
        let t = if orient2d(&points[e.0], &points[e.1], p) > 0.0 {
            [e.0, e.1, pid]
        } else {
            [e.0, pid, e.1]
        };
        triangles.push(t);
    }
}

fn in_circumcircle(p: &Point2<f64>, t: Tri, points: &[Point2<f64>]) -> bool {
    let [a, b, c] = t;
    // Normalize to CCW so the incircle sign is meaningful
    let (a, b, c) = if orient2d(&points[a], &points[b], &points[c]) > 0.0 {
        (a, b, c)
    } else {
        (a, c, b)
    };
    incircle(&points[a], &points[b], &points[c], p) > 0.0
}

/// Lawson sweep: flip interior edges until the empty-circumcircle property
/// holds everywhere. Cocircular ties are resolved by the fixed diagonal
/// rule, so the final configuration is unique.
fn legalize(points: &[Point2<f64>], triangles: &mut [Tri]) {
    let cap = 8 * triangles.len().max(8);
    for _ in 0..cap {
        let mut edge2tris: BTreeMap<Edge, Vec<usize>> = BTreeMap::new();
        for (ti, &[a, b, c]) in triangles.iter().enumerate() {
            for e in [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)] {
                edge2tris.entry(e).or_default().push(ti);
            }
        }

        let mut flipped = false;
        for (e, tis) in &edge2tris {
            if tis.len() != 2 {
                continue;
            }
            let (t0, t1) = (tis[0], tis[1]);
            let (Some(x), Some(y)) = (
                third_vertex(triangles[t0], e.0, e.1),
                third_vertex(triangles[t1], e.0, e.1),
            ) else {
                continue;
            };
            if x == y {
                continue;
            }
            if should_flip(points, *e, x, y) {
                triangles[t0] = oriented(points, x, y, e.0);
                triangles[t1] = oriented(points, x, y, e.1);
                flipped = true;
                break; // adjacency is stale, rebuild
            }
        }
        if !flipped {
            break;
        }
    }
}

/// Decide whether diagonal `e = (u, v)` of the quad `(u, x, v, y)` should be
/// replaced by `(x, y)`.
fn should_flip(points: &[Point2<f64>], e: Edge, x: usize, y: usize) -> bool {
    let (u, v) = (e.0, e.1);

    // Only flip inside a strictly convex quad
    let sx = orient2d(&points[u], &points[v], &points[x]);
    let sy = orient2d(&points[u], &points[v], &points[y]);
    if !((sx > EPS && sy < -EPS) || (sx < -EPS && sy > EPS)) {
        return false;
    }
    let su = orient2d(&points[x], &points[y], &points[u]);
    let sv = orient2d(&points[x], &points[y], &points[v]);
    if !((su > EPS && sv < -EPS) || (su < -EPS && sv > EPS)) {
        return false;
    }

    let (a, b, c) = if sx > 0.0 { (u, v, x) } else { (v, u, x) };
    let inc = incircle(&points[a], &points[b], &points[c], &points[y]);
    // The determinant grows with the fourth power of the coordinate scale;
    // normalize the tolerance so the decision is consistent at any scale.
    let scale = dist2(&points[a], &points[y])
        .max(dist2(&points[b], &points[y]))
        .max(dist2(&points[c], &points[y]))
        .max(1.0);
    let tol = EPS * scale * scale;
    if inc > tol {
        return true;
    }
    if inc < -tol {
        return false;
    }

    // Cocircular: prefer the diagonal minimizing the larger circumradius; an
    // exact tie goes to the lexicographically smaller index pair.
    let cur = circumradius2(&points[u], &points[v], &points[x], EPS)
        .max(circumradius2(&points[u], &points[v], &points[y], EPS));
    let alt = circumradius2(&points[x], &points[y], &points[u], EPS)
        .max(circumradius2(&points[x], &points[y], &points[v], EPS));
    if cur.is_infinite() || alt.is_infinite() {
        if alt < cur {
            return true;
        }
        if cur < alt {
            return false;
        }
    } else {
        let r_tol = EPS * cur.max(alt).max(1.0);
        if alt < cur - r_tol {
            return true;
        }
        if cur < alt - r_tol {
            return false;
        }
    }
    Edge::new(x, y) < Edge::new(u, v)
}

fn oriented(points: &[Point2<f64>], a: usize, b: usize, c: usize) -> Tri {
    if orient2d(&points[a], &points[b], &points[c]) >= 0.0 {
        [a, b, c]
    } else {
        [a, c, b]
    }
}

#[inline]
fn third_vertex(t: Tri, u: usize, v: usize) -> Option<usize> {
    let mut other = None;
    let mut count = 0;
    for w in t {
        if w != u && w != v {
            other = Some(w);
        } else {
            count += 1;
        }
    }
    if count == 2 { other } else { None }
}

/// CCW with the smallest vertex first, preserving winding.
fn canonical(t: Tri, points: &[Point2<f64>]) -> Tri {
    let [a, b, c] = t;
    let [a, b, c] = if orient2d(&points[a], &points[b], &points[c]) < 0.0 {
        [a, c, b]
    } else {
        [a, b, c]
    };
    if a < b && a < c {
        [a, b, c]
    } else if b < a && b < c {
        [b, c, a]
    } else {
        [c, a, b]
    }
}

fn dist2(p: &Point2<f64>, q: &Point2<f64>) -> f64 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    dx * dx + dy * dy
}

fn bbox(points: &[Point2<f64>]) -> (f64, f64, f64, f64) {
    let mut minx = f64::INFINITY;
    let mut miny = f64::INFINITY;
    let mut maxx = f64::NEG_INFINITY;
    let mut maxy = f64::NEG_INFINITY;
    for p in points {
        minx = minx.min(p.x);
        miny = miny.min(p.y);
        maxx = maxx.max(p.x);
        maxy = maxy.max(p.y);
    }
    (minx, miny, maxx, maxy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_points_one_triangle() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        assert_eq!(build(&points), vec![[0, 1, 2]]);
    }

    #[test]
    fn square_diagonal_is_deterministic() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        // both diagonals are Delaunay-equivalent; the lexicographic rule
        // picks (0, 2)
        assert_eq!(build(&points), vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn collinear_points_yield_nothing() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 3.0),
        ];
        assert!(build(&points).is_empty());
    }
}
