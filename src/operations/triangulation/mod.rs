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

use tracing::debug;

use crate::error::TriangulatorError;
use crate::geometry::{Point2, PointSet, Triangle, TriangleSet};
use crate::kernel::{EPS, Orientation, are_equal, orientation};

pub mod delaunay;

/// Triangulate a validated point set.
///
/// Policy:
/// - an empty set is an error; fewer than 3 points is an empty result;
/// - duplicates under the kernel tolerance are merged, first occurrence
///   wins, and only first-occurrence indices appear in the output;
/// - the returned value embeds the full input set, all points retained;
/// - every emitted triangle is index-distinct, in range and not collinear
///   under the tolerance.
///
/// Stateless and re-entrant; identical inputs produce bit-identical output.
pub fn triangulate(set: &PointSet) -> Result<TriangleSet, TriangulatorError> {
    if set.is_empty() {
        return Err(TriangulatorError::EmptyInput);
    }
    if set.len() < 3 {
        return TriangleSet::new(set.clone(), Vec::new());
    }

    let distinct = dedup_first_wins(set.points());
    if distinct.len() < 3 {
        debug!(
            total = set.len(),
            distinct = distinct.len(),
            "fewer than 3 distinct points, nothing to triangulate"
        );
        return TriangleSet::new(set.clone(), Vec::new());
    }

    let local: Vec<Point2<f64>> = distinct.iter().map(|&i| set.points()[i].to_f64()).collect();
    let triangles: Vec<Triangle> = delaunay::build(&local)
        .into_iter()
        .map(|[a, b, c]| {
            Triangle(
                distinct[a] as u32,
                distinct[b] as u32,
                distinct[c] as u32,
            )
        })
        .collect();

    audit(set, &triangles)?;
    debug!(
        points = set.len(),
        distinct = distinct.len(),
        triangles = triangles.len(),
        "triangulation complete"
    );
    TriangleSet::new(set.clone(), triangles)
}

/// First-occurrence-wins dedup under the kernel tolerance. Returns the
/// original indices of the representatives, in input order.
fn dedup_first_wins(points: &[Point2<f32>]) -> Vec<usize> {
    let mut reps: Vec<usize> = Vec::new();
    for (i, p) in points.iter().enumerate() {
        let p = p.to_f64();
        if !reps
            .iter()
            .any(|&r| are_equal(&points[r].to_f64(), &p, EPS))
        {
            reps.push(i);
        }
    }
    reps
}

/// Output invariant check. A violation here is a defect in the engine, not
/// bad input, so it surfaces as `DegenerateGeometry` instead of being
/// silently dropped.
fn audit(set: &PointSet, triangles: &[Triangle]) -> Result<(), TriangulatorError> {
    let points = set.points();
    for t in triangles {
        let [i, j, k] = t.indices();
        if [i, j, k].iter().any(|&v| v as usize >= points.len()) {
            return Err(TriangulatorError::DegenerateGeometry(
                "triangle index out of range",
            ));
        }
        if t.has_repeated_vertex() {
            return Err(TriangulatorError::DegenerateGeometry(
                "triangle with repeated vertex",
            ));
        }
        let (a, b, c) = (
            points[i as usize].to_f64(),
            points[j as usize].to_f64(),
            points[k as usize].to_f64(),
        );
        if orientation(&a, &b, &c, EPS) == Orientation::Collinear {
            return Err(TriangulatorError::DegenerateGeometry(
                "collinear triangle emitted",
            ));
        }
    }
    Ok(())
}
