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

use tracing::warn;

use crate::error::TriangulatorError;
use crate::geometry::Point2;

/// Upper bound on the number of points in a set. Guards decode against
/// oversized headers before anything is allocated.
pub const MAX_POINTS: usize = 1_000_000;

/// An ordered, validated sequence of points. Order is preserved end-to-end:
/// triangles reference points by index. Construction is the only validation
/// gate, so a `PointSet` never holds a non-finite coordinate.
///
/// Duplicates are allowed here; merging them is triangulation policy, not a
/// property of the data.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Point2<f32>>,
}

impl PointSet {
    pub fn new(points: Vec<Point2<f32>>) -> Result<Self, TriangulatorError> {
        if points.len() > MAX_POINTS {
            return Err(TriangulatorError::SizeViolation {
                count: points.len(),
                max: MAX_POINTS,
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            warn!(index, "rejecting point set with non-finite coordinate");
            return Err(TriangulatorError::InvalidCoordinate { index });
        }
        Ok(Self { points })
    }

    pub fn from_coords(coords: &[(f32, f32)]) -> Result<Self, TriangulatorError> {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    pub fn points(&self) -> &[Point2<f32>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nan() {
        let err = PointSet::from_coords(&[(0.0, 0.0), (f32::NAN, 1.0)]).unwrap_err();
        assert_eq!(err, TriangulatorError::InvalidCoordinate { index: 1 });
    }

    #[test]
    fn rejects_infinity() {
        let err = PointSet::from_coords(&[(f32::INFINITY, 0.0)]).unwrap_err();
        assert_eq!(err, TriangulatorError::InvalidCoordinate { index: 0 });
    }

    #[test]
    fn empty_set_is_valid() {
        let set = PointSet::new(Vec::new()).unwrap();
        assert!(set.is_empty());
    }
}
