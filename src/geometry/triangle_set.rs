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

use crate::error::TriangulatorError;
use crate::geometry::{MAX_POINTS, PointSet};

/// Upper bound on the triangle count of a decoded payload. A planar
/// triangulation of n points has fewer than 2n triangles.
pub const MAX_TRIANGLES: usize = 2 * MAX_POINTS;

/// Three indices into the owning point set, pairwise distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle(pub u32, pub u32, pub u32);

impl Triangle {
    pub fn indices(&self) -> [u32; 3] {
        [self.0, self.1, self.2]
    }

    pub fn has_repeated_vertex(&self) -> bool {
        self.0 == self.1 || self.1 == self.2 || self.0 == self.2
    }
}

/// A point set together with a triangulation of it. The embedded set is
/// exactly the one the triangles index into, so a decoded value round-trips
/// identically.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleSet {
    point_set: PointSet,
    triangles: Vec<Triangle>,
}

impl TriangleSet {
    /// Every index must resolve against `point_set` and no triangle may
    /// repeat a vertex. Collinearity is the engine's invariant, not checked
    /// here.
    pub fn new(point_set: PointSet, triangles: Vec<Triangle>) -> Result<Self, TriangulatorError> {
        if triangles.len() > MAX_TRIANGLES {
            return Err(TriangulatorError::SizeViolation {
                count: triangles.len(),
                max: MAX_TRIANGLES,
            });
        }
        let len = point_set.len();
        for t in &triangles {
            for index in t.indices() {
                if index as usize >= len {
                    return Err(TriangulatorError::IndexOutOfRange { index, len });
                }
            }
            if t.has_repeated_vertex() {
                return Err(TriangulatorError::DegenerateGeometry(
                    "triangle with repeated vertex",
                ));
            }
        }
        Ok(Self {
            point_set,
            triangles,
        })
    }

    pub fn point_set(&self) -> &PointSet {
        &self.point_set
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}
