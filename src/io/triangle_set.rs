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
use crate::geometry::{MAX_TRIANGLES, Triangle, TriangleSet};
use crate::io::point_set::{decode_prefix, encode_point_set};
use crate::io::read_u32;

/// Format: `[point-set block] [u32 T] [T x (u32 i, u32 j, u32 k)]`.
pub const COUNT_LEN: usize = 4;
pub const TRIANGLE_LEN: usize = 12;

pub fn encode_triangle_set(set: &TriangleSet) -> Vec<u8> {
    let mut buf = encode_point_set(set.point_set());
    buf.reserve(COUNT_LEN + set.triangles().len() * TRIANGLE_LEN);
    buf.extend_from_slice(&(set.triangles().len() as u32).to_le_bytes());
    for t in set.triangles() {
        for index in t.indices() {
            buf.extend_from_slice(&index.to_le_bytes());
        }
    }
    buf
}

pub fn decode_triangle_set(buf: &[u8]) -> Result<TriangleSet, TriangulatorError> {
    let (points, consumed) = decode_prefix(buf)?;

    let rest = &buf[consumed..];
    if rest.len() < COUNT_LEN {
        return Err(TriangulatorError::Truncated {
            expected: consumed + COUNT_LEN,
            actual: buf.len(),
        });
    }
    let t = read_u32(rest, 0) as usize;
    if t > MAX_TRIANGLES {
        return Err(TriangulatorError::SizeViolation {
            count: t,
            max: MAX_TRIANGLES,
        });
    }
    let total = COUNT_LEN + t * TRIANGLE_LEN;
    if rest.len() < total {
        return Err(TriangulatorError::Truncated {
            expected: consumed + total,
            actual: buf.len(),
        });
    }
    if rest.len() > total {
        return Err(TriangulatorError::TrailingData {
            extra: rest.len() - total,
        });
    }

    let mut triangles = Vec::with_capacity(t);
    for i in 0..t {
        let at = COUNT_LEN + i * TRIANGLE_LEN;
        triangles.push(Triangle(
            read_u32(rest, at),
            read_u32(rest, at + 4),
            read_u32(rest, at + 8),
        ));
    }

    // Index range and vertex distinctness are enforced by the constructor.
    TriangleSet::new(points, triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PointSet;

    #[test]
    fn encoded_size_matches_both_blocks() {
        let points = PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]).unwrap();
        let set = TriangleSet::new(points, vec![Triangle(0, 1, 2)]).unwrap();
        // 4 + 3*8 point bytes, then 4 + 1*12 triangle bytes
        assert_eq!(encode_triangle_set(&set).len(), 44);
    }
}
