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
use crate::geometry::{MAX_POINTS, Point2, PointSet};
use crate::io::{read_f32, read_u32};

/// Format: `[u32 N] [N x (f32 x, f32 y)]`, little-endian.
pub const HEADER_LEN: usize = 4;
pub const POINT_LEN: usize = 8;

pub fn encoded_len(n: usize) -> usize {
    HEADER_LEN + n * POINT_LEN
}

pub fn encode_point_set(set: &PointSet) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(set.len()));
    buf.extend_from_slice(&(set.len() as u32).to_le_bytes());
    for p in set.points() {
        buf.extend_from_slice(&p.x.to_le_bytes());
        buf.extend_from_slice(&p.y.to_le_bytes());
    }
    buf
}

/// Decode a point set occupying the whole buffer.
pub fn decode_point_set(buf: &[u8]) -> Result<PointSet, TriangulatorError> {
    let (set, consumed) = decode_prefix(buf)?;
    if consumed < buf.len() {
        return Err(TriangulatorError::TrailingData {
            extra: buf.len() - consumed,
        });
    }
    Ok(set)
}

/// Decode a point set occupying a prefix of `buf`; returns the set and the
/// bytes consumed. The triangle codec uses this for its vertex block; exact
/// length enforcement stays with the caller.
pub(crate) fn decode_prefix(buf: &[u8]) -> Result<(PointSet, usize), TriangulatorError> {
    if buf.len() < HEADER_LEN {
        return Err(TriangulatorError::Truncated {
            expected: HEADER_LEN,
            actual: buf.len(),
        });
    }
    let n = read_u32(buf, 0) as usize;
    // Bound the declared count before allocating anything proportional to it.
    if n > MAX_POINTS {
        return Err(TriangulatorError::SizeViolation {
            count: n,
            max: MAX_POINTS,
        });
    }
    let total = encoded_len(n);
    if buf.len() < total {
        return Err(TriangulatorError::Truncated {
            expected: total,
            actual: buf.len(),
        });
    }

    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let at = HEADER_LEN + i * POINT_LEN;
        points.push(Point2::new(read_f32(buf, at), read_f32(buf, at + 4)));
    }
    Ok((PointSet::new(points)?, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_size_matches_header_plus_points() {
        let set = PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]).unwrap();
        assert_eq!(encode_point_set(&set).len(), 28);
    }

    #[test]
    fn count_prefix_is_little_endian() {
        let set = PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]).unwrap();
        assert_eq!(&encode_point_set(&set)[..4], &[3, 0, 0, 0]);
    }
}
