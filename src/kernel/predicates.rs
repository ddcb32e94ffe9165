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

use num_traits::Float;

use crate::geometry::Point2;
use crate::kernel::orientation::{Orientation, orientation};

/// Coordinate-wise equality under `eps`.
pub fn are_equal<T>(p1: &Point2<T>, p2: &Point2<T>, eps: T) -> bool
where
    T: Float,
{
    (p1.x - p2.x).abs() <= eps && (p1.y - p2.y).abs() <= eps
}

pub fn are_collinear<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, eps: T) -> bool
where
    T: Float,
{
    orientation(a, b, c, eps) == Orientation::Collinear
}

/// Incircle determinant. `(a, b, c)` must be counter-clockwise; the result is
/// positive when `d` lies strictly inside their circumcircle, negative when
/// strictly outside, near zero when the four points are cocircular.
pub fn incircle<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, d: &Point2<T>) -> T
where
    T: Float,
{
    let adx = a.x - d.x;
    let ady = a.y - d.y;
    let bdx = b.x - d.x;
    let bdy = b.y - d.y;
    let cdx = c.x - d.x;
    let cdy = c.y - d.y;

    let alift = adx * adx + ady * ady;
    let blift = bdx * bdx + bdy * bdy;
    let clift = cdx * cdx + cdy * cdy;

    adx * (bdy * clift - blift * cdy) - ady * (bdx * clift - blift * cdx)
        + alift * (bdx * cdy - bdy * cdx)
}

/// Squared circumradius of triangle `(a, b, c)`; infinite when the triangle
/// is degenerate under `eps`. Used to rank diagonals on cocircular ties.
pub fn circumradius2<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, eps: T) -> T
where
    T: Float,
{
    let cross = crate::kernel::orient2d(a, b, c);
    if cross.abs() <= eps {
        return T::infinity();
    }
    let four = (T::one() + T::one()) * (T::one() + T::one());
    dist2(a, b) * dist2(b, c) * dist2(c, a) / (four * cross * cross)
}

fn dist2<T>(p: &Point2<T>, q: &Point2<T>) -> T
where
    T: Float,
{
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    dx * dx + dy * dy
}
