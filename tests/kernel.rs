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

use triangulator::geometry::Point2;
use triangulator::kernel::{
    EPS, Orientation, are_collinear, are_equal, incircle, orient2d, orientation,
};

#[test]
fn test_orient2d() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1.0, 0.0);
    let c = Point2::new(0.0, 1.0);

    assert!(orient2d(&a, &b, &c) > 0.0);
    assert!(orient2d(&a, &c, &b) < 0.0);
}

#[test]
fn test_orientation_enum() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1.0, 0.0);

    assert_eq!(
        orientation(&a, &b, &Point2::new(0.5, 1.0), EPS),
        Orientation::CounterClockwise
    );
    assert_eq!(
        orientation(&a, &b, &Point2::new(0.5, -1.0), EPS),
        Orientation::Clockwise
    );
    assert_eq!(
        orientation(&a, &b, &Point2::new(2.0, 0.0), EPS),
        Orientation::Collinear
    );
}

#[test]
fn test_are_equal() {
    let a = Point2::new(1.0, 2.0);
    let b = Point2::new(1.0 + EPS / 2.0, 2.0);
    let c = Point2::new(1.0 + EPS * 10.0, 2.0);

    assert!(are_equal(&a, &b, EPS));
    assert!(!are_equal(&a, &c, EPS));
}

#[test]
fn test_are_collinear() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1.0, 1.0);

    assert!(are_collinear(&a, &b, &Point2::new(2.0, 2.0), EPS));
    assert!(!are_collinear(&a, &b, &Point2::new(2.0, 2.000001), EPS));
}

#[test]
fn test_incircle() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(2.0, 0.0);
    let c = Point2::new(0.0, 2.0);

    assert!(incircle(&a, &b, &c, &Point2::new(1.0, 1.0)) > 0.0);
    assert!(incircle(&a, &b, &c, &Point2::new(5.0, 5.0)) < 0.0);
}

#[test]
fn orientation_at_extreme_magnitude() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1e30, 0.0);
    let c = Point2::new(0.0, 1e30);

    assert_eq!(orientation(&a, &b, &c, EPS), Orientation::CounterClockwise);

    let d = Point2::new(2e30, 0.0);
    assert_eq!(orientation(&a, &b, &d, EPS), Orientation::Collinear);
}

#[test]
fn widening_is_exact() {
    let p = Point2::new(0.1f32, -3.25f32);
    let q = p.to_f64();

    assert_eq!(q.x, f64::from(0.1f32));
    assert_eq!(q.y, -3.25);
}
