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

use thiserror::Error;

/// One variant per failure mode, so the boundary layer can pick the right
/// status code without string matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TriangulatorError {
    #[error("non-finite coordinate at point index {index}")]
    InvalidCoordinate { index: usize },

    #[error("count {count} outside allowed bounds (max {max})")]
    SizeViolation { count: usize, max: usize },

    #[error("binary data truncated: need {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("{extra} trailing bytes after encoded payload")]
    TrailingData { extra: usize },

    #[error("triangle vertex index {index} out of range for {len} points")]
    IndexOutOfRange { index: u32, len: usize },

    #[error("point set is empty")]
    EmptyInput,

    /// Invariant violation inside the engine or a decoded triangle with a
    /// repeated vertex. Unreachable from engine output unless the engine
    /// itself is defective.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
}
