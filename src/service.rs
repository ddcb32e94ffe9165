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

//! Contract with the surrounding service layer. No transport lives here:
//! operations take and return byte payloads, and every error carries the
//! status code the boundary should answer with.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tracing::{info, warn};

use crate::error::TriangulatorError;
use crate::geometry::PointSet;
use crate::io::{decode_point_set, encode_point_set, encode_triangle_set};
use crate::operations::triangulate;

/// Upstream point-set storage. Injected so tests can substitute a failing
/// implementation without any network dependency.
pub trait PointSetManager {
    fn store_point_set(&self, set: PointSet) -> Result<String, FetchError>;
    fn fetch_point_set(&self, id: &str) -> Result<PointSet, FetchError>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("point set {0} not found")]
    NotFound(String),
    #[error("point-set storage unavailable")]
    Unavailable,
    #[error("point-set storage timed out")]
    Timeout,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("invalid point-set identifier")]
    InvalidId,
    #[error("invalid input: {0}")]
    InvalidInput(TriangulatorError),
    #[error("point set {0} not found")]
    NotFound(String),
    #[error("triangulation fault: {0}")]
    Internal(TriangulatorError),
    #[error("dependency unavailable")]
    Unavailable,
    #[error("dependency timeout")]
    Timeout,
}

impl ServiceError {
    /// HTTP status the boundary layer responds with.
    pub fn status(&self) -> u16 {
        match self {
            ServiceError::InvalidId | ServiceError::InvalidInput(_) => 400,
            ServiceError::NotFound(_) => 404,
            ServiceError::Internal(_) => 500,
            ServiceError::Unavailable => 503,
            ServiceError::Timeout => 504,
        }
    }
}

impl From<FetchError> for ServiceError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound(id) => ServiceError::NotFound(id),
            FetchError::Unavailable => ServiceError::Unavailable,
            FetchError::Timeout => ServiceError::Timeout,
        }
    }
}

impl From<TriangulatorError> for ServiceError {
    fn from(err: TriangulatorError) -> Self {
        match err {
            // An engine invariant violation is a fault on our side, not a
            // problem with the request.
            TriangulatorError::DegenerateGeometry(_) => ServiceError::Internal(err),
            _ => ServiceError::InvalidInput(err),
        }
    }
}

/// In-memory storage, the stub the real PointSetManager replaces in
/// production.
#[derive(Debug, Default)]
pub struct InMemoryPointSetManager {
    storage: Mutex<HashMap<String, PointSet>>,
    next_id: AtomicU64,
}

impl InMemoryPointSetManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PointSetManager for InMemoryPointSetManager {
    fn store_point_set(&self, set: PointSet) -> Result<String, FetchError> {
        let id = format!("ps-{:08x}", self.next_id.fetch_add(1, Ordering::Relaxed));
        self.storage
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(id.clone(), set);
        Ok(id)
    }

    fn fetch_point_set(&self, id: &str) -> Result<PointSet, FetchError> {
        self.storage
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(id.to_string()))
    }
}

/// The three operations of the service, over byte payloads.
pub struct TriangulationService<M: PointSetManager> {
    manager: M,
}

impl<M: PointSetManager> TriangulationService<M> {
    pub fn new(manager: M) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &M {
        &self.manager
    }

    /// Decode, validate and store a point set; returns its identifier.
    pub fn register_point_set(&self, payload: &[u8]) -> Result<String, ServiceError> {
        let set = decode_point_set(payload)?;
        let id = self.manager.store_point_set(set)?;
        info!(id = %id, "point set registered");
        Ok(id)
    }

    /// Fetch a stored point set, re-encoded.
    pub fn point_set(&self, id: &str) -> Result<Vec<u8>, ServiceError> {
        check_id(id)?;
        let set = self.manager.fetch_point_set(id)?;
        Ok(encode_point_set(&set))
    }

    /// Fetch a stored point set, triangulate it and encode the result.
    pub fn triangulation(&self, id: &str) -> Result<Vec<u8>, ServiceError> {
        check_id(id)?;
        let set = self.manager.fetch_point_set(id)?;
        let result = triangulate(&set)?;
        info!(id = %id, triangles = result.triangles().len(), "triangulation served");
        Ok(encode_triangle_set(&result))
    }
}

/// Identifiers never reach storage with path separators in them.
fn check_id(id: &str) -> Result<(), ServiceError> {
    if id.is_empty() || id.contains('/') || id.contains('\\') {
        warn!(id = %id, "rejecting unsafe identifier");
        return Err(ServiceError::InvalidId);
    }
    Ok(())
}
