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

use triangulator::TriangulatorError;
use triangulator::geometry::PointSet;
use triangulator::io::{decode_triangle_set, encode_point_set};
use triangulator::service::{
    FetchError, InMemoryPointSetManager, PointSetManager, ServiceError, TriangulationService,
};

/// Stand-in for an unhealthy upstream manager.
struct FailingManager(FetchError);

impl PointSetManager for FailingManager {
    fn store_point_set(&self, _set: PointSet) -> Result<String, FetchError> {
        Err(self.0.clone())
    }

    fn fetch_point_set(&self, _id: &str) -> Result<PointSet, FetchError> {
        Err(self.0.clone())
    }
}

fn square_payload() -> Vec<u8> {
    let set =
        PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
    encode_point_set(&set)
}

#[test]
fn register_fetch_triangulate_workflow() {
    let service = TriangulationService::new(InMemoryPointSetManager::new());
    let payload = square_payload();

    let id = service.register_point_set(&payload).unwrap();
    assert_eq!(service.point_set(&id).unwrap(), payload);

    let result = decode_triangle_set(&service.triangulation(&id).unwrap()).unwrap();
    assert_eq!(encode_point_set(result.point_set()), payload);
    assert_eq!(result.triangles().len(), 2);
}

#[test]
fn unknown_id_maps_to_404() {
    let service = TriangulationService::new(InMemoryPointSetManager::new());
    let err = service.triangulation("ps-ffffffff").unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(err.status(), 404);
}

#[test]
fn unsafe_ids_are_rejected_before_lookup() {
    let service = TriangulationService::new(InMemoryPointSetManager::new());
    for id in ["", "../secret", "a/b", "a\\b"] {
        let err = service.triangulation(id).unwrap_err();
        assert_eq!(err, ServiceError::InvalidId);
        assert_eq!(err.status(), 400);
    }
}

#[test]
fn malformed_payload_maps_to_400() {
    let service = TriangulationService::new(InMemoryPointSetManager::new());

    let mut nan_payload = 1u32.to_le_bytes().to_vec();
    nan_payload.extend_from_slice(&f32::NAN.to_le_bytes());
    nan_payload.extend_from_slice(&0.0f32.to_le_bytes());
    let err = service.register_point_set(&nan_payload).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidInput(TriangulatorError::InvalidCoordinate { .. })
    ));
    assert_eq!(err.status(), 400);

    let payload = square_payload();
    let err = service.register_point_set(&payload[..10]).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidInput(TriangulatorError::Truncated { .. })
    ));
    assert_eq!(err.status(), 400);
}

#[test]
fn empty_point_set_triangulation_maps_to_400() {
    let service = TriangulationService::new(InMemoryPointSetManager::new());
    let empty = encode_point_set(&PointSet::new(Vec::new()).unwrap());

    let id = service.register_point_set(&empty).unwrap();
    let err = service.triangulation(&id).unwrap_err();
    assert_eq!(
        err,
        ServiceError::InvalidInput(TriangulatorError::EmptyInput)
    );
    assert_eq!(err.status(), 400);
}

#[test]
fn unavailable_dependency_maps_to_503() {
    let service = TriangulationService::new(FailingManager(FetchError::Unavailable));
    let err = service.triangulation("ps-00000000").unwrap_err();
    assert_eq!(err, ServiceError::Unavailable);
    assert_eq!(err.status(), 503);
}

#[test]
fn dependency_timeout_maps_to_504() {
    let service = TriangulationService::new(FailingManager(FetchError::Timeout));
    let err = service.triangulation("ps-00000000").unwrap_err();
    assert_eq!(err, ServiceError::Timeout);
    assert_eq!(err.status(), 504);
}
