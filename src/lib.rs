//! # Trowel
//!
//! Trowel computes [Delaunay triangulations](https://en.wikipedia.org/wiki/Delaunay_triangulation)
//! of planar point sets with the incremental
//! [Bowyer-Watson algorithm](https://en.wikipedia.org/wiki/Bowyer%E2%80%93Watson_algorithm):
//! the result contains no point inside the circumcircle of any triangle it is
//! not a vertex of. Delaunay triangulations are a common building block for
//! mesh generation, terrain modeling and spatial interpolation.
//!
//! [triangulate] is a pure function - it holds no state across calls, so
//! interactive callers can simply re-triangulate their current point set
//! whenever it changes.
//!
//! # Example
//! ```
//! use trowel::{triangulate, Point2};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(10.0, 10.0),
//!     Point2::new(30.0, 10.0),
//!     Point2::new(30.0, 30.0),
//!     Point2::new(10.0, 30.0),
//! ];
//!
//! let triangulation = triangulate(&points);
//!
//! // A square is split into two triangles along one of its diagonals
//! assert_eq!(triangulation.triangles.len(), 2);
//! for triangle in &triangulation.triangles {
//!     // Each triangle exposes its vertices, edges and circumcircle
//!     let circumcircle = triangle.circumcircle();
//!     for vertex in triangle.vertices() {
//!         let distance_2 = circumcircle.center.distance_2(vertex);
//!         assert!((distance_2 - circumcircle.radius_2).abs() < 1.0e-9);
//!     }
//! }
//! ```
//!
//! # Limitations
//! Trowel trades robustness for simplicity: in-circumcircle checks use a
//! fixed tolerance instead of exact arithmetic, and collinear or coincident
//! vertices produce triangles with non-finite circumcircles that silently
//! drop out of all containment checks. Inputs with fewer than three points
//! yield an empty result. If these trade-offs don't fit your use case,
//! consider a robust implementation such as the `spade` crate.

#![warn(missing_docs)]

mod point;
mod primitives;
mod triangulation;
mod validation;

#[cfg(test)]
mod test_utilities;

pub use point::{Point2, TrowelNum};
pub use primitives::{Circle, Edge, Triangle};
pub use triangulation::{triangulate, Triangulation};
pub use validation::{validate_coordinate, validate_point, ValidationError};
