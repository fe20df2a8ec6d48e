//! The Bowyer-Watson triangulation driver.

use smallvec::SmallVec;

use crate::{Edge, Point2, Triangle, TrowelNum};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of triangulating a set of points.
///
/// Produced by [triangulate]. The result borrows nothing from its input and
/// holds no state, repeated calls with the same input produce structurally
/// identical results.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Triangulation<S> {
    /// The triangles of the triangulation.
    pub triangles: Vec<Triangle<S>>,
    /// All edges of all triangles, in triangle order.
    ///
    /// This list is *not* deduplicated: an edge shared by two adjacent
    /// triangles appears twice. Callers drawing the triangulation usually
    /// don't care, callers that do can dedup with [Edge]'s order-insensitive
    /// equality.
    pub edges: Vec<Edge<S>>,
}

impl<S> Default for Triangulation<S> {
    fn default() -> Self {
        Triangulation {
            triangles: Vec::new(),
            edges: Vec::new(),
        }
    }
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Uses the incremental [Bowyer-Watson algorithm](https://en.wikipedia.org/wiki/Bowyer%E2%80%93Watson_algorithm):
/// a synthetic triangle enclosing all input points seeds the triangulation,
/// points are then inserted one by one. Each insertion removes the triangles
/// whose circumcircle contains the new point and re-triangulates the boundary
/// of the resulting cavity against it. The synthetic triangle's corners and
/// every triangle touching them are stripped from the result.
///
/// Fewer than three input points yield an empty triangulation. Duplicate or
/// collinear points are not rejected; they can produce degenerate triangles
/// with non-finite circumcircles (see [Triangle::new]).
///
/// # Example
/// ```
/// use trowel::{triangulate, Point2};
///
/// let points = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
/// ];
/// let triangulation = triangulate(&points);
/// assert_eq!(triangulation.triangles.len(), 1);
/// assert_eq!(triangulation.edges.len(), 3);
/// ```
pub fn triangulate<S: TrowelNum>(points: &[Point2<S>]) -> Triangulation<S> {
    if points.len() < 3 {
        return Triangulation::default();
    }

    let mut min = points[0];
    let mut max = points[0];
    for point in points {
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
    }

    // The super triangle's margin of 20 * dmax is a heuristic. It encloses
    // all input points for well conditioned inputs but is not proven
    // sufficient for pathological distributions.
    let two = S::one() + S::one();
    let twenty: S = 20.0f32.into();
    let dmax = (max.x - min.x).max(max.y - min.y);
    let midx = (min.x + max.x) / two;
    let midy = (min.y + max.y) / two;

    let s0 = Point2::new(midx - twenty * dmax, midy - dmax);
    let s1 = Point2::new(midx, midy + twenty * dmax);
    let s2 = Point2::new(midx + twenty * dmax, midy - dmax);

    let mut triangles = vec![Triangle::new(s0, s1, s2)];

    for &point in points {
        let mut cavity_edges: SmallVec<[Edge<S>; 24]> = SmallVec::new();
        let mut next_triangles = Vec::with_capacity(triangles.len());

        for triangle in triangles.drain(..) {
            if triangle.circumcircle_contains(point) {
                cavity_edges.extend(triangle.edges());
            } else {
                next_triangles.push(triangle);
            }
        }

        for edge in boundary_edges(&cavity_edges) {
            next_triangles.push(Triangle::new(edge.from, edge.to, point));
        }

        triangles = next_triangles;
    }

    triangles.retain(|triangle| {
        !triangle.has_vertex(s0) && !triangle.has_vertex(s1) && !triangle.has_vertex(s2)
    });

    let mut edges = Vec::with_capacity(triangles.len() * 3);
    for triangle in &triangles {
        edges.extend(triangle.edges());
    }

    Triangulation { triangles, edges }
}

/// Yields the edges that occur exactly once in `edges`.
///
/// An edge shared between two removed triangles is interior to the cavity and
/// must not become part of the new triangulation; the edges occurring once
/// form the cavity boundary. In a valid triangle mesh no edge occurs more than
/// twice, so a pairwise scan suffices.
fn boundary_edges<S: TrowelNum>(edges: &[Edge<S>]) -> impl Iterator<Item = Edge<S>> + '_ {
    edges.iter().enumerate().filter_map(|(index, edge)| {
        let is_shared = edges
            .iter()
            .enumerate()
            .any(|(other_index, other)| other_index != index && other == edge);
        (!is_shared).then_some(*edge)
    })
}
