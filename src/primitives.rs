//! The simple geometric objects a triangulation is made of.
//!
//! These types only store geometrical properties. They carry no connectivity
//! information - an [Edge] does not know which triangles it borders and a
//! [Triangle] does not know its neighbors.

use crate::{Point2, TrowelNum};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The tolerance used for in-circumcircle checks.
///
/// Comparisons at the circle boundary are performed on squared distances and
/// allow this much slack to absorb floating point round-off.
pub(crate) const CONTAINMENT_EPS: f32 = 1.0e-4;

/// An undirected edge defined by its two end points.
///
/// Edges carry no orientation: two edges compare equal if their end points
/// match in either order.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Edge<S> {
    /// One end point of the edge.
    pub from: Point2<S>,
    /// The other end point of the edge.
    pub to: Point2<S>,
}

impl<S> Edge<S> {
    /// Creates a new edge between two points.
    #[inline]
    pub const fn new(from: Point2<S>, to: Point2<S>) -> Self {
        Edge { from, to }
    }
}

impl<S: PartialEq> PartialEq for Edge<S> {
    fn eq(&self, other: &Self) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }
}

/// A circle given by its center and its *squared* radius.
///
/// Storing the squared radius avoids a square root when the circle is created
/// and keeps all containment checks on squared distances.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Circle<S> {
    /// The circle's center.
    pub center: Point2<S>,
    /// The squared distance from the center to any point on the circle.
    pub radius_2: S,
}

/// A triangle, defined by its three vertices.
///
/// The three edges and the circumcircle are derived from the vertices once at
/// construction time and never recomputed - triangles are always created
/// fresh, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Triangle<S> {
    v0: Point2<S>,
    v1: Point2<S>,
    v2: Point2<S>,
    edges: [Edge<S>; 3],
    circumcircle: Circle<S>,
}

impl<S: TrowelNum> Triangle<S> {
    /// Creates a new triangle and computes its circumcircle.
    ///
    /// If the vertices are collinear or coincident the circumcenter
    /// denominator is zero and the resulting circumcircle contains infinite or
    /// NaN values. This is not treated as an error: comparisons against NaN
    /// are always false, so such a triangle is simply never classified as
    /// containing any point.
    pub fn new(v0: Point2<S>, v1: Point2<S>, v2: Point2<S>) -> Self {
        let b = v1.sub(v0);
        let c = v2.sub(v0);

        let one = S::one();
        let two = one + one;
        let d_inv = one / (two * (b.x * c.y - c.x * b.y));
        let len_b = b.length2();
        let len_c = c.length2();

        let x = (len_b * c.y - len_c * b.y) * d_inv;
        let y = (len_c * b.x - len_b * c.x) * d_inv;
        let center = Point2::new(x, y).add(v0);

        Triangle {
            v0,
            v1,
            v2,
            edges: [Edge::new(v0, v1), Edge::new(v1, v2), Edge::new(v0, v2)],
            circumcircle: Circle {
                center,
                radius_2: center.distance_2(v0),
            },
        }
    }

    /// Returns the triangle's three vertices in construction order.
    #[inline]
    pub fn vertices(&self) -> [Point2<S>; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Returns the triangle's three edges: `v0-v1`, `v1-v2` and `v0-v2`.
    #[inline]
    pub fn edges(&self) -> [Edge<S>; 3] {
        self.edges
    }

    /// Returns the triangle's circumcircle.
    ///
    /// The circumcircle passes through all three vertices. Its radius is
    /// stored *squared*, see [Circle].
    #[inline]
    pub fn circumcircle(&self) -> Circle<S> {
        self.circumcircle
    }

    /// Returns `true` if `point` is exactly equal to one of the triangle's
    /// vertices.
    #[inline]
    pub fn has_vertex(&self, point: Point2<S>) -> bool {
        self.v0 == point || self.v1 == point || self.v2 == point
    }

    /// Checks if `point` lies inside the triangle's circumcircle.
    ///
    /// The check compares squared distances with a small tolerance, points
    /// within that tolerance of the circle boundary count as contained. A
    /// degenerate (collinear) triangle never contains any point as its
    /// circumcircle values are NaN.
    pub fn circumcircle_contains(&self, point: Point2<S>) -> bool {
        let eps: S = CONTAINMENT_EPS.into();
        self.circumcircle.center.distance_2(point) - self.circumcircle.radius_2 <= eps
    }
}
