use num_traits::{Float, ToPrimitive};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coordinate type that can be used with a triangulation.
///
/// Only floating point scalars qualify - the circumcircle computation divides by
/// a determinant and relies on the usual IEEE semantics for degenerate inputs.
///
/// This type should usually be either `f32` or `f64`.
pub trait TrowelNum: Float + Into<f64> + From<f32> + std::fmt::Debug {}

impl<T> TrowelNum for T where T: Float + Into<f64> + From<f32> + std::fmt::Debug {}

/// A two dimensional point.
///
/// This is the basic type used for defining positions.
///
/// Equality is exact coordinate comparison without any tolerance. The
/// triangulation relies on this to identify the synthetic bounding triangle's
/// corners when they are stripped from the result.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Point2<S> {
    /// The point's x coordinate
    pub x: S,
    /// The point's y coordinate
    pub y: S,
}

impl<S> Point2<S> {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Point2 { x, y }
    }
}

impl<S: TrowelNum> Point2<S> {
    /// Creates a new point from coordinates of any convertible numeric type.
    ///
    /// Returns `None` if a coordinate cannot be represented by the target
    /// scalar type. Useful for callers working in integer coordinates, e.g.
    /// cursor positions.
    #[inline]
    pub fn from_cast<U: ToPrimitive + num_traits::NumCast>(x: U, y: U) -> Option<Self> {
        Some(Point2::new(num_traits::cast(x)?, num_traits::cast(y)?))
    }

    /// Returns the squared distance of this point and another point.
    #[inline]
    pub fn distance_2(&self, other: Self) -> S {
        self.sub(other).length2()
    }

    pub(crate) fn add(&self, other: Self) -> Self {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub(crate) fn sub(&self, other: Self) -> Self {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    pub(crate) fn length2(&self) -> S {
        self.x * self.x + self.y * self.y
    }
}

impl<S: TrowelNum> From<Point2<S>> for [S; 2] {
    #[inline]
    fn from(point: Point2<S>) -> Self {
        [point.x, point.y]
    }
}

impl<S: TrowelNum> From<Point2<S>> for (S, S) {
    #[inline]
    fn from(point: Point2<S>) -> (S, S) {
        (point.x, point.y)
    }
}

impl<S: TrowelNum> From<[S; 2]> for Point2<S> {
    #[inline]
    fn from(source: [S; 2]) -> Self {
        Self::new(source[0], source[1])
    }
}

impl<S: TrowelNum> From<(S, S)> for Point2<S> {
    #[inline]
    fn from(source: (S, S)) -> Self {
        Self::new(source.0, source.1)
    }
}

#[cfg(test)]
mod test {
    use super::Point2;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_2() {
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(3.0, 4.0);
        assert_relative_eq!(p1.distance_2(p2), 25.0);
        assert_relative_eq!(p2.distance_2(p1), 25.0);
        assert_relative_eq!(p1.distance_2(p1), 0.0);
    }

    #[test]
    fn test_exact_equality() {
        assert_eq!(Point2::new(1.0, 2.0), Point2::new(1.0, 2.0));
        assert_ne!(Point2::new(1.0, 2.0), Point2::new(1.0 + 1.0e-15, 2.0));
    }

    #[test]
    fn test_from_cast() {
        assert_eq!(
            Point2::<f64>::from_cast(17u32, 42u32),
            Some(Point2::new(17.0, 42.0))
        );
        assert_eq!(
            Point2::<f32>::from_cast(-3i64, 5i64),
            Some(Point2::new(-3.0f32, 5.0))
        );
    }

    #[test]
    fn test_conversions() {
        let point = Point2::new(1.0, 2.0);
        assert_eq!(<[f64; 2]>::from(point), [1.0, 2.0]);
        assert_eq!(<(f64, f64)>::from(point), (1.0, 2.0));
        assert_eq!(Point2::from([1.0, 2.0]), point);
        assert_eq!(Point2::from((1.0, 2.0)), point);
    }
}
