//! The `Point` value type.

use std::any::Any;
use std::fmt;
use std::io;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PointError;
use crate::json::write_spaced;

/// An integer coordinate in the plane.
///
/// Points are plain `Copy` values compared by content. The only mutation path
/// is in-place accumulation (`+=` or [`Point::accumulate`]); every other
/// operation returns a new point.
///
/// Equality is defined for `Point == Point` only. Comparing against a value of
/// another type either fails to compile or, through [`Point::try_eq`], returns
/// [`PointError::NotSupported`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    x: i64,
    y: i64,
}

impl Point {
    /// The point `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Build a point from floating-point values that must hold integers.
    ///
    /// `2.0` is accepted; `1.5`, NaN, infinities and values outside the `i64`
    /// range fail with [`PointError::Type`].
    ///
    /// ```
    /// use plib::{Point, PointError};
    ///
    /// assert_eq!(Point::from_f64(2.0, -3.0).unwrap(), Point::new(2, -3));
    /// assert!(matches!(Point::from_f64(1.5, 1.5), Err(PointError::Type { .. })));
    /// ```
    pub fn from_f64(x: f64, y: f64) -> Result<Self, PointError> {
        match (integral(x), integral(y)) {
            (Some(ix), Some(iy)) => Ok(Self::new(ix, iy)),
            _ => Err(PointError::Type { x, y }),
        }
    }

    #[must_use]
    pub const fn x(&self) -> i64 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Add `other` into `self` in place and return `self` for chaining.
    pub fn accumulate(&mut self, other: Point) -> &mut Self {
        *self += other;
        self
    }

    /// Euclidean distance to `other`.
    ///
    /// Differences are taken exactly in `i128`; only the final result is
    /// rounded to `f64`.
    #[must_use]
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = (i128::from(other.x) - i128::from(self.x)) as f64;
        let dy = (i128::from(other.y) - i128::from(self.y)) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// `self + other`, or `None` if either coordinate overflows.
    ///
    /// ```
    /// use plib::Point;
    ///
    /// assert_eq!(Point::new(1, 2).checked_add(Point::new(3, 4)), Some(Point::new(4, 6)));
    /// assert_eq!(Point::new(i64::MAX, 0).checked_add(Point::new(1, 0)), None);
    /// ```
    #[must_use]
    pub const fn checked_add(self, other: Point) -> Option<Point> {
        match (self.x.checked_add(other.x), self.y.checked_add(other.y)) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        }
    }

    /// `self - other`, or `None` if either coordinate overflows.
    #[must_use]
    pub const fn checked_sub(self, other: Point) -> Option<Point> {
        match (self.x.checked_sub(other.x), self.y.checked_sub(other.y)) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        }
    }

    /// `-self`, or `None` when a coordinate is `i64::MIN`.
    #[must_use]
    pub const fn checked_neg(self) -> Option<Point> {
        match (self.x.checked_neg(), self.y.checked_neg()) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_origin(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Equality against an arbitrary value.
    ///
    /// Returns `Ok(true|false)` when `other` is a `Point`, and
    /// [`PointError::NotSupported`] for anything else. It never answers
    /// `false` merely because the types differ.
    ///
    /// ```
    /// use plib::{Point, PointError};
    ///
    /// let p = Point::new(1, 2);
    /// assert!(p.try_eq(&Point::new(1, 2)).unwrap());
    /// assert!(matches!(p.try_eq(&"not a point"), Err(PointError::NotSupported { .. })));
    /// ```
    pub fn try_eq<T: Any>(&self, other: &T) -> Result<bool, PointError> {
        match (other as &dyn Any).downcast_ref::<Point>() {
            Some(point) => Ok(self == point),
            None => Err(PointError::NotSupported {
                found: std::any::type_name::<T>(),
            }),
        }
    }

    /// `{"x": <x>, "y": <y>}`.
    #[must_use]
    pub fn to_json(&self) -> String {
        let mut out = Vec::with_capacity(32);
        match self.write_json(&mut out) {
            Ok(()) => String::from_utf8(out).unwrap_or_default(),
            Err(_) => String::new(),
        }
    }

    /// Stream the JSON form into `writer`.
    pub fn write_json<W: io::Write>(&self, writer: W) -> Result<(), PointError> {
        write_spaced(writer, self)?;
        Ok(())
    }

    /// Parse a JSON object with integer `x` and `y` members.
    ///
    /// Unknown members are ignored. Invalid JSON, a missing member or a
    /// non-integer value (including `3.0`) fails with [`PointError::Parse`].
    pub fn from_json(text: &str) -> Result<Self, PointError> {
        Ok(serde_json::from_str(text)?)
    }
}

fn integral(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    const LOWER: f64 = i64::MIN as f64;
    const UPPER: f64 = i64::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && (LOWER..UPPER).contains(&value) {
        Some(value as i64)
    } else {
        None
    }
}

impl TryFrom<(f64, f64)> for Point {
    type Error = PointError;

    fn try_from((x, y): (f64, f64)) -> Result<Self, Self::Error> {
        Point::from_f64(x, y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (i64, i64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl FromStr for Point {
    type Err = PointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Point::from_json(s)
    }
}

/// # Panics
///
/// Panics if a coordinate overflows. Use [`Point::checked_add`] to handle it.
impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// # Panics
///
/// Panics if a coordinate overflows.
impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// # Panics
///
/// Panics if a coordinate overflows. Use [`Point::checked_sub`] to handle it.
impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// # Panics
///
/// Panics if a coordinate is `i64::MIN`. Use [`Point::checked_neg`] to handle it.
impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

// Debug output is intentionally identical to Display.
impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
