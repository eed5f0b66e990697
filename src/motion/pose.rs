//! Field coordinates and poses.
//!
//! The field origin is its center. Distances are stored in inches and headings
//! in degrees, normalized to `[0, 360)`. Routines are authored in feet, so
//! [`Point::feet`] and [`Pose::feet`] do the conversion.
//!
//! All routines are written for the red alliance. The blue alliance starts on
//! the opposite side of the field, rotated by half a turn around the center,
//! which is what [`Pose::mirrored`] computes.
//!
//! # Example
//!
//! ```
//! use spinup::motion::pose::Pose;
//!
//! let red_start = Pose::feet(-6.0, 1.0, 0.0);
//! let blue_start = red_start.mirrored();
//! assert!(blue_start.approx_eq(&Pose::feet(6.0, -1.0, 180.0), 1e-9));
//! ```

/// Inches in one foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Normalizes a heading in degrees to `[0, 360)`.
pub fn normalize_heading(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// A point on the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x-coordinate in inches.
    pub x: f64,
    /// The y-coordinate in inches.
    pub y: f64,
}

impl Point {
    /// Creates a point from inch coordinates.
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Creates a point from foot coordinates.
    pub const fn feet(x: f64, y: f64) -> Self {
        Self {
            x: x * INCHES_PER_FOOT,
            y: y * INCHES_PER_FOOT,
        }
    }

    /// The field center.
    pub const fn origin() -> Self { Self { x: 0.0, y: 0.0 } }

    /// Euclidean distance to another point, in inches.
    pub fn distance(&self, other: &Point) -> f64 { (other.x - self.x).hypot(other.y - self.y) }

    /// Heading in degrees from this point toward `other`, measured
    /// counter-clockwise from the +x axis and normalized to `[0, 360)`.
    pub fn heading_to(&self, other: &Point) -> f64 {
        normalize_heading((other.y - self.y).atan2(other.x - self.x).to_degrees())
    }
}

/// A robot position and heading on the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// The x-coordinate in inches.
    pub x:       f64,
    /// The y-coordinate in inches.
    pub y:       f64,
    /// The heading in degrees, `[0, 360)`.
    pub heading: f64,
}

impl Pose {
    /// Creates a pose from inch coordinates; the heading is normalized.
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            x,
            y,
            heading: normalize_heading(heading),
        }
    }

    /// Creates a pose from foot coordinates; the heading is normalized.
    pub fn feet(x: f64, y: f64, heading: f64) -> Self {
        Self::new(x * INCHES_PER_FOOT, y * INCHES_PER_FOOT, heading)
    }

    /// Creates a Pose at the origin facing +x.
    pub fn origin() -> Self {
        Self {
            x:       0.0,
            y:       0.0,
            heading: 0.0,
        }
    }

    /// The position part of the pose.
    pub fn point(&self) -> Point { Point::new(self.x, self.y) }

    /// Rotates the pose half a turn around the field center.
    ///
    /// Returns `{-x, -y, heading + 180°}`. Applying it twice gives back the
    /// original pose.
    pub fn mirrored(self) -> Pose { Pose::new(-self.x, -self.y, self.heading + 180.0) }

    /// Compares two poses; headings are compared on the circle, so 359.9999°
    /// and 0° are close.
    pub fn approx_eq(&self, other: &Pose, eps: f64) -> bool {
        let dh = (self.heading - other.heading).rem_euclid(360.0);
        let dh = dh.min(360.0 - dh);
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps && dh <= eps
    }
}

impl Default for Pose {
    fn default() -> Self { Self::origin() }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn mirror_negates_position_and_turns_heading() {
        let pose = Pose::feet(-4.0, 3.0, 90.0);
        let mirrored = pose.mirrored();
        assert_eq!(mirrored.x, 48.0);
        assert_eq!(mirrored.y, -36.0);
        assert_eq!(mirrored.heading, 270.0);
    }

    #[test]
    fn mirror_wraps_heading() {
        let mirrored = Pose::new(1.0, 2.0, 270.0).mirrored();
        assert_eq!(mirrored.heading, 90.0);

        let mirrored = Pose::new(0.0, 0.0, 180.0).mirrored();
        assert_eq!(mirrored.heading, 0.0);
    }

    #[test]
    fn mirror_is_an_involution() {
        let poses = [
            Pose::origin(),
            Pose::feet(-6.0, 1.0, 0.0),
            Pose::feet(-4.0, 3.0, 90.0),
            Pose::new(13.37, -0.25, 359.5),
            Pose::new(-71.0, 71.0, 123.456),
        ];
        for pose in poses {
            assert!(pose.mirrored().mirrored().approx_eq(&pose, EPS), "{pose:?}");
        }
    }

    #[test]
    fn headings_are_normalized() {
        assert_eq!(normalize_heading(-90.0), 270.0);
        assert_eq!(normalize_heading(720.0), 0.0);
        assert_eq!(Pose::new(0.0, 0.0, -180.0).heading, 180.0);
        let tiny = normalize_heading(-1e-20);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn approx_eq_compares_headings_on_the_circle() {
        let a = Pose::new(0.0, 0.0, 359.999_999_999_9);
        let b = Pose::new(0.0, 0.0, 0.0);
        assert!(a.approx_eq(&b, 1e-6));
        assert!(!a.approx_eq(&Pose::new(0.0, 0.0, 180.0), 1e-6));
    }

    #[test]
    fn feet_converts_to_inches() {
        assert_eq!(Point::feet(4.5, -4.5), Point::new(54.0, -54.0));
        assert_eq!(Point::feet(-5.0, 3.0).distance(&Point::feet(-5.0, 0.0)), 36.0);
    }

    #[test]
    fn heading_to_points_toward_target() {
        let from = Point::origin();
        assert!((from.heading_to(&Point::new(0.0, 10.0)) - 90.0).abs() < EPS);
        assert!((from.heading_to(&Point::new(-10.0, 0.0)) - 180.0).abs() < EPS);
        assert!((from.heading_to(&Point::new(0.0, -10.0)) - 270.0).abs() < EPS);
    }
}
