//! Alliance and starting position choices for one match.

use core::fmt;

use crate::motion::pose::Point;

/// Where the red alliance's goal is, in the shared field frame.
pub const RED_GOAL: Point = Point::feet(4.5, 4.5);

/// Where the blue alliance's goal is, in the shared field frame.
pub const BLUE_GOAL: Point = Point::feet(-4.5, -4.5);

/// Which side the robot plays for.
///
/// Red is the reference alliance: every routine is authored in red field
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alliance {
    Red,
    Blue,
}

impl Alliance {
    /// The goal this alliance launches disks into.
    pub const fn goal(self) -> Point {
        match self {
            Alliance::Red => RED_GOAL,
            Alliance::Blue => BLUE_GOAL,
        }
    }

    /// Whether red-frame poses must be mirrored for this alliance.
    pub const fn is_mirrored(self) -> bool { matches!(self, Alliance::Blue) }
}

/// Which starting tile and routine the robot uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartPosition {
    /// Start next to a roller, turn it, then launch preloads.
    SpinnerOnly,
    /// Start away from the rollers and only launch preloads.
    Other,
    /// Turn the roller, then run the full field route.
    Full,
}

impl StartPosition {
    /// Whether this position starts next to a roller.
    pub const fn starts_at_roller(self) -> bool {
        matches!(self, StartPosition::SpinnerOnly | StartPosition::Full)
    }
}

/// A complete match configuration.
///
/// Both fields are always set; "not selected yet" is represented by the
/// absence of a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchConfiguration {
    pub alliance: Alliance,
    pub position: StartPosition,
}

impl MatchConfiguration {
    pub const fn new(alliance: Alliance, position: StartPosition) -> Self {
        Self { alliance, position }
    }
}

impl fmt::Display for MatchConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.alliance, self.position)
    }
}
