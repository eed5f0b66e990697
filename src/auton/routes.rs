//! Starting poses and waypoint tables, in red-alliance field coordinates.
//!
//! A routine is the starting pose for its position followed by every
//! [`Stage`] whose gate accepts that position, in [`Stage::ALL`] order. Gates
//! are independent: a position can run several stages.
//!
//! | Position    | Spinner | Full route | Approach | Closing launch |
//! |-------------|---------|------------|----------|----------------|
//! | SpinnerOnly | yes     |            | yes      | yes            |
//! | Other       |         |            |          | yes            |
//! | Full        | yes     | yes        |          |                |

use heapless::Vec;

use crate::{
    motion::pose::{Point, Pose},
    teams::StartPosition,
};

/// One command in a stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Drive to a red-frame point.
    Drive { target: Point, reverse: bool },
    /// Run the spinner against the roller for the configured time.
    Spin,
    /// Turn to the alliance goal and launch.
    Launch,
}

const fn drive(x: f64, y: f64) -> Step {
    Step::Drive {
        target:  Point::feet(x, y),
        reverse: false,
    }
}

/// Back into the roller, then turn it.
pub const SPINNER_STAGE: [Step; 2] = [
    Step::Drive {
        target:  Point::feet(-5.0, 3.0),
        reverse: true,
    },
    Step::Spin,
];

/// Launch preloads, then sweep the disks along the side line.
pub const FULL_ROUTE: [Step; 10] = [
    Step::Launch,
    drive(-2.0, 0.0),
    Step::Launch,
    drive(2.5, -4.5),
    Step::Launch,
    drive(-2.0, -5.0),
    drive(-2.0, -1.0),
    Step::Launch,
    drive(-5.0, -1.5),
    Step::Launch,
];

/// Pull back off the roller into launch position.
pub const APPROACH: [Step; 1] = [drive(-4.0, 3.0)];

/// Launch preloads.
pub const CLOSING_LAUNCH: [Step; 1] = [Step::Launch];

/// Starting pose for positions next to a roller.
pub fn roller_start() -> Pose { Pose::feet(-4.0, 3.0, 90.0) }

/// Starting pose for the position away from the rollers.
pub fn other_start() -> Pose { Pose::feet(-6.0, 1.0, 0.0) }

/// Red-frame starting pose for `position`.
pub fn start_pose(position: StartPosition) -> Pose {
    if position.starts_at_roller() {
        roller_start()
    } else {
        other_start()
    }
}

/// A gated block of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Spinner,
    FullRoute,
    Approach,
    ClosingLaunch,
}

impl Stage {
    /// Every stage, in execution order.
    pub const ALL: [Stage; 4] = [
        Stage::Spinner,
        Stage::FullRoute,
        Stage::Approach,
        Stage::ClosingLaunch,
    ];

    /// Whether this stage runs for `position`.
    pub fn gates(self, position: StartPosition) -> bool {
        match self {
            Stage::Spinner => position.starts_at_roller(),
            Stage::FullRoute => position == StartPosition::Full,
            Stage::Approach => position == StartPosition::SpinnerOnly,
            Stage::ClosingLaunch => {
                matches!(position, StartPosition::Other | StartPosition::SpinnerOnly)
            }
        }
    }

    /// The stage's steps.
    pub fn steps(self) -> &'static [Step] {
        match self {
            Stage::Spinner => &SPINNER_STAGE,
            Stage::FullRoute => &FULL_ROUTE,
            Stage::Approach => &APPROACH,
            Stage::ClosingLaunch => &CLOSING_LAUNCH,
        }
    }
}

/// Stages that run for `position`, in execution order.
pub fn stages(position: StartPosition) -> Vec<Stage, 4> {
    Stage::ALL
        .into_iter()
        .filter(|stage| stage.gates(position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_runs_spinner_and_full_route() {
        assert_eq!(
            stages(StartPosition::Full).as_slice(),
            &[Stage::Spinner, Stage::FullRoute]
        );
    }

    #[test]
    fn spinner_only_runs_spinner_approach_and_launch() {
        assert_eq!(
            stages(StartPosition::SpinnerOnly).as_slice(),
            &[Stage::Spinner, Stage::Approach, Stage::ClosingLaunch]
        );
    }

    #[test]
    fn other_only_launches() {
        assert_eq!(
            stages(StartPosition::Other).as_slice(),
            &[Stage::ClosingLaunch]
        );
    }

    #[test]
    fn start_poses() {
        assert_eq!(start_pose(StartPosition::SpinnerOnly), Pose::feet(-4.0, 3.0, 90.0));
        assert_eq!(start_pose(StartPosition::Full), Pose::feet(-4.0, 3.0, 90.0));
        assert_eq!(start_pose(StartPosition::Other), Pose::feet(-6.0, 1.0, 0.0));
    }

    #[test]
    fn full_route_shape() {
        let launches = FULL_ROUTE.iter().filter(|s| **s == Step::Launch).count();
        let drives = FULL_ROUTE
            .iter()
            .filter(|s| matches!(s, Step::Drive { reverse: false, .. }))
            .count();
        assert_eq!(launches, 5);
        assert_eq!(drives, 5);
        assert_eq!(FULL_ROUTE[0], Step::Launch);
        assert_eq!(FULL_ROUTE[9], Step::Launch);
    }

    #[test]
    fn only_the_roller_approach_reverses() {
        let reversing: usize = Stage::ALL
            .iter()
            .flat_map(|stage| stage.steps())
            .filter(|s| matches!(s, Step::Drive { reverse: true, .. }))
            .count();
        assert_eq!(reversing, 1);
        assert_eq!(
            SPINNER_STAGE[0],
            Step::Drive {
                target:  Point::feet(-5.0, 3.0),
                reverse: true,
            }
        );
    }
}
