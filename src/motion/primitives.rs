//! Motion and actuation primitives used by autonomous routines.
//!
//! [`Motion`] is a thin facade over the chassis and the spinner motor. Every
//! operation awaits until the underlying device reports completion; there is no
//! timeout, so a chassis that never settles suspends the routine for the rest
//! of the phase.
//!
//! # Example
//!
//! ```ignore
//! use spinup::{motion::{pose::Point, primitives::Motion}, teams::Alliance};
//!
//! let mut motion = Motion::new(&mut chassis, &mut spinner, &platform);
//! motion.drive_to(Point::feet(-5.0, 3.0), true).await;
//! motion.spin(Duration::from_millis(2000), 100.0).await;
//! motion.launch(Alliance::Red).await;
//! ```

use std::time::Duration;

use log::{debug, warn};

use crate::{
    drivetrain::Chassis,
    error::{Error, Result},
    motion::pose::{Point, Pose},
    peripherals::{Actuator, Platform},
    teams::Alliance,
};

/// Outcome of one [`Motion::launch`].
#[derive(Debug, Clone, PartialEq)]
pub struct Launch {
    /// The goal the robot turned to.
    pub target:  Point,
    /// What the disk release stage reported.
    pub release: Result<()>,
}

/// Releases a disk toward the goal the robot is facing.
///
/// The launcher mechanism is not built yet, so this always reports
/// [`Error::Unimplemented`].
pub fn release_disk() -> Result<()> { Err(Error::Unimplemented("disk release")) }

/// Point-to-point and actuation facade.
pub struct Motion<'a, C, S, P> {
    chassis:  &'a mut C,
    spinner:  &'a mut S,
    platform: &'a P,
}

impl<'a, C: Chassis, S: Actuator, P: Platform> Motion<'a, C, S, P> {
    /// Creates the facade over borrowed devices.
    pub fn new(chassis: &'a mut C, spinner: &'a mut S, platform: &'a P) -> Self {
        Self {
            chassis,
            spinner,
            platform,
        }
    }

    /// Overwrites the chassis' believed pose.
    pub fn set_pose(&mut self, pose: Pose) {
        debug!("Pose set to {:?}", pose);
        self.chassis.set_state(pose);
    }

    /// The chassis' believed pose.
    pub fn pose(&self) -> Pose { self.chassis.state() }

    /// Drives to `target`. With `reverse` the robot may back into it.
    pub async fn drive_to(&mut self, target: Point, reverse: bool) {
        debug!("Driving to ({}, {}) reverse={}", target.x, target.y, reverse);
        self.chassis.drive_to_point(target, reverse).await;
    }

    /// Turns in place to face `target`.
    pub async fn turn_to(&mut self, target: Point) {
        debug!("Turning to ({}, {})", target.x, target.y);
        self.chassis.turn_to_point(target).await;
    }

    /// Turns to the alliance's goal and releases a disk.
    ///
    /// A release failure is logged and returned in the [`Launch`] record; it
    /// does not stop the routine.
    pub async fn launch(&mut self, alliance: Alliance) -> Launch {
        let target = alliance.goal();
        self.turn_to(target).await;

        let release = release_disk();
        if let Err(e) = &release {
            warn!("Launch toward {:?} goal: {}", alliance, e);
        }
        Launch { target, release }
    }

    /// Runs the spinner at `velocity` for `duration`, then stops it.
    pub async fn spin(&mut self, duration: Duration, velocity: f64) {
        debug!("Spinning at {} for {:?}", velocity, duration);
        self.spinner.move_velocity(velocity).unwrap_or_else(|e| {
            warn!("Spinner Velocity Error: {}", e);
        });
        self.platform.sleep(duration).await;
        self.spinner.move_velocity(0.0).unwrap_or_else(|e| {
            warn!("Spinner Stop Error: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;

    use super::*;
    use crate::peripherals::mock::{Event, Journal, MockChassis, MockMotor, MockPlatform};

    fn devices(journal: &Journal) -> (MockChassis, MockMotor, MockPlatform) {
        (
            MockChassis::new(journal.clone()),
            MockMotor::new(journal.clone()),
            MockPlatform::new(journal.clone()),
        )
    }

    #[test]
    fn launch_turns_to_the_alliance_goal() {
        let journal = Journal::default();
        let (mut chassis, mut spinner, platform) = devices(&journal);
        let mut motion = Motion::new(&mut chassis, &mut spinner, &platform);

        let red = block_on(motion.launch(Alliance::Red));
        let blue = block_on(motion.launch(Alliance::Blue));

        assert_eq!(red.target, Point::feet(4.5, 4.5));
        assert_eq!(blue.target, Point::feet(-4.5, -4.5));
        assert_eq!(
            journal.events(),
            vec![
                Event::TurnTo(Point::feet(4.5, 4.5)),
                Event::TurnTo(Point::feet(-4.5, -4.5)),
            ]
        );
    }

    #[test]
    fn launch_reports_the_missing_release() {
        let journal = Journal::default();
        let (mut chassis, mut spinner, platform) = devices(&journal);
        let mut motion = Motion::new(&mut chassis, &mut spinner, &platform);

        let launch = block_on(motion.launch(Alliance::Red));
        assert_eq!(launch.release, Err(Error::Unimplemented("disk release")));
    }

    #[test]
    fn spin_runs_then_stops() {
        let journal = Journal::default();
        let (mut chassis, mut spinner, platform) = devices(&journal);
        let mut motion = Motion::new(&mut chassis, &mut spinner, &platform);

        block_on(motion.spin(Duration::from_millis(2000), 100.0));

        assert_eq!(
            journal.events(),
            vec![
                Event::Velocity(100.0),
                Event::Sleep(Duration::from_millis(2000)),
                Event::Velocity(0.0),
            ]
        );
        assert_eq!(platform.uptime(), Duration::from_millis(2000));
    }

    #[test]
    fn spin_stops_even_when_the_motor_errors() {
        let journal = Journal::default();
        let mut chassis = MockChassis::new(journal.clone());
        let mut spinner = MockMotor::failing(journal.clone());
        let platform = MockPlatform::new(journal.clone());
        let mut motion = Motion::new(&mut chassis, &mut spinner, &platform);

        block_on(motion.spin(Duration::from_millis(10), 50.0));
        assert_eq!(journal.filtered(|e| matches!(e, Event::Velocity(_))).len(), 2);
    }

    #[test]
    fn drive_and_turn_pass_through() {
        let journal = Journal::default();
        let (mut chassis, mut spinner, platform) = devices(&journal);
        let mut motion = Motion::new(&mut chassis, &mut spinner, &platform);

        motion.set_pose(Pose::feet(-4.0, 3.0, 90.0));
        block_on(motion.drive_to(Point::feet(-5.0, 3.0), true));
        block_on(motion.turn_to(Point::feet(0.0, 0.0)));

        assert_eq!(
            journal.motion(),
            vec![
                Event::SetState(Pose::feet(-4.0, 3.0, 90.0)),
                Event::DriveTo {
                    target:  Point::feet(-5.0, 3.0),
                    reverse: true,
                },
                Event::TurnTo(Point::origin()),
            ]
        );
        assert_eq!(motion.pose().point(), Point::feet(-5.0, 3.0));
    }
}
