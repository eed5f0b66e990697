//! Pre-match selection and the autonomous routines.
//!
//! Selection produces a [`MatchConfiguration`]; the [`AutonomousSequencer`]
//! turns it into motion:
//!
//! 1. **Pose setup**: the red-frame starting pose for the position, mirrored
//!    once for the blue alliance, is written into odometry.
//! 2. **Stages**: every stage gated on the position runs in
//!    [`Stage::ALL`](routes::Stage::ALL) order.
//!
//! Waypoints are never mirrored individually. Once the starting pose is
//! mirrored, odometry itself runs in the mirrored frame, so red-frame targets
//! land on the blue side of the field. Launch goals are the exception: they
//! are chosen per alliance by [`Motion::launch`].
//!
//! # Example
//!
//! ```ignore
//! use spinup::{auton::AutonomousSequencer, teams::*};
//!
//! let motion = Motion::new(&mut chassis, &mut spinner, &platform);
//! let mut sequencer = AutonomousSequencer::new(motion, &settings);
//! sequencer
//!     .run(MatchConfiguration::new(Alliance::Blue, StartPosition::Other))
//!     .await;
//! ```

/// Starting poses, stage gates, and waypoint tables.
pub mod routes;

/// Controller-driven configuration selection.
pub mod selector;

use heapless::Vec as StageList;
use log::{debug, info};
use routes::{Stage, Step};

use crate::{
    config::RobotConfig,
    drivetrain::Chassis,
    motion::{
        pose::Pose,
        primitives::{Launch, Motion},
    },
    peripherals::{Actuator, Platform},
    teams::MatchConfiguration,
};

/// The pose written into odometry before a routine starts.
pub fn initial_pose(config: MatchConfiguration) -> Pose {
    let pose = routes::start_pose(config.position);
    if config.alliance.is_mirrored() {
        pose.mirrored()
    } else {
        pose
    }
}

/// What one autonomous run did.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// The configuration the routine ran with.
    pub config:   MatchConfiguration,
    /// The pose committed during pose setup.
    pub start:    Pose,
    /// Stages that ran, in order.
    pub stages:   StageList<Stage, 4>,
    /// Every launch attempt, in order.
    pub launches: Vec<Launch>,
}

/// Runs the routine for a match configuration.
pub struct AutonomousSequencer<'a, C, S, P> {
    motion:   Motion<'a, C, S, P>,
    settings: &'a RobotConfig,
}

impl<'a, C: Chassis, S: Actuator, P: Platform> AutonomousSequencer<'a, C, S, P> {
    pub fn new(motion: Motion<'a, C, S, P>, settings: &'a RobotConfig) -> Self {
        Self { motion, settings }
    }

    /// Sets the starting pose, then runs every gated stage.
    ///
    /// Each motion step awaits the chassis; a chassis that never settles keeps
    /// this future pending.
    pub async fn run(&mut self, config: MatchConfiguration) -> RunReport {
        info!("Autonomous started: {}", config);

        let start = initial_pose(config);
        self.motion.set_pose(start);

        let stages = routes::stages(config.position);
        let mut launches = Vec::new();
        for stage in &stages {
            debug!("Stage {:?}", stage);
            for step in stage.steps() {
                match *step {
                    Step::Drive { target, reverse } => self.motion.drive_to(target, reverse).await,
                    Step::Spin => {
                        self.motion
                            .spin(self.settings.spin_duration, self.settings.spinner_velocity)
                            .await
                    }
                    Step::Launch => launches.push(self.motion.launch(config.alliance).await),
                }
            }
        }

        info!("Autonomous complete: {}", config);
        RunReport {
            config,
            start,
            stages,
            launches,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        pin::pin,
        task::{Context, Waker},
        time::Duration,
    };

    use embassy_futures::block_on;

    use super::*;
    use crate::{
        error::Error,
        motion::pose::Point,
        peripherals::mock::{Event, Journal, MockChassis, MockMotor, MockPlatform},
        teams::{Alliance, StartPosition},
    };

    const ALLIANCES: [Alliance; 2] = [Alliance::Red, Alliance::Blue];
    const POSITIONS: [StartPosition; 3] = [
        StartPosition::SpinnerOnly,
        StartPosition::Other,
        StartPosition::Full,
    ];

    fn run(config: MatchConfiguration) -> (RunReport, Journal) {
        let journal = Journal::default();
        let mut chassis = MockChassis::new(journal.clone());
        let mut spinner = MockMotor::new(journal.clone());
        let platform = MockPlatform::new(journal.clone());
        let settings = RobotConfig::default();

        let motion = Motion::new(&mut chassis, &mut spinner, &platform);
        let report = block_on(AutonomousSequencer::new(motion, &settings).run(config));
        (report, journal)
    }

    fn drive(x: f64, y: f64, reverse: bool) -> Event {
        Event::DriveTo {
            target: Point::feet(x, y),
            reverse,
        }
    }

    #[test]
    fn red_full_runs_spinner_then_full_route() {
        let (report, journal) = run(MatchConfiguration::new(Alliance::Red, StartPosition::Full));
        let red = Event::TurnTo(Point::feet(4.5, 4.5));

        assert_eq!(report.stages.as_slice(), &[Stage::Spinner, Stage::FullRoute]);
        assert_eq!(
            journal.events(),
            vec![
                Event::SetState(Pose::feet(-4.0, 3.0, 90.0)),
                drive(-5.0, 3.0, true),
                Event::Velocity(100.0),
                Event::Sleep(Duration::from_millis(2000)),
                Event::Velocity(0.0),
                red.clone(),
                drive(-2.0, 0.0, false),
                red.clone(),
                drive(2.5, -4.5, false),
                red.clone(),
                drive(-2.0, -5.0, false),
                drive(-2.0, -1.0, false),
                red.clone(),
                drive(-5.0, -1.5, false),
                red,
            ]
        );
    }

    #[test]
    fn blue_other_only_launches_at_the_blue_goal() {
        let (report, journal) = run(MatchConfiguration::new(Alliance::Blue, StartPosition::Other));

        assert!(report.start.approx_eq(&Pose::feet(6.0, -1.0, 180.0), 1e-9));
        assert_eq!(report.stages.as_slice(), &[Stage::ClosingLaunch]);
        assert_eq!(
            journal.events(),
            vec![
                Event::SetState(Pose::feet(6.0, -1.0, 180.0)),
                Event::TurnTo(Point::feet(-4.5, -4.5)),
            ]
        );
    }

    #[test]
    fn spinner_only_turns_roller_then_approaches_and_launches() {
        let (report, journal) = run(MatchConfiguration::new(
            Alliance::Red,
            StartPosition::SpinnerOnly,
        ));

        assert_eq!(
            report.stages.as_slice(),
            &[Stage::Spinner, Stage::Approach, Stage::ClosingLaunch]
        );
        assert_eq!(
            journal.motion(),
            vec![
                Event::SetState(Pose::feet(-4.0, 3.0, 90.0)),
                drive(-5.0, 3.0, true),
                drive(-4.0, 3.0, false),
                Event::TurnTo(Point::feet(4.5, 4.5)),
            ]
        );
        assert_eq!(report.launches.len(), 1);
    }

    #[test]
    fn blue_pose_is_mirrored_once_and_waypoints_are_not() {
        let (report, journal) = run(MatchConfiguration::new(
            Alliance::Blue,
            StartPosition::SpinnerOnly,
        ));

        assert!(report.start.approx_eq(&Pose::feet(4.0, -3.0, 270.0), 1e-9));
        let set_states = journal.filtered(|e| matches!(e, Event::SetState(_)));
        assert_eq!(set_states.len(), 1);
        assert!(journal.events().contains(&drive(-5.0, 3.0, true)));
        assert!(journal.events().contains(&drive(-4.0, 3.0, false)));
    }

    #[test]
    fn start_pose_depends_only_on_position_before_mirroring() {
        for position in POSITIONS {
            let red = initial_pose(MatchConfiguration::new(Alliance::Red, position));
            let blue = initial_pose(MatchConfiguration::new(Alliance::Blue, position));
            assert_eq!(red, routes::start_pose(position));
            assert!(blue.approx_eq(&red.mirrored(), 1e-9));
        }
    }

    #[test]
    fn every_launch_targets_the_alliance_goal() {
        for alliance in ALLIANCES {
            for position in POSITIONS {
                let (report, _) = run(MatchConfiguration::new(alliance, position));
                assert!(!report.launches.is_empty());
                for launch in &report.launches {
                    assert_eq!(launch.target, alliance.goal());
                    assert_eq!(launch.release, Err(Error::Unimplemented("disk release")));
                }
            }
        }
    }

    #[test]
    fn launch_counts_follow_the_stage_gates() {
        let counts: Vec<usize> = POSITIONS
            .iter()
            .map(|&position| {
                run(MatchConfiguration::new(Alliance::Red, position))
                    .0
                    .launches
                    .len()
            })
            .collect();
        assert_eq!(counts, vec![1, 1, 5]);
    }

    #[test]
    fn stalled_chassis_blocks_the_routine() {
        let journal = Journal::default();
        let mut chassis = MockChassis::stalled(journal.clone());
        let mut spinner = MockMotor::new(journal.clone());
        let platform = MockPlatform::new(journal.clone());
        let settings = RobotConfig::default();
        let motion = Motion::new(&mut chassis, &mut spinner, &platform);
        let mut sequencer = AutonomousSequencer::new(motion, &settings);
        let mut routine = pin!(sequencer.run(MatchConfiguration::new(
            Alliance::Red,
            StartPosition::Full
        )));
        let mut cx = Context::from_waker(Waker::noop());

        for _ in 0..10 {
            assert!(routine.as_mut().poll(&mut cx).is_pending());
        }
        assert_eq!(
            journal.events(),
            vec![
                Event::SetState(Pose::feet(-4.0, 3.0, 90.0)),
                drive(-5.0, 3.0, true),
            ]
        );
    }
}
