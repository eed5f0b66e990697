//! Recording peripherals for tests and host-side simulation.
//!
//! Every mock device writes what it was asked to do into a shared [`Journal`],
//! so a test can check the exact order of motion, actuation, and screen
//! commands across devices. The controller replays a script of frames.
//!
//! # Example
//!
//! ```
//! use spinup::peripherals::{
//!     controller::{Button, OperatorInput},
//!     mock::{Journal, MockController},
//! };
//!
//! let journal = Journal::default();
//! let mut controller = MockController::new(journal.clone()).tap(Button::A);
//!
//! assert!(controller.state().button_a.is_now_pressed());
//! assert!(!controller.state().button_a.is_pressed());
//! ```

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
    time::Duration,
};

use embassy_futures::yield_now;

use super::{
    Actuator, Platform,
    controller::{Button, ButtonState, ControllerState, OperatorInput},
};
use crate::{
    drivetrain::{ArcadeDrive, Chassis},
    error::{Error, Result},
    motion::pose::{Point, Pose},
};

/// One recorded device command.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SetState(Pose),
    DriveTo { target: Point, reverse: bool },
    TurnTo(Point),
    Arcade { forward: f64, turn: f64 },
    Velocity(f64),
    Voltage(f64),
    Sleep(Duration),
    Text { row: u8, col: u8, text: String },
    ClearScreen,
}

impl Event {
    /// Whether the event moved the base or changed its believed pose.
    pub fn is_motion(&self) -> bool {
        matches!(
            self,
            Event::SetState(_) | Event::DriveTo { .. } | Event::TurnTo(_)
        )
    }
}

/// Shared, ordered record of device commands.
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    pub fn push(&self, event: Event) { self.0.borrow_mut().push(event); }

    /// A copy of everything recorded so far.
    pub fn events(&self) -> Vec<Event> { self.0.borrow().clone() }

    /// Recorded events that pass `filter`.
    pub fn filtered(&self, filter: impl Fn(&Event) -> bool) -> Vec<Event> {
        self.0.borrow().iter().filter(|e| filter(e)).cloned().collect()
    }

    /// Only base motion and pose commands.
    pub fn motion(&self) -> Vec<Event> { self.filtered(Event::is_motion) }

    /// Only screen text writes, as strings.
    pub fn texts(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize { self.0.borrow().len() }

    pub fn is_empty(&self) -> bool { self.0.borrow().is_empty() }

    pub fn clear(&self) { self.0.borrow_mut().clear(); }
}

/// A chassis that settles instantly on every target.
///
/// Driving moves the believed pose onto the target; turning points it at the
/// target. A stalled chassis never settles.
#[derive(Debug)]
pub struct MockChassis {
    journal: Journal,
    pose:    Pose,
    stalled: bool,
}

impl MockChassis {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            pose: Pose::origin(),
            stalled: false,
        }
    }

    /// A chassis whose motion commands never complete.
    pub fn stalled(journal: Journal) -> Self {
        Self {
            stalled: true,
            ..Self::new(journal)
        }
    }

    async fn settle(&self) {
        if self.stalled {
            core::future::pending::<()>().await;
        }
    }
}

impl ArcadeDrive for MockChassis {
    fn arcade(&mut self, forward: f64, turn: f64) {
        self.journal.push(Event::Arcade { forward, turn });
    }
}

impl Chassis for MockChassis {
    fn set_state(&mut self, pose: Pose) {
        self.journal.push(Event::SetState(pose));
        self.pose = pose;
    }

    fn state(&self) -> Pose { self.pose }

    async fn drive_to_point(&mut self, target: Point, reverse: bool) {
        self.journal.push(Event::DriveTo { target, reverse });
        self.settle().await;
        let from = self.pose.point();
        let heading = if from == target {
            self.pose.heading
        } else if reverse {
            from.heading_to(&target) + 180.0
        } else {
            from.heading_to(&target)
        };
        self.pose = Pose::new(target.x, target.y, heading);
    }

    async fn turn_to_point(&mut self, target: Point) {
        self.journal.push(Event::TurnTo(target));
        self.settle().await;
        let from = self.pose.point();
        if from != target {
            self.pose = Pose::new(from.x, from.y, from.heading_to(&target));
        }
    }
}

/// A motor that records commands, or rejects them when built with
/// [`MockMotor::failing`].
#[derive(Debug)]
pub struct MockMotor {
    journal: Journal,
    failing: bool,
}

impl MockMotor {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            failing: false,
        }
    }

    /// A motor that records commands but reports every one as failed.
    pub fn failing(journal: Journal) -> Self {
        Self {
            journal,
            failing: true,
        }
    }

    fn result(&self) -> Result<()> {
        if self.failing {
            Err(Error::Device("motor disconnected".into()))
        } else {
            Ok(())
        }
    }
}

impl Actuator for MockMotor {
    fn move_velocity(&mut self, rpm: f64) -> Result<()> {
        self.journal.push(Event::Velocity(rpm));
        self.result()
    }

    fn move_voltage(&mut self, volts: f64) -> Result<()> {
        self.journal.push(Event::Voltage(volts));
        self.result()
    }
}

/// One scripted controller sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub held:   Vec<Button>,
    pub left_x: f64,
    pub left_y: f64,
}

/// A controller that replays scripted frames, then idles forever.
#[derive(Debug)]
pub struct MockController {
    journal:  Journal,
    frames:   VecDeque<Frame>,
    previous: Vec<Button>,
}

impl MockController {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            frames: VecDeque::new(),
            previous: Vec::new(),
        }
    }

    /// Appends a frame.
    pub fn frame(mut self, frame: Frame) -> Self {
        self.frames.push_back(frame);
        self
    }

    /// Appends a frame with `buttons` held and sticks centered.
    pub fn hold(self, buttons: &[Button]) -> Self {
        self.frame(Frame {
            held: buttons.to_vec(),
            ..Frame::default()
        })
    }

    /// Appends a frame with nothing held.
    pub fn idle(self) -> Self { self.frame(Frame::default()) }

    /// Presses and releases `button` over two frames.
    pub fn tap(self, button: Button) -> Self { self.hold(&[button]).idle() }

    /// Frames still waiting to be sampled.
    pub fn remaining(&self) -> usize { self.frames.len() }
}

impl OperatorInput for MockController {
    fn state(&mut self) -> ControllerState {
        let frame = self.frames.pop_front().unwrap_or_default();
        let mut state = ControllerState {
            left_x: frame.left_x,
            left_y: frame.left_y,
            ..ControllerState::default()
        };
        for button in Button::ALL {
            *state.button_mut(button) = ButtonState::from_levels(
                self.previous.contains(&button),
                frame.held.contains(&button),
            );
        }
        self.previous = frame.held;
        state
    }

    fn set_text(&mut self, row: u8, col: u8, text: &str) -> Result<()> {
        self.journal.push(Event::Text {
            row,
            col,
            text: text.to_owned(),
        });
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.journal.push(Event::ClearScreen);
        Ok(())
    }
}

/// A platform with a simulated clock.
///
/// Sleeping advances the clock instantly and yields once, so a loop that never
/// finishes stays pending instead of hanging the test thread when polled by
/// hand.
#[derive(Debug)]
pub struct MockPlatform {
    journal:   Journal,
    now:       Cell<Duration>,
    connected: bool,
}

impl MockPlatform {
    /// A platform without a competition controller attached.
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            now: Cell::new(Duration::ZERO),
            connected: false,
        }
    }

    /// A platform plugged into a field controller.
    pub fn connected(journal: Journal) -> Self {
        Self {
            connected: true,
            ..Self::new(journal)
        }
    }
}

impl Platform for MockPlatform {
    async fn sleep(&self, duration: Duration) {
        self.journal.push(Event::Sleep(duration));
        self.now.set(self.now.get() + duration);
        yield_now().await;
    }

    fn uptime(&self) -> Duration { self.now.get() }

    fn competition_connected(&self) -> bool { self.connected }
}
