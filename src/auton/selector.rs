//! Pre-match configuration selection on the controller.
//!
//! The operator first picks an alliance, then a starting position, using the
//! face buttons. Each stage shows its button legend on the controller screen:
//!
//! | Stage    | Prompt                 | A           | Y     | X    |
//! |----------|------------------------|-------------|-------|------|
//! | Alliance | `A:red Y:blue`         | Red         | Blue  |      |
//! | Position | `A:roll Y:other X:all` | SpinnerOnly | Other | Full |
//!
//! Only rising edges count, so a button still held from an earlier stage (or
//! from the teleop trigger) does not select anything until it is pressed again.
//! Selection waits for the operator indefinitely.

use core::fmt::Debug;
use std::time::Duration;

use log::{info, warn};

use crate::{
    peripherals::{
        Platform,
        controller::{Button, ControllerState, OperatorInput},
    },
    teams::{Alliance, MatchConfiguration, StartPosition},
};

/// A choice the operator makes with controller buttons.
pub trait Selection: Copy + Debug + 'static {
    /// Button legend shown while waiting for this choice.
    const PROMPT: &'static str;

    /// Buttons and the values they select. Earlier entries win when several
    /// buttons go down in the same sample.
    const BINDINGS: &'static [(Button, Self)];
}

impl Selection for Alliance {
    const PROMPT: &'static str = "A:red Y:blue";
    const BINDINGS: &'static [(Button, Self)] =
        &[(Button::A, Alliance::Red), (Button::Y, Alliance::Blue)];
}

impl Selection for StartPosition {
    const PROMPT: &'static str = "A:roll Y:other X:all";
    const BINDINGS: &'static [(Button, Self)] = &[
        (Button::A, StartPosition::SpinnerOnly),
        (Button::Y, StartPosition::Other),
        (Button::X, StartPosition::Full),
    ];
}

/// Returns the choice whose button went down in `state`, if any.
pub fn poll<T: Selection>(state: &ControllerState) -> Option<T> {
    T::BINDINGS
        .iter()
        .find(|(button, _)| state.button(*button).is_now_pressed())
        .map(|(_, choice)| *choice)
}

/// Waits on the controller for a full [`MatchConfiguration`].
pub struct ConfigurationSelector<'a, I, P> {
    input:         &'a mut I,
    platform:      &'a P,
    poll_interval: Duration,
}

impl<'a, I: OperatorInput, P: Platform> ConfigurationSelector<'a, I, P> {
    pub fn new(input: &'a mut I, platform: &'a P, poll_interval: Duration) -> Self {
        Self {
            input,
            platform,
            poll_interval,
        }
    }

    /// Prompts for an alliance, then a starting position.
    ///
    /// Returns only once both are chosen.
    pub async fn select(&mut self) -> MatchConfiguration {
        let alliance = self.choose::<Alliance>().await;
        let position = self.choose::<StartPosition>().await;
        let config = MatchConfiguration::new(alliance, position);
        info!("Match configuration selected: {}", config);
        config
    }

    async fn choose<T: Selection>(&mut self) -> T {
        self.prompt(T::PROMPT);
        loop {
            let state = self.input.state();
            if let Some(choice) = poll::<T>(&state) {
                info!("Selected {:?}", choice);
                return choice;
            }
            self.platform.sleep(self.poll_interval).await;
        }
    }

    fn prompt(&mut self, text: &str) {
        self.input.clear_screen().unwrap_or_else(|e| {
            warn!("Controller Screen Error: {}", e);
        });
        self.input.set_text(0, 0, text).unwrap_or_else(|e| {
            warn!("Controller Screen Error: {}", e);
        });
    }
}
