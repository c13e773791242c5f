// Incremental velocity state machine
//
// Each key press adds a fixed delta to the commanded velocity, then clamps:
// - linear to [0, linear_max] (forward only; "back" can brake to zero but never reverse)
// - angular to [-angular_max, angular_max]
// Any unbound key is a full stop.

use tracing::debug;

use super::bindings::KeyBindings;
use super::keys::KeyInput;
use crate::messages::VelocityCommand;

/// Character key that asks the host to shut down
pub const QUIT_KEY: char = 'q';

/// Velocity ceilings. Both must be finite and non-negative; the controller
/// does not correct bad values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub linear_max: f64,
    pub angular_max: f64,
}

/// Magnitude of the per-press change on each axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSizes {
    pub linear_step: f64,
    pub angular_step: f64,
}

/// Result of a key press
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyOutcome {
    /// Publish this command
    Continue(VelocityCommand),
    /// Quit key pressed; the command is left as it was
    RequestShutdown,
}

pub struct VelocityController {
    command: VelocityCommand,
    limits: Limits,
    bindings: KeyBindings,
}

impl VelocityController {
    /// Controller with the default WASD / arrow bindings
    pub fn new(limits: Limits, steps: StepSizes) -> Self {
        Self::with_bindings(limits, KeyBindings::wasd_and_arrows(steps))
    }

    pub fn with_bindings(limits: Limits, bindings: KeyBindings) -> Self {
        Self {
            command: VelocityCommand::stop(),
            limits,
            bindings,
        }
    }

    /// Apply the next key press and return what the host should do
    pub fn apply_key_event(&mut self, event: KeyInput) -> KeyOutcome {
        if event == KeyInput::Character(QUIT_KEY) {
            return KeyOutcome::RequestShutdown;
        }

        match self.bindings.lookup(event) {
            Some(delta) => {
                self.command = VelocityCommand {
                    linear: saturate(self.command.linear + delta.linear, 0.0, self.limits.linear_max),
                    angular: saturate(
                        self.command.angular + delta.angular,
                        -self.limits.angular_max,
                        self.limits.angular_max,
                    ),
                };
            }
            None => {
                debug!("Unbound key {:?}, stopping", event);
                self.command = VelocityCommand::stop();
            }
        }

        KeyOutcome::Continue(self.command)
    }

    /// Zero the command
    pub fn reset(&mut self) {
        self.command = VelocityCommand::stop();
    }

    pub fn command(&self) -> VelocityCommand {
        self.command
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }
}

// Upper bound first, then lower: unlike f64::clamp this never panics, and a
// negative upper bound collapses to the lower bound.
fn saturate(value: f64, lower: f64, upper: f64) -> f64 {
    value.min(upper).max(lower)
}
