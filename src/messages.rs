// Message types published by the teleop

use serde::{Deserialize, Serialize};

// Velocity command from teleop -> robot motion controller
// linear in m/s (forward), angular in rad/s (positive = counter-clockwise)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct VelocityCommand {
    pub linear: f64,
    pub angular: f64,
}

impl VelocityCommand {
    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }

    /// Full stop
    pub fn stop() -> Self {
        Self::default()
    }

    pub fn is_stopped(&self) -> bool {
        self.linear == 0.0 && self.angular == 0.0
    }
}
