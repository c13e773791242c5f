// Topics, defaults, command line options
use std::time::Duration;

use clap::Parser;

use crate::teleop::{Limits, StepSizes};

// Zenoh topics
pub const TOPIC_CMD_VEL: &str = "teleop/cmd_vel"; // velocity commands

// Velocity limits used when none are given
pub const DEFAULT_LINEAR_MAX: f64 = 1.0; // m/s
pub const DEFAULT_ANGULAR_MAX: f64 = 1.0; // rad/s

// How long the capture thread blocks in poll before checking for shutdown
pub const KEY_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Errors for configuration values the controller cannot work with
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive number, got {value}")]
    NonPositiveStep { name: &'static str, value: f64 },

    #[error("{name} must be a non-negative number, got {value}")]
    InvalidLimit { name: &'static str, value: f64 },
}

/// Incremental keyboard teleop: every key press nudges the commanded velocity
#[derive(Debug, Parser)]
#[command(version, about, allow_negative_numbers = true)]
pub struct Args {
    /// Maximum linear speed in m/s
    #[arg(long, default_value_t = DEFAULT_LINEAR_MAX)]
    pub linear_max: f64,

    /// Maximum angular speed in rad/s
    #[arg(long, default_value_t = DEFAULT_ANGULAR_MAX)]
    pub angular_max: f64,

    /// Increment per key press, in m/s or rad/s
    #[arg(long)]
    pub step: f64,

    /// Linear increment per key press (overrides --step)
    #[arg(long)]
    pub linear_step: Option<f64>,

    /// Angular increment per key press (overrides --step)
    #[arg(long)]
    pub angular_step: Option<f64>,

    /// Zenoh key expression to publish commands on
    #[arg(long, default_value = TOPIC_CMD_VEL)]
    pub topic: String,
}

/// Validated teleop configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TeleopConfig {
    pub limits: Limits,
    pub steps: StepSizes,
    pub topic: String,
}

impl TryFrom<Args> for TeleopConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let linear_step = positive_step("linear step", args.linear_step.unwrap_or(args.step))?;
        let angular_step = positive_step("angular step", args.angular_step.unwrap_or(args.step))?;

        Ok(Self {
            limits: Limits {
                linear_max: limit("linear max", args.linear_max)?,
                angular_max: limit("angular max", args.angular_max)?,
            },
            steps: StepSizes {
                linear_step,
                angular_step,
            },
            topic: args.topic,
        })
    }
}

fn positive_step(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositiveStep { name, value })
    }
}

fn limit(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidLimit { name, value })
    }
}
