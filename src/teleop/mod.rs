// Incremental keyboard teleop
//
// Provides:
// - Tagged key input (character vs named key) built from terminal events
// - Fixed key -> velocity delta binding tables
// - The velocity state machine that clamps and fail-safe stops

mod bindings;
pub mod controller;
pub mod keys;

pub use bindings::{Delta, KeyBindings};
pub use controller::{KeyOutcome, Limits, StepSizes, VelocityController, QUIT_KEY};
pub use keys::{KeyInput, SpecialKey};
