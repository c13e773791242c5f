// Key -> velocity delta tables

use std::collections::HashMap;

use super::controller::StepSizes;
use super::keys::{KeyInput, SpecialKey};

/// Per-press change applied to the commanded velocity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub linear: f64,
    pub angular: f64,
}

impl Delta {
    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }
}

/// Two disjoint tables: one for character keys, one for named keys
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    characters: HashMap<char, Delta>,
    special: HashMap<SpecialKey, Delta>,
}

impl KeyBindings {
    pub fn new(characters: HashMap<char, Delta>, special: HashMap<SpecialKey, Delta>) -> Self {
        Self {
            characters,
            special,
        }
    }

    /// WASD and arrow keys: forward/back on the linear axis, left/right on
    /// the angular axis (left = counter-clockwise = positive)
    pub fn wasd_and_arrows(steps: StepSizes) -> Self {
        let forward = Delta::new(steps.linear_step, 0.0);
        let back = Delta::new(-steps.linear_step, 0.0);
        let left = Delta::new(0.0, steps.angular_step);
        let right = Delta::new(0.0, -steps.angular_step);

        Self::new(
            HashMap::from([('w', forward), ('s', back), ('a', left), ('d', right)]),
            HashMap::from([
                (SpecialKey::Up, forward),
                (SpecialKey::Down, back),
                (SpecialKey::Left, left),
                (SpecialKey::Right, right),
            ]),
        )
    }

    /// Delta for a key, or `None` when the key is unbound
    pub fn lookup(&self, key: KeyInput) -> Option<Delta> {
        match key {
            KeyInput::Character(c) => self.characters.get(&c).copied(),
            KeyInput::Special(k) => self.special.get(&k).copied(),
        }
    }
}
