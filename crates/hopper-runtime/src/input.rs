//! Input state management

use hopper_core::{HopperError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use winit::keyboard::KeyCode;

/// A named player control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Control {
    Left,
    Right,
    Up,
    Boost,
}

impl Control {
    pub const ALL: [Control; 4] = [Control::Left, Control::Right, Control::Up, Control::Boost];

    pub fn as_str(self) -> &'static str {
        match self {
            Control::Left => "left",
            Control::Right => "right",
            Control::Up => "up",
            Control::Boost => "boost",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Held status of every control. Read by physics, written only by the tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub boost: bool,
}

impl ControlState {
    pub fn is_held(&self, control: Control) -> bool {
        match control {
            Control::Left => self.left,
            Control::Right => self.right,
            Control::Up => self.up,
            Control::Boost => self.boost,
        }
    }

    fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::Left => self.left = held,
            Control::Right => self.right = held,
            Control::Up => self.up = held,
            Control::Boost => self.boost = held,
        }
    }

    /// True when no control is held
    pub fn is_neutral(&self) -> bool {
        !(self.left || self.right || self.up || self.boost)
    }
}

/// Key bindings loaded from the `[input]` config section.
///
/// Each control lists the winit key codes that drive it, e.g.
/// `left = ["ArrowLeft", "KeyA"]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_left")]
    pub left: Vec<KeyCode>,
    #[serde(default = "default_right")]
    pub right: Vec<KeyCode>,
    #[serde(default = "default_up")]
    pub up: Vec<KeyCode>,
    #[serde(default = "default_boost")]
    pub boost: Vec<KeyCode>,
}

fn default_left() -> Vec<KeyCode> {
    vec![KeyCode::ArrowLeft]
}
fn default_right() -> Vec<KeyCode> {
    vec![KeyCode::ArrowRight]
}
fn default_up() -> Vec<KeyCode> {
    vec![KeyCode::ArrowUp]
}
fn default_boost() -> Vec<KeyCode> {
    vec![KeyCode::Space]
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            left: default_left(),
            right: default_right(),
            up: default_up(),
            boost: default_boost(),
        }
    }
}

impl InputConfig {
    pub fn keys_for(&self, control: Control) -> &[KeyCode] {
        match control {
            Control::Left => &self.left,
            Control::Right => &self.right,
            Control::Up => &self.up,
            Control::Boost => &self.boost,
        }
    }

    /// Reject a key bound to two different controls
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashMap<KeyCode, Control> = HashMap::new();
        for control in Control::ALL {
            for key in self.keys_for(control) {
                if let Some(previous) = seen.insert(*key, control) {
                    if previous != control {
                        return Err(HopperError::InvalidConfig(format!(
                            "key {:?} is bound to both '{}' and '{}'",
                            key, previous, control
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Folds raw key events into level-triggered control flags.
///
/// Flags persist between presses; the tick polls them rather than reacting to
/// individual events.
pub struct InputTracker {
    controls: ControlState,
    bindings: HashMap<KeyCode, Control>,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl InputTracker {
    /// Tracker with the arrow keys and space bound
    pub fn new() -> Self {
        Self::from_config(&InputConfig::default())
    }

    pub fn from_config(config: &InputConfig) -> Self {
        let mut tracker = Self {
            controls: ControlState::default(),
            bindings: HashMap::new(),
        };
        for control in Control::ALL {
            tracker.bind(control, config.keys_for(control));
        }
        tracker
    }

    /// Bind additional keys to a control
    pub fn bind(&mut self, control: Control, keys: &[KeyCode]) {
        for key in keys {
            self.bindings.insert(*key, control);
        }
    }

    /// Which control a key drives, if any
    pub fn control_for(&self, key: KeyCode) -> Option<Control> {
        self.bindings.get(&key).copied()
    }

    /// Set a control's held flag
    pub fn on_key(&mut self, control: Control, pressed: bool) {
        if self.controls.is_held(control) != pressed {
            tracing::trace!(%control, pressed, "control changed");
        }
        self.controls.set(control, pressed);
    }

    /// Process a raw key event. Unmapped keys are ignored.
    pub fn process_key(&mut self, key: KeyCode, pressed: bool) {
        if let Some(control) = self.control_for(key) {
            self.on_key(control, pressed);
        }
    }

    pub fn process_key_down(&mut self, key: KeyCode) {
        self.process_key(key, true);
    }

    pub fn process_key_up(&mut self, key: KeyCode) {
        self.process_key(key, false);
    }

    /// Release every control (window lost focus)
    pub fn clear(&mut self) {
        self.controls = ControlState::default();
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let mut input = InputTracker::new();

        input.process_key_down(KeyCode::ArrowLeft);
        input.process_key_down(KeyCode::ArrowUp);
        assert!(input.controls().left);
        assert!(input.controls().up);
        assert!(!input.controls().right);

        input.process_key_down(KeyCode::Space);
        assert!(input.controls().is_held(Control::Boost));
    }

    #[test]
    fn test_flags_persist_until_release() {
        let mut input = InputTracker::new();

        input.process_key_down(KeyCode::ArrowRight);
        assert!(input.controls().right);
        // No per-frame reset: still held
        assert!(input.controls().right);

        input.process_key_up(KeyCode::ArrowRight);
        assert!(!input.controls().right);
    }

    #[test]
    fn test_unmapped_key_is_noop() {
        let mut input = InputTracker::new();
        input.process_key_down(KeyCode::KeyQ);
        assert!(input.controls().is_neutral());
    }

    #[test]
    fn test_on_key_direct() {
        let mut input = InputTracker::new();
        input.on_key(Control::Boost, true);
        assert!(input.controls().boost);
        input.on_key(Control::Boost, false);
        assert!(!input.controls().boost);
    }

    #[test]
    fn test_custom_binding() {
        let mut input = InputTracker::new();
        input.bind(Control::Left, &[KeyCode::KeyA]);

        input.process_key_down(KeyCode::KeyA);
        assert!(input.controls().left);

        input.process_key_up(KeyCode::KeyA);
        input.process_key_down(KeyCode::ArrowLeft);
        assert!(input.controls().left);
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut input = InputTracker::new();
        input.process_key_down(KeyCode::ArrowLeft);
        input.process_key_down(KeyCode::Space);
        input.clear();
        assert!(input.controls().is_neutral());
    }

    #[test]
    fn test_config_from_toml() {
        let config: InputConfig = toml::from_str(r#"left = ["KeyA", "ArrowLeft"]"#).unwrap();
        assert_eq!(config.left, vec![KeyCode::KeyA, KeyCode::ArrowLeft]);
        assert_eq!(config.boost, vec![KeyCode::Space]);
        assert!(config.validate().is_ok());

        let input = InputTracker::from_config(&config);
        assert_eq!(input.control_for(KeyCode::KeyA), Some(Control::Left));
    }

    #[test]
    fn test_conflicting_binding_rejected() {
        let config = InputConfig {
            up: vec![KeyCode::Space],
            ..InputConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(HopperError::InvalidConfig(_))
        ));
    }
}
