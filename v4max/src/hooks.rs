//! Entry points called by the host firmware.

use crate::action::KeyAction;
use crate::config::ProfileKind;
use crate::host::Host;
use crate::key_override::process_overrides;
use crate::keycode::HidKeyCode;
use crate::profile::Profile;
use crate::state::KeyboardState;

/// Whether the host should go on with its own processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProcessResult {
    /// Let the host process the event
    Continue,
    /// The event is fully handled
    Stop,
}

impl ProcessResult {
    /// QMK convention: `true` to continue default processing
    pub fn as_bool(self) -> bool {
        matches!(self, ProcessResult::Continue)
    }
}

/// The user callbacks of the keymap, holding the state shared between them.
pub struct UserHooks {
    profile: &'static Profile,
    state: KeyboardState,
}

impl UserHooks {
    pub fn new(kind: ProfileKind) -> Self {
        Self::with_profile(kind.profile())
    }

    pub fn with_profile(profile: &'static Profile) -> Self {
        Self {
            profile,
            state: KeyboardState::default(),
        }
    }

    pub fn profile(&self) -> &'static Profile {
        self.profile
    }

    pub fn state(&self) -> &KeyboardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut KeyboardState {
        &mut self.state
    }

    /// Called on every key transition before the host processes it.
    ///
    /// Ctrl keys are tracked and always continue. Other keys go through the profile's overrides.
    pub fn process_record<H: Host>(&mut self, keycode: HidKeyCode, pressed: bool, host: &mut H) -> ProcessResult {
        match keycode {
            HidKeyCode::LCtrl => {
                self.state.left_ctrl = pressed;
                ProcessResult::Continue
            }
            HidKeyCode::RCtrl => {
                self.state.right_ctrl = pressed;
                ProcessResult::Continue
            }
            _ => process_overrides(self.profile.overrides, keycode, pressed, &mut self.state, host),
        }
    }

    /// Run a resolved keymap action through [`UserHooks::process_record`].
    ///
    /// Only plain keys are checked, layer keys and tap-hold keys always continue.
    pub fn process_action<H: Host>(&mut self, action: KeyAction, pressed: bool, host: &mut H) -> ProcessResult {
        match action.keycode() {
            Some(keycode) => self.process_record(keycode, pressed, host),
            None => ProcessResult::Continue,
        }
    }

    /// Called on every lighting frame, writes the color of every LED in `led_min..led_max`.
    ///
    /// Always returns `ProcessResult::Stop`, the host must not draw its own indicators over the frame.
    pub fn render_indicators<H: Host>(&self, host: &mut H, led_min: u8, led_max: u8) -> ProcessResult {
        self.profile.indicator.render(&self.state, host, led_min, led_max);
        ProcessResult::Stop
    }
}
