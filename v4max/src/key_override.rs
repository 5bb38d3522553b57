//! Key overrides: key combinations that replace the default processing of a key.
//!
//! A profile carries an ordered list of [`OverrideRule`]s. For each key transition the first rule
//! whose keycode and condition match is applied and the key is consumed.

use crate::hooks::ProcessResult;
use crate::host::Host;
use crate::keycode::HidKeyCode;
use crate::modifier::HidModifiers;
use crate::state::KeyboardState;

/// Rule replacing the default processing of a key when the condition applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideRule {
    pub keycode: HidKeyCode,
    pub condition: Condition,
    pub action: OverrideAction,
}

impl OverrideRule {
    pub const fn new(keycode: HidKeyCode, condition: Condition, action: OverrideAction) -> Self {
        Self {
            keycode,
            condition,
            action,
        }
    }
}

/// Condition for the rule to be used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The transition is a press
    Pressed,
    /// Either physical ctrl key is held
    CtrlHeld,
    /// The physical right ctrl key is held
    RightCtrlHeld,
    /// The highest active layer is the given layer
    Layer(u8),
    /// A shift modifier is applied, physical or not
    ShiftApplied,
    /// Applies when the internal condition does not
    Not(&'static Condition),
    /// Applies when all internal conditions apply
    All(&'static [Condition]),
}

impl Condition {
    pub fn applies<H: Host>(&self, pressed: bool, state: &KeyboardState, host: &H) -> bool {
        match self {
            Condition::Pressed => pressed,
            Condition::CtrlHeld => state.ctrl_held(),
            Condition::RightCtrlHeld => state.right_ctrl,
            Condition::Layer(layer) => host.highest_layer() == *layer,
            Condition::ShiftApplied => host.modifiers().intersects(HidModifiers::SHIFT),
            Condition::Not(c) => !c.applies(pressed, state, host),
            Condition::All(conditions) => conditions.iter().all(|c| c.applies(pressed, state, host)),
        }
    }
}

/// What an override does instead of the default key processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OverrideAction {
    /// Deactivate all layers, back to the default layer
    ClearLayers,
    /// Deactivate all layers, then activate the given one
    ActivateLayerExclusive(u8),
    /// Flip the base layer lighting
    ToggleBaseLighting,
    /// Tap a key with the current modifiers
    Tap(HidKeyCode),
    /// Tap a key with shift removed, then restore the modifiers
    TapUnshifted(HidKeyCode),
}

impl OverrideAction {
    pub fn apply<H: Host>(&self, state: &mut KeyboardState, host: &mut H) {
        match *self {
            OverrideAction::ClearLayers => host.layer_clear(),
            OverrideAction::ActivateLayerExclusive(layer) => {
                host.layer_clear();
                host.layer_on(layer);
            }
            OverrideAction::ToggleBaseLighting => {
                state.base_lighting = !state.base_lighting;
                debug!("Base layer lighting: {}", state.base_lighting);
            }
            OverrideAction::Tap(keycode) => host.tap_code(keycode),
            OverrideAction::TapUnshifted(keycode) => {
                let mods = host.modifiers();
                host.del_modifiers(HidModifiers::SHIFT);
                host.tap_code(keycode);
                host.set_modifiers(mods);
            }
        }
    }
}

/// Apply the first rule matching the key transition.
///
/// Returns `ProcessResult::Stop` if a rule consumed the key.
pub fn process_overrides<H: Host>(
    rules: &[OverrideRule],
    keycode: HidKeyCode,
    pressed: bool,
    state: &mut KeyboardState,
    host: &mut H,
) -> ProcessResult {
    let rule = rules
        .iter()
        .filter(|rule| rule.keycode == keycode)
        .find(|rule| rule.condition.applies(pressed, &*state, &*host));

    match rule {
        Some(rule) => {
            debug!("Key override on {:?}: {:?}", keycode, rule.action);
            rule.action.apply(state, host);
            ProcessResult::Stop
        }
        None => ProcessResult::Continue,
    }
}
