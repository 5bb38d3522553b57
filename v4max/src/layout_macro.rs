/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(HidKeyCode::A))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::HidKeyCode::$k))
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::action::KeyAction::$a
    };
}

/// Create a layer activate action. For example, `mo!(1)` activates layer 1 while held.
#[macro_export]
macro_rules! mo {
    ($x: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerOn($x))
    };
}

/// Create a modifier-tap-hold action
#[macro_export]
macro_rules! mt {
    ($k: ident, $m: expr) => {
        $crate::action::KeyAction::TapHold(
            $crate::action::Action::Key($crate::keycode::HidKeyCode::$k),
            $crate::action::Action::Modifier($m),
        )
    };
}

/// Create a layer toggle only action (activate layer `n` and deactivate all other layers), `n` is the layer number
#[macro_export]
macro_rules! to {
    ($x: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerToggleOnly($x))
    };
}

/// Create a V4 Max ANSI layer from its 61 keys in reading order.
///
/// Rows hold 14, 14, 13, 12 and 8 keys. The keys are placed on the 5x14 matrix positions of
/// [`PHYSICAL_KEYS`](crate::layout::PHYSICAL_KEYS), the unused matrix cells are filled with
/// `KeyAction::No`.
#[macro_export]
macro_rules! layout_ansi_61 {
    (
        [$k00: expr, $k01: expr, $k02: expr, $k03: expr, $k04: expr, $k05: expr, $k06: expr, $k07: expr, $k08: expr, $k09: expr, $k0a: expr, $k0b: expr, $k0c: expr, $k0d: expr $(,)?],
        [$k10: expr, $k11: expr, $k12: expr, $k13: expr, $k14: expr, $k15: expr, $k16: expr, $k17: expr, $k18: expr, $k19: expr, $k1a: expr, $k1b: expr, $k1c: expr, $k1d: expr $(,)?],
        [$k20: expr, $k21: expr, $k22: expr, $k23: expr, $k24: expr, $k25: expr, $k26: expr, $k27: expr, $k28: expr, $k29: expr, $k2a: expr, $k2b: expr, $k2d: expr $(,)?],
        [$k30: expr, $k32: expr, $k33: expr, $k34: expr, $k35: expr, $k36: expr, $k37: expr, $k38: expr, $k39: expr, $k3a: expr, $k3b: expr, $k3d: expr $(,)?],
        [$k40: expr, $k41: expr, $k42: expr, $k46: expr, $k4a: expr, $k4b: expr, $k4c: expr, $k4d: expr $(,)?] $(,)?
    ) => {
        [
            [$k00, $k01, $k02, $k03, $k04, $k05, $k06, $k07, $k08, $k09, $k0a, $k0b, $k0c, $k0d],
            [$k10, $k11, $k12, $k13, $k14, $k15, $k16, $k17, $k18, $k19, $k1a, $k1b, $k1c, $k1d],
            [$k20, $k21, $k22, $k23, $k24, $k25, $k26, $k27, $k28, $k29, $k2a, $k2b, $crate::a!(No), $k2d],
            [$k30, $crate::a!(No), $k32, $k33, $k34, $k35, $k36, $k37, $k38, $k39, $k3a, $k3b, $crate::a!(No), $k3d],
            [$k40, $k41, $k42, $crate::a!(No), $crate::a!(No), $crate::a!(No), $k46, $crate::a!(No), $crate::a!(No), $crate::a!(No), $k4a, $k4b, $k4c, $k4d],
        ]
    };
}
