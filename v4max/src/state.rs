/// State shared by the key override handler and the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardState {
    /// Physical left ctrl key is held
    pub left_ctrl: bool,
    /// Physical right ctrl key is held
    pub right_ctrl: bool,
    /// Base layer lighting is on, toggled with Ctrl + `\`
    pub base_lighting: bool,
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self {
            left_ctrl: false,
            right_ctrl: false,
            base_lighting: true,
        }
    }
}

impl KeyboardState {
    pub fn ctrl_held(&self) -> bool {
        self.left_ctrl || self.right_ctrl
    }
}
