/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    MouseLeft,
    MouseRight,
    MouseMiddle,
    Shift,
}

/// Controller - button states plus per-frame pointer motion
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Cursor movement in physical pixels since the last reset
    fn pointer_delta(&self) -> (f32, f32) {
        (0.0, 0.0)
    }

    /// Scroll in lines since the last reset; positive scrolls away from the user
    fn scroll_delta(&self) -> f32 {
        0.0
    }
}
