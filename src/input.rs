/// Polled input snapshot handed to the frame step.  Whatever produces it
/// (keyboard, joystick, a test) writes the fields; the frame reads one copy.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    /// Edge-triggered: true only on the frame the jump was pressed.
    pub jump_pressed: bool,
    /// Analog stick strength in [-1, 1]; nonzero overrides the booleans.
    pub analog_axis: f32,
}

impl InputSnapshot {
    /// Horizontal intent in [-1, 1].
    pub fn horizontal(&self) -> f32 {
        if self.analog_axis != 0.0 {
            self.analog_axis.clamp(-1.0, 1.0)
        } else if self.move_left {
            -1.0
        } else if self.move_right {
            1.0
        } else {
            0.0
        }
    }
}
