use crate::transform::Transform2D;
use std::f64::consts::TAU;

/// Cursor motion is damped by this factor before feeding the transform
const MOUSE_MOVEMENT_SCALE: f64 = 0.004;

/// What cursor motion currently drives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Idle,
    Rotating,
    Translating,
}

/// Interprets mouse button and motion events as transform edits.
///
/// A left press starts rotating, a left press with control held starts
/// translating, and a release or any other button returns to idle. The
/// previous cursor position is tracked across every motion event, idle
/// included, so a drag never opens with a stale delta.
#[derive(Debug)]
pub struct DragTracker {
    mode: InputMode,
    previous_x: f64,
    previous_y: f64,
}

impl DragTracker {
    pub fn new() -> Self {
        DragTracker {
            mode: InputMode::Idle,
            previous_x: 0.0,
            previous_y: 0.0,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Feeds a button press or release and returns the resulting mode
    pub fn button_event(&mut self, left: bool, pressed: bool, control: bool) -> InputMode {
        self.mode = if !pressed || !left {
            InputMode::Idle
        } else if control {
            InputMode::Translating
        } else {
            InputMode::Rotating
        };
        self.mode
    }

    /// Feeds a cursor position in window coordinates. Returns true if
    /// the transform was changed.
    ///
    /// The horizontal axis is mirrored before scaling so that dragging
    /// right rotates and translates in the expected direction.
    pub fn motion(
        &mut self,
        x: f64,
        y: f64,
        window_width: f64,
        transform: &mut Transform2D,
    ) -> bool {
        let scaled_x = (window_width - x) * MOUSE_MOVEMENT_SCALE;
        let scaled_y = y * MOUSE_MOVEMENT_SCALE;
        let delta_x = self.previous_x - scaled_x;
        let delta_y = self.previous_y - scaled_y;
        self.previous_x = scaled_x;
        self.previous_y = scaled_y;

        match self.mode {
            InputMode::Idle => false,
            InputMode::Rotating => {
                transform.rotate_by(TAU * delta_x);
                true
            }
            InputMode::Translating => {
                transform.translate_x_by(delta_x);
                transform.translate_y_by(delta_y);
                true
            }
        }
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}
