//! Player input, in the game's vocabulary rather than the platform's.

use super::xy::XY;

/// A key that can come through in an [`Action`].
///
/// Only keys with a job get their own variant. Anything else printable comes through as `Char`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Char(char),
    /// Return, or the keypad's Enter. They're interchangeable.
    Enter,
    Escape,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Something that happened in the [`IoSystem`][super::IoSystem].
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum Action {
    /// A key went down. Held keys don't repeat.
    KeyPress { key: Key },
    /// A mouse button went down with the cursor at `pos`, in pixels from the top left of the window.
    MousePress { pos: XY, button: MouseButton },
    /// The cursor moved to `pos`.
    MouseMove { pos: XY },
    /// Whatever was on screen may be gone, e.g. because the window was uncovered; draw it again.
    Redraw,
    /// The window was closed, or the platform otherwise wants the program gone.
    Closed,
}

impl Action {
    /// Where the cursor was, for mouse actions.
    pub fn position(&self) -> Option<XY> {
        match self {
            Self::MousePress { pos, .. } | Self::MouseMove { pos } => Some(*pos),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn only_mouse_actions_have_positions() {
        let press = Action::MousePress { pos: XY(3, 4), button: MouseButton::Left };
        assert_eq!(press.position(), Some(XY(3, 4)));
        assert_eq!(Action::MouseMove { pos: XY(1, 2) }.position(), Some(XY(1, 2)));
        assert_eq!(Action::KeyPress { key: Key::Enter }.position(), None);
        assert_eq!(Action::Closed.position(), None);
    }
}
