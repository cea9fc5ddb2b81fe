//! Turns raw [`Action`]s into moves in the [`GameState`].

use mastermind_iosys::{Action, Key, MouseButton, XY};
use tracing::{debug, trace};

use crate::{
    code::CodeMaker,
    layout::Layout,
    state::{GameState, Screen},
};

/// What the loop should do after an action's been handled.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Flow {
    /// Nothing visible changed.
    Continue,
    /// Something changed, or the window lost its contents; draw it again.
    Redraw,
    /// Shut down.
    Exit,
}

/// Apply one action to the game.
pub fn dispatch(action: &Action, state: &mut GameState, layout: &Layout, maker: &mut CodeMaker) -> Flow {
    trace!(?action, screen = ?state.screen(), "dispatching");
    match action {
        Action::MousePress { pos, button: MouseButton::Left } => click(*pos, state, layout, maker),
        Action::KeyPress { key: Key::Enter } if state.screen() == Screen::Play => match state.confirm() {
            Some(_) => Flow::Redraw,
            None => {
                debug!("guess isn't finished, not confirming");
                Flow::Continue
            }
        },
        Action::Redraw => Flow::Redraw,
        Action::Closed => Flow::Exit,
        _ => Flow::Continue,
    }
}

fn click(pos: XY, state: &mut GameState, layout: &Layout, maker: &mut CodeMaker) -> Flow {
    let (x, y) = pos.signed();
    let on_bottom = layout.bottom_button().contains(x, y);
    match state.screen() {
        Screen::Home => {
            if layout.top_button().contains(x, y) {
                state.open_rules();
                Flow::Redraw
            } else if on_bottom {
                debug!("exit clicked");
                Flow::Exit
            } else {
                Flow::Continue
            }
        }
        Screen::Rules if on_bottom => {
            state.start_game(maker.generate());
            Flow::Redraw
        }
        Screen::Play if on_bottom => {
            state.open_rules();
            Flow::Redraw
        }
        Screen::Play => match layout.locate_peg(x, y, state.trial()) {
            Some(slot) => {
                state.cycle_peg(Layout::index_of(slot));
                Flow::Redraw
            }
            None => Flow::Continue,
        },
        Screen::GameLost | Screen::GameWon if on_bottom => {
            state.open_rules();
            Flow::Redraw
        }
        _ => Flow::Continue,
    }
}
