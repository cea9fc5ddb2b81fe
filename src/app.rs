//! Ties the game to an [`IoSystem`]: owns everything the game needs, feeds it input, and shows the results.

use mastermind_iosys::{Action, Frame, IoRunner, IoSystem};
use tracing::{debug, info, warn};

use crate::{
    assets::Textures,
    code::CodeMaker,
    input::{dispatch, Flow},
    layout::Layout,
    render::render,
    state::GameState,
    Result,
};

/// The whole game, minus the window it's shown in.
pub struct App {
    state: GameState,
    layout: Layout,
    textures: Textures,
    maker: CodeMaker,
    frame: Frame,
}

impl App {
    /// A game on the home screen, drawn to a frame sized for `layout`.
    pub fn new(layout: Layout, textures: Textures, maker: CodeMaker) -> Self {
        Self {
            state: GameState::new(),
            frame: Frame::new(layout.window()),
            layout,
            textures,
            maker,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The last frame drawn.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Apply one input.
    pub fn handle(&mut self, action: &Action) -> Flow {
        dispatch(action, &mut self.state, &self.layout, &mut self.maker)
    }

    /// Redraw the frame from the current state and put it on screen.
    pub fn present(&mut self, sys: &mut impl IoSystem) -> Result<()> {
        render(&mut self.frame, &self.state, &self.layout, &self.textures);
        sys.draw(&self.frame)?;
        Ok(())
    }

    /// Play until the player quits or the window closes.
    ///
    /// Every queued action is handled before anything is redrawn, and the frame is only presented if one of them
    /// changed something. Returns the `App`, primarily for testing purposes.
    pub fn run(mut self, sys: &mut impl IoSystem, runner: &mut impl IoRunner) -> Result<Self> {
        if sys.size() != self.layout.window() {
            warn!(display = %sys.size(), layout = %self.layout.window(), "display isn't the size the board was laid out for");
        }
        self.present(sys)?;
        info!("game started");

        'mainloop: loop {
            if runner.step() {
                break 'mainloop;
            }
            let mut dirty = false;
            while let Some(action) = sys.poll_input()? {
                match self.handle(&action) {
                    Flow::Continue => (),
                    Flow::Redraw => dirty = true,
                    Flow::Exit => {
                        info!(screen = ?self.state.screen(), "exiting");
                        sys.stop();
                        break 'mainloop;
                    }
                }
            }
            if dirty {
                debug!(screen = ?self.state.screen(), "presenting");
                self.present(sys)?;
            }
        }
        Ok(self)
    }
}
