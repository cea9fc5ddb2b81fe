#![cfg(feature = "nop")]

use std::{
    collections::VecDeque,
    sync::{Arc, Once},
};

use crate::{action::Action, frame::Frame, xy::XY, IoRunner, IoSystem};

/// A headless [`IoSystem`]: plays back a fixed script of [`Action`]s, then reports the "window" as closed.
///
/// The script is delivered as one batch, i.e. `poll_input` hands out every scripted action and then `None`. The
/// close comes in a batch of its own after that, so whatever the script led to gets a chance to be drawn.
///
/// Every presented frame is kept, so tests can look at exactly what a player would have seen.
pub struct NopSystem {
    script: VecDeque<Action>,
    drained: bool,
    closed: bool,
    size: XY,
    frames: Vec<Frame>,
    kill: Arc<Once>,
}

impl NopSystem {
    /// A display of `size` pixels which will deliver `script` in order.
    pub fn scripted(size: XY, script: impl IntoIterator<Item = Action>) -> (Self, NopRunner) {
        let kill = Arc::new(Once::new());
        let sys = Self {
            script: script.into_iter().collect(),
            drained: false,
            closed: false,
            size,
            frames: vec![],
            kill: kill.clone(),
        };
        (sys, NopRunner(kill))
    }

    /// Every frame drawn so far, oldest first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The frame currently "on screen".
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Whether [`IoSystem::stop`] has been called.
    pub fn stopped(&self) -> bool {
        self.kill.is_completed()
    }
}

impl IoSystem for NopSystem {
    fn draw(&mut self, frame: &Frame) -> crate::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn size(&self) -> XY {
        self.size
    }

    fn poll_input(&mut self) -> crate::Result<Option<Action>> {
        if let Some(action) = self.script.pop_front() {
            return Ok(Some(action));
        }
        if !self.drained {
            self.drained = true;
            Ok(None)
        } else if !self.closed {
            self.closed = true;
            Ok(Some(Action::Closed))
        } else {
            Ok(None)
        }
    }

    fn stop(&mut self) {
        self.kill.call_once(|| {})
    }
}

/// The [`IoRunner`] half of a [`NopSystem`]. Never waits; just reports whether the system was stopped.
pub struct NopRunner(Arc<Once>);

impl IoRunner for NopRunner {
    fn step(&mut self) -> bool {
        self.0.is_completed()
    }
}
