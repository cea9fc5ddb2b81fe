//! The IO system/runner traits themselves.

use crate::{Action, Frame, Result, XY};

/// An input/output system.
///
/// This object is associated with an [`IoRunner`], which pumps the platform's events on the main thread. Both halves
/// live on that same thread: the runner blocks until something happens, then the system hands out whatever input
/// arrived.
///
/// # Terminology
///
/// * frame: The type, [`Frame`]. A pixel grid in memory.
/// * display: The actual output being rendered to, e.g. the pixels of a window.
/// * action: The type, [`Action`]. A single raw user input, conveying what changed.
pub trait IoSystem {
    /// Present a [`Frame`] on the display.
    ///
    /// This must be able to handle `Frame`s of the wrong size. Anything outside the display is cut off, anything
    /// the frame doesn't cover is painted black.
    fn draw(&mut self, frame: &Frame) -> Result<()>;

    /// Get the size of the display, in pixels.
    fn size(&self) -> XY;

    /// If a user input is queued, return it. Otherwise, return `None`.
    ///
    /// Never blocks; waiting is the [`IoRunner`]'s job.
    fn poll_input(&mut self) -> Result<Option<Action>>;

    /// Tells the associated [`IoRunner`] to stop and return control of the main thread.
    ///
    /// This will always be the last method called on this object (unless you count `Drop::drop`).
    fn stop(&mut self);
}

/// The other half of an [`IoSystem`].
///
/// This is used to do any processing that has to be done on the main thread.
pub trait IoRunner {
    /// Wait until the platform has delivered at least one event, queue any resulting [`Action`]s for the
    /// [`IoSystem`], and return. Returns whether an exit has been requested (i.e. by [`IoSystem::stop`]).
    ///
    /// Will always be called on the main thread.
    #[must_use]
    fn step(&mut self) -> bool;
}
