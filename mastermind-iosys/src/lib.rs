//! > *This crate was built for the `mastermind` game. If you're playing, see that crate instead.*
//!
//! `mastermind-iosys` is the platform boundary for the game. There are two central parts to familiarize yourself
//! with.
//!
//! The first is [`Frame`]. It's a grid of pixels you can freely draw to: single points, horizontal spans, and
//! scaled [`Sprite`]s with a transparent color key. Nothing you draw is visible until the frame is
//! handed to an [`IoSystem`].
//!
//! The second is [`IoSystem`], paired with an [`IoRunner`]. The system presents frames and hands out [`Action`]s;
//! the runner pumps the platform's event loop on the main thread. Builtin backends are enabled by features and
//! available in [`backends`].
//!
//! # Features
//!
//! - `gui_softbuffer`: a `winit` window rendered on the CPU through `softbuffer`.
//! - `nop`: a headless backend that plays back scripted input and keeps every presented frame, for tests.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod error;
mod traits;

mod graphical;
mod misc;

mod action;
mod color;
mod frame;
mod rect;
mod sprite;
mod xy;

pub use crate::{
    action::{Action, Key, MouseButton},
    color::Rgb,
    error::{Error, Result},
    frame::Frame,
    rect::Rect,
    sprite::Sprite,
    traits::{IoRunner, IoSystem},
    xy::XY,
};
#[cfg(feature = "gui")]
pub use graphical::{GuiRenderer, GuiRunner, GuiSystem};

/// Available backends. See the [`IoSystem`] and [`IoRunner`] docs for more information.
pub mod backends {
    #[allow(unused)]
    use super::*;

    #[cfg(feature = "nop")]
    pub type NopSystem = misc::nop::NopSystem;
    #[cfg(feature = "nop")]
    pub type NopRunner = misc::nop::NopRunner;

    #[cfg(feature = "gui_softbuffer")]
    pub type SoftbufferSystem = graphical::GuiSystem<graphical::softbuffer::SoftbufferRenderer>;
    #[cfg(feature = "gui_softbuffer")]
    pub type SoftbufferRunner = graphical::GuiRunner;
}
