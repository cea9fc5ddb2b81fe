//! Implements CPU-based presenting for GUIs.
//!
//! This should be quite widely available and compatible.

#![cfg(feature = "gui_softbuffer")]

use std::{num::NonZeroU32, rc::Rc};

use softbuffer::{Context, SoftBufferError, Surface};
use winit::window::Window;

use crate::{frame::Frame, Error, Rgb};

use super::GuiRenderer;

fn e4sbe(e: SoftBufferError) -> Error {
    Error::Bare(format!("softbuffer: {}", e).into())
}

pub struct SoftbufferRenderer {
    /// the surface has to go before the context it was made from
    surface: Surface<Rc<Window>, Rc<Window>>,
    _context: Context<Rc<Window>>,
}

impl GuiRenderer for SoftbufferRenderer {
    fn new(window: Rc<Window>) -> crate::Result<Self> {
        let context = Context::new(window.clone()).map_err(e4sbe)?;
        let surface = Surface::new(&context, window).map_err(e4sbe)?;
        Ok(Self {
            surface,
            _context: context,
        })
    }

    fn render(&mut self, window: &Window, frame: &Frame) -> crate::Result<()> {
        let win_sz = window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(win_sz.width), NonZeroU32::new(win_sz.height)) else {
            // minimized, or something like it; nothing to draw on
            return Ok(());
        };
        self.surface.resize(width, height).map_err(e4sbe)?;

        let mut buffer = self.surface.buffer_mut().map_err(e4sbe)?;
        let (win_w, win_h) = (win_sz.width as usize, win_sz.height as usize);
        let copy_w = win_w.min(frame.size().x());
        let black = Rgb::BLACK.to_u32();
        for y in 0..win_h {
            let dest = &mut buffer[y * win_w..(y + 1) * win_w];
            if y < frame.size().y() {
                dest[..copy_w].copy_from_slice(&frame.row(y)[..copy_w]);
                dest[copy_w..].fill(black);
            } else {
                dest.fill(black);
            }
        }
        buffer.present().map_err(e4sbe)?;

        Ok(())
    }
}
