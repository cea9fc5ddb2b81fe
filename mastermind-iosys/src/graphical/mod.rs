//! Implements all the common window management stuff and delegates the rendering to a `GuiRenderer`.

#![cfg(feature = "gui")]

use std::{
    rc::Rc,
    sync::{
        mpsc::{self, TryRecvError},
        Arc, Once,
    },
};

use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopWindowTarget},
    keyboard::{Key as WinitKey, NamedKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowBuilder},
};

use crate::{
    action::{Action, Key, MouseButton},
    frame::Frame,
    xy::XY,
    IoRunner, IoSystem,
};

#[cfg(feature = "gui_softbuffer")]
pub mod softbuffer;

/// Convert a winit logical [`Key`](WinitKey) to one of ours. Return and the keypad's Enter both become
/// [`Key::Enter`].
fn key4logical(key: &WinitKey) -> Option<Key> {
    match key {
        WinitKey::Named(NamedKey::Enter) => Some(Key::Enter),
        WinitKey::Named(NamedKey::Escape) => Some(Key::Escape),
        WinitKey::Named(NamedKey::Space) => Some(Key::Char(' ')),
        WinitKey::Character(text) => {
            let mut chars = text.as_str().chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(Key::Char(ch)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Convert a winit [`MouseButton`](winit::event::MouseButton) to one of ours
fn mb4button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        _ => None,
    }
}

/// Common interface for the GUI rendering backends.
///
/// [`GuiSystem`] / [`GuiRunner`] use (implementations of) this trait to do the actual presenting. A `GuiRenderer`
/// takes a `winit::window::Window`, copies a [`Frame`] onto it however it wants, and that's it. `GuiSystem` and
/// `GuiRunner` handle the window creation, input processing, etc.
pub trait GuiRenderer: Sized {
    /// Attach a new renderer to the window. Called once, right after the window is created.
    fn new(window: Rc<Window>) -> crate::Result<Self>;

    /// Put a frame onto the window.
    ///
    /// This should only return once the frame is *actually presented*, not just queued. Or at the very least, once
    /// it's in the OS's hands.
    fn render(&mut self, window: &Window, frame: &Frame) -> crate::Result<()>;
}

/// A fixed-size winit window as an [`IoSystem`].
///
/// Presenting is left to the [`GuiRenderer`] `R`. This handles opening the window, translating winit's events into
/// [`Action`]s, and telling the [`GuiRunner`] to shut the event loop down on `stop`.
pub struct GuiSystem<R: GuiRenderer> {
    // renderer first, so it's dropped before the window it draws on
    renderer: R,
    window: Rc<Window>,
    inputs: mpsc::Receiver<Action>,
    kill_el: Arc<Once>,
}

impl<R: GuiRenderer> GuiSystem<R> {
    /// Open a window with an inner size of exactly `size` physical pixels.
    pub fn new(size: XY, title: &str) -> crate::Result<(Self, GuiRunner)> {
        let el = EventLoopBuilder::new().build()?;
        let window = WindowBuilder::new()
            .with_inner_size(PhysicalSize::new(size.x() as u32, size.y() as u32))
            .with_resizable(false)
            .with_title(title)
            .build(&el)?;
        let window = Rc::new(window);
        let renderer = R::new(window.clone())?;
        tracing::debug!(%size, "window opened");

        let (act_send, inputs) = mpsc::channel();
        let killer = Arc::new(Once::new());
        let runner = GuiRunner {
            el,
            rest: WrRest {
                act_send,
                kill_recv: killer.clone(),
                cursor_pos: XY(0, 0),
            },
        };
        Ok((
            Self {
                renderer,
                window,
                inputs,
                kill_el: killer,
            },
            runner,
        ))
    }
}

impl<R: GuiRenderer> IoSystem for GuiSystem<R> {
    fn draw(&mut self, frame: &Frame) -> crate::Result<()> {
        self.renderer.render(&self.window, frame)
    }

    fn size(&self) -> XY {
        let raw_sz = self.window.inner_size();
        XY(raw_sz.width as usize, raw_sz.height as usize)
    }

    fn poll_input(&mut self) -> crate::Result<Option<Action>> {
        match self.inputs.try_recv() {
            Ok(res) => Ok(Some(res)),
            Err(TryRecvError::Disconnected) => Err("input loop has terminated unexpectedly".into()),
            Err(TryRecvError::Empty) => Ok(None),
        }
    }

    fn stop(&mut self) {
        self.kill_el.call_once(|| {})
    }
}

/// Everything in a `GuiRunner` except the winit `EventLoop`.
///
/// Split out so the event callback can borrow these fields mutably while `pump_events` borrows the loop.
struct WrRest {
    act_send: mpsc::Sender<Action>,
    kill_recv: Arc<Once>,
    cursor_pos: XY,
}

impl WrRest {
    fn pump_cb(&mut self, ev: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        if self.kill_recv.is_completed() {
            elwt.exit();
            return;
        }
        // sleep until the OS has something for us
        elwt.set_control_flow(ControlFlow::Wait);

        macro_rules! send {
            ( $act:expr ) => {
                if self.act_send.send($act).is_err() {
                    // the system half is gone, so nobody's listening
                    elwt.exit();
                }
            };
        }
        let event = match ev {
            Event::WindowEvent { event, .. } => event,
            Event::Resumed => {
                send!(Action::Redraw);
                return;
            }
            _ => return,
        };
        match event {
            WindowEvent::Resized(_) | WindowEvent::RedrawRequested => send!(Action::Redraw),
            WindowEvent::CloseRequested | WindowEvent::Destroyed => send!(Action::Closed),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed && !event.repeat => {
                if let Some(key) = key4logical(&event.logical_key) {
                    send!(Action::KeyPress { key });
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pos = XY(position.x.max(0.0) as usize, position.y.max(0.0) as usize);
                if self.cursor_pos != pos {
                    self.cursor_pos = pos;
                    send!(Action::MouseMove { pos });
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                if let Some(button) = mb4button(button) {
                    send!(Action::MousePress {
                        pos: self.cursor_pos,
                        button
                    });
                }
            }
            _ => (),
        }
    }
}

/// The event-pumping half of a [`GuiSystem`]. Owns the winit event loop, so it has to stay on the main thread.
pub struct GuiRunner {
    el: EventLoop<()>,
    rest: WrRest,
}

impl IoRunner for GuiRunner {
    fn step(&mut self) -> bool {
        if self.rest.kill_recv.is_completed() {
            return true;
        }
        let rest = &mut self.rest;
        match self.el.pump_events(None, |ev, elwt| rest.pump_cb(ev, elwt)) {
            PumpStatus::Continue => self.rest.kill_recv.is_completed(),
            PumpStatus::Exit(_) => true,
        }
    }
}
