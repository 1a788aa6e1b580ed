use log::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::*;

use crate::error::*;
use crate::shader_surface::*;
use crate::surface::*;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Renders a `ShaderSurface` on every animation frame until stopped or dropped.
///
/// `ShaderSurface` only renders when asked; this hands it to the browser's
/// `requestAnimationFrame`, passing the frame timestamp through as `iTime`.
pub struct FrameLoop {
    window: Window,
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start<S: Surface + 'static>(shader_surface: Rc<ShaderSurface<S>>) -> Result<Self> {
        let window = window().ok_or(Error::WindowUnavailable)?;
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let frame_window = window.clone();
        let frame_callback = callback.clone();
        let frame_pending = pending.clone();
        let closure: Closure<dyn FnMut(f64)> = Closure::wrap(Box::new(move |timestamp: f64| {
            frame_pending.set(None);
            shader_surface.render_frame(Some(timestamp));

            if let Some(next) = frame_callback.borrow().as_ref() {
                match frame_window.request_animation_frame(next.as_ref().unchecked_ref()) {
                    Ok(handle) => frame_pending.set(Some(handle)),
                    Err(err) => error!("requestAnimationFrame failed: {:?}", err),
                }
            }
        }));

        let handle = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|err| Error::AnimationFrame(format!("{:?}", err)))?;
        *callback.borrow_mut() = Some(closure);
        pending.set(Some(handle));

        Ok(FrameLoop { window, callback, pending })
    }

    pub fn is_running(&self) -> bool {
        self.callback.borrow().is_some()
    }

    /// Cancels the pending frame, if any. The loop can't be restarted.
    pub fn stop(&self) {
        if let Some(handle) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(handle) {
                warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
        // Dropping the closure also breaks the reference cycle through `frame_callback`
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
