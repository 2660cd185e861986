use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use log::error;
use wasm_bindgen::prelude::*;

use crate::{cancel_animation_frame, request_animation_frame};

/// Control over a loop started with [`run_frames`].
#[derive(Clone, Default)]
pub struct FrameHandle {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameHandle {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancels the pending frame; the loop never ticks again.
    pub fn stop(&self) {
        self.running.set(false);

        if let Some(request) = self.pending.take() {
            cancel_animation_frame(request);
        }
    }
}

/// Calls `tick` once per animation frame until it fails or the handle is stopped.
pub fn run_frames<F>(mut tick: F) -> Result<FrameHandle, JsValue>
where
    F: FnMut() -> Result<(), JsValue> + 'static,
{
    let handle = FrameHandle {
        running: Rc::new(Cell::new(true)),
        pending: Rc::new(Cell::new(None)),
    };

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    {
        let handle = handle.clone();

        *g.borrow_mut() = Some(Closure::new(move || {
            handle.pending.set(None);

            if !handle.is_running() {
                return;
            }

            if let Err(err) = tick() {
                error!("frame loop stopped: {err:?}");
                handle.stop();
                return;
            }

            if let Some(closure) = f.borrow().as_ref() {
                match request_animation_frame(closure) {
                    Ok(request) => handle.pending.set(Some(request)),
                    Err(err) => {
                        error!("could not request the next frame: {err:?}");
                        handle.stop();
                    }
                }
            }
        }));
    }

    if let Some(closure) = g.borrow().as_ref() {
        handle.pending.set(Some(request_animation_frame(closure)?));
    }

    Ok(handle)
}

/// Coalesces bursts of events into at most one pending animation frame.
pub struct FrameGate {
    pending: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut()>,
}

impl FrameGate {
    /// Wraps `update`, which runs on the frame following a [`FrameGate::request`].
    pub fn new<F>(mut update: F) -> FrameGate
    where
        F: FnMut() + 'static,
    {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let callback: Closure<dyn FnMut()> = {
            let pending = pending.clone();

            Closure::new(move || {
                pending.set(None);
                update();
            })
        };

        FrameGate { pending, callback }
    }

    /// Schedules the update unless one is already waiting.
    pub fn request(&self) -> Result<(), JsValue> {
        if self.pending.get().is_none() {
            self.pending
                .set(Some(request_animation_frame(&self.callback)?));
        }

        Ok(())
    }

    /// Drops a waiting update.
    pub fn cancel(&self) {
        if let Some(request) = self.pending.take() {
            cancel_animation_frame(request);
        }
    }
}
