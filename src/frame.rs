use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A requestAnimationFrame chain. Dropping it cancels the pending frame and
/// releases the callback.
pub struct AnimationLoop {
    tick: TickSlot,
    handle: Rc<Cell<Option<i32>>>,
}

/// Start calling `frame(dt_sec, now_ms)` once per animation frame.
pub fn start_loop(mut frame: impl FnMut(f64, f64) + 'static) -> AnimationLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    let mut last_instant = Instant::now();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = Instant::now();
        let dt_sec = (now - last_instant).as_secs_f64().min(MAX_FRAME_DT_SEC);
        last_instant = now;
        frame(dt_sec, dom::now_ms());
        handle_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    handle.set(request_frame(&tick));
    AnimationLoop { tick, handle }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}
