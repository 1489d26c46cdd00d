use crate::constants::DRAGGING_CLASS;
use crate::dom::{self, EventListener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Something that can be dragged with a pointer (globe, marquee track).
pub trait DragTarget {
    /// Return false to decline the drag (e.g. the press landed on a pin).
    fn pointer_down(&mut self, ev: &web::PointerEvent, now_ms: f64) -> bool;
    fn pointer_move(&mut self, ev: &web::PointerEvent, now_ms: f64);
    /// Return true only if this pointer owned the drag and it has ended.
    fn pointer_up(&mut self, ev: &web::PointerEvent, now_ms: f64) -> bool;
    fn is_dragging(&self) -> bool;
}

/// Wire pointer down on `element` and move/up/cancel on the window.
/// Listeners are removed when the returned handles are dropped.
pub fn wire_drag<T: DragTarget + 'static>(
    element: &web::HtmlElement,
    target: Rc<RefCell<T>>,
) -> Vec<EventListener> {
    let mut listeners = vec![wire_pointerdown(element, target.clone())];
    listeners.extend(wire_pointermove(target.clone()));
    listeners.extend(wire_pointerup(element, target.clone(), "pointerup"));
    listeners.extend(wire_pointerup(element, target, "pointercancel"));
    listeners
}

fn wire_pointerdown<T: DragTarget + 'static>(
    element: &web::HtmlElement,
    target: Rc<RefCell<T>>,
) -> EventListener {
    let el = element.clone();
    EventListener::new(element.as_ref(), "pointerdown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if !target.borrow_mut().pointer_down(ev, dom::now_ms()) {
            return;
        }
        _ = el.set_pointer_capture(ev.pointer_id());
        _ = el.class_list().add_1(DRAGGING_CLASS);
        ev.prevent_default();
    })
}

fn wire_pointermove<T: DragTarget + 'static>(target: Rc<RefCell<T>>) -> Option<EventListener> {
    EventListener::on_window("pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if !target.borrow().is_dragging() {
            return;
        }
        target.borrow_mut().pointer_move(ev, dom::now_ms());
    })
}

fn wire_pointerup<T: DragTarget + 'static>(
    element: &web::HtmlElement,
    target: Rc<RefCell<T>>,
    kind: &'static str,
) -> Option<EventListener> {
    let el = element.clone();
    EventListener::on_window(kind, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if !target.borrow().is_dragging() {
            return;
        }
        if !target.borrow_mut().pointer_up(ev, dom::now_ms()) {
            return;
        }
        _ = el.release_pointer_capture(ev.pointer_id());
        _ = el.class_list().remove_1(DRAGGING_CLASS);
    })
}
