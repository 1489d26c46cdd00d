use site_core::ScrollSection;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// An event listener that is removed from its target when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        {
            log::warn!("[dom] add {} listener failed: {:?}", kind, e);
        }
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }

    /// Listener on `window`; `None` outside a browser.
    pub fn on_window(kind: &'static str, handler: impl FnMut(web::Event) + 'static) -> Option<Self> {
        let window = web::window()?;
        Some(Self::new(window.as_ref(), kind, handler))
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<EventListener> {
    let el = document.get_element_by_id(element_id)?;
    Some(EventListener::new(el.as_ref(), "click", move |_| handler()))
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns `(css_width, css_height, dpr)`.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f64, f64, f64) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    (rect.width(), rect.height(), dpr)
}

/// Milliseconds from `performance.now()`.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Document-space layout box of `el`. Uses offsets rather than the client
/// rect, which would include the transform the scroll effect itself applies.
pub fn measure_section(el: &web::HtmlElement) -> ScrollSection {
    let chain = std::iter::successors(Some(el.clone()), |e| {
        e.offset_parent()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok())
    });
    let tops = chain.map(|e| e.offset_top() as f64);
    ScrollSection::from_offsets(tops, el.offset_height() as f64)
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn attr_f64(el: &web::Element, name: &str) -> Option<f64> {
    el.get_attribute(name)?.trim().parse().ok()
}
