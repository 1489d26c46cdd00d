//! Canvas globe with a DOM pin overlay.
//!
//! Sphere, graticule and land are painted on the canvas; pins are absolutely
//! positioned buttons in a sibling layer so they keep normal click and hover
//! handling. Each frame paints the canvas first, then moves the pins.

use crate::constants::*;
use crate::dom::{self, EventListener};
use crate::events::{wire_drag, DragTarget};
use crate::fetch;
use crate::frame::{start_loop, AnimationLoop};
use crate::overlay;
use fnv::FnvHashMap;
use glam::DVec2;
use site_core::{
    default_pins, parse_pins, GlobeConfig, GlobeController, GlobeEvent, GlobeScene, Pin,
    ProjectedPin, SceneFrame,
};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct GlobePage {
    _frames: AnimationLoop,
    _listeners: Vec<EventListener>,
}

struct GlobeView {
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
    css_size: DVec2,
    scene: GlobeScene,
    controller: GlobeController,
    pin_elements: FnvHashMap<String, web::HtmlElement>,
}

impl GlobeView {
    fn resize(&mut self) {
        let (w, h, dpr) = dom::sync_canvas_backing_size(&self.canvas);
        self.css_size = DVec2::new(w, h);
        self.dpr = dpr;
        self.scene.resize(w, h);
        // repaint now so the cleared backing store is never shown
        self.render();
    }

    fn render(&mut self) {
        let frame = self.scene.frame(self.controller.rotation());
        paint(&self.ctx, &frame, self.css_size, self.dpr);
        self.place_pins(&frame.pins);
        overlay::set_globe_error(&self.document, frame.error);
    }

    fn place_pins(&self, pins: &[ProjectedPin]) {
        for p in pins {
            let Some(el) = self.pin_elements.get(&p.id) else {
                continue;
            };
            dom::set_style(
                el,
                "transform",
                &format!("translate({:.2}px, {:.2}px) translate(-50%, -50%)", p.x, p.y),
            );
            let cl = el.class_list();
            if p.visible {
                _ = cl.remove_1(PIN_HIDDEN_CLASS);
                _ = el.remove_attribute("aria-hidden");
                el.set_tab_index(0);
            } else {
                _ = cl.add_1(PIN_HIDDEN_CLASS);
                _ = el.set_attribute("aria-hidden", "true");
                el.set_tab_index(-1);
            }
        }
    }

    fn tick(&mut self, dt_sec: f64, now_ms: f64) {
        let event = self.controller.tick(dt_sec, now_ms);
        self.render();
        if let Some(GlobeEvent::PinFocused(id)) = event {
            if let Some(pin) = self.scene.pin(&id) {
                overlay::show_pin_card(&self.document, pin);
            }
        }
    }

    fn select(&mut self, id: &str) {
        let Some(pin) = self.scene.pin(id).cloned() else {
            return;
        };
        overlay::hide_pin_card(&self.document);
        if self.controller.select_pin(&pin, dom::now_ms()) {
            log::info!("[globe] rotating to {}", pin.name);
        }
    }

    fn deselect(&mut self) {
        self.controller.deselect();
        overlay::hide_pin_card(&self.document);
    }
}

impl DragTarget for GlobeView {
    fn pointer_down(&mut self, ev: &web::PointerEvent, now_ms: f64) -> bool {
        let on_pin = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(PIN_SELECTOR).ok().flatten())
            .is_some();
        if on_pin {
            return false;
        }
        let started = self.controller.pointer_down(ev.pointer_id(), client_pos(ev), now_ms);
        if started {
            overlay::hide_pin_card(&self.document);
        }
        started
    }

    fn pointer_move(&mut self, ev: &web::PointerEvent, now_ms: f64) {
        self.controller
            .pointer_move(ev.pointer_id(), client_pos(ev), now_ms);
    }

    fn pointer_up(&mut self, ev: &web::PointerEvent, now_ms: f64) -> bool {
        self.controller.pointer_up(ev.pointer_id(), now_ms)
    }

    fn is_dragging(&self) -> bool {
        self.controller.mode() == site_core::GlobeMode::Dragging
    }
}

#[inline]
fn client_pos(ev: &web::PointerEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

fn trace_path(ctx: &web::CanvasRenderingContext2d, points: &[DVec2], close: bool) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    if close {
        ctx.close_path();
    }
}

fn paint(ctx: &web::CanvasRenderingContext2d, frame: &SceneFrame, css_size: DVec2, dpr: f64) {
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    ctx.clear_rect(0.0, 0.0, css_size.x, css_size.y);

    // sphere
    ctx.begin_path();
    _ = ctx.arc(frame.center.x, frame.center.y, frame.radius, 0.0, TAU);
    ctx.set_fill_style_str(SPHERE_FILL);
    ctx.fill();
    ctx.set_stroke_style_str(SPHERE_STROKE);
    ctx.set_line_width(SPHERE_LINE_WIDTH);
    ctx.stroke();

    // graticule
    ctx.set_global_alpha(GRATICULE_ALPHA);
    ctx.begin_path();
    for run in &frame.graticule {
        trace_path(ctx, run, false);
    }
    ctx.set_stroke_style_str(GRATICULE_STROKE);
    ctx.set_line_width(GRATICULE_LINE_WIDTH);
    ctx.stroke();
    ctx.set_global_alpha(1.0);

    // land
    ctx.set_fill_style_str(LAND_FILL);
    ctx.set_stroke_style_str(LAND_STROKE);
    ctx.set_line_width(LAND_LINE_WIDTH);
    for polygon in &frame.land {
        ctx.begin_path();
        for ring in polygon {
            trace_path(ctx, ring, true);
        }
        ctx.fill_with_canvas_winding_rule(web::CanvasWindingRule::Evenodd);
        ctx.stroke();
    }
}

fn load_pins(canvas: &web::HtmlCanvasElement) -> Vec<Pin> {
    let Some(text) = canvas.get_attribute(ATTR_PINS) else {
        return default_pins();
    };
    match parse_pins(&text) {
        Ok(pins) => pins,
        Err(e) => {
            log::warn!("[globe] bad {} attribute, using defaults: {}", ATTR_PINS, e);
            default_pins()
        }
    }
}

fn build_pin_elements(
    document: &web::Document,
    pins: &[Pin],
) -> anyhow::Result<FnvHashMap<String, web::HtmlElement>> {
    let mut map = FnvHashMap::default();
    let Some(layer) = document.get_element_by_id(GLOBE_PINS_ID) else {
        log::warn!("[globe] missing #{}; pins disabled", GLOBE_PINS_ID);
        return Ok(map);
    };
    layer.set_inner_html("");
    for pin in pins {
        let el: web::HtmlElement = document
            .create_element("button")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_class_name(PIN_CLASS);
        _ = el.set_attribute("type", "button");
        _ = el.set_attribute(ATTR_PIN_ID, &pin.id);
        _ = el.set_attribute("aria-label", &pin.name);
        el.set_title(&pin.name);
        _ = layer.append_child(&el);
        map.insert(pin.id.clone(), el);
    }
    Ok(map)
}

fn wire_pin_clicks(view: &Rc<RefCell<GlobeView>>) -> Vec<EventListener> {
    let entries: Vec<(String, web::HtmlElement)> = view
        .borrow()
        .pin_elements
        .iter()
        .map(|(id, el)| (id.clone(), el.clone()))
        .collect();
    entries
        .into_iter()
        .map(|(id, el)| {
            let view = view.clone();
            EventListener::new(el.as_ref(), "click", move |ev: web::Event| {
                ev.stop_propagation();
                view.borrow_mut().select(&id);
            })
        })
        .collect()
}

/// Mount the globe if the page has a globe canvas.
pub fn mount(document: &web::Document) -> anyhow::Result<Option<GlobePage>> {
    let Some(canvas_el) = document.get_element_by_id(GLOBE_CANVAS_ID) else {
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let pins = load_pins(&canvas);
    let pin_elements = build_pin_elements(document, &pins)?;
    let geo_url = canvas
        .get_attribute(ATTR_GEO_URL)
        .unwrap_or_else(|| DEFAULT_GEO_URL.to_string());

    let view = Rc::new(RefCell::new(GlobeView {
        document: document.clone(),
        canvas: canvas.clone(),
        ctx,
        dpr: 1.0,
        css_size: DVec2::ONE,
        scene: GlobeScene::new(pins),
        controller: GlobeController::new(GlobeConfig::default()),
        pin_elements,
    }));
    view.borrow_mut().resize();
    overlay::hide_pin_card(document);

    let mut listeners = wire_drag(&canvas, view.clone());
    listeners.extend(wire_pin_clicks(&view));
    {
        let view = view.clone();
        listeners.extend(EventListener::on_window("resize", move |_| {
            view.borrow_mut().resize();
        }));
    }
    {
        let view = view.clone();
        listeners.extend(dom::add_click_listener(document, PIN_CARD_CLOSE_ID, move || {
            view.borrow_mut().deselect();
        }));
    }

    // single attempt; on failure the globe stays sphere-only
    let weak = Rc::downgrade(&view);
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch::fetch_land(&geo_url).await;
        if let Some(view) = weak.upgrade() {
            let mut v = view.borrow_mut();
            v.scene.set_land(result);
            v.render();
        }
    });

    let frames = {
        let view = view.clone();
        start_loop(move |dt_sec, now_ms| view.borrow_mut().tick(dt_sec, now_ms))
    };
    log::info!("[globe] mounted with {} pins", view.borrow().scene.pins().len());
    Ok(Some(GlobePage {
        _frames: frames,
        _listeners: listeners,
    }))
}
