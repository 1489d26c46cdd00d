use crate::constants::*;
use crate::dom::{self, EventListener};
use crate::events::{wire_drag, DragTarget};
use crate::fetch;
use crate::frame::{start_loop, AnimationLoop};
use site_core::{MarqueeConfig, MarqueeController, Review};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct MarqueePage {
    _frames: AnimationLoop,
    _listeners: Vec<EventListener>,
}

struct MarqueeView {
    track: web::HtmlElement,
    controller: MarqueeController,
}

impl MarqueeView {
    fn measure(&mut self) {
        let width = self.track.scroll_width() as f64;
        if self.controller.set_track_width(width) {
            log::debug!("[marquee] loop width {:.1}px", self.controller.loop_width());
        }
    }

    fn tick(&mut self, dt_sec: f64, now_ms: f64) {
        // fonts and images change the width after first layout
        self.measure();
        self.controller.tick(dt_sec, now_ms);
        self.apply();
    }

    fn apply(&self) {
        // shift by half a copy so the wrapped range always covers the viewport
        let x = self.controller.offset() - self.controller.loop_width() / 2.0;
        dom::set_style(&self.track, "transform", &format!("translate3d({:.2}px, 0, 0)", x));
    }
}

impl DragTarget for MarqueeView {
    fn pointer_down(&mut self, ev: &web::PointerEvent, now_ms: f64) -> bool {
        self.controller
            .pointer_down(ev.pointer_id(), ev.client_x() as f64, now_ms)
    }

    fn pointer_move(&mut self, ev: &web::PointerEvent, now_ms: f64) {
        let moved = self
            .controller
            .pointer_move(ev.pointer_id(), ev.client_x() as f64, now_ms);
        if moved.is_some() {
            self.apply();
        }
    }

    fn pointer_up(&mut self, ev: &web::PointerEvent, now_ms: f64) -> bool {
        let ended = self.controller.pointer_up(ev.pointer_id(), now_ms);
        if ended {
            self.apply();
        }
        ended
    }

    fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }
}

fn review_card(document: &web::Document, review: &Review) -> Option<web::Element> {
    let card = document.create_element("figure").ok()?;
    card.set_class_name(REVIEW_CARD_CLASS);
    if let Some(src) = &review.image {
        let img = document.create_element("img").ok()?;
        _ = img.set_attribute("src", src);
        _ = img.set_attribute("alt", &review.name);
        _ = img.set_attribute("draggable", "false");
        _ = card.append_child(&img);
    }
    let quote = document.create_element("blockquote").ok()?;
    quote.set_text_content(Some(&review.text));
    _ = card.append_child(&quote);
    let caption = document.create_element("figcaption").ok()?;
    let who = [Some(review.name.as_str()), review.role.as_deref(), review.company.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    caption.set_text_content(Some(&who));
    _ = card.append_child(&caption);
    if let Some(rating) = review.rating {
        _ = card.set_attribute("data-rating", &format!("{:.1}", rating));
    }
    Some(card)
}

/// Render the list twice; the second copy is decorative.
fn render_reviews(document: &web::Document, track: &web::HtmlElement, reviews: &[Review]) {
    track.set_inner_html("");
    if reviews.is_empty() {
        _ = track.set_attribute("data-empty", "true");
        return;
    }
    _ = track.remove_attribute("data-empty");
    for copy in 0..2 {
        for review in reviews {
            if let Some(card) = review_card(document, review) {
                if copy == 1 {
                    _ = card.set_attribute("aria-hidden", "true");
                }
                _ = track.append_child(&card);
            }
        }
    }
}

/// Mount the testimonial marquee if the page has a reviews track.
pub fn mount(document: &web::Document) -> anyhow::Result<Option<MarqueePage>> {
    let Some(track_el) = document.get_element_by_id(REVIEWS_TRACK_ID) else {
        return Ok(None);
    };
    let track: web::HtmlElement = track_el
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let mut config = MarqueeConfig::default();
    if let Some(speed) = dom::attr_f64(&track, ATTR_MARQUEE_SPEED) {
        config.speed_px_per_sec = speed;
    }
    let reviews_url = track
        .get_attribute(ATTR_REVIEWS_URL)
        .unwrap_or_else(|| DEFAULT_REVIEWS_URL.to_string());

    let view = Rc::new(RefCell::new(MarqueeView {
        track: track.clone(),
        controller: MarqueeController::new(config),
    }));

    let mut listeners = wire_drag(&track, view.clone());
    {
        let view = view.clone();
        listeners.extend(EventListener::on_window("resize", move |_| {
            let mut v = view.borrow_mut();
            v.measure();
            v.apply();
        }));
    }

    let weak = Rc::downgrade(&view);
    let doc = document.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let reviews = fetch::fetch_reviews(&reviews_url).await;
        log::info!("[marquee] {} reviews", reviews.len());
        if let Some(view) = weak.upgrade() {
            let mut v = view.borrow_mut();
            render_reviews(&doc, &v.track, &reviews);
            v.measure();
            v.apply();
        }
    });

    let frames = {
        let view = view.clone();
        start_loop(move |dt_sec, now_ms| view.borrow_mut().tick(dt_sec, now_ms))
    };
    Ok(Some(MarqueePage {
        _frames: frames,
        _listeners: listeners,
    }))
}
