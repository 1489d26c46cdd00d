//! Fly-away cards and clip-path reveals driven by scroll position.

use crate::constants::*;
use crate::dom::{self, EventListener};
use crate::frame::{start_loop, AnimationLoop};
use site_core::{
    clip_reveal, opacity_for, Direction, ProgressWindow, ScrollProgressTracker, SmoothingConfig,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CardsPage {
    _frames: AnimationLoop,
    _listeners: Vec<EventListener>,
}

struct Group {
    elements: Vec<web::HtmlElement>,
    tracker: ScrollProgressTracker,
}

impl Group {
    fn measure(&mut self) {
        for (i, el) in self.elements.iter().enumerate() {
            // measure the enclosing section when there is one
            let section = el
                .closest(FLY_SECTION_SELECTOR)
                .ok()
                .flatten()
                .and_then(|s| s.dyn_into::<web::HtmlElement>().ok())
                .unwrap_or_else(|| el.clone());
            self.tracker.measure(i, dom::measure_section(&section));
        }
        self.tracker.on_scroll(dom::scroll_y());
    }
}

struct CardsView {
    cards: Group,
    reveals: Group,
    // true while a smoother moved last frame, so the settled value is applied once more
    cards_active: bool,
    reveals_active: bool,
}

impl CardsView {
    fn measure(&mut self) {
        self.cards.measure();
        self.reveals.measure();
    }

    fn on_scroll(&mut self) {
        let y = dom::scroll_y();
        self.cards.tracker.on_scroll(y);
        self.reveals.tracker.on_scroll(y);
    }

    fn tick(&mut self) {
        let cards_moving = self.cards.tracker.tick();
        if cards_moving || self.cards_active {
            self.apply_cards();
        }
        self.cards_active = cards_moving;

        let reveals_moving = self.reveals.tracker.tick();
        if reveals_moving || self.reveals_active {
            self.apply_reveals();
        }
        self.reveals_active = reveals_moving;
    }

    fn apply_cards(&self) {
        let progress = self.cards.tracker.smoothed();
        let transforms = self.cards.tracker.transforms();
        for ((el, t), p) in self.cards.elements.iter().zip(&transforms).zip(&progress) {
            dom::set_style(el, "transform", &t.to_css());
            dom::set_style(el, "opacity", &format!("{:.3}", opacity_for(*p)));
        }
    }

    fn apply_reveals(&self) {
        for (el, p) in self
            .reveals
            .elements
            .iter()
            .zip(self.reveals.tracker.smoothed())
        {
            dom::set_style(el, "clip-path", &clip_reveal(p));
        }
    }
}

fn progress_window(first: Option<&web::HtmlElement>) -> ProgressWindow {
    let mut window = ProgressWindow::default();
    if let Some(el) = first {
        if let Some(v) = dom::attr_f64(el, ATTR_FLY_START) {
            window.start_offset = v;
        }
        if let Some(v) = dom::attr_f64(el, ATTR_FLY_WINDOW) {
            window.window = v;
        }
    }
    window
}

/// Mount scroll effects if the page has fly-away cards or reveal elements.
pub fn mount(document: &web::Document) -> Option<CardsPage> {
    let cards = dom::query_all(document, FLY_CARD_SELECTOR);
    let reveals = dom::query_all(document, CLIP_REVEAL_SELECTOR);
    if cards.is_empty() && reveals.is_empty() {
        return None;
    }
    let directions = cards
        .iter()
        .enumerate()
        .map(|(i, el)| {
            el.get_attribute(ATTR_DIRECTION)
                .and_then(|d| Direction::parse(&d))
                .unwrap_or_else(|| Direction::alternating(i))
        })
        .collect();
    let smoothing = SmoothingConfig::default();
    let card_tracker = ScrollProgressTracker::new(directions, progress_window(cards.first()), smoothing);
    let reveal_tracker =
        ScrollProgressTracker::alternating(reveals.len(), progress_window(reveals.first()), smoothing);
    log::info!("[cards] tracking {} cards, {} reveals", cards.len(), reveals.len());

    let view = Rc::new(RefCell::new(CardsView {
        cards: Group {
            elements: cards,
            tracker: card_tracker,
        },
        reveals: Group {
            elements: reveals,
            tracker: reveal_tracker,
        },
        cards_active: false,
        reveals_active: false,
    }));
    {
        let mut v = view.borrow_mut();
        v.measure();
        v.apply_cards();
        v.apply_reveals();
    }

    let mut listeners = Vec::new();
    {
        let view = view.clone();
        listeners.extend(EventListener::on_window("scroll", move |_| {
            view.borrow_mut().on_scroll();
        }));
    }
    {
        let view = view.clone();
        listeners.extend(EventListener::on_window("resize", move |_| {
            view.borrow_mut().measure();
        }));
    }
    let frames = {
        let view = view.clone();
        start_loop(move |_, _| view.borrow_mut().tick())
    };
    Some(CardsPage {
        _frames: frames,
        _listeners: listeners,
    })
}
