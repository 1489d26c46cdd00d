use crate::constants::{GLOBE_ERROR_ID, HIDDEN_CLASS, PIN_CARD_ID};
use site_core::Pin;
use web_sys as web;

#[inline]
fn show(el: &web::Element) {
    _ = el.class_list().remove_1(HIDDEN_CLASS);
    // fallback for environments without CSS class
    _ = el.remove_attribute("style");
}

#[inline]
fn hide(el: &web::Element) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
    // fallback
    _ = el.set_attribute("style", "display:none");
}

fn set_slot_text(card: &web::Element, selector: &str, text: Option<&str>) {
    if let Ok(Some(slot)) = card.query_selector(selector) {
        match text {
            Some(t) => {
                slot.set_text_content(Some(t));
                show(&slot);
            }
            None => hide(&slot),
        }
    }
}

/// Fill the detail card for a focused pin and reveal it.
pub fn show_pin_card(document: &web::Document, pin: &Pin) {
    let Some(card) = document.get_element_by_id(PIN_CARD_ID) else {
        return;
    };
    set_slot_text(&card, "[data-slot=name]", Some(&pin.name));
    set_slot_text(&card, "[data-slot=description]", pin.description.as_deref());
    if let Ok(Some(img)) = card.query_selector("[data-slot=image]") {
        match &pin.image {
            Some(src) => {
                _ = img.set_attribute("src", src);
                _ = img.set_attribute("alt", &pin.name);
                show(&img);
            }
            None => hide(&img),
        }
    }
    show(&card);
}

pub fn hide_pin_card(document: &web::Document) {
    if let Some(card) = document.get_element_by_id(PIN_CARD_ID) {
        hide(&card);
    }
}

/// Show or clear the globe's load error text.
pub fn set_globe_error(document: &web::Document, message: Option<&str>) {
    let Some(el) = document.get_element_by_id(GLOBE_ERROR_ID) else {
        return;
    };
    match message {
        Some(m) => {
            if el.text_content().as_deref() != Some(m) {
                el.set_text_content(Some(m));
            }
            show(&el);
        }
        None => hide(&el),
    }
}
