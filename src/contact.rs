use crate::constants::CONTACT_FORM_ID;
use crate::dom::EventListener;
use site_core::{ContactField, ContactForm};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ContactPage {
    _listeners: Vec<EventListener>,
}

fn field_value(target: &web::EventTarget) -> Option<(String, String)> {
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    let area = target.dyn_ref::<web::HtmlTextAreaElement>()?;
    Some((area.name(), area.value()))
}

/// Keep form state locally; submitting only logs.
pub fn mount(document: &web::Document) -> Option<ContactPage> {
    let form: web::HtmlFormElement = document
        .get_element_by_id(CONTACT_FORM_ID)?
        .dyn_into()
        .ok()?;
    let state = Rc::new(RefCell::new(ContactForm::default()));

    let input_state = state.clone();
    let on_input = EventListener::new(form.as_ref(), "input", move |ev: web::Event| {
        let Some((name, value)) = ev.target().as_ref().and_then(field_value) else {
            return;
        };
        if let Some(field) = ContactField::from_name(&name) {
            input_state.borrow_mut().set(field, &value);
        }
    });

    let form_for_submit = form.clone();
    let on_submit = EventListener::new(form.as_ref(), "submit", move |ev: web::Event| {
        ev.prevent_default();
        if state.borrow_mut().submit() {
            form_for_submit.reset();
        }
    });

    Some(ContactPage {
        _listeners: vec![on_input, on_submit],
    })
}
