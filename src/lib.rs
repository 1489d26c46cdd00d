#![cfg(target_arch = "wasm32")]
use site_core::Route;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod cards;
mod constants;
mod contact;
mod dom;
mod events;
mod fetch;
mod frame;
mod globe;
mod marquee;
mod overlay;

/// Controllers mounted for the current route. Each page is held only as a
/// guard: dropping it cancels its animation frames and removes its listeners.
enum Mounted {
    Cards { _page: cards::CardsPage },
    Globe { _page: globe::GlobePage },
    Marquee { _page: marquee::MarqueePage },
    Contact { _page: contact::ContactPage },
}

thread_local! {
    static MOUNTED: RefCell<Vec<Mounted>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let location = window.location();
    let path = location.pathname().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let hash = location.hash().unwrap_or_default();
    mount_path(&format!("{}{}", path, hash))
}

fn mount_path(path: &str) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let route = Route::from_path(path);
    log::info!("[route] {} -> {:?}", path, route);

    let mut mounted = Vec::new();
    if route.has_scroll_cards() {
        if let Some(_page) = cards::mount(&document) {
            mounted.push(Mounted::Cards { _page });
        }
    }
    match route {
        Route::GlobalReach => {
            if let Some(_page) = globe::mount(&document)? {
                mounted.push(Mounted::Globe { _page });
            }
        }
        Route::ProofInThePeople => {
            if let Some(_page) = marquee::mount(&document)? {
                mounted.push(Mounted::Marquee { _page });
            }
        }
        Route::Contact => {
            if let Some(_page) = contact::mount(&document) {
                mounted.push(Mounted::Contact { _page });
            }
        }
        Route::NotFound => log::warn!("[route] no page for {}", path),
        _ => {}
    }
    log::info!("[route] mounted {} controllers", mounted.len());
    MOUNTED.with(|m| *m.borrow_mut() = mounted);
    Ok(())
}

/// Tear down every mounted controller.
#[wasm_bindgen]
pub fn unmount() {
    let dropped = MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    if !dropped.is_empty() {
        log::info!("[route] unmounted {} controllers", dropped.len());
    }
}

/// Called by the client-side router after it renders a new page.
#[wasm_bindgen(js_name = mountRoute)]
pub fn mount_route(path: &str) -> Result<(), JsValue> {
    unmount();
    mount_path(path).map_err(|e| JsValue::from_str(&e.to_string()))
}
