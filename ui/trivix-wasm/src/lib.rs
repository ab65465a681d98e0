//! Trivix page runtime (WASM).
//!
//! Replaces the page's hand-written glue script: navigation, audio player
//! sync, wallet connect, scroll effects, forms, NFT cards, search and toasts.
//! Behaviour lives in `trivix-core`; the modules here bind it to the DOM.

pub mod config;
pub mod dom;
pub mod events;
pub mod exports;
pub mod forms;
pub mod icons;
pub mod nav;
pub mod nft;
pub mod player;
pub mod search;
pub mod timers;
pub mod toast;
pub mod wallet;

use std::rc::Rc;

use trivix_core::TrivixConfig;
use trivix_core::notify::Notice;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::events::on;
use crate::toast::Toaster;

const ERROR_MESSAGE: &str = "An error occurred. Please refresh the page.";

/// Shared start-up objects handed to every feature initializer.
#[derive(Clone)]
pub struct Runtime {
    pub config: Rc<TrivixConfig>,
    pub toaster: Rc<Toaster>,
}

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    let document = dom::document()?;
    if document.ready_state() == "loading" {
        let cb = Closure::once(move || {
            if let Err(e) = init() {
                gloo_console::error!("trivix init failed:", e);
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
        cb.forget();
        Ok(())
    } else {
        init()
    }
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let config = Rc::new(config::load());
    let toaster = Toaster::new(&config);
    toaster.container()?;
    let rt = Runtime { config, toaster };

    install_error_hook(&rt)?;
    log_page_load()?;

    let markers = dom::Markers::discover();
    events::bind_all(&markers, &rt);

    exports::install(&rt)?;
    icons::refresh();
    Ok(())
}

fn install_error_hook(rt: &Runtime) -> Result<(), JsValue> {
    let toaster = rt.toaster.clone();
    on!(dom::window()?, "error", web_sys::ErrorEvent, move |e: web_sys::ErrorEvent| {
        gloo_console::error!("JavaScript error:", e.message(), e.error());
        toaster.notify(Notice::error(ERROR_MESSAGE));
    });
    Ok(())
}

/// Logs `loadEventEnd - loadEventStart` from the navigation timing entry once
/// the page has loaded.
fn log_page_load() -> Result<(), JsValue> {
    let window = dom::window()?;
    let Some(performance) = window.performance() else {
        return Ok(());
    };
    on!(window, "load", web_sys::Event, move |_: web_sys::Event| {
        let performance = performance.clone();
        // loadEventEnd is only filled in after the load handlers returned.
        timers::after(std::time::Duration::ZERO, move || {
            let entry = performance.get_entries_by_type("navigation").get(0);
            if let Ok(timing) = entry.dyn_into::<web_sys::PerformanceNavigationTiming>() {
                let elapsed = timing.load_event_end() - timing.load_event_start();
                gloo_console::log!("Page load time:", elapsed, "ms");
            }
        });
    });
    Ok(())
}
