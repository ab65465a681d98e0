//! Navigation, scroll reveal and parallax.

use std::cell::RefCell;
use std::rc::Rc;

use trivix_core::nav::{self, ACTIVE_LINK_CLASS, MENU_HIDDEN_CLASS, REVEAL_CLASS, RevealSet};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom::{self, Markers};
use crate::events::on;
use crate::Runtime;

/// Mobile menu toggle, active-link highlight and smooth anchor scrolling.
pub fn bind_navigation(markers: &Markers) {
    if let (Some(button), Some(menu)) = (&markers.mobile_menu_button, &markers.mobile_menu) {
        let menu = menu.clone();
        on!(button, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
            dom::toggle_class(&menu, MENU_HIDDEN_CLASS);
        });
    }

    let pathname = dom::window()
        .and_then(|w| w.location().pathname())
        .unwrap_or_default();
    for link in &markers.nav_links {
        let href = link.get_attribute("href").unwrap_or_default();
        if nav::is_current_link(&href, &pathname) {
            dom::add_class(link, ACTIVE_LINK_CLASS);
        }
    }

    for anchor in &markers.anchors {
        let href = anchor.get_attribute("href").unwrap_or_default();
        on!(anchor, "click", web_sys::MouseEvent, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            if let Some(target) = nav::anchor_target(&href).and_then(dom::by_id) {
                scroll_to(&target);
            }
        });
    }
}

fn scroll_to(target: &Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// One-shot fade-in on scroll, plus parallax.
pub fn bind_animations(markers: &Markers, rt: &Runtime) {
    if let Err(e) = observe_reveals(&markers.reveal, rt) {
        gloo_console::warn!("scroll reveal unavailable:", e);
    }
    bind_parallax(&markers.parallax, rt);
}

fn observe_reveals(elements: &[Element], rt: &Runtime) -> Result<(), JsValue> {
    if elements.is_empty() {
        return Ok(());
    }
    let tracked = elements.to_vec();
    let revealed = Rc::new(RefCell::new(RevealSet::new(tracked.len())));

    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = tracked.iter().position(|el| *el == target) else {
                    continue;
                };
                if revealed
                    .borrow_mut()
                    .reveal(index, entry.is_intersecting())
                {
                    dom::add_class(&target, REVEAL_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(rt.config.reveal_threshold));
    opts.set_root_margin(&rt.config.reveal_root_margin);
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)?;
    for el in elements {
        observer.observe(el);
    }
    cb.forget();
    Ok(())
}

fn bind_parallax(elements: &[Element], rt: &Runtime) {
    if elements.is_empty() {
        return;
    }
    let Ok(window) = dom::window() else {
        return;
    };
    let layers: Vec<(Element, f64)> = elements
        .iter()
        .map(|el| {
            let speed = nav::speed_or_default(
                dom::data(el, "speed").as_deref(),
                rt.config.parallax_default_speed,
            );
            (el.clone(), speed)
        })
        .collect();

    let win = window.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let scrolled = win.scroll_y().unwrap_or(0.0);
        for (el, speed) in &layers {
            dom::set_style(el, "transform", &nav::parallax_transform(scrolled, *speed));
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        cb.as_ref().unchecked_ref(),
        &opts,
    ) {
        gloo_console::error!("cannot listen for scroll:", e);
    }
    cb.forget();
}
