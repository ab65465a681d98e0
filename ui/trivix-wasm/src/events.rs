//! Event binding.
//!
//! `bind_all` hands each feature initializer its registered elements. New
//! listeners go through `on!` so closures are wrapped and leaked the same
//! way everywhere.

use crate::dom::Markers;
use crate::{Runtime, forms, nav, nft, player, search, wallet};

/// Attach a handler for `$kind` events on anything deref-ing to
/// `EventTarget`. The closure lives for the rest of the page.
macro_rules! on {
    ($target:expr, $kind:expr, $ty:ty, $cb:expr) => {{
        let cb = ::wasm_bindgen::closure::Closure::wrap(Box::new($cb) as Box<dyn FnMut($ty)>);
        let f: &::js_sys::Function = ::wasm_bindgen::JsCast::unchecked_ref(
            AsRef::<::wasm_bindgen::JsValue>::as_ref(&cb),
        );
        if let Err(e) = $target.add_event_listener_with_callback($kind, f) {
            ::gloo_console::error!(format!("cannot listen for {}:", $kind), e);
        }
        cb.forget();
    }};
}

pub(crate) use on;

/// Bind every feature. Call once after the DOM is ready.
pub fn bind_all(markers: &Markers, rt: &Runtime) {
    nav::bind_navigation(markers);
    player::bind_player(&markers.player);
    wallet::bind_wallets(markers, rt);
    nav::bind_animations(markers, rt);
    forms::bind_forms(&markers.forms, rt);
    nft::bind_nft(markers, rt);
    search::bind_search(&markers.search_inputs, rt);
}
