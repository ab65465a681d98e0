//! NFT card clicks and buy/bid buttons.

use trivix_core::nft::{self, PULSE_TRANSFORM};
use trivix_types::NftInfo;

use crate::dom::{self, Markers};
use crate::events::on;
use crate::{Runtime, timers};

pub fn bind_nft(markers: &Markers, rt: &Runtime) {
    let pulse = rt.config.nft_pulse();
    for card in &markers.nft_cards {
        let el = card.clone();
        on!(card, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
            let info = NftInfo {
                id: dom::data(&el, "nft-id").unwrap_or_default(),
                title: dom::data(&el, "nft-title").unwrap_or_default(),
            };
            // No detail modal yet; the click is only logged.
            gloo_console::log!(nft::viewing_line(&info));

            dom::set_style(&el, "transform", PULSE_TRANSFORM);
            let el = el.clone();
            timers::after(pulse, move || dom::set_style(&el, "transform", ""));
        });
    }

    for button in &markers.nft_actions {
        let el = button.clone();
        let toaster = rt.toaster.clone();
        on!(button, "click", web_sys::MouseEvent, move |e: web_sys::MouseEvent| {
            e.stop_propagation();
            let raw = dom::data(&el, "action").unwrap_or_default();
            let title = dom::data(&el, "nft-title").unwrap_or_default();
            match nft::parse_action(&raw) {
                Ok(action) => toaster.notify(nft::action_notice(action, &title)),
                Err(err) => gloo_console::warn!(err.to_string()),
            }
        });
    }
}
