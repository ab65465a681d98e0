//! DOM helpers and marker registration.
//!
//! `Markers::discover()` runs every marker query once at start-up. Feature
//! initializers only ever see the element references collected here.

use trivix_core::view::{ButtonView, Tone};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlAudioElement, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement,
};

// ── Helpers ──

pub fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().ok()?.query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(doc) = document() else {
        return Vec::new();
    };
    match doc.query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

/// Like `query_all`, keeping only elements of type `T`.
pub fn query_all_typed<T: JsCast>(selector: &str) -> Vec<T> {
    query_all(selector)
        .into_iter()
        .filter_map(|e| e.dyn_into::<T>().ok())
        .collect()
}

fn collect(nl: &web_sys::NodeList) -> Vec<Element> {
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str) {
    let _ = el.class_list().toggle(cls);
}

pub fn data(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{name}"))
}

pub fn set_style(el: &Element, prop: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(prop, value);
    }
}

/// Works for `<button>` and falls back to the attribute for anything else
/// carrying a marker.
pub fn set_disabled(el: &Element, disabled: bool) {
    if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if disabled {
        let _ = el.set_attribute("disabled", "");
    } else {
        let _ = el.remove_attribute("disabled");
    }
}

/// Label, icon and tone classes. Leaves `disabled` to the caller.
pub fn render_button(el: &Element, view: &ButtonView) {
    el.set_inner_html(&view.html());
    for cls in Tone::ALL_CLASSES {
        remove_class(el, cls);
    }
    for cls in view.tone.classes() {
        add_class(el, cls);
    }
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()?.create_element(tag)
}

pub fn create_text_div(class: &str, text: &str) -> Result<Element, JsValue> {
    let div = create_element("div")?;
    div.set_class_name(class);
    div.set_text_content(Some(text));
    Ok(div)
}

// ── Markers ──

/// Elements the audio player reflects into.
#[derive(Clone, Default)]
pub struct PlayerElements {
    pub audio: Option<HtmlAudioElement>,
    pub play_pause: Option<Element>,
    pub progress_bar: Option<Element>,
    pub volume: Option<HtmlInputElement>,
    pub current_time: Option<Element>,
    pub duration: Option<Element>,
    pub now_playing_title: Option<Element>,
    pub now_playing_artist: Option<Element>,
    pub tracks: Vec<Element>,
}

/// Every marked element on the page, resolved once after the DOM is ready.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone, Default)]
pub struct Markers {
    // Navigation
    pub mobile_menu_button: Option<Element>,
    pub mobile_menu: Option<Element>,
    pub nav_links: Vec<Element>,
    pub anchors: Vec<Element>,

    pub player: PlayerElements,

    // Wallet
    pub wallet_buttons: Vec<Element>,
    pub nav_wallet_button: Option<Element>,

    // Animations
    pub reveal: Vec<Element>,
    pub parallax: Vec<Element>,

    pub forms: Vec<HtmlFormElement>,

    // NFT
    pub nft_cards: Vec<Element>,
    pub nft_actions: Vec<Element>,

    pub search_inputs: Vec<HtmlInputElement>,
}

impl Markers {
    pub fn discover() -> Markers {
        Markers {
            mobile_menu_button: query("[data-mobile-menu]"),
            mobile_menu: query("[data-mobile-menu-items]"),
            nav_links: query_all("nav a[href]"),
            anchors: query_all(r##"a[href^="#"]"##),

            player: PlayerElements {
                audio: by_id_typed("audio-player"),
                play_pause: by_id("play-pause"),
                progress_bar: by_id("progress-bar"),
                volume: by_id_typed("volume-control"),
                current_time: by_id("current-time"),
                duration: by_id("duration"),
                now_playing_title: by_id("now-playing-title"),
                now_playing_artist: by_id("now-playing-artist"),
                tracks: query_all("[data-play]"),
            },

            wallet_buttons: query_all("[data-wallet-connect]"),
            nav_wallet_button: query("nav [data-wallet-connect]"),

            reveal: query_all(".animate-on-scroll"),
            parallax: query_all(".parallax"),

            forms: query_all_typed("form"),

            nft_cards: query_all(".nft-card"),
            nft_actions: query_all(
                r#"[data-action="buy-nft"], [data-action="bid-nft"]"#,
            ),

            search_inputs: query_all_typed("[data-search]"),
        }
    }
}
