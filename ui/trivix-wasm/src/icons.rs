//! Icon refresh.
//!
//! Markup carries `<i data-lucide="...">` placeholders; the page's lucide
//! bundle swaps them for SVGs. The bundle is optional.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = lucide, js_name = createIcons)]
    fn create_icons() -> Result<(), JsValue>;
}

/// Re-render icon placeholders. A missing `lucide` global is not an error.
pub fn refresh() {
    let _ = create_icons();
}
