//! Debounced mock search on `[data-search]` inputs.
//!
//! Each input keeps its own `SearchBox`; the result list is a single
//! `#search-results` container shared by all of them.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use trivix_core::search::{
    self, InputAction, NO_RESULTS, RESULTS_CLASS, RESULTS_ID, SearchBox, SearchIndex,
    SearchOutcome,
};
use trivix_types::CatalogItem;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlInputElement};

use crate::dom;
use crate::events::on;
use crate::{Runtime, timers};

/// Shared by every search input on the page.
struct Results {
    index: SearchIndex,
    /// Parent of the first `[data-search]` input; the container goes here.
    anchor: Option<Element>,
}

impl Results {
    fn apply(&self, query: &str, outcome: SearchOutcome) {
        match outcome {
            SearchOutcome::Clear => clear(),
            SearchOutcome::Results(items) => {
                gloo_console::log!(format!("Searching for: {query}"));
                if let Err(e) = self.display(&items) {
                    gloo_console::error!("cannot render search results:", e);
                }
            }
        }
    }

    fn container(&self) -> Result<Element, JsValue> {
        if let Some(existing) = dom::by_id(RESULTS_ID) {
            return Ok(existing);
        }
        let container = dom::create_element("div")?;
        container.set_id(RESULTS_ID);
        container.set_class_name(RESULTS_CLASS);
        if let Some(anchor) = &self.anchor {
            anchor.append_child(&container)?;
        }
        Ok(container)
    }

    fn display(&self, items: &[CatalogItem]) -> Result<(), JsValue> {
        let container = self.container()?;
        container.set_inner_html("");
        if items.is_empty() {
            container.append_child(&dom::create_text_div("p-4 text-gray-400", NO_RESULTS)?.into())?;
            return Ok(());
        }
        for item in items {
            let row = dom::create_element("div")?;
            row.set_class_name(
                "p-3 hover:bg-purple-500/10 cursor-pointer border-b border-gray-700/50 last:border-b-0",
            );
            row.append_child(&dom::create_text_div("font-semibold", &item.title)?.into())?;
            row.append_child(&dom::create_text_div(
                "text-sm text-gray-400",
                &search::subtitle(item),
            )?.into())?;
            container.append_child(&row)?;
        }
        Ok(())
    }
}

fn clear() {
    if let Some(container) = dom::by_id(RESULTS_ID) {
        container.remove();
    }
}

pub fn bind_search(inputs: &[HtmlInputElement], rt: &Runtime) {
    let Some(first) = inputs.first() else {
        return;
    };
    let results = Rc::new(Results {
        index: SearchIndex::new(search::mock_catalog(), rt.config.search_min_chars),
        anchor: first.parent_element(),
    });

    for input in inputs {
        let field = input.clone();
        let results = Rc::clone(&results);
        let search_box = Rc::new(RefCell::new(SearchBox::new(rt.config.search_debounce())));
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        on!(input, "input", web_sys::Event, move |_: web_sys::Event| {
            let query = field.value();
            let action = search_box.borrow_mut().input(&results.index, &query);
            match action {
                InputAction::ClearNow => {
                    pending.borrow_mut().take();
                    clear();
                }
                InputAction::Arm(ticket) => {
                    let search_box = Rc::clone(&search_box);
                    let results = Rc::clone(&results);
                    let delay = timers::millis(search_box.borrow().window());
                    let timeout = Timeout::new(delay, move || {
                        let outcome = search_box.borrow_mut().fire(&results.index, ticket);
                        if let Some(outcome) = outcome {
                            results.apply(&query, outcome);
                        }
                    });
                    // Dropping the previous handle cancels it.
                    *pending.borrow_mut() = Some(timeout);
                }
            }
        });
    }
}
