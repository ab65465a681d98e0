//! Toast notifications.
//!
//! One `Toaster` per page owns the `#notification-container` and the
//! lifecycle bookkeeping from `trivix_core::notify`. Every component that
//! wants to say something holds an `Rc<Toaster>`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use trivix_core::TrivixConfig;
use trivix_core::notify::{
    self, CONTAINER_CLASS, CONTAINER_ID, HIDDEN_CLASSES, Notice, NotificationCenter,
    NotificationId, ToastChange, ToastEvent,
};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::{dom, icons, timers};

pub struct Toaster {
    center: RefCell<NotificationCenter>,
    nodes: RefCell<HashMap<NotificationId, Element>>,
}

impl Toaster {
    pub fn new(config: &TrivixConfig) -> Rc<Self> {
        Rc::new(Self {
            center: RefCell::new(NotificationCenter::new(config)),
            nodes: RefCell::new(HashMap::new()),
        })
    }

    /// Return the container, creating it on first use.
    pub fn container(&self) -> Result<Element, JsValue> {
        if let Some(existing) = dom::by_id(CONTAINER_ID) {
            return Ok(existing);
        }
        let container = dom::create_element("div")?;
        container.set_id(CONTAINER_ID);
        container.set_class_name(CONTAINER_CLASS);
        let body = dom::document()?
            .body()
            .ok_or_else(|| JsValue::from_str("no <body>"))?;
        body.append_child(&container)?;
        Ok(container)
    }

    pub fn notify(self: &Rc<Self>, notice: Notice) {
        if let Err(e) = self.try_notify(notice) {
            gloo_console::error!("notification failed:", e);
        }
    }

    fn try_notify(self: &Rc<Self>, notice: Notice) -> Result<(), JsValue> {
        let node = render(&notice)?;
        self.container()?.append_child(&node)?;

        let (id, timers) = self.center.borrow_mut().show(notice);
        self.nodes.borrow_mut().insert(id, node);
        for timer in timers {
            self.arm(id, timer);
        }
        icons::refresh();
        Ok(())
    }

    fn arm(self: &Rc<Self>, id: NotificationId, timer: trivix_core::Scheduled<ToastEvent>) {
        let this = Rc::clone(self);
        timers::schedule(timer, move |event| this.apply(id, event));
    }

    fn apply(self: &Rc<Self>, id: NotificationId, event: ToastEvent) {
        let change = self.center.borrow_mut().apply(id, event);
        let Some(change) = change else {
            return;
        };
        match change {
            ToastChange::Show => {
                if let Some(node) = self.nodes.borrow().get(&id) {
                    for cls in HIDDEN_CLASSES {
                        dom::remove_class(node, cls);
                    }
                }
            }
            ToastChange::Hide(next) => {
                if let Some(node) = self.nodes.borrow().get(&id) {
                    for cls in HIDDEN_CLASSES {
                        dom::add_class(node, cls);
                    }
                }
                self.arm(id, next);
            }
            ToastChange::Detach => {
                if let Some(node) = self.nodes.borrow_mut().remove(&id) {
                    node.remove();
                }
            }
        }
    }
}

fn render(notice: &Notice) -> Result<Element, JsValue> {
    let toast = dom::create_element("div")?;
    toast.set_class_name(&notify::toast_class(notice.severity));

    let row = dom::create_element("div")?;
    row.set_class_name("flex items-center space-x-3");

    let icon = dom::create_element("i")?;
    icon.set_attribute("data-lucide", notice.severity.icon())?;

    let text = dom::create_element("span")?;
    dom::set_text(&text, &notice.message);

    row.append_child(&icon)?;
    row.append_child(&text)?;
    toast.append_child(&row)?;
    Ok(toast)
}
