//! `window.Trivix`: helpers other scripts on the page may call.
//!
//! - `showNotification(message, type?)`
//! - `formatTime(seconds)`
//! - `debounce(func, wait)` / `throttle(func, limit)`, both returning a
//!   wrapped function that forwards its `this` and all arguments.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Object, Reflect};
use trivix_core::notify::{self, Notice};
use trivix_core::player;
use trivix_core::timing::{self, Debouncer, Invocation, Throttle};
use trivix_types::Severity;
use wasm_bindgen::prelude::*;

use crate::{Runtime, dom, timers};

pub const NAMESPACE: &str = "Trivix";

pub fn install(rt: &Runtime) -> Result<(), JsValue> {
    let api = Object::new();

    let toaster = rt.toaster.clone();
    let show = Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, kind: JsValue| {
        let message = message
            .as_string()
            .unwrap_or_else(|| js_sys::JSON::stringify(&message).map(String::from).unwrap_or_default());
        toaster.notify(Notice::new(message, severity_arg(&kind)));
    });
    Reflect::set(&api, &"showNotification".into(), &show.into_js_value())?;

    let format = Closure::<dyn Fn(f64) -> String>::new(player::format_time);
    Reflect::set(&api, &"formatTime".into(), &format.into_js_value())?;

    let debounce = Closure::<dyn Fn(Function, f64) -> JsValue>::new(debounce);
    Reflect::set(&api, &"debounce".into(), &debounce.into_js_value())?;

    let throttle = Closure::<dyn Fn(Function, f64) -> JsValue>::new(throttle);
    Reflect::set(&api, &"throttle".into(), &throttle.into_js_value())?;

    Reflect::set(&dom::window()?.into(), &NAMESPACE.into(), &api)?;
    Ok(())
}

/// `undefined` means info; an unknown name is reported and shown as info.
fn severity_arg(kind: &JsValue) -> Severity {
    let Some(name) = kind.as_string() else {
        return Severity::default();
    };
    notify::parse_severity(&name).unwrap_or_else(|e| {
        gloo_console::warn!(e.to_string());
        Severity::default()
    })
}

#[wasm_bindgen(inline_js = "export function with_receiver(inner) { \
    return function (...args) { return inner(this, args); }; }")]
extern "C" {
    /// Wraps `inner(this, args)` in a plain JS function so a wrapped call
    /// sees its caller's `this` and every argument.
    fn with_receiver(inner: JsValue) -> Function;
}

type Call = Invocation<JsValue, JsValue>;

fn invoke(func: &Function, call: Call) -> Result<JsValue, JsValue> {
    let args: Array = call.args.into_iter().collect();
    func.apply(&call.receiver, &args)
}

fn debounce(func: Function, wait: f64) -> JsValue {
    let state = Rc::new(RefCell::new(Debouncer::<Call>::new(timing::millis(wait))));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let inner = Closure::<dyn FnMut(JsValue, Array)>::new(move |this: JsValue, args: Array| {
        let ticket = state.borrow_mut().schedule(Invocation::new(this, args.iter()));
        let delay = timers::millis(state.borrow().window());
        let state = Rc::clone(&state);
        let func = func.clone();
        let timeout = Timeout::new(delay, move || {
            let call = state.borrow_mut().fire(ticket);
            if let Some(call) = call {
                if let Err(e) = invoke(&func, call) {
                    gloo_console::error!("debounced call failed:", e);
                }
            }
        });
        *pending.borrow_mut() = Some(timeout);
    });
    with_receiver(inner.into_js_value()).into()
}

fn throttle(func: Function, limit: f64) -> JsValue {
    let gate = RefCell::new(Throttle::new(timing::millis(limit)));

    let inner = Closure::<dyn FnMut(JsValue, Array)>::new(move |this: JsValue, args: Array| {
        if !gate.borrow_mut().try_acquire(timing::millis(now_ms())) {
            return;
        }
        if let Err(e) = invoke(&func, Invocation::new(this, args.iter())) {
            gloo_console::error!("throttled call failed:", e);
        }
    });
    with_receiver(inner.into_js_value()).into()
}

fn now_ms() -> f64 {
    dom::window()
        .ok()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
