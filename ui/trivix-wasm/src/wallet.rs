//! Wallet-connect buttons.
//!
//! Each `[data-wallet-connect]` element gets its own `WalletButton` state
//! machine; this module only carries out the effects it returns.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use trivix_core::wallet::{
    ConnectError, WalletButton, WalletConnector, WalletEffect, WalletEvent, simulated_outcome,
};
use web_sys::Element;

use crate::dom::{self, Markers};
use crate::events::on;
use crate::{Runtime, icons, timers};

/// Stand-in for a wallet provider: waits, then answers with a fixed address.
pub struct SimulatedConnector {
    latency: Duration,
    address: String,
}

impl SimulatedConnector {
    pub fn new(latency: Duration, address: impl Into<String>) -> Self {
        Self {
            latency,
            address: address.into(),
        }
    }
}

#[async_trait(?Send)]
impl WalletConnector for SimulatedConnector {
    async fn connect(&self, wallet_type: &str) -> Result<String, ConnectError> {
        TimeoutFuture::new(timers::millis(self.latency)).await;
        simulated_outcome(wallet_type, &self.address)
    }
}

struct WalletControl {
    element: Element,
    nav_button: Option<Element>,
    machine: RefCell<WalletButton>,
    connector: Rc<dyn WalletConnector>,
    rt: Runtime,
}

pub fn bind_wallets(markers: &Markers, rt: &Runtime) {
    let connector: Rc<dyn WalletConnector> = Rc::new(SimulatedConnector::new(
        rt.config.wallet_connect_latency(),
        rt.config.wallet_address.clone(),
    ));

    for button in &markers.wallet_buttons {
        let wallet_type = dom::data(button, "wallet-type").unwrap_or_default();
        let control = Rc::new(WalletControl {
            element: button.clone(),
            nav_button: markers.nav_wallet_button.clone(),
            machine: RefCell::new(WalletButton::new(wallet_type, &rt.config)),
            connector: Rc::clone(&connector),
            rt: rt.clone(),
        });
        on!(button, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
            drive(&control, WalletEvent::Click);
        });
    }
}

fn drive(control: &Rc<WalletControl>, event: WalletEvent) {
    let effects = control.machine.borrow_mut().handle(event);
    for effect in effects {
        match effect {
            WalletEffect::Render(view) => {
                dom::render_button(&control.element, &view);
                dom::set_disabled(&control.element, view.disabled);
            }
            WalletEffect::StartConnect => {
                let control = Rc::clone(control);
                wasm_bindgen_futures::spawn_local(async move {
                    let wallet_type = control.machine.borrow().wallet_type().to_owned();
                    let result = control.connector.connect(&wallet_type).await;
                    drive(&control, WalletEvent::Resolved(result));
                });
            }
            WalletEffect::MirrorNav(view) => {
                if let Some(nav) = &control.nav_button {
                    dom::render_button(nav, &view);
                }
            }
            WalletEffect::Notify(notice) => control.rt.toaster.notify(notice),
            WalletEffect::Schedule(next) => {
                let control = Rc::clone(control);
                timers::schedule(next, move |event| drive(&control, event));
            }
        }
    }
    icons::refresh();
}
