//! Simulated form submission for every `<form>` on the page.

use std::cell::RefCell;
use std::rc::Rc;

use trivix_core::form::{self, FormEffect, FormEvent, FormSubmission};
use trivix_core::view::Tone;
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlFormElement};

use crate::dom;
use crate::events::on;
use crate::{Runtime, icons, timers};

struct FormControl {
    form: HtmlFormElement,
    submit_button: Option<Element>,
    saved_label: RefCell<Option<String>>,
    machine: RefCell<FormSubmission>,
    rt: Runtime,
}

pub fn bind_forms(forms: &[HtmlFormElement], rt: &Runtime) {
    for form in forms {
        let control = Rc::new(FormControl {
            form: form.clone(),
            submit_button: form.query_selector(r#"button[type="submit"]"#).ok().flatten(),
            saved_label: RefCell::new(None),
            machine: RefCell::new(FormSubmission::new(&rt.config)),
            rt: rt.clone(),
        });
        on!(form, "submit", web_sys::Event, move |e: web_sys::Event| {
            e.prevent_default();
            let fields = collect_fields(&control.form);
            gloo_console::debug!("form submit", form::describe_fields(&fields));
            drive(&control, FormEvent::Submit);
        });
    }
}

fn drive(control: &Rc<FormControl>, event: FormEvent) {
    let effects = control.machine.borrow_mut().handle(event);
    for effect in effects {
        match effect {
            FormEffect::SaveLabel => {
                if let Some(button) = &control.submit_button {
                    *control.saved_label.borrow_mut() = Some(button.inner_html());
                }
            }
            FormEffect::Render(view) => {
                if let Some(button) = &control.submit_button {
                    dom::render_button(button, &view);
                    dom::set_disabled(button, view.disabled);
                }
            }
            FormEffect::Notify(notice) => control.rt.toaster.notify(notice),
            FormEffect::Restore => {
                control.form.reset();
                if let Some(button) = &control.submit_button {
                    if let Some(label) = control.saved_label.borrow_mut().take() {
                        button.set_inner_html(&label);
                    }
                    dom::set_disabled(button, false);
                    for cls in Tone::ALL_CLASSES {
                        dom::remove_class(button, cls);
                    }
                }
            }
            FormEffect::Schedule(next) => {
                let control = Rc::clone(control);
                timers::schedule(next, move |event| drive(&control, event));
            }
        }
    }
    icons::refresh();
}

/// Text fields as name/value pairs; file inputs are skipped.
fn collect_fields(form: &HtmlFormElement) -> Vec<(String, String)> {
    let Ok(data) = FormData::new_with_form(form) else {
        return Vec::new();
    };
    let mut fields = Vec::new();
    for entry in data.entries().into_iter().flatten() {
        let Ok(pair) = entry.dyn_into::<js_sys::Array>() else {
            continue;
        };
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.push((name, value));
        }
    }
    fields
}
