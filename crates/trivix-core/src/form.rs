//! Simulated form submission.

use std::time::Duration;

use tracing::debug;

use crate::config::TrivixConfig;
use crate::notify::Notice;
use crate::schedule::Scheduled;
use crate::view::{ButtonView, Tone};

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Processing,
    Succeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Complete,
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEffect {
    /// Remember the submit button's markup before it is overwritten.
    SaveLabel,
    Render(ButtonView),
    Notify(Notice),
    /// Reset the fields, restore the saved markup, re-enable the button and
    /// drop the tone classes.
    Restore,
    Schedule(Scheduled<FormEvent>),
}

#[derive(Debug)]
pub struct FormSubmission {
    state: FormState,
    processing: Duration,
    reset: Duration,
}

impl FormSubmission {
    pub fn new(config: &TrivixConfig) -> Self {
        Self {
            state: FormState::Idle,
            processing: config.form_processing(),
            reset: config.form_reset(),
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn handle(&mut self, event: FormEvent) -> Vec<FormEffect> {
        match (self.state, event) {
            (FormState::Idle, FormEvent::Submit) => {
                self.state = FormState::Processing;
                vec![
                    FormEffect::SaveLabel,
                    FormEffect::Render(ButtonView::busy("Processing...")),
                    FormEffect::Schedule(Scheduled::new(self.processing, FormEvent::Complete)),
                ]
            }
            (FormState::Processing, FormEvent::Complete) => {
                self.state = FormState::Succeeded;
                vec![
                    FormEffect::Render(
                        ButtonView::new("check", "Success!")
                            .disabled(true)
                            .tone(Tone::Success),
                    ),
                    FormEffect::Notify(Notice::success(SUCCESS_MESSAGE)),
                    FormEffect::Schedule(Scheduled::new(self.reset, FormEvent::Reset)),
                ]
            }
            (FormState::Succeeded, FormEvent::Reset) => {
                self.state = FormState::Idle;
                vec![FormEffect::Restore]
            }
            (state, event) => {
                debug!(?state, ?event, "form event ignored");
                Vec::new()
            }
        }
    }
}

/// Name/value pairs of a form, for the debug log.
pub fn describe_fields(fields: &[(String, String)]) -> String {
    serde_json::Value::Object(
        fields
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect(),
    )
    .to_string()
}
