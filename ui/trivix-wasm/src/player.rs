//! Audio player UI sync.
//!
//! Mirrors `#audio-player` into the toggle icon, progress bar and time
//! labels. Nothing here owns playback.

use std::cell::RefCell;
use std::rc::Rc;

use trivix_core::player::{self, ACTIVE_TRACK_CLASS, PlayCommand, PlayerState};
use trivix_types::TrackInfo;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::dom::{self, PlayerElements};
use crate::events::on;
use crate::icons;

pub fn bind_player(els: &PlayerElements) {
    let state = Rc::new(RefCell::new(PlayerState::new()));

    if let (Some(toggle), Some(audio)) = (&els.play_pause, &els.audio) {
        let state = Rc::clone(&state);
        let audio = audio.clone();
        let button = toggle.clone();
        on!(toggle, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
            let command = state.borrow_mut().toggle();
            issue(&audio, command);
            button.set_inner_html(&format!(r#"<i data-lucide="{}"></i>"#, command.icon()));
            icons::refresh();
        });
    }

    if let (Some(audio), Some(bar)) = (&els.audio, &els.progress_bar) {
        let media = audio.clone();
        let bar = bar.clone();
        let current_label = els.current_time.clone();
        on!(audio, "timeupdate", web_sys::Event, move |_: web_sys::Event| {
            let current = media.current_time();
            if let Some(pct) = player::progress_percent(current, media.duration()) {
                dom::set_style(&bar, "width", &format!("{pct}%"));
            }
            if let Some(label) = &current_label {
                dom::set_text(label, &player::format_time(current));
            }
        });

        let media = audio.clone();
        let duration_label = els.duration.clone();
        on!(audio, "loadedmetadata", web_sys::Event, move |_: web_sys::Event| {
            if let Some(label) = &duration_label {
                dom::set_text(label, &player::format_time(media.duration()));
            }
        });
    }

    if let (Some(volume), Some(audio)) = (&els.volume, &els.audio) {
        let slider = volume.clone();
        let audio = audio.clone();
        on!(volume, "input", web_sys::Event, move |_: web_sys::Event| {
            audio.set_volume(player::volume_from_slider(slider.value_as_number()));
        });
    }

    for (index, track) in els.tracks.iter().enumerate() {
        let state = Rc::clone(&state);
        let tracks = els.tracks.clone();
        let title_el = els.now_playing_title.clone();
        let artist_el = els.now_playing_artist.clone();
        let button = track.clone();
        on!(track, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
            let selection = state.borrow_mut().select(index);
            if let Some(prev) = selection.deactivate.and_then(|i| tracks.get(i)) {
                dom::remove_class(prev, ACTIVE_TRACK_CLASS);
            }
            dom::add_class(&button, ACTIVE_TRACK_CLASS);

            let info = TrackInfo {
                id: dom::data(&button, "track-id").unwrap_or_default(),
                title: dom::data(&button, "track-title").unwrap_or_default(),
                artist: dom::data(&button, "track-artist").unwrap_or_default(),
            };
            if let Some(el) = &title_el {
                dom::set_text(el, &info.title);
            }
            if let Some(el) = &artist_el {
                dom::set_text(el, &info.artist);
            }
            gloo_console::log!(player::now_playing_line(&info));
        });
    }
}

fn issue(audio: &HtmlAudioElement, command: PlayCommand) {
    match command {
        PlayCommand::Play => match audio.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    gloo_console::warn!("playback refused:", e);
                }
            }),
            Err(e) => gloo_console::warn!("playback refused:", e),
        },
        PlayCommand::Pause => {
            if let Err(e) = audio.pause() {
                gloo_console::warn!("pause failed:", e);
            }
        }
    }
}
