//! Custom cursor following the pointer on a spring

use leptos::ev;
use leptos::prelude::*;
use reel_core::SpringFollower;

use super::style::cursor_style;
use crate::error::{UiError, log_error};
use crate::interaction::is_interactive_target;
use crate::motion::{start_animation_loop, stop_logged};
use crate::state::{release_on_cleanup, use_landing_state};

/// Dot-and-ring cursor
///
/// The ring trails the pointer through a damped spring and
/// grows while the pointer is over a card or a details button.
#[component]
pub fn Cursor() -> impl IntoView {
    let state = use_landing_state();
    let cursor = state.config.cursor;

    let start = cursor.target_for(state.pointer.get_untracked().client());
    let follower = StoredValue::new(SpringFollower::new(cursor.spring, start));
    let position = RwSignal::new(start);
    let hovering = RwSignal::new(false);

    let animation = start_animation_loop(move |timing| {
        let target = cursor.target_for(state.pointer.get_untracked().client());
        let Some(next) = follower.try_update_value(|spring| {
            spring.set_target(target);
            spring.step(timing.delta_secs())
        }) else {
            return;
        };
        if position.try_get_untracked().is_some_and(|current| current != next) {
            position.set(next);
        }
    });
    match animation {
        Ok(handle) => release_on_cleanup(handle, stop_logged),
        Err(e) => log_error("starting cursor animation", &UiError::from(e)),
    }

    let on_over = window_event_listener(ev::mouseover, move |event| {
        let interactive = is_interactive_target(event.target());
        if hovering.get_untracked() != interactive {
            hovering.set(interactive);
        }
    });
    release_on_cleanup(on_over, WindowListenerHandle::remove);

    view! {
        <div
            class="custom-cursor"
            class:hovering=move || hovering.get()
            style=move || cursor_style(position.get())
        >
            <div class="cursor-dot"></div>
            <div class="cursor-ring"></div>
        </div>
    }
}
