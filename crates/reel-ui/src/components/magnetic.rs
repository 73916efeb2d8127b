//! Magnetic hover wrapper

use leptos::prelude::*;
use reel_core::{Point, magnetic_offset};

use super::style::magnetic_style;
use crate::error::{UiError, log_error};
use crate::interaction::{current_target_rect, pointer_sample};
use crate::state::use_landing_state;

/// Wraps `children` in an element that leans towards the pointer
///
/// `strength` defaults to the configured magnetic strength. The offset snaps
/// back to zero when the pointer leaves.
#[component]
pub fn Magnetic(#[prop(optional)] strength: Option<f64>, children: Children) -> impl IntoView {
    let strength = strength.unwrap_or_else(|| use_landing_state().config.magnetic.strength);
    let offset = RwSignal::new(Point::origin());

    let on_move = move |event: web_sys::MouseEvent| match current_target_rect(&event) {
        Ok(bounds) => {
            offset.set(magnetic_offset(
                pointer_sample(&event).point(),
                &bounds,
                strength,
            ));
        }
        Err(e) => log_error("reading magnetic bounds", &UiError::from(e)),
    };

    view! {
        <div
            class="magnetic"
            style=move || magnetic_style(offset.get())
            on:mousemove=on_move
            on:mouseleave=move |_| offset.set(Point::origin())
        >
            {children()}
        </div>
    }
}
