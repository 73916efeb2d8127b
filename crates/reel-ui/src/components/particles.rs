//! Ambient particle field

use leptos::prelude::*;
use reel_core::{ParticleField, Point};

use super::style::particle_style;
use crate::error::{UiError, log_error};
use crate::motion::{start_animation_loop, stop_logged};
use crate::state::{release_on_cleanup, use_landing_state};

/// Particles scattered over the viewport, pushed away from the pointer
///
/// The field is generated once per mount. Positions are re-derived every
/// frame from the rest positions, so there is no momentum to settle.
#[component]
pub fn Particles() -> impl IntoView {
    let state = use_landing_state();
    let field = ParticleField::generate(&state.config.particles, &mut rand::thread_rng());
    let particles = field.particles().to_vec();

    let positions = RwSignal::new(positions_of(&field));
    let field = StoredValue::new(field);

    let animation = start_animation_loop(move |_timing| {
        let pointer = state.pointer.try_get_untracked().and_then(|p| p.percent());
        let Some(next) = field.try_update_value(|field| {
            field.update(pointer);
            positions_of(field)
        }) else {
            return;
        };
        let moved = positions
            .try_with_untracked(|current| current != &next)
            .unwrap_or(false);
        if moved {
            positions.set(next);
        }
    });
    match animation {
        Ok(handle) => release_on_cleanup(handle, stop_logged),
        Err(e) => log_error("starting particle animation", &UiError::from(e)),
    }

    let dots = particles
        .into_iter()
        .enumerate()
        .map(|(slot, particle)| {
            let style = move || {
                let position = positions
                    .with(|all| all.get(slot).copied())
                    .unwrap_or(particle.rest);
                particle_style(&particle, position)
            };
            view! { <div class="particle" style=style></div> }
        })
        .collect_view();

    view! {
        <div class="particles-container">
            {dots}
            <div class="vignette-overlay"></div>
            <div class="grain-overlay"></div>
        </div>
    }
}

fn positions_of(field: &ParticleField) -> Vec<Point> {
    field.particles().iter().map(|p| p.position).collect()
}
