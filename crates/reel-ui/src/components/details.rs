//! Ingredients overlay

use leptos::prelude::*;
use reel_core::{Slide, ingredient_delay_s};

use super::magnetic::Magnetic;
use super::style::reveal_delay_style;
use crate::state::use_landing_state;

/// Full-screen overlay listing the active slide's ingredients
#[component]
pub fn DetailsOverlay(#[prop(into)] slide: Signal<Slide>, on_close: Callback<()>) -> impl IntoView {
    let ingredient_strength = use_landing_state().config.magnetic.ingredient_strength;

    move || {
        let slide = slide.get();
        let fact = slide.fact_or_default().to_string();
        let chips = slide
            .ingredients
            .into_iter()
            .enumerate()
            .map(|(i, ingredient)| {
                view! {
                    <Magnetic strength=ingredient_strength>
                        <span class="ingredient" style=reveal_delay_style(ingredient_delay_s(i))>
                            {ingredient}
                        </span>
                    </Magnetic>
                }
            })
            .collect_view();

        view! {
            <div class="details-overlay">
                <div class="details-content">
                    <h2>"Ingredients"</h2>
                    <div class="ingredients-grid">{chips}</div>
                    <p class="details-fact">{fact}</p>
                    <Magnetic>
                        <button class="details-btn close-btn" on:click=move |_| on_close.run(())>
                            "Close"
                        </button>
                    </Magnetic>
                </div>
            </div>
        }
    }
}
