//! Carousel cards
//!
//! Cards are keyed by slide, so a slide that moves from one slot to another
//! keeps its element and the CSS transition carries it across. A slide that
//! newly enters view is first rendered at its enter pose and switched to its
//! rest pose two animation frames later, once the enter pose has been painted.

use leptos::prelude::*;
use reel_core::{
    CarouselController, Direction, Point, Slot, TiltAngles, VisibleCard, enter_pose, exit_pose,
    progress_fill, rest_pose, tilt_angles,
};

use super::style::{CARD_EXIT_S, CARD_MOVE_S, card_style, progress_style, tilt_style};
use crate::state::use_landing_state;

/// Runs `f` after the next paint
fn after_paint(f: impl FnOnce() + 'static) {
    request_animation_frame(move || request_animation_frame(f));
}

/// One slide in the 3D carousel
#[component]
pub fn Card(
    slide_index: usize,
    carousel: RwSignal<CarouselController>,
    #[prop(into)] tilt: Signal<Point>,
    on_advance: Callback<Direction>,
) -> impl IntoView {
    let state = use_landing_state();
    let gap = state.config.carousel.card_gap_px;
    let max_tilt = state.config.tilt.max_angle_deg;
    let slide = state
        .catalog
        .with_value(|catalog| catalog.slide_or_placeholder(slide_index));

    let slot = Memo::new(move |_| {
        carousel.with(|c| {
            c.visible_cards()
                .into_iter()
                .find(|card| card.slide_index == slide_index)
                .map_or(Slot::Active, |card| card.slot)
        })
    });

    // Cards present at first render start at rest
    let (entry_direction, entered) =
        carousel.with_untracked(|c| (c.direction(), c.direction() == Direction::Still));
    let entered = RwSignal::new(entered);
    if !entered.get_untracked() {
        after_paint(move || {
            let _ = entered.try_set(true);
        });
    }

    let pose = move || {
        if entered.get() {
            rest_pose(slot.get(), gap)
        } else {
            enter_pose(slot.get(), entry_direction, gap)
        }
    };

    let inner_tilt = move || {
        if slot.get().is_active() {
            tilt_style(tilt_angles(tilt.get(), max_tilt))
        } else {
            tilt_style(TiltAngles::default())
        }
    };

    let on_click = move |_| match slot.get_untracked() {
        Slot::Previous => on_advance.run(Direction::Backward),
        Slot::Next => on_advance.run(Direction::Forward),
        Slot::Active => {}
    };

    let image = slide.image_url().map(str::to_string);
    let title = slide.title.clone();

    view! {
        <div
            class="card"
            class:active=move || slot.get().is_active()
            style=move || card_style(&pose(), CARD_MOVE_S)
            on:click=on_click
        >
            <div class="card-inner" style=inner_tilt>
                {image.map(|src| view! { <img src=src alt=title draggable="false" /> })}
            </div>
            <Show when=move || slot.get().is_active()>
                <ProgressBar carousel=carousel />
            </Show>
        </div>
    }
}

/// A card that just dropped out of view, animating to its exit pose
#[component]
pub fn DepartingCard(card: VisibleCard, direction: Direction) -> impl IntoView {
    let state = use_landing_state();
    let gap = state.config.carousel.card_gap_px;
    let image = state
        .catalog
        .with_value(|catalog| catalog.slide_or_placeholder(card.slide_index))
        .image_url()
        .map(str::to_string);

    let leaving = RwSignal::new(false);
    after_paint(move || {
        let _ = leaving.try_set(true);
    });

    let style = move || {
        let pose = if leaving.get() {
            exit_pose(card.slot, direction, gap)
        } else {
            rest_pose(card.slot, gap)
        };
        card_style(&pose, CARD_EXIT_S)
    };

    view! {
        <div class="card departing" style=style>
            <div class="card-inner">
                {image.map(|src| view! { <img src=src alt="" draggable="false" /> })}
            </div>
        </div>
    }
}

/// Auto-play countdown under the active card
///
/// Restarts whenever the active index changes or auto-play toggles.
#[component]
fn ProgressBar(carousel: RwSignal<CarouselController>) -> impl IntoView {
    let autoplay_ms = use_landing_state().config.carousel.autoplay_ms;
    let period = Memo::new(move |_| carousel.with(|c| (c.index(), c.is_auto_playing())));

    move || {
        let (_, playing) = period.get();
        let fill = progress_fill(playing, autoplay_ms);
        let filling = RwSignal::new(false);
        after_paint(move || {
            let _ = filling.try_set(true);
        });
        view! {
            <div class="progress-track">
                <div class="progress-bar" style=move || progress_style(fill, filling.get())></div>
            </div>
        }
    }
}
