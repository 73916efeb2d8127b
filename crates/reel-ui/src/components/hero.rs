//! Hero section: backdrop, text and the card carousel
//!
//! The carousel controller lives in a signal and is driven from four places:
//! card clicks, the window wheel listener, a 100ms heartbeat that settles the
//! transition lock and fires auto-play, and the hover/details handlers. Every
//! call passes `now_ms()` so the controller itself never reads a clock. Each
//! accepted advance also arms a one-shot timer that unlocks exactly that
//! transition once its duration has passed.

use gloo_timers::callback::{Interval, Timeout};
use leptos::ev;
use leptos::prelude::*;
use reel_core::{
    AdvanceOutcome, CarouselController, Catalog, Direction, Phase, Point, Slide, SpringFollower,
    VisibleCard, WheelOutcome, backdrop_gradient, tilt_fraction, title_words,
};

use super::card::{Card, DepartingCard};
use super::details::DetailsOverlay;
use super::magnetic::Magnetic;
use super::particles::Particles;
use super::style::{
    CARD_EXIT_S, accent_vars, backdrop_image_style, backdrop_style, reveal_delay_style,
};
use crate::error::{UiError, log_error};
use crate::interaction::{current_target_rect, pointer_sample, wheel_sample};
use crate::motion::{now_ms, start_animation_loop, stop_logged};
use crate::state::{release_on_cleanup, use_landing_state};

/// How often the controller is ticked
const HEARTBEAT_MS: u32 = 100;

/// Milliseconds a departing card stays mounted
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const EXIT_MS: u32 = (CARD_EXIT_S * 1000.0) as u32;

#[component]
pub fn Hero() -> impl IntoView {
    let state = use_landing_state();
    let config = state.config;

    let carousel = RwSignal::new(CarouselController::new(
        state.catalog.with_value(Catalog::len),
        config.carousel,
    ));
    let departing = RwSignal::new(None::<(VisibleCard, Direction)>);

    let current_slide = Memo::new(move |_| {
        let index = carousel.with(CarouselController::index);
        state
            .catalog
            .with_value(|catalog| catalog.slide_or_placeholder(index))
    });
    let locked = Memo::new(move |_| carousel.with(CarouselController::is_locked));
    let details_open = Memo::new(move |_| carousel.with(CarouselController::details_open));

    // Transition timer and departing cards

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let transition_ms = config.carousel.transition_ms.ceil() as u32;

    let arm_unlock = move || {
        let Some(Phase::Transitioning { started_at_ms }) = carousel.try_with_untracked(|c| c.phase())
        else {
            return;
        };
        Timeout::new(transition_ms, move || {
            let _ = carousel.try_update(|c| c.unlock(started_at_ms));
        })
        .forget();
    };

    let show_departure = move |outcome: AdvanceOutcome| {
        if outcome.is_advanced() {
            arm_unlock();
        }
        let Some(Some(card)) = carousel.try_with_untracked(|c| c.departing_card(&outcome)) else {
            return;
        };
        let direction = carousel.with_untracked(CarouselController::direction);
        departing.set(Some((card, direction)));
        Timeout::new(EXIT_MS, move || {
            let _ = departing.try_set(None);
        })
        .forget();
    };

    let advance = move |direction: Direction| {
        if let Some(outcome) = carousel.try_update(|c| c.advance(direction, now_ms())) {
            show_departure(outcome);
        }
    };
    let on_advance = Callback::new(advance);

    // Heartbeat: settle the lock and run auto-play

    let heartbeat = Interval::new(HEARTBEAT_MS, move || {
        let ticked = carousel.try_update_untracked(|c| {
            let before = c.snapshot();
            let outcome = c.tick(now_ms());
            (outcome, c.snapshot() != before)
        });
        let Some((outcome, changed)) = ticked else {
            return;
        };
        if changed {
            carousel.notify();
        }
        if let Some(outcome) = outcome {
            show_departure(outcome);
        }
    });
    release_on_cleanup(heartbeat, drop);

    // Wheel navigation

    let on_wheel = window_event_listener(ev::wheel, move |event| {
        let sample = wheel_sample(&event);
        if let Some(WheelOutcome::Dispatched(outcome)) =
            carousel.try_update(|c| c.wheel(sample.delta_y, now_ms()))
        {
            show_departure(outcome);
        }
    });
    release_on_cleanup(on_wheel, WindowListenerHandle::remove);

    // Tilt spring, fed by pointer moves over the hero

    let tilt_spring = StoredValue::new(SpringFollower::new(config.tilt.spring, Point::origin()));
    let tilt = RwSignal::new(Point::origin());

    let animation = start_animation_loop(move |timing| {
        let Some(next) = tilt_spring.try_update_value(|spring| spring.step(timing.delta_secs()))
        else {
            return;
        };
        if tilt.try_get_untracked().is_some_and(|current| current != next) {
            tilt.set(next);
        }
    });
    match animation {
        Ok(handle) => release_on_cleanup(handle, stop_logged),
        Err(e) => log_error("starting tilt animation", &UiError::from(e)),
    }

    let on_move = move |event: web_sys::MouseEvent| match current_target_rect(&event) {
        Ok(bounds) => {
            if let Some(fraction) = tilt_fraction(pointer_sample(&event).point(), &bounds) {
                tilt_spring.update_value(|spring| spring.set_target(fraction));
            }
        }
        Err(e) => log_error("reading hero bounds", &UiError::from(e)),
    };
    let on_enter = move |_| carousel.update(|c| c.set_hovering(true));
    let on_leave = move |_| {
        carousel.update(|c| c.set_hovering(false));
        tilt_spring.update_value(|spring| spring.set_target(Point::origin()));
    };

    // Details

    let open_details = move |_| carousel.update(CarouselController::open_details);
    let close_details = Callback::new(move |()| carousel.update(CarouselController::close_details));

    let backdrop = move || {
        let gradient = current_slide.with(|slide| {
            backdrop_gradient(
                slide.accent_or_default(),
                tilt.get(),
                config.tilt.backdrop_shift_px,
            )
        });
        backdrop_style(&gradient)
    };

    view! {
        <section
            class="hero"
            style=move || current_slide.with(|slide| accent_vars(slide.accent_or_default()))
            on:mouseenter=on_enter
            on:mouseleave=on_leave
            on:mousemove=on_move
        >
            <div class="hero-bg" class:chromatic-aberration=move || locked.get() style=backdrop></div>
            <div
                class="hero-bg-image"
                style=move || current_slide.with(|slide| backdrop_image_style(slide.image_url()))
            ></div>
            <Particles />

            <div class="hero-text" class:hidden=move || details_open.get()>
                {move || title(&current_slide.get())}
                <p class="hero-desc">{move || current_slide.with(|slide| slide.description.clone())}</p>
                <Magnetic>
                    <button class="details-btn" on:click=open_details>
                        "View Details"
                    </button>
                </Magnetic>
            </div>

            <div class="carousel" class:inert=move || details_open.get()>
                <For
                    each=move || carousel.with(CarouselController::visible_cards)
                    key=|card: &VisibleCard| card.slide_index
                    children=move |card: VisibleCard| {
                        view! {
                            <Card
                                slide_index=card.slide_index
                                carousel=carousel
                                tilt=tilt
                                on_advance=on_advance
                            />
                        }
                    }
                />
                {move || {
                    departing
                        .get()
                        .map(|(card, direction)| view! { <DepartingCard card=card direction=direction /> })
                }}
            </div>

            <Show when=move || details_open.get()>
                <DetailsOverlay slide=current_slide on_close=close_details />
            </Show>
        </section>
    }
}

/// Title split into words that fade in one after another
fn title(slide: &Slide) -> impl IntoView + use<> {
    let words = title_words(&slide.title)
        .into_iter()
        .map(|word| {
            view! {
                <span class="title-word" style=reveal_delay_style(word.delay_s)>
                    {word.text}
                </span>
            }
        })
        .collect_view();

    view! { <h1 class="hero-title">{words}</h1> }
}
