//! Carousel controller
//!
//! A two-state machine (`Idle`, `Transitioning`) over a ring of `len` slides.
//! Every input carries an explicit millisecond timestamp so the machine never
//! reads a clock itself; the UI feeds it `Date.now()` and the tests feed it
//! whatever they like.
//!
//! Index changes come from three places: explicit next/prev, debounced wheel
//! gestures and the auto-play timer. All of them go through [`CarouselController::advance`],
//! which refuses to run while a transition is in flight.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::layout::{Slot, VisibleCard};
use crate::result::Result;

/// Carousel timing and gesture parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Lock window after an index change; matches the card transition
    pub transition_ms: f64,
    /// Auto-play period
    pub autoplay_ms: f64,
    /// Minimum spacing between two accepted wheel gestures
    pub wheel_debounce_ms: f64,
    /// Wheel deltas smaller than this are trackpad jitter
    pub wheel_threshold: f64,
    /// Horizontal distance between neighbouring cards in pixels
    pub card_gap_px: f64,
}

impl CarouselConfig {
    /// # Errors
    ///
    /// Returns `InvalidConfig` for non-finite values, non-positive durations,
    /// or a negative wheel threshold.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("carousel.transition_ms", self.transition_ms),
            ("carousel.autoplay_ms", self.autoplay_ms),
            ("carousel.card_gap_px", self.card_gap_px),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid_config(
                    field,
                    format!("must be finite and positive, got: {value}"),
                ));
            }
        }

        let non_negative = [
            ("carousel.wheel_debounce_ms", self.wheel_debounce_ms),
            ("carousel.wheel_threshold", self.wheel_threshold),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_config(
                    field,
                    format!("must be finite and non-negative, got: {value}"),
                ));
            }
        }

        Ok(())
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_ms: 800.0,
            autoplay_ms: 5000.0,
            wheel_debounce_ms: 1000.0,
            wheel_threshold: 10.0,
            card_gap_px: 550.0,
        }
    }
}

/// Direction of the last index change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    /// Signed step: -1, 0 or +1
    #[must_use]
    pub const fn signum(self) -> i8 {
        match self {
            Self::Backward => -1,
            Self::Still => 0,
            Self::Forward => 1,
        }
    }
}

/// Controller phase; the carousel is locked exactly while transitioning
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Transitioning { started_at_ms: f64 },
}

/// Why an advance request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A transition is already running
    Locked,
    /// There are no slides
    Empty,
    /// `Direction::Still` was requested
    Still,
}

/// Result of an advance request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Advanced {
        from: usize,
        to: usize,
        direction: Direction,
    },
    Ignored(IgnoreReason),
}

impl AdvanceOutcome {
    #[must_use]
    pub const fn is_advanced(&self) -> bool {
        matches!(self, Self::Advanced { .. })
    }
}

/// Result of feeding one wheel event to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Details overlay is open; the wheel does nothing
    DetailsOpen,
    /// Too soon after the previous accepted gesture
    Debounced,
    /// Delta below the jitter threshold
    BelowThreshold,
    /// Gesture accepted and forwarded to `advance`
    Dispatched(AdvanceOutcome),
}

/// Read-only view of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselState {
    pub active_index: usize,
    pub direction: Direction,
    pub locked: bool,
    pub details_open: bool,
    pub auto_playing: bool,
}

/// Owns the active index, direction, lock, details flag and auto-play timer
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselController {
    config: CarouselConfig,
    len: usize,
    index: usize,
    direction: Direction,
    phase: Phase,
    details_open: bool,
    auto_playing: bool,
    last_wheel_at_ms: Option<f64>,
    autoplay_deadline_ms: Option<f64>,
}

/// `(index + step + len) mod len` without leaving `usize`
fn wrap_index(index: usize, direction: Direction, len: usize) -> Option<usize> {
    match direction {
        Direction::Forward => index.checked_add(1)?.checked_rem(len),
        Direction::Backward => index.checked_add(len)?.checked_sub(1)?.checked_rem(len),
        Direction::Still => index.checked_rem(len),
    }
}

/// Whether a `window_ms` window opened at `since_ms` has closed by `now_ms`
///
/// A clock that went backwards counts as elapsed, so a stepped clock can
/// never hold the carousel locked.
fn window_elapsed(since_ms: f64, now_ms: f64, window_ms: f64) -> bool {
    let elapsed = now_ms - since_ms;
    !(0.0..window_ms).contains(&elapsed)
}

impl CarouselController {
    /// Creates a controller over `len` slides, idle on the first one
    #[must_use]
    pub const fn new(len: usize, config: CarouselConfig) -> Self {
        Self {
            config,
            len,
            index: 0,
            direction: Direction::Still,
            phase: Phase::Idle,
            details_open: false,
            auto_playing: true,
            last_wheel_at_ms: None,
            autoplay_deadline_ms: None,
        }
    }

    /// Moves one slide in `direction` and locks for the transition window
    ///
    /// A successful advance also closes the details overlay and restarts the
    /// auto-play period.
    pub fn advance(&mut self, direction: Direction, now_ms: f64) -> AdvanceOutcome {
        if self.len == 0 {
            return AdvanceOutcome::Ignored(IgnoreReason::Empty);
        }
        if direction == Direction::Still {
            return AdvanceOutcome::Ignored(IgnoreReason::Still);
        }
        if self.is_locked() {
            tracing::trace!(?direction, "advance ignored while transitioning");
            return AdvanceOutcome::Ignored(IgnoreReason::Locked);
        }
        let Some(to) = wrap_index(self.index, direction, self.len) else {
            return AdvanceOutcome::Ignored(IgnoreReason::Empty);
        };

        let from = self.index;
        self.index = to;
        self.direction = direction;
        self.phase = Phase::Transitioning {
            started_at_ms: now_ms,
        };
        self.details_open = false;
        self.autoplay_deadline_ms = None;

        tracing::debug!(from, to, ?direction, "carousel advanced");

        AdvanceOutcome::Advanced {
            from,
            to,
            direction,
        }
    }

    pub fn next(&mut self, now_ms: f64) -> AdvanceOutcome {
        self.advance(Direction::Forward, now_ms)
    }

    pub fn prev(&mut self, now_ms: f64) -> AdvanceOutcome {
        self.advance(Direction::Backward, now_ms)
    }

    /// Returns to `Idle` once the transition window has elapsed
    ///
    /// Returns true if this call ended a transition.
    pub fn settle(&mut self, now_ms: f64) -> bool {
        match self.phase {
            Phase::Transitioning { started_at_ms }
                if window_elapsed(started_at_ms, now_ms, self.config.transition_ms) =>
            {
                self.phase = Phase::Idle;
                tracing::trace!(index = self.index, "transition settled");
                true
            }
            _ => false,
        }
    }

    /// Ends the transition that started at `started_at_ms`
    ///
    /// Used by the transition timer. A transition that started at any other
    /// time is left alone, so a late timer cannot cut a newer one short.
    /// Returns true if this call ended a transition.
    pub fn unlock(&mut self, started_at_ms: f64) -> bool {
        match self.phase {
            Phase::Transitioning { started_at_ms: current }
                if current.to_bits() == started_at_ms.to_bits() =>
            {
                self.phase = Phase::Idle;
                tracing::trace!(index = self.index, "transition unlocked by timer");
                true
            }
            _ => false,
        }
    }

    /// Feeds one wheel event
    ///
    /// Positive `delta_y` (scrolling down) moves forward. The gesture
    /// timestamp is recorded whenever the gesture passes the debounce and
    /// threshold checks, even if the lock then refuses the advance.
    pub fn wheel(&mut self, delta_y: f64, now_ms: f64) -> WheelOutcome {
        if self.details_open {
            return WheelOutcome::DetailsOpen;
        }
        if let Some(last) = self.last_wheel_at_ms {
            if !window_elapsed(last, now_ms, self.config.wheel_debounce_ms) {
                return WheelOutcome::Debounced;
            }
        }
        if !delta_y.is_finite() || delta_y.abs() < self.config.wheel_threshold {
            return WheelOutcome::BelowThreshold;
        }

        let outcome = if delta_y > 0.0 {
            self.next(now_ms)
        } else {
            self.prev(now_ms)
        };
        self.last_wheel_at_ms = Some(now_ms);

        WheelOutcome::Dispatched(outcome)
    }

    /// Pointer entered (true) or left (false) the hero; hovering pauses auto-play
    pub fn set_hovering(&mut self, hovering: bool) {
        self.auto_playing = !hovering;
    }

    pub fn open_details(&mut self) {
        if !self.details_open {
            tracing::debug!(index = self.index, "details opened");
        }
        self.details_open = true;
    }

    pub fn close_details(&mut self) {
        self.details_open = false;
    }

    /// Whether the auto-play timer is allowed to run right now
    #[must_use]
    pub const fn auto_play_active(&self) -> bool {
        self.auto_playing && !self.is_locked() && !self.details_open && self.len > 0
    }

    /// Advances the controller clock
    ///
    /// Settles a finished transition, then runs the auto-play timer. The timer
    /// is armed the first time it is observed active and fires one period
    /// later; whenever it is inactive its deadline is dropped, so resuming
    /// starts a fresh period.
    pub fn tick(&mut self, now_ms: f64) -> Option<AdvanceOutcome> {
        self.settle(now_ms);

        if !self.auto_play_active() {
            self.autoplay_deadline_ms = None;
            return None;
        }

        match self.autoplay_deadline_ms {
            None => {
                self.autoplay_deadline_ms = Some(now_ms + self.config.autoplay_ms);
                None
            }
            Some(deadline) if now_ms >= deadline => Some(self.next(now_ms)),
            // Clock stepped back past the arming time: start a fresh period
            Some(deadline) if now_ms < deadline - self.config.autoplay_ms => {
                self.autoplay_deadline_ms = Some(now_ms + self.config.autoplay_ms);
                None
            }
            Some(_) => None,
        }
    }

    /// Previous, active and next cards around the current index
    ///
    /// Each slide appears at most once: with fewer than three slides the
    /// active slot wins, then the next slot.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<VisibleCard> {
        let mut cards: Vec<VisibleCard> = Vec::with_capacity(3);
        for slot in [Slot::Active, Slot::Next, Slot::Previous] {
            let Some(slide_index) = wrap_index(self.index, slot.direction(), self.len) else {
                continue;
            };
            if cards.iter().all(|card| card.slide_index != slide_index) {
                cards.push(VisibleCard { slide_index, slot });
            }
        }
        cards.sort_by_key(|card| card.slot);
        cards
    }

    /// Card that dropped out of view because of `outcome`, for its exit animation
    ///
    /// Moving forward drops the old previous card, moving backward drops the
    /// old next card. Small decks where that slide is still visible drop nothing.
    #[must_use]
    pub fn departing_card(&self, outcome: &AdvanceOutcome) -> Option<VisibleCard> {
        let AdvanceOutcome::Advanced {
            from, direction, ..
        } = *outcome
        else {
            return None;
        };
        let slot = match direction {
            Direction::Forward => Slot::Previous,
            Direction::Backward => Slot::Next,
            Direction::Still => return None,
        };
        let slide_index = wrap_index(from, slot.direction(), self.len)?;
        let still_visible = self
            .visible_cards()
            .iter()
            .any(|card| card.slide_index == slide_index);

        (!still_visible).then_some(VisibleCard { slide_index, slot })
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    #[must_use]
    pub const fn details_open(&self) -> bool {
        self.details_open
    }

    #[must_use]
    pub const fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[must_use]
    pub const fn snapshot(&self) -> CarouselState {
        CarouselState {
            active_index: self.index,
            direction: self.direction,
            locked: self.is_locked(),
            details_open: self.details_open,
            auto_playing: self.auto_playing,
        }
    }
}
