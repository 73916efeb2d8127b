//! Card poses and text reveal timing for the hero
//!
//! The hero shows three cards at slots -1, 0 and +1. Each card moves between
//! three poses: where it enters from, where it rests, and where it leaves to.
//! Enter and exit sides depend on the direction of the last index change so
//! the deck always appears to slide the way the user pushed it.

use crate::carousel::Direction;
use crate::geometry::Point;

/// Card entry/exit scale
const OFFSTAGE_SCALE: f64 = 0.4;
/// Y-rotation per slot while entering, in degrees
const OFFSTAGE_ROTATE_DEG: f64 = 45.0;
const OFFSTAGE_Z_PX: f64 = -500.0;

const ACTIVE_SCALE: f64 = 1.25;
const SIDE_SCALE: f64 = 0.65;
const SIDE_OPACITY: f64 = 0.4;
const SIDE_ROTATE_DEG: f64 = 25.0;
const SIDE_Z_PX: f64 = -200.0;
const SIDE_GRAYSCALE_PCT: f64 = 50.0;
const SIDE_BLUR_PX: f64 = 2.0;

/// Delay between consecutive title words
pub const TITLE_WORD_STAGGER_S: f64 = 0.1;

/// Delay before the first ingredient chip appears
pub const INGREDIENT_BASE_DELAY_S: f64 = 0.3;
/// Delay between consecutive ingredient chips
pub const INGREDIENT_STAGGER_S: f64 = 0.05;

/// Progress bar collapse time when auto-play stops
pub const PROGRESS_RESET_S: f64 = 0.5;

/// Position of a card relative to the active one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Previous,
    Active,
    Next,
}

impl Slot {
    /// Slot offset: -1, 0 or +1
    #[must_use]
    pub const fn offset(self) -> f64 {
        match self {
            Self::Previous => -1.0,
            Self::Active => 0.0,
            Self::Next => 1.0,
        }
    }

    /// Index step from the active card to this slot
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Previous => Direction::Backward,
            Self::Active => Direction::Still,
            Self::Next => Direction::Forward,
        }
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A slide shown at a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleCard {
    pub slide_index: usize,
    pub slot: Slot,
}

/// Visual state of a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    pub x_px: f64,
    pub z_px: f64,
    pub rotate_y_deg: f64,
    pub scale: f64,
    pub opacity: f64,
    pub grayscale_pct: f64,
    pub blur_px: f64,
}

impl CardPose {
    /// CSS `transform` value
    #[must_use]
    pub fn transform(&self) -> String {
        format!(
            "translateX({}px) translateZ({}px) rotateY({}deg) scale({})",
            self.x_px, self.z_px, self.rotate_y_deg, self.scale
        )
    }

    /// CSS `filter` value
    #[must_use]
    pub fn filter(&self) -> String {
        format!(
            "grayscale({}%) blur({}px)",
            self.grayscale_pct, self.blur_px
        )
    }
}

/// Slot distance a card travels when entering or leaving
const fn travel(direction: Direction) -> f64 {
    match direction {
        Direction::Forward => 1.0,
        Direction::Backward | Direction::Still => -1.0,
    }
}

/// Pose a card starts from when it appears at `slot`
#[must_use]
pub fn enter_pose(slot: Slot, direction: Direction, gap_px: f64) -> CardPose {
    let pos = slot.offset();
    CardPose {
        x_px: (pos + travel(direction)) * gap_px,
        z_px: OFFSTAGE_Z_PX,
        rotate_y_deg: pos * OFFSTAGE_ROTATE_DEG,
        scale: OFFSTAGE_SCALE,
        opacity: 0.0,
        grayscale_pct: SIDE_GRAYSCALE_PCT,
        blur_px: SIDE_BLUR_PX,
    }
}

/// Pose a card settles into at `slot`
#[must_use]
pub fn rest_pose(slot: Slot, gap_px: f64) -> CardPose {
    let pos = slot.offset();
    if slot.is_active() {
        CardPose {
            x_px: 0.0,
            z_px: 0.0,
            rotate_y_deg: 0.0,
            scale: ACTIVE_SCALE,
            opacity: 1.0,
            grayscale_pct: 0.0,
            blur_px: 0.0,
        }
    } else {
        CardPose {
            x_px: pos * gap_px,
            z_px: SIDE_Z_PX,
            rotate_y_deg: pos * SIDE_ROTATE_DEG,
            scale: SIDE_SCALE,
            opacity: SIDE_OPACITY,
            grayscale_pct: SIDE_GRAYSCALE_PCT,
            blur_px: SIDE_BLUR_PX,
        }
    }
}

/// Pose a card leaves towards from `slot`
#[must_use]
pub fn exit_pose(slot: Slot, direction: Direction, gap_px: f64) -> CardPose {
    let pos = slot.offset();
    let rest = rest_pose(slot, gap_px);
    CardPose {
        x_px: (pos - travel(direction)) * gap_px,
        rotate_y_deg: -pos * OFFSTAGE_ROTATE_DEG,
        scale: OFFSTAGE_SCALE,
        opacity: 0.0,
        ..rest
    }
}

/// One word of the slide title with its reveal delay
#[derive(Debug, Clone, PartialEq)]
pub struct TitleWord {
    pub text: String,
    pub delay_s: f64,
}

/// Splits a title into words revealed one after another
#[must_use]
pub fn title_words(title: &str) -> Vec<TitleWord> {
    title
        .split(' ')
        .filter(|word| !word.is_empty())
        .zip(0_u32..)
        .map(|(word, i)| TitleWord {
            text: word.to_string(),
            delay_s: f64::from(i) * TITLE_WORD_STAGGER_S,
        })
        .collect()
}

/// Reveal delay of the `index`-th ingredient chip in the details overlay
#[must_use]
pub fn ingredient_delay_s(index: usize) -> f64 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    INGREDIENT_BASE_DELAY_S + f64::from(index) * INGREDIENT_STAGGER_S
}

/// Target of the active card's progress bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressFill {
    pub width_pct: f64,
    pub duration_s: f64,
}

/// Fills over one auto-play period while playing, collapses quickly otherwise
#[must_use]
pub fn progress_fill(auto_playing: bool, autoplay_ms: f64) -> ProgressFill {
    if auto_playing {
        ProgressFill {
            width_pct: 100.0,
            duration_s: autoplay_ms / 1000.0,
        }
    } else {
        ProgressFill {
            width_pct: 0.0,
            duration_s: PROGRESS_RESET_S,
        }
    }
}

/// Radial backdrop centred slightly off-middle in the direction of the tilt
#[must_use]
pub fn backdrop_gradient(accent: &str, tilt: Point, shift_px: f64) -> String {
    format!(
        "radial-gradient(circle at calc(50% + {}px) calc(50% + {}px), {} 0%, rgba(5, 5, 5, 1) 100%)",
        tilt.x * shift_px,
        tilt.y * shift_px,
        accent
    )
}
