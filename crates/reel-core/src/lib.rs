//! Motion core for the Hero Reel landing page
//!
//! Everything the page does that is not DOM plumbing lives here, with no
//! dependency on the browser so it can be tested natively:
//!
//! - [`carousel`]: index/direction/lock state machine, wheel debounce, auto-play
//! - [`particles`]: randomized particle field and pointer repulsion
//! - [`spring`]: damped spring follower used by the cursor and the card tilt
//! - [`pointer`]: pointer tracking, tilt and magnetic math
//! - [`layout`]: card poses, title reveal and progress bar timing
//! - [`slide`]: slide catalog with fallbacks
//! - [`config`]: TOML motion configuration

#![forbid(unsafe_code)]

pub mod carousel;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod particles;
pub mod pointer;
pub mod result;
pub mod slide;
pub mod spring;

pub use carousel::{
    AdvanceOutcome, CarouselConfig, CarouselController, CarouselState, Direction, IgnoreReason,
    Phase, WheelOutcome,
};
pub use config::MotionConfig;
pub use error::Error;
pub use geometry::Point;
pub use layout::{
    CardPose, ProgressFill, Slot, TitleWord, VisibleCard, backdrop_gradient, enter_pose,
    exit_pose, ingredient_delay_s, progress_fill, rest_pose, title_words,
};
pub use particles::{Particle, ParticleConfig, ParticleField, RepulsionConfig, repulsion_offset};
pub use pointer::{
    CursorConfig, MagneticConfig, PointerTracker, Rect, TiltAngles, TiltConfig, magnetic_offset,
    tilt_angles, tilt_fraction,
};
pub use result::{Result, ResultExt};
pub use slide::{Catalog, Slide};
pub use spring::{SpringConfig, SpringFollower};
