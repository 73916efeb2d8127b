//! Inline style builders
//!
//! Every animated property is written as an inline style string so the
//! components stay free of formatting noise and the strings can be checked
//! without a browser.

use reel_core::{CardPose, Particle, Point, ProgressFill, TiltAngles};

/// Easing shared by card moves and exits
pub const CARD_EASING: &str = "cubic-bezier(0.25, 1, 0.5, 1)";
/// Card enter/move duration
pub const CARD_MOVE_S: f64 = 0.8;
/// Card exit duration
pub const CARD_EXIT_S: f64 = 0.5;
/// Keyframes the particles breathe with (declared in `index.html`)
pub const PARTICLE_KEYFRAMES: &str = "particle-breathe";

#[must_use]
pub fn accent_vars(accent: &str) -> String {
    format!("--accent-color: {accent};")
}

/// Backdrop layer painted with a precomputed gradient
#[must_use]
pub fn backdrop_style(gradient: &str) -> String {
    format!("background: {gradient}; pointer-events: none;")
}

/// Blurred copy of the active image behind everything else
#[must_use]
pub fn backdrop_image_style(image: Option<&str>) -> String {
    image.map_or_else(
        || "background-image: none;".to_string(),
        |url| format!("background-image: url({url});"),
    )
}

/// Card positioned at `pose`, animating towards it over `duration_s`
#[must_use]
pub fn card_style(pose: &CardPose, duration_s: f64) -> String {
    format!(
        "transform: {}; opacity: {}; filter: {}; transform-style: preserve-3d; \
         transition: transform {duration_s}s {CARD_EASING}, opacity {duration_s}s {CARD_EASING}, \
         filter {duration_s}s {CARD_EASING};",
        pose.transform(),
        pose.opacity,
        pose.filter()
    )
}

/// Inner card rotation following the tilt spring
#[must_use]
pub fn tilt_style(angles: TiltAngles) -> String {
    format!(
        "transform: rotateX({}deg) rotateY({}deg); transform-style: preserve-3d;",
        angles.rotate_x_deg, angles.rotate_y_deg
    )
}

#[must_use]
pub fn progress_style(fill: ProgressFill, filling: bool) -> String {
    let width = if filling { fill.width_pct } else { 0.0 };
    format!(
        "width: {width}%; transition: width {}s linear;",
        fill.duration_s
    )
}

#[must_use]
pub fn cursor_style(position: Point) -> String {
    format!(
        "transform: translate3d({}px, {}px, 0);",
        position.x, position.y
    )
}

/// Particle at `position` (percent of the viewport)
#[must_use]
pub fn particle_style(particle: &Particle, position: Point) -> String {
    format!(
        "left: {}%; top: {}%; width: {size}px; height: {size}px; filter: blur({}px); \
         animation: {PARTICLE_KEYFRAMES} {}s ease-in-out {}s infinite;",
        position.x,
        position.y,
        particle.blur_px(),
        particle.duration_s,
        particle.delay_s,
        size = particle.size,
    )
}

#[must_use]
pub fn magnetic_style(offset: Point) -> String {
    format!(
        "display: inline-block; transform: translate({}px, {}px); transition: transform 0.2s ease-out;",
        offset.x, offset.y
    )
}

#[must_use]
pub fn reveal_delay_style(delay_s: f64) -> String {
    format!("animation-delay: {delay_s}s;")
}
