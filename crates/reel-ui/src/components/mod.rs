//! Page components
//!
//! `Hero` owns the carousel and composes everything else except the cursor,
//! which sits above the whole page.

pub mod card;
pub mod cursor;
pub mod details;
pub mod hero;
pub mod magnetic;
pub mod particles;
pub mod style;

pub use card::{Card, DepartingCard};
pub use cursor::Cursor;
pub use details::DetailsOverlay;
pub use hero::Hero;
pub use magnetic::Magnetic;
pub use particles::Particles;
