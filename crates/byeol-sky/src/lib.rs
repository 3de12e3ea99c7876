//! Sky animation for the byeol screensaver.
//!
//! This crate simulates two particle populations — drifting ambient stars
//! with pointer-reactive links, and a pool of meteor streaks — in an
//! abstract pixel space, and rasterizes them onto the terminal cell grid
//! once per frame.

mod chars;
mod meteors;
mod raster;
mod state;
mod stars;

pub use meteors::{LAUNCH_CHANCE, METEOR_COUNT, Meteor, MeteorPool};
pub use raster::{CELL_HEIGHT_PX, CELL_WIDTH_PX, CellGrid};
pub use stars::{LINK_RADIUS_PX, Star, StarField, link_alpha};
pub use state::SkyState;
