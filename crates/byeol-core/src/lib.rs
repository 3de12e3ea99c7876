//! Core types for the byeol starfield screensaver.
//!
//! This crate holds the small leaf types shared between the simulation
//! crate and the application: the viewport dimensions, the pointer
//! tracker, and alpha-carrying colors.

mod color;
mod pointer;
mod viewport;

pub use color::{Rgba, fade};
pub use pointer::Pointer;
pub use viewport::Viewport;
