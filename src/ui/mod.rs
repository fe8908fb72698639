//! Console rendering.
//!
//! Every function here returns plain strings; writing them is left to
//! [`Console`](crate::Console).

pub mod quiz;
pub mod result;
mod theme;
pub mod welcome;

pub use theme::Theme;
