//! Input handling
//!
//! Keyboard movement (WASD) and the mouse pointer, sampled once per frame.

mod state;

pub use state::*;
