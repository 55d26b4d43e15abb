//! Per-frame state and render packaging shared by the button and clock demos.
//!
//! Everything here runs on the loop thread once per frame: sampled input or
//! wall-clock time goes in, uniform values and draw calls come out through a
//! [`target::FrameTarget`].

pub mod bounce;
pub mod buttons;
pub mod clock;
pub mod color;
pub mod debounce;
pub mod geometry;
pub mod logging;
pub mod target;
