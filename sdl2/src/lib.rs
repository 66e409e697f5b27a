//! Helpers for running the fourier plotter in an SDL2 window.

pub mod input;
pub mod surface;
pub mod window;

pub use surface::CanvasSurface;
pub use window::{Window, WindowBuilder};
