//! Platform-independent core of the fourier plotter. This library knows nothing about windows or
//! SDL. It holds the interactive parameter state, evaluates the truncated fourier series, and
//! draws axes, period lines and the sampled wave onto anything implementing [`Surface`]. The
//! `fourier_plt_sdl2` crate provides a `Surface` backed by an SDL canvas and feeds it input.

pub mod config;
pub mod frame;
pub mod grid;
pub mod input;
pub mod params;
pub mod sampler;
pub mod series;
pub mod surface;

pub use config::{Config, Palette};
pub use coord_2d::{Coord, Size};
pub use frame::{FrameLoop, LoopState};
pub use input::Command;
pub use params::Params;
pub use rgb_int::Rgb24;
pub use series::Waveform;
pub use surface::Surface;
