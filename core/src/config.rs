use crate::series::Waveform;
use rgb_int::Rgb24;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb24,
    pub axes: Rgb24,
    pub period_lines: Rgb24,
    pub wave: Rgb24,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb24::new_grey(0),
            axes: Rgb24::new_grey(200),
            period_lines: Rgb24::new_grey(31),
            wave: Rgb24::new(0, 255, 0),
        }
    }
}

/// Everything that is decided before the window opens. The window size here is only the size
/// requested at creation. The window is maximized straight afterwards and the real viewport size
/// is queried from the platform.
#[derive(Clone, Debug)]
pub struct Config {
    pub title: String,
    pub width_px: u32,
    pub height_px: u32,
    pub amplitude: f64,
    /// Angular frequency of the fundamental in radians per unit of x.
    pub base_frequency: f64,
    pub time_scale: f64,
    pub time_scale_step: f64,
    pub term_count: f64,
    pub term_count_step: f64,
    /// Number of samples plotted per unit of time scale.
    pub samples_per_time_scale: f64,
    pub waveform: Waveform,
    /// Wait for vertical sync when presenting. Off means frames are drawn as fast as the
    /// platform allows.
    pub vsync: bool,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Fourier Plt".to_string(),
            width_px: 800,
            height_px: 600,
            amplitude: 100.0,
            base_frequency: 2.0,
            time_scale: 2.0,
            time_scale_step: 2.0,
            term_count: 2.0,
            term_count_step: 1.0,
            samples_per_time_scale: 500.0,
            waveform: Waveform::Pwm,
            vsync: false,
            palette: Palette::default(),
        }
    }
}
