use crate::{config::Config, series::Waveform};
use coord_2d::Size;
use std::f64::consts::PI;

/// The live state of the plot. Only the time scale, the term count and the viewport change
/// while the program runs. Everything else is fixed at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub time_scale: f64,
    pub time_scale_step: f64,
    /// Real valued upper bound on the harmonic index. May reach -1 after an extra press of the
    /// down key, which plots the same flat line as 0.
    pub term_count: f64,
    pub term_count_step: f64,
    pub amplitude: f64,
    pub base_frequency: f64,
    pub samples_per_time_scale: f64,
    pub waveform: Waveform,
    pub viewport: Size,
}

impl Params {
    pub fn new(config: &Config, viewport: Size) -> Self {
        Self {
            time_scale: config.time_scale,
            time_scale_step: config.time_scale_step,
            term_count: config.term_count,
            term_count_step: config.term_count_step,
            amplitude: config.amplitude,
            base_frequency: config.base_frequency,
            samples_per_time_scale: config.samples_per_time_scale,
            waveform: config.waveform,
            viewport,
        }
    }

    /// Period of the fundamental in units of x.
    pub fn period(&self) -> f64 {
        (2.0 * PI) / self.base_frequency
    }

    /// Width in pixels of one period of the fundamental.
    pub fn period_px(&self) -> f64 {
        (self.period() * self.viewport.width() as f64)
            / (2.0 * PI * self.time_scale)
    }

    /// Real valued number of samples plotted in a frame. Grows with the time scale so the density
    /// of points on screen stays roughly constant.
    pub fn sample_count_f64(&self) -> f64 {
        self.samples_per_time_scale * self.time_scale
    }

    /// Number of sample indices `i` satisfying `i < sample_count_f64()`.
    pub fn sample_count(&self) -> usize {
        self.sample_count_f64().max(0.0).ceil() as usize
    }

    pub fn increase_time_scale(&mut self) {
        self.time_scale += self.time_scale_step;
    }

    /// Never lets the time scale drop to zero or below.
    pub fn decrease_time_scale(&mut self) {
        if self.time_scale > self.time_scale_step {
            self.time_scale -= self.time_scale_step;
        }
    }

    pub fn increase_term_count(&mut self) {
        self.term_count += self.term_count_step;
    }

    /// The guard is checked before subtracting, so one press at 0 takes the count to -1.
    pub fn decrease_term_count(&mut self) {
        if self.term_count >= 0.0 {
            self.term_count -= self.term_count_step;
        }
    }

    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }
}
