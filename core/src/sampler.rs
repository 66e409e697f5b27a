use crate::{params::Params, surface::Surface};
use coord_2d::Coord;

/// The position on the x axis (in units of the wave's domain) of the `i`th sample. Samples are
/// spread evenly across `time_scale` periods of the fundamental.
pub fn sample_x(params: &Params, i: usize) -> f64 {
    (i as f64 / (params.sample_count_f64() - 1.0))
        * params.period()
        * params.time_scale
}

/// Screen coordinate of the wave at `x`. Points above the top or below the bottom of the
/// viewport are returned as-is and are expected to be ignored by the surface.
pub fn sample_coord(params: &Params, x: f64) -> Coord {
    let y = params.waveform.evaluate(
        params.term_count,
        params.base_frequency,
        params.amplitude,
        x,
    );
    // The vertical midpoint is in whole pixels.
    let y_px = (params.viewport.height() / 2) as f64 - y;
    let x_px = (x * params.viewport.width() as f64 / params.period()).trunc()
        / params.time_scale;
    Coord {
        x: x_px as i32,
        y: y_px as i32,
    }
}

/// Every sample point of the current frame, from left to right.
pub fn sample_coords(params: &Params) -> impl Iterator<Item = Coord> + '_ {
    (0..params.sample_count())
        .map(move |i| sample_coord(params, sample_x(params, i)))
}

/// Plots one point per sample in whatever colour is currently set on the surface.
pub fn render_wave<S: Surface>(surface: &mut S, params: &Params) {
    for coord in sample_coords(params) {
        surface.draw_point(coord);
    }
}
