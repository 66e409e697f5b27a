use crate::{config::Palette, params::Params, surface::Surface};
use coord_2d::{Coord, Size};

/// The horizontal and vertical lines through the middle of the viewport.
pub fn axes(viewport: Size) -> [(Coord, Coord); 2] {
    let width = viewport.width() as i32;
    let height = viewport.height() as i32;
    [
        (Coord::new(0, height / 2), Coord::new(width, height / 2)),
        (Coord::new(width / 2, 0), Coord::new(width / 2, height)),
    ]
}

/// X positions of the vertical lines marking period boundaries of the fundamental, from left to
/// right. Lines are placed at whole-period offsets from the middle of the viewport, out to
/// `time_scale` periods in each direction, and positions outside the viewport are dropped.
pub fn period_line_xs(params: &Params) -> Vec<i32> {
    let width = params.viewport.width() as i32;
    let centre_x = width / 2;
    let period_px = params.period_px();
    let mut xs = Vec::new();
    let mut i = -params.time_scale as i32;
    while i as f64 <= params.time_scale {
        let x = centre_x + (i as f64 * period_px) as i32;
        if x >= 0 && x < width {
            xs.push(x);
        }
        i += 1;
    }
    xs
}

/// Draws the axes and then the period lines over them.
pub fn render_grid<S: Surface>(
    surface: &mut S,
    params: &Params,
    palette: &Palette,
) {
    surface.set_draw_color(palette.axes);
    for (start, end) in axes(params.viewport) {
        surface.draw_line(start, end);
    }
    surface.set_draw_color(palette.period_lines);
    let height = params.viewport.height() as i32;
    for x in period_line_xs(params) {
        surface.draw_line(Coord::new(x, 0), Coord::new(x, height));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        config::Config,
        surface::recording::{DrawOp, RecordingSurface},
    };

    fn params() -> Params {
        Params::new(&Config::default(), Size::new(800, 600))
    }

    #[test]
    fn axes_cross_in_the_middle() {
        let [horizontal, vertical] = axes(Size::new(800, 600));
        assert_eq!(horizontal, (Coord::new(0, 300), Coord::new(800, 300)));
        assert_eq!(vertical, (Coord::new(400, 0), Coord::new(400, 600)));
    }

    #[test]
    fn default_period_lines() {
        // the line at 800 is right of the last column so it's skipped
        assert_eq!(period_line_xs(&params()), vec![0, 200, 400, 600]);
    }

    #[test]
    fn period_lines_symmetric_and_in_bounds() {
        for width in [640, 800, 1366, 1921] {
            for time_scale in [2.0, 4.0, 6.0, 12.0] {
                let mut params = params();
                params.viewport = Size::new(width, 480);
                params.time_scale = time_scale;
                let xs = period_line_xs(&params);
                let centre_x = width as i32 / 2;
                assert!(xs.contains(&centre_x));
                for &x in &xs {
                    assert!(x >= 0 && x < width as i32);
                    let mirrored = 2 * centre_x - x;
                    if mirrored < width as i32 {
                        assert!(xs.contains(&mirrored), "{x} {mirrored}");
                    }
                }
            }
        }
    }

    #[test]
    fn render_grid_order_and_colours() {
        let params = params();
        let palette = Palette::default();
        let mut surface = RecordingSurface::default();
        render_grid(&mut surface, &params, &palette);
        assert_eq!(surface.ops[0], DrawOp::SetDrawColor(palette.axes));
        assert_eq!(
            surface.ops[3],
            DrawOp::SetDrawColor(palette.period_lines)
        );
        let lines = surface.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2 + 4);
        assert_eq!(lines[2], (Coord::new(0, 0), Coord::new(0, 600)));
        assert_eq!(lines[5], (Coord::new(600, 0), Coord::new(600, 600)));
    }
}
