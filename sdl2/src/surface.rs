use coord_2d::{Coord, Size};
use fourier_plt_core::Surface;
use rgb_int::Rgb24;
use sdl2::{pixels::Color, rect::Point, render::Canvas, video::Window};

/// A `Surface` that draws to an SDL canvas. Drawing errors are ignored, which also covers points
/// outside the canvas.
pub struct CanvasSurface {
    canvas: Canvas<Window>,
}

impl CanvasSurface {
    pub fn new(canvas: Canvas<Window>) -> Self {
        Self { canvas }
    }

    /// Size of the window in screen coordinates.
    pub fn window_size(&self) -> Size {
        let (width, height) = self.canvas.window().size();
        Size::new(width, height)
    }

    pub fn maximize(&mut self) {
        self.canvas.window_mut().maximize();
    }

    /// Makes drawing coordinates map one to one onto the window at its given size.
    pub fn set_logical_size(&mut self, size: Size) {
        if let Err(e) = self.canvas.set_logical_size(size.width(), size.height())
        {
            log::warn!(
                "Failed to set logical size to {}x{}: {}",
                size.width(),
                size.height(),
                e
            );
        }
    }
}

fn coord_to_point(Coord { x, y }: Coord) -> Point {
    Point::new(x, y)
}

impl Surface for CanvasSurface {
    fn set_draw_color(&mut self, color: Rgb24) {
        self.canvas.set_draw_color(Color::RGB(color.r, color.g, color.b));
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn draw_point(&mut self, coord: Coord) {
        let _ = self.canvas.draw_point(coord_to_point(coord));
    }

    fn draw_line(&mut self, start: Coord, end: Coord) {
        let _ = self
            .canvas
            .draw_line(coord_to_point(start), coord_to_point(end));
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
