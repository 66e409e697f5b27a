use coord_2d::Coord;
use rgb_int::Rgb24;

/// Something that can be drawn on with a current draw colour, in the style of an SDL renderer.
/// Coordinates outside the drawable area are silently ignored by implementations.
pub trait Surface {
    fn set_draw_color(&mut self, color: Rgb24);
    /// Fills the entire surface with the current draw colour.
    fn clear(&mut self);
    fn draw_point(&mut self, coord: Coord);
    fn draw_line(&mut self, start: Coord, end: Coord);
    fn present(&mut self);
}
