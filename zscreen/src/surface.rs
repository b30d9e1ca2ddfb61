/// Something screens can be drawn on.
///
/// The manager owns one host surface (usually the window) and creates
/// an offscreen surface of the same size for every registered screen.
/// Each frame the current screen's surface is blitted onto the host.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Creates a new offscreen surface compatible with this one.
    fn offscreen(&self, size: (u32, u32)) -> Self
    where
        Self: Sized;

    /// Draws `source` onto `self` with its top-left corner at `pos`.
    fn blit(&mut self, source: &Self, pos: (f32, f32));
}
