use glam::Vec2;

/// Canvas-wide pointer tracking.
///
/// Holds the last pointer position in screen pixels together with the
/// viewport size, so motion code can read normalized device coordinates
/// without knowing about the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    screen: Vec2,
    viewport: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl PointerState {
    /// Pointer centred in a viewport of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        let viewport = Vec2::new(width.max(1.0), height.max(1.0));
        Self {
            screen: viewport * 0.5,
            viewport,
        }
    }

    /// Update the viewport size; the pointer keeps its pixel position.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    /// Record a new pointer position in screen pixels.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.screen = Vec2::new(x, y);
    }

    /// Last pointer position in screen pixels.
    #[must_use]
    pub fn screen(&self) -> Vec2 {
        self.screen
    }

    /// Pointer in normalized device coordinates: `-1..1` on both axes,
    /// +Y up, clamped to the viewport.
    #[must_use]
    pub fn ndc(&self) -> Vec2 {
        let unit = self.screen / self.viewport;
        Vec2::new(unit.x * 2.0 - 1.0, 1.0 - unit.y * 2.0)
            .clamp(Vec2::NEG_ONE, Vec2::ONE)
    }
}
