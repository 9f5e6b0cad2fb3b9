use serde::{Deserialize, Serialize};

use gravis_core::{BBox, Point};

/// The canvas window onto layout coordinates for one render frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Center X in layout coordinates.
    pub center_x: f64,
    /// Center Y in layout coordinates.
    pub center_y: f64,
    /// Zoom level (pixels per layout unit).
    pub zoom: f64,
    /// Canvas width in pixels.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
}

impl Viewport {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            zoom: 1.0,
            canvas_width,
            canvas_height,
        }
    }

    /// Center on a bounding box and zoom to fit it with a 10% margin.
    /// A degenerate box is centered without changing the zoom.
    pub fn fit_bbox(&mut self, bbox: &BBox) {
        let center = bbox.center();
        self.center_x = center.x;
        self.center_y = center.y;

        let width = bbox.width();
        let height = bbox.height();
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let zoom_x = self.canvas_width / width * 0.9;
        let zoom_y = self.canvas_height / height * 0.9;
        self.zoom = zoom_x.min(zoom_y);
    }

    /// Convert layout X coordinate to screen coordinate.
    pub fn layout_to_screen_x(&self, layout_x: f64) -> f64 {
        (layout_x - self.center_x) * self.zoom + self.canvas_width / 2.0
    }

    /// Convert layout Y coordinate to screen coordinate. Screen Y grows
    /// downward, layout Y upward.
    pub fn layout_to_screen_y(&self, layout_y: f64) -> f64 {
        (self.center_y - layout_y) * self.zoom + self.canvas_height / 2.0
    }

    /// The visible region in layout coordinates.
    pub fn visible_bounds(&self) -> BBox {
        let half_w = self.canvas_width / (2.0 * self.zoom);
        let half_h = self.canvas_height / (2.0 * self.zoom);
        BBox::new(
            Point::new(self.center_x - half_w, self.center_y - half_h),
            Point::new(self.center_x + half_w, self.center_y + half_h),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_bbox_centers_and_zooms() {
        let mut vp = Viewport::new(800.0, 600.0);
        let bbox = BBox::new(Point::new(-1.0, -1.0), Point::new(1.0, 1.0));
        vp.fit_bbox(&bbox);
        assert!((vp.center_x - 0.0).abs() < 1e-10);
        assert!((vp.center_y - 0.0).abs() < 1e-10);
        // Limited by the shorter canvas axis: 600 / 2 * 0.9.
        assert!((vp.zoom - 270.0).abs() < 1e-10);
    }

    #[test]
    fn test_fit_degenerate_bbox_keeps_zoom() {
        let mut vp = Viewport::new(800.0, 600.0);
        let p = Point::new(3.0, 4.0);
        vp.fit_bbox(&BBox::new(p, p));
        assert!((vp.center_x - 3.0).abs() < 1e-10);
        assert!((vp.zoom - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_layout_to_screen_flips_y() {
        let vp = Viewport::new(800.0, 600.0);
        assert!((vp.layout_to_screen_x(0.0) - 400.0).abs() < 1e-10);
        assert!((vp.layout_to_screen_y(0.0) - 300.0).abs() < 1e-10);
        // Above-center layout points land in the upper half of the canvas.
        assert!(vp.layout_to_screen_y(1.0) < 300.0);
    }

    #[test]
    fn test_visible_bounds() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.zoom = 2.0;
        let bounds = vp.visible_bounds();
        assert!((bounds.width() - 400.0).abs() < 1e-10);
        assert!((bounds.height() - 300.0).abs() < 1e-10);
    }
}
