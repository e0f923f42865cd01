//! Camera module for the viewport transform.

use crate::geometry::approx_eq;
use kurbo::{Affine, Size, Vec2};

/// Camera holds the view state of a rendered tree.
///
/// Layout space is centered in the viewport, then panned by `offset`,
/// then zoomed by `scale`. The order never depends on which input changed last.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Viewport size in output units.
    pub size: Size,
    /// Zoom factor.
    pub scale: f64,
    /// Pan offset, in viewport units.
    pub offset: Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl Camera {
    /// Create a camera for a viewport of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            ..Self::default()
        }
    }

    /// Resize the viewport.
    ///
    /// Returns `false` (and changes nothing) when the size is unchanged
    /// within floating-point tolerance.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if approx_eq(width, self.size.width) && approx_eq(height, self.size.height) {
            return false;
        }
        self.size = Size::new(width, height);
        true
    }

    /// Center of the viewport.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// Get the affine transform for rendering.
    ///
    /// This transform converts layout coordinates to viewport coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.center()) * Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Same transform as [`Camera::transform`], as an SVG `transform` attribute value.
    pub fn to_svg_transform(&self) -> String {
        let center = self.center();
        format!(
            "translate({}, {}) translate({}, {}) scale({}, {})",
            center.x, center.y, self.offset.x, self.offset.y, self.scale, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_default_camera() {
        let camera = Camera::new(800.0, 600.0);
        assert_eq!(camera.offset, Vec2::ZERO);
        assert!((camera.scale - 1.0).abs() < f64::EPSILON);
        assert_eq!(camera.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_resize_short_circuit() {
        let mut camera = Camera::new(200.0, 100.0);
        assert!(!camera.resize(200.0, 100.0));
        assert!(!camera.resize(200.0 + 1e-9, 100.0));
        assert!(camera.resize(201.0, 100.0));
        assert_eq!(camera.size, Size::new(201.0, 100.0));
    }

    #[test]
    fn test_transform_composition() {
        let mut camera = Camera::new(200.0, 100.0);
        camera.scale = 2.0;
        camera.offset = Vec2::new(5.0, -3.0);

        let expected = Affine::translate((100.0, 50.0))
            * Affine::translate((5.0, -3.0))
            * Affine::scale(2.0);
        let actual = camera.transform().as_coeffs();
        for (a, e) in actual.iter().zip(expected.as_coeffs()) {
            assert!((a - e).abs() < 1e-10);
        }
        assert_eq!(actual, [2.0, 0.0, 0.0, 2.0, 105.0, 47.0]);

        let origin = camera.transform() * Point::ZERO;
        assert!((origin.x - 105.0).abs() < 1e-10);
        assert!((origin.y - 47.0).abs() < 1e-10);
    }

    #[test]
    fn test_svg_transform() {
        let mut camera = Camera::new(200.0, 100.0);
        camera.scale = 2.0;
        camera.offset = Vec2::new(5.0, -3.0);
        assert_eq!(
            camera.to_svg_transform(),
            "translate(100, 50) translate(5, -3) scale(2, 2)"
        );
    }
}
