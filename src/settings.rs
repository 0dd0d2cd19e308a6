use crate::arcball::ArcBall;
use anyhow::Result;
use nalgebra::Point2;

/// Fraction of the viewport width used for the default trackball radius
pub const DEFAULT_RADIUS_SCALE: f32 = 0.8;

/// Construction settings for an [`ArcBall`]. Center and radius are optional
/// and resolved against the viewport size once, at `build`.
pub struct ArcBallSettings {
    width: f32,
    height: f32,
    center: Option<Point2<f32>>,
    radius: Option<f32>,
}

impl ArcBallSettings {
    /// Settings over a viewport of the given size, with defaults for
    /// everything else
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: None,
            radius: None,
        }
    }

    /// Place the trackball at an explicit screen position instead of the
    /// viewport center
    pub fn center(mut self, x: f32, y: f32) -> Self {
        self.center = Some(Point2::new(x, y));
        self
    }

    /// Use an explicit trackball radius instead of the width-derived default
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Resolve defaults and build the controller. Fails on a degenerate
    /// radius (explicit or derived from a degenerate viewport).
    pub fn build(self) -> Result<ArcBall> {
        let center = self
            .center
            .unwrap_or_else(|| Point2::new(self.width / 2.0, self.height / 2.0));
        let radius = self.radius.unwrap_or(self.width * DEFAULT_RADIUS_SCALE);
        ArcBall::new(center, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_from_viewport() {
        let ball = ArcBallSettings::new(400.0, 300.0).build().unwrap();
        assert_eq!(ball.center(), Point2::new(200.0, 150.0));
        assert_eq!(ball.radius(), 320.0);
    }

    #[test]
    fn test_explicit_fields_override_defaults() {
        let ball = ArcBallSettings::new(800.0, 600.0)
            .center(400.0, 300.0)
            .radius(240.0)
            .build()
            .unwrap();
        assert_eq!(ball.center(), Point2::new(400.0, 300.0));
        assert_eq!(ball.radius(), 240.0);
    }

    #[test]
    fn test_degenerate_radius_fails_fast() {
        assert!(ArcBallSettings::new(800.0, 600.0).radius(0.0).build().is_err());
        assert!(ArcBallSettings::new(800.0, 600.0).radius(-1.0).build().is_err());
    }

    #[test]
    fn test_zero_width_viewport_without_explicit_radius_fails() {
        assert!(ArcBallSettings::new(0.0, 600.0).build().is_err());
        assert!(ArcBallSettings::new(0.0, 600.0).radius(100.0).build().is_ok());
    }
}
