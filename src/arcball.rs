use anyhow::{ensure, Result};
use log::debug;
use nalgebra::{Matrix4, Point2, Quaternion, Unit, UnitQuaternion, Vector3};

/// Minimum norm accepted when normalizing a rotation increment or a
/// constrained sphere point. Anything below is a degenerate pair
/// (coincident/antipodal points, point parallel to the constraint axis).
const MIN_NORM: f32 = 1e-6;

/// Axis a drag gesture may be constrained to rotate about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn unit(self) -> Unit<Vector3<f32>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }

    /// In-plane direction used when a constrained point collapses onto the axis
    fn fallback(self) -> Unit<Vector3<f32>> {
        match self {
            Axis::X => Vector3::z_axis(),
            Axis::Y => Vector3::z_axis(),
            Axis::Z => Vector3::x_axis(),
        }
    }
}

/// A virtual trackball: turns 2D pointer gestures over a viewport into an
/// accumulated 3D rotation
pub struct ArcBall {
    center: Point2<f32>,
    radius: f32,
    orientation: UnitQuaternion<f32>,
    anchor: Option<Unit<Vector3<f32>>>,
    constraint: Option<Axis>,
}

impl ArcBall {
    /// Create a controller over the trackball disk at `center` with the given
    /// screen-space `radius`
    pub fn new(center: Point2<f32>, radius: f32) -> Result<Self> {
        validate_radius(radius)?;
        Ok(Self {
            center,
            radius,
            orientation: UnitQuaternion::identity(),
            anchor: None,
            constraint: None,
        })
    }

    /// Begin a gesture at the given screen position
    pub fn press(&mut self, x: f32, y: f32) {
        self.anchor = Some(self.mouse_to_sphere(x, y));
    }

    /// Continue a gesture. The rotation carrying the anchor onto the new
    /// position is composed onto the orientation, and the anchor rolls
    /// forward so each move contributes a small, well-conditioned increment.
    /// Ignored while no gesture is in flight.
    pub fn drag(&mut self, x: f32, y: f32) {
        let anchor = match self.anchor {
            Some(anchor) => anchor,
            None => return,
        };
        let point = self.mouse_to_sphere(x, y);
        self.orientation = rotation_between(&anchor, &point) * self.orientation;
        self.orientation.renormalize();
        self.anchor = Some(point);
    }

    /// End the gesture. The accumulated orientation persists.
    pub fn release(&mut self) {
        self.anchor = None;
    }

    /// Return the orientation to identity and end any gesture in flight
    pub fn reset(&mut self) {
        debug!("arcball reset to identity");
        self.orientation = UnitQuaternion::identity();
        self.anchor = None;
    }

    /// Replace the viewport geometry, e.g. after a host resize. A gesture in
    /// flight keeps its anchor; later moves project through the new geometry.
    pub fn set_viewport(&mut self, center: Point2<f32>, radius: f32) -> Result<()> {
        validate_radius(radius)?;
        self.center = center;
        self.radius = radius;
        Ok(())
    }

    /// Constrain gestures to rotate about `axis` only, or clear with `None`
    pub fn constrain(&mut self, axis: Option<Axis>) {
        if self.constraint != axis {
            debug!("arcball constraint: {:?}", axis);
            self.constraint = axis;
        }
    }

    pub fn constraint(&self) -> Option<Axis> {
        self.constraint
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn center(&self) -> Point2<f32> {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Accumulated rotation, renormalized against floating drift
    pub fn rotation(&self) -> UnitQuaternion<f32> {
        UnitQuaternion::new_normalize(self.orientation.into_inner())
    }

    /// Accumulated rotation as a column-major homogeneous matrix
    pub fn matrix(&self) -> Matrix4<f32> {
        self.rotation().to_homogeneous()
    }

    /// Project a screen position onto the unit sphere model: front hemisphere
    /// inside the trackball disk, clamped to the equator outside it
    pub fn mouse_to_sphere(&self, x: f32, y: f32) -> Unit<Vector3<f32>> {
        let nx = (x - self.center.x) / self.radius;
        let ny = (y - self.center.y) / self.radius;
        let d2 = nx * nx + ny * ny;
        let v = if d2 <= 1.0 {
            Vector3::new(nx, ny, (1.0 - d2).sqrt())
        } else {
            let d = d2.sqrt();
            Vector3::new(nx / d, ny / d, 0.0)
        };
        match self.constraint {
            Some(axis) => constrain_to(v, axis),
            None => Unit::new_normalize(v),
        }
    }
}

/// Rotation carrying `from` onto `to`. Built from the dot/cross relation:
/// `(1 + from·to, from×to)` normalized is the half-angle quaternion, with no
/// arccos involved. Degenerate pairs collapse to the identity.
fn rotation_between(from: &Unit<Vector3<f32>>, to: &Unit<Vector3<f32>>) -> UnitQuaternion<f32> {
    let axis = from.cross(to.as_ref());
    let align = from.dot(to.as_ref());
    Unit::try_new(Quaternion::from_parts(1.0 + align, axis), MIN_NORM)
        .unwrap_or_else(UnitQuaternion::identity)
}

/// Flatten a sphere point into the plane perpendicular to `axis`
fn constrain_to(v: Vector3<f32>, axis: Axis) -> Unit<Vector3<f32>> {
    let normal = axis.unit();
    let flat = v - normal.into_inner() * v.dot(normal.as_ref());
    Unit::try_new(flat, MIN_NORM).unwrap_or_else(|| axis.fallback())
}

fn validate_radius(radius: f32) -> Result<()> {
    ensure!(
        radius.is_finite() && radius > 0.0,
        "trackball radius must be positive and finite, got {}",
        radius
    );
    Ok(())
}
