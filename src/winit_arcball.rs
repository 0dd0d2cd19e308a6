use crate::arcball::{ArcBall, Axis};
use crate::settings::DEFAULT_RADIUS_SCALE;
use log::{debug, warn};
use nalgebra::{Matrix4, Point2, UnitQuaternion};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};

/// Drives an [`ArcBall`] from winit window events. Left drag rotates, holding
/// X/Y/Z constrains the rotation axis, resizes re-derive default geometry.
/// Starts inactive; the host enables it with `set_active`.
pub struct WinitArcBall {
    inner: ArcBall,
    active: bool,
    left_is_clicked: bool,
    last_mouse_position: Option<(f64, f64)>,
}

impl WinitArcBall {
    pub fn new(inner: ArcBall) -> Self {
        Self {
            inner,
            active: false,
            left_is_clicked: false,
            last_mouse_position: None,
        }
    }

    /// Whether events are forwarded to the controller at all
    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            debug!("arcball adapter active: {}", active);
            self.active = active;
        }
        if !active {
            self.left_is_clicked = false;
            self.inner.release();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Handle a window event; returns true if the event was consumed
    pub fn handle_events(&mut self, event: &WindowEvent) -> bool {
        if !self.active {
            return false;
        }
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let &PhysicalPosition { x, y } = position;
                if self.left_is_clicked {
                    self.inner.drag(x as f32, y as f32);
                }
                self.last_mouse_position = Some((x, y));
                self.left_is_clicked
            }
            WindowEvent::MouseInput { state, button, .. } => match button {
                MouseButton::Left => {
                    match state {
                        ElementState::Pressed => {
                            self.left_is_clicked = true;
                            if let Some((x, y)) = self.last_mouse_position {
                                self.inner.press(x as f32, y as f32);
                            }
                        }
                        ElementState::Released => {
                            self.left_is_clicked = false;
                            self.inner.release();
                        }
                    }
                    true
                }
                _ => false,
            },
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state,
                        virtual_keycode: Some(key),
                        ..
                    },
                ..
            } => match key {
                VirtualKeyCode::X => self.constrain_key(Axis::X, *state),
                VirtualKeyCode::Y => self.constrain_key(Axis::Y, *state),
                VirtualKeyCode::Z => self.constrain_key(Axis::Z, *state),
                _ => false,
            },
            WindowEvent::Resized(size) => {
                let center = Point2::new(size.width as f32 / 2.0, size.height as f32 / 2.0);
                let radius = size.width as f32 * DEFAULT_RADIUS_SCALE;
                // A minimized window reports a zero size; keep the old geometry
                if let Err(err) = self.inner.set_viewport(center, radius) {
                    warn!("keeping previous trackball geometry: {}", err);
                }
                false
            }
            _ => false,
        }
    }

    fn constrain_key(&mut self, axis: Axis, state: ElementState) -> bool {
        match state {
            ElementState::Pressed => self.inner.constrain(Some(axis)),
            ElementState::Released => {
                if self.inner.constraint() == Some(axis) {
                    self.inner.constrain(None);
                }
            }
        }
        true
    }

    pub fn rotation(&self) -> UnitQuaternion<f32> {
        self.inner.rotation()
    }

    pub fn matrix(&self) -> Matrix4<f32> {
        self.inner.matrix()
    }

    pub fn inner(&self) -> &ArcBall {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut ArcBall {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ArcBallSettings;

    #[test]
    fn test_starts_inactive() {
        let arcball = WinitArcBall::new(ArcBallSettings::new(800.0, 600.0).build().unwrap());
        assert!(!arcball.is_active());
    }

    #[test]
    fn test_deactivation_ends_gesture_in_flight() {
        let mut arcball = WinitArcBall::new(ArcBallSettings::new(800.0, 600.0).build().unwrap());
        arcball.set_active(true);
        arcball.inner_mut().press(400.0, 300.0);
        arcball.set_active(false);
        assert!(!arcball.inner().is_dragging());
    }

    #[test]
    fn test_matrix_passthrough_matches_inner() {
        let mut arcball = WinitArcBall::new(ArcBallSettings::new(800.0, 600.0).build().unwrap());
        arcball.inner_mut().press(400.0, 300.0);
        arcball.inner_mut().drag(500.0, 340.0);
        assert_eq!(arcball.matrix(), arcball.inner().matrix());
        assert_eq!(arcball.rotation(), arcball.inner().rotation());
    }
}
