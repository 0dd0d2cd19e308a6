pub mod arcball;
pub use arcball::{ArcBall, Axis};

pub mod settings;
pub use settings::ArcBallSettings;

#[cfg(feature = "winit")]
pub mod winit_arcball;
#[cfg(feature = "winit")]
pub use winit_arcball::WinitArcBall;
#[cfg(feature = "winit")]
pub use winit;

pub use nalgebra;

pub mod prelude {
    pub use super::{ArcBall, ArcBallSettings, Axis};
    #[cfg(feature = "winit")]
    pub use super::WinitArcBall;
}
