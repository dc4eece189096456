//! # spintop - Spinning Top Animation
//!
//! A cone-shaped "spinning top" that winds down over a fixed number of frames,
//! drawn in a native window with wgpu.
//!
//! ## Quick Start
//!
//! ```ignore
//! use spintop::prelude::*;
//!
//! fn main() -> Result<(), AnimationError> {
//!     spintop::logging::init();
//!     Animation::new().run()
//! }
//! ```
//!
//! ## How a frame is made
//!
//! Every frame the [`Top`]:
//!
//! 1. loses `0.5` velocity (never below zero),
//! 2. regenerates its cone from scratch, with the base radius scaled by
//!    `velocity / 100`,
//! 3. rotates the fresh cone once by `Rz(0.1) · Ry(0.05)`,
//!
//! and the result is handed to a [`Canvas`]. Because the cone is rebuilt
//! before rotating, the displayed orientation never accumulates: each frame is
//! one fixed step away from the upright cone.
//!
//! After 200 frames the top is [`Done`](AnimationState::Done) and the window
//! keeps showing the last frame until it is closed.
//!
//! ## Without a window
//!
//! [`drive_frame`] and [`run_to_end`] accept any [`Canvas`], so a run can be
//! replayed headless:
//!
//! ```ignore
//! let mut top = Top::default();
//! run_to_end(&mut top, &mut my_canvas)?;
//! assert_eq!(top.velocity(), 0.0);
//! ```

mod animation;
mod canvas;
pub mod error;
mod gpu;
pub mod logging;
pub mod rotation;
pub mod shape;
pub mod time;
mod top;
mod window;

pub use animation::{drive_frame, run_to_end, Animation, AnimationSettings, WINDOW_SIZE};
pub use canvas::{frame_title, AxisBounds, Canvas, TITLE};
pub use error::{AnimationError, GpuError};
pub use glam::{DMat3, DVec3};
pub use rotation::Rotator;
pub use shape::{ParamGrid, Surface};
pub use top::{AnimationState, Top, TopConfig, FRAME_COUNT, INITIAL_VELOCITY, VELOCITY_DECAY};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use spintop::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animation::{drive_frame, run_to_end, Animation};
    pub use crate::canvas::{AxisBounds, Canvas};
    pub use crate::error::AnimationError;
    pub use crate::rotation::Rotator;
    pub use crate::shape::{ParamGrid, Surface};
    pub use crate::top::{AnimationState, Top, TopConfig};
    pub use crate::{DMat3, DVec3};
}
