//! Animation builder and frame driver.

use std::time::Duration;

use winit::event_loop::{ControlFlow, EventLoop};

use crate::canvas::{AxisBounds, Canvas};
use crate::error::AnimationError;
use crate::time::FRAME_INTERVAL;
use crate::top::{AnimationState, Top, TopConfig};
use crate::window::App;

/// Default window size in logical pixels.
pub const WINDOW_SIZE: (u32, u32) = (800, 800);

/// Everything a run needs, model and presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    pub top: TopConfig,
    pub frame_interval: Duration,
    pub bounds: AxisBounds,
    pub window_size: (u32, u32),
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            top: TopConfig::default(),
            frame_interval: FRAME_INTERVAL,
            bounds: AxisBounds::default(),
            window_size: WINDOW_SIZE,
        }
    }
}

/// Advance `top` by one frame and draw it on `canvas`.
///
/// Returns the state after the frame. A finished top is left untouched and
/// nothing is drawn.
pub fn drive_frame<C: Canvas>(top: &mut Top, canvas: &mut C) -> Result<AnimationState, C::Error> {
    if top.state() == AnimationState::Done {
        return Ok(AnimationState::Done);
    }

    let state = top.step();
    log::debug!("Frame {}/{}: velocity {:.2}", top.frame(), top.frames(), top.velocity());

    canvas.render(top.surface(), top.velocity())?;

    if state == AnimationState::Done {
        log::info!("Spinning top stopped after {} frames", top.frame());
    }
    Ok(state)
}

/// Play every remaining frame of `top` on `canvas` back to back, without pacing.
pub fn run_to_end<C: Canvas>(top: &mut Top, canvas: &mut C) -> Result<(), C::Error> {
    while drive_frame(top, canvas)? == AnimationState::Running {}
    Ok(())
}

/// A spinning top animation.
///
/// Use method chaining to configure, then call `.run()` to open the window.
///
/// ```ignore
/// use spintop::Animation;
///
/// Animation::new().run()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Animation {
    settings: AnimationSettings,
}

impl Animation {
    /// Create an animation with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of frames to play.
    pub fn with_frames(mut self, frames: u32) -> Self {
        self.settings.top.frames = frames;
        self
    }

    /// Set the starting velocity.
    pub fn with_initial_velocity(mut self, velocity: f64) -> Self {
        self.settings.top.initial_velocity = velocity;
        self
    }

    /// Set the velocity lost per frame.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.settings.top.decay = decay;
        self
    }

    /// Set the number of `u` (around) and `v` (base to apex) samples.
    pub fn with_grid(mut self, u_samples: usize, v_samples: usize) -> Self {
        self.settings.top.u_samples = u_samples;
        self.settings.top.v_samples = v_samples;
        self
    }

    /// Set the per-frame precession (about z) and nutation (about y) angles, in radians.
    pub fn with_rotation(mut self, precession: f64, nutation: f64) -> Self {
        self.settings.top.precession = precession;
        self.settings.top.nutation = nutation;
        self
    }

    /// Set the pause after each frame.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.settings.frame_interval = interval;
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.settings.window_size = (width, height);
        self
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    /// Build the top this animation would play.
    pub fn top(&self) -> Top {
        Top::new(self.settings.top)
    }

    /// Open the window and play the animation. Blocks until the window is closed.
    pub fn run(self) -> Result<(), AnimationError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App::new(self.settings);
        event_loop.run_app(&mut app)?;

        match app.take_error() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
