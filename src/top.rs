//! Spinning top state and its per-frame update.

use crate::rotation::{Rotator, NUTATION, PRECESSION};
use crate::shape::{ParamGrid, Surface, U_SAMPLES, V_SAMPLES};

/// Number of frames in one run.
pub const FRAME_COUNT: u32 = 200;

/// Velocity at the start of a run.
pub const INITIAL_VELOCITY: f64 = 100.0;

/// Velocity lost per frame.
pub const VELOCITY_DECAY: f64 = 0.5;

/// Model parameters for a [`Top`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopConfig {
    pub frames: u32,
    pub initial_velocity: f64,
    pub decay: f64,
    pub u_samples: usize,
    pub v_samples: usize,
    pub precession: f64,
    pub nutation: f64,
}

impl Default for TopConfig {
    fn default() -> Self {
        Self {
            frames: FRAME_COUNT,
            initial_velocity: INITIAL_VELOCITY,
            decay: VELOCITY_DECAY,
            u_samples: U_SAMPLES,
            v_samples: V_SAMPLES,
            precession: PRECESSION,
            nutation: NUTATION,
        }
    }
}

/// Whether the animation still has frames to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Done,
}

/// The spinning top: velocity, current surface and frame index.
///
/// Each [`step`](Top::step) regenerates the surface from scratch and then
/// rotates it once, so the displayed orientation is always a single
/// rotation away from the canonical cone. Rotations never accumulate.
#[derive(Debug, Clone)]
pub struct Top {
    grid: ParamGrid,
    rotator: Rotator,
    frames: u32,
    decay: f64,
    frame: u32,
    velocity: f64,
    surface: Surface,
}

impl Top {
    pub fn new(config: TopConfig) -> Self {
        let grid = ParamGrid::new(config.u_samples, config.v_samples);
        let surface = grid.generate(config.initial_velocity);
        Self {
            rotator: Rotator::new(config.precession, config.nutation),
            frames: config.frames,
            decay: config.decay,
            frame: 0,
            velocity: config.initial_velocity,
            surface,
            grid,
        }
    }

    /// Current velocity.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Frames played so far.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Total frames in the run.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Surface as of the last step (unrotated before the first step).
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn grid(&self) -> &ParamGrid {
        &self.grid
    }

    pub fn rotator(&self) -> &Rotator {
        &self.rotator
    }

    pub fn state(&self) -> AnimationState {
        if self.frame < self.frames {
            AnimationState::Running
        } else {
            AnimationState::Done
        }
    }

    /// Advance one frame: decay, regenerate, rotate.
    ///
    /// Does nothing once the run is [`Done`](AnimationState::Done).
    pub fn step(&mut self) -> AnimationState {
        if self.state() == AnimationState::Done {
            return AnimationState::Done;
        }

        self.velocity = (self.velocity - self.decay).max(0.0);
        self.surface = self.grid.generate(self.velocity);
        self.rotator.apply(&mut self.surface);
        self.frame += 1;

        self.state()
    }
}

impl Default for Top {
    fn default() -> Self {
        Self::new(TopConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_top() {
        let top = Top::default();
        assert_eq!(top.velocity(), 100.0);
        assert_eq!(top.frame(), 0);
        assert_eq!(top.frames(), 200);
        assert_eq!(top.state(), AnimationState::Running);
    }

    #[test]
    fn test_velocity_law() {
        let mut top = Top::default();
        for f in 1..=250u32 {
            top.step();
            let expected = (100.0 - 0.5 * f.min(200) as f64).max(0.0);
            assert_eq!(top.velocity(), expected, "frame {}", f);
            assert!(top.velocity() >= 0.0);
        }
    }

    #[test]
    fn test_state_transitions() {
        let mut top = Top::default();
        for _ in 0..199 {
            assert_eq!(top.step(), AnimationState::Running);
        }
        assert_eq!(top.step(), AnimationState::Done);
        assert_eq!(top.frame(), 200);
        assert_eq!(top.velocity(), 0.0);

        // Further steps are ignored.
        let surface = top.surface().clone();
        assert_eq!(top.step(), AnimationState::Done);
        assert_eq!(top.frame(), 200);
        assert_eq!(top.surface(), &surface);
    }

    #[test]
    fn test_rotation_does_not_accumulate() {
        let config = TopConfig {
            decay: 0.0,
            ..TopConfig::default()
        };
        let mut top = Top::new(config);
        top.step();
        let first = top.surface().clone();
        for _ in 0..10 {
            top.step();
        }
        assert_eq!(top.surface(), &first);
    }

    #[test]
    fn test_velocity_clamps_at_zero() {
        let config = TopConfig {
            initial_velocity: 1.0,
            decay: 0.75,
            ..TopConfig::default()
        };
        let mut top = Top::new(config);
        top.step();
        assert_eq!(top.velocity(), 0.25);
        top.step();
        assert_eq!(top.velocity(), 0.0);
    }

    #[test]
    fn test_zero_frame_run_is_done() {
        let top = Top::new(TopConfig {
            frames: 0,
            ..TopConfig::default()
        });
        assert_eq!(top.state(), AnimationState::Done);
    }
}
