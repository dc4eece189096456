//! Native window driving the animation.
//!
//! The event loop sleeps until the next frame is due, advances the top by one
//! frame and draws it. Once the run is done it only redraws on request, so
//! the last frame stays on screen until the window is closed.

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow},
    window::{Window, WindowId},
};

use crate::animation::{drive_frame, AnimationSettings};
use crate::canvas::{frame_title, Canvas, TITLE};
use crate::error::AnimationError;
use crate::gpu::GpuState;
use crate::shape::Surface;
use crate::time::FrameClock;
use crate::top::{AnimationState, Top};

/// The window together with the GPU state drawing into it.
pub struct WindowCanvas {
    window: Arc<Window>,
    gpu_state: GpuState,
}

impl WindowCanvas {
    pub fn new(window: Arc<Window>, gpu_state: GpuState) -> Self {
        Self { window, gpu_state }
    }

    /// Draw whatever was last uploaded.
    ///
    /// A lost or outdated swapchain is reconfigured and drawn once more; a
    /// timeout drops the frame. Any other failure is returned.
    pub fn redraw(&mut self) -> Result<(), wgpu::SurfaceError> {
        match self.gpu_state.draw(&self.window) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu_state.reconfigure();
                self.gpu_state.draw(&self.window)
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timed out, skipping frame");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Let the label overlay track size and scale factor changes.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        self.gpu_state.handle_window_event(&self.window, event);
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.gpu_state.resize(new_size);
        self.window.request_redraw();
    }
}

impl Canvas for WindowCanvas {
    type Error = wgpu::SurfaceError;

    fn render(&mut self, surface: &Surface, velocity: f64) -> Result<(), Self::Error> {
        self.gpu_state.upload_surface(surface);
        self.window.set_title(&frame_title(velocity));
        self.redraw()
    }
}

pub(crate) struct App {
    settings: AnimationSettings,
    top: Top,
    clock: Option<FrameClock>,
    canvas: Option<WindowCanvas>,
    error: Option<AnimationError>,
}

impl App {
    pub(crate) fn new(settings: AnimationSettings) -> Self {
        Self {
            top: Top::new(settings.top),
            settings,
            clock: None,
            canvas: None,
            error: None,
        }
    }

    /// The error that stopped the event loop, if any.
    pub(crate) fn take_error(&mut self) -> Option<AnimationError> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AnimationError) {
        self.error = Some(error);
        event_loop.exit();
    }

    fn create_canvas(&self, event_loop: &ActiveEventLoop) -> Result<WindowCanvas, AnimationError> {
        let (width, height) = self.settings.window_size;
        let window_attrs = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let grid = self.top.grid();
        let gpu_state = pollster::block_on(GpuState::new(
            window.clone(),
            grid.rows(),
            grid.cols(),
            self.settings.bounds,
        ))?;

        Ok(WindowCanvas::new(window, gpu_state))
    }

    fn schedule(&self, event_loop: &ActiveEventLoop) {
        match (self.top.state(), &self.clock) {
            (AnimationState::Running, Some(clock)) => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(clock.next_frame()));
            }
            _ => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.canvas.is_some() {
            return;
        }

        match self.create_canvas(event_loop) {
            Ok(canvas) => {
                log::info!(
                    "Window ready, playing {} frames every {:?}",
                    self.top.frames(),
                    self.settings.frame_interval
                );
                self.canvas = Some(canvas);
                self.clock = Some(FrameClock::new(self.settings.frame_interval, Instant::now()));
                self.schedule(event_loop);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(canvas) = &mut self.canvas {
            canvas.handle_window_event(&event);
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(canvas) = &mut self.canvas {
                    canvas.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let result = match &mut self.canvas {
                    Some(canvas) => canvas.redraw(),
                    None => Ok(()),
                };
                if let Err(e) = result {
                    self.fail(event_loop, e.into());
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(canvas), Some(clock)) = (&mut self.canvas, &mut self.clock) else {
            return;
        };

        if self.top.state() == AnimationState::Running && clock.is_due(Instant::now()) {
            if let Err(e) = drive_frame(&mut self.top, canvas) {
                self.fail(event_loop, e.into());
                return;
            }
            if let Some(fps) = clock.tick(Instant::now()) {
                log::debug!("Animation running at {:.1} fps", fps);
            }
        }

        self.schedule(event_loop);
    }
}
