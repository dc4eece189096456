//! Error types for spintop.
//!
//! Nothing here is recoverable: every error ends the animation and is
//! reported by `main`.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running the animation.
#[derive(Debug)]
pub enum AnimationError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// A frame could not be presented.
    Present(wgpu::SurfaceError),
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            AnimationError::Window(e) => write!(f, "Failed to create window: {}", e),
            AnimationError::Gpu(e) => write!(f, "GPU error: {}", e),
            AnimationError::Present(e) => write!(f, "Failed to present frame: {}", e),
        }
    }
}

impl std::error::Error for AnimationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnimationError::EventLoop(e) => Some(e),
            AnimationError::Window(e) => Some(e),
            AnimationError::Gpu(e) => Some(e),
            AnimationError::Present(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for AnimationError {
    fn from(e: winit::error::EventLoopError) -> Self {
        AnimationError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for AnimationError {
    fn from(e: winit::error::OsError) -> Self {
        AnimationError::Window(e)
    }
}

impl From<GpuError> for AnimationError {
    fn from(e: GpuError) -> Self {
        AnimationError::Gpu(e)
    }
}

impl From<wgpu::SurfaceError> for AnimationError {
    fn from(e: wgpu::SurfaceError) -> Self {
        AnimationError::Present(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_no_adapter_message() {
        let err = AnimationError::from(GpuError::NoAdapter);
        assert!(err.to_string().starts_with("GPU error: No compatible GPU adapter"));
        assert!(err.source().is_some());
        assert!(GpuError::NoAdapter.source().is_none());
    }

    #[test]
    fn test_present_error_wraps_surface_error() {
        let err = AnimationError::from(wgpu::SurfaceError::OutOfMemory);
        assert!(matches!(err, AnimationError::Present(wgpu::SurfaceError::OutOfMemory)));
        assert!(err.to_string().starts_with("Failed to present frame"));
    }
}
